use super::{now, open_ledger, render};
use crate::libs::grammar::{parse, Verb};
use anyhow::Result;
use clap::Args;

pub const ABOUT: &str = "List projects or logged work.

Forms:
  qtask list projects
  qtask list work [today|yesterday]
  qtask list <project> work [today|yesterday]
  qtask list [<project>] work in last <N> <day(s)|week(s)|year(s)>
  qtask list [<project>] work between <date> and <date>

Bounds are inclusive. A date without a time means midnight, so
'between 2024-01-01 and 2024-01-02' stops at the start of the 2nd.
A year counts as 365 days. Months are not supported, use weeks instead.
Pass --group to bucket the tasks by project.";

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, help = "Group the listed tasks by project")]
    group: bool,

    #[arg(required = true, num_args = 1.., help = "What to list, e.g. work in last 2 weeks")]
    tokens: Vec<String>,
}

pub fn cmd(list_args: ListArgs) -> Result<()> {
    let action = parse(Verb::List { grouped: list_args.group }, &list_args.tokens)?;
    let outcome = open_ledger()?.execute(action, now())?;

    render(outcome)
}
