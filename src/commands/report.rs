use super::{now, open_ledger, render};
use crate::libs::grammar::{parse, Verb};
use anyhow::Result;
use clap::Args;

pub const ABOUT: &str = "Report logged work grouped by project, with the time logged per project.

Takes the same forms as 'list':
  qtask report work in last 30 days
  qtask report work between 2024-01-01 and 2024-01-31
  qtask report annotation work yesterday

Tasks without a project are reported under 'Unassigned'.";

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(required = true, num_args = 1.., help = "What to report on, e.g. work in last 30 days")]
    tokens: Vec<String>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let action = parse(Verb::Report, &report_args.tokens)?;
    let outcome = open_ledger()?.execute(action, now())?;

    render(outcome)
}
