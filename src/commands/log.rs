use super::{now, open_ledger, render};
use crate::libs::grammar::{parse, Verb};
use anyhow::Result;
use clap::Args;

pub const ABOUT: &str = "Log work, optionally against a project and at a given date, or add time to a task.

Forms:
  qtask log <label>
  qtask log <label> to <project>
  qtask log <label> on <date>
  qtask log <label> to <project> on <date>
  qtask log <label> on <date> to <project>
  qtask log <amount> <minutes|hours> against task <task_id>

Dates are YYYY-MM-DD with an optional HH:MM[:SS] time. Quote labels containing spaces.";

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(required = true, num_args = 1.., help = "What was done, e.g. \"Fixed parser\" to annotation on 2024-01-01")]
    tokens: Vec<String>,
}

pub fn cmd(log_args: LogArgs) -> Result<()> {
    let action = parse(Verb::Log, &log_args.tokens)?;
    let outcome = open_ledger()?.execute(action, now())?;

    render(outcome)
}
