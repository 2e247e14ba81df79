use super::{now, open_ledger, render};
use crate::libs::{
    grammar::{parse, Verb},
    messages::Message,
};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

pub const ABOUT: &str = "Add a project against which work can be logged.

  qtask add project rna_seq
  qtask add project 'T. parva'

'work' is reserved and can't be used as a project label.";

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true, num_args = 1.., help = "project <label>")]
    tokens: Vec<String>,
}

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let action = parse(Verb::Add, &add_args.tokens)?;
    if let Some(label) = add_args.tokens.get(1) {
        msg_print!(Message::ProjectAdding(label.clone()));
    }
    let outcome = open_ledger()?.execute(action, now())?;

    render(outcome)
}
