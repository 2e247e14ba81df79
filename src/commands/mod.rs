pub mod add;
pub mod init;
pub mod list;
pub mod log;
pub mod report;

use crate::db::db::Db;
use crate::libs::{
    formatter::format_minutes,
    ledger::{Ledger, Outcome},
    messages::Message,
    view::View,
};
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create the ledger database and default configuration")]
    Init(init::InitArgs),
    #[command(about = "Add a project", long_about = add::ABOUT, arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Log work or time spent on a task", long_about = log::ABOUT, arg_required_else_help = true)]
    Log(log::LogArgs),
    #[command(about = "List projects or logged work", long_about = list::ABOUT, arg_required_else_help = true)]
    List(list::ListArgs),
    #[command(about = "Report logged work grouped by project", long_about = report::ABOUT, arg_required_else_help = true)]
    Report(report::ReportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Command-line task logging, management and reporting", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Report(args) => report::cmd(args),
        }
    }
}

/// The instant every command treats as "now".
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn open_ledger() -> Result<Ledger> {
    Ok(Ledger::new(Db::new()?))
}

fn render(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::ProjectAdded { id, label } => msg_success!(Message::ProjectAdded(label, id)),
        Outcome::Logged { task_id, project: None } => msg_success!(Message::TaskLogged(task_id)),
        Outcome::Logged {
            task_id,
            project: Some(project),
        } => msg_success!(Message::TaskLoggedToProject(task_id, project)),
        Outcome::TimeAccumulated { task_id, total_minutes } => msg_success!(Message::TimeLogged {
            task_id,
            total: format_minutes(total_minutes).unwrap_or_default(),
        }),
        Outcome::Projects(projects) if projects.is_empty() => msg_info!(Message::NoProjectsFound),
        Outcome::Projects(projects) => {
            View::projects(&projects).printstd();
        }
        Outcome::Tasks(tasks) if tasks.is_empty() => msg_info!(Message::NoTasksFound),
        Outcome::Tasks(tasks) => {
            View::tasks(&tasks).printstd();
        }
        Outcome::Report(buckets) if buckets.is_empty() => msg_info!(Message::NoTasksFound),
        Outcome::Report(buckets) => msg_print!(View::report(&buckets)),
    }

    Ok(())
}
