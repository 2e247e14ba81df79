//! Command grammar.
//!
//! qtask commands read like short sentences (`log "Fixed parser" to annotation
//! on 2024-01-01`, `list work in last 2 weeks`). Each verb owns a flat table of
//! [`Pattern`] rows. A row matches when the token count equals its arity and
//! every anchor keyword sits at its fixed position; rows are tried in order
//! and the first match builds the [`Action`]. There is no tokenizing, quoting
//! or fuzzy matching here: clap hands over the already split arguments and
//! anchors compare case-sensitively.
//!
//! Adding a phrasing means adding a row. No two rows of a table can match the
//! same token sequence.
//!
//! ```rust
//! use qtask::libs::grammar::{parse, Action, Verb};
//!
//! let tokens: Vec<String> = ["Reviewed PR", "to", "annotation"].iter().map(|t| t.to_string()).collect();
//! match parse(Verb::Log, &tokens).unwrap() {
//!     Action::Log(entry) => assert_eq!(entry.project.as_deref(), Some("annotation")),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use super::error::{LedgerError, LedgerResult};
use super::range::{resolve_absolute, resolve_relative, TimeRange};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Date layouts accepted for `on <date>`.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

const TIME_UNITS: &str = "expected minutes or hours";

/// The command word in front of the tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    Log,
    /// `grouped` is set by `list --group`.
    List { grouped: bool },
    /// Same grammar as `list`, always grouped by project.
    Report,
}

impl Verb {
    pub fn name(&self) -> &'static str {
        match self {
            Verb::Add => "add",
            Verb::Log => "log",
            Verb::List { .. } => "list",
            Verb::Report => "report",
        }
    }

    fn grouping(&self) -> Grouping {
        match self {
            Verb::Report | Verb::List { grouped: true } => Grouping::ByProject,
            _ => Grouping::Flat,
        }
    }

    fn patterns(&self) -> &'static [Pattern] {
        match self {
            Verb::Add => ADD_PATTERNS,
            Verb::Log => LOG_PATTERNS,
            Verb::List { .. } | Verb::Report => LIST_PATTERNS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Flat,
    ByProject,
}

/// A time window as written by the user, before "now" is known.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeSpec {
    All,
    Today,
    Yesterday,
    Last(Duration),
    Between(TimeRange),
}

impl RangeSpec {
    /// Turns the phrase into concrete bounds relative to `now`.
    pub fn resolve(&self, now: NaiveDateTime) -> Option<TimeRange> {
        match self {
            RangeSpec::All => None,
            RangeSpec::Today => Some(TimeRange::today(now)),
            RangeSpec::Yesterday => Some(TimeRange::yesterday(now)),
            RangeSpec::Last(duration) => Some(TimeRange::last(*duration, now)),
            RangeSpec::Between(range) => Some(range.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub label: String,
    pub project: Option<String>,
    /// `None` means "now".
    pub at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskQuery {
    pub project: Option<String>,
    pub range: RangeSpec,
    pub grouping: Grouping,
}

/// A fully parsed command, ready to run against the ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddProject { label: String },
    Log(LogEntry),
    Accumulate { task_id: i64, minutes: f64 },
    ListProjects,
    ListTasks(TaskQuery),
}

type Build = fn(&[String], Grouping) -> LedgerResult<Action>;

/// One row of a verb's grammar table.
pub struct Pattern {
    pub arity: usize,
    /// `(position, keyword)` pairs that must match literally.
    pub anchors: &'static [(usize, &'static str)],
    build: Build,
}

impl Pattern {
    pub fn matches(&self, tokens: &[String]) -> bool {
        tokens.len() == self.arity && self.anchors.iter().all(|(position, keyword)| tokens[*position] == *keyword)
    }
}

/// Picks the first row of the verb's table matching `tokens` and builds its action.
pub fn parse(verb: Verb, tokens: &[String]) -> LedgerResult<Action> {
    verb.patterns()
        .iter()
        .find(|pattern| pattern.matches(tokens))
        .ok_or_else(|| LedgerError::Syntax(verb.name().to_string()))
        .and_then(|pattern| (pattern.build)(tokens, verb.grouping()))
}

pub static ADD_PATTERNS: &[Pattern] = &[
    // add project <label>
    Pattern { arity: 2, anchors: &[(0, "project")], build: add_project },
];

pub static LOG_PATTERNS: &[Pattern] = &[
    // log <label>
    Pattern { arity: 1, anchors: &[], build: log_label },
    // log <label> to <project>
    Pattern { arity: 3, anchors: &[(1, "to")], build: log_to_project },
    // log <label> on <date>
    Pattern { arity: 3, anchors: &[(1, "on")], build: log_on_date },
    // log <amount> <unit> against task <id>
    Pattern { arity: 5, anchors: &[(2, "against"), (3, "task")], build: accumulate },
    // log <label> to <project> on <date>
    Pattern { arity: 5, anchors: &[(1, "to"), (3, "on")], build: log_to_project_on_date },
    // log <label> on <date> to <project>
    Pattern { arity: 5, anchors: &[(1, "on"), (3, "to")], build: log_on_date_to_project },
];

pub static LIST_PATTERNS: &[Pattern] = &[
    // list projects
    Pattern { arity: 1, anchors: &[(0, "projects")], build: list_projects },
    // list work
    Pattern { arity: 1, anchors: &[(0, "work")], build: list_all },
    // list <project> work
    Pattern { arity: 2, anchors: &[(1, "work")], build: list_project },
    // list work today
    Pattern { arity: 2, anchors: &[(0, "work"), (1, "today")], build: list_today },
    // list work yesterday
    Pattern { arity: 2, anchors: &[(0, "work"), (1, "yesterday")], build: list_yesterday },
    // list work in last <n> <unit>
    Pattern { arity: 5, anchors: &[(1, "in"), (2, "last")], build: list_last },
    // list work between <date> and <date>
    Pattern { arity: 5, anchors: &[(1, "between"), (3, "and")], build: list_between },
    // list <project> work today
    Pattern { arity: 3, anchors: &[(1, "work"), (2, "today")], build: list_project_today },
    // list <project> work yesterday
    Pattern { arity: 3, anchors: &[(1, "work"), (2, "yesterday")], build: list_project_yesterday },
    // list <project> work in last <n> <unit>
    Pattern { arity: 6, anchors: &[(1, "work"), (2, "in"), (3, "last")], build: list_project_last },
    // list <project> work between <date> and <date>
    Pattern { arity: 6, anchors: &[(1, "work"), (2, "between"), (4, "and")], build: list_project_between },
];

fn add_project(t: &[String], _: Grouping) -> LedgerResult<Action> {
    Ok(Action::AddProject { label: t[1].clone() })
}

fn log_label(t: &[String], _: Grouping) -> LedgerResult<Action> {
    log(&t[0], None, None)
}

fn log_to_project(t: &[String], _: Grouping) -> LedgerResult<Action> {
    log(&t[0], Some(&t[2]), None)
}

fn log_on_date(t: &[String], _: Grouping) -> LedgerResult<Action> {
    log(&t[0], None, Some(&t[2]))
}

fn log_to_project_on_date(t: &[String], _: Grouping) -> LedgerResult<Action> {
    log(&t[0], Some(&t[2]), Some(&t[4]))
}

fn log_on_date_to_project(t: &[String], _: Grouping) -> LedgerResult<Action> {
    log(&t[0], Some(&t[4]), Some(&t[2]))
}

fn log(label: &str, project: Option<&String>, at: Option<&String>) -> LedgerResult<Action> {
    let at = match at {
        Some(literal) => Some(validate_date(literal)?),
        None => None,
    };

    Ok(Action::Log(LogEntry {
        label: label.to_string(),
        project: project.cloned(),
        at,
    }))
}

fn accumulate(t: &[String], _: Grouping) -> LedgerResult<Action> {
    let amount: f64 = t[0].parse().map_err(|_| LedgerError::InvalidNumber(t[0].clone()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(LedgerError::InvalidNumber(t[0].clone()));
    }

    let minutes = match t[1].as_str() {
        "minutes" => amount,
        "hours" => amount * 60.0,
        other => return Err(LedgerError::unknown_unit(other, TIME_UNITS)),
    };
    let task_id = t[4].parse().map_err(|_| LedgerError::InvalidNumber(t[4].clone()))?;

    Ok(Action::Accumulate { task_id, minutes })
}

fn list_projects(_: &[String], _: Grouping) -> LedgerResult<Action> {
    Ok(Action::ListProjects)
}

fn list_all(_: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(None, RangeSpec::All, grouping)
}

fn list_project(t: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(Some(&t[0]), RangeSpec::All, grouping)
}

fn list_today(_: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(None, RangeSpec::Today, grouping)
}

fn list_yesterday(_: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(None, RangeSpec::Yesterday, grouping)
}

fn list_last(t: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(None, last(&t[3], &t[4])?, grouping)
}

fn list_between(t: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(None, RangeSpec::Between(resolve_absolute(&t[2], &t[4])), grouping)
}

fn list_project_today(t: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(Some(&t[0]), RangeSpec::Today, grouping)
}

fn list_project_yesterday(t: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(Some(&t[0]), RangeSpec::Yesterday, grouping)
}

fn list_project_last(t: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(Some(&t[0]), last(&t[4], &t[5])?, grouping)
}

fn list_project_between(t: &[String], grouping: Grouping) -> LedgerResult<Action> {
    list(Some(&t[0]), RangeSpec::Between(resolve_absolute(&t[3], &t[5])), grouping)
}

fn list(project: Option<&String>, range: RangeSpec, grouping: Grouping) -> LedgerResult<Action> {
    Ok(Action::ListTasks(TaskQuery {
        project: project.cloned(),
        range,
        grouping,
    }))
}

fn last(quantity: &str, unit: &str) -> LedgerResult<RangeSpec> {
    let quantity: u32 = quantity.parse().map_err(|_| LedgerError::InvalidNumber(quantity.to_string()))?;
    Ok(RangeSpec::Last(resolve_relative(i64::from(quantity), unit)?))
}

/// Checks that a date literal is one SQLite's `datetime()` can read; the
/// literal itself is stored untouched.
///
/// chrono also accepts unpadded fields (`2024-1-5`) that SQLite rejects, so
/// the literal must survive a parse and re-format in the same layout.
fn validate_date(literal: &str) -> LedgerResult<String> {
    let date_only = NaiveDate::parse_from_str(literal, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == literal)
        .map(|date| date.year());
    let readable = date_only
        .or_else(|| {
            DATE_TIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(literal, format)
                    .ok()
                    .filter(|at| at.format(format).to_string() == literal)
                    .map(|at| at.year())
            })
        })
        .is_some_and(|year| (0..=9999).contains(&year));

    if readable {
        Ok(literal.to_string())
    } else {
        Err(LedgerError::InvalidDate(literal.to_string()))
    }
}
