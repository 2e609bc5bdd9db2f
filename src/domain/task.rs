use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Task identifier (milliseconds since the epoch at creation, or a seed id)
pub type TaskId = u64;

/// Error returned when a stored or typed date is not `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{0}', expected YYYY-MM-DD")]
pub struct DateParseError(pub String);

/// A calendar date kept exactly as written (`YYYY-MM-DD`).
///
/// Days up to 31 are accepted in every month and roll over into the next
/// month when converted with [`TaskDate::to_naive`], so values such as
/// `2026-02-29` survive a save/load cycle unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TaskDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (1..=31).contains(&day) && (0..=9999).contains(&year) {
            Some(Self { year, month, day })
        } else {
            None
        }
    }

    /// Resolve to a real calendar date, rolling overflowing days forward
    pub fn to_naive(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(self.day - 1))))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Format for display as DD<sep>MM<sep>YYYY
    pub fn display_with(&self, separator: char) -> String {
        format_date(self.to_naive(), separator)
    }
}

impl From<NaiveDate> for TaskDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for TaskDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DateParseError(s.to_string());
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3
            || parts[0].len() != 4
            || parts[1].len() != 2
            || parts[2].len() != 2
            || !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(err());
        }

        let year = parts[0].parse().map_err(|_| err())?;
        let month = parts[1].parse().map_err(|_| err())?;
        let day = parts[2].parse().map_err(|_| err())?;
        Self::new(year, month, day).ok_or_else(err)
    }
}

impl TryFrom<String> for TaskDate {
    type Error = DateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskDate> for String {
    fn from(date: TaskDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Format a date as two-digit day, two-digit month, four-digit year
pub fn format_date(date: NaiveDate, separator: char) -> String {
    format!(
        "{:02}{sep}{:02}{sep}{:04}",
        date.day(),
        date.month(),
        date.year(),
        sep = separator
    )
}

/// A single dated to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Due date
    pub date: TaskDate,
    pub text: String,
    pub completed: bool,
    /// Set iff `completed` is true
    pub completed_date: Option<TaskDate>,
}

impl Task {
    pub fn new(id: TaskId, date: TaskDate, text: String) -> Self {
        Self {
            id,
            date,
            text,
            completed: false,
            completed_date: None,
        }
    }

    /// Flip completion, stamping or clearing the completion date
    pub fn toggle(&mut self, today: TaskDate) {
        self.completed = !self.completed;
        self.completed_date = if self.completed { Some(today) } else { None };
    }

    /// Bring `completed_date` in line with `completed`.
    ///
    /// A completed task without a completion date gets its due date; an open
    /// task loses any stray completion date. Returns whether anything changed.
    pub fn normalize(&mut self) -> bool {
        match (self.completed, self.completed_date) {
            (true, None) => {
                self.completed_date = Some(self.date);
                true
            }
            (false, Some(_)) => {
                self.completed_date = None;
                true
            }
            _ => false,
        }
    }
}

/// Pick an id for a new task: the creation timestamp, bumped past every
/// existing id when the clock would collide or run backwards.
///
/// When the largest id is already `u64::MAX`, the smallest unused id is
/// taken instead.
pub fn next_task_id(tasks: &[Task], now_millis: i64) -> TaskId {
    let candidate = u64::try_from(now_millis).unwrap_or(0);
    match tasks.iter().map(|t| t.id).max() {
        Some(max) if candidate <= max => max
            .checked_add(1)
            .unwrap_or_else(|| smallest_unused_id(tasks)),
        _ => candidate,
    }
}

fn smallest_unused_id(tasks: &[Task]) -> TaskId {
    let used: BTreeSet<TaskId> = tasks.iter().map(|t| t.id).collect();
    // A list shorter than u64::MAX always leaves a gap
    (0..=TaskId::MAX).find(|id| !used.contains(id)).unwrap_or(0)
}
