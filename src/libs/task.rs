//! Task entity types and due-date/time reconciliation.
//!
//! The store keeps a task's deadline as two nullable columns (`due_date`,
//! `due_time`) but collaborators only ever see the combined [`Due`] value.
//! Merging and splitting that pair lives exclusively here so no call site
//! re-derives it; the same goes for the start/end pairing rules behind
//! [`ScheduleBlock`].

use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A task's deadline as collaborators see it: either a whole day or an
/// exact moment within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    /// Due on a date, no particular time of day.
    Date(NaiveDate),
    /// Due at an exact date and time.
    Moment(NaiveDateTime),
}

impl Due {
    /// Builds the combined due value from caller input, rejecting a time
    /// of day that has no date to attach to.
    pub fn from_parts(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Result<Option<Due>> {
        if time.is_some() && date.is_none() {
            return Err(Error::validation(Message::DueTimeWithoutDate));
        }
        Ok(Self::merge(date, time))
    }

    /// Merges the two stored columns back into the combined value.
    ///
    /// A stored time with no date has no meaning and is dropped.
    pub fn merge(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Option<Due> {
        match (date, time) {
            (Some(date), Some(time)) => Some(Due::Moment(date.and_time(time))),
            (Some(date), None) => Some(Due::Date(date)),
            (None, _) => None,
        }
    }

    /// The calendar date this deadline falls on.
    pub fn date(&self) -> NaiveDate {
        match self {
            Due::Date(date) => *date,
            Due::Moment(moment) => moment.date(),
        }
    }

    /// The time-of-day component, when one was set.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Due::Date(_) => None,
            Due::Moment(moment) => Some(moment.time()),
        }
    }
}

/// A concrete block of working time a task has been placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleBlock {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScheduleBlock {
    /// Builds the block from caller input.
    ///
    /// `start` and `end` must be both present or both absent; a present
    /// pair must span a positive duration.
    pub fn from_parts(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Result<Option<Self>> {
        match (start, end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => {
                if end <= start {
                    return Err(Error::validation(Message::ScheduleNotPositive));
                }
                Ok(Some(Self { start, end }))
            }
            _ => Err(Error::validation(Message::ScheduleIncomplete)),
        }
    }

    /// Merges the two stored columns back into a block.
    ///
    /// Only a fully present pair counts as scheduled.
    pub fn merge(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self { start, end }),
            _ => None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// A unit of work belonging to exactly one semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub semester_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due: Option<Due>,
    pub schedule: Option<ScheduleBlock>,
    pub completed: bool,
}

impl Task {
    /// A task is scheduled when it has a start/end block on the calendar.
    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }
}

/// Write-side value for task creation and full-row updates.
///
/// Due and schedule fields arrive as the four raw optionals a form
/// produces; accessors validate and fold them into [`Due`] and
/// [`ScheduleBlock`] before anything touches the store.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub semester_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl NewTask {
    pub fn new(semester_id: i64, title: &str, description: &str) -> Self {
        NewTask {
            semester_id,
            title: title.to_string(),
            description: description.to_string(),
            due_date: None,
            due_time: None,
            start: None,
            end: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    ScheduledOnly,
    UnscheduledOnly,
}
