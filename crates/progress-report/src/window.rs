//! Reporting windows: weekdays of this week, months of this year, or the
//! years present in the data.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use progress_core::models::milestone::MilestoneRecord;
use progress_core::models::session::SessionLog;

use crate::error::ReportError;

const WORKDAYS_PER_WEEK: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WindowMode {
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindowMode::Weekly => "weekly",
            WindowMode::Monthly => "monthly",
            WindowMode::Yearly => "yearly",
        })
    }
}

impl FromStr for WindowMode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" => Ok(WindowMode::Weekly),
            "monthly" | "month" => Ok(WindowMode::Monthly),
            "yearly" | "year" => Ok(WindowMode::Yearly),
            _ => Err(ReportError::UnknownMode(s.to_string())),
        }
    }
}

/// One reporting window and the records that fall inside it.
///
/// Buckets are derived on every view and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportingBucket {
    /// `YYYY-MM-DD`, `YYYY-MM` or `YYYY` depending on the mode.
    pub id: String,
    pub label: String,
    pub logs: Vec<SessionLog>,
    pub milestones: Vec<MilestoneRecord>,
    /// Set on monthly buckets with nothing to explore.
    pub disabled: bool,
}

/// Bucket metadata without the records, for bucket pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BucketSummary {
    pub id: String,
    pub label: String,
    pub log_count: usize,
    pub milestone_count: usize,
    pub disabled: bool,
}

impl ReportingBucket {
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty() && self.milestones.is_empty()
    }

    pub fn summary(&self) -> BucketSummary {
        BucketSummary {
            id: self.id.clone(),
            label: self.label.clone(),
            log_count: self.logs.len(),
            milestone_count: self.milestones.len(),
            disabled: self.disabled,
        }
    }
}

/// The reference point for window computations: what "today" is and which
/// time zone turns a record timestamp into a calendar day.
///
/// The default zone is UTC, which puts a record on the same day as the
/// `YYYY-MM-DD` prefix of its ISO-8601 timestamp.
#[derive(Debug, Clone)]
pub struct ReportingCalendar {
    today: Date,
    tz: TimeZone,
}

impl ReportingCalendar {
    pub fn new(today: Date) -> Self {
        Self {
            today,
            tz: TimeZone::UTC,
        }
    }

    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }

    /// A calendar anchored at the current date in `tz`.
    pub fn now_in(tz: TimeZone) -> Self {
        let today = jiff::Timestamp::now().to_zoned(tz.clone()).date();
        Self { today, tz }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// The calendar day a timestamp falls on.
    pub fn day_of(&self, ts: jiff::Timestamp) -> Date {
        ts.to_zoned(self.tz.clone()).date()
    }

    /// Group logs and milestones into the buckets of `mode`.
    pub fn buckets(
        &self,
        logs: &[SessionLog],
        milestones: &[MilestoneRecord],
        mode: WindowMode,
    ) -> Vec<ReportingBucket> {
        match mode {
            WindowMode::Weekly => self.weekly(logs, milestones),
            WindowMode::Monthly => self.monthly(logs, milestones),
            WindowMode::Yearly => self.yearly(logs, milestones),
        }
    }

    /// Find one bucket of `mode` by id.
    pub fn bucket(
        &self,
        logs: &[SessionLog],
        milestones: &[MilestoneRecord],
        mode: WindowMode,
        id: &str,
    ) -> Result<ReportingBucket, ReportError> {
        self.buckets(logs, milestones, mode)
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| ReportError::UnknownBucket {
                mode,
                id: id.to_string(),
            })
    }

    /// Monday through Friday of the current week, latest day first.
    fn weekly(&self, logs: &[SessionLog], milestones: &[MilestoneRecord]) -> Vec<ReportingBucket> {
        let monday = week_monday(self.today);
        let mut buckets: Vec<ReportingBucket> = (0..WORKDAYS_PER_WEEK)
            .map(|offset| {
                let day = monday.saturating_add(offset.days());
                ReportingBucket {
                    id: day.to_string(),
                    label: format!(
                        "{}, {} {}",
                        day.strftime("%A"),
                        day.strftime("%B"),
                        day.day()
                    ),
                    logs: self.select_logs(logs, |d| d == day),
                    milestones: self.select_milestones(milestones, |d| d == day),
                    disabled: false,
                }
            })
            .collect();
        buckets.reverse();
        buckets
    }

    /// All twelve months of the current year in calendar order.
    fn monthly(&self, logs: &[SessionLog], milestones: &[MilestoneRecord]) -> Vec<ReportingBucket> {
        let year = self.today.year();
        (1..=12i8)
            .filter_map(|month| Date::new(year, month, 1).ok())
            .map(|first| {
                let in_month = |d: Date| d.year() == first.year() && d.month() == first.month();
                let mut bucket = ReportingBucket {
                    id: format!("{:04}-{:02}", first.year(), first.month()),
                    label: first.strftime("%B").to_string(),
                    logs: self.select_logs(logs, in_month),
                    milestones: self.select_milestones(milestones, in_month),
                    disabled: false,
                };
                bucket.disabled = bucket.is_empty();
                bucket
            })
            .collect()
    }

    /// Every year with at least one record, latest first. Falls back to the
    /// current year when there are no records at all.
    fn yearly(&self, logs: &[SessionLog], milestones: &[MilestoneRecord]) -> Vec<ReportingBucket> {
        let mut years: BTreeSet<i16> = logs
            .iter()
            .map(|l| self.day_of(l.date).year())
            .chain(milestones.iter().map(|m| self.day_of(m.timestamp).year()))
            .collect();
        if years.is_empty() {
            years.insert(self.today.year());
        }

        years
            .into_iter()
            .rev()
            .map(|year| ReportingBucket {
                id: year.to_string(),
                label: year.to_string(),
                logs: self.select_logs(logs, |d| d.year() == year),
                milestones: self.select_milestones(milestones, |d| d.year() == year),
                disabled: false,
            })
            .collect()
    }

    fn select_logs(&self, logs: &[SessionLog], keep: impl Fn(Date) -> bool) -> Vec<SessionLog> {
        logs.iter()
            .filter(|l| keep(self.day_of(l.date)))
            .cloned()
            .collect()
    }

    fn select_milestones(
        &self,
        milestones: &[MilestoneRecord],
        keep: impl Fn(Date) -> bool,
    ) -> Vec<MilestoneRecord> {
        milestones
            .iter()
            .filter(|m| keep(self.day_of(m.timestamp)))
            .cloned()
            .collect()
    }
}

/// The Monday of the week containing `day`. Sunday belongs to the week that
/// started six days earlier.
pub fn week_monday(day: Date) -> Date {
    let back = match day.weekday() {
        Weekday::Sunday => 6,
        weekday => i64::from(weekday.to_monday_one_offset()) - 1,
    };
    day.saturating_sub(back.days())
}
