//! Study plan (scheduler output) model.
//!
//! A plan is an ordered sequence of day entries, each an ordered sequence
//! of hour allocations. Plans are produced fresh by each scheduling call
//! and never written back onto the entities they were computed from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single hour allocation: study `topic` of `subject` for `hours` today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Owning subject name.
    pub subject: String,
    /// Topic name.
    pub topic: String,
    /// Hours to study, rounded to one decimal.
    pub hours: f64,
    /// Topic priority at plan time (denormalized for rendering).
    pub priority: u8,
    /// Hours the topic still needs after this allocation.
    pub remaining_hours: f64,
}

/// All allocations for one calendar day, in allocation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// The simulated day.
    pub date: NaiveDate,
    /// Allocations in the order they drained the day's capacity.
    pub entries: Vec<Allocation>,
}

impl DayPlan {
    /// Creates an empty day entry.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    /// Total hours allocated on this day.
    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|a| a.hours).sum()
    }
}

/// A complete day-by-day study plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Day entries in chronological order. Days with no allocations are
    /// omitted, so dates need not be contiguous.
    pub days: Vec<DayPlan>,
}

impl StudyPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of day entries.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Whether the plan contains no allocations at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total hours allocated across all days.
    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(DayPlan::total_hours).sum()
    }

    /// Total hours allocated to one topic across all days.
    pub fn hours_for_topic(&self, subject: &str, topic: &str) -> f64 {
        self.days
            .iter()
            .flat_map(|d| d.entries.iter())
            .filter(|a| a.subject == subject && a.topic == topic)
            .map(|a| a.hours)
            .sum()
    }

    /// Date of the first allocation to the given topic, if any.
    pub fn first_allocation_day(&self, subject: &str, topic: &str) -> Option<NaiveDate> {
        self.days
            .iter()
            .find(|d| {
                d.entries
                    .iter()
                    .any(|a| a.subject == subject && a.topic == topic)
            })
            .map(|d| d.date)
    }

    /// The plan truncated to its first `days` entries.
    pub fn first_days(&self, days: usize) -> StudyPlan {
        StudyPlan {
            days: self.days.iter().take(days).cloned().collect(),
        }
    }
}
