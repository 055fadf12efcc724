//! Topic model.
//!
//! A topic is the atomic unit of study work within a subject: a named
//! block of material with a priority, an effort estimate, and accumulated
//! progress.

use std::fmt;

use crate::error::{Error, Result};

/// A unit of study work owned by a [`Subject`](super::Subject).
///
/// Fields are public in keeping with the rest of the models, but two
/// invariants are a caller contract:
///
/// - `completed == true` implies `hours_spent == estimated_hours`
///   (enforced by [`Topic::mark_complete`], which every completion path
///   goes through);
/// - `hours_spent` never exceeds `estimated_hours`.
///
/// Mutate progress through [`add_hours`](Topic::add_hours) /
/// [`mark_complete`](Topic::mark_complete) rather than writing the fields
/// directly and both hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    /// Topic name. Identifies the topic within its subject; scheduling
    /// lookups assume it is unique there (see [`crate::validation`]).
    pub name: String,
    /// Priority 1-5, 5 = most urgent.
    pub priority: u8,
    /// Estimated effort in hours. Strictly positive.
    pub estimated_hours: f64,
    /// Hours of study logged so far.
    pub hours_spent: f64,
    /// Whether the topic is done.
    pub completed: bool,
}

impl Topic {
    /// Creates a topic with no logged progress.
    ///
    /// # Errors
    /// `InvalidArgument` if the name is empty, the priority is outside
    /// 1-5, or `estimated_hours` is not strictly positive. Zero-effort
    /// topics are rejected so progress ratios are always well-defined.
    pub fn new(name: impl Into<String>, priority: u8, estimated_hours: f64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("topic name must not be empty".into()));
        }
        if !(1..=5).contains(&priority) {
            return Err(Error::InvalidArgument(format!(
                "topic priority must be between 1 and 5, got {priority}"
            )));
        }
        if !(estimated_hours > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "estimated hours must be positive, got {estimated_hours}"
            )));
        }
        Ok(Self {
            name,
            priority,
            estimated_hours,
            hours_spent: 0.0,
            completed: false,
        })
    }

    /// Logs study hours against this topic.
    ///
    /// Reaching or exceeding `estimated_hours` completes the topic and
    /// clamps `hours_spent` to the estimate. Calling after completion is
    /// allowed and has no further effect.
    ///
    /// # Errors
    /// `InvalidArgument` if `hours` is negative.
    pub fn add_hours(&mut self, hours: f64) -> Result<()> {
        if hours < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "cannot add negative hours: {hours}"
            )));
        }
        self.hours_spent += hours;
        if self.hours_spent >= self.estimated_hours {
            self.mark_complete();
        }
        Ok(())
    }

    /// Declares the topic done, regardless of hours actually logged.
    ///
    /// `hours_spent` is forced to `estimated_hours` so the completion
    /// invariant holds even when less work was recorded.
    pub fn mark_complete(&mut self) {
        self.completed = true;
        self.hours_spent = self.estimated_hours;
    }

    /// Clears completion state and logged hours. Priority and estimate
    /// are untouched.
    pub fn reset_progress(&mut self) {
        self.completed = false;
        self.hours_spent = 0.0;
    }

    /// Hours still needed to finish this topic (0 when completed).
    pub fn remaining_hours(&self) -> f64 {
        (self.estimated_hours - self.hours_spent).max(0.0)
    }

    /// Progress as a percentage in 0-100.
    pub fn progress_percent(&self) -> f64 {
        if self.completed || self.estimated_hours <= 0.0 {
            return 100.0;
        }
        (self.hours_spent / self.estimated_hours * 100.0).min(100.0)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✓" } else { "✗" };
        write!(
            f,
            "Topic: {} [Priority: {}, Progress: {:.1}%, Hours: {}/{}, {}]",
            self.name,
            self.priority,
            self.progress_percent(),
            self.hours_spent,
            self.estimated_hours,
            status
        )
    }
}
