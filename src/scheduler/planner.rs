//! Greedy day-by-day study planner.
//!
//! # Algorithm
//!
//! For each simulated day, in order:
//! 1. Drop subjects whose exam date is on or before the current day.
//! 2. Take each remaining subject's first incomplete topic in insertion
//!    order — one candidate per subject, later topics stay blocked until
//!    the active one is exhausted.
//! 3. Stable-sort candidates by allocation score, descending.
//! 4. Walk the sorted list once, draining the shared daily capacity;
//!    no re-scoring within the day.
//! 5. Record the day only if something was allocated, then advance.
//!
//! Progress during simulation is tracked in planner-local bookkeeping,
//! never written back to the entities: planning is a pure function over a
//! snapshot of the subject list. A hard cap of 365 simulated days bounds
//! degenerate inputs such as zero-capacity days.
//!
//! # Complexity
//! O(d * s log s) where d = simulated days, s = subjects.

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

use super::scoring;
use crate::models::{Allocation, DayPlan, StudyPlan, Subject};

/// Hard cap on simulated days.
const MAX_PLAN_DAYS: usize = 365;

/// Simulated remainders at or below this are treated as exhausted, so a
/// sub-rounding sliver cannot block a subject's next topic.
const HOURS_EPS: f64 = 0.05;

/// Input container for planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// First simulated day. `None` resolves to today at plan time.
    pub start_date: Option<NaiveDate>,
    /// Shared study capacity per day, in hours.
    pub hours_per_day: f64,
}

impl PlanRequest {
    /// Creates a request starting today with the default 4-hour capacity.
    pub fn new() -> Self {
        Self {
            start_date: None,
            hours_per_day: 4.0,
        }
    }

    /// Sets the first simulated day.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the daily capacity in hours.
    pub fn with_hours_per_day(mut self, hours_per_day: f64) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// One subject's active topic on a simulated day.
#[derive(Debug, Clone)]
struct Candidate {
    subject_idx: usize,
    topic_idx: usize,
    days_until_exam: i64,
    remaining: f64,
    score: f64,
}

/// Greedy deadline-aware scheduler over a subject list.
///
/// Produces a [`StudyPlan`] until every incomplete topic is fully
/// scheduled, every exam date has passed, or the day cap is reached.
/// Degenerate inputs (no subjects, nothing incomplete, non-positive
/// capacity) yield an empty plan rather than an error — an empty plan is
/// always a valid answer to "what should I study".
///
/// # Example
///
/// ```
/// use chrono::{Duration, Local};
/// use study_schedule::models::{Subject, Topic};
/// use study_schedule::scheduler::{PlanRequest, StudyScheduler};
///
/// let today = Local::now().date_naive();
/// let mut math = Subject::new("Math", today + Duration::days(10), 4).unwrap();
/// math.add_topic(Topic::new("Calculus", 5, 10.0).unwrap());
///
/// let request = PlanRequest::new().with_start_date(today + Duration::days(1));
/// let plan = StudyScheduler::new().plan(&[math], &request);
/// assert_eq!(plan.days[0].entries[0].topic, "Calculus");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudyScheduler;

impl StudyScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Produces the full day-by-day plan for `subjects`.
    pub fn plan(&self, subjects: &[Subject], request: &PlanRequest) -> StudyPlan {
        let start = request
            .start_date
            .unwrap_or_else(|| Local::now().date_naive());
        debug!(
            subjects = subjects.len(),
            %start,
            hours_per_day = request.hours_per_day,
            "planning study schedule"
        );

        // Hours handed out during simulation, keyed by (subject, topic)
        // index. The entities themselves are never touched.
        let mut simulated: HashMap<(usize, usize), f64> = HashMap::new();
        let mut plan = StudyPlan::new();
        let mut current = start;

        for _ in 0..MAX_PLAN_DAYS {
            let candidates = self.daily_candidates(subjects, &simulated, current);
            if candidates.is_empty() {
                break;
            }

            let mut day = DayPlan::new(current);
            let mut capacity = request.hours_per_day;
            let pool_size = candidates.len();

            for candidate in &candidates {
                if capacity <= 0.0 {
                    break;
                }
                let hours = scoring::round_hours(scoring::suggested_hours(
                    candidate.remaining,
                    candidate.days_until_exam,
                    capacity,
                    pool_size,
                ));
                if hours <= 0.0 {
                    continue;
                }

                let subject = &subjects[candidate.subject_idx];
                let topic = &subject.topics[candidate.topic_idx];
                day.entries.push(Allocation {
                    subject: subject.name.clone(),
                    topic: topic.name.clone(),
                    hours,
                    priority: topic.priority,
                    remaining_hours: (candidate.remaining - hours).max(0.0),
                });

                *simulated
                    .entry((candidate.subject_idx, candidate.topic_idx))
                    .or_insert(0.0) += hours;
                capacity -= hours;
            }

            if !day.entries.is_empty() {
                plan.days.push(day);
            }
            current += Duration::days(1);
        }

        debug!(
            days = plan.day_count(),
            total_hours = plan.total_hours(),
            "study schedule complete"
        );
        plan
    }

    /// The full plan truncated to its first `days` entries.
    ///
    /// Truncation applies to the output only; the simulation horizon is
    /// unchanged, so fewer entries than requested may come back.
    pub fn next_days(&self, subjects: &[Subject], request: &PlanRequest, days: usize) -> StudyPlan {
        self.plan(subjects, request).first_days(days)
    }

    /// One candidate per subject still in its exam window: the first
    /// topic in insertion order that is incomplete and has simulated
    /// remaining hours. Sorted by score descending; the sort is stable,
    /// so ties keep input subject order.
    fn daily_candidates(
        &self,
        subjects: &[Subject],
        simulated: &HashMap<(usize, usize), f64>,
        current: NaiveDate,
    ) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for (subject_idx, subject) in subjects.iter().enumerate() {
            if subject.exam_date <= current {
                continue;
            }
            let days_until_exam = (subject.exam_date - current).num_days();

            let active = subject.topics.iter().enumerate().find_map(|(ti, topic)| {
                if topic.completed {
                    return None;
                }
                let handed_out = simulated.get(&(subject_idx, ti)).copied().unwrap_or(0.0);
                let remaining = topic.remaining_hours() - handed_out;
                (remaining > HOURS_EPS).then_some((ti, remaining))
            });

            if let Some((topic_idx, remaining)) = active {
                let priority = subject.topics[topic_idx].priority;
                candidates.push(Candidate {
                    subject_idx,
                    topic_idx,
                    days_until_exam,
                    remaining,
                    score: scoring::allocation_score(days_until_exam, priority, subject.difficulty),
                });
            }
        }

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates
    }
}
