//! Study-planning domain models.
//!
//! Provides the entities the scheduler consumes — [`Subject`] and
//! [`Topic`] — and the plan types it produces — [`StudyPlan`],
//! [`DayPlan`], [`Allocation`].
//!
//! Subjects own their topics; topic insertion order is significant
//! because scheduling is sequential within a subject. Plans are value
//! output: computing one never mutates the entities it was derived from.

mod plan;
mod subject;
mod topic;

pub use plan::{Allocation, DayPlan, StudyPlan};
pub use subject::Subject;
pub use topic::Topic;
