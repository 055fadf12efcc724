//! Greedy study scheduler and its scoring functions.
//!
//! # Algorithm
//!
//! `StudyScheduler` is a greedy, deadline-aware heuristic: each simulated
//! day it ranks every subject's active topic by an urgency score and
//! drains a shared daily capacity pool in score order. It is not optimal
//! — no LP/ILP machinery — but produces fast, predictable plans.
//!
//! # Scoring
//!
//! `scoring` holds the urgency and allocation formulas; they blend
//! inverse days-to-deadline, topic priority, and subject difficulty,
//! much like critical-ratio dispatching in shop scheduling.

mod planner;
pub mod scoring;

pub use planner::{PlanRequest, StudyScheduler};
