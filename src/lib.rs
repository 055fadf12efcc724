//! Deadline-aware study planner.
//!
//! Allocates daily study time across subjects and topics — each with a
//! priority, difficulty, and exam date — producing a day-by-day plan
//! until everything is covered or the exams have passed.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Topic`, `StudyPlan`,
//!   `DayPlan`, `Allocation`
//! - **`scheduler`**: The greedy planner (`StudyScheduler`,
//!   `PlanRequest`) and its scoring functions
//! - **`storage`**: JSON persistence for subject lists (`FileStorage`)
//! - **`validation`**: Collection-level integrity checks
//! - **`error`**: Crate error type
//!
//! # Design
//!
//! Planning is a pure function over a snapshot of the subject list:
//! simulation bookkeeping lives inside the scheduler and is never
//! written back onto the entities. Applying a plan — logging actual
//! hours with `Topic::add_hours` or `Topic::mark_complete` — is a
//! separate, explicit step for the caller.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod storage;
pub mod validation;

pub use error::{Error, Result};
