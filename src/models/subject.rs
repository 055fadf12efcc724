//! Subject model.
//!
//! A subject is a deadline-bound container of topics with a difficulty
//! weight. Topic order is significant: the scheduler studies a subject's
//! topics strictly in insertion order.

use std::fmt;

use chrono::{Local, NaiveDate};

use super::Topic;
use crate::error::{Error, Result};

/// A subject to be studied for, owning its topics.
///
/// `progress` is derived from topic completion and is only as fresh as the
/// last [`update_progress`](Subject::update_progress) call — callers that
/// change a topic's completion state are responsible for invoking it. The
/// exam date is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    /// Subject name.
    pub name: String,
    /// Date of the exam. Scheduling stops at this date.
    pub exam_date: NaiveDate,
    /// Difficulty 1-5, 5 = hardest. Weights the allocation score.
    pub difficulty: u8,
    /// Completion percentage in 0-100, derived from topics.
    pub progress: f64,
    /// Owned topics in insertion order.
    pub topics: Vec<Topic>,
}

impl Subject {
    /// Creates a subject with no topics.
    ///
    /// # Errors
    /// `InvalidArgument` if the name is empty, the difficulty is outside
    /// 1-5, or the exam date is before today.
    pub fn new(name: impl Into<String>, exam_date: NaiveDate, difficulty: u8) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "subject name must not be empty".into(),
            ));
        }
        if !(1..=5).contains(&difficulty) {
            return Err(Error::InvalidArgument(format!(
                "subject difficulty must be between 1 and 5, got {difficulty}"
            )));
        }
        if exam_date < Local::now().date_naive() {
            return Err(Error::InvalidArgument(format!(
                "exam date {exam_date} is in the past"
            )));
        }
        Ok(Self {
            name,
            exam_date,
            difficulty,
            progress: 0.0,
            topics: Vec::new(),
        })
    }

    /// Appends a topic. Insertion order determines scheduling order.
    pub fn add_topic(&mut self, topic: Topic) {
        self.topics.push(topic);
    }

    /// Removes and returns the first topic with the given name.
    ///
    /// # Errors
    /// `NotFound` if no owned topic has that name.
    pub fn remove_topic(&mut self, name: &str) -> Result<Topic> {
        match self.topics.iter().position(|t| t.name == name) {
            Some(idx) => Ok(self.topics.remove(idx)),
            None => Err(Error::NotFound(format!(
                "topic '{name}' not found in subject '{}'",
                self.name
            ))),
        }
    }

    /// Recomputes `progress` from the topic completion ratio.
    ///
    /// Must be called after any mutation that changes a topic's completion
    /// state; progress is not propagated automatically.
    pub fn update_progress(&mut self) {
        if self.topics.is_empty() {
            self.progress = 0.0;
            return;
        }
        let completed = self.topics.iter().filter(|t| t.completed).count();
        self.progress = completed as f64 / self.topics.len() as f64 * 100.0;
    }

    /// Resets every owned topic and the derived progress.
    pub fn reset_progress(&mut self) {
        for topic in &mut self.topics {
            topic.reset_progress();
        }
        self.update_progress();
    }

    /// Index of the first topic in insertion order that is incomplete and
    /// still has remaining hours. This is the only topic the scheduler may
    /// allocate to on a given day; later topics are blocked until it is
    /// exhausted.
    pub fn first_incomplete_topic(&self) -> Option<usize> {
        self.topics
            .iter()
            .position(|t| !t.completed && t.remaining_hours() > 0.0)
    }

    /// Total remaining effort across all incomplete topics, in hours.
    pub fn remaining_hours(&self) -> f64 {
        self.topics
            .iter()
            .filter(|t| !t.completed)
            .map(Topic::remaining_hours)
            .sum()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.progress == 100.0 { "✓" } else { "✗" };
        write!(
            f,
            "Subject: {} [Difficulty: {}, Progress: {:.2}%, Status: {}]",
            self.name, self.difficulty, self.progress, status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn future_date(days: i64) -> NaiveDate {
        Local::now().date_naive() + Duration::days(days)
    }

    fn make_subject() -> Subject {
        let mut subject = Subject::new("Math", future_date(30), 4).unwrap();
        subject.add_topic(Topic::new("Calculus", 5, 10.0).unwrap());
        subject.add_topic(Topic::new("Algebra", 3, 8.0).unwrap());
        subject
    }

    #[test]
    fn test_new_subject() {
        let subject = make_subject();
        assert_eq!(subject.name, "Math");
        assert_eq!(subject.difficulty, 4);
        assert_eq!(subject.progress, 0.0);
        assert_eq!(subject.topics.len(), 2);
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(Subject::new("", future_date(5), 3).is_err());
        assert!(Subject::new("S", future_date(5), 0).is_err());
        assert!(Subject::new("S", future_date(5), 6).is_err());
        assert!(Subject::new("S", future_date(-1), 3).is_err());
    }

    #[test]
    fn test_exam_today_is_allowed() {
        // Only strictly past dates are rejected.
        assert!(Subject::new("S", future_date(0), 3).is_ok());
    }

    #[test]
    fn test_remove_topic() {
        let mut subject = make_subject();
        let removed = subject.remove_topic("Calculus").unwrap();
        assert_eq!(removed.name, "Calculus");
        assert_eq!(subject.topics.len(), 1);
        assert_eq!(subject.topics[0].name, "Algebra");
    }

    #[test]
    fn test_remove_missing_topic() {
        let mut subject = make_subject();
        assert!(matches!(
            subject.remove_topic("Geometry"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_update_progress() {
        let mut subject = make_subject();
        subject.topics[0].mark_complete();
        subject.update_progress();
        assert!((subject.progress - 50.0).abs() < 1e-9);

        subject.topics[1].mark_complete();
        subject.update_progress();
        assert_eq!(subject.progress, 100.0);
    }

    #[test]
    fn test_update_progress_no_topics() {
        let mut subject = Subject::new("Empty", future_date(10), 2).unwrap();
        subject.update_progress();
        assert_eq!(subject.progress, 0.0);
    }

    #[test]
    fn test_progress_is_explicit_contract() {
        // Completing a topic alone does not move the derived progress.
        let mut subject = make_subject();
        subject.topics[0].mark_complete();
        assert_eq!(subject.progress, 0.0);
    }

    #[test]
    fn test_reset_progress() {
        let mut subject = make_subject();
        subject.topics[0].mark_complete();
        subject.topics[1].add_hours(3.0).unwrap();
        subject.update_progress();

        subject.reset_progress();
        assert_eq!(subject.progress, 0.0);
        assert!(subject.topics.iter().all(|t| !t.completed));
        assert!(subject.topics.iter().all(|t| t.hours_spent == 0.0));
    }

    #[test]
    fn test_first_incomplete_topic_follows_insertion_order() {
        let mut subject = make_subject();
        assert_eq!(subject.first_incomplete_topic(), Some(0));

        subject.topics[0].mark_complete();
        assert_eq!(subject.first_incomplete_topic(), Some(1));

        subject.topics[1].mark_complete();
        assert_eq!(subject.first_incomplete_topic(), None);
    }

    #[test]
    fn test_remaining_hours() {
        let mut subject = make_subject();
        assert_eq!(subject.remaining_hours(), 18.0);
        subject.topics[0].add_hours(4.0).unwrap();
        assert_eq!(subject.remaining_hours(), 14.0);
        subject.topics[0].mark_complete();
        assert_eq!(subject.remaining_hours(), 8.0);
    }

    #[test]
    fn test_display() {
        let subject = make_subject();
        let rendered = subject.to_string();
        assert!(rendered.contains("Math"));
        assert!(rendered.contains("Difficulty: 4"));
    }
}
