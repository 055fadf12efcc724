//! JSON persistence for subject lists.
//!
//! The on-disk document is a JSON array of subjects:
//!
//! ```json
//! [
//!   {
//!     "name": "Math",
//!     "exam_date": "2026-10-01",
//!     "difficulty": 4,
//!     "topics": [
//!       {"name": "Calculus", "priority": 5, "estimated_hours": 10.0,
//!        "completed": false, "hours_spent": 2.5}
//!     ]
//!   }
//! ]
//! ```
//!
//! `hours_spent` is the only optional field (defaults to 0). Anything
//! else missing, a wrongly-typed value, or a non-array top level fails
//! the load with `MalformedData` — fields are never silently defaulted.
//! Loaded entities are rebuilt through the validated constructors, so
//! out-of-range values surface as `InvalidArgument`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Subject, Topic};

/// Wire record for a subject. Kept separate from [`Subject`] so the
/// derived `progress` field never reaches the file.
#[derive(Debug, Serialize, Deserialize)]
struct SubjectRecord {
    name: String,
    exam_date: NaiveDate,
    difficulty: u8,
    topics: Vec<TopicRecord>,
}

/// Wire record for a topic.
#[derive(Debug, Serialize, Deserialize)]
struct TopicRecord {
    name: String,
    priority: u8,
    estimated_hours: f64,
    completed: bool,
    #[serde(default)]
    hours_spent: f64,
}

/// Loads and saves subject lists as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the subject list, creating parent directories as needed.
    /// An empty list writes an empty array.
    pub fn save(&self, subjects: &[Subject]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let records: Vec<SubjectRecord> = subjects.iter().map(Self::to_record).collect();
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| Error::MalformedData(format!("failed to serialize subjects: {e}")))?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), subjects = subjects.len(), "saved subjects");
        Ok(())
    }

    /// Reads the subject list. A missing or empty file yields an empty
    /// list; a structurally invalid document fails with `MalformedData`.
    pub fn load(&self) -> Result<Vec<Subject>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<SubjectRecord> = serde_json::from_str(&contents).map_err(|e| {
            Error::MalformedData(format!(
                "invalid subjects document at {}: {e}",
                self.path.display()
            ))
        })?;

        let subjects = records
            .into_iter()
            .map(Self::from_record)
            .collect::<Result<Vec<_>>>()?;
        debug!(path = %self.path.display(), subjects = subjects.len(), "loaded subjects");
        Ok(subjects)
    }

    fn to_record(subject: &Subject) -> SubjectRecord {
        SubjectRecord {
            name: subject.name.clone(),
            exam_date: subject.exam_date,
            difficulty: subject.difficulty,
            topics: subject
                .topics
                .iter()
                .map(|t| TopicRecord {
                    name: t.name.clone(),
                    priority: t.priority,
                    estimated_hours: t.estimated_hours,
                    completed: t.completed,
                    hours_spent: t.hours_spent,
                })
                .collect(),
        }
    }

    fn from_record(record: SubjectRecord) -> Result<Subject> {
        let mut subject = Subject::new(record.name, record.exam_date, record.difficulty)?;
        for topic_record in record.topics {
            let mut topic = Topic::new(
                topic_record.name,
                topic_record.priority,
                topic_record.estimated_hours,
            )?;
            topic.hours_spent = topic_record.hours_spent;
            if topic_record.completed {
                topic.mark_complete();
            }
            subject.add_topic(topic);
        }
        subject.update_progress();
        Ok(subject)
    }
}
