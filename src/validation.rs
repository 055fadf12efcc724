//! Integrity checks for subject lists.
//!
//! Entity constructors already enforce per-field ranges; this module
//! checks the properties that only hold across a collection:
//! - Duplicate subject names
//! - Duplicate topic names within a subject (scheduling lookups and the
//!   wire format key topics by name)
//! - Subjects with no topics
//!
//! Run before scheduling or saving when a diagnostic is wanted; the
//! scheduler itself trusts its input and degrades silently.

use std::collections::HashSet;

use crate::models::Subject;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two subjects share a name, or two topics share a name within one
    /// subject.
    DuplicateName,
    /// A subject has no topics.
    NoTopics,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a subject list before scheduling or persistence.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_subjects(subjects: &[Subject]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_names = HashSet::new();
    for subject in subjects {
        if !subject_names.insert(subject.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate subject name: {}", subject.name),
            ));
        }

        if subject.topics.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoTopics,
                format!("Subject '{}' has no topics", subject.name),
            ));
        }

        let mut topic_names = HashSet::new();
        for topic in &subject.topics {
            if !topic_names.insert(topic.name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateName,
                    format!(
                        "Duplicate topic name '{}' in subject '{}'",
                        topic.name, subject.name
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Topic;
    use chrono::{Duration, Local};

    fn make_subject(name: &str, topics: &[&str]) -> Subject {
        let exam = Local::now().date_naive() + Duration::days(30);
        let mut subject = Subject::new(name, exam, 3).unwrap();
        for topic in topics {
            subject.add_topic(Topic::new(*topic, 3, 5.0).unwrap());
        }
        subject
    }

    #[test]
    fn test_valid_subjects_pass() {
        let subjects = vec![
            make_subject("Math", &["Calculus", "Algebra"]),
            make_subject("Physics", &["Mechanics"]),
        ];
        assert!(validate_subjects(&subjects).is_ok());
    }

    #[test]
    fn test_empty_list_passes() {
        assert!(validate_subjects(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_subject_names() {
        let subjects = vec![make_subject("Math", &["A"]), make_subject("Math", &["B"])];
        let errors = validate_subjects(&subjects).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateName);
        assert!(errors[0].message.contains("Math"));
    }

    #[test]
    fn test_duplicate_topic_names_within_subject() {
        let subjects = vec![make_subject("Math", &["Calculus", "Calculus"])];
        let errors = validate_subjects(&subjects).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateName);
    }

    #[test]
    fn test_same_topic_name_across_subjects_is_fine() {
        let subjects = vec![
            make_subject("Math", &["Intro"]),
            make_subject("Physics", &["Intro"]),
        ];
        assert!(validate_subjects(&subjects).is_ok());
    }

    #[test]
    fn test_subject_without_topics() {
        let subjects = vec![make_subject("Math", &[])];
        let errors = validate_subjects(&subjects).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NoTopics);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let subjects = vec![
            make_subject("Math", &[]),
            make_subject("Math", &["A", "A"]),
        ];
        let errors = validate_subjects(&subjects).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
