use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::form::{Attachment, Field, FormState};
use super::submit::{check_attachments, SubmissionError};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Field-level messages for the step that was last validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    messages: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn has(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<Field> {
        self.messages.keys().copied().collect()
    }

    pub fn clear_field(&mut self, field: Field) {
        self.messages.remove(&field);
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.messages.insert(field, message);
    }
}

/// Message for an attachment set the inquiry endpoint would refuse.
pub fn attachment_error(files: &[Attachment]) -> Option<&'static str> {
    match check_attachments(files) {
        Ok(()) => None,
        Err(SubmissionError::TooManyFiles { .. }) => Some("You can attach up to 10 files"),
        Err(_) => Some("Attachments must total 25 MB or less"),
    }
}

/// Checks the required inputs of a wizard step. Step 5 is review-only.
pub fn validate_step(form: &FormState, step: u8) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    match step {
        1 => {
            if form.selected_services.is_empty() {
                errors.insert(Field::SelectedServices, "Please select at least one service");
            }
            if form.primary_service.is_none() {
                errors.insert(Field::PrimaryService, "Please select your primary service");
            }
        }
        2 => {
            if form.budget.is_none() {
                errors.insert(Field::Budget, "Please select your budget range");
            }
            if form.timeline.is_none() {
                errors.insert(Field::Timeline, "Please select your preferred timeline");
            }
        }
        3 => {
            if is_blank(&form.first_name) {
                errors.insert(Field::FirstName, "First name is required");
            }
            if is_blank(&form.last_name) {
                errors.insert(Field::LastName, "Last name is required");
            }
            if is_blank(&form.email) {
                errors.insert(Field::Email, "Email is required");
            } else if !is_valid_email(&form.email) {
                errors.insert(Field::Email, "Please enter a valid email");
            }
        }
        4 => {
            if is_blank(&form.project_description) {
                errors.insert(Field::ProjectDescription, "Please describe your project");
            }
        }
        _ => {}
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::form::{BudgetRange, DeliveryWindow, ServiceId};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_form_reports_documented_keys_per_step() {
        let form = FormState::default();

        assert_eq!(
            validate_step(&form, 1).fields(),
            vec![Field::SelectedServices, Field::PrimaryService]
        );
        assert_eq!(validate_step(&form, 2).fields(), vec![Field::Budget, Field::Timeline]);
        assert_eq!(
            validate_step(&form, 3).fields(),
            vec![Field::FirstName, Field::LastName, Field::Email]
        );
        assert_eq!(validate_step(&form, 4).fields(), vec![Field::ProjectDescription]);
        assert!(validate_step(&form, 5).is_empty());
    }

    #[test]
    fn step_one_needs_a_primary_even_with_selections() {
        let form = FormState {
            selected_services: vec![ServiceId::Mobile],
            ..Default::default()
        };
        let errors = validate_step(&form, 1);
        assert_eq!(errors.fields(), vec![Field::PrimaryService]);
        assert_eq!(errors.get(Field::PrimaryService), Some("Please select your primary service"));
    }

    #[test]
    fn step_two_passes_with_budget_and_timeline() {
        let form = FormState {
            budget: Some(BudgetRange::Discuss),
            timeline: Some(DeliveryWindow::Flexible),
            ..Default::default()
        };
        assert!(validate_step(&form, 2).is_empty());
    }

    #[test]
    fn incomplete_email_is_rejected() {
        let mut form = FormState {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@".to_string(),
            ..Default::default()
        };
        let errors = validate_step(&form, 3);
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));

        form.email = "john@example.com".to_string();
        assert!(validate_step(&form, 3).is_empty());
    }

    #[test]
    fn missing_email_uses_required_message() {
        let form = FormState {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_step(&form, 3).get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn whitespace_only_text_counts_as_blank() {
        let form = FormState {
            project_description: "   \n".to_string(),
            ..Default::default()
        };
        assert!(validate_step(&form, 4).has(Field::ProjectDescription));
    }

    #[test]
    fn email_pattern_cases() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" john@example.com "));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john doe@example.com"));
    }
}
