use super::form::{Attachment, BudgetRange, DeliveryWindow, Field, FormState, ServiceId, TextField};
use super::submit::SubmissionError;
use super::validation::{attachment_error, validate_step, ValidationErrors};

pub const TOTAL_STEPS: u8 = 5;

/// Step on which the description is entered, re-checked before submitting.
const DETAILS_STEP: u8 = 4;

pub fn step_title(step: u8) -> &'static str {
    match step {
        1 => "Select Services",
        2 => "Project Details",
        3 => "Contact Information",
        4 => "Additional Information",
        5 => "Review & Submit",
        _ => "",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

/// State of the multi-step inquiry form. Every mutation goes through a method
/// so the step bounds and the primary-service invariant always hold.
#[derive(Clone, Debug, PartialEq)]
pub struct InquiryWizard {
    step: u8,
    form: FormState,
    errors: ValidationErrors,
    phase: Phase,
    submit_error: Option<String>,
}

impl Default for InquiryWizard {
    fn default() -> Self {
        Self {
            step: 1,
            form: FormState::default(),
            errors: ValidationErrors::default(),
            phase: Phase::Editing,
            submit_error: None,
        }
    }
}

impl InquiryWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    fn editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    /// Validates the current step and moves forward when it passes.
    pub fn advance(&mut self) -> bool {
        if !self.editing() {
            return false;
        }
        self.errors = validate_step(&self.form, self.step);
        if !self.errors.is_empty() {
            return false;
        }
        self.step = (self.step + 1).min(TOTAL_STEPS);
        true
    }

    pub fn retreat(&mut self) {
        if !self.editing() {
            return;
        }
        self.step = self.step.saturating_sub(1).max(1);
    }

    pub fn toggle_service(&mut self, service: ServiceId) {
        if !self.editing() {
            return;
        }
        if let Some(pos) = self.form.selected_services.iter().position(|s| *s == service) {
            self.form.selected_services.remove(pos);
        } else {
            self.form.selected_services.push(service);
        }
        self.errors.clear_field(Field::SelectedServices);

        if let Some(primary) = self.form.primary_service {
            if !self.form.is_selected(primary) {
                self.form.primary_service = None;
                self.errors.clear_field(Field::PrimaryService);
            }
        }
    }

    /// Only services that are already selected can become primary.
    pub fn select_primary(&mut self, service: ServiceId) -> bool {
        if !self.editing() || !self.form.is_selected(service) {
            return false;
        }
        self.form.primary_service = Some(service);
        self.errors.clear_field(Field::PrimaryService);
        true
    }

    pub fn set_budget(&mut self, budget: BudgetRange) {
        if !self.editing() {
            return;
        }
        self.form.budget = Some(budget);
        self.errors.clear_field(Field::Budget);
    }

    pub fn set_timeline(&mut self, timeline: DeliveryWindow) {
        if !self.editing() {
            return;
        }
        self.form.timeline = Some(timeline);
        self.errors.clear_field(Field::Timeline);
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        if !self.editing() {
            return;
        }
        *self.form.text_mut(field) = value;
        self.errors.clear_field(field.into());
    }

    pub fn add_files(&mut self, files: Vec<Attachment>) {
        if !self.editing() || files.is_empty() {
            return;
        }
        self.form.files.extend(files);
        self.check_files();
    }

    pub fn remove_file(&mut self, index: usize) {
        if !self.editing() || index >= self.form.files.len() {
            return;
        }
        self.form.files.remove(index);
        self.check_files();
    }

    fn check_files(&mut self) {
        match attachment_error(&self.form.files) {
            Some(message) => self.errors.insert(Field::Files, message),
            None => self.errors.clear_field(Field::Files),
        }
    }

    /// Re-checks the description and attachments from the review step and,
    /// if they pass, enters `Submitting` and hands back the payload to send.
    pub fn begin_submit(&mut self) -> Option<FormState> {
        if !self.editing() || !self.is_last_step() {
            return None;
        }
        self.errors = validate_step(&self.form, DETAILS_STEP);
        if let Some(message) = attachment_error(&self.form.files) {
            self.errors.insert(Field::Files, message);
        }
        if !self.errors.is_empty() {
            return None;
        }
        self.submit_error = None;
        self.phase = Phase::Submitting;
        Some(self.form.clone())
    }

    /// Failures leave the user on the review step with the form intact so
    /// they can try again.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) {
        if self.phase != Phase::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.phase = Phase::Submitted;
            }
            Err(error) => {
                self.phase = Phase::Editing;
                self.submit_error = Some(error.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attachment(name: &str) -> Attachment {
        Attachment {
            name: name.to_string(),
            size_bytes: 1024,
            content_type: "application/pdf".to_string(),
        }
    }

    fn filled_wizard() -> InquiryWizard {
        let mut wizard = InquiryWizard::new();
        wizard.toggle_service(ServiceId::WebApp);
        wizard.select_primary(ServiceId::WebApp);
        wizard.set_budget(BudgetRange::From25kTo50k);
        wizard.set_timeline(DeliveryWindow::ThreeToSixMonths);
        wizard.set_text(TextField::FirstName, "John".to_string());
        wizard.set_text(TextField::LastName, "Doe".to_string());
        wizard.set_text(TextField::Email, "john@example.com".to_string());
        wizard.set_text(TextField::ProjectDescription, "A booking portal".to_string());
        wizard
    }

    #[test]
    fn advance_blocks_on_each_incomplete_step() {
        let mut wizard = InquiryWizard::new();
        for step in 1..=4 {
            wizard.step = step;
            assert!(!wizard.advance());
            assert_eq!(wizard.step(), step);
            assert!(!wizard.errors().is_empty());
        }
    }

    #[test]
    fn advance_walks_valid_form_to_the_last_step() {
        let mut wizard = filled_wizard();
        for expected in 2..=5 {
            assert!(wizard.advance());
            assert_eq!(wizard.step(), expected);
        }
        assert!(wizard.advance());
        assert_eq!(wizard.step(), TOTAL_STEPS);
    }

    #[test]
    fn advance_only_reports_errors_of_the_current_step() {
        let mut wizard = InquiryWizard::new();
        wizard.toggle_service(ServiceId::Design);
        wizard.select_primary(ServiceId::Design);
        assert!(wizard.advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.errors().fields(), vec![Field::Budget, Field::Timeline]);
    }

    #[test]
    fn retreat_never_goes_below_one_and_skips_validation() {
        let mut wizard = InquiryWizard::new();
        wizard.retreat();
        assert_eq!(wizard.step(), 1);

        wizard.step = 4;
        wizard.retreat();
        assert_eq!(wizard.step(), 3);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn removing_primary_clears_it() {
        let mut wizard = InquiryWizard::new();
        wizard.toggle_service(ServiceId::Website);
        wizard.toggle_service(ServiceId::Mobile);
        assert!(wizard.select_primary(ServiceId::Mobile));

        wizard.toggle_service(ServiceId::Website);
        assert_eq!(wizard.form().primary_service, Some(ServiceId::Mobile));

        wizard.toggle_service(ServiceId::Mobile);
        assert_eq!(wizard.form().primary_service, None);
        assert!(wizard.form().selected_services.is_empty());
    }

    #[test]
    fn primary_must_be_selected_first() {
        let mut wizard = InquiryWizard::new();
        assert!(!wizard.select_primary(ServiceId::ThreeD));
        assert_eq!(wizard.form().primary_service, None);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut wizard = InquiryWizard::new();
        wizard.step = 3;
        wizard.advance();
        assert_eq!(
            wizard.errors().fields(),
            vec![Field::FirstName, Field::LastName, Field::Email]
        );

        wizard.set_text(TextField::Email, "j".to_string());
        assert_eq!(wizard.errors().fields(), vec![Field::FirstName, Field::LastName]);
    }

    #[test]
    fn toggling_services_clears_selection_error() {
        let mut wizard = InquiryWizard::new();
        wizard.advance();
        wizard.toggle_service(ServiceId::Consulting);
        assert_eq!(wizard.errors().fields(), vec![Field::PrimaryService]);
    }

    #[test]
    fn files_can_be_added_and_removed_by_index() {
        let mut wizard = InquiryWizard::new();
        wizard.add_files(vec![attachment("brief.pdf"), attachment("logo.png")]);
        wizard.remove_file(0);
        wizard.remove_file(7);
        let names: Vec<_> = wizard.form().files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["logo.png"]);
    }

    #[test]
    fn attachment_limits_flag_the_files_field() {
        let mut wizard = InquiryWizard::new();
        wizard.add_files((0..11).map(|i| attachment(&format!("shot-{}.png", i))).collect());
        assert_eq!(wizard.form().files.len(), 11);
        assert_eq!(wizard.errors().get(Field::Files), Some("You can attach up to 10 files"));

        wizard.remove_file(0);
        assert!(!wizard.errors().has(Field::Files));

        let mut wizard = InquiryWizard::new();
        wizard.add_files(vec![Attachment {
            name: "render.mov".to_string(),
            size_bytes: 30 * 1024 * 1024,
            content_type: "video/quicktime".to_string(),
        }]);
        assert_eq!(
            wizard.errors().get(Field::Files),
            Some("Attachments must total 25 MB or less")
        );
    }

    #[test]
    fn submit_refuses_oversized_attachments() {
        let mut wizard = filled_wizard();
        wizard.add_files((0..11).map(|i| attachment(&format!("shot-{}.png", i))).collect());
        wizard.step = TOTAL_STEPS;

        assert!(wizard.begin_submit().is_none());
        assert_eq!(wizard.phase(), Phase::Editing);
        assert!(wizard.errors().has(Field::Files));
    }

    #[test]
    fn submit_only_from_review_step() {
        let mut wizard = InquiryWizard::new();
        wizard.set_text(TextField::ProjectDescription, "A booking portal".to_string());

        assert!(wizard.begin_submit().is_none());
        assert_eq!(wizard.phase(), Phase::Editing);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn submit_requires_a_description() {
        let mut wizard = filled_wizard();
        wizard.set_text(TextField::ProjectDescription, String::new());
        wizard.step = TOTAL_STEPS;

        assert!(wizard.begin_submit().is_none());
        assert_eq!(wizard.phase(), Phase::Editing);
        assert!(wizard.errors().has(Field::ProjectDescription));
    }

    #[test]
    fn submit_flows_through_submitting_to_submitted() {
        let mut wizard = filled_wizard();
        wizard.step = TOTAL_STEPS;

        let payload = wizard.begin_submit().expect("valid payload");
        assert_eq!(payload.email, "john@example.com");
        assert_eq!(wizard.phase(), Phase::Submitting);

        // Ignored while the request is in flight.
        assert!(wizard.begin_submit().is_none());
        wizard.retreat();
        assert_eq!(wizard.step(), TOTAL_STEPS);

        wizard.finish_submit(Ok(()));
        assert_eq!(wizard.phase(), Phase::Submitted);

        wizard.reset();
        assert_eq!(wizard, InquiryWizard::new());
    }

    #[test]
    fn failed_submit_returns_to_review_with_message() {
        let mut wizard = filled_wizard();
        wizard.step = TOTAL_STEPS;
        wizard.begin_submit();

        wizard.finish_submit(Err(SubmissionError::Network("offline".to_string())));
        assert_eq!(wizard.phase(), Phase::Editing);
        assert_eq!(wizard.step(), TOTAL_STEPS);
        assert!(wizard.submit_error().unwrap().contains("offline"));

        assert!(wizard.begin_submit().is_some());
        assert_eq!(wizard.submit_error(), None);
    }

    #[test]
    fn step_titles() {
        assert_eq!(step_title(1), "Select Services");
        assert_eq!(step_title(5), "Review & Submit");
        assert_eq!(step_title(9), "");
    }
}
