use chrono::NaiveDate;
use serde::Serialize;

use crate::inquiry::validation::is_valid_email;

use super::calculator::PricingSelection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuoteField {
    FullName,
    Email,
    Company,
    Phone,
    Description,
    StartDate,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteDraft {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub description: String,
    /// As typed into the `date` input, `YYYY-MM-DD`.
    pub start_date: String,
}

impl QuoteDraft {
    pub fn set(&mut self, field: QuoteField, value: String) {
        let slot = match field {
            QuoteField::FullName => &mut self.full_name,
            QuoteField::Email => &mut self.email,
            QuoteField::Company => &mut self.company,
            QuoteField::Phone => &mut self.phone,
            QuoteField::Description => &mut self.description,
            QuoteField::StartDate => &mut self.start_date,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub full_name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub selection: PricingSelection,
    pub estimated_total: u64,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Turns the modal draft into a request, or the list of fields to fix.
pub fn build_quote_request(
    draft: &QuoteDraft,
    selection: &PricingSelection,
) -> Result<QuoteRequest, Vec<(QuoteField, &'static str)>> {
    let mut errors = Vec::new();

    if draft.full_name.trim().is_empty() {
        errors.push((QuoteField::FullName, "Full name is required"));
    }
    if draft.email.trim().is_empty() {
        errors.push((QuoteField::Email, "Email is required"));
    } else if !is_valid_email(&draft.email) {
        errors.push((QuoteField::Email, "Please enter a valid email"));
    }

    let start_date = match optional(&draft.start_date) {
        None => None,
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push((QuoteField::StartDate, "Please pick a valid start date"));
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(QuoteRequest {
        full_name: draft.full_name.trim().to_string(),
        email: draft.email.trim().to_string(),
        company: optional(&draft.company),
        phone: optional(&draft.phone),
        description: optional(&draft.description),
        start_date,
        selection: selection.clone(),
        estimated_total: selection.total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculator::{Feature, ProjectType, TeamSize, Timeline};
    use pretty_assertions::assert_eq;

    fn draft() -> QuoteDraft {
        QuoteDraft {
            full_name: "Jane Roe".to_string(),
            email: "jane@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn name_and_email_are_required() {
        let errors = build_quote_request(&QuoteDraft::default(), &PricingSelection::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![QuoteField::FullName, QuoteField::Email]);
    }

    #[test]
    fn invalid_start_date_is_reported() {
        let mut draft = draft();
        draft.set(QuoteField::StartDate, "2024-02-30".to_string());
        let errors = build_quote_request(&draft, &PricingSelection::default()).unwrap_err();
        assert_eq!(errors, vec![(QuoteField::StartDate, "Please pick a valid start date")]);
    }

    #[test]
    fn request_carries_selection_and_total() {
        let selection = PricingSelection {
            project_type: ProjectType::WebApp,
            features: vec![Feature::Auth, Feature::Seo],
            timeline: Timeline::Rush,
            team_size: TeamSize::new(4),
        };
        let mut draft = draft();
        draft.set(QuoteField::Company, "  ".to_string());
        draft.set(QuoteField::StartDate, "2025-03-01".to_string());

        let request = build_quote_request(&draft, &selection).unwrap();
        assert_eq!(request.estimated_total, 19_500);
        assert_eq!(request.company, None);
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2025, 3, 1));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["selection"]["projectType"], "webapp");
        assert_eq!(json["selection"]["features"], serde_json::json!(["auth", "seo"]));
        assert_eq!(json["selection"]["teamSize"], 4);
        assert_eq!(json["startDate"], "2025-03-01");
    }
}
