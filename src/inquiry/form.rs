use serde::Serialize;

use crate::data::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ServiceId {
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "webapp")]
    WebApp,
    #[serde(rename = "mobile")]
    Mobile,
    #[serde(rename = "3d")]
    ThreeD,
    #[serde(rename = "design")]
    Design,
    #[serde(rename = "consulting")]
    Consulting,
}

impl ServiceId {
    pub const ALL: [ServiceId; 6] = [
        ServiceId::Website,
        ServiceId::WebApp,
        ServiceId::Mobile,
        ServiceId::ThreeD,
        ServiceId::Design,
        ServiceId::Consulting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ServiceId::Website => "Website Development",
            ServiceId::WebApp => "Web Application",
            ServiceId::Mobile => "Mobile App Development",
            ServiceId::ThreeD => "3D Experiences",
            ServiceId::Design => "UI/UX Design",
            ServiceId::Consulting => "Technical Consulting",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ServiceId::Website => "Professional business websites with modern design",
            ServiceId::WebApp => "Custom web applications with advanced functionality",
            ServiceId::Mobile => "Native iOS & Android mobile applications",
            ServiceId::ThreeD => "Immersive 3D web experiences with WebGL",
            ServiceId::Design => "Complete design systems and user experience",
            ServiceId::Consulting => "Strategic guidance and technical expertise",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ServiceId::Website => Icon::Globe,
            ServiceId::WebApp => Icon::Code,
            ServiceId::Mobile => Icon::Smartphone,
            ServiceId::ThreeD => Icon::Cuboid,
            ServiceId::Design => Icon::Palette,
            ServiceId::Consulting => Icon::Zap,
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            ServiceId::Website => "#9333ea",
            ServiceId::WebApp => "#f97316",
            ServiceId::Mobile => "#facc15",
            ServiceId::ThreeD => "#a855f7",
            ServiceId::Design => "#fb923c",
            ServiceId::Consulting => "#eab308",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BudgetRange {
    #[serde(rename = "5k-10k")]
    From5kTo10k,
    #[serde(rename = "10k-25k")]
    From10kTo25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k+")]
    Over100k,
    #[serde(rename = "discuss")]
    Discuss,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 6] = [
        BudgetRange::From5kTo10k,
        BudgetRange::From10kTo25k,
        BudgetRange::From25kTo50k,
        BudgetRange::From50kTo100k,
        BudgetRange::Over100k,
        BudgetRange::Discuss,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetRange::From5kTo10k => "$5,000 - $10,000",
            BudgetRange::From10kTo25k => "$10,000 - $25,000",
            BudgetRange::From25kTo50k => "$25,000 - $50,000",
            BudgetRange::From50kTo100k => "$50,000 - $100,000",
            BudgetRange::Over100k => "$100,000+",
            BudgetRange::Discuss => "Let's discuss",
        }
    }
}

/// When the client wants the project delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DeliveryWindow {
    #[serde(rename = "asap")]
    Asap,
    #[serde(rename = "1-2months")]
    OneToTwoMonths,
    #[serde(rename = "3-6months")]
    ThreeToSixMonths,
    #[serde(rename = "6months+")]
    OverSixMonths,
    #[serde(rename = "flexible")]
    Flexible,
}

impl DeliveryWindow {
    pub const ALL: [DeliveryWindow; 5] = [
        DeliveryWindow::Asap,
        DeliveryWindow::OneToTwoMonths,
        DeliveryWindow::ThreeToSixMonths,
        DeliveryWindow::OverSixMonths,
        DeliveryWindow::Flexible,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeliveryWindow::Asap => "ASAP (Rush)",
            DeliveryWindow::OneToTwoMonths => "1-2 months",
            DeliveryWindow::ThreeToSixMonths => "3-6 months",
            DeliveryWindow::OverSixMonths => "6+ months",
            DeliveryWindow::Flexible => "Flexible",
        }
    }
}

/// Metadata of a user-picked file. The browser handle stays in the view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

impl Attachment {
    /// `"512 B"`, `"1.5 KB"`, `"2.0 MB"`
    pub fn size_label(&self) -> String {
        const KB: f64 = 1024.0;
        let bytes = self.size_bytes as f64;
        if bytes < KB {
            format!("{} B", self.size_bytes)
        } else if bytes < KB * KB {
            format!("{:.1} KB", bytes / KB)
        } else {
            format!("{:.1} MB", bytes / (KB * KB))
        }
    }
}

/// Every input of the inquiry form, used as the key for validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    SelectedServices,
    PrimaryService,
    Budget,
    Timeline,
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Position,
    ProjectDescription,
    Goals,
    TargetAudience,
    Inspiration,
    Files,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::SelectedServices => "selectedServices",
            Field::PrimaryService => "primaryService",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Position => "position",
            Field::ProjectDescription => "projectDescription",
            Field::Goals => "goals",
            Field::TargetAudience => "targetAudience",
            Field::Inspiration => "inspiration",
            Field::Files => "files",
        }
    }
}

/// Free-text inputs; the rest of the form is selected, not typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Position,
    ProjectDescription,
    Goals,
    TargetAudience,
    Inspiration,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::FirstName => Field::FirstName,
            TextField::LastName => Field::LastName,
            TextField::Email => Field::Email,
            TextField::Phone => Field::Phone,
            TextField::Company => Field::Company,
            TextField::Position => Field::Position,
            TextField::ProjectDescription => Field::ProjectDescription,
            TextField::Goals => Field::Goals,
            TextField::TargetAudience => Field::TargetAudience,
            TextField::Inspiration => Field::Inspiration,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Selection order is kept for the review step.
    pub selected_services: Vec<ServiceId>,
    pub primary_service: Option<ServiceId>,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<DeliveryWindow>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub project_description: String,
    pub goals: String,
    pub target_audience: String,
    pub inspiration: String,
    pub files: Vec<Attachment>,
}

impl FormState {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Company => &self.company,
            TextField::Position => &self.position,
            TextField::ProjectDescription => &self.project_description,
            TextField::Goals => &self.goals,
            TextField::TargetAudience => &self.target_audience,
            TextField::Inspiration => &self.inspiration,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Company => &mut self.company,
            TextField::Position => &mut self.position,
            TextField::ProjectDescription => &mut self.project_description,
            TextField::Goals => &mut self.goals,
            TextField::TargetAudience => &mut self.target_audience,
            TextField::Inspiration => &mut self.inspiration,
        }
    }

    pub fn is_selected(&self, service: ServiceId) -> bool {
        self.selected_services.contains(&service)
    }

    pub fn attachment_bytes(&self) -> u64 {
        self.files.iter().map(|file| file.size_bytes).sum()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_wire_names() {
        let form = FormState {
            selected_services: vec![ServiceId::ThreeD, ServiceId::WebApp],
            primary_service: Some(ServiceId::ThreeD),
            budget: Some(BudgetRange::Over100k),
            timeline: Some(DeliveryWindow::OneToTwoMonths),
            first_name: "Ada".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["selectedServices"], serde_json::json!(["3d", "webapp"]));
        assert_eq!(json["primaryService"], "3d");
        assert_eq!(json["budget"], "100k+");
        assert_eq!(json["timeline"], "1-2months");
        assert_eq!(json["firstName"], "Ada");
    }

    #[test]
    fn attachment_sizes_are_human_readable() {
        let file = |size_bytes| Attachment {
            name: "brief.pdf".to_string(),
            size_bytes,
            content_type: "application/pdf".to_string(),
        };
        assert_eq!(file(512).size_label(), "512 B");
        assert_eq!(file(1536).size_label(), "1.5 KB");
        assert_eq!(file(2 * 1024 * 1024).size_label(), "2.0 MB");
    }

    #[test]
    fn full_name_skips_missing_parts() {
        let mut form = FormState::default();
        form.first_name = " Ada ".to_string();
        assert_eq!(form.full_name(), "Ada");
        form.last_name = "Lovelace".to_string();
        assert_eq!(form.full_name(), "Ada Lovelace");
    }

    #[test]
    fn text_accessors_address_the_same_field() {
        let mut form = FormState::default();
        form.text_mut(TextField::Goals).push_str("grow");
        assert_eq!(form.text(TextField::Goals), "grow");
        assert_eq!(form.goals, "grow");
    }
}
