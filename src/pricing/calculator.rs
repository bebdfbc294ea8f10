use serde::Serialize;

use crate::data::icons::Icon;

pub const MIN_TEAM_SIZE: u8 = 1;
pub const MAX_TEAM_SIZE: u8 = 6;
const BASE_TEAM_SIZE: u8 = 2;
const TEAM_MEMBER_SURCHARGE: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ProjectType {
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
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Website,
        ProjectType::WebApp,
        ProjectType::Mobile,
        ProjectType::ThreeD,
        ProjectType::Design,
    ];

    pub fn base_price(self) -> u32 {
        match self {
            ProjectType::Website => 2_500,
            ProjectType::WebApp => 8_000,
            ProjectType::Mobile => 12_000,
            ProjectType::ThreeD => 15_000,
            ProjectType::Design => 3_500,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProjectType::Website => "Website",
            ProjectType::WebApp => "Web Application",
            ProjectType::Mobile => "Mobile App",
            ProjectType::ThreeD => "3D Experience",
            ProjectType::Design => "UI/UX Design",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ProjectType::Website => "Professional business website with modern design",
            ProjectType::WebApp => "Custom web application with advanced functionality",
            ProjectType::Mobile => "Native iOS & Android mobile application",
            ProjectType::ThreeD => "Immersive 3D web experience with WebGL",
            ProjectType::Design => "Complete design system and user experience",
        }
    }

    pub fn included(self) -> [&'static str; 4] {
        match self {
            ProjectType::Website => ["Responsive Design", "SEO Optimization", "Contact Forms", "Basic Analytics"],
            ProjectType::WebApp => ["User Authentication", "Database Integration", "API Development", "Admin Dashboard"],
            ProjectType::Mobile => ["Cross-platform", "Push Notifications", "Offline Support", "App Store Deployment"],
            ProjectType::ThreeD => ["3D Modeling", "Interactive Controls", "WebGL Optimization", "Cross-device Support"],
            ProjectType::Design => ["User Research", "Wireframing", "Prototyping", "Design System"],
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ProjectType::Website => Icon::Globe,
            ProjectType::WebApp => Icon::Code,
            ProjectType::Mobile => Icon::Smartphone,
            ProjectType::ThreeD => Icon::Cuboid,
            ProjectType::Design => Icon::Palette,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureCategory {
    Functionality,
    Marketing,
    Support,
}

impl FeatureCategory {
    pub fn label(self) -> &'static str {
        match self {
            FeatureCategory::Functionality => "functionality",
            FeatureCategory::Marketing => "marketing",
            FeatureCategory::Support => "support",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Ecommerce,
    Cms,
    Auth,
    Seo,
    Analytics,
    Chat,
    Api,
    Multilingual,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Ecommerce,
        Feature::Cms,
        Feature::Auth,
        Feature::Seo,
        Feature::Analytics,
        Feature::Chat,
        Feature::Api,
        Feature::Multilingual,
    ];

    pub fn price(self) -> u32 {
        match self {
            Feature::Ecommerce => 2_500,
            Feature::Cms => 1_500,
            Feature::Auth => 1_200,
            Feature::Seo => 800,
            Feature::Analytics => 1_000,
            Feature::Chat => 600,
            Feature::Api => 1_800,
            Feature::Multilingual => 2_000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Ecommerce => "E-commerce Integration",
            Feature::Cms => "Content Management System",
            Feature::Auth => "User Authentication",
            Feature::Seo => "Advanced SEO",
            Feature::Analytics => "Advanced Analytics",
            Feature::Chat => "Live Chat Support",
            Feature::Api => "Third-party Integrations",
            Feature::Multilingual => "Multi-language Support",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Feature::Ecommerce => "Shopping cart, payment processing, inventory management",
            Feature::Cms => "Easy-to-use admin panel for content updates",
            Feature::Auth => "Login, registration, password recovery, user profiles",
            Feature::Seo => "Technical SEO, schema markup, performance optimization",
            Feature::Analytics => "Custom tracking, conversion funnels, detailed reporting",
            Feature::Chat => "Real-time customer support integration",
            Feature::Api => "CRM, email marketing, social media integrations",
            Feature::Multilingual => "Internationalization and localization",
        }
    }

    pub fn category(self) -> FeatureCategory {
        match self {
            Feature::Seo | Feature::Analytics => FeatureCategory::Marketing,
            Feature::Chat => FeatureCategory::Support,
            _ => FeatureCategory::Functionality,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Feature::Ecommerce => Icon::ShoppingCart,
            Feature::Cms => Icon::Database,
            Feature::Auth => Icon::Shield,
            Feature::Seo => Icon::Search,
            Feature::Analytics => Icon::BarChart,
            Feature::Chat => Icon::MessageSquare,
            Feature::Api => Icon::Zap,
            Feature::Multilingual => Icon::Globe,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Rush,
    Fast,
    Standard,
    Extended,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [Timeline::Rush, Timeline::Fast, Timeline::Standard, Timeline::Extended];

    pub fn multiplier(self) -> f64 {
        match self {
            Timeline::Rush => 1.5,
            Timeline::Fast => 1.25,
            Timeline::Standard => 1.0,
            Timeline::Extended => 0.9,
        }
    }

    pub fn weeks(self) -> u32 {
        match self {
            Timeline::Rush => 2,
            Timeline::Fast => 4,
            Timeline::Standard => 8,
            Timeline::Extended => 12,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Timeline::Rush => "Rush Delivery",
            Timeline::Fast => "Fast Track",
            Timeline::Standard => "Standard",
            Timeline::Extended => "Extended",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Timeline::Rush => "Expedited timeline with dedicated resources",
            Timeline::Fast => "Accelerated development process",
            Timeline::Standard => "Regular development timeline",
            Timeline::Extended => "Flexible timeline with cost savings",
        }
    }

    /// Signed percent change against the standard timeline, e.g. `+50%`.
    /// `None` for the standard multiplier.
    pub fn adjustment_label(self) -> Option<String> {
        percent_label(self.multiplier())
    }
}

/// Developer count, kept inside `[MIN_TEAM_SIZE, MAX_TEAM_SIZE]` by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeamSize(u8);

impl Default for TeamSize {
    fn default() -> Self {
        TeamSize(BASE_TEAM_SIZE)
    }
}

impl TeamSize {
    pub fn new(size: u8) -> Self {
        TeamSize(size.clamp(MIN_TEAM_SIZE, MAX_TEAM_SIZE))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        TeamSize::new(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        TeamSize::new(self.0.saturating_sub(1))
    }

    pub fn multiplier(self) -> f64 {
        if self.0 <= BASE_TEAM_SIZE {
            1.0
        } else {
            1.0 + f64::from(self.0 - BASE_TEAM_SIZE) * TEAM_MEMBER_SURCHARGE
        }
    }

    pub fn adjustment_label(self) -> Option<String> {
        percent_label(self.multiplier())
    }
}

fn percent_label(multiplier: f64) -> Option<String> {
    let percent = ((multiplier - 1.0) * 100.0).round() as i64;
    match percent {
        0 => None,
        p if p > 0 => Some(format!("+{}%", p)),
        p => Some(format!("{}%", p)),
    }
}

/// `round((base + features) * timeline * team)` in whole dollars.
pub fn compute_total(project_type: ProjectType, features: &[Feature], timeline: Timeline, team: TeamSize) -> u64 {
    let features_sum: u32 = features.iter().map(|f| f.price()).sum();
    let subtotal = f64::from(project_type.base_price() + features_sum);
    (subtotal * timeline.multiplier() * team.multiplier()).round() as u64
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSelection {
    pub project_type: ProjectType,
    /// Kept in the order the features were picked.
    pub features: Vec<Feature>,
    pub timeline: Timeline,
    pub team_size: TeamSize,
}

impl Default for PricingSelection {
    fn default() -> Self {
        Self {
            project_type: ProjectType::Website,
            features: Vec::new(),
            timeline: Timeline::Standard,
            team_size: TeamSize::default(),
        }
    }
}

impl PricingSelection {
    pub fn total(&self) -> u64 {
        compute_total(self.project_type, &self.features, self.timeline, self.team_size)
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn toggle_feature(&mut self, feature: Feature) {
        if let Some(pos) = self.features.iter().position(|f| *f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature);
        }
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown {
            base: (self.project_type.name(), self.project_type.base_price()),
            features: self.features.iter().map(|f| (f.name(), f.price())).collect(),
            timeline_adjustment: self.timeline.adjustment_label(),
            team_adjustment: self.team_size.adjustment_label(),
            weeks: self.timeline.weeks(),
            total: self.total(),
        }
    }
}

/// Lines of the price summary panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceBreakdown {
    pub base: (&'static str, u32),
    pub features: Vec<(&'static str, u32)>,
    pub timeline_adjustment: Option<String>,
    pub team_adjustment: Option<String>,
    pub weeks: u32,
    pub total: u64,
}

/// `19500` -> `$19,500`
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn website_standard_small_team_is_base_price() {
        let total = compute_total(ProjectType::Website, &[], Timeline::Standard, TeamSize::new(2));
        assert_eq!(total, 2_500);
    }

    #[test]
    fn webapp_rush_with_features_and_four_devs() {
        let total = compute_total(
            ProjectType::WebApp,
            &[Feature::Auth, Feature::Seo],
            Timeline::Rush,
            TeamSize::new(4),
        );
        assert_eq!(total, 19_500);
    }

    #[test]
    fn no_features_cheapest_type_yields_base() {
        let cheapest = ProjectType::ALL.iter().copied().min_by_key(|t| t.base_price()).unwrap();
        assert_eq!(
            compute_total(cheapest, &[], Timeline::Standard, TeamSize::new(1)),
            u64::from(cheapest.base_price())
        );
    }

    #[test]
    fn compute_total_is_deterministic() {
        let features = [Feature::Cms, Feature::Chat, Feature::Multilingual];
        let first = compute_total(ProjectType::Mobile, &features, Timeline::Extended, TeamSize::new(6));
        for _ in 0..10 {
            assert_eq!(
                compute_total(ProjectType::Mobile, &features, Timeline::Extended, TeamSize::new(6)),
                first
            );
        }
        // (12000 + 4100) * 0.9 * 1.6
        assert_eq!(first, 23_184);
    }

    #[test]
    fn team_size_stepper_stays_in_range() {
        let mut team = TeamSize::default();
        for _ in 0..10 {
            team = team.increment();
            assert!((MIN_TEAM_SIZE..=MAX_TEAM_SIZE).contains(&team.get()));
        }
        assert_eq!(team.get(), MAX_TEAM_SIZE);
        for _ in 0..10 {
            team = team.decrement();
            assert!((MIN_TEAM_SIZE..=MAX_TEAM_SIZE).contains(&team.get()));
        }
        assert_eq!(team.get(), MIN_TEAM_SIZE);
        assert_eq!(TeamSize::new(0).get(), MIN_TEAM_SIZE);
        assert_eq!(TeamSize::new(99).get(), MAX_TEAM_SIZE);
    }

    #[test]
    fn team_multiplier_only_applies_above_two() {
        assert_eq!(TeamSize::new(1).multiplier(), 1.0);
        assert_eq!(TeamSize::new(2).multiplier(), 1.0);
        assert_eq!(TeamSize::new(3).adjustment_label().as_deref(), Some("+15%"));
        assert_eq!(TeamSize::new(6).adjustment_label().as_deref(), Some("+60%"));
    }

    #[test]
    fn timeline_labels() {
        assert_eq!(Timeline::Rush.adjustment_label().as_deref(), Some("+50%"));
        assert_eq!(Timeline::Fast.adjustment_label().as_deref(), Some("+25%"));
        assert_eq!(Timeline::Standard.adjustment_label(), None);
        assert_eq!(Timeline::Extended.adjustment_label().as_deref(), Some("-10%"));
    }

    #[test]
    fn toggling_features_keeps_pick_order() {
        let mut selection = PricingSelection::default();
        selection.toggle_feature(Feature::Seo);
        selection.toggle_feature(Feature::Auth);
        selection.toggle_feature(Feature::Chat);
        selection.toggle_feature(Feature::Seo);
        assert_eq!(selection.features, vec![Feature::Auth, Feature::Chat]);
    }

    #[test]
    fn breakdown_matches_selection() {
        let selection = PricingSelection {
            project_type: ProjectType::WebApp,
            features: vec![Feature::Auth, Feature::Seo],
            timeline: Timeline::Rush,
            team_size: TeamSize::new(4),
        };
        let breakdown = selection.breakdown();
        assert_eq!(
            breakdown,
            PriceBreakdown {
                base: ("Web Application", 8_000),
                features: vec![("User Authentication", 1_200), ("Advanced SEO", 800)],
                timeline_adjustment: Some("+50%".to_string()),
                team_adjustment: Some("+30%".to_string()),
                weeks: 2,
                total: 19_500,
            }
        );
    }

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(2_500), "$2,500");
        assert_eq!(format_usd(19_500), "$19,500");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }
}
