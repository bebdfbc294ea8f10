use super::icons::Icon;

pub const STUDIO_NAME: &str = "CodeCraft";
pub const TAGLINE: &str = "Building the future of digital experiences";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_EMAIL: &str = "hello@codecraft.dev";

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub dropdown: &'static [NavLink],
}

impl NavItem {
    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { name: "Home", href: "#home", dropdown: &[] },
    NavItem {
        name: "Services",
        href: "#services",
        dropdown: &[
            NavLink { name: "Web Development", href: "#web-dev" },
            NavLink { name: "Mobile Apps", href: "#mobile-apps" },
            NavLink { name: "3D Websites", href: "#3d-websites" },
            NavLink { name: "Web Applications", href: "#web-apps" },
            NavLink { name: "UI/UX Design", href: "#design" },
        ],
    },
    NavItem { name: "Portfolio", href: "#portfolio", dropdown: &[] },
    NavItem { name: "About", href: "#about", dropdown: &[] },
    NavItem { name: "Blog", href: "#blog", dropdown: &[] },
    NavItem { name: "Contact", href: "#contact", dropdown: &[] },
];

/// Page offset after which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Option<Icon>,
}

pub const FOOTER_SERVICES: [FooterLink; 6] = [
    FooterLink { name: "Website Development", href: "#services", icon: Some(Icon::Globe) },
    FooterLink { name: "Web Applications", href: "#services", icon: Some(Icon::Code) },
    FooterLink { name: "Mobile Apps", href: "#services", icon: Some(Icon::Smartphone) },
    FooterLink { name: "3D Experiences", href: "#services", icon: Some(Icon::Cuboid) },
    FooterLink { name: "UI/UX Design", href: "#services", icon: Some(Icon::Palette) },
    FooterLink { name: "Technical Consulting", href: "#services", icon: Some(Icon::Zap) },
];

pub const FOOTER_COMPANY: [FooterLink; 6] = [
    FooterLink { name: "About Us", href: "#about", icon: None },
    FooterLink { name: "Portfolio", href: "#portfolio", icon: None },
    FooterLink { name: "Pricing", href: "#pricing", icon: None },
    FooterLink { name: "Contact", href: "#contact", icon: None },
    FooterLink { name: "Blog", href: "#blog", icon: None },
    FooterLink { name: "Careers", href: "#careers", icon: None },
];

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub short: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "LinkedIn", href: "https://linkedin.com/company/codecraft", short: "in" },
    SocialLink { name: "Facebook", href: "https://facebook.com/codecraft", short: "f" },
    SocialLink { name: "Instagram", href: "https://instagram.com/codecraft", short: "ig" },
    SocialLink { name: "Twitter", href: "https://twitter.com/codecraft", short: "x" },
];

pub struct ContactLine {
    pub icon: Icon,
    pub text: &'static str,
    pub href: &'static str,
}

pub const FOOTER_CONTACT: [ContactLine; 3] = [
    ContactLine { icon: Icon::Mail, text: "hello@codecraft.com", href: "mailto:hello@codecraft.com" },
    ContactLine { icon: Icon::Phone, text: "+91 87004 37332", href: "tel:+918700437332" },
    ContactLine { icon: Icon::MapPin, text: "Remote-first studio", href: "#location" },
];

pub const RECENT_PROJECTS: [&str; 3] = ["E-commerce Platform", "Healthcare App", "3D Product Viewer"];
