use super::icons::Icon;

/// Tone used for a service card's gradients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Purple,
    Blue,
    Indigo,
}

impl Tone {
    pub fn text_color(self) -> &'static str {
        match self {
            Tone::Purple => "#9333ea",
            Tone::Blue => "#2563eb",
            Tone::Indigo => "#4f46e5",
        }
    }

    pub fn soft_gradient(self) -> &'static str {
        match self {
            Tone::Purple => "linear-gradient(135deg, #f3e8ff, #e9d5ff)",
            Tone::Blue => "linear-gradient(135deg, #dbeafe, #bfdbfe)",
            Tone::Indigo => "linear-gradient(135deg, #e0e7ff, #c7d2fe)",
        }
    }

    pub fn strong_gradient(self) -> &'static str {
        match self {
            Tone::Purple => "linear-gradient(135deg, #9333ea, #2563eb)",
            Tone::Blue => "linear-gradient(135deg, #2563eb, #4f46e5)",
            Tone::Indigo => "linear-gradient(135deg, #4f46e5, #9333ea)",
        }
    }
}

pub struct StudioService {
    pub icon: Icon,
    pub title: &'static str,
    pub tone: Tone,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const STUDIO_SERVICES: [StudioService; 6] = [
    StudioService {
        icon: Icon::Globe,
        title: "Websites",
        tone: Tone::Purple,
        description: "Stunning, responsive websites that convert visitors into customers",
        features: [
            "SEO optimized structure",
            "Mobile-first responsive design",
            "Fast loading performance",
            "Conversion-focused layouts",
        ],
    },
    StudioService {
        icon: Icon::Code,
        title: "Web Apps",
        tone: Tone::Blue,
        description: "Powerful web applications built with cutting-edge technology",
        features: [
            "Real-time data processing",
            "Secure user authentication",
            "Scalable architecture",
            "Progressive enhancement",
        ],
    },
    StudioService {
        icon: Icon::Smartphone,
        title: "Mobile Apps",
        tone: Tone::Indigo,
        description: "Native iOS & Android apps that users love to engage with",
        features: [
            "Native performance",
            "Offline capabilities",
            "Push notifications",
            "App store optimization",
        ],
    },
    StudioService {
        icon: Icon::Cuboid,
        title: "3D Experiences",
        tone: Tone::Purple,
        description: "Immersive 3D websites that leave lasting impressions",
        features: [
            "WebGL optimization",
            "Interactive 3D models",
            "Physics-based animations",
            "Cross-device compatibility",
        ],
    },
    StudioService {
        icon: Icon::Palette,
        title: "UI/UX Design",
        tone: Tone::Blue,
        description: "Beautiful, intuitive designs that enhance user experience",
        features: [
            "User research & testing",
            "Wireframing & prototyping",
            "Visual design systems",
            "Accessibility compliance",
        ],
    },
    StudioService {
        icon: Icon::Zap,
        title: "Software Solutions",
        tone: Tone::Indigo,
        description: "Custom software tailored to your business needs",
        features: [
            "Business process automation",
            "Data analysis & reporting",
            "API integrations",
            "Cloud-based solutions",
        ],
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TRUST_STATS: [Stat; 3] = [
    Stat { value: "150+", label: "Projects Delivered" },
    Stat { value: "98%", label: "Client Satisfaction" },
    Stat { value: "24/7", label: "Support Available" },
];
