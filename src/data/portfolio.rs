use chrono::NaiveDate;

use super::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Website,
    WebApp,
    Mobile,
    ThreeD,
    Design,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Website => "website",
            ProjectCategory::WebApp => "webapp",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::ThreeD => "3d",
            ProjectCategory::Design => "design",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortfolioFilter {
    All,
    Only(ProjectCategory),
}

impl PortfolioFilter {
    pub const ALL: [PortfolioFilter; 6] = [
        PortfolioFilter::All,
        PortfolioFilter::Only(ProjectCategory::Website),
        PortfolioFilter::Only(ProjectCategory::WebApp),
        PortfolioFilter::Only(ProjectCategory::Mobile),
        PortfolioFilter::Only(ProjectCategory::ThreeD),
        PortfolioFilter::Only(ProjectCategory::Design),
    ];

    pub fn label(self) -> &'static str {
        match self {
            PortfolioFilter::All => "All Projects",
            PortfolioFilter::Only(ProjectCategory::Website) => "Websites",
            PortfolioFilter::Only(ProjectCategory::WebApp) => "Web Apps",
            PortfolioFilter::Only(ProjectCategory::Mobile) => "Mobile Apps",
            PortfolioFilter::Only(ProjectCategory::ThreeD) => "3D Experiences",
            PortfolioFilter::Only(ProjectCategory::Design) => "UI/UX Design",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            PortfolioFilter::All => Icon::Filter,
            PortfolioFilter::Only(ProjectCategory::Website) => Icon::Globe,
            PortfolioFilter::Only(ProjectCategory::WebApp) => Icon::Code,
            PortfolioFilter::Only(ProjectCategory::Mobile) => Icon::Smartphone,
            PortfolioFilter::Only(ProjectCategory::ThreeD) => Icon::Cuboid,
            PortfolioFilter::Only(ProjectCategory::Design) => Icon::Palette,
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            PortfolioFilter::All | PortfolioFilter::Only(ProjectCategory::Website) => {
                "linear-gradient(90deg, #9333ea, #2563eb)"
            }
            PortfolioFilter::Only(ProjectCategory::WebApp) => "linear-gradient(90deg, #2563eb, #4f46e5)",
            PortfolioFilter::Only(ProjectCategory::Mobile) => "linear-gradient(90deg, #4f46e5, #9333ea)",
            PortfolioFilter::Only(ProjectCategory::ThreeD) => "linear-gradient(90deg, #a855f7, #3b82f6)",
            PortfolioFilter::Only(ProjectCategory::Design) => "linear-gradient(90deg, #3b82f6, #6366f1)",
        }
    }

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub live_url: &'static str,
    pub github_url: Option<&'static str>,
    pub featured: bool,
    /// `YYYY-MM-DD`
    pub completed: &'static str,
    pub client_type: &'static str,
    pub awards: &'static [&'static str],
}

/// How many technology tags a card shows before "+N more".
pub const CARD_TECH_LIMIT: usize = 3;

impl Project {
    pub fn completed_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.completed, "%Y-%m-%d").ok()
    }

    /// "January 2024"; falls back to the raw string if it does not parse.
    pub fn completed_label(&self) -> String {
        self.completed_on()
            .map(|date| date.format("%B %Y").to_string())
            .unwrap_or_else(|| self.completed.to_string())
    }

    pub fn card_technologies(&self) -> (&[&'static str], usize) {
        let shown = self.technologies.len().min(CARD_TECH_LIMIT);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

pub fn filter_projects(filter: PortfolioFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|project| filter.matches(project.category)).collect()
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Modern e-commerce solution with advanced features",
        long_description: "A comprehensive e-commerce platform built with Next.js and Stripe integration. Features include real-time inventory management, advanced search and filtering, user authentication, order tracking, and an admin dashboard. The platform handles over 10,000 products and serves thousands of daily users.",
        category: ProjectCategory::WebApp,
        technologies: &["Next.js", "React", "TypeScript", "Stripe", "PostgreSQL", "Tailwind CSS"],
        image: "https://programmers.io/wp-content/uploads/2024/10/Best-Ecomm-Plateforms.jpg",
        live_url: "https://demo-ecommerce.example.com",
        github_url: Some("https://github.com/example/ecommerce"),
        featured: true,
        completed: "2024-01-15",
        client_type: "Enterprise",
        awards: &["Best E-commerce Solution 2024"],
    },
    Project {
        id: 2,
        title: "Healthcare Mobile App",
        description: "Patient management system for healthcare providers",
        long_description: "A comprehensive mobile application for healthcare providers to manage patient records, appointments, and medical history. Built with React Native for cross-platform compatibility, featuring secure data encryption, offline capabilities, and integration with major healthcare systems.",
        category: ProjectCategory::Mobile,
        technologies: &["React Native", "Node.js", "MongoDB", "Firebase", "TypeScript"],
        image: "https://www.mindinventory.com/blog/wp-content/uploads/2022/10/healthcare-app1200.jpg",
        live_url: "https://healthcare-app.example.com",
        github_url: None,
        featured: true,
        completed: "2023-11-20",
        client_type: "Healthcare",
        awards: &["Healthcare Innovation Award"],
    },
    Project {
        id: 3,
        title: "3D Product Configurator",
        description: "Interactive 3D product customization experience",
        long_description: "An immersive 3D product configurator that allows customers to customize products in real-time. Built with Three.js and WebGL, featuring realistic materials, lighting, and physics. Customers can change colors, materials, and components while seeing real-time price updates.",
        category: ProjectCategory::ThreeD,
        technologies: &["Three.js", "WebGL", "React", "Node.js", "Blender"],
        image: "https://www.smartpixels.fr/wp-content/uploads/2022/03/Camille-Fournet-Configurateur-3D-1-1024x576.png",
        live_url: "https://3d-configurator.example.com",
        github_url: Some("https://github.com/example/3d-configurator"),
        featured: true,
        completed: "2024-02-10",
        client_type: "Manufacturing",
        awards: &[],
    },
    Project {
        id: 4,
        title: "Corporate Website Redesign",
        description: "Modern corporate website with CMS integration",
        long_description: "Complete redesign of a corporate website focusing on user experience and conversion optimization. Features include a custom CMS, blog system, contact forms, and integration with marketing tools. The site achieved a 40% increase in conversion rates post-launch.",
        category: ProjectCategory::Website,
        technologies: &["Next.js", "Sanity CMS", "Tailwind CSS", "Framer Motion"],
        image: "/assets/portfolio/corporate-site.jpg",
        live_url: "https://corporate-site.example.com",
        github_url: None,
        featured: false,
        completed: "2023-12-05",
        client_type: "Corporate",
        awards: &[],
    },
    Project {
        id: 5,
        title: "SaaS Dashboard Design",
        description: "Complete UI/UX design system for SaaS platform",
        long_description: "Comprehensive design system and dashboard interface for a SaaS analytics platform. Includes user research, wireframing, prototyping, and final UI design. The design system covers 50+ components and screens, with a focus on data visualization and user workflow optimization.",
        category: ProjectCategory::Design,
        technologies: &["Figma", "Adobe Creative Suite", "Principle", "InVision"],
        image: "/assets/portfolio/saas-dashboard.jpg",
        live_url: "https://saas-dashboard.example.com",
        github_url: None,
        featured: false,
        completed: "2023-10-15",
        client_type: "SaaS Startup",
        awards: &[],
    },
    Project {
        id: 6,
        title: "Real Estate Platform",
        description: "Property listing and management system",
        long_description: "A comprehensive real estate platform featuring property listings, virtual tours, mortgage calculators, and agent management. Built with modern web technologies and integrated with MLS systems for real-time property data.",
        category: ProjectCategory::WebApp,
        technologies: &["React", "Node.js", "PostgreSQL", "AWS", "Stripe"],
        image: "/assets/portfolio/real-estate.jpg",
        live_url: "https://realestate-platform.example.com",
        github_url: Some("https://github.com/example/realestate"),
        featured: false,
        completed: "2024-03-01",
        client_type: "Real Estate",
        awards: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_returns_every_project() {
        assert_eq!(filter_projects(PortfolioFilter::All).len(), PROJECTS.len());
    }

    #[test]
    fn category_filter_returns_only_matches() {
        let webapps = filter_projects(PortfolioFilter::Only(ProjectCategory::WebApp));
        let ids: Vec<_> = webapps.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 6]);
        assert!(webapps.iter().all(|p| p.category == ProjectCategory::WebApp));
    }

    #[test]
    fn completion_dates_render_as_month_and_year() {
        assert_eq!(find_project(1).unwrap().completed_label(), "January 2024");
        assert_eq!(find_project(2).unwrap().completed_label(), "November 2023");
        for project in PROJECTS.iter() {
            assert!(project.completed_on().is_some(), "{}", project.title);
        }
    }

    #[test]
    fn cards_truncate_technology_tags() {
        let (shown, more) = find_project(1).unwrap().card_technologies();
        assert_eq!(shown, &["Next.js", "React", "TypeScript"]);
        assert_eq!(more, 3);

        let (shown, more) = find_project(4).unwrap().card_technologies();
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 1);
    }

    #[test]
    fn unknown_project_is_none() {
        assert!(find_project(42).is_none());
    }
}
