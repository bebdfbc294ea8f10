use super::services::Stat;

pub struct TechCategory {
    pub name: &'static str,
    pub gradient: &'static str,
    pub technologies: [&'static str; 8],
}

pub const TECH_CATEGORIES: [TechCategory; 5] = [
    TechCategory {
        name: "Frontend",
        gradient: "linear-gradient(90deg, #9333ea, #2563eb)",
        technologies: ["React", "Next.js", "Vue", "Angular", "Svelte", "TypeScript", "Tailwind CSS", "Framer Motion"],
    },
    TechCategory {
        name: "Backend",
        gradient: "linear-gradient(90deg, #2563eb, #4f46e5)",
        technologies: ["Node.js", "Express", "Python", "Django", "Ruby on Rails", "PHP", "Java", "GraphQL"],
    },
    TechCategory {
        name: "Mobile",
        gradient: "linear-gradient(90deg, #4f46e5, #9333ea)",
        technologies: ["React Native", "Flutter", "Swift", "Kotlin", "Ionic", "Expo", "Android", "iOS"],
    },
    TechCategory {
        name: "Database",
        gradient: "linear-gradient(90deg, #a855f7, #3b82f6)",
        technologies: ["MongoDB", "PostgreSQL", "MySQL", "Firebase", "Supabase", "Redis", "Prisma", "DynamoDB"],
    },
    TechCategory {
        name: "DevOps",
        gradient: "linear-gradient(90deg, #3b82f6, #6366f1)",
        technologies: ["Docker", "Kubernetes", "AWS", "Vercel", "GitHub Actions", "Terraform", "Netlify", "CircleCI"],
    },
];

pub const TECH_STATS: [Stat; 3] = [
    Stat { value: "50+", label: "Technologies" },
    Stat { value: "8+", label: "Years Experience" },
    Stat { value: "100%", label: "Project Success" },
];

/// Placeholder logo: the first letter of the technology.
pub fn monogram(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monogram_uses_first_letter() {
        assert_eq!(monogram("kubernetes"), "K");
        assert_eq!(monogram("Next.js"), "N");
        assert_eq!(monogram(""), "");
    }

    #[test]
    fn every_category_has_unique_technologies() {
        for category in TECH_CATEGORIES.iter() {
            let mut names = category.technologies.to_vec();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), category.technologies.len(), "{}", category.name);
        }
    }
}
