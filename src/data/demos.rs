#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoKind {
    AnimatedCube,
    ProductConfigurator,
    ParticleSystem,
    MorphingGeometry,
    InteractiveEnvironment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Beginner => "Beginner",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Complexity::Beginner => "#16a34a",
            Complexity::Intermediate => "#ca8a04",
            Complexity::Advanced => "#dc2626",
        }
    }
}

pub struct Demo {
    pub kind: DemoKind,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub controls: [&'static str; 3],
    pub technologies: [&'static str; 3],
    pub complexity: Complexity,
}

pub const DEMOS: [Demo; 5] = [
    Demo {
        kind: DemoKind::AnimatedCube,
        title: "Animated Geometry",
        description: "Interactive 3D cube with smooth animations and color customization",
        category: "Animation",
        controls: ["Play/Pause", "Color Picker", "Reset"],
        technologies: ["Three.js", "React Three Fiber", "WebGL"],
        complexity: Complexity::Beginner,
    },
    Demo {
        kind: DemoKind::ProductConfigurator,
        title: "Product Configurator",
        description: "Real-time material and color customization for 3D products",
        category: "E-commerce",
        controls: ["Material Selector", "Color Picker", "Rotation"],
        technologies: ["Three.js", "PBR Materials", "Real-time Rendering"],
        complexity: Complexity::Intermediate,
    },
    Demo {
        kind: DemoKind::ParticleSystem,
        title: "Particle System",
        description: "Dynamic particle effects with customizable parameters",
        category: "Effects",
        controls: ["Particle Count", "Animation Speed", "Color"],
        technologies: ["Three.js", "Buffer Geometry", "Shaders"],
        complexity: Complexity::Advanced,
    },
    Demo {
        kind: DemoKind::MorphingGeometry,
        title: "Morphing Geometry",
        description: "Distorted materials with real-time morphing effects",
        category: "Experimental",
        controls: ["Distortion Amount", "Speed", "Play/Pause"],
        technologies: ["Three.js", "Custom Shaders", "Noise Functions"],
        complexity: Complexity::Advanced,
    },
    Demo {
        kind: DemoKind::InteractiveEnvironment,
        title: "Interactive Environment",
        description: "Floating objects with dynamic lighting and physics",
        category: "Environment",
        controls: ["Light Intensity", "Object Speed", "Environment"],
        technologies: ["Three.js", "Physics", "Dynamic Lighting"],
        complexity: Complexity::Intermediate,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Metal,
    Glass,
    Plastic,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Metal, Material::Glass, Material::Plastic];

    pub fn label(self) -> &'static str {
        match self {
            Material::Metal => "metal",
            Material::Glass => "glass",
            Material::Plastic => "plastic",
        }
    }

    /// Fill opacity used when shading the product surface.
    pub fn opacity(self) -> f64 {
        match self {
            Material::Metal => 0.9,
            Material::Glass => 0.25,
            Material::Plastic => 0.7,
        }
    }
}

pub const MIN_PARTICLES: u32 = 100;
pub const MAX_PARTICLES: u32 = 5_000;
pub const MIN_LIGHT: f64 = 0.0;
pub const MAX_LIGHT: f64 = 3.0;

pub const PRESET_COLORS: [&str; 6] = ["#8b5cf6", "#3b82f6", "#6366f1", "#f97316", "#facc15", "#10b981"];

/// Scalar inputs handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoControls {
    pub active: usize,
    pub playing: bool,
    pub fullscreen: bool,
    pub cube_color: String,
    pub product_color: String,
    pub material: Material,
    pub particle_count: u32,
    pub light_intensity: f64,
}

impl Default for DemoControls {
    fn default() -> Self {
        Self {
            active: 0,
            playing: true,
            fullscreen: false,
            cube_color: "#8b5cf6".to_string(),
            product_color: "#3b82f6".to_string(),
            material: Material::Metal,
            particle_count: 1_000,
            light_intensity: 1.0,
        }
    }
}

impl DemoControls {
    pub fn demo(&self) -> &'static Demo {
        &DEMOS[self.active.min(DEMOS.len() - 1)]
    }

    pub fn select(&mut self, index: usize) {
        if index < DEMOS.len() {
            self.active = index;
        }
    }

    pub fn set_particle_count(&mut self, count: u32) {
        self.particle_count = count.clamp(MIN_PARTICLES, MAX_PARTICLES);
    }

    pub fn set_light_intensity(&mut self, intensity: f64) {
        self.light_intensity = if intensity.is_finite() {
            intensity.clamp(MIN_LIGHT, MAX_LIGHT)
        } else {
            1.0
        };
    }

    /// Restores the defaults of the current demo's controls.
    pub fn reset(&mut self) {
        let active = self.active;
        *self = Self::default();
        self.active = active;
    }
}

/// Parses `#rrggbb` into RGB components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#8b5cf6"), Some((0x8b, 0x5c, 0xf6)));
        assert_eq!(parse_hex_color("8b5cf6"), None);
        assert_eq!(parse_hex_color("#8b5cf"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn controls_are_clamped() {
        let mut controls = DemoControls::default();
        controls.set_particle_count(10);
        assert_eq!(controls.particle_count, MIN_PARTICLES);
        controls.set_particle_count(1_000_000);
        assert_eq!(controls.particle_count, MAX_PARTICLES);
        controls.set_light_intensity(9.0);
        assert_eq!(controls.light_intensity, MAX_LIGHT);
        controls.set_light_intensity(f64::NAN);
        assert_eq!(controls.light_intensity, 1.0);
    }

    #[test]
    fn select_ignores_out_of_range_and_reset_keeps_demo() {
        let mut controls = DemoControls::default();
        controls.select(3);
        controls.select(17);
        assert_eq!(controls.demo().kind, DemoKind::MorphingGeometry);

        controls.playing = false;
        controls.cube_color = "#000000".to_string();
        controls.reset();
        assert_eq!(controls.active, 3);
        assert!(controls.playing);
        assert_eq!(controls.cube_color, "#8b5cf6");
    }
}
