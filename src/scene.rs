//! Demo viewer scenes, projected onto a 2D canvas with plotters.

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

use crate::data::demos::{parse_hex_color, DemoControls, DemoKind, MAX_LIGHT};
use crate::motion::spin_at;

pub type Point3 = (f64, f64, f64);

const EXTENT: f64 = 5.0;
const BACKGROUND: RGBColor = RGBColor(248, 250, 252);
const FLOOR: RGBColor = RGBColor(226, 232, 240);
const PARTICLE: RGBColor = RGBColor(139, 92, 246);
const MORPH: RGBColor = RGBColor(59, 130, 246);
const ENV_COLORS: [RGBColor; 3] = [RGBColor(139, 92, 246), RGBColor(59, 130, 246), RGBColor(99, 102, 241)];

/// Edges of an axis-aligned box centred on `center`.
pub fn box_edges(center: Point3, half: Point3) -> Vec<[Point3; 2]> {
    let (cx, cy, cz) = center;
    let (hx, hy, hz) = half;
    let corner = |i: usize| -> Point3 {
        (
            if i & 1 == 0 { cx - hx } else { cx + hx },
            if i & 2 == 0 { cy - hy } else { cy + hy },
            if i & 4 == 0 { cz - hz } else { cz + hz },
        )
    };

    let mut edges = Vec::with_capacity(12);
    for i in 0..8 {
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                edges.push([corner(i), corner(i | bit)]);
            }
        }
    }
    edges
}

/// Latitude rings of a sphere. `radius_at(theta, phi)` lets callers distort
/// the surface.
pub fn sphere_rings<F>(center: Point3, rings: usize, segments: usize, radius_at: F) -> Vec<Vec<Point3>>
where
    F: Fn(f64, f64) -> f64,
{
    let (cx, cy, cz) = center;
    (1..rings)
        .map(|ring| {
            let theta = std::f64::consts::PI * ring as f64 / rings as f64;
            (0..=segments)
                .map(|seg| {
                    let phi = std::f64::consts::TAU * seg as f64 / segments as f64;
                    let r = radius_at(theta, phi);
                    (
                        cx + r * theta.sin() * phi.cos(),
                        cy + r * theta.cos(),
                        cz + r * theta.sin() * phi.sin(),
                    )
                })
                .collect()
        })
        .collect()
}

/// Deterministic particle cloud inside `[-EXTENT, EXTENT]^3`.
pub fn particle_cloud(count: u32, seed: u64) -> Vec<Point3> {
    let mut state = seed.max(1);
    let mut next = move || {
        // xorshift64*
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        let bits = state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
        (bits as f64 / (1u64 << 53) as f64 - 0.5) * 2.0 * EXTENT
    };
    (0..count).map(|_| (next(), next(), next())).collect()
}

fn floor_grid(y: f64) -> Vec<Vec<Point3>> {
    let steps = [-4.0, -2.0, 0.0, 2.0, 4.0];
    let mut lines = Vec::new();
    for s in steps {
        lines.push(vec![(s, y, -4.0), (s, y, 4.0)]);
        lines.push(vec![(-4.0, y, s), (4.0, y, s)]);
    }
    lines
}

fn color_or(hex: &str, fallback: RGBColor) -> RGBColor {
    parse_hex_color(hex)
        .map(|(r, g, b)| RGBColor(r, g, b))
        .unwrap_or(fallback)
}

fn light_alpha(intensity: f64) -> f64 {
    (0.3 + 0.7 * (intensity / MAX_LIGHT)).clamp(0.1, 1.0)
}

/// Draws the active demo for animation frame `frame`.
pub fn draw_scene(canvas: HtmlCanvasElement, controls: &DemoControls, frame: u32) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).map_err(|e| e.to_string())?;

    let spin = spin_at(frame);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_3d(-EXTENT..EXTENT, -EXTENT..EXTENT, -EXTENT..EXTENT)
        .map_err(|e| e.to_string())?;
    chart.with_projection(|mut pb| {
        pb.yaw = spin.yaw;
        pb.pitch = spin.pitch;
        pb.scale = 0.9;
        pb.into_matrix()
    });

    match controls.demo().kind {
        DemoKind::AnimatedCube => {
            let color = color_or(&controls.cube_color, PARTICLE);
            let edges = box_edges((0.0, spin.bob, 0.0), (1.0, 1.0, 1.0));
            chart
                .draw_series(
                    edges
                        .into_iter()
                        .map(|edge| PathElement::new(edge.to_vec(), color.stroke_width(3))),
                )
                .map_err(|e| e.to_string())?;
        }
        DemoKind::ProductConfigurator => {
            chart
                .draw_series(floor_grid(-2.0).into_iter().map(|line| PathElement::new(line, &FLOOR)))
                .map_err(|e| e.to_string())?;
            let color = color_or(&controls.product_color, MORPH).mix(controls.material.opacity());
            let rings = sphere_rings((0.0, 0.0, 0.0), 14, 36, |_, _| 1.5);
            chart
                .draw_series(rings.into_iter().map(|ring| PathElement::new(ring, color.stroke_width(2))))
                .map_err(|e| e.to_string())?;
        }
        DemoKind::ParticleSystem => {
            let cloud = particle_cloud(controls.particle_count, 0x5EED);
            chart
                .draw_series(cloud.into_iter().map(|p| Circle::new(p, 1, PARTICLE.filled())))
                .map_err(|e| e.to_string())?;
        }
        DemoKind::MorphingGeometry => {
            let t = f64::from(frame) * 0.1;
            let rings = sphere_rings((0.0, 0.0, 0.0), 16, 48, |theta, phi| {
                1.5 * (1.0 + 0.25 * (3.0 * theta + t).sin() * (2.0 * phi + t).cos())
            });
            chart
                .draw_series(rings.into_iter().map(|ring| PathElement::new(ring, MORPH.stroke_width(2))))
                .map_err(|e| e.to_string())?;
        }
        DemoKind::InteractiveEnvironment => {
            let alpha = light_alpha(controls.light_intensity);
            let t = f64::from(frame) * 0.05;
            let objects = [
                box_edges((-2.0, t.sin() * 0.6, 0.0), (0.5, 0.5, 0.5)),
                box_edges((0.0, (t * 0.8).sin() * 0.9, -2.0), (0.3, 1.0, 0.3)),
            ];
            for (edges, color) in objects.into_iter().zip([ENV_COLORS[0], ENV_COLORS[2]]) {
                chart
                    .draw_series(
                        edges
                            .into_iter()
                            .map(|edge| PathElement::new(edge.to_vec(), color.mix(alpha).stroke_width(2))),
                    )
                    .map_err(|e| e.to_string())?;
            }
            let sphere = sphere_rings((2.0, (t * 1.5).sin() * 0.4, 0.0), 10, 24, |_, _| 0.8);
            chart
                .draw_series(
                    sphere
                        .into_iter()
                        .map(|ring| PathElement::new(ring, ENV_COLORS[1].mix(alpha).stroke_width(2))),
                )
                .map_err(|e| e.to_string())?;
        }
    }

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(a: Point3, b: Point3) -> f64 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2) + (a.2 - b.2).powi(2)).sqrt()
    }

    #[test]
    fn cube_has_twelve_equal_edges() {
        let edges = box_edges((0.0, 0.0, 0.0), (1.0, 1.0, 1.0));
        assert_eq!(edges.len(), 12);
        assert!(edges.iter().all(|[a, b]| (length(*a, *b) - 2.0).abs() < 1e-9));
    }

    #[test]
    fn undistorted_sphere_points_sit_on_radius() {
        let rings = sphere_rings((1.0, 0.0, 0.0), 8, 16, |_, _| 1.5);
        assert_eq!(rings.len(), 7);
        for ring in rings {
            assert_eq!(ring.len(), 17);
            for p in ring {
                assert!((length(p, (1.0, 0.0, 0.0)) - 1.5).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn particle_cloud_is_deterministic_and_bounded() {
        let a = particle_cloud(500, 7);
        let b = particle_cloud(500, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 500);
        assert!(a
            .iter()
            .all(|&(x, y, z)| [x, y, z].iter().all(|v| (-EXTENT..=EXTENT).contains(v))));
        assert_ne!(particle_cloud(10, 7), particle_cloud(10, 8));
    }

    #[test]
    fn light_alpha_scales_with_intensity() {
        assert!(light_alpha(0.0) < light_alpha(1.0));
        assert_eq!(light_alpha(MAX_LIGHT), 1.0);
        assert_eq!(light_alpha(MAX_LIGHT * 2.0), 1.0);
    }
}
