//! Frame and timer arithmetic for the animated sections. Kept free of DOM
//! access so the views only read and write element offsets.

/// Pixels the tech carousel moves per frame.
pub const AUTO_SCROLL_STEP: f64 = 1.0;
/// Drag distance multiplier for the carousel.
pub const DRAG_SPEED: f64 = 2.0;
/// Distance of one arrow-button jump.
pub const ARROW_JUMP: f64 = 300.0;

/// Next slot in a looping rotation of `len` items.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Offset after one auto-scroll frame. Wraps to the start once the end is
/// reached. `max_offset` is `scroll_width - client_width`.
pub fn auto_scroll(offset: f64, max_offset: f64) -> f64 {
    let next = offset + AUTO_SCROLL_STEP;
    if max_offset <= 0.0 || next >= max_offset {
        0.0
    } else {
        next
    }
}

/// Pointer drag on the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Drag {
    pub start_x: f64,
    pub start_offset: f64,
}

impl Drag {
    pub fn begin(pointer_x: f64, offset: f64) -> Self {
        Self {
            start_x: pointer_x,
            start_offset: offset,
        }
    }

    /// Offset for the pointer at `pointer_x`, kept inside `[0, max_offset]`.
    pub fn offset_at(&self, pointer_x: f64, max_offset: f64) -> f64 {
        let walk = (pointer_x - self.start_x) * DRAG_SPEED;
        (self.start_offset - walk).clamp(0.0, max_offset.max(0.0))
    }
}

pub fn jump(offset: f64, forward: bool, max_offset: f64) -> f64 {
    let delta = if forward { ARROW_JUMP } else { -ARROW_JUMP };
    (offset + delta).clamp(0.0, max_offset.max(0.0))
}

/// Pose of the spinning demo objects at `frame`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub yaw: f64,
    pub pitch: f64,
    pub bob: f64,
}

pub fn spin_at(frame: u32) -> Spin {
    let t = f64::from(frame);
    Spin {
        yaw: (t * 0.05) % std::f64::consts::TAU,
        pitch: 0.3 + (t * 0.02).sin() * 0.15,
        bob: (t * 0.05).sin() * 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(next_index(0, 6), 1);
        assert_eq!(next_index(5, 6), 0);
        assert_eq!(next_index(3, 0), 0);
    }

    #[test]
    fn auto_scroll_advances_then_wraps() {
        assert_eq!(auto_scroll(0.0, 500.0), 1.0);
        assert_eq!(auto_scroll(498.0, 500.0), 499.0);
        assert_eq!(auto_scroll(499.0, 500.0), 0.0);
        assert_eq!(auto_scroll(10.0, 0.0), 0.0);
    }

    #[test]
    fn drag_moves_opposite_to_pointer_at_double_speed() {
        let drag = Drag::begin(100.0, 200.0);
        assert_eq!(drag.offset_at(80.0, 1_000.0), 240.0);
        assert_eq!(drag.offset_at(150.0, 1_000.0), 100.0);
    }

    #[test]
    fn drag_stays_in_range() {
        let drag = Drag::begin(0.0, 50.0);
        assert_eq!(drag.offset_at(500.0, 1_000.0), 0.0);
        assert_eq!(drag.offset_at(-5_000.0, 1_000.0), 1_000.0);
    }

    #[test]
    fn arrow_jumps_are_clamped() {
        assert_eq!(jump(100.0, true, 1_000.0), 400.0);
        assert_eq!(jump(100.0, false, 1_000.0), 0.0);
        assert_eq!(jump(900.0, true, 1_000.0), 1_000.0);
    }

    #[test]
    fn spin_is_periodic_in_yaw() {
        let pose = spin_at(0);
        assert_eq!(pose.yaw, 0.0);
        assert!(spin_at(10_000).yaw < std::f64::consts::TAU);
    }
}
