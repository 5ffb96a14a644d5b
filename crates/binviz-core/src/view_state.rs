//! Camera state for an external viewer
//!
//! The decoder never touches this; a renderer owns a [`ViewState`], feeds it
//! input deltas and advances it once per frame.

/// Smallest zoom level a scroll can reach.
pub const MIN_ZOOM: f64 = 0.1;

/// Degrees of rotation for a drag across the full viewport.
pub const DRAG_DEGREES: f64 = 100.0;

/// Scroll divisor when the fast-zoom modifier is not held.
pub const SLOW_SCROLL_DIVISOR: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub zoom: f64,
    pub zoom_target: f64,
    /// Rotation about the x and y axes, in degrees.
    pub rotation: [f64; 2],
    pub rotation_target: [f64; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            zoom_target: 1.0,
            rotation: [0.0, 0.0],
            rotation_target: [0.0, 0.0],
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved by `(dx, dy)` pixels while dragging in a `width` x
    /// `height` viewport.
    pub fn drag(&mut self, dx: f64, dy: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.rotation_target[0] -= dx / width as f64 * DRAG_DEGREES;
        self.rotation_target[1] -= dy / height as f64 * DRAG_DEGREES;
    }

    /// Scroll wheel moved by `offset`. `fast` applies the offset unscaled.
    pub fn scroll(&mut self, offset: f64, fast: bool) {
        if fast {
            self.zoom_target += offset;
        } else {
            self.zoom_target += offset / SLOW_SCROLL_DIVISOR;
        }
        if self.zoom_target < MIN_ZOOM {
            self.zoom_target = MIN_ZOOM;
        }
    }

    /// Moves zoom and rotation toward their targets by a fraction `dt` of
    /// the remaining distance.
    pub fn step(&mut self, dt: f64) {
        self.zoom += (self.zoom_target - self.zoom) * dt;
        for axis in 0..2 {
            self.rotation[axis] += (self.rotation_target[axis] - self.rotation[axis]) * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped() {
        let mut view = ViewState::new();
        view.scroll(-50.0, true);
        assert_eq!(view.zoom_target, MIN_ZOOM);
        view.scroll(-1.0, false);
        assert_eq!(view.zoom_target, MIN_ZOOM);
    }

    #[test]
    fn slow_scroll_is_scaled() {
        let mut view = ViewState::new();
        view.scroll(5.0, false);
        assert!((view.zoom_target - 1.2).abs() < 1e-12);
    }

    #[test]
    fn drag_rotates_against_motion() {
        let mut view = ViewState::new();
        view.drag(320.0, -240.0, 640, 480);
        assert_eq!(view.rotation_target, [-50.0, 50.0]);
        view.drag(10.0, 10.0, 0, 480);
        assert_eq!(view.rotation_target, [-50.0, 50.0]);
    }

    #[test]
    fn step_eases_toward_target() {
        let mut view = ViewState::new();
        view.scroll(3.0, true);
        view.drag(640.0, 0.0, 640, 480);

        view.step(0.5);
        assert!((view.zoom - 2.5).abs() < 1e-12);
        assert!((view.rotation[0] + 50.0).abs() < 1e-12);

        view.step(1.0);
        assert_eq!(view.zoom, view.zoom_target);
        assert_eq!(view.rotation, view.rotation_target);
    }
}
