//! Pan/zoom/drag state for the map surface. Pure math; the component layer
//! feeds it pointer events and timestamps.

use crate::model::CategoryId;

pub const ZOOM_MIN: f64 = 0.3;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;
/// A press/release pair shorter than this is a click (select); anything
/// longer is a drag and suppresses selection.
pub const CLICK_MAX_MS: f64 = 200.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    /// Pixel pan offset, applied on top of the scaled transform.
    pub offset_x: f64,
    pub offset_y: f64,
    pub panning: bool,
    /// Node currently under a press (category id or subcategory label).
    pub dragged_node: Option<CategoryId>,
    pub press_started_ms: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            panning: false,
            dragged_node: None,
            press_started_ms: 0.0,
        }
    }
}

impl Viewport {
    /// One wheel tick: scroll sign picks the direction, step 0.1, clamped.
    pub fn apply_wheel(&mut self, delta_y: f64) {
        let direction = if delta_y > 0.0 { -1.0 } else { 1.0 };
        self.zoom = (self.zoom + direction * ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Press on a node starts a node drag; press on empty canvas starts a
    /// pan. Either way the timestamp feeds click-vs-drag disambiguation.
    pub fn begin_press(&mut self, node: Option<CategoryId>, now_ms: f64) {
        self.press_started_ms = now_ms;
        match node {
            Some(id) => self.dragged_node = Some(id),
            None => self.panning = true,
        }
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn end_press(&mut self) {
        self.panning = false;
        self.dragged_node = None;
    }

    pub fn is_click(&self, now_ms: f64) -> bool {
        now_ms - self.press_started_ms < CLICK_MAX_MS
    }

    /// Convert a pointer position relative to the container (pixels) into
    /// percentage space, undoing the current pan offset and zoom.
    pub fn to_percent(&self, px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
        (
            (px - self.offset_x) / self.zoom / width * 100.0,
            (py - self.offset_y) / self.zoom / height * 100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_zoom_steps_and_clamps() {
        let mut vp = Viewport::default();
        vp.apply_wheel(-120.0);
        assert!((vp.zoom - 1.1).abs() < 1e-9);
        vp.apply_wheel(120.0);
        vp.apply_wheel(120.0);
        assert!((vp.zoom - 0.9).abs() < 1e-9);

        for _ in 0..100 {
            vp.apply_wheel(120.0);
        }
        assert_eq!(vp.zoom, ZOOM_MIN);
        for _ in 0..100 {
            vp.apply_wheel(-120.0);
        }
        assert_eq!(vp.zoom, ZOOM_MAX);
    }

    #[test]
    fn click_vs_drag_threshold_at_200ms() {
        let mut vp = Viewport::default();
        vp.begin_press(None, 1_000.0);
        assert!(vp.is_click(1_199.0));
        assert!(!vp.is_click(1_200.0));
    }

    #[test]
    fn press_on_node_drags_press_on_canvas_pans() {
        let mut vp = Viewport::default();
        vp.begin_press(Some("sensory".to_string()), 0.0);
        assert_eq!(vp.dragged_node.as_deref(), Some("sensory"));
        assert!(!vp.panning);
        vp.end_press();

        vp.begin_press(None, 0.0);
        assert!(vp.panning);
        assert!(vp.dragged_node.is_none());
        vp.end_press();
        assert!(!vp.panning);
    }

    #[test]
    fn to_percent_undoes_offset_and_zoom() {
        let mut vp = Viewport::default();
        vp.zoom = 2.0;
        vp.offset_x = 100.0;
        vp.offset_y = 50.0;
        let (x, y) = vp.to_percent(500.0, 450.0, 1000.0, 800.0);
        assert!((x - 20.0).abs() < 1e-9);
        assert!((y - 25.0).abs() < 1e-9);
    }
}
