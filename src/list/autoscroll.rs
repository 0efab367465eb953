// Scroll pane with keyboard-driven autoscroll
//
// Owns the scroll offset of the list viewport in content units. Two things
// move it: manual scrolling (mouse wheel - immediate, cancels any
// animation) and the autoscroll controller (keyboard navigation - smooth
// animation toward a target that keeps the selected item inside a margin
// band). When both race, last write wins: the most recent input sets the
// final intent.
//
// The animation is an exponential ease-out: each tick the offset moves a
// fixed fraction of the remaining distance and snaps once the remainder
// drops under half a unit. A new keyboard transition retargets the
// in-flight animation rather than queueing behind it.

/// Margin band (in content units) kept between a keyboard-selected item
/// and the viewport edges.
pub const REVEAL_MARGIN: f32 = 50.0;

/// Fraction of the remaining distance covered per tick.
/// Good range at ~30 fps: 0.25-0.45.
const DEFAULT_SCROLL_SPEED: f32 = 0.35;

/// Distance under which an animation snaps to its target and settles.
const SETTLE_EPSILON: f32 = 0.5;

/// Scroll state for the list viewport
#[derive(Debug, Clone)]
pub struct ScrollPane {
    /// Current scroll offset (top of the viewport in content coordinates)
    scroll_top: f32,

    /// Total content height, from the item layout
    content_height: f32,

    /// Visible viewport height
    view_height: f32,

    /// Animation target; None when settled
    target: Option<f32>,

    /// Ease-out speed, clamped to (0, 1]
    speed: f32,

    /// Margin kept around a revealed item
    margin: f32,
}

impl ScrollPane {
    pub fn new() -> Self {
        Self {
            scroll_top: 0.0,
            content_height: 0.0,
            view_height: 0.0,
            target: None,
            speed: DEFAULT_SCROLL_SPEED,
            margin: REVEAL_MARGIN,
        }
    }

    /// Override animation speed and reveal margin (from config)
    pub fn with_tuning(mut self, speed: f32, margin: f32) -> Self {
        self.speed = speed.clamp(0.05, 1.0);
        self.margin = margin.max(0.0);
        self
    }

    /// Current scroll offset
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    /// Whether a reveal animation is still in flight
    #[allow(dead_code)] // Hosts without a tick timer poll this before settle()
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Whether the content overflows the viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.content_height > self.view_height
    }

    /// Update content and viewport dimensions
    ///
    /// Call on every layout change or resize. The current offset is
    /// clamped into the new valid range.
    pub fn update_dimensions(&mut self, content_height: f32, view_height: f32) {
        self.content_height = content_height.max(0.0);
        self.view_height = view_height.max(0.0);
        self.scroll_top = self.clamp_offset(self.scroll_top);
        if let Some(t) = self.target {
            self.target = Some(self.clamp_offset(t));
        }
    }

    /// Manual scroll by `delta` units (mouse wheel)
    ///
    /// Applies immediately and cancels any reveal animation in flight.
    pub fn scroll_by(&mut self, delta: f32) {
        self.target = None;
        self.scroll_top = self.clamp_offset(self.scroll_top + delta);
    }

    /// Ensure the box `[item_top, item_bottom)` ends up inside the margin
    /// band of the viewport, scrolling the minimum amount necessary.
    ///
    /// Called only for keyboard-origin selection transitions. If the item
    /// already sits inside `[scroll_top + margin, scroll_top + view_height
    /// - margin]` nothing happens. Items taller than the band are revealed
    /// from the top.
    pub fn reveal(&mut self, item_top: f32, item_bottom: f32) {
        // Judge against the animation target when one is in flight, so a
        // burst of key repeats retargets instead of fighting the easing.
        let base = self.target.unwrap_or(self.scroll_top);

        if item_top < base + self.margin {
            self.animate_to(item_top - self.margin);
        } else if item_bottom > base + self.view_height - self.margin {
            self.animate_to(item_bottom - self.view_height + self.margin);
        }
    }

    /// Advance the reveal animation by one tick
    ///
    /// Returns true while motion is still visible (the host keeps
    /// redrawing until it settles).
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let remaining = target - self.scroll_top;
        if remaining.abs() < SETTLE_EPSILON {
            self.scroll_top = target;
            self.target = None;
            return false;
        }
        self.scroll_top += remaining * self.speed;
        true
    }

    /// Jump the animation to its end state (used by tests and by hosts
    /// that render without a tick timer).
    #[allow(dead_code)]
    pub fn settle(&mut self) {
        if let Some(target) = self.target.take() {
            self.scroll_top = target;
        }
    }

    fn animate_to(&mut self, target: f32) {
        self.target = Some(self.clamp_offset(target));
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        let max = (self.content_height - self.view_height).max(0.0);
        offset.clamp(0.0, max)
    }
}

impl Default for ScrollPane {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pane(content: f32, view: f32) -> ScrollPane {
        let mut p = ScrollPane::new().with_tuning(0.35, 50.0);
        p.update_dimensions(content, view);
        p
    }

    #[test]
    fn test_reveal_from_below() {
        let mut p = pane(1000.0, 400.0);
        // Item at [500, 560) is past the bottom band; target puts its
        // bottom margin units above the viewport's lower edge.
        p.reveal(500.0, 560.0);
        p.settle();
        assert_eq!(p.scroll_top(), 560.0 - 400.0 + 50.0);
    }

    #[test]
    fn test_reveal_from_above() {
        let mut p = pane(1000.0, 400.0);
        p.scroll_by(300.0);
        p.reveal(200.0, 260.0); // item above the top band
        p.settle();
        assert_eq!(p.scroll_top(), 150.0);
    }

    #[test]
    fn test_reveal_inside_band_is_noop() {
        let mut p = pane(1000.0, 400.0);
        p.scroll_by(100.0);
        // Band is [150, 450); item fully inside it
        p.reveal(200.0, 260.0);
        assert!(!p.is_animating());
        assert_eq!(p.scroll_top(), 100.0);
    }

    #[test]
    fn test_reveal_clamps_at_edges() {
        let mut p = pane(1000.0, 400.0);
        // First item: naive target would be negative
        p.reveal(0.0, 60.0);
        p.settle();
        assert_eq!(p.scroll_top(), 0.0);

        // Last item: naive target would overshoot max offset
        p.reveal(940.0, 1000.0);
        p.settle();
        assert_eq!(p.scroll_top(), 600.0);
    }

    #[test]
    fn test_animation_approaches_and_settles() {
        let mut p = pane(1000.0, 400.0);
        p.reveal(500.0, 560.0);
        assert!(p.is_animating());

        let mut last = p.scroll_top();
        let mut ticks = 0;
        while p.tick() {
            assert!(p.scroll_top() > last); // monotone approach
            last = p.scroll_top();
            ticks += 1;
            assert!(ticks < 100, "animation failed to settle");
        }
        assert_eq!(p.scroll_top(), 210.0);
        assert!(!p.is_animating());
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut p = pane(1000.0, 400.0);
        p.reveal(500.0, 560.0);
        assert!(p.is_animating());

        // Last write wins: the wheel takes over immediately
        p.scroll_by(10.0);
        assert!(!p.is_animating());
        assert_eq!(p.scroll_top(), 10.0);
    }

    #[test]
    fn test_retarget_in_flight() {
        let mut p = pane(1000.0, 400.0);
        p.reveal(500.0, 560.0);
        p.tick();
        // New keyboard transition supersedes the old target
        p.reveal(620.0, 680.0);
        p.settle();
        assert_eq!(p.scroll_top(), 680.0 - 400.0 + 50.0);
    }

    #[test]
    fn test_content_fits_viewport_never_scrolls() {
        let mut p = pane(300.0, 400.0);
        p.scroll_by(50.0);
        assert_eq!(p.scroll_top(), 0.0);
        p.reveal(100.0, 160.0);
        p.settle();
        assert_eq!(p.scroll_top(), 0.0);
        assert!(!p.needs_scrollbar());
    }

    #[test]
    fn test_resize_clamps_offset() {
        let mut p = pane(1000.0, 400.0);
        p.scroll_by(600.0);
        assert_eq!(p.scroll_top(), 600.0);

        // Viewport grows: old offset is now past the max
        p.update_dimensions(1000.0, 800.0);
        assert_eq!(p.scroll_top(), 200.0);
    }
}
