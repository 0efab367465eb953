// Visibility tracker
//
// Observes which items currently intersect the viewport (expanded by a
// margin on both ends) and maintains the set of visible indices. The set
// drives the entrance animation only: an item outside it renders in its
// pre-appearance state but stays fully clickable and selectable.
//
// Observer lifecycle mirrors the list's: replacing the item sequence
// disconnects the stale observers and subscribes fresh ones; unmounting
// disconnects everything. Notifications that arrive after disconnect are
// dropped at the top of the handler, so a late callback can never mutate
// torn-down state.

use std::collections::HashSet;

use super::autoscroll::ScrollPane;
use super::geometry::ItemLayout;

/// Margin (in content units) added above and below the viewport when
/// judging visibility, so items animate in just before they scroll on
/// screen.
pub const VISIBILITY_MARGIN: f32 = 50.0;

/// Minimum fraction of an item's box that must overlap the observed
/// region for the item to count as visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// Tracks which item indices are inside the observed region
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    /// Indices currently visible
    visible: HashSet<usize>,

    /// Number of items under observation (one observer per item)
    observed: usize,

    /// False once disconnected; late notifications are ignored
    connected: bool,

    margin: f32,
    threshold: f32,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self {
            visible: HashSet::new(),
            observed: 0,
            connected: false,
            margin: VISIBILITY_MARGIN,
            threshold: VISIBILITY_THRESHOLD,
        }
    }

    /// Override margin and threshold (from config)
    pub fn with_tuning(mut self, margin: f32, threshold: f32) -> Self {
        self.margin = margin.max(0.0);
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Subscribe one observer per item, dropping any previous observers.
    ///
    /// Called on mount and again on every sequence replacement; the old
    /// visibility set is discarded with the old observers so removed
    /// items cannot linger as stale indices.
    pub fn observe(&mut self, item_count: usize) {
        self.disconnect();
        self.observed = item_count;
        self.connected = true;
    }

    /// Disconnect all observers and clear the set
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.observed = 0;
        self.visible.clear();
    }

    /// Active observer count (test probe for leak detection)
    pub fn observer_count(&self) -> usize {
        if self.connected {
            self.observed
        } else {
            0
        }
    }

    /// Whether item `index` is currently inside the observed region
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    /// Intersection notification: recompute membership for every observed
    /// item against the current viewport.
    ///
    /// The platform batches these per frame; the list calls it from
    /// `tick()` and after any scroll or resize. Ignored when disconnected
    /// (a notification delivered after teardown must not mutate state).
    pub fn notify(&mut self, layout: &ItemLayout, pane: &ScrollPane) {
        if !self.connected {
            return;
        }

        let region_top = pane.scroll_top() - self.margin;
        let region_bottom = pane.scroll_top() + pane.view_height() + self.margin;

        for index in 0..self.observed.min(layout.len()) {
            let top = layout.top(index);
            let height = layout.height(index);
            let bottom = top + height;

            let overlap = (bottom.min(region_bottom) - top.max(region_top)).max(0.0);
            let fraction = if height > 0.0 { overlap / height } else { 0.0 };

            if fraction >= self.threshold {
                self.visible.insert(index);
            } else {
                self.visible.remove(&index);
            }
        }
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new()
    }
}
