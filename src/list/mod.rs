// Animated selectable list core
//
// This module is the heart of the crate: an ordered sequence of opaque
// items with pointer/keyboard selection, keyboard-driven autoscroll,
// viewport visibility tracking for entrance animation, and edge-fade
// readouts. It owns no rendering and performs no I/O - the host supplies
// the items and a selection callback, maps its input events onto the
// operations here, and reads the derived state back out each frame.
//
// Sub-state is deliberately disjoint (selection, scroll pane, visibility
// set, fades) so interleaved event handlers never corrupt each other:
// a scroll recompute and a keyboard transition touch different fields.

pub mod autoscroll;
pub mod fade;
pub mod geometry;
pub mod selection;
pub mod visibility;

pub use autoscroll::ScrollPane;
pub use fade::{edge_fades, FadeReadout, FADE_DISTANCE};
pub use geometry::ItemLayout;
pub use selection::{NavKey, SelectOrigin, SelectionState};
pub use visibility::VisibilityTracker;

/// Selection callback: receives the chosen item and its index.
pub type SelectCallback<T> = Box<dyn FnMut(&T, usize) + Send>;

/// Caller-facing options, all cosmetic toggles plus the selection seed
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Route keyboard navigation into the list while mounted
    pub enable_keyboard_nav: bool,
    /// Render the top/bottom edge fades
    pub show_edge_fades: bool,
    /// Render a scrollbar when content overflows
    pub show_scrollbar: bool,
    /// Seed for the selection state (clamped against the sequence)
    pub initial_selected: Option<usize>,
    /// Cap on the viewport height before scrolling engages, in content units
    pub max_viewport_height: f32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            enable_keyboard_nav: true,
            show_edge_fades: true,
            show_scrollbar: true,
            initial_selected: None,
            max_viewport_height: f32::MAX,
        }
    }
}

/// The animated list component
///
/// Generic over the item type; the list never inspects item values, it
/// only hands them back through the selection callback.
pub struct ListView<T> {
    items: Vec<T>,
    layout: ItemLayout,
    selection: SelectionState,
    pane: ScrollPane,
    visibility: VisibilityTracker,
    fades: FadeReadout,
    options: ListOptions,
    on_select: Option<SelectCallback<T>>,

    /// Uniform metrics used when the sequence is replaced
    item_height: f32,
    item_gap: f32,

    /// Edge-fade ramp distance, in content units
    fade_distance: f32,

    /// False after unmount: all operations become no-ops
    mounted: bool,
}

impl<T> ListView<T> {
    /// Mount a list over `items` with uniform item height 1.0 and no gap.
    ///
    /// Hosts with taller rows should call [`ListView::with_metrics`]
    /// before the first render.
    pub fn new(items: Vec<T>, options: ListOptions) -> Self {
        let layout = ItemLayout::uniform(items.len(), 1.0, 0.0);
        let selection = SelectionState::new(options.initial_selected, items.len());
        let mut visibility = VisibilityTracker::new();
        visibility.observe(items.len());

        let mut pane = ScrollPane::new();
        pane.update_dimensions(layout.content_height(), 0.0);

        Self {
            items,
            layout,
            selection,
            pane,
            visibility,
            fades: FadeReadout::default(),
            options,
            on_select: None,
            item_height: 1.0,
            item_gap: 0.0,
            fade_distance: FADE_DISTANCE,
            mounted: true,
        }
    }

    /// Set uniform item metrics and rebuild the layout
    pub fn with_metrics(mut self, item_height: f32, item_gap: f32) -> Self {
        self.item_height = item_height.max(0.0);
        self.item_gap = item_gap.max(0.0);
        self.layout = ItemLayout::uniform(self.items.len(), self.item_height, self.item_gap);
        self.pane
            .update_dimensions(self.layout.content_height(), self.pane.view_height());
        self
    }

    /// Tune the motion constants (from config)
    pub fn with_tuning(
        mut self,
        scroll_speed: f32,
        reveal_margin: f32,
        visibility_margin: f32,
        visibility_threshold: f32,
        fade_distance: f32,
    ) -> Self {
        self.pane = self.pane.with_tuning(scroll_speed, reveal_margin);
        let count = self.items.len();
        self.visibility = VisibilityTracker::new().with_tuning(visibility_margin, visibility_threshold);
        self.visibility.observe(count);
        self.fade_distance = fade_distance.max(f32::EPSILON);
        self
    }

    /// Register the selection callback
    ///
    /// Without one, Enter and Click still move the selection state; the
    /// emission is simply skipped.
    pub fn on_select(mut self, callback: SelectCallback<T>) -> Self {
        self.on_select = Some(callback);
        self
    }

    // ─────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────

    /// Replace the item sequence wholesale
    ///
    /// Resets derived state: the selection index is preserved when still
    /// valid, clamped to the new last item when the sequence shrank, and
    /// cleared when it is empty. Visibility observers for removed items
    /// are disconnected and fresh ones subscribed.
    pub fn set_items(&mut self, items: Vec<T>) {
        if !self.mounted {
            return;
        }
        self.items = items;
        self.layout = ItemLayout::uniform(self.items.len(), self.item_height, self.item_gap);
        self.selection.clamp(self.items.len());
        self.visibility.observe(self.items.len());
        self.pane
            .update_dimensions(self.layout.content_height(), self.pane.view_height());
        self.refresh();
    }

    /// Handle a navigation key
    ///
    /// Returns true when the key was consumed (the host should suppress
    /// the key's default behavior). Gated by `enable_keyboard_nav`.
    pub fn key(&mut self, key: NavKey) -> bool {
        if !self.mounted || !self.options.enable_keyboard_nav {
            return false;
        }
        match key {
            NavKey::Next => {
                if let Some(i) = self.selection.select_next(self.items.len()) {
                    self.autoscroll_to(i);
                }
                true
            }
            NavKey::Prev => {
                if let Some(i) = self.selection.select_prev(self.items.len()) {
                    self.autoscroll_to(i);
                }
                true
            }
            NavKey::Activate => match self.selection.selected() {
                Some(i) => {
                    self.emit(i);
                    true
                }
                None => false,
            },
        }
    }

    /// Pointer entered item `index`'s region: select without scrolling
    pub fn hover(&mut self, index: usize) {
        if !self.mounted {
            return;
        }
        self.selection.hover(index, self.items.len());
    }

    /// Pointer clicked item `index`: select and emit in one transition
    pub fn click(&mut self, index: usize) {
        if !self.mounted {
            return;
        }
        if let Some(i) = self.selection.click(index, self.items.len()) {
            self.emit(i);
        }
    }

    /// Manual scroll by `delta` units (cancels any reveal animation)
    pub fn scroll_by(&mut self, delta: f32) {
        if !self.mounted {
            return;
        }
        self.pane.scroll_by(delta);
        self.refresh();
    }

    /// Viewport resize; the height is capped by `max_viewport_height`
    pub fn set_viewport(&mut self, height: f32) {
        if !self.mounted {
            return;
        }
        let capped = height.min(self.options.max_viewport_height);
        self.pane
            .update_dimensions(self.layout.content_height(), capped);
        self.refresh();
    }

    /// Advance animations and recompute derived state; call once per frame.
    ///
    /// Returns true while a scroll animation is still in motion.
    pub fn tick(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let animating = self.pane.tick();
        self.refresh();
        animating
    }

    /// Tear the list down: disconnect all visibility observers and turn
    /// every subsequent operation into a no-op. Idempotent.
    pub fn unmount(&mut self) {
        self.visibility.disconnect();
        self.mounted = false;
    }

    // ─────────────────────────────────────────────────────────────
    // State queries (read by rendering)
    // ─────────────────────────────────────────────────────────────

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// Whether item `index` has entered the observed region (drives the
    /// entrance animation only; never gates interactivity)
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility.is_visible(index)
    }

    pub fn fades(&self) -> FadeReadout {
        self.fades
    }

    #[allow(dead_code)] // Convenience over pane().scroll_top()
    pub fn scroll_top(&self) -> f32 {
        self.pane.scroll_top()
    }

    #[allow(dead_code)] // Geometry access for hosts measuring their own rows
    pub fn layout(&self) -> &ItemLayout {
        &self.layout
    }

    pub fn pane(&self) -> &ScrollPane {
        &self.pane
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Active visibility observers (test probe)
    #[allow(dead_code)]
    pub fn observer_count(&self) -> usize {
        self.visibility.observer_count()
    }

    /// Map a viewport-relative y coordinate to an item index, for pointer
    /// hit testing
    pub fn index_at_view_y(&self, y: f32) -> Option<usize> {
        self.layout.index_at(self.pane.scroll_top() + y)
    }

    // ─────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────

    fn autoscroll_to(&mut self, index: usize) {
        // Keyboard origin only; hover and click never reach here
        self.pane
            .reveal(self.layout.top(index), self.layout.bottom(index));
    }

    fn emit(&mut self, index: usize) {
        if let Some(callback) = self.on_select.as_mut() {
            if let Some(item) = self.items.get(index) {
                callback(item, index);
            }
        }
    }

    fn refresh(&mut self) {
        self.visibility.notify(&self.layout, &self.pane);
        if self.options.show_edge_fades {
            self.fades = edge_fades(
                self.pane.scroll_top(),
                self.pane.content_height(),
                self.pane.view_height(),
                self.fade_distance,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    type Emitted = Arc<Mutex<Vec<(String, usize)>>>;

    fn list_with_probe(n: usize) -> (ListView<String>, Emitted) {
        let emitted: Emitted = Arc::new(Mutex::new(Vec::new()));
        let probe = Arc::clone(&emitted);
        let items: Vec<String> = (0..n).map(|i| format!("item {i}")).collect();
        let mut list = ListView::new(items, ListOptions::default())
            .with_metrics(60.0, 0.0)
            .on_select(Box::new(move |item: &String, index| {
                probe.lock().unwrap().push((item.clone(), index));
            }));
        list.set_viewport(400.0);
        (list, emitted)
    }

    fn settle(list: &mut ListView<String>) {
        for _ in 0..200 {
            if !list.tick() {
                break;
            }
        }
    }

    #[test]
    fn test_arrow_down_saturates() {
        let (mut list, _) = list_with_probe(3);
        for _ in 0..10 {
            list.key(NavKey::Next);
        }
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn test_hover_then_enter_emits_once() {
        let (mut list, emitted) = list_with_probe(10);
        list.hover(4);
        assert!(list.key(NavKey::Activate));
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![("item 4".to_string(), 4)]
        );
    }

    #[test]
    fn test_click_selects_and_emits_in_one_transition() {
        let (mut list, emitted) = list_with_probe(10);
        list.click(7);
        assert_eq!(list.selected(), Some(7));
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![("item 7".to_string(), 7)]
        );
    }

    #[test]
    fn test_enter_without_selection_emits_nothing() {
        let (mut list, emitted) = list_with_probe(10);
        assert!(!list.key(NavKey::Activate)); // not consumed either
        assert!(emitted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_keyboard_transitions_autoscroll() {
        let (mut list, _) = list_with_probe(20);
        // Walk down to item 10 at [600, 660): must scroll into the band
        for _ in 0..11 {
            list.key(NavKey::Next);
        }
        settle(&mut list);
        assert_eq!(list.scroll_top(), 660.0 - 400.0 + 50.0);
    }

    #[test]
    fn test_pointer_transitions_never_scroll() {
        let (mut list, _) = list_with_probe(20);
        list.hover(15); // far below the viewport
        list.click(15);
        settle(&mut list);
        assert_eq!(list.scroll_top(), 0.0);
    }

    #[test]
    fn test_selection_valid_while_scrolled_out_of_view() {
        let (mut list, _) = list_with_probe(20);
        list.hover(2);
        list.scroll_by(900.0);
        // Item 2 left the viewport; selection is untouched and the item
        // stays clickable regardless of visibility membership
        assert!(!list.is_visible(2));
        assert_eq!(list.selected(), Some(2));
        list.click(2);
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn test_sequence_replacement_clamps_selection() {
        let (mut list, _) = list_with_probe(10);
        list.hover(8);

        // Shorter sequence: clamp to its last item, never dangle
        list.set_items(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(list.selected(), Some(2));

        list.set_items(Vec::new());
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_same_length_replacement_preserves_index() {
        let (mut list, _) = list_with_probe(5);
        list.hover(3);
        let replacement: Vec<String> = (0..5).map(|i| format!("other {i}")).collect();
        list.set_items(replacement);
        assert_eq!(list.selected(), Some(3));
    }

    #[test]
    fn test_replacement_resubscribes_observers() {
        let (mut list, _) = list_with_probe(10);
        assert_eq!(list.observer_count(), 10);
        list.set_items(vec!["x".into()]);
        assert_eq!(list.observer_count(), 1);
    }

    #[test]
    fn test_unmount_releases_observers_and_freezes_state() {
        let (mut list, emitted) = list_with_probe(10);
        list.hover(3);
        list.unmount();
        assert_eq!(list.observer_count(), 0);

        // Everything after teardown is a no-op
        list.key(NavKey::Next);
        list.click(5);
        list.scroll_by(100.0);
        assert_eq!(list.selected(), Some(3));
        assert_eq!(list.scroll_top(), 0.0);
        assert!(emitted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_keyboard_nav_flag_disables_consumption() {
        let items: Vec<String> = (0..5).map(|i| i.to_string()).collect();
        let mut list = ListView::new(
            items,
            ListOptions {
                enable_keyboard_nav: false,
                ..ListOptions::default()
            },
        );
        assert!(!list.key(NavKey::Next));
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_missing_callback_skips_emission_silently() {
        let items: Vec<String> = (0..5).map(|i| i.to_string()).collect();
        let mut list = ListView::new(items, ListOptions::default());
        list.click(2);
        assert_eq!(list.selected(), Some(2));
        list.hover(1);
        assert!(list.key(NavKey::Activate));
    }

    #[test]
    fn test_max_viewport_height_caps_resize() {
        let items: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let mut list = ListView::new(
            items,
            ListOptions {
                max_viewport_height: 200.0,
                ..ListOptions::default()
            },
        )
        .with_metrics(10.0, 0.0);
        list.set_viewport(1000.0);
        assert_eq!(list.pane().view_height(), 200.0);
        assert!(list.pane().needs_scrollbar());
    }

    #[test]
    fn test_fade_readout_tracks_scroll() {
        let (mut list, _) = list_with_probe(20); // content 1200, view 400
        assert_eq!(list.fades().top, 0.0);
        assert_eq!(list.fades().bottom, 1.0);

        list.scroll_by(25.0);
        assert_eq!(list.fades().top, 0.5);

        list.scroll_by(10_000.0); // clamped to bottom
        assert_eq!(list.fades().bottom, 0.0);
        assert_eq!(list.fades().top, 1.0);
    }

    #[test]
    fn test_pointer_hit_testing_through_scroll() {
        let (mut list, _) = list_with_probe(20);
        list.scroll_by(120.0);
        // Viewport y 30 maps to content y 150, inside item 2's box
        assert_eq!(list.index_at_view_y(30.0), Some(2));
    }
}
