// Item layout in content coordinates
//
// The list core measures everything in abstract f32 units rather than
// terminal rows or pixels. The host decides what a unit means (the TUI
// maps one unit to one terminal row) and reports per-item heights here.
// All other list components (autoscroll, visibility, fades) read item
// boxes and the total content height from this layout.

/// Per-item geometry for the list content.
///
/// Items are stacked vertically in sequence order, separated by a fixed
/// gap. Boxes are half-open: item `i` occupies `[top(i), bottom(i))`.
#[derive(Debug, Clone)]
pub struct ItemLayout {
    /// Height of each item, in content units
    heights: Vec<f32>,

    /// Vertical gap between consecutive items
    gap: f32,
}

impl ItemLayout {
    /// Layout with explicit per-item heights
    pub fn new(heights: Vec<f32>, gap: f32) -> Self {
        Self { heights, gap }
    }

    /// Layout for `count` items of identical height
    pub fn uniform(count: usize, height: f32, gap: f32) -> Self {
        Self {
            heights: vec![height; count],
            gap,
        }
    }

    /// Number of items in the layout
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[allow(dead_code)] // Completes the len/is_empty pair
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Top edge of item `index` in content coordinates
    ///
    /// Out-of-range indices return the content height (the position an
    /// appended item would start at).
    pub fn top(&self, index: usize) -> f32 {
        self.heights
            .iter()
            .take(index)
            .map(|h| h + self.gap)
            .sum()
    }

    /// Bottom edge of item `index` in content coordinates
    pub fn bottom(&self, index: usize) -> f32 {
        self.top(index) + self.heights.get(index).copied().unwrap_or(0.0)
    }

    /// Height of item `index` (0.0 when out of range)
    pub fn height(&self, index: usize) -> f32 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }

    /// Total content height, including inter-item gaps
    pub fn content_height(&self) -> f32 {
        if self.heights.is_empty() {
            return 0.0;
        }
        let items: f32 = self.heights.iter().sum();
        items + self.gap * (self.heights.len() - 1) as f32
    }

    /// Item whose box contains content coordinate `y`, for pointer hit
    /// testing. Coordinates inside a gap belong to no item.
    pub fn index_at(&self, y: f32) -> Option<usize> {
        if y < 0.0 {
            return None;
        }
        let mut top = 0.0;
        for (i, h) in self.heights.iter().enumerate() {
            if y < top + h {
                return Some(i);
            }
            top += h + self.gap;
            // Gap between items: not part of any box
            if y < top && i + 1 < self.heights.len() {
                return None;
            }
        }
        None
    }
}
