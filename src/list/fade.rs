// Edge-fade indicator
//
// Derived readout of scroll position: two opacity values describing how
// strongly the top and bottom edges of the viewport should fade, hinting
// that more content lies beyond the visible window. Purely a function of
// scroll geometry - no state beyond the last computed pair.

/// Distance (in content units) over which an edge fade ramps from fully
/// transparent to fully opaque.
pub const FADE_DISTANCE: f32 = 50.0;

/// Opacity pair for the top and bottom edge fades, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FadeReadout {
    pub top: f32,
    pub bottom: f32,
}

/// Compute edge-fade opacities from current scroll geometry.
///
/// The top fade strengthens as content scrolls out above; the bottom fade
/// weakens as the view approaches the end of the content. When the content
/// fits entirely in the viewport the bottom fade is forced to zero.
pub fn edge_fades(
    scroll_top: f32,
    content_height: f32,
    view_height: f32,
    fade_distance: f32,
) -> FadeReadout {
    let top = (scroll_top / fade_distance).clamp(0.0, 1.0);
    let bottom = if content_height <= view_height {
        0.0
    } else {
        let bottom_distance = content_height - scroll_top - view_height;
        (bottom_distance / fade_distance).clamp(0.0, 1.0)
    };
    FadeReadout { top, bottom }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Fixture: content 1000 units tall in a 400-unit viewport, 50-unit ramp.

    #[test]
    fn test_at_top() {
        let f = edge_fades(0.0, 1000.0, 400.0, 50.0);
        assert_eq!(f.top, 0.0);
        assert_eq!(f.bottom, 1.0);
    }

    #[test]
    fn test_at_bottom() {
        let f = edge_fades(600.0, 1000.0, 400.0, 50.0);
        assert_eq!(f.top, 1.0);
        assert_eq!(f.bottom, 0.0);
    }

    #[test]
    fn test_partial_ramp() {
        let f = edge_fades(25.0, 1000.0, 400.0, 50.0);
        assert_eq!(f.top, 0.5);
        assert_eq!(f.bottom, 1.0);
    }

    #[test]
    fn test_content_fits_viewport() {
        let f = edge_fades(0.0, 300.0, 400.0, 50.0);
        assert_eq!(f.top, 0.0);
        assert_eq!(f.bottom, 0.0);
    }

    #[test]
    fn test_never_exceeds_unit_range() {
        let f = edge_fades(5000.0, 10000.0, 400.0, 50.0);
        assert_eq!(f.top, 1.0);
        assert_eq!(f.bottom, 1.0);
    }
}
