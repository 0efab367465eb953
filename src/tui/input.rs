// Input mapping for the TUI
//
// Keys are routed globally while the TUI runs: there is no focus system,
// every key event reaches the list (the original design browses with the
// keyboard without explicit focus management). The list itself decides
// whether a navigation key is consumed; app chrome keys (quit, logs
// toggle) are handled here.

use crate::list::NavKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// What a key event means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the TUI
    Quit,
    /// Toggle the logs panel
    ToggleLogs,
    /// Navigation routed into the list
    Nav(NavKey),
    /// Nothing we care about
    Ignored,
}

/// Map a key event to an action
///
/// ArrowDown and Tab step the selection forward; ArrowUp and Shift+Tab
/// step it back; Enter activates. Consuming these here is what suppresses
/// any default behavior the key would otherwise have.
pub fn map_key(key: KeyEvent) -> InputAction {
    // Ctrl-C always quits, whatever else is bound
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('l') => InputAction::ToggleLogs,
        KeyCode::Down => InputAction::Nav(NavKey::Next),
        KeyCode::Up => InputAction::Nav(NavKey::Prev),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                InputAction::Nav(NavKey::Prev)
            } else {
                InputAction::Nav(NavKey::Next)
            }
        }
        // Terminals report Shift+Tab as BackTab
        KeyCode::BackTab => InputAction::Nav(NavKey::Prev),
        KeyCode::Enter => InputAction::Nav(NavKey::Activate),
        _ => InputAction::Ignored,
    }
}

/// What a mouse event means to the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Pointer moved over the row at this viewport offset
    Hover(f32),
    /// Left click on the row at this viewport offset
    Click(f32),
    /// Wheel scroll by this many content units
    Scroll(f32),
    /// Outside the list, or a button we ignore
    Ignored,
}

/// Rows scrolled per wheel notch
const WHEEL_STEP: f32 = 3.0;

/// Map a mouse event against the list's on-screen area
///
/// Hover and click carry the viewport-relative y of the pointer; the
/// list resolves it to an item through its layout.
pub fn map_mouse(mouse: MouseEvent, list_area: Rect) -> PointerAction {
    let inside = mouse.column >= list_area.x
        && mouse.column < list_area.x + list_area.width
        && mouse.row >= list_area.y
        && mouse.row < list_area.y + list_area.height;

    match mouse.kind {
        MouseEventKind::ScrollDown if inside => PointerAction::Scroll(WHEEL_STEP),
        MouseEventKind::ScrollUp if inside => PointerAction::Scroll(-WHEEL_STEP),
        MouseEventKind::Moved if inside => {
            PointerAction::Hover((mouse.row - list_area.y) as f32)
        }
        MouseEventKind::Down(crossterm::event::MouseButton::Left) if inside => {
            PointerAction::Click((mouse.row - list_area.y) as f32)
        }
        _ => PointerAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_and_tab_navigation() {
        assert_eq!(
            map_key(key(KeyCode::Down, KeyModifiers::NONE)),
            InputAction::Nav(NavKey::Next)
        );
        assert_eq!(
            map_key(key(KeyCode::Tab, KeyModifiers::NONE)),
            InputAction::Nav(NavKey::Next)
        );
        assert_eq!(
            map_key(key(KeyCode::Up, KeyModifiers::NONE)),
            InputAction::Nav(NavKey::Prev)
        );
        assert_eq!(
            map_key(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            InputAction::Nav(NavKey::Prev)
        );
        assert_eq!(
            map_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            InputAction::Nav(NavKey::Activate)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), InputAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE)), InputAction::Quit);
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
    }

    #[test]
    fn test_mouse_maps_to_viewport_offsets() {
        let area = Rect::new(2, 5, 40, 10);
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Moved, 10, 8), area),
            PointerAction::Hover(3.0)
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), area),
            PointerAction::Click(0.0)
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::ScrollDown, 10, 8), area),
            PointerAction::Scroll(3.0)
        );
    }

    #[test]
    fn test_mouse_outside_list_ignored() {
        let area = Rect::new(2, 5, 40, 10);
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Moved, 10, 20), area),
            PointerAction::Ignored
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 8), area),
            PointerAction::Ignored
        );
    }
}
