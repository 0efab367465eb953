// TUI application state
//
// Wires the animated list to the demo feed and the log buffer. The App
// owns the list; the event loop routes input into it and the renderer
// reads it back out each frame.

use crate::config::Config;
use crate::demo;
use crate::list::{ListOptions, ListView};
use crate::logging::LogBuffer;
use ratatui::layout::Rect;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::info;

/// Most recent activation (item text and index), shared with the
/// selection callback for the status bar
pub type LastActivated = Arc<Mutex<Option<(String, usize)>>>;

/// Main application state for the TUI
pub struct App {
    /// The animated list under demonstration
    pub list: ListView<String>,

    /// Captured tracing output for the logs panel
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the logs panel is shown
    pub show_logs: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Last item activated via Enter or click
    pub last_activated: LastActivated,

    /// Demo sequence generation shown in the title bar
    pub generation: usize,

    /// On-screen area of the list viewport, set by the renderer each
    /// frame and read by mouse mapping
    pub list_area: Rect,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let last_activated: LastActivated = Arc::new(Mutex::new(None));
        let callback_slot = Arc::clone(&last_activated);

        let options = ListOptions {
            enable_keyboard_nav: config.list.enable_keyboard_nav,
            show_edge_fades: config.list.show_edge_fades,
            show_scrollbar: config.list.show_scrollbar,
            initial_selected: config.list.initial_selected,
            max_viewport_height: config.list.max_viewport_rows as f32,
        };

        let items = demo::item_sequence(config.demo.item_count, 0);
        let motion = &config.motion;
        let list = ListView::new(items, options)
            .with_metrics(1.0, 0.0) // one terminal row per item
            .with_tuning(
                motion.scroll_speed,
                motion.reveal_margin,
                motion.visibility_margin,
                motion.visibility_threshold,
                motion.fade_distance,
            )
            .on_select(Box::new(move |item: &String, index| {
                info!("selected [{index}] {item}");
                *callback_slot.lock().unwrap() = Some((item.clone(), index));
            }));

        Self {
            list,
            log_buffer,
            should_quit: false,
            show_logs: true,
            start_time: Instant::now(),
            last_activated,
            generation: 0,
            list_area: Rect::default(),
        }
    }

    /// Apply a replacement sequence from the demo feed
    pub fn replace_items(&mut self, items: Vec<String>) {
        self.generation += 1;
        self.list.set_items(items);
    }

    /// Uptime in whole seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let mut config = Config::default();
        config.demo.item_count = 10;
        App::new(&config, LogBuffer::new())
    }

    #[test]
    fn test_app_seeds_list_from_config() {
        let app = app();
        assert_eq!(app.list.len(), 10);
        assert_eq!(app.list.selected(), None);
    }

    #[test]
    fn test_callback_records_activation() {
        let mut app = app();
        app.list.click(4);
        let activated = app.last_activated.lock().unwrap().clone();
        assert_eq!(activated.map(|(_, i)| i), Some(4));
    }

    #[test]
    fn test_replace_items_bumps_generation() {
        let mut app = app();
        app.replace_items(crate::demo::item_sequence(5, 1));
        assert_eq!(app.generation, 1);
        assert_eq!(app.list.len(), 5);
    }
}
