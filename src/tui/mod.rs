// TUI module - Terminal User Interface
//
// Manages the terminal lifecycle and the event loop: keyboard and mouse
// input, animation ticks, and replacement sequences from the demo feed.
// Keyboard navigation is registered for the whole TUI session and torn
// down with it - the list receives keys regardless of which panel the
// pointer is over, and the subscription ends on every exit path because
// terminal restore and list unmount run after the loop returns.

pub mod app;
pub mod input;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::{InputAction, PointerAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::info;

/// Run the TUI
///
/// Sets up the terminal, spawns the demo feed, runs the event loop, and
/// restores the terminal when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (feed_tx, feed_rx) = mpsc::channel(4);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let feed = tokio::spawn(crate::demo::run_feed(
        feed_tx,
        shutdown_rx,
        config.demo.item_count,
        config.demo.replace_interval_secs,
    ));

    let mut app = App::new(&config, log_buffer);
    info!(
        "list mounted: {} items, keyboard nav {}",
        app.list.len(),
        if config.list.enable_keyboard_nav { "on" } else { "off" }
    );

    let result = run_event_loop(&mut terminal, &mut app, feed_rx, config.motion.tick_ms).await;

    // Teardown on every exit path: unmount releases the visibility
    // observers and the keyboard registration dies with the loop
    app.list.unmount();
    let _ = shutdown_tx.send(());
    feed.abort();

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// The event loop: poll input with a tick timeout, advance animations,
/// drain the demo feed, redraw
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut feed_rx: mpsc::Receiver<Vec<String>>,
    tick_ms: u64,
) -> Result<()> {
    let tick = Duration::from_millis(tick_ms.max(1));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw frame")?;

        // Replacement sequences from the demo feed
        while let Ok(items) = feed_rx.try_recv() {
            app.replace_items(items);
        }

        if event::poll(tick).context("Failed to poll events")? {
            match event::read().context("Failed to read event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match input::map_key(key) {
                        InputAction::Quit => app.should_quit = true,
                        InputAction::ToggleLogs => app.show_logs = !app.show_logs,
                        InputAction::Nav(nav) => {
                            // Consumption suppresses nothing further here:
                            // the loop owns the keys, so an unconsumed nav
                            // key simply falls through
                            let _ = app.list.key(nav);
                        }
                        InputAction::Ignored => {}
                    }
                }
                Event::Mouse(mouse) => match input::map_mouse(mouse, app.list_area) {
                    PointerAction::Hover(y) => {
                        if let Some(index) = app.list.index_at_view_y(y) {
                            app.list.hover(index);
                        }
                    }
                    PointerAction::Click(y) => {
                        if let Some(index) = app.list.index_at_view_y(y) {
                            app.list.click(index);
                        }
                    }
                    PointerAction::Scroll(delta) => app.list.scroll_by(delta),
                    PointerAction::Ignored => {}
                },
                // Resize is picked up on the next draw via set_viewport
                _ => {}
            }
        }

        app.list.tick();

        if app.should_quit {
            info!("shutting down");
            return Ok(());
        }
    }
}
