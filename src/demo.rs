// Demo mode: item feed for the animated list
//
// Seeds the list with a track catalog and, when configured, replaces the
// sequence on an interval over an mpsc channel. Replacement exercises the
// full reset path in the list: observer re-subscription and selection
// clamping happen live while the TUI is running.
//
// Run with: cargo run --release -- --replace-secs 10

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::interval;
use tracing::info;

/// Catalog of track titles the demo rotates through
const CATALOG: &[&str] = &[
    "Midnight Drive - Neon Arcade",
    "Glass Rivers - Holloway",
    "Second Sunrise - Mara Vane",
    "Paper Planes Over Kyoto - Sola",
    "Static Bloom - The Wireframes",
    "Cobalt Hours - June Atlas",
    "Low Tide Theory - Fen & Marrow",
    "Signal Fade - Ultraviolet Era",
    "Northern Verandas - Idle Spring",
    "Chalk Horizon - Peregrine Day",
    "Afterimage - Vesper Line",
    "Slow Orbit - Calico Moons",
    "Tin Roof Rain - Harbor Lights",
    "Violet Interstate - Dune Motel",
    "Last Transmission - Aria North",
    "Winter Palindrome - Ghost Cartographer",
    "Copper Fields - Saints of Static",
    "Daylight Fracture - Omen & Ivy",
    "Hollow Coast - The Lanterns",
    "Ember Alphabet - Quiet Machinery",
];

/// Build an item sequence of `count` titles, cycling the catalog
///
/// `generation` shifts the starting point so successive sequences differ
/// in content while keeping the same shape.
pub fn item_sequence(count: usize, generation: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let title = CATALOG[(generation + i) % CATALOG.len()];
            if generation == 0 {
                title.to_string()
            } else {
                format!("{title} (set {generation})")
            }
        })
        .collect()
}

/// Periodically emit replacement item sequences until shutdown
///
/// Does nothing when `interval_secs` is 0 beyond waiting for shutdown.
pub async fn run_feed(
    tx: mpsc::Sender<Vec<String>>,
    mut shutdown_rx: oneshot::Receiver<()>,
    item_count: usize,
    interval_secs: u64,
) {
    if interval_secs == 0 {
        let _ = (&mut shutdown_rx).await;
        return;
    }

    let mut ticker = interval(Duration::from_secs(interval_secs));
    ticker.tick().await; // first tick fires immediately; skip it

    let mut generation = 0usize;
    loop {
        tokio::select! {
            _ = &mut shutdown_rx => return,
            _ = ticker.tick() => {
                generation += 1;
                info!("replacing item sequence (set {generation})");
                if tx.send(item_sequence(item_count, generation)).await.is_err() {
                    return; // TUI gone
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequence_has_requested_length() {
        assert_eq!(item_sequence(15, 0).len(), 15);
        assert_eq!(item_sequence(50, 0).len(), 50); // cycles past catalog end
        assert_eq!(item_sequence(0, 0).len(), 0);
    }

    #[test]
    fn test_generations_differ_in_content() {
        let a = item_sequence(5, 0);
        let b = item_sequence(5, 1);
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }
}
