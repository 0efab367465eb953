//! Configuration for the animated list demo
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/glide/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! CLI flags are applied on top by main after loading.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file rotation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to the TUI buffer)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g., "glide" -> "glide.2024-01-15.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "glide".to_string(),
        }
    }
}

/// List behavior settings (the component flags from the list contract)
#[derive(Debug, Clone)]
pub struct ListSettings {
    /// Route keyboard navigation into the list while the TUI runs
    pub enable_keyboard_nav: bool,
    /// Render the top/bottom edge fades
    pub show_edge_fades: bool,
    /// Render the scrollbar when content overflows
    pub show_scrollbar: bool,
    /// Seed selection at this index (clamped; None = start idle)
    pub initial_selected: Option<usize>,
    /// Cap on the list viewport height, in terminal rows
    pub max_viewport_rows: u16,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            enable_keyboard_nav: true,
            show_edge_fades: true,
            show_scrollbar: true,
            initial_selected: None,
            max_viewport_rows: 40,
        }
    }
}

/// Motion tuning for scroll animation, visibility, and fades
///
/// All distances are in content units; the TUI maps one unit per row.
#[derive(Debug, Clone)]
pub struct MotionSettings {
    /// Fraction of remaining distance covered per animation tick
    pub scroll_speed: f32,
    /// Margin band kept around a keyboard-revealed item
    pub reveal_margin: f32,
    /// Margin added around the viewport when judging visibility
    pub visibility_margin: f32,
    /// Minimum overlap fraction for an item to count as visible
    pub visibility_threshold: f32,
    /// Distance over which an edge fade ramps to full strength
    pub fade_distance: f32,
    /// Animation tick interval in milliseconds
    pub tick_ms: u64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            scroll_speed: 0.35,
            reveal_margin: 2.0,
            visibility_margin: 2.0,
            visibility_threshold: 0.1,
            fade_distance: 2.0,
            tick_ms: 33,
        }
    }
}

/// Demo feed settings
#[derive(Debug, Clone)]
pub struct DemoSettings {
    /// Number of items in the seeded catalog
    pub item_count: usize,
    /// Replace the item sequence every N seconds (0 = never)
    pub replace_interval_secs: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            item_count: 15,
            replace_interval_secs: 0,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub list: ListSettings,
    pub motion: MotionSettings,
    pub demo: DemoSettings,
    pub logging: LoggingConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// File config (all-Option mirror of Config, deserialized from TOML)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub list: Option<FileList>,
    pub motion: Option<FileMotion>,
    pub demo: Option<FileDemo>,
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileList {
    pub enable_keyboard_nav: Option<bool>,
    pub show_edge_fades: Option<bool>,
    pub show_scrollbar: Option<bool>,
    pub initial_selected: Option<usize>,
    pub max_viewport_rows: Option<u16>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileMotion {
    pub scroll_speed: Option<f32>,
    pub reveal_margin: Option<f32>,
    pub visibility_margin: Option<f32>,
    pub visibility_threshold: Option<f32>,
    pub fade_distance: Option<f32>,
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDemo {
    pub item_count: Option<usize>,
    pub replace_interval_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl Config {
    /// Load configuration: defaults < config file < environment
    pub fn load() -> Self {
        let file = Self::read_config_file().unwrap_or_default();
        let mut config = Self::from_file(file);
        config.apply_env();
        config
    }

    /// Merge a parsed config file over the defaults
    pub fn from_file(file: FileConfig) -> Self {
        let mut config = Config::default();

        if let Some(list) = file.list {
            let d = &mut config.list;
            d.enable_keyboard_nav = list.enable_keyboard_nav.unwrap_or(d.enable_keyboard_nav);
            d.show_edge_fades = list.show_edge_fades.unwrap_or(d.show_edge_fades);
            d.show_scrollbar = list.show_scrollbar.unwrap_or(d.show_scrollbar);
            d.initial_selected = list.initial_selected.or(d.initial_selected);
            d.max_viewport_rows = list.max_viewport_rows.unwrap_or(d.max_viewport_rows);
        }

        if let Some(motion) = file.motion {
            let d = &mut config.motion;
            d.scroll_speed = motion.scroll_speed.unwrap_or(d.scroll_speed);
            d.reveal_margin = motion.reveal_margin.unwrap_or(d.reveal_margin);
            d.visibility_margin = motion.visibility_margin.unwrap_or(d.visibility_margin);
            d.visibility_threshold = motion.visibility_threshold.unwrap_or(d.visibility_threshold);
            d.fade_distance = motion.fade_distance.unwrap_or(d.fade_distance);
            d.tick_ms = motion.tick_ms.unwrap_or(d.tick_ms);
        }

        if let Some(demo) = file.demo {
            let d = &mut config.demo;
            d.item_count = demo.item_count.unwrap_or(d.item_count);
            d.replace_interval_secs = demo.replace_interval_secs.unwrap_or(d.replace_interval_secs);
        }

        if let Some(logging) = file.logging {
            let d = &mut config.logging;
            d.level = logging.level.unwrap_or_else(|| d.level.clone());
            d.file_enabled = logging.file_enabled.unwrap_or(d.file_enabled);
            d.file_dir = logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| d.file_dir.clone());
            d.file_rotation = logging
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(d.file_rotation);
            d.file_prefix = logging.file_prefix.unwrap_or_else(|| d.file_prefix.clone());
        }

        config
    }

    /// Apply `GLIDE_*` environment overrides on top
    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("GLIDE_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Ok(v) = std::env::var("GLIDE_ITEMS") {
            match v.parse() {
                Ok(n) => self.demo.item_count = n,
                Err(_) => warn!("ignoring invalid GLIDE_ITEMS value: {v}"),
            }
        }
        if let Ok(v) = std::env::var("GLIDE_TICK_MS") {
            match v.parse() {
                Ok(n) => self.motion.tick_ms = n,
                Err(_) => warn!("ignoring invalid GLIDE_TICK_MS value: {v}"),
            }
        }
        if let Ok(v) = std::env::var("GLIDE_REPLACE_SECS") {
            match v.parse() {
                Ok(n) => self.demo.replace_interval_secs = n,
                Err(_) => warn!("ignoring invalid GLIDE_REPLACE_SECS value: {v}"),
            }
        }
    }

    /// Path of the config file (~/.config/glide/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glide").join("config.toml"))
    }

    fn read_config_file() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let contents = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&contents) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("failed to parse {}: {e}", path.display());
                None
            }
        }
    }

    /// Write a commented template on first run so users discover options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Self::template());
    }

    /// Commented config template with the built-in defaults
    pub fn template() -> &'static str {
        r##"# glide configuration
# Values shown are the built-in defaults; uncomment to override.

[list]
# enable_keyboard_nav = true
# show_edge_fades = true
# show_scrollbar = true
# initial_selected = 0
# max_viewport_rows = 40

[motion]
# scroll_speed = 0.35
# reveal_margin = 2.0
# visibility_margin = 2.0
# visibility_threshold = 0.1
# fade_distance = 2.0
# tick_ms = 33

[demo]
# item_count = 15
# replace_interval_secs = 0

[logging]
# level = "info"
# file_enabled = false
# file_dir = "./logs"
# file_rotation = "daily"   # hourly | daily | never
# file_prefix = "glide"
"##
    }
}
