// CLI module - command-line argument parsing and handlers
//
// Runtime flags override the loaded configuration; the `config`
// subcommand manages the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};

/// Glide - animated selectable list demo for the terminal
#[derive(Parser)]
#[command(name = "glide")]
#[command(version = VERSION)]
#[command(about = "Animated selectable list demo for the terminal", long_about = None)]
pub struct Cli {
    /// Number of demo items to seed the list with
    #[arg(long)]
    pub items: Option<usize>,

    /// Disable keyboard navigation (arrows / Tab)
    #[arg(long)]
    pub no_keyboard_nav: bool,

    /// Disable the top/bottom edge fades
    #[arg(long)]
    pub no_fades: bool,

    /// Hide the scrollbar
    #[arg(long)]
    pub no_scrollbar: bool,

    /// Start with this item selected
    #[arg(long)]
    pub initial_selected: Option<usize>,

    /// Cap the list viewport at this many rows
    #[arg(long)]
    pub max_height: Option<u16>,

    /// Replace the item sequence every N seconds (0 = never)
    #[arg(long)]
    pub replace_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Apply runtime flags on top of the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(n) = self.items {
            config.demo.item_count = n;
        }
        if self.no_keyboard_nav {
            config.list.enable_keyboard_nav = false;
        }
        if self.no_fades {
            config.list.show_edge_fades = false;
        }
        if self.no_scrollbar {
            config.list.show_scrollbar = false;
        }
        if self.initial_selected.is_some() {
            config.list.initial_selected = self.initial_selected;
        }
        if let Some(rows) = self.max_height {
            config.list.max_viewport_rows = rows;
        }
        if let Some(secs) = self.replace_secs {
            config.demo.replace_interval_secs = secs;
        }
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Config { show, path, reset }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                // No flag provided, show usage
                println!("Usage: glide config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
            }
            true
        }
        None => false,
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("Could not determine config directory"),
    }
}

fn handle_config_show() {
    let config = Config::load();
    println!("{config:#?}");
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Could not determine config directory");
        return;
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Failed to create {}: {e}", parent.display());
            return;
        }
    }
    match std::fs::write(&path, Config::template()) {
        Ok(()) => println!("Wrote defaults to {}", path.display()),
        Err(e) => eprintln!("Failed to write {}: {e}", path.display()),
    }
}
