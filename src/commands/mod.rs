//! Command-line command handlers for the twilight clock.
//!
//! Each command is implemented in its own submodule. They all start from a
//! [`CommandContext`], which applies the global flags once and loads the
//! configuration and the stored location.

pub mod help;
pub mod location;
pub mod render;
pub mod times;
pub mod watch;

use anyhow::Result;
use std::sync::Arc;

use crate::args::RunOptions;
use crate::config::{Config, set_config_dir};
use crate::geo::Location;
use crate::logger::Log;
use crate::state::LocationStore;
use crate::time_source::{self, FixedTimeSource};

/// Configuration and state shared by every command.
pub struct CommandContext {
    pub config: Config,
    pub store: LocationStore,
    pub debug_enabled: bool,
}

impl CommandContext {
    /// Apply the global flags and load configuration and stored location.
    pub fn prepare(options: &RunOptions) -> Result<Self> {
        Log::set_debug(options.debug_enabled);
        if options.debug_enabled {
            log_pipe!();
            log_debug!("Debug mode enabled");
        }

        set_config_dir(options.config_dir.clone())?;

        if let Some(at) = options.at {
            time_source::init_time_source(Arc::new(FixedTimeSource::from_naive_utc(at)));
            log_debug!("Clock pinned to {} UTC", at);
        }

        let config = Config::load()?;
        if options.debug_enabled {
            config.log_config();
        }

        Ok(Self {
            config,
            store: LocationStore::open_default(),
            debug_enabled: options.debug_enabled,
        })
    }

    /// The stored location, or an error telling the user how to provide one.
    pub fn require_location(&self) -> Result<Location> {
        self.store.get().ok_or_else(|| {
            anyhow::anyhow!(
                "No location yet. Store one with: twilight-clock location set <lat> <lon> <utc_offset_hours>"
            )
        })
    }
}
