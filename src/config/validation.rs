//! Configuration validation functionality.

use anyhow::Result;

use super::Config;
use crate::constants::*;

/// Reject values the face and the previews cannot honour.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(columns) = config.ascii_columns
        && !(MINIMUM_ASCII_COLUMNS..=MAXIMUM_ASCII_COLUMNS).contains(&columns)
    {
        anyhow::bail!(
            "ascii_columns ({}) must be between {} and {}",
            columns,
            MINIMUM_ASCII_COLUMNS,
            MAXIMUM_ASCII_COLUMNS
        );
    }

    Ok(())
}
