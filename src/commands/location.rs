//! `location` command: manage the stored location.
//!
//! `set` stands in for the phone's coordinate report, so it goes through the
//! same path a report would: the location is validated, persisted only when it
//! differs, and the face is recomputed for it.

use anyhow::Result;

use super::CommandContext;
use crate::face::Watchface;
use crate::geo::{Location, MAX_UTC_OFFSET_SECS};
use crate::state::LocationStore;
use crate::time_source;

/// Convert a conventional offset (`-4` for UTC-4) to the stored form, which
/// counts seconds to add to local time to reach UTC.
pub fn utc_offset_secs_from_hours(hours: f64) -> Result<i32> {
    let secs = -(hours * 3600.0).round();
    if !secs.is_finite() || secs.abs() > MAX_UTC_OFFSET_SECS as f64 {
        anyhow::bail!("UTC offset {hours} h is out of range");
    }
    Ok(secs as i32)
}

/// Hours of the conventional offset shown to users.
fn conventional_offset_hours(utc_offset_secs: i32) -> f64 {
    -(utc_offset_secs as f64) / 3600.0
}

pub fn handle_location_set_command(
    ctx: &mut CommandContext,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> Result<()> {
    let location = Location::new(
        latitude,
        longitude,
        utc_offset_secs_from_hours(utc_offset_hours)?,
    )?;
    let today = location.local_datetime(time_source::now_utc()).date();

    let mut face = Watchface::new(ctx.config.face_options())?;
    let changed = face.coords_received(&mut ctx.store, location, today)?;

    log_version!();
    if changed {
        log_block_start!("Location stored");
        log_indented!("{}", ctx.store.path().display());
        log_block_start!("Today at the new location");
        log_indented!("Sunrise {}", face.sunrise_text());
        log_indented!("Sunset  {}", face.sunset_text());
    } else {
        log_block_start!("Location unchanged");
    }
    log_end!();
    Ok(())
}

pub fn handle_location_show_command(ctx: &CommandContext) -> Result<()> {
    log_version!();
    match ctx.store.get() {
        Some(location) => {
            log_block_start!("Stored location");
            log_indented!("Latitude:   {:.4}°", location.latitude);
            log_indented!("Longitude:  {:.4}°", location.longitude);
            log_indented!(
                "UTC offset: {:+.2} h",
                conventional_offset_hours(location.utc_offset_secs)
            );
            if let Some(updated) = ctx.store.last_update() {
                log_indented!("Updated:    {}", updated.format("%Y-%m-%d %H:%M UTC"));
            }
        }
        None => {
            log_block_start!("No location stored");
            log_indented!("twilight-clock location set <lat> <lon> <utc_offset_hours>");
        }
    }
    log_end!();
    Ok(())
}

pub fn handle_location_clear_command(store: &mut LocationStore) -> Result<()> {
    let removed = store.erase()?;
    log_version!();
    if removed {
        log_block_start!("Stored location removed");
    } else {
        log_block_start!("No location was stored");
    }
    log_end!();
    Ok(())
}

pub fn display_help() {
    log_version!();
    log_block_start!("location - Manage the stored location");
    log_block_start!("Usage:");
    log_indented!("twilight-clock location set <latitude> <longitude> <utc_offset_hours>");
    log_indented!("twilight-clock location [show]");
    log_indented!("twilight-clock location clear");
    log_block_start!("Arguments:");
    log_indented!("latitude          Degrees, north positive (-90 to 90)");
    log_indented!("longitude         Degrees, east positive (-180 to 180)");
    log_indented!("utc_offset_hours  Local offset from UTC, e.g. -4 for UTC-4");
    log_block_start!("Examples:");
    log_indented!("# New York in summer");
    log_indented!("twilight-clock location set 40.7128 -74.0060 -4");
    log_pipe!();
    log_indented!("# Tromsø in winter");
    log_indented!("twilight-clock location set 69.65 18.96 1");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_conversion() {
        assert_eq!(utc_offset_secs_from_hours(-4.0).unwrap(), 14400);
        assert_eq!(utc_offset_secs_from_hours(5.5).unwrap(), -19800);
        assert_eq!(utc_offset_secs_from_hours(0.0).unwrap(), 0);
        assert!(utc_offset_secs_from_hours(15.0).is_err());
        assert!(utc_offset_secs_from_hours(f64::NAN).is_err());
    }

    #[test]
    fn test_offset_display_round_trip() {
        assert_eq!(conventional_offset_hours(14400), -4.0);
        assert_eq!(conventional_offset_hours(-19800), 5.5);
    }
}
