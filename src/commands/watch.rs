//! `watch` command: keep the face on screen and redraw it every minute.
//!
//! The loop redraws at each minute boundary and recomputes the bands when the
//! local day changes. SIGHUP or SIGUSR2 re-reads the configuration and the
//! stored location; SIGINT or SIGTERM ends the loop. With `--at` the clock
//! advances one simulated minute per frame instead of waiting.

use anyhow::Result;
use chrono::Timelike;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{Stdout, stdout};
use std::sync::atomic::Ordering;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use super::CommandContext;
use super::render::draw_face;
use crate::config::Config;
use crate::constants::WATCH_TICK_SECS;
use crate::face::Watchface;
use crate::logger::write_output;
use crate::signals::{SignalMessage, setup_signal_handler};
use crate::state::LocationStore;
use crate::time_source;

/// Real time spent on one frame when the clock is simulated.
const SIMULATED_FRAME: Duration = Duration::from_millis(100);

/// Hides the cursor for the lifetime of the loop.
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        let mut out = stdout();
        execute!(out, Hide)?;
        Ok(Self { out })
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show);
    }
}

/// Time left until the next minute boundary.
fn until_next_minute(second: u32, nanosecond: u32) -> Duration {
    let elapsed = Duration::new(u64::from(second.min(59)), nanosecond.min(999_999_999));
    Duration::from_secs(WATCH_TICK_SECS).saturating_sub(elapsed)
}

fn draw_frame(ctx: &CommandContext, face: &mut Watchface, terminal: &mut TerminalGuard) -> Result<()> {
    let now_utc = time_source::now_utc();

    let Some(location) = ctx.store.get() else {
        terminal.clear()?;
        log_version!();
        log_block_start!("Waiting for a location");
        log_indented!("twilight-clock location set <lat> <lon> <utc_offset_hours>");
        return Ok(());
    };

    let local = location.local_datetime(now_utc);
    face.update_day_and_night(&ctx.store, local.date(), false);
    let canvas = draw_face(face, local.time())?;

    terminal.clear()?;
    write_output(&canvas.to_ascii(ctx.config.ascii_columns()));
    log_version!();
    log_decorated!("{}  {}", local.date(), local.time().format("%H:%M"));
    log_indented!("Sunrise {}  Sunset {}", face.sunrise_text(), face.sunset_text());
    if ctx.config.show_moon_phase() {
        log_indented!("Moon: {}", face.moon_phase(now_utc.date_naive()).name());
    }
    Ok(())
}

fn reload(ctx: &mut CommandContext) -> Result<Watchface> {
    match Config::load() {
        Ok(config) => ctx.config = config,
        Err(e) => log_warning!("Keeping previous configuration: {e:#}"),
    }
    ctx.store = LocationStore::open_default();
    Watchface::new(ctx.config.face_options())
}

/// Run the redraw loop until a shutdown signal arrives.
pub fn handle_watch_command(mut ctx: CommandContext) -> Result<()> {
    let signal_state = setup_signal_handler(ctx.debug_enabled)?;
    let mut face = Watchface::new(ctx.config.face_options())?;
    let mut terminal = TerminalGuard::new()?;

    while signal_state.running.load(Ordering::SeqCst) {
        draw_frame(&ctx, &mut face, &mut terminal)?;

        let now = time_source::now_utc();
        let wait = until_next_minute(now.second(), now.nanosecond());
        let simulated = time_source::is_simulated();
        let timeout = if simulated { SIMULATED_FRAME } else { wait };

        match signal_state.signal_receiver.recv_timeout(timeout) {
            Ok(SignalMessage::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(SignalMessage::Reload) => {
                face = reload(&mut ctx)?;
                log_debug!("Reloaded configuration and location");
            }
            Err(RecvTimeoutError::Timeout) => {
                if simulated {
                    time_source::sleep(wait);
                }
            }
        }
    }

    drop(terminal);
    log_end!();
    Ok(())
}

pub fn display_help() {
    log_version!();
    log_block_start!("watch - Keep the face on screen");
    log_block_start!("Usage: twilight-clock watch");
    log_block_start!("Description:");
    log_indented!("Redraws the face in the terminal at every minute and recomputes");
    log_indented!("the twilight bands when the day changes.");
    log_block_start!("Signals:");
    log_indented!("SIGHUP, SIGUSR2   Reload configuration and stored location");
    log_indented!("SIGINT, SIGTERM   Exit");
    log_block_start!("Examples:");
    log_indented!("twilight-clock watch");
    log_pipe!();
    log_indented!("# Fast-forward a day from a fixed instant");
    log_indented!("twilight-clock --at \"2024-06-21 04:00\" watch");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_next_minute() {
        assert_eq!(until_next_minute(0, 0), Duration::from_secs(60));
        assert_eq!(until_next_minute(45, 0), Duration::from_secs(15));
        assert_eq!(
            until_next_minute(59, 500_000_000),
            Duration::from_millis(500)
        );
        // Leap-second nanoseconds are clamped
        assert_eq!(until_next_minute(59, 1_500_000_000), Duration::from_nanos(1));
    }
}
