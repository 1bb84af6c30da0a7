//! `render` command: draw the face once.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use std::path::Path;

use super::CommandContext;
use crate::face::geometry::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::face::{Canvas, Watchface};
use crate::logger::write_output;
use crate::time_source;

/// Draw `face` for local `time` onto a fresh screen-sized canvas.
pub fn draw_face(face: &mut Watchface, time: NaiveTime) -> Result<Canvas> {
    let mut canvas = Canvas::new(SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let bounds = canvas.bounds();
    face.render(&mut canvas, bounds, time)?;
    Ok(canvas)
}

/// Render the face for `date` and `time` (defaulting to now at the stored
/// location) to `output` as PGM, or to the terminal as text.
pub fn handle_render_command(
    ctx: &CommandContext,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    output: Option<&Path>,
) -> Result<()> {
    let location = ctx.require_location()?;
    let now = location.local_datetime(time_source::now_utc());
    let date = date.unwrap_or(now.date());
    let time = time.unwrap_or(now.time());

    let mut face = Watchface::new(ctx.config.face_options())?;
    face.update_day_and_night(&location, date, true);
    let canvas = draw_face(&mut face, time)?;

    match output {
        Some(path) => {
            canvas.write_pgm(path)?;
            log_version!();
            log_block_start!("Rendered {} {}", date, time.format("%H:%M"));
            log_indented!("Sunrise {}  Sunset {}", face.sunrise_text(), face.sunset_text());
            log_decorated!("Wrote {}", path.display());
            log_end!();
        }
        None => write_output(&canvas.to_ascii(ctx.config.ascii_columns())),
    }
    Ok(())
}

pub fn display_help() {
    log_version!();
    log_block_start!("render - Draw the twilight face");
    log_block_start!("Usage: twilight-clock render [--date YYYY-MM-DD] [--time HH:MM] [-o FILE.pgm]");
    log_block_start!("Description:");
    log_indented!("Draws the 24-hour face: night in black, each twilight a lighter");
    log_indented!("grey, daylight in white, noon at the top. Without --output the");
    log_indented!("face is printed as text, ascii_columns characters wide.");
    log_block_start!("Examples:");
    log_indented!("# Now, in the terminal");
    log_indented!("twilight-clock render");
    log_pipe!();
    log_indented!("# Midwinter evening, as an image");
    log_indented!("twilight-clock render --date 2024-12-21 --time 18:00 -o face.pgm");
    log_end!();
}
