//! The dial drawn over the bands, and the 24-hour hand.
//!
//! The dial is a transparent overlay made of two masks: the white mask is
//! OR-ed onto the surface and the black mask CLEAR-ed, so pixels in neither
//! mask keep whatever the bands painted. It frames the face with a white rim,
//! blacks out everything beyond it and adds an hour tick every hour.

use anyhow::Result;

use super::geometry::{HUB_Y, Point, Rect, SCREEN_HEIGHT, SCREEN_WIDTH, hour_hand_angle};
use super::surface::{Color, CompositingMode, Image, Path, RenderSurface};
use crate::geo::math::{cos_deg, sin_deg, turns_to_degrees};

/// Radius of the visible face, from the hub.
pub const DIAL_RADIUS: f64 = 66.0;
/// Width of the white rim around the face.
const RIM_WIDTH: f64 = 2.0;
/// Length of the hour ticks, inward from the rim.
const TICK_LENGTH: f64 = 5.0;

const HAND_LENGTH: f64 = 58.0;
const HAND_TAIL: f64 = 10.0;

pub struct Dial {
    white_mask: Image,
    black_mask: Image,
}

impl Dial {
    pub fn new() -> Result<Self> {
        let (width, height) = (SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16);
        let mut white_mask = Image::new(width, height)?;
        let mut black_mask = Image::new(width, height)?;

        let hub_x = width as f64 / 2.0;
        let hub_y = height as f64 / 2.0 + HUB_Y as f64;

        for y in 0..height {
            for x in 0..width {
                let dx = x as f64 + 0.5 - hub_x;
                let dy = y as f64 + 0.5 - hub_y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance > DIAL_RADIUS + RIM_WIDTH {
                    black_mask.set(x, y, true);
                } else if distance > DIAL_RADIUS {
                    white_mask.set(x, y, true);
                }
            }
        }

        for hour in 0..24 {
            let degrees = turns_to_degrees(hour_hand_angle(hour, 0));
            let (sin, cos) = (sin_deg(degrees), cos_deg(degrees));
            let mut reach = DIAL_RADIUS - TICK_LENGTH;
            while reach <= DIAL_RADIUS {
                let x = (hub_x + sin * reach).round();
                let y = (hub_y - cos * reach).round();
                if x >= 0.0 && y >= 0.0 && x < width as f64 && y < height as f64 {
                    black_mask.set(x as u16, y as u16, true);
                }
                reach += 0.5;
            }
        }

        Ok(Self {
            white_mask,
            black_mask,
        })
    }

    pub fn draw<S>(&self, surface: &mut S, target: Rect)
    where
        S: RenderSurface + ?Sized,
    {
        surface.set_compositing_mode(CompositingMode::Or);
        surface.draw_image(&self.white_mask, target);

        surface.set_compositing_mode(CompositingMode::Clear);
        surface.draw_image(&self.black_mask, target);
    }
}

/// Kite-shaped hand outline `half_width` pixels either side of its axis.
fn hand_points(turns: f64, half_width: f64) -> [Point; 4] {
    let degrees = turns_to_degrees(turns);
    let (sin, cos) = (sin_deg(degrees), cos_deg(degrees));
    let at = |along: f64, across: f64| {
        Point::new(
            (sin * along + cos * across).round() as i16,
            HUB_Y + (-cos * along + sin * across).round() as i16,
        )
    };
    [
        at(HAND_LENGTH, 0.0),
        at(0.0, half_width),
        at(-HAND_TAIL, 0.0),
        at(0.0, -half_width),
    ]
}

/// Draw the hour hand for local `hour:minute`: a black outline with a white core.
pub fn draw_hour_hand<S>(surface: &mut S, target: Rect, hour: u32, minute: u32) -> Result<()>
where
    S: RenderSurface + ?Sized,
{
    let turns = hour_hand_angle(hour, minute);

    for (half_width, color) in [(4.0, Color::Black), (2.0, Color::White)] {
        let mut path = Path::new(&hand_points(turns, half_width))?;
        path.move_to(target.center());
        surface.set_fill_color(color);
        surface.fill_path(&path);
    }
    Ok(())
}
