//! Screen geometry of the 24-hour face.
//!
//! Band coordinates are relative to the path origin, which is moved onto the
//! centre of the screen when a band is drawn. The clock's rotation hub sits
//! [`HUB_Y`] pixels below that origin. Y grows downwards.

use crate::geo::math::{cos_deg, sin_deg, turns_to_degrees};

/// Screen width of the face in pixels.
pub const SCREEN_WIDTH: i16 = 144;
/// Screen height of the face in pixels.
pub const SCREEN_HEIGHT: i16 = 168;

/// Corner coordinates used by the fixed band points, one pixel past the
/// screen's half-extent so the fill reaches the last row and column.
pub const X_LEFT: i16 = -73;
pub const X_RIGHT: i16 = 73;
pub const Y_TOP: i16 = -84;
pub const Y_BOTTOM: i16 = 84;

/// Vertical offset of the rotation hub below the screen centre.
pub const HUB_Y: i16 = 9;

/// Length of the time "hands" that bound a band. Long enough to cross the dial
/// rim and the screen corners at any angle.
pub const HAND_REACH: f64 = 120.0;

/// The face shows noon at the top, so a time maps to the angle of `time + 12`.
pub const NOON_UP_PHASE_HOURS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }
}

/// The rotation hub, in band coordinates.
pub const HUB: Point = Point::new(0, HUB_Y);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub width: i16,
    pub height: i16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, width: i16, height: i16) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// The whole face screen.
    pub const fn screen() -> Self {
        Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2,
            self.origin.y + self.height / 2,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.width
            && point.y < self.origin.y + self.height
    }
}

/// Which half of the screen a band's polygon covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnclosureSide {
    Top,
    Bottom,
}

impl EnclosureSide {
    /// The two fixed corner points, in the order that keeps the band clockwise.
    pub fn corners(self) -> [Point; 2] {
        match self {
            EnclosureSide::Top => [Point::new(X_LEFT, Y_TOP), Point::new(X_RIGHT, Y_TOP)],
            EnclosureSide::Bottom => [
                Point::new(X_RIGHT, Y_BOTTOM),
                Point::new(X_LEFT, Y_BOTTOM),
            ],
        }
    }
}

/// Where the hand for local hour-of-day `time` ends on the 24-hour face.
pub fn clock_point(time: f64) -> Point {
    let degrees = turns_to_degrees((time + NOON_UP_PHASE_HOURS) / 24.0);
    Point::new(
        (sin_deg(degrees) * HAND_REACH) as i16,
        HUB_Y - (cos_deg(degrees) * HAND_REACH) as i16,
    )
}

/// Rotation of the hour hand in turns, for a 24-hour face with noon up.
///
/// Values run from 0.5 (midnight) past 1.0; callers use the fractional part
/// or feed it straight into trigonometry.
pub fn hour_hand_angle(hour: u32, minute: u32) -> f64 {
    (NOON_UP_PHASE_HOURS + hour as f64 + (minute as f64 / 60.0)) / 24.0
}

/// Twice the signed area of a closed polygon, trapezoid form.
///
/// In screen coordinates (Y down) a polygon wound clockwise as seen on the
/// screen gives a negative value.
pub fn signed_area2(points: &[Point]) -> i64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            (b.x as i64 - a.x as i64) * (b.y as i64 + a.y as i64)
        })
        .sum()
}
