//! Twilight bands: one zenith's dawn and dusk drawn as a wedge of the face.
//!
//! A band is a closed 5-point polygon. Two of its edges run from the hub out
//! along the dawn and dusk "hands"; the other points are fixed screen corners
//! on the enclosed side. Filling the polygon paints everything on that side of
//! the two hands.
//!
//! Points are kept clockwise on screen, as the fill primitive requires:
//!
//! ```text
//! Top:    hub, dawn, top-left,     top-right,   dusk
//! Bottom: hub, dusk, bottom-right, bottom-left, dawn
//! ```

use anyhow::Result;
use chrono::NaiveDate;

use super::geometry::{EnclosureSide, HUB, Point, Rect, SCREEN_HEIGHT, SCREEN_WIDTH, clock_point};
use super::surface::{Color, CompositingMode, Image, Path, RenderSurface, Tone};
use crate::geo::times::RiseSet;
use crate::geo::{Location, RiseSetTime, Zenith};

/// Hub, two time points and two corners.
pub const POINTS_IN_BAND: usize = 5;

const FIRST_TIME_SLOT: usize = 1;
const LAST_TIME_SLOT: usize = 4;

/// Lifecycle of a band. Dropping the band releases everything it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandState {
    /// Static geometry only; nothing to draw yet.
    Created,
    /// Dawn, dusk and the time points are filled in.
    Computed,
}

#[derive(Debug)]
pub struct TwilightBand {
    zenith: Zenith,
    side: EnclosureSide,
    overlay: Option<Image>,
    points: [Point; POINTS_IN_BAND],
    dawn: RiseSetTime,
    dusk: RiseSetTime,
    state: BandState,
    /// Polygon realized by the most recent render.
    path: Option<Path>,
}

impl TwilightBand {
    /// Create a band with its fixed points in place.
    ///
    /// With a `tone`, a screen-sized overlay of that grey is allocated and
    /// drawn under the band's fill on every render.
    pub fn new(zenith: Zenith, side: EnclosureSide, tone: Option<Tone>) -> Result<Self> {
        let overlay = tone
            .map(|tone| Image::tone(tone, SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16))
            .transpose()?;

        let [first, second] = side.corners();
        let mut points = [Point::default(); POINTS_IN_BAND];
        points[0] = HUB;
        points[2] = first;
        points[3] = second;

        Ok(Self {
            zenith,
            side,
            overlay,
            points,
            dawn: RiseSetTime::Never,
            dusk: RiseSetTime::Never,
            state: BandState::Created,
            path: None,
        })
    }

    pub fn zenith(&self) -> Zenith {
        self.zenith
    }

    pub fn side(&self) -> EnclosureSide {
        self.side
    }

    pub fn state(&self) -> BandState {
        self.state
    }

    /// Local time the sun rises through this band's zenith.
    pub fn dawn(&self) -> RiseSetTime {
        self.dawn
    }

    /// Local time the sun sets through this band's zenith.
    pub fn dusk(&self) -> RiseSetTime {
        self.dusk
    }

    pub fn points(&self) -> &[Point; POINTS_IN_BAND] {
        &self.points
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// The polygon drawn by the last successful render.
    pub fn realized_path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Recompute dawn and dusk for `date` at `location` and move the two time
    /// points accordingly.
    ///
    /// When either event does not happen the time points keep their previous
    /// positions; [`render`](Self::render) skips such a band.
    pub fn recompute(&mut self, location: &Location, date: NaiveDate) {
        let RiseSet { rise, set, .. } = RiseSet::compute(location, date, self.zenith);
        self.set_times(rise, set);
    }

    /// Store local dawn/dusk directly and place the time points.
    pub fn set_times(&mut self, dawn: RiseSetTime, dusk: RiseSetTime) {
        self.dawn = dawn;
        self.dusk = dusk;
        self.state = BandState::Computed;

        if let (Some(dawn), Some(dusk)) = (dawn.hour(), dusk.hour()) {
            let (dawn_point, dusk_point) = (clock_point(dawn), clock_point(dusk));
            match self.side {
                EnclosureSide::Top => {
                    self.points[FIRST_TIME_SLOT] = dawn_point;
                    self.points[LAST_TIME_SLOT] = dusk_point;
                }
                EnclosureSide::Bottom => {
                    self.points[FIRST_TIME_SLOT] = dusk_point;
                    self.points[LAST_TIME_SLOT] = dawn_point;
                }
            }
        }
    }

    /// Draw the band: optional overlay blitted with AND over `target`, then the
    /// polygon filled with `fill`, its origin on the centre of `target`.
    ///
    /// Returns whether anything was drawn. A band without both dawn and dusk
    /// makes no surface calls at all, leaving earlier bands' pixels in place.
    pub fn render<S>(&mut self, surface: &mut S, fill: Color, target: Rect) -> bool
    where
        S: RenderSurface + ?Sized,
    {
        if self.dawn.is_never() || self.dusk.is_never() {
            return false;
        }

        // Release the previous polygon before realizing the next one.
        self.path = None;
        let mut path = match Path::new(&self.points) {
            Ok(path) => path,
            Err(e) => {
                log_warning!("Skipping {} band: {e:#}", self.zenith.label());
                return false;
            }
        };
        path.move_to(target.center());

        if let Some(overlay) = &self.overlay {
            surface.set_compositing_mode(CompositingMode::And);
            surface.draw_image(overlay, target);
        }

        surface.set_fill_color(fill);
        surface.fill_path(&path);

        self.path = Some(path);
        true
    }
}
