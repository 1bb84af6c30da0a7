//! The watchface: four twilight bands, the dial and the hour hand.
//!
//! `Watchface` owns every drawing resource and the location snapshot the bands
//! were computed for. Its two main operations are
//! [`update_day_and_night`](Watchface::update_day_and_night), which runs once a
//! day, and [`render`](Watchface::render), which runs on every redraw.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime, Timelike};

use super::band::TwilightBand;
use super::dial::{Dial, draw_hour_hand};
use super::geometry::{EnclosureSide, Rect};
use super::surface::{Color, CompositingMode, RenderSurface, Tone};
use crate::geo::{ClockStyle, Location, LocationProvider, MoonPhase, Zenith, format_clock_time};
use crate::state::LocationStore;

/// The four layers of the face, in compositing order.
///
/// Each layer is named after the region it uncovers, which is one grade
/// brighter than its zenith: the night layer is bounded by astronomical
/// twilight, the astronomical layer by nautical twilight, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandLayer {
    Night,
    Astronomical,
    Nautical,
    Civil,
}

impl BandLayer {
    /// Darkest first. Each later fill overrides the earlier ones inside its
    /// wedge, so this order is what builds up the grey steps.
    pub const ALL: [BandLayer; 4] = [
        BandLayer::Night,
        BandLayer::Astronomical,
        BandLayer::Nautical,
        BandLayer::Civil,
    ];

    pub fn zenith(self) -> Zenith {
        match self {
            BandLayer::Night => Zenith::ASTRONOMICAL,
            BandLayer::Astronomical => Zenith::NAUTICAL,
            BandLayer::Nautical => Zenith::CIVIL,
            BandLayer::Civil => Zenith::OFFICIAL,
        }
    }

    pub fn side(self) -> EnclosureSide {
        match self {
            BandLayer::Night => EnclosureSide::Bottom,
            _ => EnclosureSide::Top,
        }
    }

    pub fn tone(self) -> Option<Tone> {
        match self {
            BandLayer::Night => None,
            BandLayer::Astronomical => Some(Tone::Dark),
            BandLayer::Nautical => Some(Tone::Medium),
            BandLayer::Civil => Some(Tone::Light),
        }
    }

    /// Night lays down black; every other layer carves white back out of its
    /// overlay.
    pub fn fill(self) -> Color {
        match self {
            BandLayer::Night => Color::Black,
            _ => Color::White,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Display options for the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceOptions {
    pub clock_style: ClockStyle,
    pub hour_hand: bool,
}

impl Default for FaceOptions {
    fn default() -> Self {
        Self {
            clock_style: ClockStyle::default(),
            hour_hand: true,
        }
    }
}

pub struct Watchface {
    bands: [TwilightBand; 4],
    dial: Dial,
    options: FaceOptions,
    location: Option<Location>,
    /// Local date of the most recent completed recomputation.
    last_update_day: Option<NaiveDate>,
}

impl Watchface {
    /// Allocate all bands and the dial. Either everything is created or an
    /// error is returned and nothing is kept.
    pub fn new(options: FaceOptions) -> Result<Self> {
        let band = |layer: BandLayer| {
            TwilightBand::new(layer.zenith(), layer.side(), layer.tone())
                .with_context(|| format!("failed to create {layer:?} band"))
        };

        Ok(Self {
            bands: [
                band(BandLayer::Night)?,
                band(BandLayer::Astronomical)?,
                band(BandLayer::Nautical)?,
                band(BandLayer::Civil)?,
            ],
            dial: Dial::new().context("failed to create dial")?,
            options,
            location: None,
            last_update_day: None,
        })
    }

    pub fn band(&self, layer: BandLayer) -> &TwilightBand {
        &self.bands[layer.index()]
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn last_update_day(&self) -> Option<NaiveDate> {
        self.last_update_day
    }

    /// Recompute all bands for `today` (a local date).
    ///
    /// Runs only when the day changed since the last run, or when `force` is
    /// set. Without a location nothing happens. Returns whether the bands were
    /// recomputed.
    pub fn update_day_and_night<P>(&mut self, provider: &P, today: NaiveDate, force: bool) -> bool
    where
        P: LocationProvider + ?Sized,
    {
        let Some(location) = provider.location() else {
            log_debug!("No location yet; band recomputation withheld");
            return false;
        };

        if !force && self.last_update_day == Some(today) {
            return false;
        }

        for band in &mut self.bands {
            band.recompute(&location, today);
        }
        self.location = Some(location);
        self.last_update_day = Some(today);

        log_debug!(
            "Recomputed bands for {} at {:.4}°, {:.4}°",
            today,
            location.latitude,
            location.longitude
        );
        true
    }

    /// Handle a location report from the phone.
    ///
    /// A report that differs from what is stored is persisted and forces an
    /// immediate recomputation. Returns whether anything changed.
    pub fn coords_received(
        &mut self,
        store: &mut LocationStore,
        location: Location,
        today: NaiveDate,
    ) -> Result<bool> {
        log_debug!("Received coordinates, utc_offset={}", location.utc_offset_secs);

        if !store.is_different(&location) {
            return Ok(false);
        }
        store.set(location)?;
        self.update_day_and_night(&*store, today, true);
        Ok(true)
    }

    /// Draw the face onto `surface`, filling `target`.
    ///
    /// Bands go down darkest first, then the dial, then the hour hand for
    /// `time`. The surface is expected to start out white.
    pub fn render<S>(&mut self, surface: &mut S, target: Rect, time: NaiveTime) -> Result<()>
    where
        S: RenderSurface + ?Sized,
    {
        for layer in BandLayer::ALL {
            self.bands[layer.index()].render(surface, layer.fill(), target);
        }

        self.dial.draw(surface, target);

        if self.options.hour_hand {
            draw_hour_hand(surface, target, time.hour(), time.minute())?;
        }

        surface.set_compositing_mode(CompositingMode::Assign);
        Ok(())
    }

    /// Sunrise as clock text (`--:--` when the sun does not rise).
    pub fn sunrise_text(&self) -> String {
        format_clock_time(
            self.band(BandLayer::Civil).dawn(),
            self.options.clock_style,
        )
    }

    /// Sunset as clock text (`--:--` when the sun does not set).
    pub fn sunset_text(&self) -> String {
        format_clock_time(
            self.band(BandLayer::Civil).dusk(),
            self.options.clock_style,
        )
    }

    /// Moon phase for `date_utc`, mirrored for the southern hemisphere once a
    /// location is known.
    pub fn moon_phase(&self, date_utc: NaiveDate) -> MoonPhase {
        let latitude = self.location.map_or(0.0, |location| location.latitude);
        MoonPhase::on(date_utc, latitude)
    }
}
