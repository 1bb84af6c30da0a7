//! The 24-hour watchface.
//!
//! ## Module Structure
//!
//! - [`geometry`]: screen constants, points, and the time-to-angle mapping
//! - [`surface`]: colors, compositing modes, images, paths and the
//!   [`RenderSurface`] seam
//! - [`canvas`]: software 1-bit surface with PGM and ASCII output
//! - [`band`]: one twilight band as a filled wedge
//! - [`dial`]: rim, ticks and the hour hand
//! - [`controller`]: the [`Watchface`] tying it all together
//!
//! Rendering goes darkest first. The night band paints black below the
//! astronomical dawn/dusk hands, and each twilight band then blits its grey
//! overlay and carves white back out above its own hands:
//!
//! ```text
//! night (black) → astronomical (dark) → nautical (medium) → civil (light) → dial → hand
//! ```

pub mod band;
pub mod canvas;
pub mod controller;
pub mod dial;
pub mod geometry;
pub mod surface;

pub use band::{BandState, TwilightBand};
pub use canvas::Canvas;
pub use controller::{BandLayer, FaceOptions, Watchface};
pub use geometry::{EnclosureSide, Point, Rect};
pub use surface::{Color, CompositingMode, Image, Path, RenderSurface, Tone};

#[cfg(any(test, feature = "testing-support"))]
pub use surface::{DrawCall, RecordingSurface};
