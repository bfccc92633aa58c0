//! Sampling region and its inscribed circle.
//!
//! # Geometry
//!
//! ```text
//! side   = right - left            (must equal bottom - top)
//! center = (left + side/2, top + side/2)
//! radius = side/2
//! ```
//!
//! A square with an odd side has a half-integer center. [`Circle`] keeps
//! every length doubled so that membership is decided with exact integer
//! arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::{PiError, PiResult};

/// Largest accepted coordinate magnitude.
///
/// Doubled centers and squared distances must stay inside `i64` and
/// `i128` for every point of every accepted region.
pub const MAX_COORDINATE: i64 = i64::MAX / 4;

fn ensure_coordinate(name: &str, value: i64) -> PiResult<()> {
    if (-MAX_COORDINATE..=MAX_COORDINATE).contains(&value) {
        Ok(())
    } else {
        Err(PiError::invalid_region(format!(
            "{name} ({value}) is outside ±{MAX_COORDINATE}"
        )))
    }
}

/// Axis-aligned sampling region with inclusive integer bounds.
///
/// `top` is the smaller y value, matching screen coordinates.
/// Deserialization goes through [`Region::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RegionBounds")]
pub struct Region {
    left: i64,
    right: i64,
    top: i64,
    bottom: i64,
}

impl Region {
    /// Create a region, rejecting inverted or empty bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] if `right <= left`,
    /// `bottom <= top`, or any bound exceeds [`MAX_COORDINATE`].
    pub fn new(left: i64, right: i64, top: i64, bottom: i64) -> PiResult<Self> {
        ensure_coordinate("left", left)?;
        ensure_coordinate("right", right)?;
        ensure_coordinate("top", top)?;
        ensure_coordinate("bottom", bottom)?;
        if right <= left {
            return Err(PiError::invalid_region(format!(
                "right ({right}) must be greater than left ({left})"
            )));
        }
        if bottom <= top {
            return Err(PiError::invalid_region(format!(
                "bottom ({bottom}) must be greater than top ({top})"
            )));
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    /// Create a square region and check that width equals height.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] for inverted bounds or unequal
    /// sides.
    pub fn square(left: i64, right: i64, top: i64, bottom: i64) -> PiResult<Self> {
        let region = Self::new(left, right, top, bottom)?;
        region.ensure_square()?;
        Ok(region)
    }

    /// The square inset by `margin` on every side of a `size`×`size` canvas.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] if the margins leave no area.
    pub fn inset(size: i64, margin: i64) -> PiResult<Self> {
        let far = size
            .checked_sub(margin)
            .ok_or_else(|| PiError::invalid_region(format!("margin {margin} overflows size {size}")))?;
        Self::square(margin, far, margin, far)
    }

    /// Check that width equals height.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] when the sides differ.
    pub fn ensure_square(&self) -> PiResult<()> {
        if self.width() == self.height() {
            Ok(())
        } else {
            Err(PiError::invalid_region(format!(
                "width {} != height {}; inscribed circle requires a square",
                self.width(),
                self.height()
            )))
        }
    }

    /// Left bound (inclusive).
    #[must_use]
    pub const fn left(&self) -> i64 {
        self.left
    }

    /// Right bound (inclusive).
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.right
    }

    /// Top bound (inclusive).
    #[must_use]
    pub const fn top(&self) -> i64 {
        self.top
    }

    /// Bottom bound (inclusive).
    #[must_use]
    pub const fn bottom(&self) -> i64 {
        self.bottom
    }

    /// Horizontal extent `right - left`.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.right - self.left
    }

    /// Vertical extent `bottom - top`.
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Whether `(x, y)` lies within the inclusive bounds.
    #[must_use]
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// The circle inscribed in this region.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] if the region is not square.
    pub fn inscribed_circle(&self) -> PiResult<Circle> {
        self.ensure_square()?;
        let side = self.width();
        Ok(Circle {
            center_x2: 2 * self.left + side,
            center_y2: 2 * self.top + side,
            diameter: side,
        })
    }
}

/// Unchecked bounds as they appear on the wire.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionBounds {
    left: i64,
    right: i64,
    top: i64,
    bottom: i64,
}

impl TryFrom<RegionBounds> for Region {
    type Error = PiError;

    fn try_from(b: RegionBounds) -> PiResult<Self> {
        Self::new(b.left, b.right, b.top, b.bottom)
    }
}

/// Circle used for inside/outside classification.
///
/// Stored with doubled center coordinates and the diameter so that
/// half-integer centers stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Circle {
    center_x2: i64,
    center_y2: i64,
    diameter: i64,
}

impl Circle {
    /// Circle with an integer center and a non-negative integer radius.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] if `radius` is negative or any
    /// value exceeds [`MAX_COORDINATE`].
    pub fn new(center_x: i64, center_y: i64, radius: i64) -> PiResult<Self> {
        ensure_coordinate("center x", center_x)?;
        ensure_coordinate("center y", center_y)?;
        ensure_coordinate("radius", radius)?;
        if radius < 0 {
            return Err(PiError::invalid_region(format!(
                "radius ({radius}) must not be negative"
            )));
        }
        Ok(Self {
            center_x2: 2 * center_x,
            center_y2: 2 * center_y,
            diameter: 2 * radius,
        })
    }

    /// Center as floating-point coordinates.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.center_x2 as f64 / 2.0, self.center_y2 as f64 / 2.0)
    }

    /// Radius as a floating-point length.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.diameter as f64 / 2.0
    }

    /// Doubled center coordinates `(2·cx, 2·cy)`.
    #[must_use]
    pub const fn center_doubled(&self) -> (i64, i64) {
        (self.center_x2, self.center_y2)
    }

    /// Diameter `2·r`.
    #[must_use]
    pub const fn diameter(&self) -> i64 {
        self.diameter
    }
}
