//! Width × height value type and the aspect/pixel helpers every policy shares.
//!
//! Aspect ratio and pixel count are always derived from the current
//! dimensions, never cached.

use core::fmt;

use num_traits::Float;

use crate::error::{Error, Result};

/// Width × height dimensions in pixels.
///
/// A validated `Dimensions` has both axes greater than zero. [`new`](Self::new)
/// is a plain `const` constructor for static tables; inputs from callers go
/// through [`validated`](Self::validated).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions without validation.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create dimensions, rejecting a zero width or height.
    ///
    /// ```
    /// use ressel::{Dimensions, Error};
    ///
    /// assert!(Dimensions::validated(1920, 1080).is_ok());
    /// assert_eq!(
    ///     Dimensions::validated(0, 1080),
    ///     Err(Error::InvalidDimensions { width: 0, height: 1080 })
    /// );
    /// ```
    pub fn validated(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height).validate()
    }

    /// Check the positive-axes invariant.
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Width × height, widened so 32-bit axes cannot overflow.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Absolute difference between this aspect ratio and `other`'s.
    pub fn aspect_difference(&self, other: &Dimensions) -> f64 {
        Float::abs(self.aspect_ratio() - other.aspect_ratio())
    }

    /// Absolute difference between the two pixel counts.
    pub fn pixel_difference(&self, other: &Dimensions) -> u64 {
        self.pixel_count().abs_diff(other.pixel_count())
    }

    /// Whether both axes are multiples of `alignment`.
    pub fn is_aligned(&self, alignment: u32) -> bool {
        alignment != 0 && self.width % alignment == 0 && self.height % alignment == 0
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl From<Dimensions> for (u32, u32) {
    fn from(d: Dimensions) -> Self {
        (d.width, d.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
