//! Pixel-budget aligned search.
//!
//! Finds the largest `width × height` under a pixel budget where both axes
//! are multiples of an alignment unit (16 for codecs and VAEs that work in
//! 16-pixel blocks), tracking the source aspect ratio.
//!
//! ```text
//!     height: max_aligned ──► alignment, step -alignment
//!        │
//!        ├─ width_exact = aspect × height
//!        ├─ width_down  = ⌊width_exact / a⌋ × a
//!        └─ width_up    = width_down + a
//!             keep the strictly largest w × h ≤ budget
//! ```

use num_traits::Float;

use crate::dimensions::Dimensions;
use crate::error::{Error, Result};

/// Default alignment unit.
pub const DEFAULT_ALIGNMENT: u32 = 16;

/// Default pixel budget (1024×576).
pub const DEFAULT_MAX_PIXELS: u64 = 589_824;

/// Smallest budget offered to users (one 16×16 cell).
pub const MIN_MAX_PIXELS: u64 = 16 * 16;

/// Largest budget offered to users (2048×2048).
pub const MAX_MAX_PIXELS: u64 = 2048 * 2048;

/// Outcome of [`search_aligned`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignedSearch {
    /// Chosen dimensions.
    pub dimensions: Dimensions,
    /// `dimensions.width × dimensions.height`.
    pub pixels: u64,
    /// True when no candidate fit and the `alignment × alignment` square was
    /// used instead. The fallback ignores aspect ratio.
    pub fallback: bool,
}

/// Search for the largest aligned dimensions within `max_pixels`.
///
/// Heights are scanned from the largest aligned height the budget allows
/// down to `alignment`. For each height the two aligned widths bracketing
/// `aspect × height` are tried, floor first. The first candidate with the
/// strictly greatest pixel count wins.
///
/// Requires `alignment > 0` and `alignment² <= max_pixels <= MAX_MAX_PIXELS`.
/// Every candidate is at least `alignment` wide, so the scan starts no
/// higher than `max_pixels / alignment`; the loop runs at most
/// `MAX_MAX_PIXELS / alignment²` times.
///
/// ```
/// use ressel::{Dimensions, search_aligned};
///
/// let found = search_aligned(Dimensions::new(1920, 1080), 589_824, 16).unwrap();
/// assert_eq!(found.dimensions, Dimensions::new(1024, 576));
/// assert_eq!(found.pixels, 589_824);
/// ```
pub fn search_aligned(original: Dimensions, max_pixels: u64, alignment: u32) -> Result<AlignedSearch> {
    let original = original.validate()?;
    if alignment == 0 {
        return Err(Error::InvalidArgument {
            arg: "alignment",
            reason: "must be positive",
        });
    }
    let cell = alignment as u64 * alignment as u64;
    if max_pixels < cell {
        return Err(Error::InvalidArgument {
            arg: "max_pixels",
            reason: "smaller than one alignment cell",
        });
    }
    if max_pixels > MAX_MAX_PIXELS {
        return Err(Error::InvalidArgument {
            arg: "max_pixels",
            reason: "exceeds 2048x2048",
        });
    }

    let aspect = original.aspect_ratio();
    let step = alignment as f64;
    let theoretical_max_height = Float::sqrt(max_pixels as f64 / aspect);
    let tallest_fitting = max_pixels / alignment as u64 / alignment as u64 * alignment as u64;
    let max_height_aligned = aligned_floor(theoretical_max_height, step).min(tallest_fitting);

    let mut best: Option<(Dimensions, u64)> = None;
    let mut height = max_height_aligned;
    while height >= alignment as u64 {
        let width_down = aligned_floor(aspect * height as f64, step);
        let width_up = width_down + alignment as u64;

        for width in [width_down, width_up] {
            let pixels = width.saturating_mul(height);
            if width == 0 || pixels > max_pixels {
                continue;
            }
            let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
                continue;
            };
            if best.is_none_or(|(_, p)| pixels > p) {
                best = Some((Dimensions::new(w, h), pixels));
            }
        }
        height -= alignment as u64;
    }

    let result = match best {
        Some((dimensions, pixels)) => AlignedSearch {
            dimensions,
            pixels,
            fallback: false,
        },
        None => {
            tracing::debug!(
                %original,
                max_pixels,
                alignment,
                "no aligned candidate under budget, using minimum cell"
            );
            AlignedSearch {
                dimensions: Dimensions::new(alignment, alignment),
                pixels: cell,
                fallback: true,
            }
        }
    };

    tracing::debug!(
        %original,
        target = %result.dimensions,
        pixels = result.pixels,
        efficiency = result.pixels as f64 / max_pixels as f64,
        aspect_delta = original.aspect_difference(&result.dimensions),
        "aligned search done"
    );
    Ok(result)
}

/// [`search_aligned`] with [`DEFAULT_ALIGNMENT`].
pub fn search_default(original: Dimensions, max_pixels: u64) -> Result<AlignedSearch> {
    search_aligned(original, max_pixels, DEFAULT_ALIGNMENT)
}

/// `⌊value / step⌋ × step`, saturating to 0 for non-finite or negative input.
fn aligned_floor(value: f64, step: f64) -> u64 {
    let cells = Float::floor(value / step);
    if cells.is_finite() && cells > 0.0 {
        cells as u64 * step as u64
    } else {
        0
    }
}
