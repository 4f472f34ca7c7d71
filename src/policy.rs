//! Policy family, diagnostics bundle, and resize plan.
//!
//! [`ResizePolicy`] is the closed set of selection strategies. Resolving a
//! policy against source dimensions yields a [`ResizePolicyResult`], whose
//! `Display` output is the human-readable summary a host shows next to the
//! image. [`ResizePlan`] adds the resampler label the host passes through
//! to its own scaler.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};

use crate::dimensions::Dimensions;
use crate::error::{Error, Result};
use crate::preset::{CandidatePreset, TieBreak, select_preset};
use crate::scale::{HeightPreset, scale_to_height};
use crate::search::{DEFAULT_ALIGNMENT, search_aligned};

/// Resolution selection strategy.
///
/// ```
/// use ressel::{Dimensions, HeightPreset, ResizePolicy};
///
/// let result = ResizePolicy::height_preset(HeightPreset::P720)
///     .resolve(Dimensions::new(1920, 1080))
///     .unwrap();
/// assert_eq!(result.target, Dimensions::new(1280, 720));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizePolicy<'a> {
    /// Fixed output height, width from the source aspect ratio.
    FixedHeight { height: u32 },
    /// Largest aligned dimensions under a pixel budget.
    PixelBudget { max_pixels: u64, alignment: u32 },
    /// Closest aspect ratio from a built-in table.
    NearestPreset {
        preset: CandidatePreset,
        tie_break: TieBreak,
    },
    /// Closest aspect ratio from caller-supplied candidates.
    NearestCandidates {
        candidates: &'a [Dimensions],
        tie_break: TieBreak,
    },
}

impl ResizePolicy<'static> {
    /// Fixed height from a named preset.
    pub const fn height_preset(preset: HeightPreset) -> Self {
        Self::FixedHeight {
            height: preset.height(),
        }
    }

    /// Pixel budget with the default 16-pixel alignment.
    pub const fn pixel_budget(max_pixels: u64) -> Self {
        Self::PixelBudget {
            max_pixels,
            alignment: DEFAULT_ALIGNMENT,
        }
    }

    /// Nearest aspect from a built-in candidate table.
    pub const fn nearest_preset(preset: CandidatePreset, tie_break: TieBreak) -> Self {
        Self::NearestPreset { preset, tie_break }
    }
}

impl<'a> ResizePolicy<'a> {
    /// Nearest aspect from a caller-supplied candidate list.
    pub const fn nearest_candidates(candidates: &'a [Dimensions], tie_break: TieBreak) -> Self {
        Self::NearestCandidates {
            candidates,
            tie_break,
        }
    }

    /// Apply the policy to `original`.
    pub fn resolve(&self, original: Dimensions) -> Result<ResizePolicyResult> {
        let (target, applied, fallback) = match *self {
            Self::FixedHeight { height } => (
                scale_to_height(original, height)?,
                AppliedPolicy::FixedHeight { height },
                false,
            ),
            Self::PixelBudget {
                max_pixels,
                alignment,
            } => {
                let found = search_aligned(original, max_pixels, alignment)?;
                (
                    found.dimensions,
                    AppliedPolicy::PixelBudget {
                        max_pixels,
                        alignment,
                    },
                    found.fallback,
                )
            }
            Self::NearestPreset { preset, tie_break } => {
                let m = select_preset(original, preset.candidates(), tie_break)?;
                (
                    m.dimensions,
                    AppliedPolicy::NearestPreset {
                        tie_break,
                        index: m.index,
                    },
                    false,
                )
            }
            Self::NearestCandidates {
                candidates,
                tie_break,
            } => {
                let m = select_preset(original, candidates, tie_break)?;
                (
                    m.dimensions,
                    AppliedPolicy::NearestPreset {
                        tie_break,
                        index: m.index,
                    },
                    false,
                )
            }
        };
        Ok(ResizePolicyResult {
            original,
            target,
            policy: applied,
            fallback,
        })
    }

    /// Apply the policy and attach the resampler label.
    pub fn plan(&self, original: Dimensions, method: UpscaleMethod) -> Result<ResizePlan> {
        Ok(ResizePlan {
            result: self.resolve(original)?,
            method,
        })
    }
}

/// Which policy produced a result, with the parameters that matter for
/// diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum AppliedPolicy {
    FixedHeight { height: u32 },
    PixelBudget { max_pixels: u64, alignment: u32 },
    NearestPreset { tie_break: TieBreak, index: usize },
}

/// Outcome of resolving a [`ResizePolicy`].
///
/// Aspect ratio and pixel count are derived on demand from `target`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResizePolicyResult {
    /// Source dimensions.
    pub original: Dimensions,
    /// Selected dimensions.
    pub target: Dimensions,
    /// Policy that selected `target`.
    pub policy: AppliedPolicy,
    /// True when the pixel-budget search fell back to the minimum cell.
    pub fallback: bool,
}

impl ResizePolicyResult {
    /// Width over height of the selected dimensions.
    pub fn target_aspect(&self) -> f64 {
        self.target.aspect_ratio()
    }

    /// Pixel count of the selected dimensions.
    pub fn target_pixels(&self) -> u64 {
        self.target.pixel_count()
    }

    /// `|target aspect − original aspect|`.
    pub fn aspect_difference(&self) -> f64 {
        self.original.aspect_difference(&self.target)
    }

    /// Fraction of the pixel budget used. `None` for non-budget policies.
    pub fn budget_efficiency(&self) -> Option<f64> {
        match self.policy {
            AppliedPolicy::PixelBudget { max_pixels, .. } => {
                Some(self.target_pixels() as f64 / max_pixels as f64)
            }
            _ => None,
        }
    }

    /// The diagnostic summary as an owned string.
    #[cfg(feature = "alloc")]
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResizePolicyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Original: {} ({} pixels, aspect: {:.4}) → Target: {} ({} pixels, aspect: {:.4})",
            self.original,
            Grouped(self.original.pixel_count()),
            self.original.aspect_ratio(),
            self.target,
            Grouped(self.target_pixels()),
            self.target_aspect(),
        )?;
        match self.policy {
            AppliedPolicy::FixedHeight { height } => write!(f, " [height {height}]")?,
            AppliedPolicy::PixelBudget {
                max_pixels,
                alignment,
            } => write!(
                f,
                " [{alignment}×, {:.1}% of {}]",
                self.target_pixels() as f64 / max_pixels as f64 * 100.0,
                Grouped(max_pixels)
            )?,
            AppliedPolicy::NearestPreset { tie_break, index } => {
                write!(f, " [preset #{index}, tie-break {tie_break}]")?
            }
        }
        if self.fallback {
            f.write_str(" (fallback)")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResizePolicyResult {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("ResizePolicyResult", 7)?;
        s.serialize_field("original", &self.original)?;
        s.serialize_field("target", &self.target)?;
        s.serialize_field("aspect_ratio", &self.target_aspect())?;
        s.serialize_field("pixels", &self.target_pixels())?;
        s.serialize_field("aspect_difference", &self.aspect_difference())?;
        s.serialize_field("policy", &self.policy)?;
        s.serialize_field("fallback", &self.fallback)?;
        s.end()
    }
}

/// Thousands-grouped integer, e.g. `589,824`.
struct Grouped(u64);

impl fmt::Display for Grouped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut divisor = 1u64;
        while self.0 / divisor >= 1000 {
            divisor *= 1000;
        }
        write!(f, "{}", self.0 / divisor)?;
        while divisor > 1 {
            divisor /= 1000;
            write!(f, ",{:03}", (self.0 / divisor) % 1000)?;
        }
        Ok(())
    }
}

/// Resampler label passed through untouched to the host's image scaler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UpscaleMethod {
    NearestExact,
    Bilinear,
    Area,
    Bicubic,
    #[default]
    Lanczos,
}

impl UpscaleMethod {
    /// Every method, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::NearestExact,
        Self::Bilinear,
        Self::Area,
        Self::Bicubic,
        Self::Lanczos,
    ];

    /// Label accepted by `FromStr`, e.g. `"nearest-exact"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NearestExact => "nearest-exact",
            Self::Bilinear => "bilinear",
            Self::Area => "area",
            Self::Bicubic => "bicubic",
            Self::Lanczos => "lanczos",
        }
    }
}

impl FromStr for UpscaleMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownLabel {
                kind: "upscale method",
            })
    }
}

impl fmt::Display for UpscaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the host should do with the image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResizePlan {
    pub result: ResizePolicyResult,
    pub method: UpscaleMethod,
}

impl ResizePlan {
    /// Dimensions to resample to.
    pub fn resize_to(&self) -> Dimensions {
        self.result.target
    }

    /// False when the target equals the source; the host can pass the image
    /// through without resampling.
    pub fn needs_resize(&self) -> bool {
        self.result.target != self.result.original
    }
}
