//! Nearest-aspect preset selection.
//!
//! Picks the candidate whose aspect ratio is closest to the source. Two
//! tie policies are supported because both have shipped as the default in
//! different releases of the video nodes; see [`TieBreak`].

use core::fmt;
use core::str::FromStr;

use crate::dimensions::Dimensions;
use crate::error::{Error, Result};

/// How to choose among candidates with equal aspect difference.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TieBreak {
    /// First candidate in table order wins (strict `<` scan).
    #[default]
    None,
    /// Among all candidates tied on the minimum aspect difference, pick the
    /// one whose pixel count is closest to the source. Further ties go to
    /// the first in table order.
    NearestPixelCount,
}

impl TieBreak {
    /// Label accepted by `FromStr`, e.g. `"nearest-pixel-count"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NearestPixelCount => "nearest-pixel-count",
        }
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" | "first" => Ok(Self::None),
            "nearest-pixel-count" | "pixels" => Ok(Self::NearestPixelCount),
            _ => Err(Error::UnknownLabel { kind: "tie break" }),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Built-in candidate tables for video generation models.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CandidatePreset {
    /// Mixed 480p-class table: square, 2:3, 3:2, 16:9 and 9:16.
    #[default]
    Wan,
    /// 480p landscape, portrait and square.
    Wan480p,
    /// 720p landscape, portrait and square.
    Wan720p,
}

const WAN: [Dimensions; 5] = [
    Dimensions::new(640, 640),
    Dimensions::new(512, 768),
    Dimensions::new(768, 512),
    Dimensions::new(854, 480),
    Dimensions::new(270, 480),
];

const WAN_480P: [Dimensions; 3] = [
    Dimensions::new(832, 480),
    Dimensions::new(480, 832),
    Dimensions::new(624, 624),
];

const WAN_720P: [Dimensions; 3] = [
    Dimensions::new(1280, 720),
    Dimensions::new(720, 1280),
    Dimensions::new(960, 960),
];

impl CandidatePreset {
    /// Every candidate table.
    pub const ALL: [Self; 3] = [Self::Wan, Self::Wan480p, Self::Wan720p];

    /// Candidates in selection order.
    pub const fn candidates(self) -> &'static [Dimensions] {
        match self {
            Self::Wan => &WAN,
            Self::Wan480p => &WAN_480P,
            Self::Wan720p => &WAN_720P,
        }
    }

    /// Label accepted by `FromStr`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wan => "wan",
            Self::Wan480p => "480p",
            Self::Wan720p => "720p",
        }
    }
}

impl FromStr for CandidatePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownLabel {
                kind: "candidate preset",
            })
    }
}

impl fmt::Display for CandidatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`select_preset`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetMatch {
    /// Selected candidate.
    pub dimensions: Dimensions,
    /// Position of the candidate in the input slice.
    pub index: usize,
    /// `|candidate aspect − source aspect|`.
    pub aspect_difference: f64,
}

/// Select the candidate whose aspect ratio is closest to `original`.
///
/// Differences are compared exactly (no epsilon), so only candidates with
/// bit-identical aspect differences count as tied.
///
/// ```
/// use ressel::{CandidatePreset, Dimensions, TieBreak, select_preset};
///
/// let m = select_preset(
///     Dimensions::new(1000, 1000),
///     CandidatePreset::Wan.candidates(),
///     TieBreak::None,
/// )
/// .unwrap();
/// assert_eq!(m.dimensions, Dimensions::new(640, 640));
/// assert_eq!(m.aspect_difference, 0.0);
/// ```
pub fn select_preset(
    original: Dimensions,
    candidates: &[Dimensions],
    tie_break: TieBreak,
) -> Result<PresetMatch> {
    let original = original.validate()?;
    if candidates.is_empty() {
        return Err(Error::InvalidArgument {
            arg: "candidates",
            reason: "must not be empty",
        });
    }
    if let Some(bad) = candidates.iter().find(|c| c.width == 0 || c.height == 0) {
        return Err(Error::InvalidDimensions {
            width: bad.width,
            height: bad.height,
        });
    }

    let first_match = first_match(&original, candidates);
    let chosen = match tie_break {
        TieBreak::None => first_match,
        TieBreak::NearestPixelCount => {
            let min = first_match.aspect_difference;
            let mut chosen = first_match;
            let mut best_distance = original.pixel_difference(&first_match.dimensions);
            for (index, c) in candidates.iter().enumerate().skip(first_match.index + 1) {
                if original.aspect_difference(c) != min {
                    continue;
                }
                let distance = original.pixel_difference(c);
                if distance < best_distance {
                    best_distance = distance;
                    chosen = PresetMatch {
                        dimensions: *c,
                        index,
                        aspect_difference: min,
                    };
                }
            }
            chosen
        }
    };

    tracing::debug!(
        %original,
        target = %chosen.dimensions,
        index = chosen.index,
        aspect_delta = chosen.aspect_difference,
        tie_break = tie_break.label(),
        "selected nearest preset"
    );
    Ok(chosen)
}

/// [`select_preset`] against a built-in table.
pub fn select_from(
    original: Dimensions,
    preset: CandidatePreset,
    tie_break: TieBreak,
) -> Result<PresetMatch> {
    select_preset(original, preset.candidates(), tie_break)
}

/// Strict `<` scan: the first candidate with the smallest difference.
/// `candidates` must be non-empty.
fn first_match(original: &Dimensions, candidates: &[Dimensions]) -> PresetMatch {
    let mut best = PresetMatch {
        dimensions: candidates[0],
        index: 0,
        aspect_difference: original.aspect_difference(&candidates[0]),
    };
    for (index, c) in candidates.iter().enumerate().skip(1) {
        let diff = original.aspect_difference(c);
        if diff < best.aspect_difference {
            best = PresetMatch {
                dimensions: *c,
                index,
                aspect_difference: diff,
            };
        }
    }
    best
}
