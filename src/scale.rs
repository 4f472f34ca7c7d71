//! Fixed-height scaling: keep the source aspect ratio at a preset height.

use core::fmt;
use core::str::FromStr;

use num_traits::Float;

use crate::dimensions::Dimensions;
use crate::error::{Error, Result};

/// Named output heights.
///
/// Labels are the usual `<height>p` names. The default is
/// [`P720`](Self::P720).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightPreset {
    P144,
    P240,
    P360,
    P480,
    P540,
    P576,
    #[default]
    P720,
    P900,
    P1080,
    P1200,
    P1440,
    P1600,
    P2160,
}

impl HeightPreset {
    /// Every preset, smallest height first.
    pub const ALL: [Self; 13] = [
        Self::P144,
        Self::P240,
        Self::P360,
        Self::P480,
        Self::P540,
        Self::P576,
        Self::P720,
        Self::P900,
        Self::P1080,
        Self::P1200,
        Self::P1440,
        Self::P1600,
        Self::P2160,
    ];

    /// Target height in pixels.
    pub const fn height(self) -> u32 {
        match self {
            Self::P144 => 144,
            Self::P240 => 240,
            Self::P360 => 360,
            Self::P480 => 480,
            Self::P540 => 540,
            Self::P576 => 576,
            Self::P720 => 720,
            Self::P900 => 900,
            Self::P1080 => 1080,
            Self::P1200 => 1200,
            Self::P1440 => 1440,
            Self::P1600 => 1600,
            Self::P2160 => 2160,
        }
    }

    /// Label as shown to users, e.g. `"720p"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::P144 => "144p",
            Self::P240 => "240p",
            Self::P360 => "360p",
            Self::P480 => "480p",
            Self::P540 => "540p",
            Self::P576 => "576p",
            Self::P720 => "720p",
            Self::P900 => "900p",
            Self::P1080 => "1080p",
            Self::P1200 => "1200p",
            Self::P1440 => "1440p",
            Self::P1600 => "1600p",
            Self::P2160 => "2160p",
        }
    }
}

impl FromStr for HeightPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownLabel {
                kind: "height preset",
            })
    }
}

impl fmt::Display for HeightPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scale `original` to `target_height`, deriving the width from the source
/// aspect ratio.
///
/// The width is rounded half away from zero. A width that rounds to zero
/// (only possible for extreme portrait sources) is clamped to 1. A width
/// that does not fit in `u32` is rejected with [`Error::InvalidArgument`].
///
/// ```
/// use ressel::{Dimensions, scale_to_height};
///
/// let d = scale_to_height(Dimensions::new(1920, 1080), 720).unwrap();
/// assert_eq!(d, Dimensions::new(1280, 720));
/// ```
pub fn scale_to_height(original: Dimensions, target_height: u32) -> Result<Dimensions> {
    let original = original.validate()?;
    if target_height == 0 {
        return Err(Error::InvalidDimensions {
            width: original.width,
            height: target_height,
        });
    }

    let aspect = original.aspect_ratio();
    let rounded = Float::round(target_height as f64 * aspect).max(1.0);
    if rounded > u32::MAX as f64 {
        return Err(Error::InvalidArgument {
            arg: "target_height",
            reason: "width overflows u32",
        });
    }
    let width = rounded as u32;
    let target = Dimensions::new(width, target_height);

    tracing::debug!(
        %original,
        %target,
        aspect,
        aspect_delta = original.aspect_difference(&target),
        "scaled to fixed height"
    );
    Ok(target)
}

/// [`scale_to_height`] with a named preset.
pub fn scale_to_preset(original: Dimensions, preset: HeightPreset) -> Result<Dimensions> {
    scale_to_height(original, preset.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_to_720() {
        assert_eq!(
            scale_to_height(Dimensions::new(1920, 1080), 720),
            Ok(Dimensions::new(1280, 720))
        );
    }

    #[test]
    fn portrait_to_1080() {
        assert_eq!(
            scale_to_height(Dimensions::new(1080, 1920), 1080),
            Ok(Dimensions::new(608, 1080))
        );
    }

    #[test]
    fn same_height_is_identity() {
        for (w, h) in [(1920, 1080), (1, 1), (3, 7), (4032, 3024), (1000, 999), (17, 1871)] {
            let d = Dimensions::new(w, h);
            assert_eq!(scale_to_height(d, h), Ok(d), "{d}");
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 3:2 at height 1 → width 1.5 → 2
        assert_eq!(
            scale_to_height(Dimensions::new(3, 2), 1),
            Ok(Dimensions::new(2, 1))
        );
        // 5:2 at height 1 → 2.5 → 3
        assert_eq!(
            scale_to_height(Dimensions::new(5, 2), 1),
            Ok(Dimensions::new(3, 1))
        );
    }

    #[test]
    fn extreme_portrait_clamps_width() {
        assert_eq!(
            scale_to_height(Dimensions::new(1, 100_000), 144),
            Ok(Dimensions::new(1, 144))
        );
    }

    #[test]
    fn rejects_width_overflow() {
        // 4000:1 at height 2_000_000 needs an 8e9-pixel width.
        assert_eq!(
            scale_to_height(Dimensions::new(4000, 1), 2_000_000),
            Err(Error::InvalidArgument {
                arg: "target_height",
                reason: "width overflows u32"
            })
        );
        // Largest representable width still succeeds.
        assert_eq!(
            scale_to_height(Dimensions::new(u32::MAX, 1), 1),
            Ok(Dimensions::new(u32::MAX, 1))
        );
    }

    #[test]
    fn rejects_zero_inputs() {
        assert_eq!(
            scale_to_height(Dimensions::new(0, 1080), 720),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 1080
            })
        );
        assert_eq!(
            scale_to_height(Dimensions::new(1920, 1080), 0),
            Err(Error::InvalidDimensions {
                width: 1920,
                height: 0
            })
        );
    }

    #[test]
    fn preset_labels_round_trip() {
        for p in HeightPreset::ALL {
            assert_eq!(p.label().parse::<HeightPreset>(), Ok(p));
            assert_eq!(p.label(), format!("{p}"));
        }
        assert_eq!("1080P".parse(), Ok(HeightPreset::P1080));
        assert!("1081p".parse::<HeightPreset>().is_err());
    }

    #[test]
    fn preset_heights_ascending() {
        assert!(HeightPreset::ALL.windows(2).all(|w| w[0].height() < w[1].height()));
        assert_eq!(HeightPreset::default().height(), 720);
    }

    #[test]
    fn scale_by_preset() {
        assert_eq!(
            scale_to_preset(Dimensions::new(4032, 3024), HeightPreset::P480),
            Ok(Dimensions::new(640, 480))
        );
    }
}
