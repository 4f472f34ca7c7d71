//! Resolution selection for media pipelines.
//!
//! Given a source image's width and height, compute target dimensions under
//! one of three policies. Pure arithmetic, `no_std` compatible.
//!
//! # Modules
//!
//! - [`dimensions`]: `Dimensions` value type, aspect ratio and pixel count
//! - [`scale`]: Fixed-height scaling with named height presets
//! - [`search`]: Pixel-budget search for 16-aligned dimensions
//! - [`preset`]: Nearest-aspect selection from candidate tables
//! - [`policy`]: Tagged policy enum, diagnostics, and resize plans
//!
//! # Example
//!
//! ```
//! use ressel::{Dimensions, ResizePolicy, UpscaleMethod};
//!
//! let plan = ResizePolicy::pixel_budget(589_824)
//!     .plan(Dimensions::new(1920, 1080), UpscaleMethod::Lanczos)
//!     .unwrap();
//!
//! assert_eq!(plan.resize_to(), Dimensions::new(1024, 576));
//! assert!(plan.needs_resize());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod dimensions;
pub mod error;
pub mod policy;
pub mod preset;
pub mod scale;
pub mod search;

pub use dimensions::Dimensions;
pub use error::{Error, Result};
pub use policy::{AppliedPolicy, ResizePlan, ResizePolicy, ResizePolicyResult, UpscaleMethod};
pub use preset::{CandidatePreset, PresetMatch, TieBreak, select_from, select_preset};
pub use scale::{HeightPreset, scale_to_height, scale_to_preset};
pub use search::{
    AlignedSearch, DEFAULT_ALIGNMENT, DEFAULT_MAX_PIXELS, MAX_MAX_PIXELS, MIN_MAX_PIXELS,
    search_aligned, search_default,
};
