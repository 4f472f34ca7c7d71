use clap::{Args, Parser, Subcommand};

use ressel::{
    CandidatePreset, DEFAULT_ALIGNMENT, DEFAULT_MAX_PIXELS, HeightPreset, TieBreak, UpscaleMethod,
};

#[derive(Parser)]
#[command(name = "ressel", version, about = "Resolution selection for media pipelines")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Resampler label carried in the plan (nearest-exact, bilinear, area, bicubic, lanczos)
    #[arg(long, global = true, default_value_t = UpscaleMethod::Lanczos)]
    pub method: UpscaleMethod,

    /// Print the plan as JSON instead of the text summary
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scale to a preset height, keeping the aspect ratio
    Height {
        #[command(flatten)]
        source: Source,

        /// Height preset (144p .. 2160p)
        #[arg(long, default_value_t = HeightPreset::P720)]
        preset: HeightPreset,
    },

    /// Largest aligned dimensions under a pixel budget
    Budget {
        #[command(flatten)]
        source: Source,

        /// Maximum pixel count (width × height), 256 ..= 4194304
        #[arg(long, default_value_t = DEFAULT_MAX_PIXELS)]
        max_pixels: u64,

        /// Alignment unit both axes must divide by
        #[arg(long, default_value_t = DEFAULT_ALIGNMENT)]
        alignment: u32,
    },

    /// Nearest aspect ratio from a candidate table
    Preset {
        #[command(flatten)]
        source: Source,

        /// Candidate table (wan, 480p, 720p)
        #[arg(long, default_value_t = CandidatePreset::Wan)]
        table: CandidatePreset,

        /// Tie policy (none, nearest-pixel-count)
        #[arg(long, default_value_t = TieBreak::None)]
        tie_break: TieBreak,
    },
}

/// Source image dimensions.
#[derive(Args)]
pub struct Source {
    /// Source width in pixels
    #[arg(long)]
    pub width: u32,

    /// Source height in pixels
    #[arg(long)]
    pub height: u32,
}
