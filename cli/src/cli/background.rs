use clap::{Args, Subcommand, ValueEnum};
use glaze_prefs::{BackgroundMode, GradientKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Video,
    Image,
    Solid,
    Gradient,
    #[value(alias = "animated")]
    AnimatedGradient,
}

impl From<ModeArg> for BackgroundMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Video => BackgroundMode::Video,
            ModeArg::Image => BackgroundMode::Image,
            ModeArg::Solid => BackgroundMode::Solid,
            ModeArg::Gradient => BackgroundMode::Gradient,
            ModeArg::AnimatedGradient => BackgroundMode::AnimatedGradient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GradientKindArg {
    Linear,
    Radial,
}

impl From<GradientKindArg> for GradientKind {
    fn from(arg: GradientKindArg) -> Self {
        match arg {
            GradientKindArg::Linear => GradientKind::Linear,
            GradientKindArg::Radial => GradientKind::Radial,
        }
    }
}

/// Fields to change. Anything left out keeps its current value.
#[derive(Debug, Default, Args)]
pub struct BackgroundArgs {
    /// Active background mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Video source for video mode
    #[arg(long)]
    pub video_url: Option<String>,

    /// Image source for image mode
    #[arg(long)]
    pub image_url: Option<String>,

    /// Hex color for solid mode
    #[arg(long)]
    pub color: Option<String>,

    /// Gradient shape for gradient mode
    #[arg(long, value_enum)]
    pub gradient_kind: Option<GradientKindArg>,

    /// Gradient angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Comma-separated hex colors for gradient mode (replaces all stops)
    #[arg(long, value_delimiter = ',')]
    pub stops: Option<Vec<String>>,

    /// Animated gradient preset key, or "custom"
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Duration of one animation cycle in milliseconds
    #[arg(long)]
    pub speed_ms: Option<u64>,

    /// CSS animation-direction (normal, reverse, alternate, alternate-reverse)
    #[arg(long)]
    pub direction: Option<String>,

    /// One custom gradient set as comma-separated hex colors; repeat for
    /// more sets (replaces all custom sets)
    #[arg(long = "custom-set")]
    pub custom_sets: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum BackgroundCommands {
    /// Print the stored settings (default)
    Show {
        /// Print only what the active mode renders
        #[arg(short, long)]
        resolved: bool,
    },

    /// Change one or more settings
    Set(BackgroundArgs),

    /// Restore the default background
    Reset,

    /// List animated gradient presets
    #[command(alias = "ls")]
    Presets,
}
