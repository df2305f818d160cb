use clap::{Parser, Subcommand, ValueEnum};
use lcr_lib::{Canvas, Dataset};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lcr")]
#[command(
    version,
    about = "Layout Candidate Ranker - Validate, score, and rank generated layout candidates",
    long_about = "Layout Candidate Ranker (LCR)\n\nModes:\n- rank: decode a pool of raw candidate layouts, repair and score them, and select the top-K, best first.\n- score: compute the quality breakdown (alignment/overlap/underfill/composite) for a single structured layout.\n- render: draw structured layouts as PNG images, with an optional grid montage and HTML preview.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for top-k/epsilons/weights; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a pool of candidate layouts and select the best
    Rank {
        #[arg(
            long,
            help = "Candidate pool file: JSON array of markup strings (seq/html) or of element arrays (json)"
        )]
        input: PathBuf,

        #[arg(
            long,
            value_enum,
            default_value = "seq",
            help = "How candidates in the input file are encoded"
        )]
        input_format: InputFormat,

        #[arg(
            long,
            default_value = "webui",
            help = "Dataset whose label table and canvas the candidates target (webui, rico, publaynet, posterlayout)"
        )]
        dataset: Dataset,

        #[arg(long, help = "Number of layouts to select, best first")]
        top_k: Option<usize>,

        #[arg(
            long,
            help = "Requested element count; layouts closer to it win score ties"
        )]
        expected_elements: Option<usize>,

        #[arg(
            long,
            value_enum,
            help = "Out-of-canvas handling: clip boxes back in, or reject the element"
        )]
        bounds: Option<BoundsArg>,

        #[arg(
            long,
            value_name = "EPS",
            help = "Same-axis distance under which two elements count as aligned"
        )]
        align_epsilon: Option<f32>,

        #[arg(
            long,
            value_name = "EPS",
            help = "Per-coordinate tolerance under which two layouts are duplicates"
        )]
        dedup_epsilon: Option<f32>,

        #[arg(
            long,
            value_name = "WEIGHT",
            help = "Composite penalty weight for pairwise overlap area"
        )]
        overlap_weight: Option<f32>,

        #[arg(
            long,
            value_name = "WEIGHT",
            help = "Composite penalty weight for uncovered canvas area"
        )]
        underfill_weight: Option<f32>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Score a single structured layout
    Score {
        #[arg(long, help = "Layout file: JSON array of {label,x,y,width,height}")]
        input: PathBuf,

        #[arg(
            long,
            value_name = "EPS",
            help = "Same-axis distance under which two elements count as aligned"
        )]
        align_epsilon: Option<f32>,

        #[arg(
            long,
            value_name = "WEIGHT",
            help = "Composite penalty weight for pairwise overlap area"
        )]
        overlap_weight: Option<f32>,

        #[arg(
            long,
            value_name = "WEIGHT",
            help = "Composite penalty weight for uncovered canvas area"
        )]
        underfill_weight: Option<f32>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Render structured layouts as PNG images
    Render {
        #[arg(long, help = "Layouts file: JSON array of element arrays")]
        input: PathBuf,

        #[arg(
            long,
            default_value = "webui",
            help = "Dataset whose label table drives the color palette"
        )]
        dataset: Dataset,

        #[arg(
            long,
            value_name = "WIDTHxHEIGHT",
            help = "Canvas dimensions in generator units (defaults to the dataset canvas)"
        )]
        canvas: Option<Canvas>,

        #[arg(long, default_value = "3", help = "Pixel multiplier over canvas units")]
        scale: u32,

        #[arg(
            long,
            default_value = "out",
            value_name = "PATH",
            help = "Directory for rendered files; created if missing"
        )]
        out_dir: PathBuf,

        #[arg(long, help = "Also write a grid montage of all layouts")]
        grid: bool,

        #[arg(long, help = "Also write an HTML preview of all layouts")]
        html: bool,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `label x y w h | ...` markup strings
    Seq,
    /// Absolutely-positioned div markup strings
    Html,
    /// Structured element arrays in normalized coordinates
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundsArg {
    Clip,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
