use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rank cloud release notes by how much they matter to a resource inventory.
#[derive(Parser, Debug)]
#[command(name = "relmatch", version, about)]
pub struct Cli {
    /// Directory holding relmatch.toml and its per-environment overlays.
    #[arg(long, global = true, env = "RELMATCH_CONFIG_DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// Configuration environment: dev, test or prod.
    #[arg(long = "env", global = true, env = "RELMATCH_ENV", default_value = "dev")]
    pub env_name: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a release feed against an inventory export.
    Score(ScoreArgs),
    /// Show what the knowledge base knows about a resource type.
    Lookup {
        resource_type: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Inventory CSV. Defaults to `paths.inventory` from the config.
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// Release feed JSON. Defaults to `paths.releases` from the config.
    #[arg(long)]
    pub releases: Option<PathBuf>,

    /// Minimum relevance to keep, overriding `scoring.threshold`.
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Skip the region adjustment even if the inventory has locations.
    #[arg(long)]
    pub no_regions: bool,

    /// JSON array of annotations to merge into the results.
    #[arg(long)]
    pub annotations: Option<PathBuf>,

    /// Command that answers annotation prompts on stdin/stdout; it is run
    /// once per release.
    #[arg(long)]
    pub annotator: Option<String>,

    /// Argument passed to the annotator command (repeatable).
    #[arg(long = "annotator-arg", allow_hyphen_values = true)]
    pub annotator_args: Vec<String>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Write here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Table,
    Json,
    Csv,
}
