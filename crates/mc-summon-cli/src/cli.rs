//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mc_summon::HideFlagsMode;

#[derive(Parser, Debug)]
#[command(name = "mc-summon")]
#[command(about = "Turn /esummon JSON into entity and item attribute operations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// TOML file with extraction options
    #[arg(long, env = "MC_SUMMON_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// How legacy HideFlags are reported: expand or bitmask
    #[arg(long, env = "MC_SUMMON_HIDE_FLAGS", global = true)]
    pub hide_flags: Option<HideFlagsMode>,

    /// Nested JSON-in-a-string levels to re-parse in text fields
    #[arg(long, env = "MC_SUMMON_MAX_REPARSE_DEPTH", global = true)]
    pub max_reparse_depth: Option<usize>,

    /// Treat numeric legacy enchantment ids as unknown
    #[arg(long, global = true)]
    pub no_numeric_enchantments: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract entity operations
    #[command(visible_alias = "e")]
    Entity {
        /// JSON payload, `@PATH` to read a file, or `-` to read stdin
        #[arg(default_value = "-")]
        json: String,
    },

    /// Extract an item stack
    #[command(visible_alias = "i")]
    Item {
        /// JSON payload, `@PATH` to read a file, or `-` to read stdin
        #[arg(default_value = "-")]
        json: String,
    },

    /// Parse /esummon arguments and extract whatever they summon
    #[command(visible_alias = "c")]
    Command {
        /// Sender position used for `~` coordinates, as x,y,z
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        origin: Option<Vec<f64>>,

        /// `<entity> [world x y z] [json]`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
