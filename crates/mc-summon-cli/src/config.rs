//! Extraction options for the CLI.
//!
//! Precedence, lowest first: built-in defaults, the `--config` TOML file,
//! then environment variables and flags (clap resolves those two).

use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr};
use mc_summon::ExtractOptions;
use tracing::debug;

use crate::cli::Cli;

pub fn load_options(cli: &Cli) -> Result<ExtractOptions> {
    let mut options = match &cli.config {
        Some(path) => from_file(path)?,
        None => ExtractOptions::default(),
    };

    if let Some(mode) = cli.hide_flags {
        options.hide_flags = mode;
    }
    if let Some(depth) = cli.max_reparse_depth {
        options.max_reparse_depth = depth;
    }
    if cli.no_numeric_enchantments {
        options.legacy_numeric_enchantments = false;
    }

    debug!(?options, "extraction options");
    Ok(options)
}

fn from_file(path: &Path) -> Result<ExtractOptions> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config from {}", path.display()))?;
    from_toml(&contents).wrap_err_with(|| format!("failed to parse config {}", path.display()))
}

fn from_toml(contents: &str) -> Result<ExtractOptions> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use mc_summon::HideFlagsMode;

    use super::*;

    #[test]
    fn test_from_toml() {
        let options = from_toml("hide_flags = \"bitmask\"\nmax_reparse_depth = 2\n").unwrap();
        assert_eq!(options.hide_flags, HideFlagsMode::Bitmask);
        assert_eq!(options.max_reparse_depth, 2);
        assert!(options.legacy_numeric_enchantments);

        assert_eq!(from_toml("").unwrap(), ExtractOptions::default());
        assert!(from_toml("hide_flags = \"sometimes\"").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mc-summon.toml");
        fs::write(&path, "hide_flags = \"bitmask\"\nlegacy_numeric_enchantments = true\n").unwrap();

        let cli = Cli::try_parse_from([
            "mc-summon",
            "--config",
            path.to_str().unwrap(),
            "--hide-flags",
            "expand",
            "--no-numeric-enchantments",
            "item",
        ])
        .unwrap();
        let options = load_options(&cli).unwrap();

        assert_eq!(options.hide_flags, HideFlagsMode::Expand);
        assert!(!options.legacy_numeric_enchantments);
    }

    #[test]
    fn test_unparsable_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"max_reparse_depth = \"deep\"\n").unwrap();

        let cli = Cli::try_parse_from(["mc-summon", "--config", file.path().to_str().unwrap(), "item"])
            .unwrap();
        let err = load_options(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let cli =
            Cli::try_parse_from(["mc-summon", "--config", "/nonexistent/mc-summon.toml", "item"])
                .unwrap();
        let err = load_options(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
