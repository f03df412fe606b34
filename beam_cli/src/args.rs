//! Command-line flags.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

pub const USAGE: &str = "\
Usage: beam_cli [OPTIONS]

Options:
  --request <FILE>   Read the calculation request from a JSON file instead of prompting
  --settings <FILE>  Read analysis settings (resolution, tolerance) from a JSON file
  --json             Print the full reply (samples, reactions, max moment) as JSON
  --plot             Show shear and moment diagrams in the terminal
  -h, --help         Print this help

Set RUST_LOG=debug for calculation logging.";

/// Parsed command-line options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub request: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub json: bool,
    pub plot: bool,
    pub help: bool,
}

impl CliOptions {
    /// Parse options from the arguments following the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--request" => {
                    let path = args.next().ok_or_else(|| anyhow!("--request needs a file path"))?;
                    options.request = Some(PathBuf::from(path));
                }
                "--settings" => {
                    let path = args.next().ok_or_else(|| anyhow!("--settings needs a file path"))?;
                    options.settings = Some(PathBuf::from(path));
                }
                "--json" => options.json = true,
                "--plot" => options.plot = true,
                "-h" | "--help" => options.help = true,
                other => bail!("unknown option '{other}'"),
            }
        }
        Ok(options)
    }
}
