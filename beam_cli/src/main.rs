//! # Beamcalc CLI Application
//!
//! Terminal front end for the simply supported beam calculator. Collects the
//! beam and load either from prompts or from a JSON request file, prints a
//! summary of reactions and maximum moment, and can plot the shear and moment
//! diagrams or emit the full reply as JSON.

mod args;
mod plot;
mod report;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use beam_core::calculations::{compute_response_with_settings, LoadType};
use beam_core::{AnalysisSettings, BeamReply, BeamRequest};
use chrono::Local;
use log::info;

use args::{CliOptions, USAGE};
use report::render_summary;

/// Defaults offered at the prompts
const DEFAULT_LENGTH_M: f64 = 5.0;
const DEFAULT_LOAD_KN: f64 = 10.0;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };
    if options.help {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let settings = match &options.settings {
        Some(path) => load_settings(path)?,
        None => AnalysisSettings::default(),
    };
    let request = match &options.request {
        Some(path) => load_request(path)?,
        None => prompt_request(),
    };
    info!("request: {request:?}, settings: {settings:?}");

    let (beam, load) = request.specs();
    let response = match compute_response_with_settings(&beam, &load, &settings) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    println!();
    println!("Calculated {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    print!("{}", render_summary(&response));

    if options.json {
        println!();
        println!("{}", serde_json::to_string_pretty(&BeamReply::from(&response))?);
    }
    if options.plot {
        plot::show(&response).context("failed to draw diagrams")?;
    }

    Ok(ExitCode::SUCCESS)
}

fn load_settings(path: &Path) -> Result<AnalysisSettings> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    AnalysisSettings::from_json(&json)
        .with_context(|| format!("invalid settings in '{}'", path.display()))
}

fn load_request(path: &Path) -> Result<BeamRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read request file '{}'", path.display()))?;
    BeamRequest::from_json(&json)
        .with_context(|| format!("invalid request in '{}'", path.display()))
}

fn prompt_request() -> BeamRequest {
    println!("Beam Load Calculator - Simply Supported Beam");
    println!("============================================");
    println!();
    for (i, load_type) in LoadType::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, load_type.display_name());
    }
    let load_type = parse_load_type(&prompt_line("Select load type [1]: "));

    let length = parse_number(
        &prompt_line(&format!("Enter beam length (m) [{DEFAULT_LENGTH_M}]: ")),
        DEFAULT_LENGTH_M,
    );
    let load_prompt = match load_type {
        LoadType::UniformDistributed => "Enter total distributed load (kN)",
        _ => "Enter point load (kN)",
    };
    let magnitude = parse_number(
        &prompt_line(&format!("{load_prompt} [{DEFAULT_LOAD_KN}]: ")),
        DEFAULT_LOAD_KN,
    );
    let position = load_type.requires_position().then(|| {
        let default = length / 2.0;
        parse_number(
            &prompt_line(&format!("Enter load position from left support (m) [{default}]: ")),
            default,
        )
    });

    BeamRequest {
        load_type,
        length,
        magnitude,
        position,
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input
}

/// Empty input takes the default; anything unparsable becomes NaN so the
/// engine reports it as invalid instead of silently substituting a value.
fn parse_number(input: &str, default: f64) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

fn parse_load_type(input: &str) -> LoadType {
    match input.trim() {
        "2" => LoadType::PointAtPosition,
        "3" => LoadType::UniformDistributed,
        _ => LoadType::CenterPoint,
    }
}
