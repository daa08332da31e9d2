use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use spritescan::io::{load_rgba_image, save_png};
use spritescan::{
    ClaimPolicy, MatchConfig, Matcher, SpriteMatch, SpriteScanError, TemplateLibrary,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Highlights sprites in an image and dims everything else"
)]
struct Cli {
    /// Image to scan.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Where to write the annotated image (overrides the config file).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Optional JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Write a JSON report of every match (overrides the config file).
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ClaimPolicyConfig {
    OriginOnly,
    Footprint,
}

impl From<ClaimPolicyConfig> for ClaimPolicy {
    fn from(value: ClaimPolicyConfig) -> Self {
        match value {
            ClaimPolicyConfig::OriginOnly => ClaimPolicy::OriginOnly,
            ClaimPolicyConfig::Footprint => ClaimPolicy::Footprint,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    distinct_tolerance: u32,
    region_tolerance: u32,
    background_tolerance: u32,
    claim_policy: ClaimPolicyConfig,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        let cfg = MatchConfig::default();
        Self {
            distinct_tolerance: cfg.distinct_tolerance,
            region_tolerance: cfg.region_tolerance,
            background_tolerance: cfg.background_tolerance,
            claim_policy: ClaimPolicyConfig::OriginOnly,
        }
    }
}

impl From<MatchConfigJson> for MatchConfig {
    fn from(value: MatchConfigJson) -> Self {
        Self {
            distinct_tolerance: value.distinct_tolerance,
            region_tolerance: value.region_tolerance,
            background_tolerance: value.background_tolerance,
            claim_policy: value.claim_policy.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    output_path: PathBuf,
    report_path: Option<PathBuf>,
    scan: MatchConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("output.png"),
            report_path: None,
            scan: MatchConfigJson::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    x: usize,
    y: usize,
    variant: usize,
    base_index: usize,
    mirrored: bool,
}

impl From<&SpriteMatch> for MatchRecord {
    fn from(value: &SpriteMatch) -> Self {
        Self {
            x: value.x,
            y: value.y,
            variant: value.variant,
            base_index: value.base_index,
            mirrored: value.mirrored,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    width: usize,
    height: usize,
    count: usize,
    matches: Vec<MatchRecord>,
}

fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("cannot read config {}: {err}", path.display()))?;
    let config = serde_json::from_str(&text)
        .map_err(|err| format!("invalid config {}: {err}", path.display()))?;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(
                err.downcast_ref::<SpriteScanError>(),
                Some(SpriteScanError::InputMissing)
            ) {
                let _ = Cli::command().print_help();
                return ExitCode::SUCCESS;
            }
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("spritescan=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    // The catalog is checked before any input is touched.
    let library = TemplateLibrary::standard()?;

    let input = cli.input.ok_or(SpriteScanError::InputMissing)?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let output_path = cli.output.unwrap_or(config.output_path);
    let report_path = cli.report.or(config.report_path);

    let image = load_rgba_image(&input)?;
    println!("Bounds: {} {}", image.width(), image.height());

    let matcher = Matcher::new(library).with_config(config.scan.into());
    let outcome = matcher.scan(image.view())?;
    save_png(&output_path, outcome.canvas().view())?;

    if let Some(path) = report_path {
        let report = Report {
            width: image.width(),
            height: image.height(),
            count: outcome.count(),
            matches: outcome.matches().iter().map(MatchRecord::from).collect(),
        };
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }

    println!("Found {}", outcome.count());
    Ok(())
}
