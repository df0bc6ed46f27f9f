//! `hex-tessellator` command-line entry point.

mod logger;

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};

use hex_tessellator::app;
use hex_tessellator::error::AppError;
use hex_tessellator::render::AntiAlias;
use hex_tessellator::report::{DebugReport, banner_text, saved_lines};
use hex_tessellator::settings::Settings;

/// Generate hexagonal grid tessellation images.
#[derive(Parser, Debug)]
#[command(name = "hex-tessellator", version, before_help = banner_text())]
struct Cli {
    /// Image width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Hexagon circumradius in pixels.
    #[arg(long, default_value_t = 64.0)]
    circumradius: f64,

    /// Gap between hexagon edges in pixels.
    #[arg(long, default_value_t = 16.0)]
    margin: f64,

    /// Outline width in pixels (0 for none).
    #[arg(long = "line_width", visible_alias = "line-width", default_value_t = 8)]
    line_width: u32,

    /// Concentric layers (0 to fill the canvas).
    #[arg(long, default_value_t = 0)]
    layers: u32,

    /// Fill color: CSS name, hex code, or R,G,B.
    #[arg(long = "color_fill", visible_alias = "color-fill", default_value = "grey")]
    color_fill: String,

    /// Outline color.
    #[arg(long = "color_line", visible_alias = "color-line", default_value = "black")]
    color_line: String,

    /// Background color.
    #[arg(
        long = "color_background",
        visible_alias = "color-background",
        default_value = "darkgrey"
    )]
    color_background: String,

    /// Anti-aliasing level: off, low, medium, high.
    #[arg(long, default_value_t = AntiAlias::High)]
    antialias: AntiAlias,

    /// Output PNG file (.png appended when missing).
    #[arg(long, default_value = "tessellation.png")]
    file: PathBuf,

    /// Drop hexagons that would cross the canvas edge.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    cull: bool,

    /// Print a diagnostic report after rendering.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    debug: bool,

    /// Write the resolved settings to a JSON file.
    #[arg(long = "export_settings", visible_alias = "export-settings")]
    export_settings: Option<PathBuf>,

    /// Load settings from a JSON file; explicit flags still win.
    #[arg(long = "import_settings", visible_alias = "import-settings")]
    import_settings: Option<PathBuf>,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            width: cli.width,
            height: cli.height,
            circumradius: cli.circumradius,
            margin: cli.margin,
            line_width: cli.line_width,
            layers: cli.layers,
            color_fill: cli.color_fill.clone(),
            color_line: cli.color_line.clone(),
            color_background: cli.color_background.clone(),
            antialias: cli.antialias,
            file: cli.file.clone(),
            cull: cli.cull,
            debug: cli.debug,
        }
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(format!("boolean value expected, got '{value}'")),
    }
}

/// Argument ids the user typed, as opposed to clap defaults.
fn explicit_keys(matches: &ArgMatches) -> HashSet<String> {
    let command = Cli::command();
    command
        .get_arguments()
        .map(|arg| arg.get_id().as_str())
        .filter(|id| matches.value_source(id) == Some(ValueSource::CommandLine))
        .map(String::from)
        .collect()
}

fn run(matches: &ArgMatches) -> Result<(), AppError> {
    let cli = match Cli::from_arg_matches(matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let mut settings = Settings::from(&cli);
    if let Some(path) = &cli.import_settings {
        let imported = Settings::import(path)?;
        settings = settings.merge(imported, &explicit_keys(matches));
    }

    logger::init(logger::default_level(settings.debug))?;

    let summary = app::run(&settings, cli.export_settings.as_deref())?;

    println!("{}", banner_text());
    for line in saved_lines(&summary) {
        println!("{line}");
    }
    if settings.debug {
        println!(
            "{}",
            DebugReport {
                settings: &settings,
                summary: &summary,
            }
        );
    }
    println!();
    Ok(())
}

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
