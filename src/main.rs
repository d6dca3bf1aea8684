//! vctui - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vctui::config::{MAX_SPLIT_PERCENT, MIN_SPLIT_PERCENT};

/// vctui - browse revisions with mouse and keyboard
#[derive(Parser, Debug)]
#[command(name = "vctui")]
#[command(version)]
#[command(about = "Terminal revision browser built on an immediate-mode display list")]
pub struct Args {
    /// Revision file, entries separated by blank lines (built-in samples if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Initial list pane width in percent
    #[arg(
        long,
        value_parser = clap::value_parser!(u16)
            .range(i64::from(MIN_SPLIT_PERCENT)..=i64::from(MAX_SPLIT_PERCENT))
    )]
    pub split: Option<u16>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = vctui::config::load_config_with_precedence(args.config.clone())?;
        let merged = vctui::config::merge_config(config_file)?;
        let with_env = vctui::config::apply_env_overrides(merged);

        // Flags only override when set
        let mouse_override = if args.no_mouse { Some(false) } else { None };
        vctui::config::apply_cli_overrides(with_env, mouse_override, args.split)
    };

    vctui::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let input_source = vctui::source::detect_input_source(args.file.clone())?;
    let colors = vctui::view::ColorConfig::from_env_and_args(args.no_color);

    vctui::view::run_with_source(input_source, &config, colors)?;

    Ok(())
}
