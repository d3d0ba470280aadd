//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod measure_command;
pub mod inspect_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use measure_command::MeasureCommand;
pub use inspect_command::InspectCommand;
pub use batch_command::BatchCommand;

#[cfg(test)]
mod tests;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::info;

use crate::cursor::errors::{CursorError, CursorResult};
use crate::cursor::pixel_buffer::SignalMode;
use crate::settings::SystemSettings;
use crate::utils::logger::Logger;
use crate::utils::size_utils::{parse_scale, parse_size};

/// Command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("CursorKit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Measure the effective on-screen size of a mouse cursor image")
        .arg(
            Arg::new("input")
                .help("Cursor image file(s); several files are frames of one cursor")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Report frames, scale factors and intermediate sizes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("each")
                .short('e')
                .long("each")
                .help("Measure every input file as a separate cursor")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .help("TOML file with display, accessibility and cursor settings")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("dpi")
                .long("dpi")
                .help("Display DPI (96 = 100%)")
                .value_name("DPI")
                .required(false),
        )
        .arg(
            Arg::new("mouse-scale")
                .long("mouse-scale")
                .help("Accessibility cursor size multiplier (1 = unscaled)")
                .value_name("SCALE")
                .required(false),
        )
        .arg(
            Arg::new("default-size")
                .long("default-size")
                .help("Size used when no visible pixels are found (e.g. '12x18')")
                .value_name("WxH")
                .required(false),
        )
        .arg(
            Arg::new("base-size")
                .long("base-size")
                .help("Nominal cursor size used to pick a frame of matching resolution")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("signal")
                .long("signal")
                .help("Pixel visibility signal (alpha, channel-sum)")
                .value_name("MODE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct CursorkitCommandFactory;

impl CursorkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CursorkitCommandFactory
    }
}

impl Default for CursorkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Which command the CLI flags select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Measure,
    Inspect,
    Batch,
}

impl CommandKind {
    /// `--inspect` wins over `--each`; measuring is the default
    pub fn from_args(args: &ArgMatches) -> Self {
        if args.get_flag("inspect") {
            CommandKind::Inspect
        } else if args.get_flag("each") {
            CommandKind::Batch
        } else {
            CommandKind::Measure
        }
    }
}

impl<'a> CommandFactory<'a> for CursorkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> CursorResult<Box<dyn Command + 'a>> {
        match CommandKind::from_args(args) {
            CommandKind::Inspect => Ok(Box::new(InspectCommand::new(args, logger)?)),
            CommandKind::Batch => Ok(Box::new(BatchCommand::new(args, logger)?)),
            CommandKind::Measure => Ok(Box::new(MeasureCommand::new(args, logger)?)),
        }
    }
}

/// Input files given on the command line
pub(crate) fn input_files(args: &ArgMatches) -> CursorResult<Vec<String>> {
    let inputs: Vec<String> = args
        .get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if inputs.is_empty() {
        return Err(CursorError::InvalidArgument("Missing input file".to_string()));
    }
    Ok(inputs)
}

/// Settings from `--settings`, with individual flags taking precedence
pub(crate) fn resolve_settings(args: &ArgMatches) -> CursorResult<SystemSettings> {
    let mut settings = match args.get_one::<String>("settings") {
        Some(path) => {
            info!("Loading settings from {}", path);
            SystemSettings::load_or_default(path)
        }
        None => SystemSettings::default(),
    };

    if let Some(dpi) = args.get_one::<String>("dpi") {
        settings.display_dpi = parse_scale(dpi, "DPI")?;
    }
    if let Some(scale) = args.get_one::<String>("mouse-scale") {
        settings.cursor_scale = parse_scale(scale, "mouse scale")?;
    }
    if let Some(size) = args.get_one::<String>("default-size") {
        settings.default_size = parse_size(size)?;
    }
    if let Some(base) = args.get_one::<String>("base-size") {
        settings.cursor_base_size = Some(parse_scale(base, "base size")?);
    }
    if let Some(signal) = args.get_one::<String>("signal") {
        settings.signal = SignalMode::from_name(signal)
            .ok_or_else(|| CursorError::InvalidArgument(format!("Unknown signal mode: {}", signal)))?;
    }

    info!(
        "Settings: dpi {}, cursor scale {}, default size {}, signal {}",
        settings.display_dpi,
        settings.cursor_scale,
        settings.default_size,
        settings.signal.name()
    );
    Ok(settings)
}
