//! Cursor measurement command
//!
//! Treats every input file as one frame of the same cursor and prints
//! the effective on-screen size.

use clap::ArgMatches;
use log::info;

use crate::api::CursorKit;
use crate::commands::command_traits::Command;
use crate::commands::{input_files, resolve_settings};
use crate::cursor::errors::CursorResult;
use crate::utils::logger::Logger;

/// Command for measuring a single cursor
pub struct MeasureCommand<'a> {
    /// Frame image files
    input_files: Vec<String>,
    /// CursorKit configured from the CLI settings
    kit: CursorKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> MeasureCommand<'a> {
    /// Create a new measure command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new MeasureCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CursorResult<Self> {
        Ok(MeasureCommand {
            input_files: input_files(args)?,
            kit: CursorKit::new(resolve_settings(args)?),
            logger,
        })
    }
}

impl<'a> Command for MeasureCommand<'a> {
    fn execute(&self) -> CursorResult<()> {
        info!("Measuring cursor from {} frame file(s)", self.input_files.len());

        let measurement = self.kit.measure_files(&self.input_files);
        self.logger.log_measurement(&self.input_files.join(", "), &measurement)?;

        println!("{}", measurement.size);
        Ok(())
    }
}
