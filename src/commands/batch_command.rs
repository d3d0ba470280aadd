//! Batch measurement command
//!
//! Measures every input file as an independent cursor.

use clap::ArgMatches;
use log::info;

use crate::api::CursorKit;
use crate::commands::command_traits::Command;
use crate::commands::{input_files, resolve_settings};
use crate::cursor::errors::CursorResult;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for measuring many cursors in one run
pub struct BatchCommand<'a> {
    input_files: Vec<String>,
    kit: CursorKit,
    show_progress: bool,
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CursorResult<Self> {
        Ok(BatchCommand {
            input_files: input_files(args)?,
            kit: CursorKit::new(resolve_settings(args)?),
            show_progress: args.get_flag("verbose"),
            logger,
        })
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> CursorResult<()> {
        let total = self.input_files.len() as u64;
        info!("Measuring {} cursor file(s) independently", total);

        let progress = if self.show_progress {
            ProgressTracker::new(total, "Measuring cursors")
        } else {
            ProgressTracker::hidden(total)
        };

        for file in &self.input_files {
            progress.set_message(file);
            let measurement = self.kit.measure_files(std::slice::from_ref(file));
            self.logger.log_measurement(file, &measurement)?;

            let note = if measurement.used_default { " (default)" } else { "" };
            progress.println(&format!("{}: {}{}", file, measurement.size, note));
            progress.increment(1);
        }

        progress.finish();
        Ok(())
    }
}
