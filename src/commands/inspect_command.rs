//! Cursor inspection command
//!
//! Reports every frame, the selected frame, the scale factors in effect
//! and the size at each stage of the pipeline.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{input_files, resolve_settings};
use crate::cursor::errors::CursorResult;
use crate::cursor::extractor::scan_extent;
use crate::cursor::pipeline::{self, CursorSource};
use crate::cursor::scaling::scale_chain;
use crate::io::ImageFileSource;
use crate::settings::SystemSettings;
use crate::utils::logger::Logger;

/// Command for inspecting how a cursor size is derived
pub struct InspectCommand<'a> {
    input_files: Vec<String>,
    settings: SystemSettings,
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CursorResult<Self> {
        Ok(InspectCommand {
            input_files: input_files(args)?,
            settings: resolve_settings(args)?,
            logger,
        })
    }

    /// Build the inspection report
    pub fn report(&self) -> String {
        let source = ImageFileSource::new(self.input_files.iter());
        let frames = source.frames();
        let measurement = pipeline::measure(&frames, &self.settings);

        let mut result = String::from("Cursor Inspection Results:\n");
        result.push_str(&format!("  Frames decoded: {} of {}\n", frames.len(), self.input_files.len()));

        for (i, frame) in frames.iter().enumerate() {
            let glyph = match scan_extent(frame, self.settings.signal) {
                Some(extent) => format!(
                    "glyph {}x{} (rows {}..={})",
                    extent.width(),
                    extent.height(),
                    extent.first_row,
                    extent.last_row
                ),
                None => "no visible pixels".to_string(),
            };
            result.push_str(&format!("  Frame #{}: {}x{}, {}\n", i, frame.width(), frame.height(), glyph));
        }

        match measurement.frame {
            Some(frame) => result.push_str(&format!(
                "  Selected frame: #{} ({})\n",
                frame.index(),
                if frame.is_exact() { "exact size match" } else { "smallest" }
            )),
            None => result.push_str("  Selected frame: none\n"),
        }

        result.push_str(&format!("  Signal: {}\n", self.settings.signal.name()));
        result.push_str(&format!(
            "  Display DPI: {} (scale {})\n",
            self.settings.display_dpi,
            self.settings.dpi_scale()
        ));
        result.push_str(&format!("  Cursor scale: {}\n", self.settings.cursor_scale));
        if let Some(base) = self.settings.cursor_base_size {
            result.push_str(&format!("  Cursor base size: {}\n", base));
        }

        let chain = scale_chain(&self.settings);
        let names: Vec<&str> = chain.iter().map(|t| t.name()).collect();
        result.push_str(&format!("  Scaling chain: {}\n", names.join(" -> ")));

        result.push_str(&format!(
            "  Raw size: {}{}\n",
            measurement.raw,
            if measurement.used_default { " (default)" } else { "" }
        ));
        result.push_str(&format!("  Final size: {}\n", measurement.size));

        result
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> CursorResult<()> {
        info!("Inspecting cursor from {}", self.input_files.join(", "));

        let report = self.report();
        self.logger.log(&report)?;
        print!("{}", report);

        Ok(())
    }
}
