use std::path::Path;
use log::{info, warn};

use crate::cursor::errors::CursorResult;
use crate::cursor::pipeline::{self, CursorMeasurement, CursorSource};
use crate::cursor::pixel_buffer::PixelBuffer;
use crate::cursor::size::CursorSize;
use crate::io::ImageFileSource;
use crate::settings::SystemSettings;
use crate::utils::logger::Logger;

/// Main interface to the CursorKit library
pub struct CursorKit {
    settings: SystemSettings,
    logger: Logger,
}

impl CursorKit {
    /// Create a new CursorKit instance that measures with `settings`
    pub fn new(settings: SystemSettings) -> Self {
        CursorKit {
            settings,
            logger: Logger::disabled(),
        }
    }

    /// Record every measurement in `log_file`
    ///
    /// # Arguments
    /// * `log_file` - Path of the log file to create
    ///
    /// # Returns
    /// The updated instance or an error if the file cannot be created
    pub fn with_log_file<P: AsRef<Path>>(mut self, log_file: P) -> CursorResult<Self> {
        self.logger = Logger::new(log_file)?;
        Ok(self)
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    /// Effective size of the cursor supplied by `source`
    pub fn cursor_size(&self, source: &dyn CursorSource) -> CursorSize {
        let measurement = pipeline::measure(source, &self.settings);
        self.record("cursor source", &measurement);
        measurement.size
    }

    /// Measure an in-memory pixel buffer
    pub fn measure_buffer(&self, buffer: &PixelBuffer) -> CursorMeasurement {
        let measurement = pipeline::measure_buffer(buffer, &self.settings);
        self.record("pixel buffer", &measurement);
        measurement
    }

    /// Measure a cursor whose frames are stored as image files
    ///
    /// All paths are treated as resolutions of the same cursor. Files
    /// that cannot be decoded are skipped; if none decode, the default
    /// size is measured instead.
    ///
    /// # Arguments
    /// * `paths` - Image files, one per frame
    ///
    /// # Returns
    /// The measurement with its intermediate values
    pub fn measure_files<P: AsRef<Path>>(&self, paths: &[P]) -> CursorMeasurement {
        let source = ImageFileSource::new(paths.iter().map(|p| p.as_ref().to_path_buf()));
        let measurement = pipeline::measure(&source, &self.settings);

        let label = source
            .paths()
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        info!("Measured {}: {}", label, measurement.size);
        self.record(&label, &measurement);

        measurement
    }

    /// Write a measurement to the log file; a failed write never fails the measurement
    fn record(&self, label: &str, measurement: &CursorMeasurement) {
        if let Err(e) = self.logger.log_measurement(label, measurement) {
            warn!("Could not write measurement of {} to log file: {}", label, e);
        }
    }
}

impl Default for CursorKit {
    fn default() -> Self {
        CursorKit::new(SystemSettings::default())
    }
}
