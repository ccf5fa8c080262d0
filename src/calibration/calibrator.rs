//! One-shot orientation calibration state machine
//!
//! Consumes raw heading samples from up to two orientation sources (absolute
//! and relative streams funneled into one machine) and locks the session
//! heading on the first sample that yields a usable compass angle. The
//! calibrated state is terminal: no recalibration exists in this design, a
//! new session is required.

use crate::core::HeadingSample;
use crate::sensors::OrientationSource;
use tracing::{debug, info};

/// Calibration lifecycle. `Calibrated` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationState {
    Uncalibrated,
    Calibrated { heading_deg: f64 },
}

/// Single-shot heading calibrator.
///
/// The terminal-state guard in [`OrientationCalibrator::ingest`] prevents a
/// double calibration even if a source keeps firing; deactivating every
/// attached source on transition stops the sensor cost as well.
pub struct OrientationCalibrator {
    state: CalibrationState,
    sources: Vec<Box<dyn OrientationSource>>,
    samples_discarded: u32,
}

impl OrientationCalibrator {
    pub fn new() -> Self {
        Self {
            state: CalibrationState::Uncalibrated,
            sources: Vec::new(),
            samples_discarded: 0,
        }
    }

    /// Attach an orientation source. Sources attached after calibration are
    /// deactivated immediately instead of being listened to.
    pub fn attach_source(&mut self, mut source: Box<dyn OrientationSource>) {
        if self.is_calibrated() {
            source.deactivate();
            return;
        }
        self.sources.push(source);
    }

    /// Drain attached sources in attachment order, feeding samples through
    /// [`OrientationCalibrator::ingest`]. Once the calibrating transition
    /// fires, every source is deactivated and detached. Returns the number
    /// of samples consumed.
    pub fn process(&mut self) -> usize {
        if self.is_calibrated() {
            self.detach_sources();
            return 0;
        }

        let mut consumed = 0;
        let mut sources = std::mem::take(&mut self.sources);
        'drain: for source in sources.iter_mut() {
            while let Some(sample) = source.poll_sample() {
                consumed += 1;
                if self.ingest(sample) {
                    break 'drain;
                }
            }
        }
        self.sources = sources;

        if self.is_calibrated() {
            self.detach_sources();
        }
        consumed
    }

    /// Feed one sample directly. Returns `true` exactly when this sample
    /// fired the uncalibrated-to-calibrated transition.
    pub fn ingest(&mut self, sample: HeadingSample) -> bool {
        if let CalibrationState::Calibrated { .. } = self.state {
            // Terminal-state guard: a late or duplicate sample changes nothing
            return false;
        }
        match sample.resolve() {
            Some(heading_deg) => {
                self.state = CalibrationState::Calibrated { heading_deg };
                info!(heading_deg, "heading calibrated");
                true
            }
            None => {
                // Expected transient while sensors initialize, not an error
                self.samples_discarded += 1;
                debug!(
                    discarded = self.samples_discarded,
                    "orientation sample carried no usable angle"
                );
                false
            }
        }
    }

    /// Deactivate and drop every attached source. Idempotent: safe to call
    /// again during teardown after calibration already removed listeners.
    pub fn detach_sources(&mut self) {
        for source in self.sources.iter_mut() {
            source.deactivate();
        }
        self.sources.clear();
    }

    /// Calibrated heading in compass degrees, `None` before calibration
    pub fn heading(&self) -> Option<f64> {
        match self.state {
            CalibrationState::Uncalibrated => None,
            CalibrationState::Calibrated { heading_deg } => Some(heading_deg),
        }
    }

    pub fn state(&self) -> CalibrationState {
        self.state
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self.state, CalibrationState::Calibrated { .. })
    }

    /// Count of samples discarded for carrying no usable angle
    pub fn samples_discarded(&self) -> u32 {
        self.samples_discarded
    }

    /// Number of sources currently attached
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl Default for OrientationCalibrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::{MockOrientationSource, OrientationChannel};

    #[test]
    fn test_compass_sample_calibrates_exactly() {
        let mut calibrator = OrientationCalibrator::new();
        assert!(calibrator.ingest(HeadingSample::compass(42.0)));
        assert_eq!(calibrator.heading(), Some(42.0));
        assert_eq!(
            calibrator.state(),
            CalibrationState::Calibrated { heading_deg: 42.0 }
        );
    }

    #[test]
    fn test_first_alpha_sample_wins() {
        let mut calibrator = OrientationCalibrator::new();
        assert!(calibrator.ingest(HeadingSample::rotation(350.0)));
        assert_eq!(calibrator.heading(), Some(10.0));

        // Second sample must not change the calibrated value
        assert!(!calibrator.ingest(HeadingSample::rotation(10.0)));
        assert_eq!(calibrator.heading(), Some(10.0));
    }

    #[test]
    fn test_blank_sample_leaves_uncalibrated() {
        let mut calibrator = OrientationCalibrator::new();
        assert!(!calibrator.ingest(HeadingSample::blank()));
        assert_eq!(calibrator.state(), CalibrationState::Uncalibrated);
        assert_eq!(calibrator.heading(), None);
        assert_eq!(calibrator.samples_discarded(), 1);
    }

    #[test]
    fn test_both_sources_deactivated_on_calibration() {
        let mut absolute = MockOrientationSource::new(OrientationChannel::Absolute);
        let mut relative = MockOrientationSource::new(OrientationChannel::Relative);
        let absolute_active = absolute.active_handle();
        let relative_active = relative.active_handle();

        absolute.push_sample(HeadingSample::blank());
        absolute.push_sample(HeadingSample::compass(90.0));
        relative.push_sample(HeadingSample::rotation(45.0));

        let mut calibrator = OrientationCalibrator::new();
        calibrator.attach_source(Box::new(absolute));
        calibrator.attach_source(Box::new(relative));
        assert_eq!(calibrator.source_count(), 2);

        let consumed = calibrator.process();
        assert_eq!(consumed, 2); // blank + calibrating sample
        assert_eq!(calibrator.heading(), Some(90.0));

        // Both channels unsubscribed, including the one that never fired
        assert!(!absolute_active.get());
        assert!(!relative_active.get());
        assert_eq!(calibrator.source_count(), 0);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let source = MockOrientationSource::new(OrientationChannel::Absolute);
        let active = source.active_handle();

        let mut calibrator = OrientationCalibrator::new();
        calibrator.attach_source(Box::new(source));
        calibrator.detach_sources();
        calibrator.detach_sources();
        assert!(!active.get());
        assert_eq!(calibrator.source_count(), 0);
    }

    #[test]
    fn test_process_after_calibration_consumes_nothing() {
        let mut calibrator = OrientationCalibrator::new();
        calibrator.ingest(HeadingSample::compass(10.0));

        let mut late = MockOrientationSource::new(OrientationChannel::Relative);
        let late_active = late.active_handle();
        late.push_sample(HeadingSample::compass(200.0));
        calibrator.attach_source(Box::new(late));

        // A source attached after calibration is deactivated on the spot
        assert!(!late_active.get());
        assert_eq!(calibrator.process(), 0);
        assert_eq!(calibrator.heading(), Some(10.0));
    }

    #[test]
    fn test_blank_samples_across_channels_then_lock() {
        let mut absolute = MockOrientationSource::new(OrientationChannel::Absolute);
        let mut relative = MockOrientationSource::new(OrientationChannel::Relative);
        absolute.push_sample(HeadingSample::blank());
        relative.push_sample(HeadingSample::blank());

        let mut calibrator = OrientationCalibrator::new();
        calibrator.attach_source(Box::new(absolute));
        calibrator.attach_source(Box::new(relative));

        assert_eq!(calibrator.process(), 2);
        assert!(!calibrator.is_calibrated());
        assert_eq!(calibrator.samples_discarded(), 2);
        // Sources stay attached while uncalibrated
        assert_eq!(calibrator.source_count(), 2);
    }
}
