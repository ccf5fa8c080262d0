//! Mock sensor implementations for testing and development

use crate::core::{GeoCoordinate, HeadingSample};
use crate::sensors::geolocation::{FixOptions, GeoFix, GeolocationError, GeolocationProvider, GeoResult};
use crate::sensors::orientation::{OrientationChannel, OrientationSource};
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Mock geolocation provider driven by a scripted outcome queue
pub struct MockGeolocationProvider {
    outcomes: VecDeque<GeoResult<GeoFix>>,
    pending: bool,
    requests_made: u32,
    jitter_deg: Option<f64>,
}

impl MockGeolocationProvider {
    pub fn new() -> Self {
        Self {
            outcomes: VecDeque::new(),
            pending: false,
            requests_made: 0,
            jitter_deg: None,
        }
    }

    /// Queue a successful fix for a future request
    pub fn push_fix(&mut self, fix: GeoFix) {
        self.outcomes.push_back(Ok(fix));
    }

    /// Queue a failure for a future request
    pub fn push_error(&mut self, error: GeolocationError) {
        self.outcomes.push_back(Err(error));
    }

    /// Add uniform coordinate jitter to delivered fixes (degrees).
    /// Disabled by default so scripted tests stay deterministic.
    pub fn with_jitter(mut self, jitter_deg: f64) -> Self {
        self.jitter_deg = Some(jitter_deg);
        self
    }

    /// Number of requests issued so far
    pub fn requests_made(&self) -> u32 {
        self.requests_made
    }

    /// Whether a request is waiting for an outcome
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn apply_jitter(&self, mut fix: GeoFix) -> GeoFix {
        if let Some(jitter) = self.jitter_deg {
            use rand::Rng;
            let mut rng = rand::thread_rng();
            fix.coordinate = GeoCoordinate::new(
                fix.coordinate.latitude_deg + rng.gen_range(-jitter..=jitter),
                fix.coordinate.longitude_deg + rng.gen_range(-jitter..=jitter),
            );
        }
        fix
    }
}

impl Default for MockGeolocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GeolocationProvider for MockGeolocationProvider {
    fn request_position(&mut self, _options: &FixOptions) -> GeoResult<()> {
        self.pending = true;
        self.requests_made += 1;
        Ok(())
    }

    fn poll_fix(&mut self) -> GeoResult<Option<GeoFix>> {
        if !self.pending {
            return Ok(None);
        }
        match self.outcomes.pop_front() {
            Some(Ok(fix)) => {
                self.pending = false;
                Ok(Some(self.apply_jitter(fix)))
            }
            Some(Err(error)) => {
                self.pending = false;
                Err(error)
            }
            // Script exhausted: request stays pending, like a slow fix
            None => Ok(None),
        }
    }

    fn cancel(&mut self) {
        self.pending = false;
    }
}

/// Mock orientation source driven by a scripted sample queue.
///
/// The active flag is shared through [`MockOrientationSource::active_handle`]
/// so tests can observe deactivation after the calibrator has consumed the
/// boxed source.
pub struct MockOrientationSource {
    channel: OrientationChannel,
    samples: VecDeque<HeadingSample>,
    active: Rc<Cell<bool>>,
    noise_deg: Option<f64>,
}

impl MockOrientationSource {
    pub fn new(channel: OrientationChannel) -> Self {
        Self {
            channel,
            samples: VecDeque::new(),
            active: Rc::new(Cell::new(true)),
            noise_deg: None,
        }
    }

    /// Queue a raw sample for delivery
    pub fn push_sample(&mut self, sample: HeadingSample) {
        self.samples.push_back(sample);
    }

    /// Add uniform compass noise to delivered samples (degrees).
    /// Disabled by default so scripted tests stay deterministic.
    pub fn with_noise(mut self, noise_deg: f64) -> Self {
        self.noise_deg = Some(noise_deg);
        self
    }

    /// Shared view of the active flag, usable after the source is boxed
    pub fn active_handle(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.active)
    }

    pub fn queued_sample_count(&self) -> usize {
        self.samples.len()
    }

    fn apply_noise(&self, mut sample: HeadingSample) -> HeadingSample {
        if let Some(noise) = self.noise_deg {
            use rand::Rng;
            let mut rng = rand::thread_rng();
            if let Some(heading) = sample.compass_heading {
                sample.compass_heading = Some(heading + rng.gen_range(-noise..=noise));
            }
            if let Some(alpha) = sample.alpha {
                sample.alpha = Some(alpha + rng.gen_range(-noise..=noise));
            }
        }
        sample
    }
}

impl OrientationSource for MockOrientationSource {
    fn poll_sample(&mut self) -> Option<HeadingSample> {
        if !self.active.get() {
            return None;
        }
        self.samples.pop_front().map(|sample| self.apply_noise(sample))
    }

    fn channel(&self) -> OrientationChannel {
        self.channel
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn deactivate(&mut self) {
        self.active.set(false);
    }
}
