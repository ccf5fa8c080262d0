//! AR session runtime
//!
//! Single-threaded cooperative pump over the injected capabilities. One
//! [`ArSession::pump`] step polls the geolocation provider, drains the
//! orientation sources through the calibrator, and recomposes + presents
//! the scene when the state revision advanced. Events are processed
//! strictly in poll order, one at a time, which makes the calibrator's
//! one-shot transition race-free without locking.

use crate::calibration::OrientationCalibrator;
use crate::scene::compose;
use crate::sensors::{GeolocationError, GeolocationProvider, OrientationSource};
use crate::session::config::SessionConfig;
use crate::session::render::RenderSurface;
use crate::session::types::{PumpOutcome, SessionPhase, SessionResult, SessionStatus};
use crate::store::PointStore;
use crate::tracking::PositionTracker;
use tracing::{debug, info, warn};

/// Explicit session handle and composition root.
///
/// Owns the calibrator and tracker; the geolocation provider and render
/// surface are injected, orientation sources are attached explicitly.
pub struct ArSession {
    config: SessionConfig,
    calibrator: OrientationCalibrator,
    tracker: PositionTracker,
    geolocation: Box<dyn GeolocationProvider>,
    surface: Box<dyn RenderSurface>,
    phase: SessionPhase,
    last_location_error: Option<GeolocationError>,
    revision: u64,
    presented_revision: u64,
    shut_down: bool,
}

impl ArSession {
    /// Build a session from a validated configuration and injected
    /// capabilities
    pub fn new(
        config: SessionConfig,
        geolocation: Box<dyn GeolocationProvider>,
        surface: Box<dyn RenderSurface>,
    ) -> SessionResult<Self> {
        config.validate()?;
        let tracker = PositionTracker::new(config.anchor_policy, config.constellation);
        Ok(Self {
            config,
            calibrator: OrientationCalibrator::new(),
            tracker,
            geolocation,
            surface,
            phase: SessionPhase::Idle,
            last_location_error: None,
            revision: 0,
            presented_revision: 0,
            shut_down: false,
        })
    }

    /// Attach one orientation source (absolute or relative channel)
    pub fn attach_orientation_source(&mut self, source: Box<dyn OrientationSource>) {
        self.calibrator.attach_source(source);
    }

    /// Source the entity list from a points-of-interest store
    pub fn load_points(&mut self, store: &dyn PointStore) -> SessionResult<()> {
        let points = store.list()?;
        info!(points = points.len(), "entity list sourced from point store");
        self.tracker.set_points(&points);
        if self.tracker.is_anchored() {
            self.revision += 1;
        }
        Ok(())
    }

    /// Issue the single-shot position request and enter the
    /// awaiting-location phase
    pub fn start(&mut self) {
        if self.shut_down {
            return;
        }
        self.phase = SessionPhase::AwaitingLocation;
        self.request_location();
    }

    /// Externally triggered retry after a geolocation failure
    pub fn retry_location(&mut self) {
        if self.shut_down {
            return;
        }
        self.request_location();
    }

    fn request_location(&mut self) {
        match self.geolocation.request_position(&self.config.fix_options) {
            Ok(()) => {
                debug!("position request issued");
            }
            Err(error) => {
                warn!(%error, "position request failed");
                self.last_location_error = Some(error);
            }
        }
    }

    /// One cooperative event-pump step
    pub fn pump(&mut self) -> PumpOutcome {
        let mut outcome = PumpOutcome::default();
        if self.shut_down {
            return outcome;
        }

        outcome.fix_accepted = self.poll_geolocation();
        if outcome.fix_accepted {
            self.phase = SessionPhase::Anchored;
            self.last_location_error = None;
            self.revision += 1;
        }

        let was_calibrated = self.calibrator.is_calibrated();
        outcome.samples_consumed = self.calibrator.process();
        if self.calibrator.is_calibrated() && !was_calibrated {
            self.revision += 1;
        }

        outcome.presented = self.present_if_stale();
        outcome
    }

    fn poll_geolocation(&mut self) -> bool {
        match self.geolocation.poll_fix() {
            Ok(Some(fix)) => self.tracker.on_fix(&fix),
            Ok(None) => false,
            Err(error) => {
                // Recoverable: stay awaiting location until an external retry
                warn!(%error, "geolocation failed; awaiting external retry");
                self.last_location_error = Some(error);
                false
            }
        }
    }

    /// Recompose and present only when the revision moved past the last
    /// presented one; no content is placed before the first accepted fix.
    fn present_if_stale(&mut self) -> bool {
        let Some(origin) = self.tracker.origin() else {
            return false;
        };
        if self.revision == self.presented_revision {
            return false;
        }
        let pose = compose(origin, self.tracker.entities(), self.calibrator.heading());
        self.surface.present(&pose);
        self.presented_revision = self.revision;
        true
    }

    /// Snapshot of the current session state
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase,
            calibrated: self.calibrator.is_calibrated(),
            heading_deg: self.calibrator.heading(),
            entity_count: self.tracker.entities().len(),
            fixes_ignored: self.tracker.fixes_ignored(),
            samples_discarded: self.calibrator.samples_discarded(),
            last_location_error: self.last_location_error.clone(),
        }
    }

    /// Calibrated heading, `None` until calibration completes
    pub fn heading(&self) -> Option<f64> {
        self.calibrator.heading()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Tear the session down. Idempotent: detach paths it runs are
    /// themselves idempotent and safe after calibration already removed
    /// listeners.
    pub fn shutdown(&mut self) {
        self.calibrator.detach_sources();
        self.geolocation.cancel();
        self.shut_down = true;
    }
}
