//! Orientation capability seam

use crate::core::HeadingSample;

/// Which platform orientation stream a source represents.
///
/// Platforms commonly expose both an absolute and a relative stream that
/// fire for the same physical rotation; the calibrator accepts both and
/// guarantees at most one calibration regardless of which fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationChannel {
    Absolute,
    Relative,
}

/// Pollable stream of raw heading samples.
///
/// `deactivate` is the unsubscribe path: after it, `poll_sample` returns
/// `None` forever. It must be idempotent so teardown can re-run it after
/// calibration already removed listeners.
pub trait OrientationSource {
    /// Take the next pending sample, if any
    fn poll_sample(&mut self) -> Option<HeadingSample>;

    /// Which platform stream this source wraps
    fn channel(&self) -> OrientationChannel;

    /// Whether the source is still delivering samples
    fn is_active(&self) -> bool;

    /// Stop delivering samples. Idempotent.
    fn deactivate(&mut self);
}
