//! Render-surface seam
//!
//! Drawing is out of scope for the anchoring core; the session hands each
//! recomposed [`ScenePose`] to an injected surface. `RecordingSurface`
//! captures frames for tests, `ConsoleSurface` narrates them for the demo
//! binary.

use crate::scene::ScenePose;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Sink for recomposed scene poses
pub trait RenderSurface {
    fn present(&mut self, pose: &ScenePose);
}

/// Surface that records every presented frame.
///
/// Frames are shared through [`RecordingSurface::frames_handle`] so tests
/// can observe presentations after the session has consumed the boxed
/// surface.
pub struct RecordingSurface {
    frames: Rc<RefCell<Vec<ScenePose>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            frames: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared view of the recorded frames, usable after the surface is boxed
    pub fn frames_handle(&self) -> Rc<RefCell<Vec<ScenePose>>> {
        Rc::clone(&self.frames)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn last_frame(&self) -> Option<ScenePose> {
        self.frames.borrow().last().cloned()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn present(&mut self, pose: &ScenePose) {
        self.frames.borrow_mut().push(pose.clone());
    }
}

/// Surface that logs frame summaries and prints placements
pub struct ConsoleSurface;

impl RenderSurface for ConsoleSurface {
    fn present(&mut self, pose: &ScenePose) {
        info!(
            yaw_degrees = pose.yaw_degrees,
            placements = pose.placements.len(),
            "scene presented"
        );
        for placement in &pose.placements {
            println!(
                "  {:<12} x={:>8.2} m  y={:>6.2} m  z={:>8.2} m",
                placement.entity_id, placement.offset.x, placement.offset.y, placement.offset.z
            );
        }
    }
}
