//! AR session composition root
//!
//! Owns the calibrator and tracker, pumps the injected sensor capabilities,
//! and presents recomposed scenes to the injected render surface. Nothing
//! in this module is global: the session handle is constructed explicitly
//! and passed to whoever needs it.

pub mod config;
pub mod render;
pub mod runtime;
pub mod types;

pub use config::{ConfigError, SessionConfig};
pub use render::{ConsoleSurface, RecordingSurface, RenderSurface};
pub use runtime::ArSession;
pub use types::{PumpOutcome, SessionError, SessionPhase, SessionResult, SessionStatus};
