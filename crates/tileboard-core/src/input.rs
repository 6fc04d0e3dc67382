//! Pointer input primitives and the pointer-capture resource.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Global pointer capture, held only while a drag is in flight.
///
/// The shell routes move/release events to the engine only while capture is
/// held, so handlers never leak across unrelated tiles.
pub trait PointerCapture: Send + Sync {
    /// Start routing global pointer events to the active drag.
    fn acquire(&self);
    /// Stop routing global pointer events.
    fn release(&self);
}

/// Scoped hold on a [`PointerCapture`].
///
/// Releases the capture when dropped, on every exit path out of a drag,
/// including cancellation.
pub struct CaptureGuard {
    capture: Arc<dyn PointerCapture>,
}

impl CaptureGuard {
    /// Acquire the capture and hold it until the guard is dropped.
    pub fn acquire(capture: Arc<dyn PointerCapture>) -> Self {
        capture.acquire();
        Self { capture }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.capture.release();
    }
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard").finish_non_exhaustive()
    }
}

/// Capture implementation that does nothing, for headless use and tests.
#[derive(Debug, Default)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn acquire(&self) {}
    fn release(&self) {}
}
