//! Pagination utilities for service layer
//!
//! Provides a simple offset/limit `Page` and a helper to clamp inputs.

/// Maximum rows any listing returns regardless of the requested limit.
pub const MAX_LIMIT: u64 = 100;

/// Offset/limit pagination parameters as they arrive from the wire.
#[derive(Clone, Copy, Debug)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

impl Page {
    /// Clamp the limit to `MAX_LIMIT`; skip passes through untouched.
    pub fn normalize(self) -> (u64, u64) {
        (self.skip, self.limit.min(MAX_LIMIT))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: MAX_LIMIT }
    }
}
