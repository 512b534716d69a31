// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Explicit cancellation for the encode/decode pipelines.
//!
//! A [`CancelToken`] is a cheap clonable handle over an atomic flag. The
//! caller keeps one clone and passes another into the pipeline; the pipeline
//! checks it at loop boundaries and bails out with
//! [`StegoError::Cancelled`]. There is no module-global token — each
//! invocation owns the token it was handed, so concurrent operations cannot
//! cancel each other by accident.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::stego::error::StegoError;

/// Clonable cancellation handle, safe to trigger from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. All clones of this token observe it.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Return `Err(StegoError::Cancelled)` if cancellation was requested.
    ///
    /// Called at natural loop boundaries in the pipelines.
    pub fn check(&self) -> Result<(), StegoError> {
        if self.is_cancelled() {
            Err(StegoError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_passes() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn cancel_is_seen_by_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_cancelled());
        assert!(matches!(clone.check(), Err(StegoError::Cancelled)));
    }

    #[test]
    fn tokens_are_independent() {
        let a = CancelToken::new();
        let b = CancelToken::new();
        a.cancel();
        assert!(!b.is_cancelled());
    }

    #[test]
    fn cancel_from_another_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }
}
