// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared record of the arguments a mock was called with.

use std::sync::{Arc, Mutex, MutexGuard};

/// Arguments of each call, oldest first. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn record(&self, args: &[&str]) {
        self.lock().push(args.iter().map(|a| a.to_string()).collect());
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Argument `index` of the most recent call.
    pub fn last_arg(&self, index: usize) -> Option<String> {
        self.lock().last().and_then(|args| args.get(index).cloned())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Vec<String>>> {
        // a panicking test thread must not hide the calls made before it
        self.calls.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("call log mutex poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_calls() {
        let log = CallLog::new();
        let clone = log.clone();
        clone.record(&["a", "b"]);
        clone.record(&["c"]);
        assert_eq!(log.len(), 2);
        assert_eq!(log.last_arg(0).as_deref(), Some("c"));
        assert_eq!(log.last_arg(1), None);
    }

    #[test]
    fn empty_log_has_no_last_call() {
        let log = CallLog::new();
        assert!(log.is_empty());
        assert_eq!(log.last_arg(0), None);
    }
}
