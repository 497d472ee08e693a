/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use chrono::Utc;
use log::warn;

use crate::GraphiteBackendStats;

mod error;
pub use error::GraphiteSendError;

mod tcp;
pub use tcp::TcpTransport;

#[cfg(test)]
mod buf;
#[cfg(test)]
pub(crate) use buf::BufTransport;

/// A fire-and-forget delivery channel for rendered payloads.
///
/// Implementations must return without waiting for the delivery, and must
/// finish every send by calling [`SendCompletion::complete`] exactly once,
/// either before returning or later from any thread.
pub trait GraphiteTransport: Send + Sync {
    fn send(&self, payload: String, completion: SendCompletion);
}

/// Routes the outcome of one send into the backend health stats.
pub struct SendCompletion {
    stats: Arc<GraphiteBackendStats>,
    debug: bool,
}

impl SendCompletion {
    pub(crate) fn new(stats: Arc<GraphiteBackendStats>, debug: bool) -> Self {
        SendCompletion { stats, debug }
    }

    pub fn complete(self, result: Result<(), GraphiteSendError>) {
        let now = Utc::now().timestamp();
        match result {
            Ok(_) => self.stats.set_last_flush(now),
            Err(e) => {
                if self.debug {
                    warn!("graphite backend: failed to send stats: {e}");
                }
                self.stats.set_last_exception(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_ok() {
        let stats = Arc::new(GraphiteBackendStats::new(1));
        let before = Utc::now().timestamp();
        SendCompletion::new(stats.clone(), false).complete(Ok(()));
        assert!(stats.last_flush() >= before);
        assert_eq!(stats.last_exception(), 1);
    }

    #[test]
    fn complete_err() {
        let stats = Arc::new(GraphiteBackendStats::new(1));
        let before = Utc::now().timestamp();
        SendCompletion::new(stats.clone(), true).complete(Err(GraphiteSendError::NoRuntime(
            "test".to_string(),
        )));
        assert_eq!(stats.last_flush(), 1);
        assert!(stats.last_exception() >= before);
    }
}
