/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::MetricsSnapshot;

pub type FlushHandler = Box<dyn Fn(i64, MetricsSnapshot) + Send + Sync>;
pub type StatusHandler = Box<dyn Fn(&mut dyn FnMut(&str, &str, i64)) + Send + Sync>;

/// The event source a backend registers its handlers on.
pub trait BackendEvents {
    /// `handler` is called with `(timestamp, snapshot)` on every flush.
    fn on_flush(&mut self, handler: FlushHandler);
    /// `handler` is called with a `(namespace, key, value)` writer.
    fn on_status(&mut self, handler: StatusHandler);
}

#[derive(Default)]
pub struct BackendEventHub {
    flush: Vec<FlushHandler>,
    status: Vec<StatusHandler>,
}

impl BackendEventHub {
    /// Each flush handler gets its own copy of the snapshot.
    pub fn emit_flush(&self, timestamp: i64, snapshot: &MetricsSnapshot) {
        for handler in &self.flush {
            handler(timestamp, snapshot.clone());
        }
    }

    pub fn emit_status(&self, write: &mut dyn FnMut(&str, &str, i64)) {
        for handler in &self.status {
            handler(&mut *write);
        }
    }

    pub fn flush_handlers(&self) -> usize {
        self.flush.len()
    }

    pub fn status_handlers(&self) -> usize {
        self.status.len()
    }
}

impl BackendEvents for BackendEventHub {
    fn on_flush(&mut self, handler: FlushHandler) {
        self.flush.push(handler);
    }

    fn on_status(&mut self, handler: StatusHandler) {
        self.status.push(handler);
    }
}
