/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::atomic::{AtomicI64, Ordering};

pub(crate) const STATUS_NAMESPACE: &str = "graphite";

const KEY_LAST_FLUSH: &str = "last_flush";
const KEY_LAST_EXCEPTION: &str = "last_exception";

/// Delivery health of a graphite backend, in unix seconds.
///
/// Each field is written independently by send completions, so concurrent
/// sends simply leave the value of the last one.
#[derive(Debug)]
pub struct GraphiteBackendStats {
    last_flush: AtomicI64,
    last_exception: AtomicI64,
}

impl GraphiteBackendStats {
    pub fn new(startup_time: i64) -> Self {
        GraphiteBackendStats {
            last_flush: AtomicI64::new(startup_time),
            last_exception: AtomicI64::new(startup_time),
        }
    }

    #[inline]
    pub fn last_flush(&self) -> i64 {
        self.last_flush.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn last_exception(&self) -> i64 {
        self.last_exception.load(Ordering::Relaxed)
    }

    pub(crate) fn set_last_flush(&self, time: i64) {
        self.last_flush.store(time, Ordering::Relaxed);
    }

    pub(crate) fn set_last_exception(&self, time: i64) {
        self.last_exception.store(time, Ordering::Relaxed);
    }

    /// Call `write(namespace, key, value)` once for each health field.
    pub fn report_status<F>(&self, mut write: F)
    where
        F: FnMut(&str, &str, i64),
    {
        write(STATUS_NAMESPACE, KEY_LAST_FLUSH, self.last_flush());
        write(STATUS_NAMESPACE, KEY_LAST_EXCEPTION, self.last_exception());
    }
}
