/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Flush aggregated statsd metrics to a graphite (carbon) server using the
//! plaintext protocol.

#[macro_use]
mod yaml;

mod config;
pub use config::{GraphiteBackendConfig, GraphitePrefixConfig};

mod value;
pub use value::MetricValue;

mod snapshot;
pub use snapshot::{MetricsSnapshot, TimerSummary};

pub mod namespace;

mod stats;
pub use stats::GraphiteBackendStats;

mod format;
pub use format::{GraphitePlaintextFormatter, RenderedPayload};

pub mod transport;

mod events;
pub use events::{BackendEventHub, BackendEvents, FlushHandler, StatusHandler};

mod backend;
pub use backend::{GraphiteBackend, init};
