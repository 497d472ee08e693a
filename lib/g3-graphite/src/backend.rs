/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use log::{debug, info};

use crate::format::GraphitePlaintextFormatter;
use crate::namespace::GraphiteNamespaces;
use crate::transport::{GraphiteTransport, SendCompletion, TcpTransport};
use crate::{BackendEvents, GraphiteBackendConfig, GraphiteBackendStats, MetricsSnapshot};

pub struct GraphiteBackend {
    config: GraphiteBackendConfig,
    formatter: GraphitePlaintextFormatter,
    stats: Arc<GraphiteBackendStats>,
    transport: Option<Arc<dyn GraphiteTransport>>,
}

impl GraphiteBackend {
    /// Create a backend sending to the configured host over tcp.
    ///
    /// The backend is disabled if no host is set.
    pub fn new(startup_time: i64, config: GraphiteBackendConfig) -> Self {
        let transport = config.host().map(|host| {
            Arc::new(TcpTransport::new(host, config.port())) as Arc<dyn GraphiteTransport>
        });
        GraphiteBackend::build(startup_time, config, transport)
    }

    pub fn with_transport(
        startup_time: i64,
        config: GraphiteBackendConfig,
        transport: Arc<dyn GraphiteTransport>,
    ) -> Self {
        GraphiteBackend::build(startup_time, config, Some(transport))
    }

    fn build(
        startup_time: i64,
        config: GraphiteBackendConfig,
        transport: Option<Arc<dyn GraphiteTransport>>,
    ) -> Self {
        let namespaces = GraphiteNamespaces::build(config.prefix());
        let formatter = GraphitePlaintextFormatter::new(namespaces, config.stats_prefix());
        GraphiteBackend {
            config,
            formatter,
            stats: Arc::new(GraphiteBackendStats::new(startup_time)),
            transport,
        }
    }

    #[inline]
    pub fn config(&self) -> &GraphiteBackendConfig {
        &self.config
    }

    #[inline]
    pub fn namespaces(&self) -> &GraphiteNamespaces {
        self.formatter.namespaces()
    }

    #[inline]
    pub fn stats(&self) -> &Arc<GraphiteBackendStats> {
        &self.stats
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Render the snapshot and start sending it.
    ///
    /// Returns the number of stats in the payload. Delivery errors never
    /// reach the caller, they only show up in the backend stats.
    pub fn flush(&self, timestamp: i64, mut snapshot: MetricsSnapshot) -> usize {
        let rendered = self
            .formatter
            .serialize(timestamp, &mut snapshot, &self.stats);
        self.dispatch(rendered.payload);
        rendered.num_stats
    }

    fn dispatch(&self, payload: String) {
        let Some(transport) = &self.transport else {
            return;
        };
        debug!(
            "graphite backend: sending {} bytes to {}:{}",
            payload.len(),
            self.config.host().unwrap_or_default(),
            self.config.port()
        );
        transport.send(
            payload,
            SendCompletion::new(self.stats.clone(), self.config.debug()),
        );
    }

    pub fn status<F>(&self, write: F)
    where
        F: FnMut(&str, &str, i64),
    {
        self.stats.report_status(write);
    }

    /// Register the flush and status handlers of this backend.
    pub fn register<E>(self: &Arc<Self>, events: &mut E)
    where
        E: BackendEvents + ?Sized,
    {
        let backend = Arc::clone(self);
        events.on_flush(Box::new(move |timestamp: i64, snapshot: MetricsSnapshot| {
            backend.flush(timestamp, snapshot);
        }));
        let backend = Arc::clone(self);
        events.on_status(Box::new(
            move |write: &mut dyn FnMut(&str, &str, i64)| backend.status(write),
        ));
    }
}

/// Set up a graphite backend and hook it into the flush and status events.
pub fn init<E>(startup_time: i64, config: GraphiteBackendConfig, events: &mut E) -> bool
where
    E: BackendEvents + ?Sized,
{
    let backend = Arc::new(GraphiteBackend::new(startup_time, config));
    match backend.config().host() {
        Some(host) => info!(
            "graphite backend: will send stats to {host}:{}",
            backend.config().port()
        ),
        None => info!("graphite backend: no host configured, stats will not be sent"),
    }
    backend.register(events);
    true
}
