/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::{Display, Write};
use std::time::Instant;

use crate::namespace::{GraphiteNamespaces, MetricNamespace};
use crate::{GraphiteBackendStats, MetricValue, MetricsSnapshot};

const BACKEND_NODE: &str = "graphiteBackend";

pub struct RenderedPayload {
    pub payload: String,
    pub num_stats: usize,
}

/// Render metrics snapshots into the graphite plaintext protocol.
pub struct GraphitePlaintextFormatter {
    namespaces: GraphiteNamespaces,
    last_flush_name: String,
    last_exception_name: String,
    num_stats_name: String,
    calculation_time_name: String,
}

struct LineWriter<'a> {
    buf: String,
    ts_suffix: &'a str,
}

impl LineWriter<'_> {
    fn push<T: Display>(&mut self, ns: &MetricNamespace, name: &str, value: T) {
        let _ = write!(self.buf, "{} {value}", ns.display(name));
        self.buf.push_str(self.ts_suffix);
    }

    fn push_with_stat<T: Display>(
        &mut self,
        ns: &MetricNamespace,
        name: &str,
        stat: &str,
        value: T,
    ) {
        let _ = write!(self.buf, "{}.{stat} {value}", ns.display(name));
        self.buf.push_str(self.ts_suffix);
    }
}

impl GraphitePlaintextFormatter {
    pub fn new(namespaces: GraphiteNamespaces, stats_prefix: &str) -> Self {
        let backend_name = |key: &str| format!("{stats_prefix}.{BACKEND_NODE}.{key}");
        GraphitePlaintextFormatter {
            namespaces,
            last_flush_name: backend_name("last_flush"),
            last_exception_name: backend_name("last_exception"),
            num_stats_name: backend_name("num_stats"),
            calculation_time_name: backend_name("calculation_time"),
        }
    }

    pub fn namespaces(&self) -> &GraphiteNamespaces {
        &self.namespaces
    }

    /// Render the whole payload of one flush.
    ///
    /// The health gauges of the backend are added to `snapshot` first, so
    /// they are counted and emitted as ordinary gauges.
    pub fn serialize(
        &self,
        timestamp: i64,
        snapshot: &mut MetricsSnapshot,
        stats: &GraphiteBackendStats,
    ) -> RenderedPayload {
        let start = Instant::now();

        snapshot.gauges.insert(
            self.last_flush_name.clone(),
            MetricValue::Signed(stats.last_flush()),
        );
        snapshot.gauges.insert(
            self.last_exception_name.clone(),
            MetricValue::Signed(stats.last_exception()),
        );

        let mut ts_buf = itoa::Buffer::new();
        let ts_suffix = format!(" {}\n", ts_buf.format(timestamp));
        let mut w = LineWriter {
            buf: String::with_capacity(4096),
            ts_suffix: &ts_suffix,
        };
        let ns = &self.namespaces;
        let mut num_stats = 0usize;

        for (name, value) in &snapshot.counters {
            w.push(&ns.counter, name, value);
            num_stats += 1;
        }

        // one stat for each timer, whatever the number of summary values
        for (name, summary) in &snapshot.timer_data {
            for (stat, value) in summary {
                w.push_with_stat(&ns.timer, name, stat, value);
            }
            num_stats += 1;
        }

        for (name, value) in &snapshot.timers_lf {
            w.push(&ns.timer_lf, name, value);
            num_stats += 1;
        }

        for (name, value) in &snapshot.gauges {
            w.push(&ns.gauge, name, value);
            num_stats += 1;
        }

        for (name, members) in &snapshot.sets {
            w.push_with_stat(&ns.set, name, "count", members.len());
            num_stats += 1;
        }

        w.push(&ns.gauge, &self.num_stats_name, num_stats);
        let calculation_time = start.elapsed().as_millis();
        w.push(&ns.timer_lf, &self.calculation_time_name, calculation_time);

        RenderedPayload {
            payload: w.buf,
            num_stats,
        }
    }
}
