/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use ahash::AHashSet;
use indexmap::IndexMap;

use crate::MetricValue;

pub type TimerSummary = IndexMap<String, MetricValue>;

/// The aggregated metrics of one flush interval.
///
/// Line order in the rendered payload follows the insertion order of each
/// map. Names are expected to be protocol safe, nothing is escaped.
#[derive(Clone, Debug, Default)]
pub struct MetricsSnapshot {
    pub counters: IndexMap<String, MetricValue>,
    pub gauges: IndexMap<String, MetricValue>,
    pub timers_lf: IndexMap<String, MetricValue>,
    pub timer_data: IndexMap<String, TimerSummary>,
    pub sets: IndexMap<String, AHashSet<String>>,
}

impl MetricsSnapshot {
    pub fn add_counter<T: Into<MetricValue>>(&mut self, name: &str, value: T) {
        self.counters.insert(name.to_string(), value.into());
    }

    pub fn add_gauge<T: Into<MetricValue>>(&mut self, name: &str, value: T) {
        self.gauges.insert(name.to_string(), value.into());
    }

    pub fn add_timer_lf<T: Into<MetricValue>>(&mut self, name: &str, value: T) {
        self.timers_lf.insert(name.to_string(), value.into());
    }

    pub fn add_timer_stat<T: Into<MetricValue>>(&mut self, name: &str, stat: &str, value: T) {
        self.timer_data
            .entry(name.to_string())
            .or_default()
            .insert(stat.to_string(), value.into());
    }

    pub fn add_set_member<T: AsRef<str>>(&mut self, name: &str, member: T) {
        self.sets
            .entry(name.to_string())
            .or_default()
            .insert(member.as_ref().to_string());
    }
}
