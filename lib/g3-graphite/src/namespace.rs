/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::{self, Write};

use crate::config::GraphitePrefixConfig;

const DEFAULT_GLOBAL_PREFIX: &str = "stats";
const DEFAULT_COUNTER_PREFIX: &str = "counters";
const DEFAULT_TIMER_PREFIX: &str = "timers";
const DEFAULT_TIMER_LF_PREFIX: &str = "timers_lf";
const DEFAULT_GAUGE_PREFIX: &str = "gauges";
const DEFAULT_SET_PREFIX: &str = "sets";

/// An ordered list of non-empty name nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricNamespace {
    nodes: Vec<String>,
}

impl MetricNamespace {
    fn push_nonempty(&mut self, node: &str) {
        if !node.is_empty() {
            self.nodes.push(node.to_string());
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Display the namespace with `name` appended as the last node.
    pub fn display<'a>(&'a self, name: &'a str) -> MetricNamespaceDisplay<'a> {
        MetricNamespaceDisplay {
            nodes: &self.nodes,
            name,
        }
    }
}

pub struct MetricNamespaceDisplay<'a> {
    nodes: &'a [String],
    name: &'a str,
}

impl fmt::Display for MetricNamespaceDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.nodes {
            f.write_str(n)?;
            f.write_char('.')?;
        }
        f.write_str(self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphiteNamespaces {
    pub global: MetricNamespace,
    pub counter: MetricNamespace,
    pub timer: MetricNamespace,
    pub timer_lf: MetricNamespace,
    pub gauge: MetricNamespace,
    pub set: MetricNamespace,
}

impl GraphiteNamespaces {
    pub fn build(config: &GraphitePrefixConfig) -> Self {
        let global = config.global.as_deref().unwrap_or(DEFAULT_GLOBAL_PREFIX);

        let mut base = MetricNamespace::default();
        base.push_nonempty(global);

        let with_category = |prefix: &Option<String>, default: &str| {
            let mut ns = base.clone();
            ns.push_nonempty(prefix.as_deref().unwrap_or(default));
            ns
        };

        GraphiteNamespaces {
            counter: with_category(&config.counter, DEFAULT_COUNTER_PREFIX),
            timer: with_category(&config.timer, DEFAULT_TIMER_PREFIX),
            timer_lf: with_category(&config.timer_lf, DEFAULT_TIMER_LF_PREFIX),
            gauge: with_category(&config.gauge, DEFAULT_GAUGE_PREFIX),
            set: with_category(&config.set, DEFAULT_SET_PREFIX),
            global: base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ns: &MetricNamespace) -> Vec<&str> {
        ns.nodes().iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn defaults() {
        let ns = GraphiteNamespaces::build(&GraphitePrefixConfig::default());
        assert_eq!(nodes(&ns.global), ["stats"]);
        assert_eq!(nodes(&ns.counter), ["stats", "counters"]);
        assert_eq!(nodes(&ns.timer), ["stats", "timers"]);
        assert_eq!(nodes(&ns.timer_lf), ["stats", "timers_lf"]);
        assert_eq!(nodes(&ns.gauge), ["stats", "gauges"]);
        assert_eq!(nodes(&ns.set), ["stats", "sets"]);
    }

    #[test]
    fn explicit_empty() {
        let config = GraphitePrefixConfig {
            counter: Some(String::new()),
            gauge: Some("g".to_string()),
            ..Default::default()
        };
        let ns = GraphiteNamespaces::build(&config);
        assert_eq!(nodes(&ns.counter), ["stats"]);
        assert_eq!(nodes(&ns.gauge), ["stats", "g"]);

        let config = GraphitePrefixConfig {
            global: Some(String::new()),
            set: Some(String::new()),
            ..Default::default()
        };
        let ns = GraphiteNamespaces::build(&config);
        assert!(ns.global.is_empty());
        assert!(ns.set.is_empty());
        assert_eq!(nodes(&ns.counter), ["counters"]);
        assert_eq!(ns.set.display("u").to_string(), "u");
    }

    #[test]
    fn idempotent() {
        let config = GraphitePrefixConfig {
            global: Some("app".to_string()),
            timer: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            GraphiteNamespaces::build(&config),
            GraphiteNamespaces::build(&config)
        );
    }

    #[test]
    fn display() {
        let ns = GraphiteNamespaces::build(&GraphitePrefixConfig::default());
        assert_eq!(ns.counter.display("foo").to_string(), "stats.counters.foo");
        assert_eq!(ns.global.display("a.b").to_string(), "stats.a.b");
    }
}
