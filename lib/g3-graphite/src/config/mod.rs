/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use anyhow::anyhow;

mod yaml;

const DEFAULT_GRAPHITE_PORT: u16 = 2003;
const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_STATS_PREFIX: &str = "statsd";

/// Name prefixes for each metric category.
///
/// `None` means the prefix is not set and the default will be used,
/// while an empty string removes that node from the metric name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphitePrefixConfig {
    pub global: Option<String>,
    pub counter: Option<String>,
    pub timer: Option<String>,
    pub timer_lf: Option<String>,
    pub gauge: Option<String>,
    pub set: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphiteBackendConfig {
    pub(crate) debug: bool,
    pub(crate) host: Option<String>,
    pub(crate) port: u16,
    pub(crate) flush_interval: Duration,
    pub(crate) stats_prefix: String,
    pub(crate) prefix: GraphitePrefixConfig,
}

impl Default for GraphiteBackendConfig {
    fn default() -> Self {
        GraphiteBackendConfig {
            debug: false,
            host: None,
            port: DEFAULT_GRAPHITE_PORT,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            stats_prefix: DEFAULT_STATS_PREFIX.to_string(),
            prefix: GraphitePrefixConfig::default(),
        }
    }
}

impl GraphiteBackendConfig {
    pub fn with_host<T: Into<String>>(host: T, port: u16) -> Self {
        let mut config = GraphiteBackendConfig {
            port,
            ..Default::default()
        };
        config.set_host(host.into());
        config
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// An empty host disables the backend.
    pub fn set_host(&mut self, host: String) {
        self.host = if host.is_empty() { None } else { Some(host) };
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    pub fn set_flush_interval(&mut self, interval: Duration) {
        self.flush_interval = interval;
    }

    pub fn set_stats_prefix(&mut self, prefix: String) -> anyhow::Result<()> {
        if prefix.is_empty() {
            return Err(anyhow!("empty stats prefix is not allowed"));
        }
        self.stats_prefix = prefix;
        Ok(())
    }

    pub fn set_prefix(&mut self, prefix: GraphitePrefixConfig) {
        self.prefix = prefix;
    }

    #[inline]
    pub fn debug(&self) -> bool {
        self.debug
    }

    #[inline]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[inline]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The flush interval of the scheduler, not used by the backend itself.
    #[inline]
    pub fn flush_interval(&self) -> Duration {
        self.flush_interval
    }

    #[inline]
    pub fn stats_prefix(&self) -> &str {
        &self.stats_prefix
    }

    #[inline]
    pub fn prefix(&self) -> &GraphitePrefixConfig {
        &self.prefix
    }
}
