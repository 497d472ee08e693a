/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use super::{GraphiteBackendConfig, GraphitePrefixConfig};
use crate::yaml;

impl GraphitePrefixConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        let Yaml::Hash(map) = v else {
            return Err(anyhow!(
                "yaml value type for 'graphite prefix config' should be 'map'"
            ));
        };

        let mut config = GraphitePrefixConfig::default();
        yaml::foreach_kv(map, |k, v| {
            let prefix =
                yaml::as_string(v).context(format!("invalid string value for key {k}"))?;
            match yaml::normalize_key(k).as_str() {
                "global_prefix" | "globalprefix" => config.global = Some(prefix),
                "prefix_counter" | "prefixcounter" => config.counter = Some(prefix),
                "prefix_timer" | "prefixtimer" => config.timer = Some(prefix),
                "prefix_timer_lf" | "prefixtimerlf" => config.timer_lf = Some(prefix),
                "prefix_gauge" | "prefixgauge" => config.gauge = Some(prefix),
                "prefix_set" | "prefixset" => config.set = Some(prefix),
                _ => return Err(anyhow!("invalid key {k}")),
            }
            Ok(())
        })?;
        Ok(config)
    }
}

impl GraphiteBackendConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = GraphiteBackendConfig::default();
            yaml::foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'graphite backend config' should be 'map'"
            ))
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match yaml::normalize_key(k).as_str() {
            "debug" => {
                self.debug = yaml::as_bool(v).context(format!("invalid bool value for key {k}"))?;
            }
            "host" | "graphite_host" | "graphitehost" => {
                let host =
                    yaml::as_string(v).context(format!("invalid string value for key {k}"))?;
                self.set_host(host);
            }
            "port" | "graphite_port" | "graphiteport" => {
                self.port = yaml::as_u16(v).context(format!("invalid u16 value for key {k}"))?;
            }
            "flush_interval" | "flushinterval" => {
                self.flush_interval = match v {
                    Yaml::Integer(ms) => u64::try_from(*ms)
                        .map(Duration::from_millis)
                        .map_err(|e| anyhow!("invalid milliseconds value for key {k}: {e}"))?,
                    _ => yaml::as_duration(v)
                        .context(format!("invalid humanize duration value for key {k}"))?,
                };
            }
            "stats_prefix" | "prefix_stats" | "prefixstats" => {
                let prefix =
                    yaml::as_string(v).context(format!("invalid string value for key {k}"))?;
                self.set_stats_prefix(prefix)
                    .context(format!("invalid stats prefix value for key {k}"))?;
            }
            "graphite" | "prefix" => {
                self.prefix = GraphitePrefixConfig::parse_yaml(v)
                    .context(format!("invalid graphite prefix config value for key {k}"))?;
            }
            _ => return Err(anyhow!("invalid key {k}")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_yaml_ok() {
        let yaml = yaml_doc!(
            r#"
                debug: true
                host: "127.0.0.1"
                port: 2103
                flush_interval: 5000
                stats_prefix: "g3statsd"
                graphite:
                  global_prefix: "app"
                  prefix_counter: ""
                  prefix_timer: "t"
            "#
        );
        let config = GraphiteBackendConfig::parse_yaml(&yaml).unwrap();
        assert!(config.debug());
        assert_eq!(config.host(), Some("127.0.0.1"));
        assert_eq!(config.port(), 2103);
        assert_eq!(config.flush_interval(), Duration::from_secs(5));
        assert_eq!(config.stats_prefix(), "g3statsd");
        assert_eq!(config.prefix().global.as_deref(), Some("app"));
        assert_eq!(config.prefix().counter.as_deref(), Some(""));
        assert_eq!(config.prefix().timer.as_deref(), Some("t"));
        assert!(config.prefix().timer_lf.is_none());
        assert!(config.prefix().gauge.is_none());
        assert!(config.prefix().set.is_none());

        let yaml = yaml_doc!(
            r#"
                graphiteHost: "carbon.example.net"
                graphitePort: "2004"
                flushInterval: "30s"
                prefix:
                  globalPrefix: ""
                  prefixTimerLf: "lf"
                  prefixGauge: "g"
                  prefixSet: "s"
            "#
        );
        let config = GraphiteBackendConfig::parse_yaml(&yaml).unwrap();
        assert!(!config.debug());
        assert_eq!(config.host(), Some("carbon.example.net"));
        assert_eq!(config.port(), 2004);
        assert_eq!(config.flush_interval(), Duration::from_secs(30));
        assert_eq!(config.stats_prefix(), "statsd");
        assert_eq!(config.prefix().global.as_deref(), Some(""));
        assert_eq!(config.prefix().timer_lf.as_deref(), Some("lf"));
        assert_eq!(config.prefix().gauge.as_deref(), Some("g"));
        assert_eq!(config.prefix().set.as_deref(), Some("s"));

        let yaml = yaml_doc!(
            r#"
                host: ""
            "#
        );
        let config = GraphiteBackendConfig::parse_yaml(&yaml).unwrap();
        assert!(config.host().is_none());
        assert_eq!(config.port(), 2003);
    }

    #[test]
    fn parse_yaml_err() {
        let yaml = yaml_doc!(
            r#"
                invalid_key: "value"
            "#
        );
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                port: 70000
            "#
        );
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                flush_interval: -1
            "#
        );
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                stats_prefix: ""
            "#
        );
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                graphite: "stats"
            "#
        );
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                graphite:
                  prefix_histogram: "h"
            "#
        );
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                graphite:
                  global_prefix: 1
            "#
        );
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());

        let yaml = Yaml::Array(vec![]);
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());

        let yaml = Yaml::Null;
        assert!(GraphiteBackendConfig::parse_yaml(&yaml).is_err());
    }
}
