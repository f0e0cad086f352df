//! Recorder installation and Prometheus text rendering.

use {anyhow::Result, tracing::info};

/// Handle to the installed recorder.
#[derive(Clone)]
pub struct MetricsHandle {
    #[cfg(feature = "prometheus")]
    prometheus_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl MetricsHandle {
    /// Render everything recorded so far in Prometheus text format.
    ///
    /// Empty when the `prometheus` feature is off.
    #[must_use]
    pub fn render(&self) -> String {
        #[cfg(feature = "prometheus")]
        {
            self.prometheus_handle.render()
        }
        #[cfg(not(feature = "prometheus"))]
        {
            String::new()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetricsRecorderConfig {
    /// Install a global recorder. When false, events keep going to the no-op
    /// default and the handle renders nothing.
    pub enabled: bool,
    /// Labels attached to every metric.
    pub global_labels: Vec<(String, String)>,
}

/// Set up metrics collection for the process. Call at most once.
pub fn init_metrics(config: MetricsRecorderConfig) -> Result<MetricsHandle> {
    if !config.enabled {
        info!("metrics collection is disabled");
        return Ok(MetricsHandle {
            #[cfg(feature = "prometheus")]
            prometheus_handle: metrics_exporter_prometheus::PrometheusBuilder::new()
                .build_recorder()
                .handle(),
        });
    }

    #[cfg(feature = "prometheus")]
    {
        let mut builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        for (key, value) in config.global_labels {
            builder = builder.add_global_label(key, value);
        }
        let prometheus_handle = builder.install_recorder()?;
        info!("prometheus metrics recorder installed");
        Ok(MetricsHandle { prometheus_handle })
    }

    #[cfg(not(feature = "prometheus"))]
    {
        info!("metrics requested but the prometheus feature is not compiled in");
        Ok(MetricsHandle {})
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_renders_nothing_recorded() {
        let handle = init_metrics(MetricsRecorderConfig::default()).unwrap();
        assert!(!handle.render().contains(crate::catalog::LOADS_TOTAL));
    }

    #[cfg(feature = "prometheus")]
    #[test]
    fn enabled_renders_recorded_counters() {
        let handle = init_metrics(MetricsRecorderConfig {
            enabled: true,
            global_labels: vec![("instance".into(), "test".into())],
        })
        .unwrap();

        metrics::counter!(crate::provision::FOLDERS_CREATED_TOTAL).increment(2);

        let text = handle.render();
        assert!(text.contains("projector_folders_created_total{instance=\"test\"} 2"), "{text}");
    }
}
