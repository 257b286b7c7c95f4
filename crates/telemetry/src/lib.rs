//! telemetry - 可观测性库

use flush_config::TelemetryConfig;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 解析结果缓存命中/未命中计数
pub const LOOKUPS_TOTAL: &str = "flush_attribute_lookups_total";

/// 解析失败计数
pub const RESOLUTION_ERRORS_TOTAL: &str = "flush_attribute_resolution_errors_total";

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// 初始化 tracing
///
/// 已安装全局 subscriber 时返回 false
pub fn init_tracing(log_level: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// 初始化 JSON 格式的 tracing（生产环境）
pub fn init_tracing_json(log_level: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
        .is_ok()
}

/// 按配置初始化 tracing
pub fn init_from_config(config: &TelemetryConfig) -> bool {
    if config.json {
        init_tracing_json(&config.log_level)
    } else {
        init_tracing(&config.log_level)
    }
}

/// 初始化 Prometheus metrics
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    metrics::describe_counter!(LOOKUPS_TOTAL, "Flush attribute lookups by cache outcome");
    metrics::describe_counter!(
        RESOLUTION_ERRORS_TOTAL,
        "Flush attribute resolutions that failed with a configuration error"
    );
    Ok(handle)
}
