use actix_governor::{
    governor::middleware::NoOpMiddleware, GovernorConfig, GovernorConfigBuilder,
    PeerIpKeyExtractor,
};
use tracing::warn;

use crate::config::{ConfigError, SecurityConfig};

/// Per-peer-IP quota for every route.
///
/// The returned config shares one limiter between clones, so every worker
/// wraps its app with `Governor::new(&config)` against the same buckets.
pub fn global_rate_limiting(
    security_config: &SecurityConfig,
) -> Result<GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>, ConfigError> {
    security_config.validate()?;

    let burst_size = security_config.global_rate_limit_burst_size;
    if burst_size > 1000 {
        warn!(
            burst_size,
            "global_rate_limit_burst_size is unusually high; consider reducing it"
        );
    }

    let replenish_interval_ms = u64::from(60_000 / security_config.global_rate_limit_per_minute);
    GovernorConfigBuilder::default()
        .per_millisecond(replenish_interval_ms)
        .burst_size(burst_size)
        .finish()
        .ok_or_else(|| {
            ConfigError::Security("rate limiter rejected the configured quota".to_string())
        })
}
