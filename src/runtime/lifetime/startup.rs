use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::StaticConfig;
use crate::dashboard::Dashboard;
use crate::dataset::Dataset;

pub struct StartupContext {
    pub dashboard: Arc<Dashboard>,
}

/// 准备服务器启动的上下文
///
/// Loads the dataset (fatal on any error) and builds the dashboard around it.
pub fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let dataset = Dataset::load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset from {}", config.dataset.path))?;

    match dataset.payload_bounds() {
        Some(bounds) => info!(
            "Payload mass range in dataset: {} - {} kg",
            bounds.min, bounds.max
        ),
        None => warn!("Dataset {} contains no records", config.dataset.path),
    }

    // 下拉框之外的站点仍可通过 API 查询
    for site in dataset.sites() {
        if !config.dashboard.sites.iter().any(|s| s == site) {
            warn!("Launch site '{}' is not offered in the dropdown", site);
        }
    }

    let dashboard = Arc::new(Dashboard::new(Arc::new(dataset), &config.dashboard));
    info!(
        "Dashboard ready with {} callbacks in {:?}",
        dashboard.registry().len(),
        start_time.elapsed()
    );

    Ok(StartupContext { dashboard })
}
