//! Dashboard
//!
//! - `controls`: control ids and values (site selection, payload range)
//! - `filter`: row selection over the dataset
//! - `figure`: Plotly-compatible chart specifications
//! - `layout`: static view definition
//! - `callbacks`: output callbacks and the registry that dispatches to them

pub mod callbacks;
pub mod controls;
pub mod figure;
pub mod filter;
pub mod layout;

pub use callbacks::{CallbackRegistry, FigureCallback, PieChartCallback, ScatterChartCallback};
pub use controls::{ALL_SITES, ControlId, ControlState, OutputId, PayloadRange, SiteSelection};
pub use figure::{Figure, Trace};
pub use layout::{Component, build_layout};

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::dataset::Dataset;

/// Everything a request handler needs: the immutable dataset, the callbacks,
/// the view tree and the initial control state
pub struct Dashboard {
    dataset: Arc<Dataset>,
    registry: CallbackRegistry,
    layout: Component,
    initial_state: ControlState,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        Self::with_registry(dataset, config, CallbackRegistry::with_defaults())
    }

    pub fn with_registry(
        dataset: Arc<Dataset>,
        config: &DashboardConfig,
        registry: CallbackRegistry,
    ) -> Self {
        let initial_state = ControlState::initial(&dataset, config.slider_min, config.slider_max);
        let layout = build_layout(config, &initial_state);
        Self {
            dataset,
            registry,
            layout,
            initial_state,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &Component {
        &self.layout
    }

    pub fn initial_state(&self) -> &ControlState {
        &self.initial_state
    }

    pub fn render(&self, output: OutputId, state: &ControlState) -> Option<Figure> {
        self.registry.render(&self.dataset, output, state)
    }

    pub fn dispatch(&self, changed: ControlId, state: &ControlState) -> Vec<(OutputId, Figure)> {
        self.registry.dispatch(&self.dataset, changed, state)
    }

    pub fn render_all(&self, state: &ControlState) -> Vec<(OutputId, Figure)> {
        self.registry.render_all(&self.dataset, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    #[test]
    fn test_initial_render_covers_whole_dataset() {
        let dataset = Arc::new(Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 4000.0, Outcome::Success, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "B4"),
        ]));
        let dashboard = Dashboard::new(dataset, &DashboardConfig::default());

        let state = dashboard.initial_state().clone();
        assert_eq!(state.payload.low(), 0.0);
        assert_eq!(state.payload.high(), 9600.0);

        for (_, figure) in dashboard.render_all(&state) {
            assert_eq!(figure.record_count(), 3);
        }
    }
}
