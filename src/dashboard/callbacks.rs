//! Reactive callbacks
//!
//! Each callback renders one output from the current control state and
//! declares which controls it listens to. The registry dispatches a control
//! change to every subscribed callback, synchronously, once each.

use std::sync::Arc;
use tracing::{debug, trace};

use crate::dataset::Dataset;
use crate::errors::{DashboardError, Result};

use super::controls::{ControlId, ControlState, OutputId};
use super::figure::Figure;
use super::filter::{select_payload_range, select_site};

pub trait FigureCallback: Send + Sync {
    fn output(&self) -> OutputId;

    /// Controls whose changes trigger this callback
    fn inputs(&self) -> &'static [ControlId];

    fn render(&self, dataset: &Dataset, state: &ControlState) -> Figure;
}

/// Success/failure counts for the selected site
pub struct PieChartCallback;

impl FigureCallback for PieChartCallback {
    fn output(&self) -> OutputId {
        OutputId::SuccessPieChart
    }

    fn inputs(&self) -> &'static [ControlId] {
        &[ControlId::SiteDropdown]
    }

    fn render(&self, dataset: &Dataset, state: &ControlState) -> Figure {
        let subset = select_site(dataset, &state.site);
        trace!("Pie chart: site={} rows={}", state.site, subset.len());
        Figure::pie(subset)
    }
}

/// Payload mass vs. outcome for the selected site and payload range
pub struct ScatterChartCallback;

impl FigureCallback for ScatterChartCallback {
    fn output(&self) -> OutputId {
        OutputId::SuccessPayloadScatterChart
    }

    fn inputs(&self) -> &'static [ControlId] {
        &[ControlId::SiteDropdown, ControlId::PayloadSlider]
    }

    fn render(&self, dataset: &Dataset, state: &ControlState) -> Figure {
        let subset = select_payload_range(dataset, &state.site, &state.payload);
        trace!(
            "Scatter chart: site={} range=[{}, {}] rows={}",
            state.site,
            state.payload.low(),
            state.payload.high(),
            subset.len()
        );
        Figure::scatter(subset)
    }
}

#[derive(Default, Clone)]
pub struct CallbackRegistry {
    callbacks: Vec<Arc<dyn FigureCallback>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the pie and scatter callbacks
    pub fn with_defaults() -> Self {
        // 输出 id 各不相同，无需经过 register 的去重检查
        Self {
            callbacks: vec![Arc::new(PieChartCallback), Arc::new(ScatterChartCallback)],
        }
    }

    /// Register a callback; each output may have only one callback
    pub fn register(&mut self, callback: Arc<dyn FigureCallback>) -> Result<()> {
        let output = callback.output();
        if self.callbacks.iter().any(|c| c.output() == output) {
            return Err(DashboardError::validation(format!(
                "Duplicate callback output: {}",
                output.as_ref()
            )));
        }
        debug!(
            "Registered callback {} <- {:?}",
            output.as_ref(),
            callback.inputs()
        );
        self.callbacks.push(callback);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn outputs(&self) -> Vec<OutputId> {
        self.callbacks.iter().map(|c| c.output()).collect()
    }

    /// Outputs that depend on `control`
    pub fn subscribers(&self, control: ControlId) -> Vec<OutputId> {
        self.callbacks
            .iter()
            .filter(|c| c.inputs().contains(&control))
            .map(|c| c.output())
            .collect()
    }

    /// Render a single output; `None` if nothing is registered for it
    pub fn render(
        &self,
        dataset: &Dataset,
        output: OutputId,
        state: &ControlState,
    ) -> Option<Figure> {
        self.callbacks
            .iter()
            .find(|c| c.output() == output)
            .map(|c| c.render(dataset, state))
    }

    /// Re-render every output subscribed to `changed`
    pub fn dispatch(
        &self,
        dataset: &Dataset,
        changed: ControlId,
        state: &ControlState,
    ) -> Vec<(OutputId, Figure)> {
        let rendered: Vec<(OutputId, Figure)> = self
            .callbacks
            .iter()
            .filter(|c| c.inputs().contains(&changed))
            .map(|c| (c.output(), c.render(dataset, state)))
            .collect();
        debug!(
            "Dispatched {} change to {} callback(s)",
            changed.as_ref(),
            rendered.len()
        );
        rendered
    }

    /// Render every output, used for the initial page load
    pub fn render_all(&self, dataset: &Dataset, state: &ControlState) -> Vec<(OutputId, Figure)> {
        self.callbacks
            .iter()
            .map(|c| (c.output(), c.render(dataset, state)))
            .collect()
    }
}
