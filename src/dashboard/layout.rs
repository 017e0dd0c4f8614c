//! Static view definition
//!
//! The page is described once as a tree of [`Component`]s and served as JSON;
//! the browser builds the DOM from it.

use serde::{Deserialize, Serialize};
use crate::config::DashboardConfig;

use super::controls::{ALL_SITES, ControlId, ControlState, OutputId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Div {
        children: Vec<Component>,
    },
    Heading {
        text: String,
        style: HeadingStyle,
    },
    Paragraph {
        text: String,
    },
    Break,
    Dropdown(Dropdown),
    RangeSlider(RangeSlider),
    Graph {
        id: OutputId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: ControlId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Tick marks in ascending order
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Upper bound on generated ticks; a config asking for more gets none
const MAX_MARKS: usize = 1000;

/// Slack for `(max - min) / step` landing just under an integer
const STEP_EPSILON: f64 = 1e-9;

/// Tick marks every `step` from `min` to `max` inclusive
///
/// Each tick is computed as `min + i * step` so fractional steps do not
/// accumulate error. Non-finite input, a non-positive step or an inverted
/// range yields no marks.
fn slider_marks(min: f64, max: f64, step: f64) -> Vec<SliderMark> {
    if !min.is_finite() || !max.is_finite() || !step.is_finite() || step <= 0.0 || min > max {
        return Vec::new();
    }

    let count = ((max - min) / step + STEP_EPSILON).floor();
    if !count.is_finite() || count >= MAX_MARKS as f64 {
        return Vec::new();
    }

    let mut marks: Vec<SliderMark> = Vec::with_capacity(count as usize + 1);
    for i in 0..=(count as usize) {
        let tick = (min + i as f64 * step).min(max);
        // 步长小于浮点精度时相邻刻度会重合
        if marks.last().is_some_and(|m| m.value == tick) {
            continue;
        }
        marks.push(SliderMark {
            value: tick,
            label: mark_label(tick),
        });
    }
    marks
}

fn mark_label(tick: f64) -> String {
    if tick.fract() == 0.0 {
        format!("{:.0}", tick)
    } else {
        // 去掉 0.1 * 3 这类浮点尾数
        format!("{}", (tick * 1e6).round() / 1e6)
    }
}

/// Build the dashboard view tree
///
/// `initial` supplies the starting dropdown and slider values.
pub fn build_layout(config: &DashboardConfig, initial: &ControlState) -> Component {
    let mut options = vec![DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(config.sites.iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }));

    Component::Div {
        children: vec![
            Component::Heading {
                text: config.title.clone(),
                style: HeadingStyle {
                    text_align: "center".to_string(),
                    color: "#503D36".to_string(),
                    font_size: 40,
                },
            },
            Component::Dropdown(Dropdown {
                id: ControlId::SiteDropdown,
                options,
                value: initial.site.to_string(),
                placeholder: "Select a Launch Site".to_string(),
                searchable: true,
            }),
            Component::Break,
            Component::Graph {
                id: OutputId::SuccessPieChart,
            },
            Component::Break,
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider(RangeSlider {
                id: ControlId::PayloadSlider,
                min: config.slider_min,
                max: config.slider_max,
                step: config.slider_step,
                marks: slider_marks(config.slider_min, config.slider_max, config.slider_step),
                value: initial.payload.into(),
            }),
            Component::Graph {
                id: OutputId::SuccessPayloadScatterChart,
            },
        ],
    }
}

impl Component {
    /// Depth-first search for a component matching `pred`
    pub fn find(&self, pred: &impl Fn(&Component) -> bool) -> Option<&Component> {
        if pred(self) {
            return Some(self);
        }
        match self {
            Component::Div { children } => children.iter().find_map(|c| c.find(pred)),
            _ => None,
        }
    }
}
