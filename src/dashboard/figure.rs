//! Chart specifications
//!
//! A [`Figure`] serializes to the `{ data, layout }` shape Plotly.js accepts
//! directly, so the page can hand it to `Plotly.react` unchanged.

use serde::{Deserialize, Serialize};

use crate::dataset::{LaunchRecord, Outcome};

pub const PIE_TITLE: &str = "Success vs. Failure Counts";
pub const SCATTER_TITLE: &str = "Payload Mass vs. Success";

const PAYLOAD_AXIS: &str = "Payload Mass (kg)";
const CLASS_AXIS: &str = "class";
const BOOSTER_LEGEND: &str = "Booster Version Category";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

/// One slice per outcome class, `labels[i]` paired with `values[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<u8>,
    pub values: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: String,
    pub legendgroup: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Figure {
    /// Count outcome classes over `records`
    ///
    /// Slices are ordered by class value and only present classes get one,
    /// so an empty subset yields a pie with no slices.
    pub fn pie<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LaunchRecord>,
    {
        let mut failures = 0usize;
        let mut successes = 0usize;
        for record in records {
            match record.outcome {
                Outcome::Failure => failures += 1,
                Outcome::Success => successes += 1,
            }
        }

        let mut labels = Vec::with_capacity(2);
        let mut values = Vec::with_capacity(2);
        for (outcome, count) in [(Outcome::Failure, failures), (Outcome::Success, successes)] {
            if count > 0 {
                labels.push(outcome.as_class());
                values.push(count);
            }
        }

        Self {
            data: vec![Trace::Pie(PieTrace { labels, values })],
            layout: FigureLayout {
                title: Title::new(PIE_TITLE),
                xaxis: None,
                yaxis: None,
                legend: None,
            },
        }
    }

    /// Payload mass against outcome class, one trace per booster category
    ///
    /// Traces appear in order of first appearance of their category.
    pub fn scatter<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LaunchRecord>,
    {
        let mut traces: Vec<ScatterTrace> = Vec::new();
        for record in records {
            let category = &record.booster_version_category;
            let idx = match traces.iter().position(|t| &t.name == category) {
                Some(idx) => idx,
                None => {
                    traces.push(ScatterTrace {
                        name: category.clone(),
                        legendgroup: category.clone(),
                        mode: "markers".to_string(),
                        x: Vec::new(),
                        y: Vec::new(),
                    });
                    traces.len() - 1
                }
            };
            traces[idx].x.push(record.payload_mass_kg);
            traces[idx].y.push(record.outcome.as_class());
        }

        Self {
            data: traces.into_iter().map(Trace::Scatter).collect(),
            layout: FigureLayout {
                title: Title::new(SCATTER_TITLE),
                xaxis: Some(Axis {
                    title: Title::new(PAYLOAD_AXIS),
                }),
                yaxis: Some(Axis {
                    title: Title::new(CLASS_AXIS),
                }),
                legend: Some(Legend {
                    title: Title::new(BOOSTER_LEGEND),
                }),
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Number of records the figure was built from
    pub fn record_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Pie(pie) => pie.values.iter().sum(),
                Trace::Scatter(scatter) => scatter.x.len(),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Failure, "FT"),
            LaunchRecord::new("KSC LC-39A", 3600.0, Outcome::Success, "B4"),
            LaunchRecord::new("KSC LC-39A", 6070.0, Outcome::Success, "FT"),
        ]
    }

    #[test]
    fn test_pie_counts_classes() {
        let figure = Figure::pie(&records());
        match &figure.data[0] {
            Trace::Pie(pie) => {
                assert_eq!(pie.labels, vec![0, 1]);
                assert_eq!(pie.values, vec![1, 3]);
            }
            other => panic!("expected pie, got {:?}", other),
        }
        assert_eq!(figure.title(), PIE_TITLE);
        assert_eq!(figure.record_count(), 4);
    }

    #[test]
    fn test_pie_empty_has_no_slices() {
        let figure = Figure::pie(std::iter::empty::<&LaunchRecord>());
        match &figure.data[0] {
            Trace::Pie(pie) => {
                assert!(pie.labels.is_empty());
                assert!(pie.values.is_empty());
            }
            other => panic!("expected pie, got {:?}", other),
        }
    }

    #[test]
    fn test_pie_single_class() {
        let only_success: Vec<LaunchRecord> = records()
            .into_iter()
            .filter(LaunchRecord::is_success)
            .collect();
        let figure = Figure::pie(&only_success);
        match &figure.data[0] {
            Trace::Pie(pie) => {
                assert_eq!(pie.labels, vec![1]);
                assert_eq!(pie.values, vec![3]);
            }
            other => panic!("expected pie, got {:?}", other),
        }
    }

    #[test]
    fn test_scatter_groups_by_booster_category() {
        let figure = Figure::scatter(&records());
        assert_eq!(figure.data.len(), 2);
        match (&figure.data[0], &figure.data[1]) {
            (Trace::Scatter(ft), Trace::Scatter(b4)) => {
                assert_eq!(ft.name, "FT");
                assert_eq!(ft.x, vec![2490.0, 5300.0, 6070.0]);
                assert_eq!(ft.y, vec![1, 0, 1]);
                assert_eq!(b4.name, "B4");
                assert_eq!(b4.x, vec![3600.0]);
            }
            other => panic!("expected two scatter traces, got {:?}", other),
        }
        assert_eq!(figure.record_count(), 4);
    }

    #[test]
    fn test_scatter_empty_has_no_traces() {
        let figure = Figure::scatter(std::iter::empty::<&LaunchRecord>());
        assert!(figure.data.is_empty());
        assert_eq!(figure.title(), SCATTER_TITLE);
    }

    #[test]
    fn test_plotly_json_shape() {
        let json = serde_json::to_value(Figure::scatter(&records())).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["mode"], "markers");
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");

        let pie = serde_json::to_value(Figure::pie(&records())).unwrap();
        assert_eq!(pie["data"][0]["type"], "pie");
        assert!(pie["layout"].get("xaxis").is_none());
    }
}
