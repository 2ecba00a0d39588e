//! Bar chart state.

use crate::game_state::Side;
use std::io;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// One dataset over a fixed set of category labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartWidget {
    pub labels: Vec<String>,
    pub dataset: Dataset,
}

impl ChartWidget {
    pub const DATASET_LABEL: &'static str = "Win probability";
    pub const INITIAL_VALUE: f64 = 0.5;

    /// One bar per `Side`, all at `INITIAL_VALUE`.
    pub fn win_probabilities() -> Self {
        let labels: Vec<String> = Side::iter().map(|side| side.to_string()).collect();
        let data = vec![Self::INITIAL_VALUE; labels.len()];
        Self {
            labels,
            dataset: Dataset {
                label: Self::DATASET_LABEL.to_string(),
                data,
            },
        }
    }

    /// Label/value pairs, in label order.
    pub fn bars(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.dataset.data.iter().copied())
    }
}

/// Renders a chart after its data changed.
pub trait ChartRenderer {
    fn render(&mut self, chart: &ChartWidget) -> io::Result<()>;
}
