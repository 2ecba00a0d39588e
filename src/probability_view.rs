//! Keeps the win probability chart in step with the server.

use crate::api::ApiClient;
use crate::chart::{ChartRenderer, ChartWidget};
use crate::game_state::{ProbabilitySnapshot, Side};
use anyhow::Result;
use std::io;
use strum::IntoEnumIterator;

pub struct ProbabilityView<R: ChartRenderer> {
    chart: ChartWidget,
    renderer: R,
}

impl<R: ChartRenderer> ProbabilityView<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            chart: ChartWidget::win_probabilities(),
            renderer,
        }
    }

    pub fn chart(&self) -> &ChartWidget {
        &self.chart
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self) -> io::Result<()> {
        self.renderer.render(&self.chart)
    }

    /// Replaces the whole dataset with `snapshot` and redraws.
    pub fn apply(&mut self, snapshot: ProbabilitySnapshot) -> io::Result<()> {
        self.chart.dataset.data = Side::iter().map(|side| snapshot.win(side)).collect();
        self.render()
    }

    /// Fetches and applies a fresh snapshot.
    ///
    /// If the fetch fails the chart is left exactly as it was.
    pub async fn update_probabilities(&mut self, api: &ApiClient) -> Result<()> {
        let snapshot = api.get_probabilities().await?;
        self.apply(snapshot)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::recording::RecordingChart;
    use crate::test_support::{unreachable_url, MockServer};

    #[test]
    fn test_apply_replaces_data_and_keeps_labels() {
        let mut view = ProbabilityView::new(RecordingChart::default());
        view.apply(ProbabilitySnapshot {
            player_win: 0.7,
            dealer_win: 0.3,
        })
        .unwrap();

        assert_eq!(view.chart().dataset.data, [0.7, 0.3]);
        assert_eq!(view.chart().labels, ["Player", "Dealer"]);
        assert_eq!(view.renderer().renders.len(), 1);
        assert_eq!(view.renderer().renders[0], *view.chart());
    }

    #[test]
    fn test_apply_does_not_require_a_unit_sum() {
        let mut view = ProbabilityView::new(RecordingChart::default());
        view.apply(ProbabilitySnapshot {
            player_win: 0.6,
            dealer_win: 0.6,
        })
        .unwrap();
        assert_eq!(view.chart().dataset.data, [0.6, 0.6]);
    }

    #[tokio::test]
    async fn test_update_probabilities() {
        let server = MockServer::start().await;
        let api = ApiClient::new(server.url());
        let mut view = ProbabilityView::new(RecordingChart::default());

        view.update_probabilities(&api).await.unwrap();

        assert_eq!(server.hits("/probabilities"), 1);
        assert_eq!(view.chart().dataset.data, [0.7, 0.3]);
        assert_eq!(view.chart().labels, ["Player", "Dealer"]);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_previous_chart() {
        let api = ApiClient::new(unreachable_url().await);
        let mut view = ProbabilityView::new(RecordingChart::default());
        view.apply(ProbabilitySnapshot {
            player_win: 0.1,
            dealer_win: 0.9,
        })
        .unwrap();

        assert!(view.update_probabilities(&api).await.is_err());
        assert_eq!(view.chart().dataset.data, [0.1, 0.9]);
        assert_eq!(view.renderer().renders.len(), 1);
    }
}
