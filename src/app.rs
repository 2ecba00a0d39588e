//! The event loop.
//!
//! Every network request runs in its own task and reports back over a
//! channel; only the loop touches the views. Requests are never ordered or
//! cancelled, so when two hands are dealt back to back the response that
//! arrives last is the one left on screen.

use crate::api::ApiClient;
use crate::chart::ChartRenderer;
use crate::game_state::{Evaluation, GameState, ProbabilitySnapshot};
use crate::game_view::GameView;
use crate::probability_view::ProbabilityView;
use crate::surface::Surface;
use anyhow::Result;
use std::ops::ControlFlow;
use strum::Display;
use termion::event::Key;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

#[derive(Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Request {
    Start,
    Evaluate,
}

#[derive(Debug)]
pub enum Event {
    Input(Key),
    GameStarted(GameState),
    ProbabilitiesFetched(ProbabilitySnapshot),
    Evaluated(Evaluation),
    Failed { request: Request, error: String },
}

pub struct App<S: Surface, R: ChartRenderer> {
    api: ApiClient,
    game_view: GameView<S>,
    probability_view: ProbabilityView<R>,
    events: UnboundedSender<Event>,
}

impl<S: Surface, R: ChartRenderer> App<S, R> {
    pub fn new(
        api: ApiClient,
        game_view: GameView<S>,
        probability_view: ProbabilityView<R>,
        events: UnboundedSender<Event>,
    ) -> Self {
        Self {
            api,
            game_view,
            probability_view,
            events,
        }
    }

    pub fn game_view(&self) -> &GameView<S> {
        &self.game_view
    }

    pub fn probability_view(&self) -> &ProbabilityView<R> {
        &self.probability_view
    }

    /// Draws the empty table and the initial chart, then handles events
    /// until the user quits or every sender is gone.
    pub async fn run(&mut self, mut events: UnboundedReceiver<Event>) -> Result<()> {
        self.game_view.draw_table()?;
        self.probability_view.render()?;

        while let Some(event) = events.recv().await {
            if self.handle(event)?.is_break() {
                break;
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: Event) -> Result<ControlFlow<()>> {
        match event {
            Event::Input(key) => return Ok(self.handle_key(key)),
            Event::GameStarted(game) => {
                tracing::debug!(?game, "drawing new hand");
                self.game_view.draw_game(&game)?;
                self.refresh_probabilities();
            }
            Event::ProbabilitiesFetched(snapshot) => {
                self.probability_view.apply(snapshot)?;
            }
            Event::Evaluated(Evaluation { winner }) => {
                tracing::info!(%winner, "hand evaluated");
                self.game_view.draw_notice(&format!("Winner: {winner}"))?;
            }
            Event::Failed { request, error } => {
                tracing::error!(%request, %error, "request failed");
                self.game_view
                    .draw_notice(&format!("{request} failed: {error}"))?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn handle_key(&mut self, key: Key) -> ControlFlow<()> {
        match key {
            Key::Char('s') | Key::Char('\n') => self.start_game(),
            Key::Char('e') => self.evaluate(),
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => return ControlFlow::Break(()),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    /// The start button: deal, draw, then refresh the chart.
    fn start_game(&self) {
        let api = self.api.clone();
        self.spawn(async move {
            match api.start_game().await {
                Ok(game) => Some(Event::GameStarted(game)),
                Err(error) => Some(Event::Failed {
                    request: Request::Start,
                    error: format!("{error:#}"),
                }),
            }
        });
    }

    fn evaluate(&self) {
        let api = self.api.clone();
        self.spawn(async move {
            match api.evaluate().await {
                Ok(evaluation) => Some(Event::Evaluated(evaluation)),
                Err(error) => Some(Event::Failed {
                    request: Request::Evaluate,
                    error: format!("{error:#}"),
                }),
            }
        });
    }

    /// Detached: the caller never sees completion, and a failure is only
    /// logged, leaving the chart as it was.
    fn refresh_probabilities(&self) {
        let api = self.api.clone();
        self.spawn(async move {
            match api.get_probabilities().await {
                Ok(snapshot) => Some(Event::ProbabilitiesFetched(snapshot)),
                Err(error) => {
                    tracing::warn!(error = %format!("{error:#}"), "probability refresh failed");
                    None
                }
            }
        });
    }

    fn spawn<F>(&self, request: F)
    where
        F: std::future::Future<Output = Option<Event>> + Send + 'static,
    {
        let events = self.events.clone();
        tokio::spawn(async move {
            if let Some(event) = request.await {
                // The loop may already have exited.
                let _ = events.send(event);
            }
        });
    }
}
