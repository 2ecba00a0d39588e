//! Values exchanged with the game server.

use serde::Deserialize;
use strum::{Display, EnumIter};

/// Card labels are opaque display strings such as `A♠` or `10♥`.
pub type CardLabel = String;

/// A freshly dealt hand, as returned by `POST /start`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct GameState {
    pub player_cards: Vec<CardLabel>,
    pub dealer_cards: Vec<CardLabel>,
    pub table_cards: Vec<CardLabel>,
}

/// The two sides whose chances are charted, in chart order.
#[derive(EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Player,
    Dealer,
}

/// Win probabilities, as returned by `GET /probabilities`.
///
/// Nothing checks that the two values sum to one.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct ProbabilitySnapshot {
    pub player_win: f64,
    pub dealer_win: f64,
}

impl ProbabilitySnapshot {
    pub fn win(&self, side: Side) -> f64 {
        match side {
            Side::Player => self.player_win,
            Side::Dealer => self.dealer_win,
        }
    }
}

#[derive(Display, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Dealer,
    Tie,
}

/// Showdown result, as returned by `POST /evaluate`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct Evaluation {
    pub winner: Winner,
}
