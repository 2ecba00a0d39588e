//! Terminal client for a card game server: deals hands on request, draws
//! them on a felt table and charts each side's chance of winning.

pub mod api;
pub mod app;
pub mod chart;
pub mod draw;
pub mod game_state;
pub mod game_view;
pub mod probability_view;
pub mod surface;
#[cfg(test)]
mod test_support;
