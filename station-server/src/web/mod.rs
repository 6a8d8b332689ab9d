//! Web layer for the station ranking server.
//!
//! Exposes one HTTP endpoint per ranking strategy.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
