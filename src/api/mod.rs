//! HTTP API module for the payroll calculators.
//!
//! This module exposes every calculator over REST: a listing endpoint and
//! one calculation endpoint per calculator slug.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, CalculationResponse, CalculatorInfo, EntryView};
pub use state::AppState;
