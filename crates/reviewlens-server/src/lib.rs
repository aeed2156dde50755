//! # reviewlens-server
//!
//! axum binding for [`AnalyzeService`](reviewlens_pipeline::AnalyzeService):
//! `POST /analyze`, `GET /health` and a static front page at `/`. The
//! pipeline is synchronous and runs on the blocking pool.

pub mod error;
pub mod routes;
pub mod startup;
pub mod state;

pub use routes::router;
pub use startup::build_service;
pub use state::AppState;
