//! Minimal JSON service: `GET /health` and `POST /echo`.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;

pub use app::build_router;
pub use config::Config;
