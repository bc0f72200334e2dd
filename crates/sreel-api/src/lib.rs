//! Axum HTTP API server and scene generation controller.
//!
//! This crate provides:
//! - [`SceneController`]: per-scene generation lifecycle and status
//! - A thin REST surface over scenes, generation triggers, and
//!   credential onboarding state

pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use controller::{GenerateVideo, SceneController};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
