//! Shared data models for the StoryReel backend.
//!
//! This crate provides Serde-serializable types for:
//! - Scenes and their generation status
//! - Output aspect ratios
//! - The built-in narrative script

pub mod aspect_ratio;
pub mod scene;
pub mod script;

// Re-export common types
pub use aspect_ratio::{AspectRatio, AspectRatioParseError};
pub use scene::{Scene, SceneId, SceneStatus};
pub use script::default_script;
