//! Scene definitions and the per-scene generation lifecycle.
//!
//! A [`Scene`] owns its generation status together with the outcome
//! fields (`video_url`, `error`). The three are only ever mutated through
//! the transition helpers so that at most one outcome field is populated
//! at a time and stale outcomes never survive into a new attempt.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a scene, stable for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SceneId(pub u32);

impl SceneId {
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SceneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Generation status of a single scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum SceneStatus {
    /// No generation attempt has been made (or the last outcome was cleared)
    #[default]
    Idle,
    /// A generation job is in flight
    Generating,
    /// The last attempt produced a playable video
    Success,
    /// The last attempt failed
    Error,
}

impl SceneStatus {
    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneStatus::Idle => "idle",
            SceneStatus::Generating => "generating",
            SceneStatus::Success => "success",
            SceneStatus::Error => "error",
        }
    }

    /// Whether a new generation attempt may start from this state.
    ///
    /// Everything but `Generating` accepts a new attempt; `Generating`
    /// means a job is already in flight for this scene.
    pub fn accepts_generation(&self) -> bool {
        !matches!(self, SceneStatus::Generating)
    }
}

impl fmt::Display for SceneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A narrative scene and the state of its video generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    /// Unique scene ID
    pub id: SceneId,
    /// Scene title
    pub title: String,
    /// Where the scene takes place
    pub location: String,
    /// Visual description fed into the generation prompt
    pub visuals: String,
    /// Character dialogue (display only, not part of the prompt)
    pub dialogue: String,
    /// On-screen action fed into the generation prompt
    pub action: String,
    /// Current generation status
    #[serde(default)]
    pub status: SceneStatus,
    /// Playable video URL, set only while status is `success`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Failure description, set only while status is `error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the status last changed
    pub updated_at: DateTime<Utc>,
}

impl Scene {
    /// Create a new idle scene from script content.
    pub fn new(
        id: impl Into<SceneId>,
        title: impl Into<String>,
        location: impl Into<String>,
        visuals: impl Into<String>,
        dialogue: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            visuals: visuals.into(),
            dialogue: dialogue.into(),
            action: action.into(),
            status: SceneStatus::Idle,
            video_url: None,
            error: None,
            updated_at: Utc::now(),
        }
    }

    /// Synthesize the generation prompt from the scene's visual content.
    pub fn prompt(&self) -> String {
        format!(
            "Animated film scene in the style of Doraemon. {}. {}",
            self.visuals, self.action
        )
    }

    /// Enter `generating`, clearing any previous outcome.
    ///
    /// Both outcome fields are dropped before the asynchronous job
    /// resolves so no stale result is observable while waiting.
    pub fn begin_generation(&mut self) {
        self.status = SceneStatus::Generating;
        self.video_url = None;
        self.error = None;
        self.updated_at = Utc::now();
    }

    /// Enter `success` with the playable video URL.
    pub fn complete(&mut self, video_url: impl Into<String>) {
        self.status = SceneStatus::Success;
        self.video_url = Some(video_url.into());
        self.error = None;
        self.updated_at = Utc::now();
    }

    /// Enter `error` with a human-readable failure description.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.status = SceneStatus::Error;
        self.error = Some(error.into());
        self.video_url = None;
        self.updated_at = Utc::now();
    }
}
