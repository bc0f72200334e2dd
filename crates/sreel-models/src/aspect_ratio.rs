//! Output aspect ratios supported by the video generation model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Frame proportions for generated video.
///
/// The generation model only accepts this fixed set, so it is an enum
/// rather than an arbitrary width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum AspectRatio {
    /// Landscape (16:9)
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    /// Portrait (9:16) for shorts/reels
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// The ratio string as the generation API expects it.
    pub fn as_api_value(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_value())
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" | "widescreen" | "landscape" => Ok(AspectRatio::Widescreen),
            "9:16" | "portrait" => Ok(AspectRatio::Portrait),
            other => Err(AspectRatioParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unsupported aspect ratio: {0}, expected '16:9' or '9:16'")]
pub struct AspectRatioParseError(String);
