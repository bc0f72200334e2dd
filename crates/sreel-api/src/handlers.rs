//! HTTP handlers for scenes, generation triggers, and credential state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use sreel_models::{AspectRatio, Scene, SceneId};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for the generate trigger.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateSceneRequest {
    /// Output aspect ratio; widescreen when omitted
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

/// Response for an accepted generate trigger.
#[derive(Debug, Serialize)]
pub struct GenerateAcceptedResponse {
    pub scene_id: SceneId,
    pub status: String,
}

/// Request body for storing a credential.
#[derive(Debug, Deserialize)]
pub struct SetCredentialRequest {
    pub key: String,
}

/// Credential presence, never the key itself.
#[derive(Debug, Serialize)]
pub struct CredentialStatusResponse {
    pub configured: bool,
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/scenes
///
/// List all scenes with their current generation status.
pub async fn list_scenes(State(state): State<AppState>) -> Json<Vec<Scene>> {
    Json(state.controller.scenes().await)
}

/// GET /api/scenes/:scene_id
///
/// Returns:
/// - 200: Scene with status and outcome fields
/// - 404: Unknown scene id
pub async fn get_scene(
    State(state): State<AppState>,
    Path(scene_id): Path<u32>,
) -> ApiResult<Json<Scene>> {
    let scene = state.controller.scene(SceneId(scene_id)).await?;
    Ok(Json(scene))
}

/// POST /api/scenes/:scene_id/generate
///
/// Start a generation attempt for one scene.
///
/// Returns:
/// - 202: Attempt accepted; the scene is now `generating`
/// - 409: An attempt is already in flight for this scene
/// - 404: Unknown scene id
pub async fn generate_scene(
    State(state): State<AppState>,
    Path(scene_id): Path<u32>,
    body: Option<Json<GenerateSceneRequest>>,
) -> ApiResult<(StatusCode, Json<GenerateAcceptedResponse>)> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let id = SceneId(scene_id);

    info!(scene_id = %id, aspect_ratio = %request.aspect_ratio, "generate_scene requested");
    state
        .controller
        .start_generation(id, request.aspect_ratio)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(GenerateAcceptedResponse {
            scene_id: id,
            status: "generating".to_string(),
        }),
    ))
}

/// GET /api/credential
///
/// Whether a credential is configured. The onboarding UI polls this to
/// decide whether to show the key selection screen.
pub async fn get_credential_status(
    State(state): State<AppState>,
) -> Json<CredentialStatusResponse> {
    Json(CredentialStatusResponse {
        configured: state.credentials.is_configured().await,
    })
}

/// PUT /api/credential
///
/// Store the API key selected through onboarding.
///
/// Returns:
/// - 200: Key stored
/// - 400: Empty key
pub async fn set_credential(
    State(state): State<AppState>,
    Json(request): Json<SetCredentialRequest>,
) -> ApiResult<Json<CredentialStatusResponse>> {
    if request.key.trim().is_empty() {
        return Err(ApiError::bad_request("API key must not be empty"));
    }

    state.credentials.set(request.key).await;
    info!("Credential stored via onboarding");
    Ok(Json(CredentialStatusResponse { configured: true }))
}
