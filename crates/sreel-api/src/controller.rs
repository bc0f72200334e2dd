//! Per-scene generation lifecycle controller.
//!
//! [`SceneController`] owns the authoritative status of every scene and
//! serializes lifecycle transitions: a scene enters `generating` under
//! the controller's lock (which doubles as the in-flight guard, so a
//! second request for the same scene is rejected, not raced), the
//! asynchronous job runs outside the lock, and the terminal outcome is
//! applied as one atomic status/outcome update. A failed attempt that
//! indicates a bad credential also invalidates the process-wide
//! credential store.
//!
//! Cross-scene parallelism is bounded by a semaphore so a burst of
//! generate requests cannot swamp the remote service.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{RwLock, Semaphore};
use tracing::{error, info, warn};

use sreel_models::{AspectRatio, Scene, SceneId};
use sreel_veo::{CredentialStore, VeoClient, VeoResult};

use crate::error::{ApiError, ApiResult};

/// Seam between the controller and the video generation backend.
///
/// Lets tests script outcomes without an HTTP round trip.
#[async_trait]
pub trait GenerateVideo: Send + Sync {
    /// Produce a playable video URL for the prompt, driving the remote
    /// job to completion.
    async fn generate(&self, prompt: &str, aspect_ratio: AspectRatio) -> VeoResult<String>;
}

#[async_trait]
impl GenerateVideo for VeoClient {
    async fn generate(&self, prompt: &str, aspect_ratio: AspectRatio) -> VeoResult<String> {
        VeoClient::generate(self, prompt, aspect_ratio).await
    }
}

/// Controller owning scene statuses and generation task lifecycles.
#[derive(Clone)]
pub struct SceneController {
    scenes: Arc<RwLock<Vec<Scene>>>,
    generator: Arc<dyn GenerateVideo>,
    credentials: CredentialStore,
    permits: Arc<Semaphore>,
}

impl SceneController {
    /// Create a controller over the given scenes.
    pub fn new(
        scenes: Vec<Scene>,
        generator: Arc<dyn GenerateVideo>,
        credentials: CredentialStore,
        max_concurrent: usize,
    ) -> Self {
        Self {
            scenes: Arc::new(RwLock::new(scenes)),
            generator,
            credentials,
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    /// Snapshot of all scenes in script order.
    pub async fn scenes(&self) -> Vec<Scene> {
        self.scenes.read().await.clone()
    }

    /// Snapshot of one scene.
    pub async fn scene(&self, id: SceneId) -> ApiResult<Scene> {
        self.scenes
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Scene {} not found", id)))
    }

    /// Kick off a generation attempt for a scene in the background.
    ///
    /// The scene is already `generating` (with previous outcome cleared)
    /// when this returns, so a status read issued right after always
    /// observes the in-flight state. Returns a conflict if an attempt is
    /// already running for this scene.
    pub async fn start_generation(&self, id: SceneId, aspect_ratio: AspectRatio) -> ApiResult<()> {
        let prompt = self.begin(id).await?;
        let controller = self.clone();
        tokio::spawn(async move {
            controller.run_generation(id, prompt, aspect_ratio).await;
        });
        Ok(())
    }

    /// Run one generation attempt to completion and return once the
    /// terminal state has been applied. Used directly where the caller
    /// wants to await the outcome.
    pub async fn generate_scene(&self, id: SceneId, aspect_ratio: AspectRatio) -> ApiResult<()> {
        let prompt = self.begin(id).await?;
        self.run_generation(id, prompt, aspect_ratio).await;
        Ok(())
    }

    /// Transition a scene into `generating` and synthesize its prompt.
    ///
    /// The status flip and the outcome-field clear happen under one
    /// write lock; `generating` itself is the in-flight flag.
    async fn begin(&self, id: SceneId) -> ApiResult<String> {
        let mut scenes = self.scenes.write().await;
        let scene = scenes
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ApiError::not_found(format!("Scene {} not found", id)))?;

        if !scene.status.accepts_generation() {
            return Err(ApiError::conflict(format!(
                "Scene {} is already generating",
                id
            )));
        }

        scene.begin_generation();
        info!(scene_id = %id, "Scene generation started");
        Ok(scene.prompt())
    }

    async fn run_generation(&self, id: SceneId, prompt: String, aspect_ratio: AspectRatio) {
        let permit = match self.permits.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                error!(scene_id = %id, "Generation pool closed before job could run");
                self.apply_failure(id, "Generation worker pool is shut down".to_string(), false)
                    .await;
                return;
            }
        };

        let outcome = self.generator.generate(&prompt, aspect_ratio).await;
        drop(permit);

        match outcome {
            Ok(video_url) => {
                let mut scenes = self.scenes.write().await;
                if let Some(scene) = scenes.iter_mut().find(|s| s.id == id) {
                    scene.complete(video_url);
                    info!(scene_id = %id, "Scene generation succeeded");
                }
            }
            Err(err) => {
                let invalid_credential = err.is_invalid_credential();
                self.apply_failure(id, err.to_string(), invalid_credential)
                    .await;
            }
        }
    }

    async fn apply_failure(&self, id: SceneId, message: String, invalid_credential: bool) {
        {
            let mut scenes = self.scenes.write().await;
            if let Some(scene) = scenes.iter_mut().find(|s| s.id == id) {
                scene.fail(message.clone());
            }
        }
        warn!(scene_id = %id, "Scene generation failed: {}", message);

        if invalid_credential {
            self.credentials.invalidate().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Mutex;

    use sreel_models::{default_script, SceneStatus};
    use sreel_veo::{CredentialStore, FailureKind, VeoError};

    /// Generator that pops one scripted outcome per call.
    struct ScriptedGenerator {
        outcomes: Mutex<VecDeque<VeoResult<String>>>,
    }

    impl ScriptedGenerator {
        fn new(outcomes: Vec<VeoResult<String>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
            })
        }
    }

    #[async_trait]
    impl GenerateVideo for ScriptedGenerator {
        async fn generate(&self, _prompt: &str, _aspect_ratio: AspectRatio) -> VeoResult<String> {
            self.outcomes
                .lock()
                .await
                .pop_front()
                .unwrap_or(Err(VeoError::NoResultReturned))
        }
    }

    /// Generator whose calls never resolve.
    struct NeverResolves;

    #[async_trait]
    impl GenerateVideo for NeverResolves {
        async fn generate(&self, _prompt: &str, _aspect_ratio: AspectRatio) -> VeoResult<String> {
            std::future::pending().await
        }
    }

    /// Generator tracking how many calls overlap.
    struct ConcurrencyProbe {
        current: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl GenerateVideo for ConcurrencyProbe {
        async fn generate(&self, _prompt: &str, _aspect_ratio: AspectRatio) -> VeoResult<String> {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.current.fetch_sub(1, Ordering::SeqCst);
            Ok("https://host/video&key=k".to_string())
        }
    }

    async fn controller_with(
        generator: Arc<dyn GenerateVideo>,
        max_concurrent: usize,
    ) -> (SceneController, CredentialStore) {
        let credentials = CredentialStore::new();
        credentials.set("abc").await;
        let controller = SceneController::new(
            default_script(),
            generator,
            credentials.clone(),
            max_concurrent,
        );
        (controller, credentials)
    }

    #[tokio::test]
    async fn start_generation_immediately_shows_generating_with_cleared_outcome() {
        let (controller, _) = controller_with(Arc::new(NeverResolves), 2).await;
        controller
            .start_generation(SceneId(1), AspectRatio::Widescreen)
            .await
            .unwrap();

        let scene = controller.scene(SceneId(1)).await.unwrap();
        assert_eq!(scene.status, SceneStatus::Generating);
        assert!(scene.video_url.is_none());
        assert!(scene.error.is_none());
    }

    #[tokio::test]
    async fn successful_generation_sets_url_and_clears_error() {
        let generator =
            ScriptedGenerator::new(vec![Ok("https://host/video123&key=abc".to_string())]);
        let (controller, _) = controller_with(generator, 2).await;

        controller
            .generate_scene(SceneId(2), AspectRatio::Widescreen)
            .await
            .unwrap();

        let scene = controller.scene(SceneId(2)).await.unwrap();
        assert_eq!(scene.status, SceneStatus::Success);
        assert_eq!(scene.video_url.as_deref(), Some("https://host/video123&key=abc"));
        assert!(scene.error.is_none());
    }

    #[tokio::test]
    async fn failed_generation_sets_error_and_keeps_credential() {
        let generator = ScriptedGenerator::new(vec![Err(VeoError::generation_failed(
            FailureKind::Transient,
            "backend unavailable",
        ))]);
        let (controller, credentials) = controller_with(generator, 2).await;

        controller
            .generate_scene(SceneId(1), AspectRatio::Portrait)
            .await
            .unwrap();

        let scene = controller.scene(SceneId(1)).await.unwrap();
        assert_eq!(scene.status, SceneStatus::Error);
        assert!(scene.video_url.is_none());
        assert_eq!(
            scene.error.as_deref(),
            Some("Video generation failed: backend unavailable")
        );
        assert!(credentials.is_configured().await);
    }

    #[tokio::test]
    async fn invalid_credential_failure_invalidates_the_store() {
        let generator = ScriptedGenerator::new(vec![Err(VeoError::generation_failed(
            FailureKind::InvalidCredential,
            "Requested entity was not found.",
        ))]);
        let (controller, credentials) = controller_with(generator, 2).await;

        controller
            .generate_scene(SceneId(3), AspectRatio::Widescreen)
            .await
            .unwrap();

        let scene = controller.scene(SceneId(3)).await.unwrap();
        assert_eq!(scene.status, SceneStatus::Error);
        assert!(scene.error.is_some());
        assert!(!credentials.is_configured().await);
    }

    #[tokio::test]
    async fn no_result_failure_surfaces_the_missing_url_message() {
        let generator = ScriptedGenerator::new(vec![Err(VeoError::NoResultReturned)]);
        let (controller, _) = controller_with(generator, 2).await;

        controller
            .generate_scene(SceneId(1), AspectRatio::Widescreen)
            .await
            .unwrap();

        let scene = controller.scene(SceneId(1)).await.unwrap();
        assert_eq!(scene.status, SceneStatus::Error);
        assert!(scene.error.as_deref().unwrap().contains("no video URL was returned"));
    }

    #[tokio::test]
    async fn retry_after_error_reenters_generating_and_clears_outcome() {
        let generator = ScriptedGenerator::new(vec![
            Err(VeoError::generation_failed(FailureKind::Unknown, "first")),
            Err(VeoError::generation_failed(FailureKind::Unknown, "second")),
            Ok("https://host/video9&key=abc".to_string()),
        ]);
        let (controller, _) = controller_with(generator, 2).await;

        for _ in 0..2 {
            controller
                .generate_scene(SceneId(4), AspectRatio::Widescreen)
                .await
                .unwrap();
            let scene = controller.scene(SceneId(4)).await.unwrap();
            assert_eq!(scene.status, SceneStatus::Error);
        }

        controller
            .generate_scene(SceneId(4), AspectRatio::Widescreen)
            .await
            .unwrap();
        let scene = controller.scene(SceneId(4)).await.unwrap();
        assert_eq!(scene.status, SceneStatus::Success);
        assert!(scene.error.is_none());
        assert_eq!(scene.video_url.as_deref(), Some("https://host/video9&key=abc"));
    }

    #[tokio::test]
    async fn second_request_while_generating_is_a_conflict() {
        let (controller, _) = controller_with(Arc::new(NeverResolves), 2).await;
        controller
            .start_generation(SceneId(1), AspectRatio::Widescreen)
            .await
            .unwrap();

        let err = controller
            .start_generation(SceneId(1), AspectRatio::Widescreen)
            .await
            .expect_err("second request must be rejected");
        assert!(matches!(err, ApiError::Conflict(_)));

        // Other scenes are unaffected by the in-flight attempt
        controller
            .start_generation(SceneId(2), AspectRatio::Widescreen)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unknown_scene_is_not_found() {
        let (controller, _) = controller_with(Arc::new(NeverResolves), 2).await;
        let err = controller
            .start_generation(SceneId(99), AspectRatio::Widescreen)
            .await
            .expect_err("unknown scene must be rejected");
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn parallelism_across_scenes_is_bounded() {
        let probe = Arc::new(ConcurrencyProbe {
            current: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        });
        let (controller, _) = controller_with(probe.clone(), 1).await;

        for id in 1..=4u32 {
            controller
                .start_generation(SceneId(id), AspectRatio::Widescreen)
                .await
                .unwrap();
        }

        // Wait until every scene reached a terminal state
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let scenes = controller.scenes().await;
                let pending = scenes
                    .iter()
                    .filter(|s| s.id.as_u32() <= 4 && s.status == SceneStatus::Generating)
                    .count();
                if pending == 0 {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("all generations should finish");

        assert_eq!(probe.peak.load(Ordering::SeqCst), 1);
    }
}
