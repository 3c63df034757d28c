//! Story Handlers

use axum::{extract::State, Json};
use base64::Engine;
use std::sync::Arc;

use crate::application::GenerateStoryCommand;
use crate::infrastructure::http::dto::{
    ApiResponse, GenerateStoryRequest, GenerateStoryResponseDto, ILLUSTRATION_PLACEHOLDER_URL,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 生成故事（单次触发：文本生成 + 语音合成）
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateStoryRequest>,
) -> Result<Json<ApiResponse<GenerateStoryResponseDto>>, ApiError> {
    let cmd = GenerateStoryCommand {
        story_type: req.story_type,
        language: req.language,
        audience: req.audience,
        custom_prompt: req.custom_prompt,
    };

    let result = state.generate_story_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(GenerateStoryResponseDto {
        request_id: result.request_id,
        story: result.story,
        language: result.language.to_string(),
        download_filename: result.download_filename,
        audio_base64: base64::engine::general_purpose::STANDARD.encode(&result.audio.data),
        audio_format: result.audio.format.extension().to_string(),
        illustration_url: ILLUSTRATION_PLACEHOLDER_URL.to_string(),
        generated_at: chrono::Utc::now(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{
        FakeSpeechSynthesizer, FakeSpeechSynthesizerConfig, FakeStoryGenerator,
        FakeStoryGeneratorConfig,
    };
    use crate::infrastructure::http::routes::create_routes;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_app() -> axum::Router {
        let generator = Arc::new(FakeStoryGenerator::new(FakeStoryGeneratorConfig {
            story: "  A tiny tale.  ".to_string(),
            delay_ms: 0,
        }));
        let synthesizer = Arc::new(FakeSpeechSynthesizer::new(FakeSpeechSynthesizerConfig {
            bytes_per_char: 2,
            delay_ms: 0,
        }));
        create_routes().with_state(Arc::new(AppState::new(generator, synthesizer)))
    }

    async fn post_generate(app: axum::Router, body: &str) -> serde_json::Value {
        let request = Request::builder()
            .method("POST")
            .uri("/api/story/generate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_story_success_envelope() {
        let envelope = post_generate(
            test_app(),
            r#"{"story_type": "Moral", "language": "Tamil", "audience": "Children", "custom_prompt": ""}"#,
        )
        .await;

        assert_eq!(envelope["errno"], 0);
        assert_eq!(envelope["data"]["story"], "A tiny tale.");
        assert_eq!(envelope["data"]["language"], "Tamil");
        assert_eq!(envelope["data"]["download_filename"], "Tamil_story.txt");
        assert_eq!(envelope["data"]["audio_format"], "mp3");
        assert!(!envelope["data"]["audio_base64"]
            .as_str()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_custom_without_prompt_returns_errno_400() {
        let envelope = post_generate(
            test_app(),
            r#"{"story_type": "Custom", "language": "English", "audience": "Parents", "custom_prompt": "  "}"#,
        )
        .await;

        assert_eq!(envelope["errno"], 400);
        assert!(!envelope["error"].as_str().unwrap().is_empty());
        assert!(envelope["data"].is_null());
    }
}
