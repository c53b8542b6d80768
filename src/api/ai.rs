//! AI endpoints backed by the canned [`ContentGenerator`]

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::ai::{
    AiAnalytics, ContentRequest, GeneratedContent, GeneratedImage,
    GrammarCheckRequest, GrammarCheckResponse, ImageRequest, SpeechToTextRequest, Suggestions,
    Synthesis, TextToSpeechRequest, Transcript, Translation, TranslationRequest,
};

use super::server::SharedState;

pub async fn generate_content(
    State(state): State<SharedState>,
    Json(req): Json<ContentRequest>,
) -> Json<GeneratedContent> {
    Json(state.generator.generate_content(&req))
}

pub async fn translate(
    State(state): State<SharedState>,
    Json(req): Json<TranslationRequest>,
) -> Json<Translation> {
    Json(state.generator.translate(&req))
}

pub async fn grammar_check(
    State(state): State<SharedState>,
    Json(req): Json<GrammarCheckRequest>,
) -> Json<GrammarCheckResponse> {
    Json(state.generator.check_grammar(&req))
}

pub async fn generate_image(
    State(state): State<SharedState>,
    Json(req): Json<ImageRequest>,
) -> Json<GeneratedImage> {
    Json(state.generator.generate_image(&req))
}

pub async fn speech_to_text(
    State(state): State<SharedState>,
    Json(req): Json<SpeechToTextRequest>,
) -> Json<Transcript> {
    Json(state.generator.speech_to_text(&req))
}

pub async fn text_to_speech(
    State(state): State<SharedState>,
    Json(req): Json<TextToSpeechRequest>,
) -> Json<Synthesis> {
    Json(state.generator.text_to_speech(&req))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default = "default_content_type")]
    pub content_type: String,
    pub category: Option<String>,
}

fn default_content_type() -> String {
    "article".to_string()
}

pub async fn suggestions(
    State(state): State<SharedState>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Suggestions> {
    Json(
        state
            .generator
            .suggestions(&query.content_type, query.category),
    )
}

pub async fn analytics(State(state): State<SharedState>) -> Json<AiAnalytics> {
    Json(state.generator.analytics())
}
