//! Canned AI responses
//!
//! The AI endpoints never call a real model: [`ContentGenerator`] returns
//! templated text shaped like a model response, including a fake model tag
//! and processing time.

use serde::{Deserialize, Serialize};

fn default_content_type() -> String {
    "article".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub prompt: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub max_length: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GeneratedContent {
    pub generated_content: String,
    pub content_type: String,
    pub language: String,
    pub is_ai_generated: bool,
    pub model_used: String,
    pub tokens_used: usize,
    pub processing_time_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub target_language: String,
    #[serde(default = "default_language")]
    pub source_language: String,
}

#[derive(Debug, Serialize)]
pub struct Translation {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub confidence: f64,
    pub is_ai_generated: bool,
    pub model_used: String,
    pub processing_time_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct GrammarCheckRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct GrammarIssue {
    pub kind: String,
    pub position: usize,
    pub suggestion: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct GrammarCheckResponse {
    pub original_text: String,
    pub corrected_text: String,
    pub errors: Vec<GrammarIssue>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_size")]
    pub size: String,
}

fn default_style() -> String {
    "realistic".to_string()
}

fn default_size() -> String {
    "800x600".to_string()
}

#[derive(Debug, Serialize)]
pub struct GeneratedImage {
    pub image_url: String,
    pub prompt: String,
    pub style: String,
    pub size: String,
    pub is_ai_generated: bool,
    pub model_used: String,
    pub processing_time_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct SpeechToTextRequest {
    #[serde(default = "default_duration")]
    pub duration: u64,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_duration() -> u64 {
    30
}

#[derive(Debug, Serialize)]
pub struct Transcript {
    pub transcript: String,
    pub confidence: f64,
    pub language: String,
    pub duration: u64,
    pub is_ai_generated: bool,
    pub model_used: String,
    pub processing_time_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
}

fn default_voice() -> String {
    "neutral".to_string()
}

#[derive(Debug, Serialize)]
pub struct Synthesis {
    pub audio_url: String,
    pub text: String,
    pub voice: String,
    pub duration: u64,
    pub is_ai_generated: bool,
    pub model_used: String,
    pub processing_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
    pub content_type: String,
    pub category: Option<String>,
    pub is_ai_generated: bool,
    pub model_used: String,
}

#[derive(Debug, Serialize)]
pub struct AiAnalytics {
    pub total_ai_requests: u64,
    pub content_generation_requests: u64,
    pub translation_requests: u64,
    pub grammar_check_requests: u64,
    pub image_generation_requests: u64,
    pub speech_requests: u64,
    pub text_to_speech_requests: u64,
    pub total_tokens_used: u64,
    pub most_used_feature: String,
    pub average_processing_time_ms: u64,
    pub success_rate: f64,
}

/// Opaque content-generation service returning templated text
#[derive(Debug, Default, Clone)]
pub struct ContentGenerator;

impl ContentGenerator {
    pub fn generate_content(&self, req: &ContentRequest) -> GeneratedContent {
        let generated_content = match req.content_type.as_str() {
            "article" => format!(
                "Based on your request '{}', here is a full article:\n\n{} is an important \
                 topic today, with a growing impact on everyday life and work.",
                req.prompt, req.prompt
            ),
            "title" => format!("A Complete Guide to {}", req.prompt),
            "summary" => format!(
                "Summary: {} is a core concept that rewards a deeper understanding.",
                req.prompt
            ),
            "outline" => format!(
                "Article outline:\n1. Introduction to {}\n2. Why it matters\n3. Practical \
                 applications\n4. Conclusions and recommendations",
                req.prompt
            ),
            _ => format!("Content about {}", req.prompt),
        };

        let generated_content = match req.max_length {
            Some(max) if generated_content.len() > max => {
                generated_content.chars().take(max).collect()
            }
            _ => generated_content,
        };

        GeneratedContent {
            tokens_used: generated_content.split_whitespace().count(),
            generated_content,
            content_type: req.content_type.clone(),
            language: req.language.clone(),
            is_ai_generated: true,
            model_used: "mock-ai-model".to_string(),
            processing_time_ms: 1500,
        }
    }

    pub fn translate(&self, req: &TranslationRequest) -> Translation {
        Translation {
            translated_text: format!(
                "Translation of '{}' from {} to {}: a rendered version of the text in the \
                 target language.",
                req.text, req.source_language, req.target_language
            ),
            original_text: req.text.clone(),
            source_language: req.source_language.clone(),
            target_language: req.target_language.clone(),
            confidence: 0.95,
            is_ai_generated: true,
            model_used: "mock-translation-model".to_string(),
            processing_time_ms: 800,
        }
    }

    pub fn check_grammar(&self, req: &GrammarCheckRequest) -> GrammarCheckResponse {
        GrammarCheckResponse {
            original_text: req.text.clone(),
            corrected_text: req.text.clone(),
            errors: vec![GrammarIssue {
                kind: "spelling".to_string(),
                position: 10,
                suggestion: "artificial intelligence".to_string(),
                confidence: 0.9,
            }],
            suggestions: vec![
                "Check your punctuation placement".to_string(),
                "Consider more precise terminology in this context".to_string(),
            ],
        }
    }

    pub fn generate_image(&self, req: &ImageRequest) -> GeneratedImage {
        GeneratedImage {
            image_url: format!(
                "https://placeholder.example.com/{}?text=AI+Generated+Image",
                req.size
            ),
            prompt: req.prompt.clone(),
            style: req.style.clone(),
            size: req.size.clone(),
            is_ai_generated: true,
            model_used: "mock-image-model".to_string(),
            processing_time_ms: 5000,
        }
    }

    pub fn speech_to_text(&self, req: &SpeechToTextRequest) -> Transcript {
        Transcript {
            transcript: "This is text transcribed from audio by the mock speech model."
                .to_string(),
            confidence: 0.92,
            language: req.language.clone(),
            duration: req.duration,
            is_ai_generated: true,
            model_used: "mock-speech-model".to_string(),
            processing_time_ms: 2000,
        }
    }

    pub fn text_to_speech(&self, req: &TextToSpeechRequest) -> Synthesis {
        Synthesis {
            audio_url: "https://placeholder.example.com/generated-audio.mp3".to_string(),
            text: req.text.clone(),
            voice: req.voice.clone(),
            duration: 15,
            is_ai_generated: true,
            model_used: "mock-tts-model".to_string(),
            processing_time_ms: 3000,
        }
    }

    pub fn suggestions(&self, content_type: &str, category: Option<String>) -> Suggestions {
        let suggestions = match content_type {
            "article" => vec![
                "How is AI changing the future of work?",
                "Best practices for building modern web applications",
                "A beginner's guide to learning programming",
                "Where technology is heading next",
            ],
            "title" => vec![
                "10 Tips to Improve Your Website's Performance",
                "Artificial Intelligence: The Next Revolution",
                "Cybersecurity Fundamentals",
                "How to Launch Your First Tech Project",
            ],
            "tag" => vec![
                "artificial-intelligence",
                "web-development",
                "security",
                "entrepreneurship",
                "technology",
            ],
            _ => vec![],
        };

        Suggestions {
            suggestions: suggestions.into_iter().map(String::from).collect(),
            content_type: content_type.to_string(),
            category,
            is_ai_generated: true,
            model_used: "mock-suggestion-model".to_string(),
        }
    }

    pub fn analytics(&self) -> AiAnalytics {
        AiAnalytics {
            total_ai_requests: 1250,
            content_generation_requests: 450,
            translation_requests: 300,
            grammar_check_requests: 200,
            image_generation_requests: 150,
            speech_requests: 100,
            text_to_speech_requests: 50,
            total_tokens_used: 50000,
            most_used_feature: "content_generation".to_string(),
            average_processing_time_ms: 2000,
            success_rate: 0.98,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_templates_by_type() {
        let generator = ContentGenerator;
        for content_type in ["article", "title", "summary", "outline", "other"] {
            let out = generator.generate_content(&ContentRequest {
                prompt: "Rust".to_string(),
                content_type: content_type.to_string(),
                language: "en".to_string(),
                max_length: None,
            });
            assert!(out.generated_content.contains("Rust"));
            assert!(out.is_ai_generated);
            assert!(out.tokens_used > 0);
        }
    }

    #[test]
    fn test_max_length_truncates() {
        let generator = ContentGenerator;
        let out = generator.generate_content(&ContentRequest {
            prompt: "Rust".to_string(),
            content_type: "article".to_string(),
            language: "en".to_string(),
            max_length: Some(20),
        });
        assert!(out.generated_content.chars().count() <= 20);
    }

    #[test]
    fn test_suggestions_per_type() {
        let generator = ContentGenerator;
        assert_eq!(generator.suggestions("article", None).suggestions.len(), 4);
        assert_eq!(generator.suggestions("tag", None).suggestions.len(), 5);
        assert!(generator.suggestions("unknown", None).suggestions.is_empty());
    }

    #[test]
    fn test_translate_echoes_languages() {
        let generator = ContentGenerator;
        let out = generator.translate(&TranslationRequest {
            text: "hello".to_string(),
            target_language: "fr".to_string(),
            source_language: "en".to_string(),
        });
        assert_eq!(out.target_language, "fr");
        assert!(out.translated_text.contains("hello"));
    }
}
