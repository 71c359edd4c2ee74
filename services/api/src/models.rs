//! API Models
//!
//! Request and response shapes for the quiz endpoint, annotated for OpenAPI
//! documentation with `utoipa`.
//!
//! The `Quiz` family describes the structure the model is asked to produce.
//! Responses are passed through as raw JSON and are never checked against it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct TopicRequest {
    #[schema(example = "The Solar System")]
    pub topic: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Text with an optional image, used for both questions and options.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct QuizContent {
    pub text: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub query: QuizContent,
    pub options: Vec<QuizContent>,
    pub correct_answer: String,
    pub explanation: String,
    /// Seconds allowed for this question.
    pub timer: u32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub description: String,
    pub creator_id: String,
    pub creator: String,
    /// Minutes allowed for the whole quiz.
    pub timer: u32,
    #[schema(example = "public")]
    pub status: String,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topic_request_deserialization() {
        let payload: TopicRequest = serde_json::from_str(r#"{"topic": "Rust"}"#).unwrap();
        assert_eq!(payload.topic, "Rust");
    }

    #[test]
    fn test_topic_request_missing_field() {
        let result: Result<TopicRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            detail: "Invalid json output: oops".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"detail":"Invalid json output: oops"}"#);
    }

    #[test]
    fn test_quiz_uses_camel_case_fields() {
        let value = json!({
            "title": "Rust",
            "description": "Ownership basics",
            "creatorId": "someone@example.com",
            "creator": "Someone",
            "timer": 20,
            "status": "public",
            "questions": [{
                "query": {"text": "What moves?", "image": null},
                "options": [
                    {"text": "String", "image": null},
                    {"text": "i32", "image": null},
                    {"text": "bool", "image": null},
                    {"text": "char", "image": null}
                ],
                "correctAnswer": "String",
                "explanation": "String is not Copy.",
                "timer": 10
            }]
        });

        let quiz: Quiz = serde_json::from_value(value).unwrap();
        assert_eq!(quiz.creator_id, "someone@example.com");
        assert_eq!(quiz.questions[0].correct_answer, "String");
        assert_eq!(quiz.questions[0].options.len(), 4);
        assert_eq!(quiz.questions[0].query.image, None);
    }
}
