//! Quiz Prompt Assembly
//!
//! Merges the fixed quiz-authoring instruction with a user-supplied topic into
//! the single text prompt that is sent to the model.

/// The instruction describing the teacher persona and the expected JSON shape.
pub const QUIZ_SYSTEM_MESSAGE: &str = include_str!("../prompts/quiz_system.md");

/// The user turn. `{topic}` is the only placeholder.
pub const QUIZ_USER_MESSAGE: &str = "Create a quiz on topic '{topic}'.";

const TOPIC_PLACEHOLDER: &str = "{topic}";

/// A two-part prompt template rendered into one string.
///
/// The system part is used literally, so JSON braces inside it need no
/// escaping. Only the user part is scanned for `{topic}`.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system: String,
    user: String,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// The built-in quiz generation template.
    pub fn quiz() -> Self {
        Self::new(QUIZ_SYSTEM_MESSAGE.trim_end(), QUIZ_USER_MESSAGE)
    }

    pub fn system_message(&self) -> &str {
        &self.system
    }

    /// Renders the prompt for `topic`.
    ///
    /// Substitution is a single pass: a topic that itself contains `{topic}`
    /// or other braces is inserted verbatim and never expanded again.
    pub fn render(&self, topic: &str) -> String {
        let user = self.user.replace(TOPIC_PLACEHOLDER, topic);
        format!("System: {}\nUser: {}", self.system, user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_places_topic_in_user_line() {
        let prompt = PromptTemplate::quiz().render("Photosynthesis");

        assert!(prompt.starts_with("System: You are a teacher"));
        assert!(prompt.ends_with("\nUser: Create a quiz on topic 'Photosynthesis'."));
    }

    #[test]
    fn test_render_mentions_question_count_guidance() {
        let prompt = PromptTemplate::quiz().render("Rust");
        assert!(prompt.contains("5-10"));
    }

    #[test]
    fn test_render_does_not_expand_placeholder_inside_topic() {
        let template = PromptTemplate::new("sys", "topic={topic}");

        let prompt = template.render("{topic} and {other}");

        assert_eq!(prompt, "System: sys\nUser: topic={topic} and {other}");
    }

    #[test]
    fn test_system_message_braces_are_literal() {
        let template = PromptTemplate::quiz();
        let prompt = template.render("x");

        assert!(prompt.contains(template.system_message()));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_embedded_example_is_valid_json() {
        let system = PromptTemplate::quiz();
        let system = system.system_message();
        let start = system.find('{').expect("example should open with a brace");
        let end = system.rfind('}').expect("example should close with a brace");

        let example: serde_json::Value =
            serde_json::from_str(&system[start..=end]).expect("example should parse");

        let question = &example["questions"][0];
        assert_eq!(question["options"].as_array().map(Vec::len), Some(4));
        assert_eq!(question["timer"], 10);
        assert!(question["explanation"].is_string());
        assert_eq!(example["status"], "public");
    }
}
