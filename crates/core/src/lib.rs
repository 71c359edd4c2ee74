pub mod generator;
pub mod llm_client;
pub mod parser;
pub mod prompt;
