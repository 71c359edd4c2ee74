//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the shared,
//! read-only resources handed to every request.

use quizgen_core::generator::QuizGenerator;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub quiz_generator: Arc<dyn QuizGenerator>,
}

impl AppState {
    pub fn new(quiz_generator: Arc<dyn QuizGenerator>) -> Self {
        Self { quiz_generator }
    }
}
