//! Centralized error types for the pumpkin-maze game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Quiz service error: {0}")]
    Quiz(#[from] QuizError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while loading or validating runtime configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Extract(#[from] figment::Error),

    #[error("Unknown tuning profile: {0}")]
    UnknownProfile(String),
}

/// Errors raised by the flashcard service client.
///
/// These never escape the quiz module as failures of the game itself; they
/// are converted into overlay messages and logged.
#[derive(thiserror::Error, Debug)]
pub enum QuizError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service responded with HTTP {0}")]
    Status(u16),
}

/// Errors raised by the cross-page session store.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed session file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
