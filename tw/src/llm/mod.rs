//! Generative API client for tripweaver
//!
//! Provides the client trait, the Gemini implementation, and the mapper
//! that turns a raw model completion into domain itineraries.

pub mod client;
mod error;
mod gemini;
pub mod mapper;

pub use client::GenerativeClient;
pub use error::LlmError;
pub use gemini::GeminiClient;
