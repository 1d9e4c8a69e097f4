pub mod gemini;

pub use gemini::{generate_text, GeminiRequest, InlineImage, ModelTier};
