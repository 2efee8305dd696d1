//! # Prompt Parsing
//!
//! Normalizes free-text prompts and extracts a [`ShapeHint`] from them.
//!
//! Keyword matching is substring based and ordered: the first group with a
//! match wins, so "a round pyramid" is a sphere.

use crate::error::{RegistryError, RegistryResult};
use config::constants::{DEFAULT_SHAPE_SIZE, LARGE_SHAPE_SIZE, SMALL_SHAPE_SIZE};
use mesh_kernel::PrimitiveKind;
use serde::{Deserialize, Serialize};

/// Words that cause a prompt to be rejected.
pub const BANNED_WORDS: [&str; 3] = ["explicit", "inappropriate", "nsfw"];

const SHAPE_WORDS: [(PrimitiveKind, &[&str]); 3] = [
    (PrimitiveKind::Sphere, &["sphere", "ball", "round", "orb"]),
    (PrimitiveKind::Cylinder, &["cylinder", "tube", "pipe", "rod"]),
    (PrimitiveKind::Pyramid, &["pyramid", "triangle", "cone"]),
];

const SIZE_WORDS: [(f32, &[&str]); 2] = [
    (SMALL_SHAPE_SIZE, &["small", "tiny", "mini"]),
    (LARGE_SHAPE_SIZE, &["large", "big", "huge", "giant"]),
];

/// Trims, lowercases and collapses whitespace, then rejects banned words.
///
/// # Example
///
/// ```rust
/// use model_registry::prompt::preprocess_prompt;
///
/// assert_eq!(preprocess_prompt("  A  BIG\tBall ").unwrap(), "a big ball");
/// assert!(preprocess_prompt("nsfw orb").is_err());
/// ```
pub fn preprocess_prompt(prompt: &str) -> RegistryResult<String> {
    let cleaned = prompt
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(word) = BANNED_WORDS.iter().find(|w| cleaned.contains(*w)) {
        return Err(RegistryError::InvalidArgument(format!(
            "Inappropriate content detected: {word}"
        )));
    }

    Ok(cleaned)
}

/// Shape kind and size derived from a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeHint {
    pub kind: PrimitiveKind,
    pub size: f32,
}

impl ShapeHint {
    /// Extracts a hint from an already preprocessed prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            kind: shape_from_prompt(prompt),
            size: size_from_prompt(prompt),
        }
    }
}

impl Default for ShapeHint {
    fn default() -> Self {
        Self {
            kind: PrimitiveKind::Cube,
            size: DEFAULT_SHAPE_SIZE,
        }
    }
}

fn shape_from_prompt(prompt: &str) -> PrimitiveKind {
    SHAPE_WORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| prompt.contains(w)))
        .map_or(PrimitiveKind::Cube, |(kind, _)| *kind)
}

fn size_from_prompt(prompt: &str) -> f32 {
    SIZE_WORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| prompt.contains(w)))
        .map_or(DEFAULT_SHAPE_SIZE, |(size, _)| *size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_normalizes() {
        assert_eq!(preprocess_prompt("\n Red   Cube\n").unwrap(), "red cube");
        assert_eq!(preprocess_prompt("").unwrap(), "");
    }

    #[test]
    fn test_preprocess_rejects_banned_words() {
        let err = preprocess_prompt("An EXPLICIT sphere").unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidArgument("Inappropriate content detected: explicit".into())
        );
    }

    #[test]
    fn test_shape_keywords() {
        let cases = [
            ("a shiny orb", PrimitiveKind::Sphere),
            ("copper pipe", PrimitiveKind::Cylinder),
            ("traffic cone", PrimitiveKind::Pyramid),
            ("wooden crate", PrimitiveKind::Cube),
            ("round pyramid", PrimitiveKind::Sphere),
        ];
        for (prompt, kind) in cases {
            assert_eq!(ShapeHint::from_prompt(prompt).kind, kind, "{prompt}");
        }
    }

    #[test]
    fn test_size_keywords() {
        assert_eq!(ShapeHint::from_prompt("tiny ball").size, 0.5);
        assert_eq!(ShapeHint::from_prompt("giant rod").size, 2.0);
        assert_eq!(ShapeHint::from_prompt("ball").size, 1.0);
        // small wins over big when both appear
        assert_eq!(ShapeHint::from_prompt("small big box").size, 0.5);
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "rod" inside "product", "mini" inside "minimal"
        let hint = ShapeHint::from_prompt("minimal product");
        assert_eq!(hint.kind, PrimitiveKind::Cylinder);
        assert_eq!(hint.size, 0.5);
    }
}
