//! # Demo Generator
//!
//! Keyword-driven generator producing the kernel's primitive shapes.

use crate::error::RegistryResult;
use crate::generator::Generator;
use crate::metadata::{GeneratedMesh, GenerationParams};
use crate::prompt::{preprocess_prompt, ShapeHint};

/// Generation method recorded in the metadata of demo meshes.
pub const DEMO_METHOD: &str = "demo";

/// Generator that maps prompt keywords onto cube, sphere, cylinder and
/// pyramid primitives. Always available; starts loaded.
///
/// # Example
///
/// ```rust
/// use model_registry::{DemoModel, Generator, GenerationParams};
///
/// let demo = DemoModel::new();
/// let result = demo.generate("a tiny ball", &GenerationParams::new()).unwrap();
/// assert_eq!(result.metadata.shape_type, "sphere");
/// assert_eq!(result.metadata.bounding_box.size[1], 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct DemoModel {
    loaded: bool,
}

impl DemoModel {
    pub fn new() -> Self {
        Self { loaded: true }
    }
}

impl Default for DemoModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for DemoModel {
    fn is_available(&self) -> bool {
        true
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn load(&mut self) -> RegistryResult<()> {
        self.loaded = true;
        Ok(())
    }

    fn unload(&mut self) {
        self.loaded = false;
    }

    fn generate(&self, prompt: &str, _params: &GenerationParams) -> RegistryResult<GeneratedMesh> {
        let cleaned = preprocess_prompt(prompt)?;
        let hint = ShapeHint::from_prompt(&cleaned);
        tracing::debug!(prompt = %cleaned, kind = %hint.kind, size = hint.size, "demo shape hint");

        let mesh = mesh_kernel::generate(hint.kind, hint.size)?;
        GeneratedMesh::postprocess(mesh, hint.kind.to_string(), DEMO_METHOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    fn run(prompt: &str) -> RegistryResult<GeneratedMesh> {
        DemoModel::new().generate(prompt, &GenerationParams::new())
    }

    #[test]
    fn test_demo_shapes() {
        let cases = [
            ("a red ball", "sphere", 561),
            ("steel tube", "cylinder", 34),
            ("stone pyramid", "pyramid", 5),
            ("something", "cube", 8),
        ];
        for (prompt, shape, vertices) in cases {
            let result = run(prompt).unwrap();
            assert_eq!(result.metadata.shape_type, shape);
            assert_eq!(result.metadata.vertex_count, vertices);
            assert_eq!(result.metadata.generation_method, DEMO_METHOD);
        }
    }

    #[test]
    fn test_demo_size_from_prompt() {
        let result = run("HUGE   box").unwrap();
        assert_eq!(result.metadata.bounding_box.size, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_demo_rejects_banned_prompt() {
        assert!(matches!(run("nsfw cube"), Err(RegistryError::InvalidArgument(_))));
    }

    #[test]
    fn test_demo_lifecycle() {
        let mut demo = DemoModel::default();
        assert!(demo.is_loaded());
        demo.unload();
        assert!(!demo.is_loaded());
        demo.load().unwrap();
        assert!(demo.is_loaded());
        assert_eq!(demo.device(), "cpu");
    }
}
