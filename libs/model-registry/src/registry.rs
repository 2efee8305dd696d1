//! # Model Registry
//!
//! Name → generator lookup with lazy loading.
//!
//! The registry is an ordinary value; share it behind an `Arc` to use it
//! from several threads. Generation takes a read lock, while registration,
//! loading and unloading take the write lock.

use crate::demo::DemoModel;
use crate::descriptor::{ModelDescriptor, ModelStatus, RegistryStats};
use crate::error::{RegistryError, RegistryResult};
use crate::generator::Generator;
use crate::metadata::{GeneratedMesh, GenerationParams};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

type Models = BTreeMap<String, Box<dyn Generator>>;

/// Registry of named generators.
///
/// # Example
///
/// ```rust
/// use model_registry::{GenerationParams, ModelRegistry};
///
/// let registry = ModelRegistry::with_defaults();
/// let result = registry.generate("demo", "a big cylinder", &GenerationParams::new()).unwrap();
/// assert_eq!(result.metadata.shape_type, "cylinder");
/// assert_eq!(result.metadata.model_used.as_deref(), Some("demo"));
/// ```
#[derive(Default)]
pub struct ModelRegistry {
    models: RwLock<Models>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the `demo` generator registered.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register("demo", DemoModel::new());
        tracing::info!(models = ?registry.names(), "loaded default models");
        registry
    }

    /// Registers `generator` under `name`, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, generator: impl Generator + 'static) {
        let name = name.into();
        tracing::info!(model = %name, "registered model");
        self.write().insert(name, Box::new(generator));
    }

    /// Whether a generator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Catalog entries for every registered generator.
    pub fn descriptors(&self) -> Vec<ModelDescriptor> {
        self.read()
            .iter()
            .map(|(name, model)| {
                ModelDescriptor::new(name, model.is_available(), model.is_loaded(), model.device())
            })
            .collect()
    }

    /// Counts of registered, available and loaded generators.
    pub fn stats(&self) -> RegistryStats {
        let models = self.read();
        let mut stats = RegistryStats {
            total_models: models.len(),
            ..RegistryStats::default()
        };

        for (name, model) in models.iter() {
            let status = ModelStatus {
                available: model.is_available(),
                loaded: model.is_loaded(),
                device: model.device().to_string(),
            };
            stats.available_models += usize::from(status.available);
            stats.loaded_models += usize::from(status.loaded);
            stats.models.insert(name.clone(), status);
        }

        stats
    }

    /// Generates a mesh with the generator registered under `name`.
    ///
    /// Loads the generator first if needed, then stamps the registry name,
    /// the caller's prompt and `params` into the metadata.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no generator has that name
    /// - `Unavailable` if the generator cannot run
    /// - `LoadFailed` if loading did not succeed
    /// - whatever the generator itself returns
    pub fn generate(
        &self,
        name: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> RegistryResult<GeneratedMesh> {
        self.ensure_loaded(name)?;

        let models = self.read();
        let model = models
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        let mut result = model.generate(prompt, params).map_err(|e| {
            tracing::error!(model = name, error = %e, "generation failed");
            e
        })?;

        result.metadata.model_used = Some(name.to_string());
        result.metadata.prompt = Some(prompt.to_string());
        result.metadata.generation_params = params.clone();

        tracing::info!(
            model = name,
            shape = %result.metadata.shape_type,
            vertices = result.metadata.vertex_count,
            faces = result.metadata.face_count,
            "generated mesh"
        );
        Ok(result)
    }

    /// Unloads the generator registered under `name`, if any.
    pub fn unload(&self, name: &str) {
        if let Some(model) = self.write().get_mut(name) {
            model.unload();
            tracing::info!(model = name, "unloaded model");
        }
    }

    /// Unloads every registered generator.
    pub fn unload_all(&self) {
        for (name, model) in self.write().iter_mut() {
            model.unload();
            tracing::info!(model = %name, "unloaded model");
        }
    }

    fn ensure_loaded(&self, name: &str) -> RegistryResult<()> {
        {
            let models = self.read();
            let model = models
                .get(name)
                .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
            if !model.is_available() {
                return Err(RegistryError::Unavailable(name.to_string()));
            }
            if model.is_loaded() {
                return Ok(());
            }
        }

        let mut models = self.write();
        // Re-check: the entry may have changed between the two locks
        let model = models
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        if model.is_loaded() {
            return Ok(());
        }

        tracing::info!(model = name, "loading model");
        model.load().map_err(|e| {
            tracing::error!(model = name, error = %e, "model load failed");
            RegistryError::LoadFailed(name.to_string())
        })?;
        if !model.is_loaded() {
            return Err(RegistryError::LoadFailed(name.to_string()));
        }
        Ok(())
    }

    // Poisoned locks are recovered; map updates are single inserts
    fn read(&self) -> RwLockReadGuard<'_, Models> {
        match self.models.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Models> {
        match self.models.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.names())
            .finish()
    }
}
