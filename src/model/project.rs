//! Project and scene owners of the variable containers.
//!
//! These are deliberately thin: just enough of the project model to own the
//! global and per-scene containers that [`crate::ScopeChain`] layers over.
//! Objects, resources and persistence live elsewhere in the runtime.

use smol_str::SmolStr;

use super::container::{ScopeKind, VariablesContainer};

/// A scene (layout) of the game, owning its scene-scoped variables.
#[derive(Clone, Debug)]
pub struct Scene {
    name: SmolStr,
    variables: VariablesContainer,
}

impl Scene {
    /// Create a new scene with an empty variables container.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            variables: VariablesContainer::new(ScopeKind::Scene),
        }
    }

    /// The scene's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scene-scoped variables.
    #[inline]
    pub fn variables(&self) -> &VariablesContainer {
        &self.variables
    }

    /// The scene-scoped variables, mutably.
    #[inline]
    pub fn variables_mut(&mut self) -> &mut VariablesContainer {
        &mut self.variables
    }
}

/// A project: the global variables plus an ordered list of scenes.
#[derive(Clone, Debug)]
pub struct Project {
    name: SmolStr,
    global_variables: VariablesContainer,
    scenes: Vec<Scene>,
}

impl Project {
    /// Create a new project with no scenes and no global variables.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            global_variables: VariablesContainer::new(ScopeKind::Global),
            scenes: Vec::new(),
        }
    }

    /// The project's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project-wide (global) variables.
    #[inline]
    pub fn variables(&self) -> &VariablesContainer {
        &self.global_variables
    }

    /// The project-wide (global) variables, mutably.
    #[inline]
    pub fn variables_mut(&mut self) -> &mut VariablesContainer {
        &mut self.global_variables
    }

    /// Append a new empty scene and return it for population.
    ///
    /// Scene names are expected to be unique; a duplicate name shadows the
    /// later scene in [`Project::scene`] lookups.
    pub fn insert_scene(&mut self, name: impl Into<SmolStr>) -> &mut Scene {
        let index = self.scenes.len();
        self.scenes.push(Scene::new(name));
        &mut self.scenes[index]
    }

    /// Find a scene by name.
    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.name == name)
    }

    /// Find a scene by name, mutably.
    pub fn scene_mut(&mut self, name: &str) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|scene| scene.name == name)
    }

    /// Check whether a scene with this name exists.
    pub fn has_scene(&self, name: &str) -> bool {
        self.scene(name).is_some()
    }

    /// Iterate over all scenes in order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Number of scenes in the project.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Remove a scene by name, returning it if it existed.
    pub fn remove_scene(&mut self, name: &str) -> Option<Scene> {
        let index = self.scenes.iter().position(|scene| scene.name == name)?;
        Some(self.scenes.remove(index))
    }
}
