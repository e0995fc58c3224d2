//! Named variable collections.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::variable::Variable;

// ============================================================================
// CONTAINER
// ============================================================================

/// Which layer of the runtime owns a container.
///
/// Purely informational: resolution precedence is determined by the order
/// containers are registered in a [`crate::ScopeChain`], never by this tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScopeKind {
    /// Project-wide variables, shared by every scene.
    Global,
    /// Variables of a single scene.
    Scene,
    /// Variables of an object instance.
    Object,
    /// Variables of a locally-scoped block (e.g. a custom event).
    Local,
}

/// Error for container operations that require a name to be free or taken.
///
/// Lookup absence is deliberately NOT represented here: [`VariablesContainer::get`]
/// returns an `Option` and scoped lookup falls back to a sentinel, because
/// reading an undeclared variable is a normal event-sheet occurrence, not a
/// fault.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("a variable named `{0}` already exists")]
    AlreadyExists(SmolStr),
    #[error("no variable named `{0}`")]
    NotFound(SmolStr),
}

/// An ordered, keyed set of named variables.
///
/// Keys are matched exactly: case-sensitive, no normalization, and the
/// empty string is a valid name like any other. Declaration order is
/// preserved so editors can display variables the way they were authored.
///
/// A container knows which runtime layer owns it via [`ScopeKind`], but it
/// has no notion of shadowing on its own — layering is the job of
/// [`crate::ScopeChain`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariablesContainer {
    kind: ScopeKind,
    variables: IndexMap<SmolStr, Variable, FxBuildHasher>,
}

impl VariablesContainer {
    /// Create a new empty container for the given layer.
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            variables: IndexMap::default(),
        }
    }

    /// The runtime layer this container belongs to.
    #[inline]
    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Check whether a variable with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Get a variable by name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Get a mutable variable by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.get_mut(name)
    }

    /// Insert a variable, replacing any existing variable with the same
    /// name. Returns a mutable reference to the stored variable.
    pub fn insert(&mut self, name: impl Into<SmolStr>, variable: Variable) -> &mut Variable {
        let slot = self.variables.entry(name.into()).or_default();
        *slot = variable;
        slot
    }

    /// Declare a new variable, failing if the name is already taken.
    pub fn declare(
        &mut self,
        name: impl Into<SmolStr>,
        variable: Variable,
    ) -> Result<&mut Variable, ContainerError> {
        let name = name.into();
        if self.variables.contains_key(&name) {
            return Err(ContainerError::AlreadyExists(name));
        }
        Ok(self.variables.entry(name).or_insert(variable))
    }

    /// Rename a variable, keeping its position in declaration order.
    pub fn rename(&mut self, old_name: &str, new_name: impl Into<SmolStr>) -> Result<(), ContainerError> {
        let new_name = new_name.into();
        if self.variables.contains_key(&new_name) {
            return Err(ContainerError::AlreadyExists(new_name));
        }
        let Some(index) = self.variables.get_index_of(old_name) else {
            return Err(ContainerError::NotFound(SmolStr::new(old_name)));
        };
        let Some((_, variable)) = self.variables.shift_remove_index(index) else {
            return Err(ContainerError::NotFound(SmolStr::new(old_name)));
        };
        self.variables.shift_insert(index, new_name, variable);
        Ok(())
    }

    /// Remove a variable by name, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Variable> {
        self.variables.shift_remove(name)
    }

    /// Get a variable by position in declaration order.
    pub fn at(&self, index: usize) -> Option<&Variable> {
        self.variables.get_index(index).map(|(_, v)| v)
    }

    /// Get a variable's name by position in declaration order.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.variables.get_index(index).map(|(name, _)| name.as_str())
    }

    /// Get a variable's position in declaration order.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.variables.get_index_of(name)
    }

    /// Iterate over all variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.variables.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Number of variables in the container.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the container holds no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Remove all variables.
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}

// ============================================================================
// JSON INTERCHANGE (optional)
// ============================================================================

#[cfg(feature = "serde")]
impl VariablesContainer {
    /// Serialize the container to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a container from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
