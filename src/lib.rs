//! # varscope
//!
//! Core library for variable storage and scoped variable resolution in an
//! event-sheet scripting runtime.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! scope   → precedence-ordered lookup over layered containers
//!   ↓
//! model   → variables, containers, and their project/scene owners
//! ```
//!
//! Event sheets read and write variables through a flat identifier
//! ("score", "playerHealth"). Which concrete variable that identifier
//! denotes depends on where evaluation is happening: an object instance's
//! own variables shadow the scene's, and the scene's shadow the project's
//! globals. [`ScopeChain`] captures that precedence chain as a cheap,
//! non-owning view built once per evaluation context:
//!
//! ```
//! use varscope::{Project, ScopeChain, Variable};
//!
//! let mut project = Project::new("MyGame");
//! project
//!     .variables_mut()
//!     .insert("score", Variable::number(100.0));
//! let scene = project.insert_scene("Level1");
//! scene.variables_mut().insert("score", Variable::number(0.0));
//!
//! let scopes = ScopeChain::for_project_and_scene(&project, "Level1");
//! assert_eq!(scopes.get("score").as_number(), 0.0); // scene shadows global
//! ```

/// Variables, containers, and the project/scene model that owns them.
pub mod model;

/// Scoped resolution: layered containers, precedence, the missing sentinel.
pub mod scope;

// Re-export commonly needed items
pub use model::{
    ContainerError, Project, Scene, ScopeKind, Variable, VariableKind, VariablesContainer,
};
pub use scope::{ScopeChain, missing_variable};
