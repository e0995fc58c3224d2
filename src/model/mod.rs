//! The variable data model the runtime evaluates against.
//!
//! This module provides the types the scoped lookup is composed over:
//! - [`Variable`] - A dynamically-typed scripting value
//! - [`VariablesContainer`] - An ordered, keyed set of named variables
//! - [`Project`], [`Scene`] - Owners of the global and per-scene containers
//!
//! This module has NO dependencies on other varscope modules.

mod container;
mod project;
mod variable;

pub use container::{ContainerError, ScopeKind, VariablesContainer};
pub use project::{Project, Scene};
pub use variable::{Variable, VariableKind};
