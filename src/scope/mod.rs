//! Scoped variable resolution.
//!
//! A flat identifier in an event sheet can refer to an object variable, a
//! scene variable or a project-wide global. [`ScopeChain`] decides which,
//! by consulting an ordered list of containers and letting the first match
//! win.

mod resolve;

pub use resolve::{ScopeChain, missing_variable};
