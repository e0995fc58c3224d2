//! Dynamically-typed variable values.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named children of a structure variable, in declaration order.
type Children = IndexMap<SmolStr, Variable, FxBuildHasher>;

// ============================================================================
// VARIABLE
// ============================================================================

/// The type of a [`Variable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Number,
    String,
    Boolean,
    Structure,
    Array,
}

/// A dynamically-typed scripting value.
///
/// Event sheets are untyped: a condition can compare a string variable to a
/// number and expect something sensible. Reads therefore never fail — the
/// `as_*` accessors coerce across types, and anything unconvertible reads
/// as the target type's zero value (`0.0`, `""`, `false`).
///
/// The default variable is `Number(0.0)`, matching what a freshly declared
/// (or missing, see [`crate::scope::missing_variable`]) variable reads as.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Variable {
    Number(f64),
    String(SmolStr),
    Boolean(bool),
    /// Named children, declaration order preserved.
    Structure(Children),
    Array(Vec<Variable>),
}

impl Default for Variable {
    fn default() -> Self {
        Variable::Number(0.0)
    }
}

impl Variable {
    /// Create a number variable.
    #[inline]
    pub const fn number(value: f64) -> Self {
        Variable::Number(value)
    }

    /// Create a string variable.
    #[inline]
    pub fn string(value: impl Into<SmolStr>) -> Self {
        Variable::String(value.into())
    }

    /// Create a boolean variable.
    #[inline]
    pub const fn boolean(value: bool) -> Self {
        Variable::Boolean(value)
    }

    /// Create an empty structure variable.
    pub fn structure() -> Self {
        Variable::Structure(Children::default())
    }

    /// Create an empty array variable.
    pub const fn array() -> Self {
        Variable::Array(Vec::new())
    }

    /// Get the type of this variable.
    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::Number(_) => VariableKind::Number,
            Variable::String(_) => VariableKind::String,
            Variable::Boolean(_) => VariableKind::Boolean,
            Variable::Structure(_) => VariableKind::Structure,
            Variable::Array(_) => VariableKind::Array,
        }
    }

    // ------------------------------------------------------------------
    // Coercing reads
    // ------------------------------------------------------------------

    /// Read this variable as a number.
    ///
    /// Strings are parsed (`"3.5"` → `3.5`, unparsable → `0.0`), booleans
    /// read as `1.0`/`0.0`, structures and arrays as `0.0`.
    pub fn as_number(&self) -> f64 {
        match self {
            Variable::Number(v) => *v,
            Variable::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Variable::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Variable::Structure(_) | Variable::Array(_) => 0.0,
        }
    }

    /// Read this variable as a string.
    ///
    /// Numbers render without a trailing `.0` for integral values, booleans
    /// as `"true"`/`"false"`, structures and arrays as the empty string.
    pub fn as_string(&self) -> SmolStr {
        match self {
            Variable::Number(v) => format_number(*v),
            Variable::String(s) => s.clone(),
            Variable::Boolean(b) => SmolStr::new_static(if *b { "true" } else { "false" }),
            Variable::Structure(_) | Variable::Array(_) => SmolStr::default(),
        }
    }

    /// Read this variable as a boolean.
    ///
    /// Numbers read as `value != 0`, strings as true unless empty, `"0"` or
    /// `"false"`, structures and arrays as true when non-empty.
    pub fn as_bool(&self) -> bool {
        match self {
            Variable::Number(v) => *v != 0.0,
            Variable::String(s) => !s.is_empty() && s != "0" && s != "false",
            Variable::Boolean(b) => *b,
            Variable::Structure(children) => !children.is_empty(),
            Variable::Array(items) => !items.is_empty(),
        }
    }

    // ------------------------------------------------------------------
    // Structure children
    // ------------------------------------------------------------------

    /// Get a child of a structure variable by name.
    ///
    /// Returns `None` for non-structures and missing children alike.
    pub fn child(&self, name: &str) -> Option<&Variable> {
        match self {
            Variable::Structure(children) => children.get(name),
            _ => None,
        }
    }

    /// Get a mutable child of a structure variable by name.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Variable> {
        match self {
            Variable::Structure(children) => children.get_mut(name),
            _ => None,
        }
    }

    /// Check whether a structure variable has a child with this name.
    pub fn has_child(&self, name: &str) -> bool {
        matches!(self, Variable::Structure(children) if children.contains_key(name))
    }

    /// Insert or replace a child, converting this variable into a structure
    /// if it is not one already (the previous value is discarded).
    pub fn insert_child(&mut self, name: impl Into<SmolStr>, value: Variable) -> &mut Variable {
        if !matches!(self, Variable::Structure(_)) {
            *self = Variable::structure();
        }
        match self {
            Variable::Structure(children) => {
                let slot = children.entry(name.into()).or_default();
                *slot = value;
                slot
            }
            _ => unreachable!("converted to structure above"),
        }
    }

    // ------------------------------------------------------------------
    // Array items
    // ------------------------------------------------------------------

    /// Get an item of an array variable by index.
    pub fn at(&self, index: usize) -> Option<&Variable> {
        match self {
            Variable::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Append an item, converting this variable into an array if it is not
    /// one already (the previous value is discarded).
    pub fn push(&mut self, value: Variable) {
        if !matches!(self, Variable::Array(_)) {
            *self = Variable::array();
        }
        if let Variable::Array(items) = self {
            items.push(value);
        }
    }

    /// Number of children (structure) or items (array); 0 for primitives.
    pub fn len(&self) -> usize {
        match self {
            Variable::Structure(children) => children.len(),
            Variable::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// True when `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Render a number the way event expressions display it: integral values
/// without a decimal point, everything else via the shortest round-trip form.
fn format_number(v: f64) -> SmolStr {
    if v.is_finite() && v == v.trunc() && v.abs() < 1e15 {
        SmolStr::new(format!("{}", v as i64))
    } else {
        SmolStr::new(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_number() {
        let var = Variable::default();
        assert_eq!(var.kind(), VariableKind::Number);
        assert_eq!(var.as_number(), 0.0);
        assert_eq!(var.as_string(), "0");
        assert!(!var.as_bool());
    }

    #[test]
    fn test_number_coercions() {
        let var = Variable::number(3.5);
        assert_eq!(var.as_number(), 3.5);
        assert_eq!(var.as_string(), "3.5");
        assert!(var.as_bool());

        assert_eq!(Variable::number(42.0).as_string(), "42");
        assert_eq!(Variable::number(-7.0).as_string(), "-7");
    }

    #[test]
    fn test_string_coercions() {
        assert_eq!(Variable::string("12.5").as_number(), 12.5);
        assert_eq!(Variable::string(" 8 ").as_number(), 8.0);
        assert_eq!(Variable::string("hello").as_number(), 0.0);

        assert!(Variable::string("hello").as_bool());
        assert!(!Variable::string("").as_bool());
        assert!(!Variable::string("0").as_bool());
        assert!(!Variable::string("false").as_bool());
    }

    #[test]
    fn test_boolean_coercions() {
        assert_eq!(Variable::boolean(true).as_number(), 1.0);
        assert_eq!(Variable::boolean(false).as_number(), 0.0);
        assert_eq!(Variable::boolean(true).as_string(), "true");
        assert_eq!(Variable::boolean(false).as_string(), "false");
    }

    #[test]
    fn test_structure_children() {
        let mut var = Variable::structure();
        var.insert_child("hp", Variable::number(100.0));
        var.insert_child("name", Variable::string("slime"));

        assert_eq!(var.kind(), VariableKind::Structure);
        assert_eq!(var.len(), 2);
        assert!(var.has_child("hp"));
        assert!(!var.has_child("mp"));
        assert_eq!(var.child("hp").unwrap().as_number(), 100.0);
        assert!(var.child("missing").is_none());

        // Primitives have no children
        assert!(Variable::number(1.0).child("hp").is_none());
    }

    #[test]
    fn test_insert_child_converts_to_structure() {
        let mut var = Variable::number(5.0);
        var.insert_child("x", Variable::number(1.0));
        assert_eq!(var.kind(), VariableKind::Structure);
        assert_eq!(var.child("x").unwrap().as_number(), 1.0);
    }

    #[test]
    fn test_array_items() {
        let mut var = Variable::array();
        var.push(Variable::number(1.0));
        var.push(Variable::string("two"));

        assert_eq!(var.len(), 2);
        assert_eq!(var.at(0).unwrap().as_number(), 1.0);
        assert_eq!(var.at(1).unwrap().as_string(), "two");
        assert!(var.at(2).is_none());
    }
}
