//! The precedence chain: ordered containers, first match wins.

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::model::{Project, Variable, VariablesContainer};

// ============================================================================
// MISSING-VARIABLE SENTINEL
// ============================================================================

/// The process-wide placeholder returned when no layer holds a variable.
///
/// Immutable and built exactly once. Reads as `0` / `""` / `false`.
static MISSING_VARIABLE: Lazy<Variable> = Lazy::new(Variable::default);

/// The shared sentinel returned by [`ScopeChain::get`] for absent names.
///
/// Callers who need to tell "absent" apart from "present with the default
/// value" must ask [`ScopeChain::has`] first; the sentinel exists so that
/// the hot lookup path always hands back a valid reference instead of an
/// error.
pub fn missing_variable() -> &'static Variable {
    &MISSING_VARIABLE
}

// ============================================================================
// SCOPE CHAIN
// ============================================================================

/// An ordered list of variable containers, consulted highest precedence
/// first.
///
/// The chain is a non-owning view: it borrows every container it layers
/// over, so it can never outlive the project or scene supplying them — the
/// borrow checker enforces the outlives contract that the runtime's
/// evaluation lifecycle relies on. Build one per evaluation context (they
/// are two pointers and a length), query it for every identifier in that
/// context, drop it when the context ends.
///
/// Because layers are live references and no lookup is ever cached, a chain
/// rebuilt after a container changed observes the new state; there is no
/// snapshot to go stale.
///
/// # Precedence
///
/// [`ScopeChain::for_project_and_scene`] layers the scene's variables over
/// the project's globals, so a scene variable shadows a global of the same
/// name. Additional layers (object instance, local blocks) are appended
/// below everything registered so far via [`ScopeChain::push_layer`].
#[derive(Clone, Debug, Default)]
pub struct ScopeChain<'a> {
    /// Highest precedence first. Small and bounded (typically ≤ 4 layers).
    layers: Vec<&'a VariablesContainer>,
}

impl<'a> ScopeChain<'a> {
    /// Build the canonical chain for evaluating events of one scene:
    /// scene variables first, then project globals.
    ///
    /// An unknown scene name is not an error: the scene layer is simply
    /// omitted and lookups fall through to the globals.
    pub fn for_project_and_scene(project: &'a Project, scene_name: &str) -> Self {
        let mut chain = ScopeChain::empty();
        match project.scene(scene_name) {
            Some(scene) => chain.push_layer(scene.variables()),
            None => debug!(scene = scene_name, "unknown scene, omitting scene variables layer"),
        }
        chain.push_layer(project.variables());
        chain
    }

    /// Build a chain with no layers; every lookup reports absence.
    pub fn empty() -> Self {
        ScopeChain { layers: Vec::new() }
    }

    /// Register a container below everything registered so far (lowest
    /// precedence).
    ///
    /// Construction-time only: a chain is assembled, then queried, never
    /// grown mid-evaluation. Registering the same container twice is
    /// harmless — the first occurrence wins.
    pub fn push_layer(&mut self, container: &'a VariablesContainer) {
        self.layers.push(container);
    }

    /// Check whether any layer holds a variable with this name.
    ///
    /// Stops at the first layer that does.
    pub fn has(&self, name: &str) -> bool {
        self.layers.iter().any(|layer| layer.has(name))
    }

    /// Resolve a name to the variable of the highest-precedence layer
    /// holding it.
    ///
    /// Absence is not an error: unknown names resolve to
    /// [`missing_variable`], so expression evaluation proceeds with a
    /// deterministic default instead of halting. Matching is exact and
    /// case-sensitive; the empty string is an ordinary name.
    pub fn get(&self, name: &str) -> &'a Variable {
        for (index, layer) in self.layers.iter().enumerate() {
            if let Some(variable) = layer.get(name) {
                trace!(variable = name, layer = index, "resolved variable");
                return variable;
            }
        }
        trace!(variable = name, "not found in any layer, returning sentinel");
        missing_variable()
    }

    /// Check whether this exact container is one of the chain's layers.
    ///
    /// Identity comparison (same container, not equal contents) — this is
    /// how the runtime decides whether a write targeting a given layer is
    /// in scope, without paying for a variable lookup.
    pub fn has_container(&self, container: &VariablesContainer) -> bool {
        self.layers.iter().any(|layer| std::ptr::eq(*layer, container))
    }

    /// Iterate over the layers, highest precedence first.
    pub fn layers(&self) -> impl Iterator<Item = &'a VariablesContainer> + '_ {
        self.layers.iter().copied()
    }

    /// Number of layers in the chain.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the chain has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScopeKind;

    fn container(entries: &[(&str, f64)]) -> VariablesContainer {
        let mut vars = VariablesContainer::new(ScopeKind::Scene);
        for (name, value) in entries {
            vars.insert(*name, Variable::number(*value));
        }
        vars
    }

    #[test]
    fn test_empty_chain_reports_absence() {
        let chain = ScopeChain::empty();

        assert!(chain.is_empty());
        assert!(!chain.has("x"));
        assert!(std::ptr::eq(chain.get("x"), missing_variable()));
        assert_eq!(chain.get("x").as_number(), 0.0);
    }

    #[test]
    fn test_first_layer_shadows_later_ones() {
        let top = container(&[("score", 0.0)]);
        let bottom = container(&[("score", 100.0)]);

        let mut chain = ScopeChain::empty();
        chain.push_layer(&top);
        chain.push_layer(&bottom);

        assert_eq!(chain.get("score").as_number(), 0.0);
        assert!(std::ptr::eq(chain.get("score"), top.get("score").unwrap()));
    }

    #[test]
    fn test_falls_through_to_lowest_layer() {
        let top = container(&[("score", 0.0)]);
        let bottom = container(&[("lives", 3.0)]);

        let mut chain = ScopeChain::empty();
        chain.push_layer(&top);
        chain.push_layer(&bottom);

        assert!(chain.has("lives"));
        assert_eq!(chain.get("lives").as_number(), 3.0);
    }

    #[test]
    fn test_has_container_is_identity_not_equality() {
        let registered = container(&[("a", 1.0)]);
        let twin = registered.clone();
        let never_registered = container(&[("b", 2.0)]);

        let mut chain = ScopeChain::empty();
        chain.push_layer(&registered);

        assert!(chain.has_container(&registered));
        assert!(!chain.has_container(&twin)); // equal contents, different container
        assert!(!chain.has_container(&never_registered));
    }

    #[test]
    fn test_duplicate_layer_is_harmless() {
        let layer = container(&[("x", 1.0)]);

        let mut chain = ScopeChain::empty();
        chain.push_layer(&layer);
        chain.push_layer(&layer);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.get("x").as_number(), 1.0);
        assert!(chain.has_container(&layer));
    }

    #[test]
    fn test_repeated_gets_are_stable() {
        let layer = container(&[("x", 7.0)]);
        let mut chain = ScopeChain::empty();
        chain.push_layer(&layer);

        let first = chain.get("x");
        let second = chain.get("x");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_empty_name_resolves_like_any_other() {
        let mut vars = VariablesContainer::new(ScopeKind::Local);
        vars.insert("", Variable::number(9.0));

        let mut chain = ScopeChain::empty();
        chain.push_layer(&vars);

        assert!(chain.has(""));
        assert_eq!(chain.get("").as_number(), 9.0);
    }

    #[test]
    fn test_unknown_scene_layer_is_omitted() {
        let mut project = Project::new("Test");
        project.variables_mut().insert("score", Variable::number(100.0));

        let chain = ScopeChain::for_project_and_scene(&project, "NoSuchScene");

        assert_eq!(chain.len(), 1); // globals only
        assert_eq!(chain.get("score").as_number(), 100.0);
    }
}
