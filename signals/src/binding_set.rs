use crate::binder::{BinderId, TBindingGuard};

/// The bindings held by one observer, possibly across several subjects.
///
/// Dropping the set (or calling [`BindingSet::clear`]) releases every binding,
/// so an observer that owns its set is never called back after it is gone.
#[derive(Default)]
pub struct BindingSet {
    guards: Vec<Box<dyn TBindingGuard>>,
}

impl BindingSet {
    pub fn new() -> Self { Self::default() }

    pub fn push<G: TBindingGuard + 'static>(&mut self, guard: G) { self.guards.push(Box::new(guard)); }

    pub fn len(&self) -> usize { self.guards.len() }

    pub fn is_empty(&self) -> bool { self.guards.is_empty() }

    /// Number of bindings registered with the given binder
    pub fn count_for(&self, binder: BinderId) -> usize { self.guards.iter().filter(|guard| guard.binder_id() == binder).count() }

    /// Release every binding
    pub fn clear(&mut self) { self.guards.clear(); }
}

impl std::fmt::Debug for BindingSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_struct("BindingSet").field("bindings", &self.guards.len()).finish() }
}

impl<G: TBindingGuard + 'static> Extend<G> for BindingSet {
    fn extend<I: IntoIterator<Item = G>>(&mut self, iter: I) {
        for guard in iter {
            self.push(guard);
        }
    }
}
