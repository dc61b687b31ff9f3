use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use tracing::{debug, error, trace};

use crate::context::NotifyDepth;
use crate::error::BindError;
use crate::listener::{IntoListener, Listener};
use crate::property::Property;

/// A unique identifier for a binder that cannot be forged or extracted.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BinderId(usize);

impl std::fmt::Display for BinderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Which listeners a registration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<P> {
    Property(P),
    Any,
}

/// The binding registry of a subject.
///
/// Maps each property to the callbacks bound to it, in registration order.
/// Subjects call [`Binder::notify`] after committing a new value; observers call
/// [`Binder::bind`] and keep the returned [`BindingGuard`] for as long as they want updates.
pub struct Binder<P: Property>(Arc<Inner<P>>);

struct Inner<P> {
    // Registration ids only grow, so BTreeMap iteration order is registration order
    listeners: RwLock<HashMap<Slot<P>, BTreeMap<usize, Listener<P>>>>,
    next_id: AtomicUsize,
}

impl<P: Property> Clone for Binder<P> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<P: Property> Default for Binder<P> {
    fn default() -> Self { Self::new() }
}

impl<P: Property> std::fmt::Debug for Binder<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.0.read();
        let total: usize = listeners.values().map(BTreeMap::len).sum();
        f.debug_struct("Binder").field("subject", &P::SUBJECT).field("listeners", &total).finish()
    }
}

impl<P> Inner<P> {
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Slot<P>, BTreeMap<usize, Listener<P>>>> {
        // listeners run outside the lock, so a poisoned lock still holds a consistent map
        self.listeners.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Slot<P>, BTreeMap<usize, Listener<P>>>> {
        self.listeners.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: Property> Binder<P> {
    pub fn new() -> Self { Self(Arc::new(Inner { listeners: RwLock::new(HashMap::new()), next_id: AtomicUsize::new(0) })) }

    /// Get the unique identifier for this binder
    pub fn id(&self) -> BinderId { BinderId(Arc::as_ptr(&self.0) as *const () as usize) }

    /// Bind a listener to the property named `name`.
    ///
    /// Fails with [`BindError::UnknownProperty`] if the subject does not declare that name,
    /// in which case nothing is registered.
    pub fn bind<L>(&self, name: &str, listener: L) -> Result<BindingGuard<P>, BindError>
    where L: IntoListener<P> {
        match P::from_name(name) {
            Some(property) => Ok(self.bind_property(property, listener)),
            None => {
                debug!(subject = P::SUBJECT, name, "rejected binding to unknown property");
                Err(BindError::UnknownProperty { subject: P::SUBJECT, name: name.to_string() })
            }
        }
    }

    /// Bind a listener to a property. Binding the same callback twice registers it twice.
    pub fn bind_property<L>(&self, property: P, listener: L) -> BindingGuard<P>
    where L: IntoListener<P> {
        self.register(Slot::Property(property), listener.into_listener())
    }

    /// Bind a listener to every property of the subject.
    /// These run after the property's own listeners on each notification.
    pub fn bind_all<L>(&self, listener: L) -> BindingGuard<P>
    where L: IntoListener<P> {
        self.register(Slot::Any, listener.into_listener())
    }

    fn register(&self, slot: Slot<P>, listener: Listener<P>) -> BindingGuard<P> {
        let id = self.0.next_id.fetch_add(1, Ordering::Relaxed);
        self.0.write().entry(slot).or_default().insert(id, listener);
        trace!(subject = P::SUBJECT, ?slot, id, "bound listener");
        BindingGuard { inner: Arc::downgrade(&self.0), slot, id }
    }

    /// Number of live listeners bound to `property` (not counting `bind_all` listeners)
    pub fn listener_count(&self, property: P) -> usize {
        self.0.read().get(&Slot::Property(property)).map_or(0, BTreeMap::len)
    }

    /// Invoke every listener bound to `property` in registration order, then every `bind_all` listener.
    ///
    /// Runs synchronously on the calling thread. Listeners are snapshotted before any of them
    /// runs, so a listener may bind, unbind or assign other properties without deadlocking.
    /// A panicking listener is logged and skipped; the remaining listeners still run.
    pub fn notify(&self, property: P) {
        let Some(_depth) = NotifyDepth::enter() else {
            error!(
                subject = P::SUBJECT,
                property = property.name(),
                depth = NotifyDepth::current(),
                "notification nested too deeply, dropping it"
            );
            return;
        };

        // Clone the listeners so no lock is held while they run
        let listeners: Vec<Listener<P>> = {
            let registry = self.0.read();
            let bound = registry.get(&Slot::Property(property)).into_iter().flat_map(BTreeMap::values);
            let any = registry.get(&Slot::Any).into_iter().flat_map(BTreeMap::values);
            bound.chain(any).cloned().collect()
        };

        trace!(subject = P::SUBJECT, property = property.name(), listeners = listeners.len(), "notify");
        for listener in &listeners {
            if let Err(message) = listener.invoke(property) {
                error!(subject = P::SUBJECT, property = property.name(), %message, "listener panicked during notification");
            }
        }
    }
}

/// Trait for abstractly representing any BindingGuard<P>
pub trait TBindingGuard: Send + Sync {
    fn binder_id(&self) -> BinderId;

    /// False once the binder itself has been dropped
    fn is_bound(&self) -> bool;
}

/// A registration handle. Dropping it removes the listener from the binder.
/// The guard does not keep the binder alive.
pub struct BindingGuard<P: Property> {
    inner: Weak<Inner<P>>,
    slot: Slot<P>,
    id: usize,
}

impl<P: Property> BindingGuard<P> {
    /// The property this guard is bound to, or `None` for a `bind_all` registration
    pub fn property(&self) -> Option<P> {
        match self.slot {
            Slot::Property(property) => Some(property),
            Slot::Any => None,
        }
    }

    /// Get the binder ID that this guard is registered with
    pub fn binder_id(&self) -> BinderId {
        // The address stays reserved while this Weak exists, even if the binder is gone
        BinderId(self.inner.as_ptr() as *const () as usize)
    }

    /// Unbind now. Equivalent to dropping the guard.
    pub fn unbind(self) {}
}

impl<P: Property> TBindingGuard for BindingGuard<P> {
    fn binder_id(&self) -> BinderId { self.binder_id() }

    fn is_bound(&self) -> bool { self.inner.strong_count() > 0 }
}

impl<P: Property> std::fmt::Debug for BindingGuard<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingGuard").field("subject", &P::SUBJECT).field("property", &self.property()).field("id", &self.id).finish()
    }
}

impl<P: Property> Drop for BindingGuard<P> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut listeners = inner.write();
            if let Some(bound) = listeners.get_mut(&self.slot) {
                bound.remove(&self.id);
                if bound.is_empty() {
                    listeners.remove(&self.slot);
                }
            }
        }
    }
}
