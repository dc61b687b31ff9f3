use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// A callback invoked when a bound property changes.
/// Notify-only listeners re-read whatever state they need from the subject.
pub enum Listener<P> {
    /// Receives no payload
    NotifyOnly(Arc<dyn Fn() + Send + Sync + 'static>),
    /// Receives the property that changed
    Property(Arc<dyn Fn(P) + Send + Sync + 'static>),
}

impl<P> Clone for Listener<P> {
    fn clone(&self) -> Self {
        match self {
            Listener::NotifyOnly(callback) => Listener::NotifyOnly(callback.clone()),
            Listener::Property(callback) => Listener::Property(callback.clone()),
        }
    }
}

impl<P> std::fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Listener::NotifyOnly(_) => f.write_str("Listener::NotifyOnly"),
            Listener::Property(_) => f.write_str("Listener::Property"),
        }
    }
}

impl<P> Listener<P> {
    /// A listener that receives the property which changed.
    /// Plain closures convert to notify-only listeners, so use this for `Fn(P)` closures.
    pub fn property<F>(callback: F) -> Self
    where F: Fn(P) + Send + Sync + 'static {
        Listener::Property(Arc::new(callback))
    }

    /// Invoke the listener, catching a panic so the caller can carry on with the next one.
    /// Returns the panic message if the listener panicked.
    pub(crate) fn invoke(&self, property: P) -> Result<(), String> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match self {
            Listener::NotifyOnly(callback) => callback(),
            Listener::Property(callback) => callback(property),
        }));
        outcome.map_err(|payload| {
            if let Some(message) = payload.downcast_ref::<&str>() {
                message.to_string()
            } else if let Some(message) = payload.downcast_ref::<String>() {
                message.clone()
            } else {
                "non-string panic payload".to_string()
            }
        })
    }
}

/// Trait for types that can be bound to a property
pub trait IntoListener<P> {
    fn into_listener(self) -> Listener<P>;
}

// Zero-argument closures are the common case: observers re-read the subject when called
impl<F, P> IntoListener<P> for F
where F: Fn() + Send + Sync + 'static
{
    fn into_listener(self) -> Listener<P> { Listener::NotifyOnly(Arc::new(self)) }
}

impl<P> IntoListener<P> for Listener<P> {
    fn into_listener(self) -> Listener<P> { self }
}

impl<P> IntoListener<P> for Arc<dyn Fn() + Send + Sync + 'static> {
    fn into_listener(self) -> Listener<P> { Listener::NotifyOnly(self) }
}

impl<P> IntoListener<P> for Arc<dyn Fn(P) + Send + Sync + 'static> {
    fn into_listener(self) -> Listener<P> { Listener::Property(self) }
}

impl<P> IntoListener<P> for std::sync::mpsc::Sender<P>
where P: Send + 'static
{
    fn into_listener(self) -> Listener<P> {
        Listener::Property(Arc::new(move |property| {
            let _ = self.send(property); // receiver gone, nothing to do
        }))
    }
}

#[cfg(feature = "tokio")]
impl<P> IntoListener<P> for tokio::sync::mpsc::UnboundedSender<P>
where P: Send + 'static
{
    fn into_listener(self) -> Listener<P> {
        Listener::Property(Arc::new(move |property| {
            let _ = self.send(property);
        }))
    }
}
