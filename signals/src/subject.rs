use crate::{BindError, Binder, BindingGuard, IntoListener, Property};

/// A model object whose properties can be observed.
///
/// Implementors own a [`Binder`] and call [`Binder::notify`] after every committed
/// assignment of a property, once their own state lock has been released.
pub trait Subject {
    type Property: Property;

    /// The subject's binding registry
    fn binder(&self) -> &Binder<Self::Property>;

    /// Bind a listener to the property named `name`, validating the name
    fn bind_to<L>(&self, name: &str, listener: L) -> Result<BindingGuard<Self::Property>, BindError>
    where L: IntoListener<Self::Property> {
        self.binder().bind(name, listener)
    }

    /// Bind a listener to a property
    fn bind_property<L>(&self, property: Self::Property, listener: L) -> BindingGuard<Self::Property>
    where L: IntoListener<Self::Property> {
        self.binder().bind_property(property, listener)
    }
}
