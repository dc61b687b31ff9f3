use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The subject does not declare a property with this name
    #[error("{subject} has no property named {name:?}")]
    UnknownProperty { subject: &'static str, name: String },
}
