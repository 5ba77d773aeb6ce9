//! Registry errors.

/// An error that can occur when using a route registry.
///
/// Both variants denote a mistake in the code that declares the routes: they are meant to be
/// fixed, not retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A route with the same name was already registered.
    #[error("a route named `{name}` is already registered")]
    DuplicateRouteName {
        /// The name of the route.
        name: String,
    },

    /// The registry does not contain any route yet.
    #[error("no route was registered yet")]
    EmptyRegistry,
}
