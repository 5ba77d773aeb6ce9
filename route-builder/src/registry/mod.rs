//! The route registry.

use http::Method;
use indexmap::{IndexMap, map::Entry};
use serde::{Serialize, Serializer};

use crate::RouteDefinition;

mod collection;
mod error;
mod options;
mod shared;

pub use collection::RouteCollection;
pub use error::RegistryError;
pub use options::{RegistryOptions, RegistryOptionsFromEnvError};
pub use shared::SharedRouteRegistry;

/// A set of uniquely named route definitions, kept in registration order.
///
/// A name can only be registered once: the only way to reuse it is to [`clear`](Self::clear) the
/// whole registry.
///
/// ```rust
/// use route_builder::{RegistryError, RouteRegistry};
///
/// let mut registry = RouteRegistry::new();
///
/// registry.get("home", "/")?.title("Home");
/// registry
///     .post("node.add", "/node/add")?
///     .requires_all_permissions(["create content"]);
///
/// assert_eq!(registry.current()?.path(), "/node/add");
/// assert!(matches!(
///     registry.get("home", "/home"),
///     Err(RegistryError::DuplicateRouteName { .. })
/// ));
/// # Ok::<(), RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    /// The routes, by name.
    routes: IndexMap<String, RouteDefinition>,

    /// The options that apply to every new route.
    options: RegistryOptions,
}

impl RouteRegistry {
    /// Create a new, empty registry with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty registry with the specified options.
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            routes: IndexMap::new(),
            options,
        }
    }

    /// Create a new, empty registry with its options read from the environment.
    pub fn with_options_from_env() -> Result<Self, RegistryOptionsFromEnvError> {
        Ok(Self::with_options(RegistryOptions::from_env()?))
    }

    /// The options of the registry.
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Register a new route definition for the specified path.
    ///
    /// Fails if a route with the same name is already registered, in which case the registry is
    /// left untouched.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<&mut RouteDefinition, RegistryError> {
        match self.routes.entry(name.into()) {
            Entry::Occupied(entry) => {
                tracing::warn!(
                    "Route `{}` is already registered (as `{}`).",
                    entry.key(),
                    entry.get()
                );

                Err(RegistryError::DuplicateRouteName {
                    name: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                let route = RouteDefinition::new(path)
                    .with_deduplicated_methods(self.options.deduplicate_methods);

                tracing::debug!("Registering route `{}` for `{}`.", entry.key(), route.path());

                Ok(entry.insert(route))
            }
        }
    }

    /// Register a new route definition that accepts the specified method.
    pub fn create_with_method(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        method: Method,
    ) -> Result<&mut RouteDefinition, RegistryError> {
        Ok(self.create(name, path)?.add_method(method))
    }

    /// Register a new `GET` route.
    pub fn get(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<&mut RouteDefinition, RegistryError> {
        self.create_with_method(name, path, Method::GET)
    }

    /// Register a new `PUT` route.
    pub fn put(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<&mut RouteDefinition, RegistryError> {
        self.create_with_method(name, path, Method::PUT)
    }

    /// Register a new `PATCH` route.
    pub fn patch(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<&mut RouteDefinition, RegistryError> {
        self.create_with_method(name, path, Method::PATCH)
    }

    /// Register a new `POST` route.
    pub fn post(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<&mut RouteDefinition, RegistryError> {
        self.create_with_method(name, path, Method::POST)
    }

    /// Register a new `DELETE` route.
    pub fn delete(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<&mut RouteDefinition, RegistryError> {
        self.create_with_method(name, path, Method::DELETE)
    }

    /// Get the most recently registered route.
    pub fn current(&self) -> Result<&RouteDefinition, RegistryError> {
        self.routes
            .last()
            .map(|(_, route)| route)
            .ok_or(RegistryError::EmptyRegistry)
    }

    /// Get the most recently registered route, for further modification.
    pub fn current_mut(&mut self) -> Result<&mut RouteDefinition, RegistryError> {
        self.routes
            .last_mut()
            .map(|(_, route)| route)
            .ok_or(RegistryError::EmptyRegistry)
    }

    /// Get a route by name.
    pub fn route(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.get(name)
    }

    /// Get a route by name, for further modification.
    pub fn route_mut(&mut self, name: &str) -> Option<&mut RouteDefinition> {
        self.routes.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over the routes, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteDefinition)> {
        self.routes.iter().map(|(name, route)| (name.as_str(), route))
    }

    /// Remove all routes.
    ///
    /// Every name becomes available again.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} registered route(s).", self.routes.len());

        self.routes.clear();
    }

    /// The routes, by name, in registration order.
    pub fn to_mapping(&self) -> &IndexMap<String, RouteDefinition> {
        &self.routes
    }

    /// Export the routes into a route collection, in registration order.
    pub fn to_collection<C: RouteCollection>(&self) -> C {
        let mut collection = C::default();

        for (name, route) in self.to_mapping() {
            collection.add(name.clone(), route.clone());
        }

        collection
    }
}

impl Serialize for RouteRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.routes.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a RouteRegistry {
    type Item = (&'a String, &'a RouteDefinition);
    type IntoIter = indexmap::map::Iter<'a, String, RouteDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
