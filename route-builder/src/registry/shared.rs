//! A shareable route registry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{RegistryError, RouteRegistry};
use crate::RouteDefinition;

/// A route registry that can be shared and populated from several places, possibly concurrently.
///
/// Cloning the handle does not clone the routes: all clones refer to the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRouteRegistry(Arc<Mutex<RouteRegistry>>);

impl SharedRouteRegistry {
    /// Share an existing registry.
    pub fn new(registry: RouteRegistry) -> Self {
        Self(Arc::new(Mutex::new(registry)))
    }

    // Poisoning is ignored: a panicking closure can at worst leave one route partially configured.
    fn lock(&self) -> MutexGuard<'_, RouteRegistry> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new route and configure it while the registry is locked.
    pub fn register<F>(
        &self,
        name: impl Into<String>,
        path: impl Into<String>,
        configure: F,
    ) -> Result<(), RegistryError>
    where
        F: FnOnce(&mut RouteDefinition),
    {
        configure(self.lock().create(name, path)?);

        Ok(())
    }

    /// Run a function with exclusive access to the registry.
    pub fn with<T>(&self, f: impl FnOnce(&mut RouteRegistry) -> T) -> T {
        f(&mut self.lock())
    }

    /// Remove all routes.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Get a copy of the registry as it currently is.
    pub fn snapshot(&self) -> RouteRegistry {
        self.lock().clone()
    }
}

impl From<RouteRegistry> for SharedRouteRegistry {
    fn from(registry: RouteRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_concurrent_registration() {
        let registry = SharedRouteRegistry::default();

        let handles = (0..8)
            .map(|i| {
                let registry = registry.clone();

                thread::spawn(move || {
                    registry.register(format!("route.{i}"), format!("/route/{i}"), |route| {
                        route.accepts_get();
                    })
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_duplicate_registration() {
        let registry = SharedRouteRegistry::default();

        registry.register("home", "/", |_| {}).unwrap();

        assert_eq!(
            registry.register("home", "/", |_| unreachable!()),
            Err(RegistryError::DuplicateRouteName {
                name: "home".to_owned()
            })
        );
    }

    #[test]
    fn test_clear_and_snapshot() {
        let registry = SharedRouteRegistry::from(RouteRegistry::new());

        registry
            .register("home", "/", |route| {
                route.title("Home");
            })
            .unwrap();

        let snapshot = registry.snapshot();
        registry.clear();

        assert!(registry.is_empty());
        assert_eq!(snapshot.route("home").unwrap().default("_title"), Some("Home"));
        assert!(registry.with(|registry| registry.get("home", "/").is_ok()));
    }
}
