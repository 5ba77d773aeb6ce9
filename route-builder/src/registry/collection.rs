//! Route collections.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::RouteDefinition;

/// A route table that a registry can export its routes into.
///
/// Implement this for the route table of the router that consumes the definitions.
pub trait RouteCollection: Default {
    /// Add a named route to the collection.
    fn add(&mut self, name: String, route: RouteDefinition);
}

impl RouteCollection for IndexMap<String, RouteDefinition> {
    fn add(&mut self, name: String, route: RouteDefinition) {
        self.insert(name, route);
    }
}

impl RouteCollection for Vec<(String, RouteDefinition)> {
    fn add(&mut self, name: String, route: RouteDefinition) {
        self.push((name, route));
    }
}

/// Routes end up sorted by name rather than in registration order.
impl RouteCollection for BTreeMap<String, RouteDefinition> {
    fn add(&mut self, name: String, route: RouteDefinition) {
        self.insert(name, route);
    }
}
