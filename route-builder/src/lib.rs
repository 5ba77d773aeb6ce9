//! Route builder
//!
//! Fluent builder for declarative web-route metadata, and a registry of uniquely named routes.
//!
//! Routes are declared against a [`RouteRegistry`], which hands back the created
//! [`RouteDefinition`] for further configuration. The registry can then be exported, in
//! declaration order, for a router or an access checker to consume.
//!
//! ```rust
//! use route_builder::RouteRegistry;
//!
//! let mut registry = RouteRegistry::new();
//!
//! registry
//!     .get("node.view", "/node/{node}")?
//!     .controller_method("NodeController", "view")
//!     .title("Content")
//!     .requires_any_permission(["access content", "administer nodes"])
//!     .set_parameter_converter("node", "entity:node");
//!
//! let route = registry.route("node.view").unwrap();
//! assert_eq!(route.requirement("_permission"), Some("access content+administer nodes"));
//! # Ok::<(), route_builder::RegistryError>(())
//! ```
//!
//! # Features
//!
//! - `examples`: Dependencies of the demos. **Not enabled by default.**

mod definition;
mod registry;

pub use definition::{Join, OptionValue, ParameterConverters, RouteDefinition, keys};
pub use registry::{
    RegistryError, RegistryOptions, RegistryOptionsFromEnvError, RouteCollection, RouteRegistry,
    SharedRouteRegistry,
};
