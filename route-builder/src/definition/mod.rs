//! Route definitions.

use std::fmt::{self, Display};

use http::Method;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Serialize, Serializer};

mod convenience;
pub mod keys;
mod option;
mod path;

pub use convenience::Join;
pub use option::{OptionValue, ParameterConverters};

/// The metadata of a single route.
///
/// A definition is bound to its path template for its whole life. Everything else only grows or
/// gets overwritten: nothing is ever removed.
///
/// All setters return the definition itself, so calls can be chained:
///
/// ```rust
/// use route_builder::RouteDefinition;
///
/// let mut route = RouteDefinition::new("/node/{node}");
/// route
///     .accepts_get()
///     .controller_method("NodeController", "view")
///     .requires_any_permission(["access content", "administer nodes"])
///     .set_parameter_converter("node", "entity:node");
///
/// assert_eq!(route.default("_controller"), Some("NodeController::view"));
/// assert_eq!(
///     route.requirement("_permission"),
///     Some("access content+administer nodes")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDefinition {
    path: String,

    #[serde(serialize_with = "serialize_methods")]
    methods: Vec<Method>,

    defaults: IndexMap<String, String>,
    requirements: IndexMap<String, String>,
    options: IndexMap<String, OptionValue>,

    /// Ignore methods that were already accepted.
    #[serde(skip)]
    deduplicate_methods: bool,
}

fn serialize_methods<S: Serializer>(methods: &[Method], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(methods.iter().map(Method::as_str))
}

impl RouteDefinition {
    /// Create a new definition for the specified path template.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
            defaults: IndexMap::new(),
            requirements: IndexMap::new(),
            options: IndexMap::new(),
            deduplicate_methods: false,
        }
    }

    /// Skip methods that are already accepted instead of accepting them twice.
    pub(crate) fn with_deduplicated_methods(mut self, deduplicate_methods: bool) -> Self {
        self.deduplicate_methods = deduplicate_methods;
        self
    }

    /// The path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The names of the `{param}` placeholders of the path template, in order.
    pub fn path_parameters(&self) -> Vec<&str> {
        path::placeholders(&self.path).collect()
    }

    /// The accepted methods, in the order they were added.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn defaults(&self) -> &IndexMap<String, String> {
        &self.defaults
    }

    pub fn requirements(&self) -> &IndexMap<String, String> {
        &self.requirements
    }

    pub fn options(&self) -> &IndexMap<String, OptionValue> {
        &self.options
    }

    /// Replace the accepted methods.
    pub fn set_methods(&mut self, methods: impl IntoIterator<Item = Method>) -> &mut Self {
        self.methods.clear();

        for method in methods {
            self.add_method(method);
        }

        self
    }

    /// Accept one more method.
    ///
    /// The method is appended as-is, even if it was already accepted, unless the definition was
    /// created by a registry configured to deduplicate methods.
    pub fn add_method(&mut self, method: Method) -> &mut Self {
        if self.deduplicate_methods && self.methods.contains(&method) {
            return self;
        }

        self.methods.push(method);
        self
    }

    /// Set a default value.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Get a default value.
    pub fn default(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    /// Set a requirement.
    pub fn set_requirement(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.requirements.insert(key.into(), value.into());
        self
    }

    /// Get a requirement.
    pub fn requirement(&self, key: &str) -> Option<&str> {
        self.requirements.get(key).map(String::as_str)
    }

    /// Set an option.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get an option.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Append an authentication mechanism to the `_auth` option.
    ///
    /// Mechanisms keep their insertion order and are never deduplicated.
    pub fn add_auth_mechanism(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();

        match self.options.get_mut(keys::AUTH) {
            Some(OptionValue::List(mechanisms)) => mechanisms.push(name),
            _ => {
                self.options
                    .insert(keys::AUTH.to_owned(), OptionValue::List(vec![name]));
            }
        }

        self
    }

    /// Set the converter of a path parameter in the `parameters` option.
    ///
    /// A converter set for the same parameter earlier is replaced. Converters of the other
    /// parameters are left untouched.
    pub fn set_parameter_converter(
        &mut self,
        parameter: impl Into<String>,
        converter: impl Into<String>,
    ) -> &mut Self {
        let parameter = parameter.into();

        self.warn_if_not_a_path_parameter(&parameter, "parameter converter");

        match self.options.get_mut(keys::PARAMETERS) {
            Some(OptionValue::Parameters(converters)) => {
                converters.set(parameter, converter);
            }
            _ => {
                let mut converters = ParameterConverters::new();
                converters.set(parameter, converter);

                self.options
                    .insert(keys::PARAMETERS.to_owned(), converters.into());
            }
        }

        self
    }

    /// Get the parameter converters, if any were set.
    pub fn parameter_converters(&self) -> Option<&ParameterConverters> {
        self.option(keys::PARAMETERS)
            .and_then(OptionValue::as_parameters)
    }

    /// Get the authentication mechanisms, if any were set.
    pub fn auth_mechanisms(&self) -> Option<&[String]> {
        self.option(keys::AUTH).and_then(OptionValue::as_list)
    }

    fn warn_if_not_a_path_parameter(&self, parameter: &str, what: &str) {
        if !path::placeholders(&self.path).any(|name| name == parameter) {
            tracing::warn!(
                "Setting a {what} for `{parameter}`, which is not a parameter of path `{}`.",
                self.path
            );
        }
    }
}

impl Display for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.methods.is_empty() {
            write!(f, "ANY {}", self.path)
        } else {
            write!(f, "{} {}", self.methods.iter().join("|"), self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_method_keeps_order_and_duplicates() {
        let mut route = RouteDefinition::new("/");
        route
            .add_method(Method::GET)
            .add_method(Method::PATCH)
            .add_method(Method::PUT)
            .add_method(Method::PATCH);

        assert_eq!(
            route.methods(),
            &[Method::GET, Method::PATCH, Method::PUT, Method::PATCH]
        );
    }

    #[test]
    fn test_add_method_deduplicated() {
        let mut route = RouteDefinition::new("/").with_deduplicated_methods(true);
        route
            .add_method(Method::GET)
            .add_method(Method::GET)
            .add_method(Method::POST);

        assert_eq!(route.methods(), &[Method::GET, Method::POST]);
    }

    #[test]
    fn test_set_methods_replaces() {
        let mut route = RouteDefinition::new("/");
        route.add_method(Method::GET);
        route.set_methods([Method::POST, Method::DELETE]);

        assert_eq!(route.methods(), &[Method::POST, Method::DELETE]);
    }

    #[test]
    fn test_generic_accessors() {
        let mut route = RouteDefinition::new("/");

        assert_eq!(route.default("anything"), None);
        assert_eq!(route.requirement("anything"), None);
        assert_eq!(route.option("anything"), None);

        route
            .set_default("anything", "a")
            .set_requirement("anything", "b")
            .set_option("anything", "c")
            .set_default("anything", "d");

        assert_eq!(route.default("anything"), Some("d"));
        assert_eq!(route.requirement("anything"), Some("b"));
        assert_eq!(route.option("anything"), Some(&OptionValue::from("c")));
    }

    #[test]
    fn test_add_auth_mechanism() {
        let mut route = RouteDefinition::new("/");
        assert_eq!(route.auth_mechanisms(), None);

        route
            .add_auth_mechanism("basic_auth")
            .add_auth_mechanism("cookie")
            .add_auth_mechanism("basic_auth");

        assert_eq!(
            route.auth_mechanisms(),
            Some(&["basic_auth".to_owned(), "cookie".to_owned(), "basic_auth".to_owned()][..])
        );
    }

    #[test]
    fn test_add_auth_mechanism_replaces_non_list() {
        let mut route = RouteDefinition::new("/");
        route.set_option(keys::AUTH, "basic_auth").add_auth_mechanism("cookie");

        assert_eq!(route.auth_mechanisms(), Some(&["cookie".to_owned()][..]));
    }

    #[test]
    fn test_set_parameter_converter() {
        let mut route = RouteDefinition::new("/page/{node}/{another_param}");
        assert_eq!(route.parameter_converters(), None);

        route.set_parameter_converter("node", "entity:node");
        route.set_parameter_converter("another_param", "another_converter");
        route.set_parameter_converter("node", "entity:media");

        let converters = route.parameter_converters().unwrap();
        assert_eq!(converters.len(), 2);
        assert_eq!(converters.get("node"), Some("entity:media"));
        assert_eq!(converters.get("another_param"), Some("another_converter"));
    }

    #[test]
    fn test_path_parameters() {
        let route = RouteDefinition::new("/page/{node}/{another_param}");

        assert_eq!(route.path_parameters(), vec!["node", "another_param"]);
    }

    #[test]
    fn test_display() {
        let mut route = RouteDefinition::new("/node/{node}");
        insta::assert_snapshot!(route, @"ANY /node/{node}");

        route.add_method(Method::GET).add_method(Method::POST);
        insta::assert_snapshot!(route, @"GET|POST /node/{node}");
    }
}
