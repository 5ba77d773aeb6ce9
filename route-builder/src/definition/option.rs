//! Route option values.

use indexmap::IndexMap;
use serde::{Serialize, ser::SerializeMap};

/// The value of a route option.
///
/// Most options are plain strings, but a few well-known ones carry more structure: the
/// authentication mechanisms are an ordered list and the parameter converters a mapping keyed by
/// parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A scalar value.
    Scalar(String),

    /// An ordered list of values.
    List(Vec<String>),

    /// The per-parameter converters.
    Parameters(ParameterConverters),
}

impl OptionValue {
    /// Get the value as a string, if it is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Get the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Get the value as parameter converters, if it is one.
    pub fn as_parameters(&self) -> Option<&ParameterConverters> {
        match self {
            Self::Parameters(converters) => Some(converters),
            _ => None,
        }
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<ParameterConverters> for OptionValue {
    fn from(converters: ParameterConverters) -> Self {
        Self::Parameters(converters)
    }
}

/// The converters to apply to the path parameters of a route, keyed by parameter name.
///
/// Each parameter has at most one converter: setting it again replaces the previous one, in place.
///
/// Serializes as `{param: {type: converter}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterConverters(IndexMap<String, String>);

impl ParameterConverters {
    /// Create an empty set of converters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the converter for a parameter, returning the previous one if any.
    pub fn set(
        &mut self,
        parameter: impl Into<String>,
        converter: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(parameter.into(), converter.into())
    }

    /// Get the converter for a parameter.
    pub fn get(&self, parameter: &str) -> Option<&str> {
        self.0.get(parameter).map(String::as_str)
    }

    /// Iterate over the `(parameter, converter)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P, C> FromIterator<(P, C)> for ParameterConverters
where
    P: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(p, c)| (p.into(), c.into()))
                .collect(),
        )
    }
}

#[derive(Serialize)]
struct ConverterEntry<'a> {
    #[serde(rename = "type")]
    converter: &'a str,
}

impl Serialize for ParameterConverters {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (parameter, converter) in &self.0 {
            map.serialize_entry(parameter, &ConverterEntry { converter })?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut converters = ParameterConverters::new();

        assert_eq!(converters.set("node", "entity:node"), None);
        assert_eq!(converters.set("user", "entity:user"), None);
        assert_eq!(
            converters.set("node", "entity:media"),
            Some("entity:node".to_owned())
        );

        assert_eq!(
            converters.iter().collect::<Vec<_>>(),
            vec![("node", "entity:media"), ("user", "entity:user")]
        );
    }

    #[test]
    fn test_parameter_converters_serialization() {
        let converters: ParameterConverters =
            [("node", "entity:node"), ("another_param", "another_converter")]
                .into_iter()
                .collect();

        assert_eq!(
            serde_json::to_value(OptionValue::from(converters)).unwrap(),
            serde_json::json!({
                "node": { "type": "entity:node" },
                "another_param": { "type": "another_converter" },
            })
        );
    }

    #[test]
    fn test_option_value_accessors() {
        let scalar = OptionValue::from("my_theme");
        assert_eq!(scalar.as_str(), Some("my_theme"));
        assert_eq!(scalar.as_list(), None);

        let list = OptionValue::from(vec!["cookie".to_owned()]);
        assert_eq!(list.as_list(), Some(&["cookie".to_owned()][..]));
        assert_eq!(list.as_parameters(), None);
    }
}
