//! Registry options.

use std::env::VarError;

/// The options for a route registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Whether accepting a method twice on the same route is ignored.
    ///
    /// By default, methods are appended as-is and a route may end up accepting `GET` twice.
    ///
    /// If `ROUTE_BUILDER_DEDUPLICATE_METHODS` is set in the environment, it will be read and used
    /// when calling `RegistryOptions::from_env`.
    pub deduplicate_methods: bool,
}

/// An error that can occur when trying to get the registry options from the environment.
#[derive(Debug, thiserror::Error)]
pub enum RegistryOptionsFromEnvError {
    /// An environment variable was not unicode.
    #[error("environment variable {name} was not unicode")]
    NotUnicode {
        /// The name of the environment variable.
        name: &'static str,
    },

    /// An environment variable did not hold a boolean.
    #[error("environment variable {name} is not a boolean (was `{value}`)")]
    InvalidBool {
        /// The name of the environment variable.
        name: &'static str,

        /// The value that was attempted to be parsed.
        value: String,
    },
}

impl RegistryOptions {
    /// The environment variable name for method deduplication.
    pub const ROUTE_BUILDER_DEDUPLICATE_METHODS: &'static str = "ROUTE_BUILDER_DEDUPLICATE_METHODS";

    /// Get the registry options from the environment.
    pub fn from_env() -> Result<Self, RegistryOptionsFromEnvError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Get the registry options from an environment-like lookup function.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, VarError>,
    ) -> Result<Self, RegistryOptionsFromEnvError> {
        tracing::info!("Reading route registry options from the environment...");

        let name = Self::ROUTE_BUILDER_DEDUPLICATE_METHODS;

        let deduplicate_methods = match lookup(name) {
            Ok(value) if value.is_empty() => None,
            Ok(value) => Some(parse_bool(name, value)?),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(RegistryOptionsFromEnvError::NotUnicode { name });
            }
        };

        match deduplicate_methods {
            Some(deduplicate_methods) => {
                tracing::info!("{name} was set: method deduplication is {deduplicate_methods}.");
            }
            None => {
                tracing::debug!("{name} was not set: methods are kept as added.");
            }
        }

        Ok(Self {
            deduplicate_methods: deduplicate_methods.unwrap_or_default(),
        })
    }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, RegistryOptionsFromEnvError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(RegistryOptionsFromEnvError::InvalidBool { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&'static str) -> Result<String, VarError> {
        move |name| {
            assert_eq!(name, RegistryOptions::ROUTE_BUILDER_DEDUPLICATE_METHODS);
            value.map(str::to_owned).ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn test_from_lookup_unset() {
        let options = RegistryOptions::from_lookup(lookup(None)).unwrap();
        assert_eq!(options, RegistryOptions::default());

        let options = RegistryOptions::from_lookup(lookup(Some(""))).unwrap();
        assert!(!options.deduplicate_methods);
    }

    #[test]
    fn test_from_lookup_booleans() {
        for value in ["1", "true", "Yes", " on "] {
            let options = RegistryOptions::from_lookup(lookup(Some(value))).unwrap();
            assert!(options.deduplicate_methods, "{value}");
        }

        for value in ["0", "FALSE", "no", "off"] {
            let options = RegistryOptions::from_lookup(lookup(Some(value))).unwrap();
            assert!(!options.deduplicate_methods, "{value}");
        }
    }

    #[test]
    fn test_from_lookup_invalid() {
        let err = RegistryOptions::from_lookup(lookup(Some("maybe"))).unwrap_err();

        assert_eq!(
            err.to_string(),
            "environment variable ROUTE_BUILDER_DEDUPLICATE_METHODS is not a boolean (was `maybe`)"
        );
    }

    #[test]
    fn test_from_lookup_not_unicode() {
        let err = RegistryOptions::from_lookup(|_| {
            Err(VarError::NotUnicode(std::ffi::OsString::from("x")))
        })
        .unwrap_err();

        assert!(matches!(
            err,
            RegistryOptionsFromEnvError::NotUnicode { .. }
        ));
    }
}
