//! Convenience setters.
//!
//! Each of these is a thin wrapper over one of the generic setters with a fixed key. They are
//! declared as tables below so that the key each one writes to is readable at a glance.

use std::fmt::Display;

use http::Method;
use itertools::Itertools;

use super::{RouteDefinition, keys};

/// How a list of values is combined into a single requirement value.
///
/// The separators are part of the contract with the access checkers that parse these values:
/// `,` means all values must hold, `+` means any of them is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// All values are required.
    All,

    /// Any value is sufficient.
    Any,
}

impl Join {
    /// The separator used for this join.
    pub const fn separator(self) -> &'static str {
        match self {
            Self::All => ",",
            Self::Any => "+",
        }
    }

    /// Join values with this separator.
    pub fn apply<I>(self, values: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        values.into_iter().join(self.separator())
    }
}

macro_rules! accepts {
    ($($name:ident => $method:ident;)*) => {
        impl RouteDefinition {
            $(
                #[doc = concat!("Accept the `", stringify!($method), "` method.")]
                pub fn $name(&mut self) -> &mut Self {
                    self.add_method(Method::$method)
                }
            )*
        }
    };
}

macro_rules! setters {
    ($setter:ident: $($name:ident => $key:ident;)*) => {
        impl RouteDefinition {
            $(
                #[doc = concat!("Set the [`keys::", stringify!($key), "`] value.")]
                pub fn $name(&mut self, value: impl Into<String>) -> &mut Self {
                    self.$setter(keys::$key, Into::<String>::into(value))
                }
            )*
        }
    };
}

macro_rules! flags {
    ($setter:ident: $($name:ident => $key:ident;)*) => {
        impl RouteDefinition {
            $(
                #[doc = concat!("Set the [`keys::", stringify!($key), "`] flag.")]
                pub fn $name(&mut self) -> &mut Self {
                    self.$setter(keys::$key, keys::TRUE)
                }
            )*
        }
    };
}

macro_rules! joined_requirements {
    ($($name:ident => ($key:ident, $join:ident);)*) => {
        impl RouteDefinition {
            $(
                #[doc = concat!(
                    "Set the [`keys::", stringify!($key), "`] requirement, joined with [`Join::",
                    stringify!($join), "`]."
                )]
                pub fn $name<I>(&mut self, values: I) -> &mut Self
                where
                    I: IntoIterator,
                    I::Item: Display,
                {
                    self.set_requirement(keys::$key, Join::$join.apply(values))
                }
            )*
        }
    };
}

macro_rules! fixed_requirements {
    ($($name:ident => ($key:ident, $value:literal);)*) => {
        impl RouteDefinition {
            $(
                #[doc = concat!("Set the [`keys::", stringify!($key), "`] requirement to `", $value, "`.")]
                pub fn $name(&mut self) -> &mut Self {
                    self.set_requirement(keys::$key, $value)
                }
            )*
        }
    };
}

accepts! {
    accepts_get => GET;
    accepts_post => POST;
    accepts_patch => PATCH;
    accepts_put => PUT;
    accepts_delete => DELETE;
}

setters! { set_default:
    form => FORM;
    entity_view => ENTITY_VIEW;
    entity_list => ENTITY_LIST;
    entity_form => ENTITY_FORM;
    title => TITLE;
    title_callback => TITLE_CALLBACK;
}

setters! { set_requirement:
    entity_access => ENTITY_ACCESS;
    custom_access => CUSTOM_ACCESS;
    format => FORMAT;
    content_type_format => CONTENT_TYPE_FORMAT;
}

setters! { set_option:
    theme => THEME;
}

joined_requirements! {
    requires_all_permissions => (PERMISSION, All);
    requires_any_permission => (PERMISSION, Any);
    requires_all_roles => (ROLE, All);
    requires_any_role => (ROLE, Any);
    depends_on_all_modules => (MODULE_DEPENDENCIES, All);
    depends_on_any_module => (MODULE_DEPENDENCIES, Any);
}

fixed_requirements! {
    json_format => (FORMAT, "json");
    html_format => (FORMAT, "html");
    xml_format => (FORMAT, "xml");
    only_accepts_json => (CONTENT_TYPE_FORMAT, "json");
    only_accepts_xml => (CONTENT_TYPE_FORMAT, "xml");
}

flags! { set_requirement:
    default_access => ACCESS;
    uses_csrf => CSRF_TOKEN;
    requires_csrf_token_header => CSRF_REQUEST_HEADER_TOKEN;
    access_user_register => ACCESS_USER_REGISTER;
    requires_login_to_access => USER_IS_LOGGED_IN;
}

flags! { set_option:
    is_admin_route => ADMIN_ROUTE;
    accessible_during_maintenance => MAINTENANCE_ACCESS;
    no_cache => NO_CACHE;
}

impl RouteDefinition {
    /// Accept each of the specified methods, in order.
    pub fn accepts_methods(&mut self, methods: impl IntoIterator<Item = Method>) -> &mut Self {
        for method in methods {
            self.add_method(method);
        }

        self
    }

    /// Bind the route to the invokable controller class.
    pub fn controller(&mut self, class: impl Display) -> &mut Self {
        self.controller_method(class, keys::INVOKE_METHOD)
    }

    /// Bind the route to a method of a controller class.
    pub fn controller_method(&mut self, class: impl Display, method: impl Display) -> &mut Self {
        self.set_default(keys::CONTROLLER, format!("{class}::{method}"))
    }

    /// Constrain a path parameter with a regular expression.
    pub fn entity_validation(
        &mut self,
        parameter: impl Into<String>,
        pattern: impl Into<String>,
    ) -> &mut Self {
        let parameter = parameter.into();

        self.warn_if_not_a_path_parameter(&parameter, "validation pattern");
        self.set_requirement(parameter, pattern)
    }

    /// Restrict the entity to the specified bundles (`type:bundle1|bundle2`).
    pub fn entity_bundles<I>(&mut self, entity_type: impl Display, bundles: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.set_requirement(
            keys::ENTITY_BUNDLES,
            format!("{entity_type}:{}", bundles.into_iter().join("|")),
        )
    }

    /// Require create access for the entity type and bundle (`type:bundle`).
    ///
    /// The bundle may be a `{route_parameter}` reference.
    pub fn entity_create_access(
        &mut self,
        entity_type: impl Display,
        bundle: impl Display,
    ) -> &mut Self {
        self.set_requirement(
            keys::ENTITY_CREATE_ACCESS,
            format!("{entity_type}:{bundle}"),
        )
    }

    /// Append each of the authentication mechanisms, in order.
    pub fn requires_authentication<I>(&mut self, mechanisms: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for mechanism in mechanisms {
            self.add_auth_mechanism(mechanism);
        }

        self
    }

    pub fn requires_basic_auth(&mut self) -> &mut Self {
        self.add_auth_mechanism("basic_auth")
    }

    pub fn requires_cookie_auth(&mut self) -> &mut Self {
        self.add_auth_mechanism("cookie")
    }
}
