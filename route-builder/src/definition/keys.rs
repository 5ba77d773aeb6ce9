//! Well-known keys understood by the consumers of route definitions.
//!
//! Nothing in this crate interprets these keys: they are only the names the convenience setters
//! write to.

/// The value written by flag-like setters.
pub const TRUE: &str = "TRUE";

/// The method used by [`RouteDefinition::controller`](super::RouteDefinition::controller) when
/// none is given.
pub const INVOKE_METHOD: &str = "__invoke";

// Defaults.
pub const CONTROLLER: &str = "_controller";
pub const FORM: &str = "_form";
pub const ENTITY_VIEW: &str = "_entity_view";
pub const ENTITY_LIST: &str = "_entity_list";
pub const ENTITY_FORM: &str = "_entity_form";
pub const TITLE: &str = "_title";
pub const TITLE_CALLBACK: &str = "_title_callback";

// Requirements.
pub const PERMISSION: &str = "_permission";
pub const ROLE: &str = "_role";
pub const MODULE_DEPENDENCIES: &str = "_module_dependencies";
pub const ACCESS: &str = "_access";
pub const CUSTOM_ACCESS: &str = "_custom_access";
pub const ENTITY_ACCESS: &str = "_entity_access";
pub const ENTITY_BUNDLES: &str = "_entity_bundles";
pub const ENTITY_CREATE_ACCESS: &str = "_entity_create_access";
pub const FORMAT: &str = "_format";
pub const CONTENT_TYPE_FORMAT: &str = "_content_type_format";
pub const CSRF_TOKEN: &str = "_csrf_token";
pub const CSRF_REQUEST_HEADER_TOKEN: &str = "_csrf_request_header_token";
pub const ACCESS_USER_REGISTER: &str = "_access_user_register";
pub const USER_IS_LOGGED_IN: &str = "_user_is_logged_in";

// Options.
pub const AUTH: &str = "_auth";
pub const PARAMETERS: &str = "parameters";
pub const ADMIN_ROUTE: &str = "_admin_route";
pub const MAINTENANCE_ACCESS: &str = "_maintenance_access";
pub const THEME: &str = "_theme";
pub const NO_CACHE: &str = "no_cache";
