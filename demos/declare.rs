//! Declares a handful of routes and prints the resulting route table as JSON.
//!
//! Run with `ROUTE_BUILDER_DEDUPLICATE_METHODS=1` to ignore methods accepted twice.

use http::Method;
use route_builder::{RouteRegistry, SharedRouteRegistry};

fn declare_node_routes(registry: &mut RouteRegistry) -> anyhow::Result<()> {
    registry
        .get("entity.node.canonical", "/node/{node}")?
        .entity_view("node.full")
        .title_callback("NodeViewController::title")
        .entity_access("node.view")
        .entity_validation("node", "\\d+")
        .set_parameter_converter("node", "entity:node");

    registry
        .get("entity.node.edit_form", "/node/{node}/edit")?
        .accepts_post()
        .entity_form("node.edit")
        .entity_access("node.update")
        .is_admin_route()
        .set_parameter_converter("node", "entity:node");

    registry
        .create_with_method("node.add", "/node/add/{node_type}", Method::GET)?
        .accepts_methods([Method::POST, Method::GET])
        .controller_method("NodeController", "add")
        .entity_create_access("node", "{node_type}")
        .set_parameter_converter("node_type", "entity:node_type");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let mut registry = RouteRegistry::with_options_from_env()?;

    registry
        .get("system.home", "/")?
        .controller("HomeController")
        .title("Home")
        .default_access();

    declare_node_routes(&mut registry)?;

    registry
        .delete("api.node.delete", "/api/node/{node}")?
        .json_format()
        .requires_any_permission(["delete any content", "administer nodes"])
        .requires_basic_auth()
        .requires_cookie_auth()
        .no_cache();

    if let Err(err) = registry.get("system.home", "/home") {
        tracing::error!("Failed to declare route: {err}");
    }

    // Plugins may register their routes from their own threads.
    let shared = SharedRouteRegistry::new(registry);

    std::thread::scope(|scope| {
        for plugin in ["contact", "search"] {
            let shared = shared.clone();

            scope.spawn(move || {
                let result = shared.register(
                    format!("{plugin}.page"),
                    format!("/{plugin}"),
                    |route| {
                        route
                            .accepts_get()
                            .title(plugin)
                            .depends_on_all_modules([plugin, "system"]);
                    },
                );

                if let Err(err) = result {
                    tracing::error!("Plugin `{plugin}` failed to register its route: {err}");
                }
            });
        }
    });

    let registry = shared.snapshot();

    for (name, route) in registry.iter() {
        tracing::info!("{name}: {route}");
    }

    println!("{}", serde_json::to_string_pretty(&registry)?);

    Ok(())
}
