use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use super::domain::RouteDefinition;
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Navigation route catalog persisted as a JSON map keyed by route id.
#[derive(Clone)]
pub struct RouteCatalog {
    store: Arc<JsonMapStore<String, RouteDefinition>>,
}

impl RouteCatalog {
    /// Open the catalog file, writing the default routes when it is missing or empty.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let path = path.into();
        let store = JsonMapStore::open(path.clone()).await?;
        let seeded = store
            .seed_if_empty(default_routes().into_iter().map(|r| (r.route_id.clone(), r)))
            .await?;
        if seeded {
            info!(path = %path.display(), "route catalog seeded with defaults");
        }
        Ok(Self { store })
    }

    /// Every route, ordered by `sort_order` then label.
    pub async fn routes(&self) -> Vec<RouteDefinition> {
        let mut routes = self.store.values().await;
        routes.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.route_label.cmp(&b.route_label)));
        routes
    }

    /// Routes whose required permission is absent or granted.
    pub async fn accessible_for(&self, permissions: &BTreeSet<String>) -> Vec<RouteDefinition> {
        self.routes().await.into_iter().filter(|r| r.is_visible_with(permissions)).collect()
    }
}

fn route(id: &str, path: &str, label: &str, icon: &str, sort_order: i32, permission: Option<&str>) -> RouteDefinition {
    RouteDefinition {
        route_id: id.into(),
        route_path: path.into(),
        route_label: label.into(),
        route_icon: Some(icon.into()),
        show_on_side_menu: true,
        parent_route_id: None,
        sort_order,
        required_permission: permission.map(Into::into),
    }
}

pub fn default_routes() -> Vec<RouteDefinition> {
    vec![
        route("dashboard", "/dashboard", "Dashboard", "dashboard", 10, None),
        route("deals", "/deals", "Deals", "briefcase", 20, Some("deals:view")),
        RouteDefinition {
            show_on_side_menu: false,
            parent_route_id: Some("deals".into()),
            ..route("deal-detail", "/deals/detail", "Deal detail", "briefcase", 21, Some("deals:view"))
        },
        route("relationships", "/relationships", "Relationships", "link", 30, Some("relationships:view")),
        route("services", "/services", "Services", "layers", 40, Some("services:view")),
        route("settings", "/settings", "Settings", "settings", 90, Some("settings:view")),
    ]
}
