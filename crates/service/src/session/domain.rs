use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The company/relationship/designation the user is currently acting as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentContext {
    #[serde(default)]
    pub company_id: Option<String>,
    pub company_name: String,
    #[serde(default)]
    pub relationship_name: Option<String>,
    #[serde(default)]
    pub designation_name: Option<String>,
}

/// One entry of the navigation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    pub route_id: String,
    pub route_path: String,
    pub route_label: String,
    #[serde(default)]
    pub route_icon: Option<String>,
    #[serde(default)]
    pub show_on_side_menu: bool,
    #[serde(default)]
    pub parent_route_id: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    /// Permission needed to see the route; `None` means everyone.
    #[serde(default)]
    pub required_permission: Option<String>,
}

impl RouteDefinition {
    pub fn is_visible_with(&self, permissions: &BTreeSet<String>) -> bool {
        self.required_permission.as_ref().map_or(true, |p| permissions.contains(p))
    }
}

/// Everything request handlers and renderers need to know about the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub user_id: String,
    pub current_context: CurrentContext,
    pub permissions: BTreeSet<String>,
    pub accessible_routes: Vec<RouteDefinition>,
}

impl SessionContext {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Top-level routes flagged for the side menu, in catalog order.
    pub fn side_menu_routes(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.accessible_routes.iter().filter(|r| r.show_on_side_menu && r.parent_route_id.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: &str, perm: Option<&str>, side: bool, parent: Option<&str>) -> RouteDefinition {
        RouteDefinition {
            route_id: id.into(),
            route_path: format!("/{id}"),
            route_label: id.into(),
            route_icon: None,
            show_on_side_menu: side,
            parent_route_id: parent.map(Into::into),
            sort_order: 0,
            required_permission: perm.map(Into::into),
        }
    }

    #[test]
    fn visibility_follows_required_permission() {
        let perms: BTreeSet<String> = ["deals:view".to_string()].into();
        assert!(route("open", None, true, None).is_visible_with(&perms));
        assert!(route("deals", Some("deals:view"), true, None).is_visible_with(&perms));
        assert!(!route("settings", Some("settings:view"), true, None).is_visible_with(&perms));
    }

    #[test]
    fn side_menu_skips_hidden_and_child_routes() {
        let ctx = SessionContext {
            user_id: "u1".into(),
            current_context: CurrentContext::default(),
            permissions: BTreeSet::new(),
            accessible_routes: vec![
                route("a", None, true, None),
                route("b", None, false, None),
                route("c", None, true, Some("a")),
            ],
        };
        let ids: Vec<_> = ctx.side_menu_routes().map(|r| r.route_id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
        assert!(!ctx.has_permission("deals:view"));
    }

    #[test]
    fn serializes_camel_case() {
        let v = serde_json::to_value(route("a", Some("x"), true, None)).unwrap();
        assert_eq!(v["routePath"], "/a");
        assert_eq!(v["showOnSideMenu"], true);
        assert_eq!(v["requiredPermission"], "x");
    }
}
