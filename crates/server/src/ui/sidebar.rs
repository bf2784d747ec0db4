use service::session::{RouteDefinition, SessionContext};

use super::icons::RouteIcon;
use super::layout::escape;

fn context_block(session: &SessionContext) -> String {
    let ctx = &session.current_context;
    let mut html = format!(r#"<div class="company">{}</div>"#, escape(&ctx.company_name));
    for detail in [&ctx.relationship_name, &ctx.designation_name].into_iter().flatten() {
        html.push_str(&format!(r#"<div class="detail">{}</div>"#, escape(detail)));
    }
    html
}

fn nav_item(route: &RouteDefinition, current_path: &str) -> String {
    let active = if route.route_path == current_path { r#" class="active" aria-current="page""# } else { "" };
    format!(
        r#"<li><a href="{href}"{active}>{icon}<span>{label}</span></a></li>"#,
        href = escape(&route.route_path),
        active = active,
        icon = RouteIcon::from_key(route.route_icon.as_deref()).render(),
        label = escape(&route.route_label),
    )
}

/// Sidebar with the active context on top and the visible top-level routes below.
pub fn render_sidebar(session: &SessionContext, current_path: &str) -> String {
    let mut routes: Vec<&RouteDefinition> = session.side_menu_routes().collect();
    routes.sort_by_key(|r| r.sort_order);
    let items: String = routes.into_iter().map(|r| nav_item(r, current_path)).collect();

    format!(
        r#"    <aside class="sidebar">
        <div class="context">{context}</div>
        <nav><ul class="nav">{items}</ul></nav>
    </aside>"#,
        context = context_block(session),
        items = items,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::session::CurrentContext;

    fn route(id: &str, icon: Option<&str>, order: i32, side: bool, parent: Option<&str>) -> RouteDefinition {
        RouteDefinition {
            route_id: id.into(),
            route_path: format!("/{id}"),
            route_label: id.to_uppercase(),
            route_icon: icon.map(Into::into),
            show_on_side_menu: side,
            parent_route_id: parent.map(Into::into),
            sort_order: order,
            required_permission: None,
        }
    }

    fn session(routes: Vec<RouteDefinition>) -> SessionContext {
        SessionContext {
            user_id: "u1".into(),
            current_context: CurrentContext {
                company_id: Some("c1".into()),
                company_name: "Acme <Foods>".into(),
                relationship_name: Some("Fresh Farms".into()),
                designation_name: None,
            },
            permissions: Default::default(),
            accessible_routes: routes,
        }
    }

    #[test]
    fn renders_visible_top_level_routes_in_order() {
        let s = session(vec![
            route("zeta", None, 1, true, None),
            route("alpha", None, 2, true, None),
            route("hidden", None, 0, false, None),
            route("child", None, 0, true, Some("alpha")),
        ]);
        let html = render_sidebar(&s, "/alpha");
        let zeta = html.find("ZETA").unwrap();
        let alpha = html.find("ALPHA").unwrap();
        assert!(zeta < alpha);
        assert!(!html.contains("HIDDEN"));
        assert!(!html.contains("CHILD"));
    }

    #[test]
    fn marks_exact_current_path_active() {
        let s = session(vec![route("deals", Some("briefcase"), 1, true, None), route("services", None, 2, true, None)]);
        let html = render_sidebar(&s, "/deals");
        assert!(html.contains(r#"<a href="/deals" class="active" aria-current="page">"#));
        assert!(html.contains(r#"<a href="/services"><span class="icon icon-default""#));
        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(!render_sidebar(&s, "/deals/1").contains("class=\"active\""));
    }

    #[test]
    fn context_block_is_escaped_and_skips_missing_parts() {
        let html = render_sidebar(&session(vec![]), "/");
        assert!(html.contains("Acme &lt;Foods&gt;"));
        assert!(html.contains("Fresh Farms"));
        assert_eq!(html.matches(r#"class="detail""#).count(), 1);
    }
}
