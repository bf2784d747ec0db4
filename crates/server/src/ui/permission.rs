use service::session::SessionContext;

/// Render `content` only when the session holds `permission`.
pub fn gate<F>(session: &SessionContext, permission: &str, content: F) -> String
where
    F: FnOnce() -> String,
{
    if session.has_permission(permission) {
        content()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::session::CurrentContext;

    fn session(perms: &[&str]) -> SessionContext {
        SessionContext {
            user_id: "u1".into(),
            current_context: CurrentContext::default(),
            permissions: perms.iter().map(|p| p.to_string()).collect(),
            accessible_routes: vec![],
        }
    }

    #[test]
    fn renders_only_with_permission() {
        assert_eq!(gate(&session(&["deals:create"]), "deals:create", || "<button>".into()), "<button>");
        assert_eq!(gate(&session(&["deals:edit"]), "deals:create", || "<button>".into()), "");
    }

    #[test]
    fn content_is_not_built_without_permission() {
        let mut called = false;
        let out = gate(&session(&[]), "deals:delete", || {
            called = true;
            "x".into()
        });
        assert!(out.is_empty());
        assert!(!called);
    }
}
