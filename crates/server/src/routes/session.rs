use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;

use service::session::{SessionContext, SessionError};

use crate::errors::ApiError;
use crate::state::AppState;

pub const AUTH_COOKIE: &str = "auth_token";

/// Bearer token from the Authorization header, falling back to the `auth_token` cookie.
/// A present header with another scheme is rejected rather than ignored.
fn request_token(headers: &HeaderMap, jar: &CookieJar) -> Result<Option<String>, SessionError> {
    if let Some(h) = headers.get(header::AUTHORIZATION) {
        let value = h.to_str().map_err(|_| SessionError::InvalidToken("non-ascii Authorization header".into()))?;
        return match value.strip_prefix("Bearer ") {
            Some(token) => Ok(Some(token.trim().to_string())),
            None => Err(SessionError::InvalidToken("expected Bearer scheme".into())),
        };
    }
    Ok(jar.get(AUTH_COOKIE).map(|c| c.value().to_string()))
}

/// 页面与会话接口的中间件：缺失 token 返回 400，非法或过期返回 401；
/// 成功时把 SessionContext 注入 request 扩展供后续 handler 使用
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let token = request_token(req.headers(), &jar)?;
    let session = state.sessions.resolve(token.as_deref()).await.map_err(|e| {
        tracing::warn!(path = %path, code = e.code(), err = %e, "session rejected");
        e
    })?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

#[utoipa::path(
    get, path = "/api/session", tag = "session",
    responses(
        (status = 200, description = "Current context, permissions and accessible routes"),
        (status = 400, description = "Missing session token", body = crate::openapi::ErrorResponse),
        (status = 401, description = "Invalid or expired session token", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn current(Extension(session): Extension<SessionContext>) -> Json<SessionContext> {
    Json(session)
}
