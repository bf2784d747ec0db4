use axum::extract::OriginalUri;
use axum::response::{Html, Redirect};
use axum::Extension;

use service::session::SessionContext;

use crate::ui;

pub async fn index() -> Redirect {
    Redirect::to("/deals")
}

pub async fn deals(Extension(session): Extension<SessionContext>, OriginalUri(uri): OriginalUri) -> Html<String> {
    Html(ui::deals::deals_page(&session, uri.path()))
}
