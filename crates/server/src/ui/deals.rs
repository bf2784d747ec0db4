use service::deals::{sample_deals, Deal, DealStage, DEALS_CREATE, DEALS_DELETE, DEALS_EDIT};
use service::session::SessionContext;

use super::layout::{escape, page};
use super::permission::gate;
use super::sidebar::render_sidebar;

fn stage_class(stage: DealStage) -> &'static str {
    match stage {
        DealStage::Won => "stage stage-won",
        DealStage::Lost => "stage stage-lost",
        _ => "stage",
    }
}

fn deal_row(session: &SessionContext, deal: &Deal) -> String {
    let id = escape(&deal.deal_id);
    let edit = gate(session, DEALS_EDIT, || format!(r#"<button data-action="edit" data-deal="{id}">Edit</button>"#));
    let delete = gate(session, DEALS_DELETE, || {
        format!(r#"<button class="danger" data-action="delete" data-deal="{id}">Delete</button>"#)
    });
    format!(
        r#"<tr><td>{id}</td><td>{title}</td><td>{company}</td><td><span class="{class}">{stage}</span></td><td class="amount">{amount}</td><td>{close}</td><td class="actions">{edit}{delete}</td></tr>"#,
        id = id,
        title = escape(&deal.title),
        company = escape(&deal.company_name),
        class = stage_class(deal.stage),
        stage = deal.stage.label(),
        amount = escape(&deal.display_amount()),
        close = deal.close_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "-".into()),
        edit = edit,
        delete = delete,
    )
}

pub fn deals_page(session: &SessionContext, current_path: &str) -> String {
    let rows: String = sample_deals().iter().map(|d| deal_row(session, d)).collect();
    let create = gate(session, DEALS_CREATE, || r#"<button class="primary" data-action="create">New deal</button>"#.to_string());
    let main = format!(
        r#"        <div class="toolbar"><h1>Deals</h1>{create}</div>
        <table>
            <thead><tr><th>ID</th><th>Deal</th><th>Company</th><th>Stage</th><th>Amount</th><th>Close date</th><th></th></tr></thead>
            <tbody>{rows}</tbody>
        </table>"#
    );
    page("Deals", &render_sidebar(session, current_path), &main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::session::CurrentContext;

    fn session(perms: &[&str]) -> SessionContext {
        SessionContext {
            user_id: "u1".into(),
            current_context: CurrentContext { company_name: "Acme Foods".into(), ..CurrentContext::default() },
            permissions: perms.iter().map(|p| p.to_string()).collect(),
            accessible_routes: vec![],
        }
    }

    #[test]
    fn viewer_sees_table_without_actions() {
        let html = deals_page(&session(&["deals:view"]), "/deals");
        assert!(html.contains("Annual produce contract"));
        assert!(html.contains("125,000.00 USD"));
        assert!(!html.contains("New deal"));
        assert!(!html.contains("data-action=\"edit\""));
        assert!(!html.contains("data-action=\"delete\""));
    }

    #[test]
    fn each_button_follows_its_permission() {
        let html = deals_page(&session(&[DEALS_CREATE, DEALS_DELETE]), "/deals");
        assert!(html.contains("New deal"));
        assert!(!html.contains("data-action=\"edit\""));
        assert_eq!(html.matches("data-action=\"delete\"").count(), sample_deals().len());
    }
}
