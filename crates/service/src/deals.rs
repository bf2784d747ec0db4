//! Static deal pipeline shown on the deals page.

use chrono::NaiveDate;
use serde::Serialize;

pub const DEALS_CREATE: &str = "deals:create";
pub const DEALS_EDIT: &str = "deals:edit";
pub const DEALS_DELETE: &str = "deals:delete";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealStage {
    New,
    Qualify,
    Proposal,
    Negotiate,
    Won,
    Lost,
}

impl DealStage {
    pub fn label(self) -> &'static str {
        match self {
            DealStage::New => "New",
            DealStage::Qualify => "Qualify",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiate => "Negotiate",
            DealStage::Won => "Won",
            DealStage::Lost => "Lost",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub deal_id: String,
    pub title: String,
    pub company_name: String,
    pub stage: DealStage,
    pub amount_cents: i64,
    pub currency: String,
    pub close_date: Option<NaiveDate>,
}

impl Deal {
    /// `12,500.00 USD` style amount.
    pub fn display_amount(&self) -> String {
        let whole = self.amount_cents / 100;
        let cents = (self.amount_cents % 100).abs();
        let digits = whole.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!("{sign}{grouped}.{cents:02} {}", self.currency)
    }
}

fn deal(id: &str, title: &str, company: &str, stage: DealStage, amount_cents: i64, close: Option<(i32, u32, u32)>) -> Deal {
    Deal {
        deal_id: id.into(),
        title: title.into(),
        company_name: company.into(),
        stage,
        amount_cents,
        currency: "USD".into(),
        close_date: close.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    }
}

pub fn sample_deals() -> Vec<Deal> {
    vec![
        deal("D-1001", "Annual produce contract", "Fresh Farms", DealStage::Negotiate, 12_500_000, Some((2025, 3, 31))),
        deal("D-1002", "Packaging supply renewal", "BoxCo Packaging", DealStage::Proposal, 4_820_050, Some((2025, 4, 15))),
        deal("D-1003", "Cold-chain logistics pilot", "Polar Freight", DealStage::Qualify, 950_000, None),
        deal("D-1004", "Broker onboarding", "Bridge Brokers", DealStage::Won, 2_000_000, Some((2025, 1, 10))),
        deal("D-1005", "Seasonal beverage line", "Spring Water Ltd", DealStage::Lost, 760_000, Some((2024, 12, 1))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_grouped() {
        let d = sample_deals();
        assert_eq!(d[0].display_amount(), "125,000.00 USD");
        assert_eq!(d[1].display_amount(), "48,200.50 USD");
        assert_eq!(d[2].display_amount(), "9,500.00 USD");
        let neg = Deal { amount_cents: -123_456, ..d[2].clone() };
        assert_eq!(neg.display_amount(), "-1,234.56 USD");
    }

    #[test]
    fn sample_ids_are_unique() {
        let mut ids: Vec<_> = sample_deals().into_iter().map(|d| d.deal_id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
