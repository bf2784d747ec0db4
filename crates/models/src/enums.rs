//! Typed values for every status/type column.
//!
//! Stored as short strings; the string value doubles as the JSON representation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyType {
    #[sea_orm(string_value = "MERCHANT")]
    Merchant,
    #[sea_orm(string_value = "BROKER")]
    Broker,
    #[sea_orm(string_value = "SUPPLIER")]
    Supplier,
    #[sea_orm(string_value = "PARTNER")]
    Partner,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    #[sea_orm(string_value = "MERCHANT_SUPPLIER")]
    MerchantSupplier,
    #[sea_orm(string_value = "BROKER_SUPPLIER")]
    BrokerSupplier,
    #[sea_orm(string_value = "PARTNER")]
    Partner,
}

impl RelationshipType {
    /// Company types required at (from, to) ends, `None` when unconstrained.
    pub fn required_company_types(self) -> Option<(CompanyType, CompanyType)> {
        match self {
            RelationshipType::MerchantSupplier => Some((CompanyType::Merchant, CompanyType::Supplier)),
            RelationshipType::BrokerSupplier => Some((CompanyType::Broker, CompanyType::Supplier)),
            RelationshipType::Partner => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
    #[sea_orm(string_value = "PENDING")]
    Pending,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

/// Parse a raw request value into one of the enums above.
pub fn parse<E>(raw: &str) -> Option<E>
where
    E: ActiveEnum<Value = String>,
{
    E::try_from_value(&raw.trim().to_string()).ok()
}

/// Comma-separated list of accepted values, for error messages.
pub fn accepted_values<E>() -> String
where
    E: ActiveEnum<Value = String>,
{
    E::values().join(", ")
}

macro_rules! display_as_value {
    ($($t:ty),*) => {
        $(impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_value())
            }
        })*
    };
}

display_as_value!(CompanyType, RelationshipType, RelationshipStatus, AssignmentStatus, ServiceStatus);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_stored_values_only() {
        assert_eq!(parse::<RelationshipType>("MERCHANT_SUPPLIER"), Some(RelationshipType::MerchantSupplier));
        assert_eq!(parse::<RelationshipType>(" PARTNER "), Some(RelationshipType::Partner));
        assert_eq!(parse::<RelationshipType>("merchant_supplier"), None);
        assert_eq!(parse::<RelationshipStatus>("PENDING"), Some(RelationshipStatus::Pending));
        assert_eq!(parse::<RelationshipStatus>("DELETED"), None);
    }

    #[test]
    fn accepted_values_lists_every_variant() {
        assert_eq!(accepted_values::<RelationshipType>(), "MERCHANT_SUPPLIER, BROKER_SUPPLIER, PARTNER");
        assert_eq!(accepted_values::<RelationshipStatus>(), "ACTIVE, INACTIVE, PENDING");
    }

    #[test]
    fn json_matches_stored_value() {
        let v = serde_json::to_value(RelationshipType::BrokerSupplier).unwrap();
        assert_eq!(v, "BROKER_SUPPLIER");
        assert_eq!(CompanyType::Supplier.to_string(), "SUPPLIER");
    }

    #[test]
    fn pairing_rules() {
        assert_eq!(
            RelationshipType::MerchantSupplier.required_company_types(),
            Some((CompanyType::Merchant, CompanyType::Supplier))
        );
        assert_eq!(
            RelationshipType::BrokerSupplier.required_company_types(),
            Some((CompanyType::Broker, CompanyType::Supplier))
        );
        assert_eq!(RelationshipType::Partner.required_company_types(), None);
    }
}
