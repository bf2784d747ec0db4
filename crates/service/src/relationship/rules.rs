//! Pure validation for relationship writes.

use models::enums::{self, RelationshipStatus, RelationshipType};

use super::domain::{CompanySummary, CreateRelationshipInput};
use crate::errors::ServiceError;

/// Trimmed, non-empty create fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    pub from_company_id: String,
    pub to_company_id: String,
    pub relationship_type: String,
}

fn present(v: &Option<String>) -> Option<String> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

pub fn require_fields(input: &CreateRelationshipInput) -> Result<RequiredFields, ServiceError> {
    match (present(&input.from_company_id), present(&input.to_company_id), present(&input.relationship_type)) {
        (Some(from_company_id), Some(to_company_id), Some(relationship_type)) => {
            Ok(RequiredFields { from_company_id, to_company_id, relationship_type })
        }
        _ => Err(ServiceError::Validation(
            "fromCompanyId, toCompanyId, and relationshipType are required".into(),
        )),
    }
}

pub fn parse_relationship_type(raw: &str) -> Result<RelationshipType, ServiceError> {
    enums::parse::<RelationshipType>(raw).ok_or_else(|| {
        ServiceError::Validation(format!(
            "Invalid relationship type. Must be one of: {}",
            enums::accepted_values::<RelationshipType>()
        ))
    })
}

pub fn parse_relationship_status(raw: &str) -> Result<RelationshipStatus, ServiceError> {
    enums::parse::<RelationshipStatus>(raw).ok_or_else(|| {
        ServiceError::Validation(format!(
            "Invalid relationship status. Must be one of: {}",
            enums::accepted_values::<RelationshipStatus>()
        ))
    })
}

/// Company-type pairing: the from end is checked first, then the to end.
pub fn check_pairing(kind: RelationshipType, from: &CompanySummary, to: &CompanySummary) -> Result<(), ServiceError> {
    let Some((from_type, to_type)) = kind.required_company_types() else {
        return Ok(());
    };
    if from.company_type != from_type {
        return Err(ServiceError::Validation(format!(
            "For {kind} relationships, the from company must be a {from_type}"
        )));
    }
    if to.company_type != to_type {
        return Err(ServiceError::Validation(format!(
            "For {kind} relationships, the to company must be a {to_type}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::enums::CompanyType;

    fn company(t: CompanyType) -> CompanySummary {
        CompanySummary { company_id: "c".into(), company_name: "C".into(), company_type: t }
    }

    fn input(from: Option<&str>, to: Option<&str>, kind: Option<&str>) -> CreateRelationshipInput {
        CreateRelationshipInput {
            from_company_id: from.map(Into::into),
            to_company_id: to.map(Into::into),
            relationship_type: kind.map(Into::into),
        }
    }

    #[test]
    fn blank_or_missing_fields_are_rejected() {
        for bad in [
            input(None, Some("b"), Some("PARTNER")),
            input(Some("a"), Some("  "), Some("PARTNER")),
            input(Some("a"), Some("b"), None),
        ] {
            let err = require_fields(&bad).unwrap_err();
            assert_eq!(
                err.public_message().as_deref(),
                Some("fromCompanyId, toCompanyId, and relationshipType are required")
            );
        }
        let ok = require_fields(&input(Some(" a "), Some("b"), Some("PARTNER"))).unwrap();
        assert_eq!(ok.from_company_id, "a");
    }

    #[test]
    fn unknown_type_lists_accepted_values() {
        let err = parse_relationship_type("FRIENDS").unwrap_err();
        assert_eq!(
            err.public_message().as_deref(),
            Some("Invalid relationship type. Must be one of: MERCHANT_SUPPLIER, BROKER_SUPPLIER, PARTNER")
        );
    }

    #[test]
    fn pairing_checks_from_then_to() {
        let merchant = company(CompanyType::Merchant);
        let supplier = company(CompanyType::Supplier);
        let broker = company(CompanyType::Broker);

        assert!(check_pairing(RelationshipType::MerchantSupplier, &merchant, &supplier).is_ok());
        let err = check_pairing(RelationshipType::MerchantSupplier, &merchant, &broker).unwrap_err();
        assert_eq!(
            err.public_message().as_deref(),
            Some("For MERCHANT_SUPPLIER relationships, the to company must be a SUPPLIER")
        );
        let err = check_pairing(RelationshipType::BrokerSupplier, &merchant, &broker).unwrap_err();
        assert!(err.public_message().unwrap_or_default().contains("from company must be a BROKER"));

        // PARTNER has no constraint
        assert!(check_pairing(RelationshipType::Partner, &supplier, &supplier).is_ok());
    }

    #[test]
    fn status_values() {
        assert_eq!(parse_relationship_status("PENDING").unwrap(), RelationshipStatus::Pending);
        assert!(matches!(parse_relationship_status("gone"), Err(ServiceError::Validation(_))));
    }
}
