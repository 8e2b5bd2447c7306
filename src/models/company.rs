use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::company::Company as DomainCompany;
use crate::domain::types::{CompanyId, TypeConstraintError};

/// Wire model for [`crate::domain::company::Company`].
#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Company> for DomainCompany {
    type Error = TypeConstraintError;

    fn try_from(company: Company) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CompanyId::new(company.id)?,
            name: company.name,
            address: company.address,
            phone: company.phone,
            email: company.email,
            created_at: company.created_at.naive_utc(),
            updated_at: company.updated_at.naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_into_domain() {
        let payload: Company = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Acme",
                "address": null,
                "phone": "555-1234",
                "email": "sales@acme.example",
                "created_at": "2024-03-01T10:00:00Z",
                "updated_at": "2024-03-02T11:30:00Z"
            }"#,
        )
        .expect("valid payload");

        let domain = DomainCompany::try_from(payload).expect("valid company");
        assert_eq!(domain.id.get(), 7);
        assert_eq!(domain.name, "Acme");
        assert_eq!(domain.phone.as_deref(), Some("555-1234"));
    }

    #[test]
    fn zero_id_is_rejected() {
        let payload = Company {
            id: 0,
            name: "Acme".to_string(),
            address: None,
            phone: None,
            email: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(
            DomainCompany::try_from(payload),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
