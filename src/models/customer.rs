use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use crate::error::{ReservationError, ReservationResult};

/// Free-text name a reservation is held under.
///
/// Always trimmed and never blank. Comparison is exact and case-sensitive:
/// "alice" cannot cancel a seat held by "Alice".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName {
    #[validate(custom(function = "not_blank"))]
    name: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank_customer_name"));
    }
    Ok(())
}

impl CustomerName {
    pub fn parse(raw: &str) -> ReservationResult<Self> {
        let candidate = Self {
            name: raw.trim().to_string(),
        };
        candidate
            .validate()
            .map_err(|_| ReservationError::InvalidCustomerName)?;
        Ok(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for CustomerName {
    type Error = ReservationError;

    fn try_from(raw: String) -> ReservationResult<Self> {
        Self::parse(&raw)
    }
}

impl From<CustomerName> for String {
    fn from(customer: CustomerName) -> Self {
        customer.name
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
