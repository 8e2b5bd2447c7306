//! Strongly-typed value objects used by domain entities and list queries.
//!
//! These wrappers enforce basic invariants (positive identifiers, normalized
//! email, a closed set of sortable columns) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is not one of the sortable columns.
    #[error("unknown sort field: {0}")]
    InvalidSortField(String),
    /// Provided string is not a recognized birthday filter.
    #[error("unknown birthday filter: {0}")]
    InvalidBirthdayFilter(String),
    /// Provided select value is not a numeric identifier.
    #[error("invalid reference id: {0}")]
    InvalidReference(String),
}

/// Normalizes and validates an email string.
pub(crate) fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CustomerId, "Unique identifier for a customer.");
id_newtype!(CompanyId, "Unique identifier for a company.");
id_newtype!(SalesRepId, "Unique identifier for a sales representative.");
id_newtype!(InteractionId, "Unique identifier for an interaction.");

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Closed allow-list of columns the customer list can be sorted by.
///
/// The wire names match the listing endpoint's `ordering` vocabulary, so
/// nothing caller-supplied ever reaches the query string unvalidated.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortField {
    FullName,
    CompanyName,
    DateOfBirth,
    LastInteractionDate,
}

impl SortField {
    /// Column name as the listing endpoint expects it.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortField::FullName => "full_name",
            SortField::CompanyName => "company__name",
            SortField::DateOfBirth => "date_of_birth",
            SortField::LastInteractionDate => "last_interaction_date",
        }
    }

    /// All sortable columns, in the order the list view displays them.
    pub const ALL: [SortField; 4] = [
        SortField::FullName,
        SortField::CompanyName,
        SortField::DateOfBirth,
        SortField::LastInteractionDate,
    ];
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for SortField {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "full_name" => Ok(SortField::FullName),
            "company__name" => Ok(SortField::CompanyName),
            "date_of_birth" => Ok(SortField::DateOfBirth),
            "last_interaction_date" => Ok(SortField::LastInteractionDate),
            other => Err(TypeConstraintError::InvalidSortField(other.to_string())),
        }
    }
}

/// Direction applied to the current [`SortField`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Flips `Asc` to `Desc` and back.
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Birthday filter applied to the customer list.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BirthdayFilter {
    /// No filtering.
    #[default]
    Any,
    Today,
    ThisWeek,
    ThisMonth,
}

impl BirthdayFilter {
    /// Query-parameter value; `Any` renders as the empty string.
    pub const fn as_str(self) -> &'static str {
        match self {
            BirthdayFilter::Any => "",
            BirthdayFilter::Today => "today",
            BirthdayFilter::ThisWeek => "this_week",
            BirthdayFilter::ThisMonth => "this_month",
        }
    }
}

impl Display for BirthdayFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for BirthdayFilter {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "" => Ok(BirthdayFilter::Any),
            "today" => Ok(BirthdayFilter::Today),
            "this_week" => Ok(BirthdayFilter::ThisWeek),
            "this_month" => Ok(BirthdayFilter::ThisMonth),
            other => Err(TypeConstraintError::InvalidBirthdayFilter(
                other.to_string(),
            )),
        }
    }
}
