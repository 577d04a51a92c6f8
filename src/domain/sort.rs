//! Column sorting types shared by the listing and export contracts.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Sortable contact columns. A closed enum keeps malformed identifiers out
/// of the contract entirely.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortColumn {
    FullName,
    Email,
    PhoneNumber,
    StreetAddress,
    City,
    ZipCode,
    AreaCode,
    Category,
}

impl SortColumn {
    /// Wire identifier of the column.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortColumn::FullName => "full_name",
            SortColumn::Email => "email",
            SortColumn::PhoneNumber => "phone_number",
            SortColumn::StreetAddress => "street_address",
            SortColumn::City => "city",
            SortColumn::ZipCode => "zip_code",
            SortColumn::AreaCode => "area_code",
            SortColumn::Category => "category",
        }
    }
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_name" => Ok(SortColumn::FullName),
            "email" => Ok(SortColumn::Email),
            "phone_number" => Ok(SortColumn::PhoneNumber),
            "street_address" => Ok(SortColumn::StreetAddress),
            "city" => Ok(SortColumn::City),
            "zip_code" => Ok(SortColumn::ZipCode),
            "area_code" => Ok(SortColumn::AreaCode),
            "category" => Ok(SortColumn::Category),
            other => Err(TypeConstraintError::UnknownSortColumn(other.to_string())),
        }
    }
}

/// Sort direction as the directory service spells it.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Wire value: `asc` or `desc`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// The opposite direction.
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An active column sort. Absence (`Option::None`) means server default
/// order; the contract then omits both sort keys rather than sending empty
/// strings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    /// A fresh ascending sort on the given column.
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }
}
