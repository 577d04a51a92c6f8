//! Contact rows and the authoritative listing page around them.

use serde::{Deserialize, Serialize};

/// One directory entry as returned by the listing operation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub street_address: String,
    pub city: String,
    pub zip_code: String,
    pub category: String,
    /// Area code as materialized by the directory service. Older protocol
    /// variants omit it; display falls back to deriving it from the phone
    /// number.
    pub area_code: Option<String>,
}

impl Contact {
    /// Area code to display: the server-provided field when present,
    /// otherwise the client-side derivation from the phone number.
    pub fn display_area_code(&self) -> String {
        match &self.area_code {
            Some(code) => code.clone(),
            None => derive_area_code(&self.phone_number),
        }
    }
}

/// Derives an area code from a raw phone number string.
///
/// Numbers with the `+1` international prefix yield the three characters
/// after it; anything else yields its first three characters, so a non-US
/// number such as `+4420...` yields `+44`. Shorter inputs yield whatever
/// characters exist.
pub fn derive_area_code(phone: &str) -> String {
    let skip = if phone.starts_with("+1") { 2 } else { 0 };
    phone.chars().skip(skip).take(3).collect()
}

/// One authoritative page of listing results.
///
/// Replaced wholesale on every successful fetch; the server's page counters
/// are the source of truth for page bounds.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingPage {
    pub contacts: Vec<Contact>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_contacts: u64,
}

impl Default for ListingPage {
    fn default() -> Self {
        Self {
            contacts: Vec::new(),
            current_page: 1,
            total_pages: 0,
            total_contacts: 0,
        }
    }
}
