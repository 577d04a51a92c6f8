//! Wire payloads of the paginated listing operation.

use serde::Deserialize;

use crate::domain::contact::{Contact, ListingPage};

/// One contact row as the directory service returns it. The envelope keys
/// are camelCase but the row fields are snake_case; `area_code` only exists
/// in newer protocol variants.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactPayload {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub street_address: String,
    pub city: String,
    pub zip_code: String,
    pub category: String,
    #[serde(default)]
    pub area_code: Option<String>,
}

/// Response envelope of the listing operation.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsPagePayload {
    pub contacts: Vec<ContactPayload>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_contacts: u64,
}

impl From<ContactPayload> for Contact {
    fn from(payload: ContactPayload) -> Self {
        Self {
            full_name: payload.full_name,
            email: payload.email,
            phone_number: payload.phone_number,
            street_address: payload.street_address,
            city: payload.city,
            zip_code: payload.zip_code,
            category: payload.category,
            area_code: payload.area_code,
        }
    }
}

impl From<ContactsPagePayload> for ListingPage {
    fn from(payload: ContactsPagePayload) -> Self {
        Self {
            contacts: payload.contacts.into_iter().map(Into::into).collect(),
            current_page: payload.current_page,
            total_pages: payload.total_pages,
            total_contacts: payload.total_contacts,
        }
    }
}
