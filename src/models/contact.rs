//! Contact model persisted to the document store.

use serde::{Deserialize, Serialize};

use crate::domain::ContactId;

/// First and last name of a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactName {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,
}

/// Birthday of a contact, carried as an ISO 8601 date string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactBirthday {
    /// The birthday date
    pub birthday: String,
}

/// Postal address of a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactAddress {
    /// First address line
    pub line1: String,

    /// Second address line, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    /// City
    pub city: String,

    /// State or region
    pub state: String,

    /// ZIP or postal code
    pub zip: String,
}

/// Email address of a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactEmail {
    /// The email address
    pub email: String,
}

/// Phone numbers of a contact. All entries are optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactPhone {
    /// Mobile number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    /// Home number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    /// Work number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
}

/// A contact record as persisted in the document store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier, assigned server-side at creation time
    #[serde(rename = "contact_id")]
    pub id: String,

    /// Name of the contact
    #[serde(rename = "contact_name")]
    pub name: ContactName,

    /// Birthday of the contact
    #[serde(rename = "contact_birthday")]
    pub birthday: ContactBirthday,

    /// Postal address of the contact
    #[serde(rename = "contact_address")]
    pub address: ContactAddress,

    /// Email address of the contact
    #[serde(rename = "contact_email")]
    pub email: ContactEmail,

    /// Phone numbers; a missing object means none are known
    #[serde(rename = "contact_phone", default)]
    pub phone: ContactPhone,

    /// Caller-supplied type, used as the partition key in the store
    pub contact_type: String,
}

/// Caller-supplied contact payload, before an identifier is assigned.
///
/// Mirrors the persisted `Contact` shape minus `contact_id`; the identifier
/// is never accepted from the caller.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewContact {
    /// Name of the contact
    #[serde(rename = "contact_name")]
    pub name: ContactName,

    /// Birthday of the contact
    #[serde(rename = "contact_birthday")]
    pub birthday: ContactBirthday,

    /// Postal address of the contact
    #[serde(rename = "contact_address")]
    pub address: ContactAddress,

    /// Email address of the contact
    #[serde(rename = "contact_email")]
    pub email: ContactEmail,

    /// Phone numbers; a missing object means none are known
    #[serde(rename = "contact_phone", default)]
    pub phone: ContactPhone,

    /// Caller-supplied type, used as the partition key in the store
    pub contact_type: String,
}

impl Contact {
    /// Build the record to persist from a caller payload.
    ///
    /// Every scalar field is copied individually into freshly constructed
    /// nested structures; the result never aliases the input.
    pub fn assemble(id: ContactId, input: &NewContact) -> Self {
        Self {
            id: id.into_inner(),
            name: ContactName {
                first_name: input.name.first_name.clone(),
                last_name: input.name.last_name.clone(),
            },
            birthday: ContactBirthday {
                birthday: input.birthday.birthday.clone(),
            },
            address: ContactAddress {
                line1: input.address.line1.clone(),
                line2: input.address.line2.clone(),
                city: input.address.city.clone(),
                state: input.address.state.clone(),
                zip: input.address.zip.clone(),
            },
            email: ContactEmail {
                email: input.email.email.clone(),
            },
            phone: ContactPhone {
                mobile: input.phone.mobile.clone(),
                home: input.phone.home.clone(),
                work: input.phone.work.clone(),
            },
            contact_type: input.contact_type.clone(),
        }
    }

    /// Partition key under which this record is stored.
    pub fn partition_key(&self) -> &str {
        &self.contact_type
    }
}
