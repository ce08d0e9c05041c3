use serde::{Deserialize, Serialize};

/// One input contact record.
///
/// Records are immutable for the duration of a run. Every field other than the
/// identifier is free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(rename = "ContactID")]
    pub contact_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub zip_code: String,
    pub address: String,
}

/// The comparable (non-identifier) fields of a [`Contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    ZipCode,
    Address,
}

impl ContactField {
    /// All comparable fields, in column order.
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::ZipCode,
        ContactField::Address,
    ];

    /// Column header used in tabular input and output.
    pub fn header(self) -> &'static str {
        match self {
            ContactField::FirstName => "FirstName",
            ContactField::LastName => "LastName",
            ContactField::Email => "Email",
            ContactField::ZipCode => "ZipCode",
            ContactField::Address => "Address",
        }
    }

    /// Whether the field carries a personal name (eligible for initial matching).
    pub fn is_name(self) -> bool {
        matches!(self, ContactField::FirstName | ContactField::LastName)
    }
}

/// Column header of the identifier column.
pub const CONTACT_ID_HEADER: &str = "ContactID";

impl Contact {
    pub fn new(contact_id: impl Into<String>) -> Self {
        Self {
            contact_id: contact_id.into(),
            ..Self::default()
        }
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = value.into();
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = value.into();
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = value.into();
        self
    }

    pub fn with_zip_code(mut self, value: impl Into<String>) -> Self {
        self.zip_code = value.into();
        self
    }

    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = value.into();
        self
    }

    /// Value of a comparable field.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::ZipCode => &self.zip_code,
            ContactField::Address => &self.address,
        }
    }

    /// Column headers for a full contact row (identifier first).
    pub fn headers() -> [&'static str; 6] {
        [
            CONTACT_ID_HEADER,
            ContactField::FirstName.header(),
            ContactField::LastName.header(),
            ContactField::Email.header(),
            ContactField::ZipCode.header(),
            ContactField::Address.header(),
        ]
    }

    /// Field values in column order, identifier first.
    pub fn to_row(&self) -> [&str; 6] {
        [
            &self.contact_id,
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.zip_code,
            &self.address,
        ]
    }
}
