use crate::common::ContactError;

/// What the contact form collects. It is checked in the browser and then
/// dropped; the site has no endpoint to send it to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactEnquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactEnquiry {
    /// Builds an enquiry from raw field values; blank optional fields become `None`.
    pub fn from_fields(name: &str, email: &str, phone: &str, message: &str) -> Self {
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: optional(phone),
            message: optional(message),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_email_shaped(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// Loose shape check, roughly what `<input type="email">` accepts.
pub fn is_email_shaped(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain must have at least one dot
    domain.contains('.')
}
