use std::convert::TryFrom;

use validator::validate_email;

use crate::domain::MalformedInput;

/// A syntactically valid address, used for the configured notification
/// sender and recipient.
#[derive(Clone, Debug)]
pub struct EmailAddress(String);

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = MalformedInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if validate_email(email.as_str()) {
            Ok(EmailAddress(email))
        } else {
            Err(MalformedInput::InvalidEmail { email })
        }
    }
}
