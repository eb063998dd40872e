use crate::domain::EmailAddress;

/// Address that is notified about every captured lead.
#[derive(Clone, Debug)]
pub struct NotificationRecipient(pub EmailAddress);
