use serde::Serialize;

/// Body of a `publications/{id}/subscriptions` call.
#[derive(Serialize)]
pub struct SubscriptionRequest<'a> {
    pub email: &'a str,
    pub reactivate_existing: bool,
    pub send_welcome_email: bool,
    pub utm_source: &'a str,
    pub utm_medium: &'a str,
}

impl<'a> SubscriptionRequest<'a> {
    pub fn new(email: &'a str, utm_source: &'a str, utm_medium: &'a str) -> Self {
        Self {
            email,
            reactivate_existing: false,
            send_welcome_email: true,
            utm_source,
            utm_medium,
        }
    }
}
