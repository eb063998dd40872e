use actix_web::{
    web,
    HttpResponse,
};
use chrono::{
    DateTime,
    SecondsFormat,
    Utc,
};
use maud::html;
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    LeadSubmission,
    NotificationRecipient,
};
use crate::email_client::EmailClient;
use crate::routes::{
    ApiError,
    ErrorReporting,
    RouteError,
};
use crate::subscription_client::SubscriptionClient;
use crate::upstream::UpstreamError;

const NOTIFICATION_SUBJECT: &str = "New Question Generator Signup";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    email: Option<String>,
    business_idea: Option<String>,
}

#[tracing::instrument(
    name = "capturing lead",
    skip(form, email_client, subscription_client, recipient, reporting),
    fields(email = ?form.email)
)]
pub async fn capture_email(
    form: web::Json<LeadForm>,
    email_client: web::Data<EmailClient>,
    subscription_client: web::Data<SubscriptionClient>,
    recipient: web::Data<NotificationRecipient>,
    reporting: web::Data<ErrorReporting>,
) -> Result<HttpResponse, ApiError> {
    capture(
        form.into_inner(),
        &email_client,
        &subscription_client,
        &recipient,
    )
    .await
    .map_err(|e| reporting.report("Failed to capture email", e))?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Email captured successfully",
    })))
}

/// The subscription is only attempted once the notification went out.
async fn capture(
    form: LeadForm,
    email_client: &EmailClient,
    subscription_client: &SubscriptionClient,
    recipient: &NotificationRecipient,
) -> Result<(), RouteError> {
    let lead = LeadSubmission::parse(form.email, form.business_idea)?;
    send_notification(email_client, recipient, &lead, Utc::now()).await?;
    subscription_client.subscribe(lead.email()).await?;
    Ok(())
}

#[tracing::instrument(
    name = "sending lead notification",
    skip(email_client, recipient, lead, captured_at)
)]
async fn send_notification(
    email_client: &EmailClient,
    recipient: &NotificationRecipient,
    lead: &LeadSubmission,
    captured_at: DateTime<Utc>,
) -> Result<(), UpstreamError> {
    let timestamp = captured_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    email_client
        .send_email(
            &recipient.0,
            NOTIFICATION_SUBJECT,
            &notification_html(lead, &timestamp),
            &notification_text(lead, &timestamp),
        )
        .await?;
    tracing::info!("notification email sent to {}", recipient.0.as_ref());
    Ok(())
}

/// Lead details are submitted by anyone filling in the form: maud escapes them.
fn notification_html(lead: &LeadSubmission, timestamp: &str) -> String {
    html! {
        h2 { "New User Registered via the Question Generator" }
        p { strong { "Email:" } " " (lead.email()) }
        p { strong { "Business Idea:" } " " (lead.business_idea()) }
        p { strong { "Timestamp:" } " " (timestamp) }
        hr;
        p { em { "This notification was sent automatically from the Question Generator lead magnet." } }
    }
    .into_string()
}

fn notification_text(lead: &LeadSubmission, timestamp: &str) -> String {
    format!(
        "New user registered via the Question Generator\n\n\
         Email: {}\n\
         Business Idea: {}\n\
         Timestamp: {}\n\n\
         This notification was sent automatically from the Question Generator lead magnet.",
        lead.email(),
        lead.business_idea(),
        timestamp
    )
}
