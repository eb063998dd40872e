use std::collections::HashSet;

use serde_json::{
    json,
    Value,
};
use wiremock::matchers::{
    header,
    method,
    path,
};
use wiremock::{
    Mock,
    ResponseTemplate,
};

use crate::api::helpers::*;

async fn mount_providers(test_app: &TestApp, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .and(header("Authorization", "Bearer email-token"))
        .respond_with(ResponseTemplate::new(202))
        .expect(expected_calls)
        .mount(&test_app.email_server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/v2/publications/{}/subscriptions", PUBLICATION_ID)))
        .and(header("Authorization", "Bearer subscription-token"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"data": {"id": "sub_1"}})),
        )
        .expect(expected_calls)
        .mount(&test_app.subscription_server)
        .await;
}

#[actix_rt::test]
async fn capture_email_returns_a_200_for_valid_lead() {
    for endpoint in ["/api/capture-email", "/subscribe"].iter() {
        let test_app = spawn_app().await;
        mount_providers(&test_app, 1).await;

        let response = test_app
            .post_json(
                endpoint,
                &json!({"email": "ursula@example.com", "businessIdea": "A library for ansibles"}),
            )
            .await;

        assert_eq!(200, response.status().as_u16(), "{} failed", endpoint);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({"success": true, "message": "Email captured successfully"})
        );
    }
}

#[actix_rt::test]
async fn capture_email_returns_a_400_with_missing_email() {
    let test_app = spawn_app().await;
    test_app.expect_no_upstream_calls().await;

    let invalid_data = vec![
        (json!({}), "empty body"),
        (json!({"businessIdea": "a bakery"}), "missing email"),
        (json!({"email": "", "businessIdea": "a bakery"}), "empty email"),
        (json!({"email": null}), "null email"),
    ];
    for (body, error_message) in invalid_data {
        let response = test_app.post_json("/api/capture-email", &body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "Capture with {} did not fail",
            error_message
        );
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({"error": "Email is required"})
        );
    }
}

#[actix_rt::test]
async fn capture_email_returns_a_400_with_invalid_json() {
    let test_app = spawn_app().await;
    test_app.expect_no_upstream_calls().await;

    let response = send_post_request(
        &format!("{}/api/capture-email", test_app.address),
        "{\"email\": ".to_string(),
    )
    .await;

    assert_eq!(400, response.status().as_u16());
    assert!(response.json::<Value>().await.unwrap()["error"].is_string());
}

#[actix_rt::test]
async fn notification_and_subscription_carry_the_lead() {
    let test_app = spawn_app().await;
    mount_providers(&test_app, 1).await;

    test_app
        .post_json(
            "/api/capture-email",
            &json!({"email": "a@b.com", "businessIdea": "meal kits for climbers"}),
        )
        .await;

    let notifications = received_json(&test_app.email_server).await;
    let notification = &notifications[0];
    assert_eq!(
        notification["personalizations"][0]["to"][0]["email"],
        NOTIFICATION_RECIPIENT
    );
    let html = notification["content"][1]["value"].as_str().unwrap();
    assert!(html.contains("a@b.com"));
    assert!(html.contains("meal kits for climbers"));

    let subscriptions = received_json(&test_app.subscription_server).await;
    assert_eq!(
        subscriptions[0],
        json!({
            "email": "a@b.com",
            "reactivate_existing": false,
            "send_welcome_email": true,
            "utm_source": "question-generator",
            "utm_medium": "lead-magnet",
        })
    );
}

#[actix_rt::test]
async fn notification_without_business_idea_says_not_provided() {
    let test_app = spawn_app().await;
    mount_providers(&test_app, 1).await;

    test_app
        .post_json("/api/capture-email", &json!({"email": "a@b.com"}))
        .await;

    let notifications = received_json(&test_app.email_server).await;
    let notification = &notifications[0];
    for part in notification["content"].as_array().unwrap() {
        assert!(part["value"].as_str().unwrap().contains("Not provided"));
    }
}

#[actix_rt::test]
async fn failed_notification_skips_the_subscription() {
    let test_app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("mail service down"))
        .expect(1)
        .mount(&test_app.email_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&test_app.subscription_server)
        .await;

    let response = test_app
        .post_json("/api/capture-email", &json!({"email": "a@b.com"}))
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to capture email");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("mail service down"));
}

#[actix_rt::test]
async fn failed_subscription_returns_a_500() {
    let test_app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&test_app.email_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&test_app.subscription_server)
        .await;

    let response = test_app
        .post_json("/api/capture-email", &json!({"email": "a@b.com"}))
        .await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(
        response.json::<Value>().await.unwrap()["error"],
        "Failed to capture email"
    );
}

#[actix_rt::test]
async fn error_details_are_hidden_when_disabled() {
    let test_app = spawn_app_with(|c| c.application.expose_error_details = false).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("mail service down"))
        .mount(&test_app.email_server)
        .await;

    let response = test_app
        .post_json("/api/capture-email", &json!({"email": "a@b.com"}))
        .await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"error": "Failed to capture email"})
    );
}

#[actix_rt::test]
async fn concurrent_captures_do_not_interfere() {
    let test_app = spawn_app().await;
    mount_providers(&test_app, 2).await;

    let first_body = json!({"email": "first@example.com"});
    let second_body = json!({"email": "second@example.com"});
    let (first, second) = tokio::join!(
        test_app.post_json("/api/capture-email", &first_body),
        test_app.post_json("/api/capture-email", &second_body),
    );
    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());

    let subscribed: HashSet<String> = received_json(&test_app.subscription_server)
        .await
        .iter()
        .map(|body| body["email"].as_str().unwrap().to_string())
        .collect();
    let expected: HashSet<String> = vec!["first@example.com", "second@example.com"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(subscribed, expected);

    for notification in received_json(&test_app.email_server).await {
        let html = notification["content"][1]["value"].as_str().unwrap();
        assert!(html.contains("first@example.com") != html.contains("second@example.com"));
    }
}
