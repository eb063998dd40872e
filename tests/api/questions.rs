use serde_json::{
    json,
    Value,
};
use wiremock::matchers::{
    body_partial_json,
    header,
    method,
    path,
};
use wiremock::{
    Mock,
    ResponseTemplate,
};

use crate::api::helpers::*;

fn question_set(questions_per_category: usize) -> Value {
    let category = |title: &str| {
        json!({
            "title": title,
            "description": format!("Learn about {}", title.to_lowercase()),
            "questions": (1..=questions_per_category)
                .map(|i| format!("{} question {}?", title, i))
                .collect::<Vec<_>>(),
        })
    };
    json!({
        "problemDiscovery": category("Problem Discovery"),
        "currentSolution": category("Current Solution"),
        "urgencyBudget": category("Urgency & Budget"),
        "jobsToBeDone": category("Jobs To Be Done"),
        "decisionProcess": category("Decision Process"),
    })
}

fn interview() -> Value {
    json!({"businessIdea": "scheduling tool for dentists", "interviewSetting": "conference"})
}

#[actix_rt::test]
async fn fenced_questions_are_returned_unchanged() {
    let test_app = spawn_app().await;
    let expected = question_set(6);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer llm-token"))
        .and(body_partial_json(json!({"max_tokens": 4000})))
        .respond_with(completion_response(&format!(
            "```json\n{}\n```",
            serde_json::to_string_pretty(&expected).unwrap()
        )))
        .expect(1)
        .mount(&test_app.llm_server)
        .await;

    let response = test_app.post_json("/generate-questions", &interview()).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(response.json::<Value>().await.unwrap(), expected);

    let prompt = test_app.llm_requests().await[0]["messages"][0]["content"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(prompt.contains("scheduling tool for dentists"));
    assert!(prompt.contains("conference"));
}

#[actix_rt::test]
async fn generate_questions_returns_a_400_with_missing_field() {
    let test_app = spawn_app().await;
    test_app.expect_no_upstream_calls().await;

    let invalid_data = vec![
        (json!({}), "empty body"),
        (json!({"businessIdea": "an idea"}), "missing interview setting"),
        (json!({"interviewSetting": "casual"}), "missing business idea"),
        (
            json!({"businessIdea": "", "interviewSetting": "casual"}),
            "empty business idea",
        ),
    ];
    for (body, error_message) in invalid_data {
        let response = test_app.post_json("/generate-questions", &body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "Question generation with {} did not fail",
            error_message
        );
    }
}

#[actix_rt::test]
async fn unparsable_questions_return_a_500_and_the_server_keeps_running() {
    let test_app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(completion_response(
            "Here are some great questions:\n1. What do you do?",
        ))
        .expect(1)
        .mount(&test_app.llm_server)
        .await;

    let response = test_app.post_json("/generate-questions", &interview()).await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to parse AI response");

    let health = send_get_request(&format!("{}/api/health", test_app.address)).await;
    assert_eq!(200, health.status().as_u16());
}

#[actix_rt::test]
async fn failed_completion_returns_a_500() {
    let test_app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(1)
        .mount(&test_app.llm_server)
        .await;

    let response = test_app.post_json("/generate-questions", &interview()).await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to generate questions");
    assert!(body["details"].as_str().unwrap().contains("rate limited"));
}

#[actix_rt::test]
async fn strict_schema_rejects_wrong_question_count() {
    let test_app = spawn_app_with(|c| c.generation.strict_question_schema = true).await;
    Mock::given(method("POST"))
        .respond_with(completion_response(&question_set(5).to_string()))
        .expect(1)
        .mount(&test_app.llm_server)
        .await;

    let response = test_app.post_json("/generate-questions", &interview()).await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(
        response.json::<Value>().await.unwrap()["error"],
        "Failed to parse AI response"
    );
}

#[actix_rt::test]
async fn lenient_schema_returns_wrong_question_count_as_is() {
    let test_app = spawn_app().await;
    let expected = question_set(5);
    Mock::given(method("POST"))
        .respond_with(completion_response(&expected.to_string()))
        .expect(1)
        .mount(&test_app.llm_server)
        .await;

    let response = test_app.post_json("/generate-questions", &interview()).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(response.json::<Value>().await.unwrap(), expected);
}
