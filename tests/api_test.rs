//! End-to-end tests: the real router served on an ephemeral port, with the
//! transactional email provider stood in by httpmock.

use std::net::SocketAddr;

use anyhow::Result;
use futureos::{app, config::Config, state::AppState};
use httpmock::prelude::*;
use serde_json::{Value, json};

async fn spawn_app(config: Config) -> Result<String> {
    let state = AppState::from_config(config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(
            listener,
            app(state).into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    Ok(format!("http://{addr}"))
}

fn sendgrid_config(server: &MockServer) -> Config {
    Config {
        sendgrid_api_key: Some("test-key".to_string()),
        sendgrid_base_url: server.base_url(),
        ..Config::default()
    }
}

fn contact_payload() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "",
        "subject": "Course enquiry",
        "message": "I would like to know more about the LLM course."
    })
}

#[tokio::test]
async fn contact_form_is_relayed_to_the_provider() -> Result<()> {
    let provider = MockServer::start_async().await;
    let mock = provider
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v3/mail/send")
                .header("authorization", "Bearer test-key")
                .body_contains("Contact Form Submission - Course enquiry")
                .body_contains("ada@example.com");
            then.status(202).header("x-message-id", "msg-123");
        })
        .await;

    let base = spawn_app(sendgrid_config(&provider)).await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/send-email/contact"))
        .json(&contact_payload())
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Contact form submitted successfully");
    assert_eq!(body["messageId"], "msg-123");

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn invalid_contact_form_is_rejected_without_a_provider_call() -> Result<()> {
    let provider = MockServer::start_async().await;
    let mock = provider
        .mock_async(|when, then| {
            when.method(POST).path("/v3/mail/send");
            then.status(202);
        })
        .await;

    let base = spawn_app(sendgrid_config(&provider)).await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/send-email/contact"))
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "not-an-email",
            "subject": "Hi",
            "message": "short"
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "message"]);

    assert_eq!(mock.hits_async().await, 0);
    Ok(())
}

#[tokio::test]
async fn malformed_json_maps_to_invalid_data_format() -> Result<()> {
    let provider = MockServer::start_async().await;
    let base = spawn_app(sendgrid_config(&provider)).await?;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-email/contact"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Invalid data format");
    Ok(())
}

#[tokio::test]
async fn provider_failure_surfaces_as_503() -> Result<()> {
    let provider = MockServer::start_async().await;
    provider
        .mock_async(|when, then| {
            when.method(POST).path("/v3/mail/send");
            then.status(500).body("upstream exploded");
        })
        .await;

    let base = spawn_app(sendgrid_config(&provider)).await?;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-email/contact"))
        .json(&contact_payload())
        .send()
        .await?;

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email service temporarily unavailable");
    Ok(())
}

#[tokio::test]
async fn testimonial_email_carries_the_star_rating() -> Result<()> {
    let provider = MockServer::start_async().await;
    let mock = provider
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v3/mail/send")
                .body_contains("New Testimonial Submission - Sarah Johnson")
                .body_contains("⭐⭐⭐⭐☆ (4/5)");
            then.status(202).header("x-message-id", "msg-456");
        })
        .await;

    let base = spawn_app(sendgrid_config(&provider)).await?;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-email/testimonial"))
        .json(&json!({
            "name": "Sarah Johnson",
            "role": "Software Engineer",
            "company": "Tech Solutions Inc.",
            "course": "Generative AI Fundamentals",
            "rating": 4,
            "testimonial": "The hands-on projects made complex concepts easy to grasp."
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Testimonial submitted successfully");

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn fdp_registration_round_trips() -> Result<()> {
    let provider = MockServer::start_async().await;
    let mock = provider
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v3/mail/send")
                .body_contains("FDP Registration Request - Sri Sai College of Pharmacy")
                .body_contains("Expected Participants:");
            then.status(202).header("x-message-id", "msg-789");
        })
        .await;

    let base = spawn_app(sendgrid_config(&provider)).await?;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-email/fdp-registration"))
        .json(&json!({
            "collegeName": "Sri Sai College of Pharmacy",
            "contactPerson": "Dr. Priya Sharma",
            "email": "priya@college.edu",
            "phone": "+919876543210",
            "location": "Pathankot, Punjab",
            "expectedParticipants": "45",
            "preferredDates": "Last week of October",
            "specificRequirements": ""
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "FDP registration request sent successfully");

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn email_endpoints_are_rate_limited_per_ip() -> Result<()> {
    let provider = MockServer::start_async().await;
    provider
        .mock_async(|when, then| {
            when.method(POST).path("/v3/mail/send");
            then.status(202);
        })
        .await;

    let config = Config {
        rate_limit_max: 2,
        ..sendgrid_config(&provider)
    };
    let base = spawn_app(config).await?;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let response = client
            .post(format!("{base}/api/send-email/contact"))
            .json(&contact_payload())
            .send()
            .await?;
        assert_eq!(response.status(), 200);
    }

    let response = client
        .post(format!("{base}/api/send-email/contact"))
        .json(&contact_payload())
        .send()
        .await?;
    assert_eq!(response.status(), 429);
    let body: Value = response.json().await?;
    assert_eq!(
        body["message"],
        "Too many email requests from this IP, please try again later."
    );
    Ok(())
}

#[tokio::test]
async fn health_probe_reports_running() -> Result<()> {
    let base = spawn_app(Config::default()).await?;

    let response = reqwest::get(format!("{base}/api/send-email/health")).await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Email service is running");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
    Ok(())
}

#[tokio::test]
async fn catalog_listing_filters_by_level_and_category() -> Result<()> {
    let base = spawn_app(Config::default()).await?;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{base}/api/courses"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["total"], 14);
    assert_eq!(body["count"], 14);

    let body: Value = client
        .get(format!("{base}/api/courses?category=Pharma&level=Advanced"))
        .send()
        .await?
        .json()
        .await?;
    let ids: Vec<u64> = body["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![9, 15, 16]);

    let body: Value = client
        .get(format!("{base}/api/courses?q=docker"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["count"], 1);
    assert_eq!(body["courses"][0]["title"], "Building AI-Powered Applications");

    let response = client
        .get(format!("{base}/api/courses?level=expert"))
        .send()
        .await?;
    assert_eq!(response.status(), 400);
    Ok(())
}

#[tokio::test]
async fn course_detail_and_payment_plans() -> Result<()> {
    let base = spawn_app(Config::default()).await?;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{base}/api/courses/3"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["title"], "AI-Powered Content Creation");
    assert_eq!(body["curriculum"].as_array().unwrap().len(), 6);
    assert_eq!(body["instructor"]["name"], "Satish Karri");
    assert_eq!(body["price"], "₹12,999");

    let response = client.get(format!("{base}/api/courses/999")).send().await?;
    assert_eq!(response.status(), 404);

    let body: Value = client
        .get(format!("{base}/api/courses/1/payment-plans"))
        .send()
        .await?
        .json()
        .await?;
    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans[0]["amount"], 16999);
    assert_eq!(plans[1]["amount"], 5667);
    assert_eq!(plans[1]["totalAmount"], 17001);
    assert_eq!(plans[2]["amount"], 2834);
    assert_eq!(plans[2]["totalAmount"], 17004);
    Ok(())
}

#[tokio::test]
async fn static_content_endpoints_serve_the_site_data() -> Result<()> {
    let base = spawn_app(Config::default()).await?;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{base}/api/testimonials"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["testimonials"].as_array().unwrap().len(), 4);
    assert_eq!(body["testimonials"][0]["name"], "Sarah Johnson");

    let body: Value = client
        .get(format!("{base}/api/fdp/events"))
        .send()
        .await?
        .json()
        .await?;
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["status"], "completed");
    assert_eq!(events[0]["participants"], 45);
    Ok(())
}

#[tokio::test]
async fn unknown_endpoints_return_the_json_404() -> Result<()> {
    let base = spawn_app(Config::default()).await?;

    let response = reqwest::get(format!("{base}/api/nope")).await?;
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Endpoint not found");
    Ok(())
}
