// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use jobdeck_client::{
    Client, CompetitionRequest, FeatureVectorRequest, PostingRequest, SalaryRequest,
};
use jobdeck_testkit::{
    MockPredictionServer, SALARY_RESPONSE_JSON, SENTIMENT_RESPONSE_JSON,
    WORKFORCE_CLUSTER_RESPONSE_JSON, csv_response, json_response, text_response,
    valid_competition_form, valid_posting_form, valid_salary_form,
};
use std::time::Duration;

fn client_for(server: &MockPredictionServer) -> Result<Client> {
    Client::new(server.base_url(), Duration::from_secs(2))
}

#[test]
fn unreachable_service_error_names_the_base_url() {
    let client = Client::new("http://127.0.0.1:1", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .list_cluster_features()
        .expect_err("request should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(message.contains("cannot reach http://127.0.0.1:1"));
    assert!(message.contains("prediction service"));
}

#[test]
fn salary_prediction_posts_one_request_to_the_fixed_path() -> Result<()> {
    let server = MockPredictionServer::serve(vec![json_response(200, SALARY_RESPONSE_JSON)])?;
    let client = client_for(&server)?;

    let request = SalaryRequest::from(&valid_salary_form());
    let prediction = client.predict_salary(&request)?;
    assert_eq!(prediction.salary, "$90,000 - $115,000");
    assert_eq!(prediction.key_drivers.len(), 1);

    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/salary/predict");

    let body = requests[0].json_body()?;
    assert_eq!(body["objectiveId"], "salary_prediction");
    assert_eq!(body["inputs"]["jobTitle"], "Data Scientist");
    Ok(())
}

#[test]
fn competition_failure_extracts_the_fastapi_detail() -> Result<()> {
    let server = MockPredictionServer::serve(vec![json_response(
        500,
        r#"{"detail":"model unavailable"}"#,
    )])?;
    let client = client_for(&server)?;

    let error = client
        .predict_competition(&CompetitionRequest::from(&valid_competition_form()))
        .expect_err("500 must map to an error");
    assert_eq!(error.to_string(), "server error (500): model unavailable");

    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "/competition/predict");
    Ok(())
}

#[test]
fn cluster_feature_list_round_trips() -> Result<()> {
    let server = MockPredictionServer::serve(vec![json_response(
        200,
        r#"["skill_programming_lv","skill_systems_analysis_lv"]"#,
    )])?;
    let client = client_for(&server)?;

    let features = client.list_cluster_features()?;
    assert_eq!(
        features,
        vec![
            "skill_programming_lv".to_owned(),
            "skill_systems_analysis_lv".to_owned()
        ]
    );

    let requests = server.finish();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/clustering/features");
    Ok(())
}

#[test]
fn workforce_cluster_prediction_sends_the_feature_map() -> Result<()> {
    let server =
        MockPredictionServer::serve(vec![json_response(200, WORKFORCE_CLUSTER_RESPONSE_JSON)])?;
    let client = client_for(&server)?;

    let request =
        FeatureVectorRequest::new([("skill_programming_lv".to_owned(), 4.5_f64)]);
    let cluster = client.predict_workforce_cluster(&request)?;
    assert_eq!(cluster.cluster_id, 4);
    assert_eq!(cluster.top_features.len(), 2);

    let requests = server.finish();
    let body = requests[0].json_body()?;
    assert_eq!(body["features"]["skill_programming_lv"], 4.5);
    Ok(())
}

#[test]
fn remote_prediction_decodes_the_binary_verdict() -> Result<()> {
    let server = MockPredictionServer::serve(vec![json_response(200, r#"{"prediction":1}"#)])?;
    let client = client_for(&server)?;

    let verdict = client.predict_remote(&PostingRequest::from(&valid_posting_form()))?;
    assert_eq!(verdict.label(), "Remote");

    let requests = server.finish();
    assert_eq!(requests[0].url, "/remote/predict");
    let body = requests[0].json_body()?;
    assert_eq!(body["job_title"], "Software Engineer");
    Ok(())
}

#[test]
fn sentiment_upload_uses_multipart_and_decodes_the_report() -> Result<()> {
    let server = MockPredictionServer::serve(vec![json_response(200, SENTIMENT_RESPONSE_JSON)])?;
    let client = client_for(&server)?;

    let report =
        client.analyze_sentiment("reviews.csv", b"review_text\ngreat team\n".to_vec())?;
    assert_eq!(report.request_id.as_deref(), Some("req-42"));
    assert_eq!(report.total_reviews, 25);

    let requests = server.finish();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/sentiment/analyze");
    let content_type = requests[0]
        .content_type
        .as_deref()
        .expect("multipart content type");
    assert!(content_type.starts_with("multipart/form-data"));
    assert!(requests[0].body.contains("reviews.csv"));
    assert!(requests[0].body.contains("great team"));
    Ok(())
}

#[test]
fn sentiment_download_returns_raw_bytes() -> Result<()> {
    let server = MockPredictionServer::serve(vec![csv_response("review_text,sentiment\nok,neutral\n")])?;
    let client = client_for(&server)?;

    let bytes = client.download_sentiment_csv("req-42")?;
    assert_eq!(bytes, b"review_text,sentiment\nok,neutral\n".to_vec());

    let requests = server.finish();
    assert_eq!(requests[0].url, "/sentiment/download/req-42");
    Ok(())
}

#[test]
fn sentiment_download_maps_service_refusal_to_detail() -> Result<()> {
    let server = MockPredictionServer::serve(vec![json_response(
        503,
        r#"{"detail":"Sentiment analysis temporarily disabled"}"#,
    )])?;
    let client = client_for(&server)?;

    let error = client
        .download_sentiment_csv("req-42")
        .expect_err("503 must map to an error");
    assert!(error.to_string().contains("temporarily disabled"));

    server.finish();
    Ok(())
}

#[test]
fn skill_lists_round_trip() -> Result<()> {
    let server = MockPredictionServer::serve(vec![
        json_response(200, r#"["Python","SQL"]"#),
        json_response(200, r#"["Data Analyst","Data Scientist"]"#),
    ])?;
    let client = client_for(&server)?;

    assert_eq!(client.list_available_skills()?, vec!["Python", "SQL"]);
    assert_eq!(
        client.list_job_titles()?,
        vec!["Data Analyst", "Data Scientist"]
    );

    let requests = server.finish();
    assert_eq!(requests[0].url, "/api/available-skills/");
    assert_eq!(requests[1].url, "/api/job-titles/");
    Ok(())
}

#[test]
fn hr_upload_decodes_dashboard_and_employee_rows() -> Result<()> {
    let server = MockPredictionServer::serve(vec![json_response(
        200,
        jobdeck_testkit::HR_REPORT_RESPONSE_JSON,
    )])?;
    let client = client_for(&server)?;

    let report = client.upload_hr_csv("hr.csv", b"employee_id,salary\n1,65000\n".to_vec())?;
    assert_eq!(report.dashboard.total_employees, 2);
    assert_eq!(report.employees.len(), 2);
    assert_eq!(report.employees[0].retention_risk.as_deref(), Some("High"));
    assert_eq!(report.employees[1].anomaly_type, None);

    let requests = server.finish();
    assert_eq!(requests[0].url, "/hr/upload-csv");
    Ok(())
}

#[test]
fn plain_text_error_bodies_pass_through_when_short() -> Result<()> {
    let server = MockPredictionServer::serve(vec![text_response(502, "bad gateway")])?;
    let client = client_for(&server)?;

    let error = client
        .predict_remote(&PostingRequest::from(&valid_posting_form()))
        .expect_err("502 must map to an error");
    assert_eq!(error.to_string(), "server error (502): bad gateway");

    server.finish();
    Ok(())
}
