// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Shared fixtures for jobdeck tests: a scriptable mock prediction server
//! and valid form inputs for every panel.

use anyhow::{Context, Result, anyhow};
use jobdeck_app::{
    AttritionFormInput, CompetitionFormInput, EmployeeClusteringFormInput, FinancialFormInput,
    MarketSegmentationFormInput, PostingFormInput, SalaryFormInput, SalaryPrediction,
    SkillAnalysisFormInput, YesNo,
};
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Response, Server};

/// One scripted reply from the mock service.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
    pub content_type: &'static str,
}

pub fn json_response(status: u16, body: impl Into<String>) -> CannedResponse {
    CannedResponse {
        status,
        body: body.into(),
        content_type: "application/json",
    }
}

pub fn text_response(status: u16, body: impl Into<String>) -> CannedResponse {
    CannedResponse {
        status,
        body: body.into(),
        content_type: "text/plain",
    }
}

pub fn csv_response(body: impl Into<String>) -> CannedResponse {
    CannedResponse {
        status: 200,
        body: body.into(),
        content_type: "text/csv",
    }
}

/// What the mock service saw for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedRequest {
    pub method: String,
    pub url: String,
    pub body: String,
    pub content_type: Option<String>,
}

impl ReceivedRequest {
    pub fn json_body(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body).context("parse captured request body")
    }
}

/// In-process HTTP server that replies with a scripted response per
/// request, in order, and records everything it receives. `finish()` joins
/// the serving thread; every scripted response must have been consumed by
/// then.
pub struct MockPredictionServer {
    base_url: String,
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockPredictionServer {
    pub fn serve(responses: Vec<CannedResponse>) -> Result<Self> {
        let server =
            Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
        let base_url = format!("http://{}", server.server_addr());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for canned in responses {
                let mut request = match server.recv() {
                    Ok(request) => request,
                    Err(_) => return,
                };

                let content_type = request
                    .headers()
                    .iter()
                    .find(|header| header.field.equiv("Content-Type"))
                    .map(|header| header.value.as_str().to_owned());
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                if let Ok(mut log) = captured.lock() {
                    log.push(ReceivedRequest {
                        method: request.method().as_str().to_owned(),
                        url: request.url().to_owned(),
                        body,
                        content_type,
                    });
                }

                let response = Response::from_string(canned.body)
                    .with_status_code(canned.status)
                    .with_header(
                        Header::from_bytes("Content-Type", canned.content_type)
                            .expect("valid content type header"),
                    );
                let _ = request.respond(response);
            }
        });

        Ok(Self {
            base_url,
            requests,
            handle: Some(handle),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn finish(mut self) -> Vec<ReceivedRequest> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("mock server thread should join");
        }
        match self.requests.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

pub fn valid_salary_form() -> SalaryFormInput {
    SalaryFormInput {
        gender: "Female".to_owned(),
        education_level: "Master's Degree".to_owned(),
        job_title: "Data Scientist".to_owned(),
        ..SalaryFormInput::default()
    }
}

pub fn valid_attrition_form() -> AttritionFormInput {
    AttritionFormInput::default()
}

pub fn valid_market_segmentation_form() -> MarketSegmentationFormInput {
    MarketSegmentationFormInput {
        job_title: "Rust developer".to_owned(),
        description: "Build a terminal dashboard".to_owned(),
        ..MarketSegmentationFormInput::default()
    }
}

pub fn valid_financial_form() -> FinancialFormInput {
    FinancialFormInput {
        job_title: "Backend engineer".to_owned(),
        description: "API work".to_owned(),
        ..FinancialFormInput::default()
    }
}

pub fn valid_competition_form() -> CompetitionFormInput {
    CompetitionFormInput {
        job_title: "Designer".to_owned(),
        description: "Logo refresh".to_owned(),
        ..CompetitionFormInput::default()
    }
}

pub fn valid_posting_form() -> PostingFormInput {
    PostingFormInput::default()
}

pub fn valid_employee_clustering_form() -> EmployeeClusteringFormInput {
    EmployeeClusteringFormInput {
        monthly_income: Some(5_000),
        age: Some(31),
        years_at_company: Some(6),
        work_life_balance: Some(3),
        job_satisfaction: Some(4),
        employee_recognition: Some(3),
        overtime: Some(YesNo::No),
        leadership: Some(YesNo::Yes),
        innovation: Some(YesNo::No),
        remote_work: Some(YesNo::Yes),
        dependents: 1,
        distance: 8,
    }
}

pub fn valid_skill_analysis_form() -> SkillAnalysisFormInput {
    SkillAnalysisFormInput {
        name: "Avery Walker".to_owned(),
        email: "avery@example.com".to_owned(),
        skills: vec!["Python".to_owned(), "SQL".to_owned()],
        current_skill: String::new(),
        location: "Remote".to_owned(),
        desired_role: "Data Analyst".to_owned(),
    }
}

pub fn sample_salary_prediction() -> SalaryPrediction {
    SalaryPrediction {
        salary: "$90,000 - $115,000".to_owned(),
        confidence: "85%".to_owned(),
        key_drivers: vec!["Experience drives compensation".to_owned()],
        business_insight: "Strong demand for this role".to_owned(),
    }
}

pub const SALARY_RESPONSE_JSON: &str = r#"{
    "salary": "$90,000 - $115,000",
    "confidence": "85%",
    "keyDrivers": ["Experience drives compensation"],
    "businessInsight": "Strong demand for this role"
}"#;

pub const WORKFORCE_CLUSTER_RESPONSE_JSON: &str = r#"{
    "cluster_id": 4,
    "name": "Quantitative Analysts",
    "archetype": "analyst",
    "cohesion": "high",
    "size": 120,
    "mean_silhouette": 0.412,
    "interpretation": "Numerate problem solvers",
    "top_features": ["mathematical reasoning", "programming"]
}"#;

pub const SENTIMENT_RESPONSE_JSON: &str = r#"{
    "request_id": "req-42",
    "total_reviews": 25,
    "sentiment_counts": {"positive": 15, "neutral": 7, "negative": 3},
    "sentiment_percentages": {"positive": 60.0, "neutral": 28.0, "negative": 12.0},
    "satisfaction_score": 74.0,
    "average_confidence": 0.88,
    "common_words": {"positive": [["team", 9]], "neutral": [], "negative": [["overtime", 3]]}
}"#;

pub const HR_REPORT_RESPONSE_JSON: &str = r#"{
    "dashboard": {
        "total_employees": 2,
        "avg_salary": 70500.0,
        "avg_predicted_salary": 72250.0,
        "total_underpaid": 1,
        "total_overpaid": 0,
        "high_risk_count": 1,
        "medium_risk_count": 0,
        "low_risk_count": 1,
        "by_department": [
            {"department": "Engineering", "count": 2, "avg_salary": 70500.0, "avg_gap": -1750.0}
        ],
        "by_location": [
            {"location": "Remote", "count": 2, "avg_salary": 70500.0}
        ],
        "by_peer_group": [
            {"peer_group": 1, "count": 2, "avg_experience": 5.5, "avg_performance": 3.9}
        ]
    },
    "employees": [
        {
            "employee_id": 1,
            "name": "Sam Reed",
            "job_title": "Engineer",
            "department": "Engineering",
            "location": "Remote",
            "years_experience": 4.0,
            "performance_score": 4.1,
            "salary": 65000.0,
            "predicted_salary": 70000.0,
            "salary_gap": -5000.0,
            "vs_market": "below",
            "peer_group": 1,
            "is_anomaly": true,
            "anomaly_type": "Underpaid",
            "retention_risk": "High"
        },
        {
            "employee_id": 2,
            "name": "Jordan Hill",
            "job_title": "Engineer",
            "department": "Engineering",
            "location": "Remote",
            "years_experience": 7.0,
            "performance_score": 3.7,
            "salary": 76000.0,
            "predicted_salary": 74500.0,
            "salary_gap": 1500.0,
            "vs_market": "at",
            "peer_group": 1,
            "is_anomaly": false,
            "anomaly_type": null,
            "retention_risk": "Low"
        }
    ]
}"#;
