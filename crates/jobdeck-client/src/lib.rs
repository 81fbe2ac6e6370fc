// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use jobdeck_app::{
    AttritionFormInput, AttritionPrediction, CompetitionFormInput, CompetitionLevel,
    DemandForecastFormInput, DemandForecastResult, EmployeeCluster, EmployeeClusteringFormInput,
    FinancialForecast, FinancialFormInput, HrAnalyticsReport, MarketSegment,
    MarketSegmentationFormInput, PostingCluster, PostingFormInput, RemoteVerdict, RoleSegment,
    SalaryFormInput, SalaryPrediction, SentimentReport, SkillAnalysisFormInput,
    SkillAnalysisReport, StrategicSegmentationFormInput, WorkforceCluster,
    WorkforceClusteringFormInput,
};
use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client as HttpClient, Response};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Blocking client for the prediction service. One fixed path per panel,
/// JSON in, JSON out; cloneable so each submission can run on its own
/// worker thread.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("api.base_url must not be empty");
        }
        let parsed = url::Url::parse(&base_url)
            .with_context(|| format!("api.base_url {base_url:?} is not a valid URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "api.base_url {base_url:?} must use http or https, got {}",
                parsed.scheme()
            );
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        request: &T,
    ) -> Result<R> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(request)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        decode_json(response, path)
    }

    fn get_json<R: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<R> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        decode_json(response, path)
    }

    fn post_csv<R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<R> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str("text/csv")
            .context("build CSV upload part")?;
        let form = Form::new().part("file", part);
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .multipart(form)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        decode_json(response, path)
    }

    pub fn predict_salary(&self, request: &SalaryRequest) -> Result<SalaryPrediction> {
        self.post_json("/salary/predict", request)
    }

    pub fn predict_attrition(&self, request: &AttritionRequest) -> Result<AttritionPrediction> {
        self.post_json("/attrition/predict", request)
    }

    pub fn list_cluster_features(&self) -> Result<Vec<String>> {
        self.get_json("/clustering/features")
    }

    pub fn predict_workforce_cluster(
        &self,
        request: &FeatureVectorRequest,
    ) -> Result<WorkforceCluster> {
        self.post_json("/clustering/predict", request)
    }

    pub fn predict_market_segment(
        &self,
        request: &MarketSegmentationRequest,
    ) -> Result<MarketSegment> {
        self.post_json("/cluster/predict", request)
    }

    pub fn predict_financials(&self, request: &FinancialRequest) -> Result<FinancialForecast> {
        self.post_json("/financial/predict", request)
    }

    pub fn predict_competition(&self, request: &CompetitionRequest) -> Result<CompetitionLevel> {
        self.post_json("/competition/predict", request)
    }

    pub fn forecast_demand(
        &self,
        request: &DemandForecastRequest,
    ) -> Result<DemandForecastResult> {
        self.post_json("/job-insights/forecast-demand", request)
    }

    pub fn segment_roles(&self, request: &RoleSegmentationRequest) -> Result<RoleSegment> {
        self.post_json("/job-insights/segment-roles", request)
    }

    pub fn predict_remote(&self, request: &PostingRequest) -> Result<RemoteVerdict> {
        self.post_json("/remote/predict", request)
    }

    pub fn predict_posting_cluster(&self, request: &PostingRequest) -> Result<PostingCluster> {
        self.post_json("/posting-clustering/predict", request)
    }

    pub fn analyze_sentiment(&self, file_name: &str, bytes: Vec<u8>) -> Result<SentimentReport> {
        self.post_csv("/sentiment/analyze", file_name, bytes)
    }

    pub fn download_sentiment_csv(&self, request_id: &str) -> Result<Vec<u8>> {
        let path = format!("/sentiment/download/{request_id}");
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }
        let bytes = response.bytes().context("read scored CSV body")?;
        Ok(bytes.to_vec())
    }

    pub fn predict_employee_cluster(
        &self,
        request: &FeatureVectorRequest,
    ) -> Result<EmployeeCluster> {
        self.post_json("/employee-clustering/clustering/predict", request)
    }

    pub fn list_available_skills(&self) -> Result<Vec<String>> {
        self.get_json("/api/available-skills/")
    }

    pub fn list_job_titles(&self) -> Result<Vec<String>> {
        self.get_json("/api/job-titles/")
    }

    pub fn analyze_skills(&self, request: &SkillAnalysisRequest) -> Result<SkillAnalysisReport> {
        self.post_json("/api/analyze-skills/", request)
    }

    pub fn upload_hr_csv(&self, file_name: &str, bytes: Vec<u8>) -> Result<HrAnalyticsReport> {
        self.post_csv("/hr/upload-csv", file_name, bytes)
    }
}

fn decode_json<R: for<'de> Deserialize<'de>>(response: Response, path: &str) -> Result<R> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(clean_error_response(status, &body));
    }
    response
        .json()
        .with_context(|| format!("decode response from {path}"))
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- is the prediction service running? ({} )",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<FastApiErrorEnvelope>(body)
        && let Some(detail) = parsed.detail
    {
        let message = match detail {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        };
        if !message.is_empty() && message != "null" {
            return anyhow!("server error ({}): {}", status.as_u16(), message);
        }
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body);
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct FastApiErrorEnvelope {
    detail: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRequest {
    #[serde(rename = "objectiveId")]
    objective_id: &'static str,
    inputs: SalaryInputs,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct SalaryInputs {
    age: i64,
    gender: String,
    #[serde(rename = "educationLevel")]
    education_level: String,
    #[serde(rename = "jobTitle")]
    job_title: String,
    #[serde(rename = "yearsOfExperience")]
    years_of_experience: i64,
}

impl From<&SalaryFormInput> for SalaryRequest {
    fn from(form: &SalaryFormInput) -> Self {
        Self {
            objective_id: "salary_prediction",
            inputs: SalaryInputs {
                age: form.age,
                gender: form.gender.clone(),
                education_level: form.education_level.clone(),
                job_title: form.job_title.clone(),
                years_of_experience: form.years_of_experience,
            },
        }
    }
}

/// Deterministic stand-in shown by the salary panel when the service is
/// unreachable. Derived only from the submitted fields.
pub fn offline_salary_estimate(form: &SalaryFormInput) -> SalaryPrediction {
    let base_salary = 50_000i64;
    let experience_bonus = form.years_of_experience * 3_000;
    let education_bonus = form.education_tier_index() * 8_000;
    let estimated = base_salary + experience_bonus + education_bonus;

    SalaryPrediction {
        salary: format!(
            "${} - ${}",
            format_thousands(estimated - 10_000),
            format_thousands(estimated + 15_000)
        ),
        confidence: "85%".to_owned(),
        key_drivers: vec![
            format!(
                "Years of experience ({} years) significantly impacts compensation",
                form.years_of_experience
            ),
            format!(
                "{} provides a competitive advantage in this role",
                form.education_level
            ),
            format!("{} positions show strong market demand", form.job_title),
            "Age and career trajectory align with senior-level expectations".to_owned(),
        ],
        business_insight: format!(
            "Based on current market conditions, professionals with {}+ years experience in {} roles are in high demand. Consider emphasizing technical skills and leadership experience during salary negotiations.",
            form.years_of_experience, form.job_title
        ),
    }
}

fn format_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttritionRequest {
    #[serde(rename = "Age")]
    age: i64,
    #[serde(rename = "Years_at_Company")]
    years_at_company: i64,
    #[serde(rename = "Monthly_Income")]
    monthly_income: i64,
    #[serde(rename = "Number_of_Promotions")]
    number_of_promotions: i64,
    #[serde(rename = "Distance_from_Home")]
    distance_from_home: i64,
    #[serde(rename = "Number_of_Dependents")]
    number_of_dependents: i64,
    #[serde(rename = "Work_Life_Balance")]
    work_life_balance: &'static str,
    #[serde(rename = "Job_Satisfaction")]
    job_satisfaction: &'static str,
    #[serde(rename = "Performance_Rating")]
    performance_rating: &'static str,
    #[serde(rename = "Employee_Recognition")]
    employee_recognition: &'static str,
    #[serde(rename = "Overtime")]
    overtime: &'static str,
    #[serde(rename = "Leadership_Opportunities")]
    leadership_opportunities: &'static str,
    #[serde(rename = "Innovation_Opportunities")]
    innovation_opportunities: &'static str,
    #[serde(rename = "Company_Reputation")]
    company_reputation: &'static str,
    #[serde(rename = "Job_Role")]
    job_role: &'static str,
    #[serde(rename = "Job_Level")]
    job_level: &'static str,
    #[serde(rename = "Company_Size")]
    company_size: &'static str,
    #[serde(rename = "Remote_Work")]
    remote_work: &'static str,
    #[serde(rename = "Education_Level")]
    education_level: &'static str,
    #[serde(rename = "Gender")]
    gender: &'static str,
    #[serde(rename = "Marital_Status")]
    marital_status: &'static str,
}

impl From<&AttritionFormInput> for AttritionRequest {
    fn from(form: &AttritionFormInput) -> Self {
        Self {
            age: form.age,
            years_at_company: form.years_at_company,
            monthly_income: form.monthly_income,
            number_of_promotions: form.number_of_promotions,
            distance_from_home: form.distance_from_home,
            number_of_dependents: form.number_of_dependents,
            work_life_balance: form.work_life_balance.as_str(),
            job_satisfaction: form.job_satisfaction.as_str(),
            performance_rating: form.performance_rating.as_str(),
            employee_recognition: form.employee_recognition.as_str(),
            overtime: form.overtime.as_str(),
            leadership_opportunities: form.leadership_opportunities.as_str(),
            innovation_opportunities: form.innovation_opportunities.as_str(),
            company_reputation: form.company_reputation.as_str(),
            job_role: form.job_role.as_str(),
            job_level: form.job_level.as_str(),
            company_size: form.company_size.as_str(),
            remote_work: form.remote_work.as_str(),
            education_level: form.education_level.as_str(),
            gender: form.gender.as_str(),
            marital_status: form.marital_status.as_str(),
        }
    }
}

/// `{"features": {name: value}}` body shared by the two feature-vector
/// clustering endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVectorRequest {
    features: BTreeMap<String, f64>,
}

impl FeatureVectorRequest {
    pub fn new(features: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            features: features.into_iter().collect(),
        }
    }

    pub fn feature_names(&self) -> Vec<&str> {
        self.features.keys().map(String::as_str).collect()
    }
}

impl From<&WorkforceClusteringFormInput> for FeatureVectorRequest {
    fn from(form: &WorkforceClusteringFormInput) -> Self {
        Self::new(form.feature_map())
    }
}

impl TryFrom<&EmployeeClusteringFormInput> for FeatureVectorRequest {
    type Error = anyhow::Error;

    fn try_from(form: &EmployeeClusteringFormInput) -> Result<Self> {
        form.validate()?;
        let monthly_income = form.monthly_income.unwrap_or_default();
        let age = form.age.unwrap_or_default();
        let years = form.years_at_company.unwrap_or_default();
        let leadership = form.leadership.map(YesNoFlag::flag).unwrap_or_default();
        let innovation = form.innovation.map(YesNoFlag::flag).unwrap_or_default();

        let mut features = BTreeMap::new();
        features.insert("Monthly Income".to_owned(), monthly_income as f64);
        features.insert(
            "Work-Life Balance".to_owned(),
            form.work_life_balance.unwrap_or_default() as f64,
        );
        features.insert(
            "Job Satisfaction".to_owned(),
            form.job_satisfaction.unwrap_or_default() as f64,
        );
        features.insert(
            "Employee Recognition".to_owned(),
            form.employee_recognition.unwrap_or_default() as f64,
        );
        features.insert(
            "Overtime_Yes".to_owned(),
            form.overtime.map(YesNoFlag::flag).unwrap_or_default(),
        );
        features.insert("Leadership Opportunities_Yes".to_owned(), leadership);
        features.insert("Innovation Opportunities_Yes".to_owned(), innovation);
        features.insert(
            "Remote Work_Yes".to_owned(),
            form.remote_work.map(YesNoFlag::flag).unwrap_or_default(),
        );
        features.insert("Number of Dependents".to_owned(), form.dependents as f64);
        features.insert("Distance from Home".to_owned(), form.distance as f64);

        // Engineered inputs the model expects but the form never shows.
        features.insert("Years_w".to_owned(), (years * 2) as f64);
        features.insert(
            "Career_Age_Ratio".to_owned(),
            if age > 0 { years as f64 / age as f64 } else { 0.0 },
        );
        features.insert(
            "Is_Junior".to_owned(),
            if age < 25 && years < 4 { 1.0 } else { 0.0 },
        );
        features.insert("Experience_Level".to_owned(), years as f64);
        features.insert(
            "Leadership_Index".to_owned(),
            (leadership + innovation) / 2.0,
        );

        Ok(Self { features })
    }
}

// Small shim so Option<YesNo> maps to the 0/1 one-hot columns.
trait YesNoFlag {
    fn flag(self) -> f64;
}

impl YesNoFlag for jobdeck_app::YesNo {
    fn flag(self) -> f64 {
        self.as_flag() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSegmentationRequest {
    #[serde(rename = "Job_Title")]
    job_title: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Category_Name")]
    category_name: String,
    #[serde(rename = "Connects_Num")]
    connects_num: i64,
    #[serde(rename = "New_Connects_Num")]
    new_connects_num: i64,
    #[serde(rename = "Spent_USD")]
    spent_usd: f64,
    #[serde(rename = "Start_rate")]
    start_rate: f64,
    #[serde(rename = "End_rate")]
    end_rate: f64,
    #[serde(rename = "Duration")]
    duration: String,
    #[serde(rename = "Workload")]
    workload: &'static str,
    #[serde(rename = "Payment_Type")]
    payment_type: &'static str,
}

impl From<&MarketSegmentationFormInput> for MarketSegmentationRequest {
    fn from(form: &MarketSegmentationFormInput) -> Self {
        Self {
            job_title: form.job_title.clone(),
            description: form.description.clone(),
            category_name: form.category_name.clone(),
            connects_num: form.connects_num,
            new_connects_num: form.new_connects_num,
            spent_usd: form.spent_usd,
            start_rate: form.start_rate,
            end_rate: form.end_rate,
            duration: form.duration.clone(),
            workload: form.workload.as_str(),
            payment_type: form.payment_type.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialRequest {
    #[serde(rename = "Job_Title")]
    job_title: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Search_Keyword")]
    search_keyword: String,
    #[serde(rename = "Category_Name")]
    category_name: String,
    #[serde(rename = "Start_rate")]
    start_rate: f64,
    #[serde(rename = "Connects_Num")]
    connects_num: i64,
    #[serde(rename = "Applicants_Num_min")]
    applicants_num_min: i64,
    #[serde(rename = "Applicants_Num_max")]
    applicants_num_max: i64,
    #[serde(rename = "Duration_min")]
    duration_min: i64,
    #[serde(rename = "Duration_max")]
    duration_max: i64,
    #[serde(rename = "Workload")]
    workload: &'static str,
    #[serde(rename = "EX_level_demand")]
    ex_level_demand: &'static str,
    #[serde(rename = "CountryName")]
    country_name: String,
    #[serde(rename = "Payment_Type")]
    payment_type: &'static str,
}

impl From<&FinancialFormInput> for FinancialRequest {
    fn from(form: &FinancialFormInput) -> Self {
        Self {
            job_title: form.job_title.clone(),
            description: form.description.clone(),
            search_keyword: form.search_keyword.clone(),
            category_name: form.category_name.clone(),
            start_rate: form.start_rate,
            connects_num: form.connects_num,
            applicants_num_min: form.applicants_num_min,
            applicants_num_max: form.applicants_num_max,
            duration_min: form.duration_min,
            duration_max: form.duration_max,
            workload: form.workload.as_str(),
            ex_level_demand: form.ex_level_demand.as_str(),
            country_name: form.country_name.clone(),
            payment_type: form.payment_type.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionRequest {
    #[serde(rename = "Job_Title")]
    job_title: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Search_Keyword")]
    search_keyword: String,
    #[serde(rename = "Category_Name")]
    category_name: String,
    #[serde(rename = "Spent_USD")]
    spent_usd: f64,
}

impl From<&CompetitionFormInput> for CompetitionRequest {
    fn from(form: &CompetitionFormInput) -> Self {
        Self {
            job_title: form.job_title.clone(),
            description: form.description.clone(),
            search_keyword: form.search_keyword.clone(),
            category_name: form.category_name.clone(),
            spent_usd: form.spent_usd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemandForecastRequest {
    python: bool,
    sql: bool,
    r: bool,
}

impl From<&DemandForecastFormInput> for DemandForecastRequest {
    fn from(form: &DemandForecastFormInput) -> Self {
        Self {
            python: form.python,
            sql: form.sql,
            r: form.r,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleSegmentationRequest {
    num_jobs: i64,
    skill_richness: f64,
}

impl From<&StrategicSegmentationFormInput> for RoleSegmentationRequest {
    fn from(form: &StrategicSegmentationFormInput) -> Self {
        Self {
            num_jobs: form.num_jobs,
            skill_richness: form.skill_richness,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingRequest {
    job_title: String,
    company: String,
    skills: String,
    country: String,
}

impl From<&PostingFormInput> for PostingRequest {
    fn from(form: &PostingFormInput) -> Self {
        Self {
            job_title: form.job_title.clone(),
            company: form.company.clone(),
            skills: form.skills.clone(),
            country: form.country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillAnalysisRequest {
    skills: Vec<String>,
    location: String,
    desired_role: String,
    name: String,
    email: String,
}

impl From<&SkillAnalysisFormInput> for SkillAnalysisRequest {
    fn from(form: &SkillAnalysisFormInput) -> Self {
        Self {
            skills: form.skills.clone(),
            location: form.location.clone(),
            desired_role: form.desired_role.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AttritionRequest, Client, CompetitionRequest, DemandForecastRequest, FeatureVectorRequest,
        FinancialRequest, MarketSegmentationRequest, PostingRequest, SalaryRequest,
        SkillAnalysisRequest, clean_error_response, format_thousands, offline_salary_estimate,
    };
    use anyhow::Result;
    use jobdeck_app::{
        AttritionFormInput, CompetitionFormInput, DemandForecastFormInput,
        EmployeeClusteringFormInput, FinancialFormInput, MarketSegmentationFormInput,
        PostingFormInput, SalaryFormInput, SkillAnalysisFormInput, WorkforceClusteringFormInput,
        YesNo,
    };
    use reqwest::StatusCode;
    use std::time::Duration;

    fn body_keys<T: serde::Serialize>(request: &T) -> Vec<String> {
        let value = serde_json::to_value(request).expect("request serializes");
        value
            .as_object()
            .expect("request is a JSON object")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn client_rejects_non_http_base_urls() {
        assert!(Client::new("", Duration::from_secs(1)).is_err());
        assert!(Client::new("ftp://example.com", Duration::from_secs(1)).is_err());
        assert!(Client::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn client_trims_trailing_slashes() -> Result<()> {
        let client = Client::new("http://127.0.0.1:8000///", Duration::from_secs(1))?;
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        Ok(())
    }

    #[test]
    fn salary_request_nests_inputs_under_the_objective() {
        let form = SalaryFormInput {
            gender: "Female".to_owned(),
            education_level: "PhD".to_owned(),
            job_title: "Data Scientist".to_owned(),
            ..SalaryFormInput::default()
        };
        let request = SalaryRequest::from(&form);
        let value = serde_json::to_value(&request).expect("serializes");
        assert_eq!(value["objectiveId"], "salary_prediction");
        let inputs = value["inputs"].as_object().expect("inputs object");
        let mut keys: Vec<&String> = inputs.keys().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["age", "educationLevel", "gender", "jobTitle", "yearsOfExperience"]
        );
    }

    #[test]
    fn attrition_request_uses_the_capitalized_wire_names() {
        let request = AttritionRequest::from(&AttritionFormInput::default());
        let keys = body_keys(&request);
        for expected in [
            "Age",
            "Years_at_Company",
            "Monthly_Income",
            "Number_of_Promotions",
            "Distance_from_Home",
            "Number_of_Dependents",
            "Work_Life_Balance",
            "Job_Satisfaction",
            "Performance_Rating",
            "Employee_Recognition",
            "Overtime",
            "Leadership_Opportunities",
            "Innovation_Opportunities",
            "Company_Reputation",
            "Job_Role",
            "Job_Level",
            "Company_Size",
            "Remote_Work",
            "Education_Level",
            "Gender",
            "Marital_Status",
        ] {
            assert!(keys.iter().any(|key| key == expected), "missing {expected}");
        }
        assert_eq!(keys.len(), 21);
    }

    #[test]
    fn attrition_enums_serialize_to_display_strings() {
        let request = AttritionRequest::from(&AttritionFormInput::default());
        let value = serde_json::to_value(&request).expect("serializes");
        assert_eq!(value["Work_Life_Balance"], "Good");
        assert_eq!(value["Education_Level"], "Bachelor's Degree");
        assert_eq!(value["Overtime"], "No");
    }

    #[test]
    fn market_segmentation_request_matches_the_wire_contract() {
        let form = MarketSegmentationFormInput {
            job_title: "Rust developer".to_owned(),
            description: "Build a TUI".to_owned(),
            ..MarketSegmentationFormInput::default()
        };
        let value =
            serde_json::to_value(MarketSegmentationRequest::from(&form)).expect("serializes");
        assert_eq!(value["Job_Title"], "Rust developer");
        assert_eq!(value["Workload"], "Unknown");
        assert_eq!(value["Payment_Type"], "Unknown");
        assert_eq!(value["Category_Name"], "Web Development");
    }

    #[test]
    fn financial_request_matches_the_wire_contract() {
        let value =
            serde_json::to_value(FinancialRequest::from(&FinancialFormInput::default()))
                .expect("serializes");
        assert_eq!(value["Workload"], "less_than_30");
        assert_eq!(value["EX_level_demand"], "entry");
        assert_eq!(value["Payment_Type"], "hourly");
        assert_eq!(value["Connects_Num"], 1);
        assert!(value.get("CountryName").is_some());
    }

    #[test]
    fn competition_request_has_exactly_the_five_fields() {
        let mut keys = body_keys(&CompetitionRequest::from(&CompetitionFormInput::default()));
        keys.sort();
        assert_eq!(
            keys,
            ["Category_Name", "Description", "Job_Title", "Search_Keyword", "Spent_USD"]
                .map(str::to_owned)
                .to_vec()
        );
    }

    #[test]
    fn demand_forecast_request_mirrors_the_three_toggles() {
        let form = DemandForecastFormInput {
            python: true,
            sql: false,
            r: true,
        };
        let value = serde_json::to_value(DemandForecastRequest::from(&form)).expect("serializes");
        assert_eq!(value["python"], true);
        assert_eq!(value["sql"], false);
        assert_eq!(value["r"], true);
    }

    #[test]
    fn posting_request_keeps_lowercase_field_names() {
        let mut keys = body_keys(&PostingRequest::from(&PostingFormInput::default()));
        keys.sort();
        assert_eq!(
            keys,
            ["company", "country", "job_title", "skills"]
                .map(str::to_owned)
                .to_vec()
        );
    }

    #[test]
    fn skill_analysis_request_carries_the_skill_list() {
        let mut form = SkillAnalysisFormInput {
            current_skill: "Python".to_owned(),
            location: "Tunis".to_owned(),
            ..SkillAnalysisFormInput::default()
        };
        form.add_current_skill();
        let value = serde_json::to_value(SkillAnalysisRequest::from(&form)).expect("serializes");
        assert_eq!(value["skills"], serde_json::json!(["Python"]));
        assert_eq!(value["location"], "Tunis");
    }

    #[test]
    fn workforce_feature_vector_combines_guided_and_extra_rows() {
        let available = vec![
            "skill_programming_lv".to_owned(),
            "skill_systems_analysis_lv".to_owned(),
        ];
        let form = WorkforceClusteringFormInput::seeded(&available);
        let request = FeatureVectorRequest::from(&form);
        let names = request.feature_names();
        assert!(names.contains(&"skill_programming_lv"));
        assert!(names.contains(&"skill_systems_analysis_lv"));
    }

    #[test]
    fn employee_feature_vector_adds_the_engineered_columns() -> Result<()> {
        let form = EmployeeClusteringFormInput {
            monthly_income: Some(5_000),
            age: Some(24),
            years_at_company: Some(3),
            work_life_balance: Some(3),
            job_satisfaction: Some(4),
            employee_recognition: Some(2),
            overtime: Some(YesNo::No),
            leadership: Some(YesNo::Yes),
            innovation: Some(YesNo::No),
            remote_work: Some(YesNo::Yes),
            dependents: 1,
            distance: 12,
        };
        let request = FeatureVectorRequest::try_from(&form)?;
        let value = serde_json::to_value(&request)?;
        let features = &value["features"];
        assert_eq!(features["Monthly Income"], 5000.0);
        assert_eq!(features["Years_w"], 6.0);
        assert_eq!(features["Is_Junior"], 1.0);
        assert_eq!(features["Experience_Level"], 3.0);
        assert_eq!(features["Leadership_Index"], 0.5);
        assert_eq!(features["Career_Age_Ratio"], 3.0 / 24.0);
        Ok(())
    }

    #[test]
    fn employee_feature_vector_requires_a_complete_form() {
        let form = EmployeeClusteringFormInput::default();
        let error = FeatureVectorRequest::try_from(&form).expect_err("incomplete form");
        assert_eq!(error.to_string(), "Please fill all required fields (*)");
    }

    #[test]
    fn offline_salary_estimate_is_deterministic() {
        let form = SalaryFormInput {
            gender: "Male".to_owned(),
            education_level: "Master's Degree".to_owned(),
            job_title: "Data Scientist".to_owned(),
            years_of_experience: 10,
            ..SalaryFormInput::default()
        };
        let first = offline_salary_estimate(&form);
        let second = offline_salary_estimate(&form);
        assert_eq!(first, second);
        // 50000 + 10*3000 + 3*8000 = 104000
        assert_eq!(first.salary, "$94,000 - $119,000");
        assert_eq!(first.confidence, "85%");
        assert_eq!(first.key_drivers.len(), 4);
        assert!(first.business_insight.contains("Data Scientist"));
    }

    #[test]
    fn format_thousands_groups_digits() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-40_000), "-40,000");
    }

    #[test]
    fn clean_error_response_extracts_fastapi_detail_strings() {
        let error = clean_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail":"model unavailable"}"#,
        );
        assert_eq!(error.to_string(), "server error (500): model unavailable");
    }

    #[test]
    fn clean_error_response_stringifies_structured_detail() {
        let error = clean_error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":{"loc":["body","Age"],"msg":"field required"}}"#,
        );
        let message = error.to_string();
        assert!(message.starts_with("server error (422):"));
        assert!(message.contains("field required"));
    }

    #[test]
    fn clean_error_response_passes_short_plain_bodies_through() {
        let error = clean_error_response(StatusCode::BAD_GATEWAY, "upstream offline");
        assert_eq!(error.to_string(), "server error (502): upstream offline");
    }

    #[test]
    fn clean_error_response_falls_back_to_the_status_code() {
        let error = clean_error_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(error.to_string(), "server returned 500");

        let error = clean_error_response(StatusCode::INTERNAL_SERVER_ERROR, "{\"odd\":true}");
        assert_eq!(error.to_string(), "server returned 500");
    }
}
