// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Deserialize;

/// Rendered result of the salary panel. Also the shape the offline
/// estimate synthesizes when the service is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalaryPrediction {
    pub salary: String,
    pub confidence: String,
    #[serde(rename = "keyDrivers")]
    pub key_drivers: Vec<String>,
    #[serde(rename = "businessInsight")]
    pub business_insight: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AttritionPrediction {
    pub prediction: i64,
}

impl AttritionPrediction {
    pub const fn risk_label(self) -> &'static str {
        if self.prediction == 1 { "High" } else { "Low" }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkforceCluster {
    pub cluster_id: i64,
    pub name: String,
    pub archetype: String,
    pub cohesion: String,
    pub size: i64,
    pub mean_silhouette: f64,
    pub interpretation: String,
    pub top_features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketSegment {
    pub cluster_profile: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinancialForecast {
    #[serde(default)]
    pub predicted_ratio: Option<f64>,
    #[serde(default)]
    pub predicted_spent_usd: Option<f64>,
    #[serde(default)]
    pub predicted_revenue_per_hour: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
}

impl FinancialForecast {
    /// Service label when present, otherwise derived from the ratio.
    pub fn effective_label(&self) -> Option<String> {
        if let Some(label) = &self.label {
            return Some(label.clone());
        }
        let ratio = self.predicted_ratio?;
        let derived = if ratio >= 3.0 {
            "high"
        } else if ratio >= 1.5 {
            "medium"
        } else {
            "low"
        };
        Some(derived.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompetitionLevel {
    pub prediction: i64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DemandForecastResult {
    pub estimated_job_openings: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleSegment {
    pub cluster_id: i64,
    pub market_segment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RemoteVerdict {
    pub prediction: i64,
}

impl RemoteVerdict {
    pub const fn label(self) -> &'static str {
        if self.prediction == 1 { "Remote" } else { "On-site" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PostingCluster {
    pub cluster: i64,
}

/// (cluster name, representative skills) indexed by cluster id, baked in
/// because the service returns only the id.
pub const POSTING_CLUSTER_PROFILES: [(&str, &str); 25] = [
    ("Traditional Statistical Analysis (SAS/R)", "SQL, R, Excel, SAS, Go"),
    ("Enterprise Operations & VBA Automation", "Excel, SQL, SAP, Word, VBA"),
    ("Multi-Cloud Infrastructure & DevOps", "Azure, AWS, Python, SQL, Linux"),
    ("Cloud Data Warehousing (Snowflake)", "Snowflake, SQL, Python, AWS, Azure"),
    ("Cross-Platform Cloud Solutions", "Azure, SQL, Python, AWS, GCP"),
    ("Containerization & Cloud Orchestration", "Python, Docker, Kubernetes, AWS, SQL"),
    ("Business Intelligence & SAP Reporting", "SQL, Excel, Tableau, Python, SAP"),
    ("Full-Stack Development & Backend", "Python, SQL, Java, JavaScript, AWS"),
    ("Advanced Analytics & SAS Visualization", "Python, SQL, R, SAS, Tableau"),
    ("NoSQL & Modern Database Management", "NoSQL, SQL, Python, AWS, MongoDB"),
    ("Oracle & Enterprise Database Systems", "SQL, SAP, SAS, Go, Oracle"),
    ("Power BI & Excel Reporting", "Power BI, SQL, Excel, Python"),
    ("Big Data Streaming & Kafka", "Kafka, Spark, Python, SQL, Hadoop"),
    ("Interactive Dashboarding (Power BI/Tableau)", "Power BI, Tableau, SQL, Python"),
    ("Databricks & Spark Data Engineering", "Databricks, Azure, SQL, Python, Spark"),
    ("AWS Redshift & Data Pipelines", "Redshift, AWS, SQL, Python, Spark"),
    ("Pythonic Data Science (Pandas/NumPy)", "Pandas, Python, NumPy, SQL, Scikit-learn"),
    ("Core Data Analysis (Python/R)", "Python, SQL, R, Excel, SAS"),
    ("Distributed Computing & Hadoop", "Python, Spark, SQL, Hadoop, R"),
    ("Deep Learning & Cloud AI", "Python, PyTorch, TensorFlow, SQL, AWS"),
    ("Academic & Research Computing (Matlab/SAS)", "Python, R, SAS, Matlab, Java"),
    ("Enterprise Cloud Development (Java/AWS)", "SQL, Python, AWS, Java, Oracle"),
    ("Tableau Focused Data Visualization", "Tableau, SQL, Python, Excel, R"),
    ("Machine Learning Engineering (TF/Pytorch)", "TensorFlow, Python, PyTorch, SQL, R"),
    ("General Office & Business Productivity", "Excel, PowerPoint, Word, SQL, Python"),
];

impl PostingCluster {
    pub fn profile(self) -> Option<(&'static str, &'static str)> {
        usize::try_from(self.cluster)
            .ok()
            .and_then(|index| POSTING_CLUSTER_PROFILES.get(index))
            .copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct SentimentBuckets {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentReport {
    #[serde(default)]
    pub request_id: Option<String>,
    pub total_reviews: i64,
    pub sentiment_counts: SentimentBuckets,
    pub sentiment_percentages: SentimentBuckets,
    pub satisfaction_score: f64,
    pub average_confidence: f64,
    #[serde(default)]
    pub common_words: CommonWords,
}

/// `(word, occurrences)` lists per sentiment, decoded from the service's
/// `[["word", 5], ...]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct CommonWords {
    #[serde(default)]
    pub positive: Vec<(String, i64)>,
    #[serde(default)]
    pub neutral: Vec<(String, i64)>,
    #[serde(default)]
    pub negative: Vec<(String, i64)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeCluster {
    pub cluster_id: i64,
    pub name: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillStat {
    pub skill: String,
    pub frequency: i64,
    pub percentage: f64,
    pub predicted_demand: i64,
    pub is_rising: bool,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RisingSkill {
    pub skill: String,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillDemandCount {
    pub skill: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillAnalysisReport {
    #[serde(default)]
    pub user_skills_analysis: Vec<SkillStat>,
    #[serde(default)]
    pub complementary_skills: Vec<String>,
    #[serde(default)]
    pub rising_skills: Vec<RisingSkill>,
    #[serde(default)]
    pub top_demand_skills: Vec<SkillDemandCount>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HrDepartmentBreakdown {
    pub department: String,
    pub count: i64,
    pub avg_salary: f64,
    pub avg_gap: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HrLocationBreakdown {
    pub location: String,
    pub count: i64,
    pub avg_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HrPeerGroupBreakdown {
    pub peer_group: i64,
    pub count: i64,
    pub avg_experience: f64,
    pub avg_performance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HrDashboardSummary {
    pub total_employees: i64,
    pub avg_salary: f64,
    pub avg_predicted_salary: f64,
    pub total_underpaid: i64,
    pub total_overpaid: i64,
    pub high_risk_count: i64,
    pub medium_risk_count: i64,
    pub low_risk_count: i64,
    #[serde(default)]
    pub by_department: Vec<HrDepartmentBreakdown>,
    #[serde(default)]
    pub by_location: Vec<HrLocationBreakdown>,
    #[serde(default)]
    pub by_peer_group: Vec<HrPeerGroupBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HrEmployeeRecord {
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub years_experience: Option<f64>,
    #[serde(default)]
    pub performance_score: Option<f64>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub predicted_salary: Option<f64>,
    #[serde(default)]
    pub salary_gap: Option<f64>,
    #[serde(default)]
    pub vs_market: Option<String>,
    #[serde(default)]
    pub peer_group: Option<i64>,
    #[serde(default)]
    pub is_anomaly: Option<bool>,
    #[serde(default)]
    pub anomaly_type: Option<String>,
    #[serde(default)]
    pub retention_risk: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HrAnalyticsReport {
    pub dashboard: HrDashboardSummary,
    #[serde(default)]
    pub employees: Vec<HrEmployeeRecord>,
}

/// A resolved panel response, one variant per live panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelResult {
    Salary(SalaryPrediction),
    Attrition(AttritionPrediction),
    WorkforceCluster(WorkforceCluster),
    MarketSegment(MarketSegment),
    Financial(FinancialForecast),
    Competition(CompetitionLevel),
    DemandForecast(DemandForecastResult),
    RoleSegment(RoleSegment),
    Remote(RemoteVerdict),
    PostingCluster(PostingCluster),
    Sentiment(SentimentReport),
    EmployeeCluster(EmployeeCluster),
    SkillAnalysis(SkillAnalysisReport),
    HrAnalytics(Box<HrAnalyticsReport>),
}

/// Data some panels fetch before their form is usable: the clustering
/// feature list, or the skill/job-title suggestion lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelResources {
    ClusterFeatures(Vec<String>),
    SkillLists {
        available_skills: Vec<String>,
        job_titles: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{
        AttritionPrediction, CommonWords, FinancialForecast, PostingCluster, RemoteVerdict,
        SalaryPrediction, SentimentReport,
    };

    #[test]
    fn attrition_prediction_maps_to_risk_labels() {
        assert_eq!(AttritionPrediction { prediction: 1 }.risk_label(), "High");
        assert_eq!(AttritionPrediction { prediction: 0 }.risk_label(), "Low");
    }

    #[test]
    fn remote_verdict_maps_to_site_labels() {
        assert_eq!(RemoteVerdict { prediction: 1 }.label(), "Remote");
        assert_eq!(RemoteVerdict { prediction: 0 }.label(), "On-site");
    }

    #[test]
    fn financial_label_prefers_the_service_value() {
        let forecast = FinancialForecast {
            predicted_ratio: Some(0.2),
            predicted_spent_usd: None,
            predicted_revenue_per_hour: None,
            label: Some("high".to_owned()),
        };
        assert_eq!(forecast.effective_label(), Some("high".to_owned()));
    }

    #[test]
    fn financial_label_derives_from_ratio_thresholds() {
        let at = |ratio: f64| FinancialForecast {
            predicted_ratio: Some(ratio),
            predicted_spent_usd: None,
            predicted_revenue_per_hour: None,
            label: None,
        };
        assert_eq!(at(3.0).effective_label(), Some("high".to_owned()));
        assert_eq!(at(1.5).effective_label(), Some("medium".to_owned()));
        assert_eq!(at(1.49).effective_label(), Some("low".to_owned()));

        let absent = FinancialForecast {
            predicted_ratio: None,
            predicted_spent_usd: None,
            predicted_revenue_per_hour: None,
            label: None,
        };
        assert_eq!(absent.effective_label(), None);
    }

    #[test]
    fn posting_cluster_resolves_against_the_profile_table() {
        let (name, skills) = PostingCluster { cluster: 19 }
            .profile()
            .expect("cluster 19 exists");
        assert_eq!(name, "Deep Learning & Cloud AI");
        assert!(skills.contains("PyTorch"));

        assert!(PostingCluster { cluster: 25 }.profile().is_none());
        assert!(PostingCluster { cluster: -1 }.profile().is_none());
    }

    #[test]
    fn salary_prediction_decodes_the_camel_case_wire_names() {
        let decoded: SalaryPrediction = serde_json::from_str(
            r#"{
                "salary": "$55,000 - $80,000",
                "confidence": "85%",
                "keyDrivers": ["experience"],
                "businessInsight": "strong demand"
            }"#,
        )
        .expect("salary payload decodes");
        assert_eq!(decoded.key_drivers, vec!["experience".to_owned()]);
        assert_eq!(decoded.business_insight, "strong demand");
    }

    #[test]
    fn sentiment_report_decodes_word_count_pairs() {
        let decoded: SentimentReport = serde_json::from_str(
            r#"{
                "request_id": "abc123",
                "total_reviews": 10,
                "sentiment_counts": {"positive": 6, "neutral": 3, "negative": 1},
                "sentiment_percentages": {"positive": 60.0, "neutral": 30.0, "negative": 10.0},
                "satisfaction_score": 72.5,
                "average_confidence": 0.91,
                "common_words": {"positive": [["great", 4]], "neutral": [], "negative": [["slow", 2]]}
            }"#,
        )
        .expect("sentiment payload decodes");
        assert_eq!(decoded.request_id.as_deref(), Some("abc123"));
        assert_eq!(
            decoded.common_words,
            CommonWords {
                positive: vec![("great".to_owned(), 4)],
                neutral: Vec::new(),
                negative: vec![("slow".to_owned(), 2)],
            }
        );
    }
}
