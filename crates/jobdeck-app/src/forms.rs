// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::PanelKind;

pub const GENDER_OPTIONS: [&str; 4] = ["Male", "Female", "Non-binary", "Prefer not to say"];

// Tier order feeds the offline salary estimate; do not reorder.
pub const EDUCATION_OPTIONS: [&str; 6] = [
    "High School",
    "Associate Degree",
    "Bachelor's Degree",
    "Master's Degree",
    "PhD",
    "Professional Degree",
];

pub const JOB_TITLE_OPTIONS: [&str; 8] = [
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "UX Designer",
    "DevOps Engineer",
    "Data Analyst",
    "Project Manager",
    "Business Analyst",
];

pub const SEGMENTATION_CATEGORY_OPTIONS: [&str; 6] = [
    "Web Development",
    "Mobile Development",
    "Data Science",
    "Machine Learning",
    "Design",
    "Marketing",
];

/// (display label, wire value) pairs for the panels that send short
/// category codes.
pub const SHORT_CATEGORY_OPTIONS: [(&str, &str); 5] = [
    ("Web Development", "web"),
    ("Mobile Development", "mobile"),
    ("Data Science", "data"),
    ("Machine Learning", "ml"),
    ("Design", "design"),
];

/// (feature key, display label) pairs seeded into the workforce clustering
/// form once the service's feature list arrives.
pub const GUIDED_CLUSTER_FEATURES: [(&str, &str); 6] = [
    ("skill_programming_lv", "Programming (Skill)"),
    ("skill_systems_analysis_lv", "Systems Analysis (Skill)"),
    ("ability_mathematical_reasoning_lv", "Mathematical Reasoning (Ability)"),
    ("knowledge_computers_and_electronics_im", "Computers & Electronics (Knowledge)"),
    ("skill_management_of_personnel_resources_lv", "People Management (Skill)"),
    ("skill_equipment_maintenance_lv", "Equipment Maintenance (Skill)"),
];

pub fn clamp_int(value: i64, min: i64, max: i64) -> i64 {
    value.clamp(min, max)
}

pub fn clamp_float(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub const ALL: [Self; 2] = [Self::No, Self::Yes];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    pub const fn as_flag(self) -> i64 {
        match self {
            Self::No => 0,
            Self::Yes => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkLifeBalance {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl WorkLifeBalance {
    pub const ALL: [Self; 4] = [Self::Poor, Self::Fair, Self::Good, Self::Excellent];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl EngagementLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::VeryHigh];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceRating {
    Low,
    BelowAverage,
    Average,
    High,
}

impl PerformanceRating {
    pub const ALL: [Self; 4] = [Self::Low, Self::BelowAverage, Self::Average, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::BelowAverage => "Below Average",
            Self::Average => "Average",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReputationLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ReputationLevel {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRole {
    Finance,
    Healthcare,
    Media,
    Technology,
}

impl JobRole {
    pub const ALL: [Self; 4] = [Self::Finance, Self::Healthcare, Self::Media, Self::Technology];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Media => "Media",
            Self::Technology => "Technology",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobLevel {
    Mid,
    Senior,
}

impl JobLevel {
    pub const ALL: [Self; 2] = [Self::Mid, Self::Senior];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mid => "Mid",
            Self::Senior => "Senior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySize {
    Small,
    Medium,
}

impl CompanySize {
    pub const ALL: [Self; 2] = [Self::Small, Self::Medium];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationTier {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
}

impl EducationTier {
    pub const ALL: [Self; 4] = [Self::HighSchool, Self::Bachelors, Self::Masters, Self::Phd];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Bachelors => "Bachelor's Degree",
            Self::Masters => "Master's Degree",
            Self::Phd => "PhD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryGender {
    Female,
    Male,
}

impl BinaryGender {
    pub const ALL: [Self; 2] = [Self::Female, Self::Male];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    pub const ALL: [Self; 2] = [Self::Single, Self::Married];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    LessThan30,
    ThirtyToForty,
    MoreThan40,
    Unknown,
}

impl Workload {
    pub const ALL: [Self; 4] = [
        Self::LessThan30,
        Self::ThirtyToForty,
        Self::MoreThan40,
        Self::Unknown,
    ];
    /// The financial panel never offers Unknown.
    pub const KNOWN: [Self; 3] = [Self::LessThan30, Self::ThirtyToForty, Self::MoreThan40];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessThan30 => "less_than_30",
            Self::ThirtyToForty => "30_to_40",
            Self::MoreThan40 => "more_than_40",
            Self::Unknown => "Unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LessThan30 => "< 30h/week",
            Self::ThirtyToForty => "30-40h/week",
            Self::MoreThan40 => "> 40h/week",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Hourly,
    Fixed,
    Unknown,
}

impl PaymentType {
    pub const ALL: [Self; 3] = [Self::Hourly, Self::Fixed, Self::Unknown];
    pub const KNOWN: [Self; 2] = [Self::Hourly, Self::Fixed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Fixed => "fixed",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Entry,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [Self; 3] = [Self::Entry, Self::Intermediate, Self::Expert];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryFormInput {
    pub age: i64,
    pub gender: String,
    pub education_level: String,
    pub job_title: String,
    pub years_of_experience: i64,
}

impl Default for SalaryFormInput {
    fn default() -> Self {
        Self {
            age: 30,
            gender: String::new(),
            education_level: String::new(),
            job_title: String::new(),
            years_of_experience: 5,
        }
    }
}

impl SalaryFormInput {
    pub fn validate(&self) -> Result<()> {
        let valid = (18..=70).contains(&self.age)
            && !self.gender.is_empty()
            && !self.education_level.is_empty()
            && !self.job_title.is_empty()
            && self.years_of_experience >= 0;
        if !valid {
            bail!("Please fill in all required fields with valid values");
        }
        Ok(())
    }

    pub fn education_tier_index(&self) -> i64 {
        EDUCATION_OPTIONS
            .iter()
            .position(|option| *option == self.education_level)
            .map_or(0, |index| index as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttritionFormInput {
    pub age: i64,
    pub years_at_company: i64,
    pub monthly_income: i64,
    pub number_of_promotions: i64,
    pub distance_from_home: i64,
    pub number_of_dependents: i64,
    pub work_life_balance: WorkLifeBalance,
    pub job_satisfaction: EngagementLevel,
    pub performance_rating: PerformanceRating,
    pub employee_recognition: EngagementLevel,
    pub overtime: YesNo,
    pub leadership_opportunities: YesNo,
    pub innovation_opportunities: YesNo,
    pub company_reputation: ReputationLevel,
    pub job_role: JobRole,
    pub job_level: JobLevel,
    pub company_size: CompanySize,
    pub remote_work: YesNo,
    pub education_level: EducationTier,
    pub gender: BinaryGender,
    pub marital_status: MaritalStatus,
}

impl Default for AttritionFormInput {
    fn default() -> Self {
        Self {
            age: 35,
            years_at_company: 3,
            monthly_income: 5_000,
            number_of_promotions: 0,
            distance_from_home: 10,
            number_of_dependents: 0,
            work_life_balance: WorkLifeBalance::Good,
            job_satisfaction: EngagementLevel::Medium,
            performance_rating: PerformanceRating::Average,
            employee_recognition: EngagementLevel::Medium,
            overtime: YesNo::No,
            leadership_opportunities: YesNo::No,
            innovation_opportunities: YesNo::No,
            company_reputation: ReputationLevel::Good,
            job_role: JobRole::Finance,
            job_level: JobLevel::Mid,
            company_size: CompanySize::Medium,
            remote_work: YesNo::No,
            education_level: EducationTier::Bachelors,
            gender: BinaryGender::Male,
            marital_status: MaritalStatus::Single,
        }
    }
}

impl AttritionFormInput {
    // Bounds are enforced at edit time; submission takes the form as-is.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureWeight {
    pub name: String,
    pub value: f64,
}

impl FeatureWeight {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: clamp_float(value, 0.0, 5.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkforceClusteringFormInput {
    pub guided: Vec<FeatureWeight>,
    pub extra: Vec<FeatureWeight>,
}

impl WorkforceClusteringFormInput {
    /// Default record once the service's feature list is known: every guided
    /// feature the service recognizes at 3.0, plus one extra row on the
    /// first available feature.
    pub fn seeded(available: &[String]) -> Self {
        let guided = GUIDED_CLUSTER_FEATURES
            .iter()
            .filter(|(key, _)| available.iter().any(|name| name == key))
            .map(|(key, _)| FeatureWeight::new(*key, 3.0))
            .collect();
        let extra = available
            .first()
            .map(|name| vec![FeatureWeight::new(name.clone(), 3.0)])
            .unwrap_or_default();
        Self { guided, extra }
    }

    pub fn feature_map(&self) -> Vec<(String, f64)> {
        self.guided
            .iter()
            .chain(self.extra.iter())
            .map(|feature| (feature.name.clone(), feature.value))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketSegmentationFormInput {
    pub job_title: String,
    pub description: String,
    pub category_name: String,
    pub connects_num: i64,
    pub new_connects_num: i64,
    pub spent_usd: f64,
    pub start_rate: f64,
    pub end_rate: f64,
    pub duration: String,
    pub workload: Workload,
    pub payment_type: PaymentType,
}

impl Default for MarketSegmentationFormInput {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            description: String::new(),
            category_name: "Web Development".to_owned(),
            connects_num: 0,
            new_connects_num: 0,
            spent_usd: 0.0,
            start_rate: 0.0,
            end_rate: 0.0,
            duration: "Unknown".to_owned(),
            workload: Workload::Unknown,
            payment_type: PaymentType::Unknown,
        }
    }
}

impl MarketSegmentationFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.job_title.trim().is_empty() {
            bail!("Job title is required");
        }
        if self.description.trim().is_empty() {
            bail!("Description is required");
        }
        if self.start_rate < 0.0 {
            bail!("Start rate must be >= 0");
        }
        if self.end_rate < 0.0 {
            bail!("End rate must be >= 0");
        }
        if self.spent_usd < 0.0 {
            bail!("Spent USD must be >= 0");
        }
        if self.connects_num < 0 {
            bail!("Connects_Num must be >= 0");
        }
        if self.new_connects_num < 0 {
            bail!("New_Connects_Num must be >= 0");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialFormInput {
    pub job_title: String,
    pub description: String,
    pub search_keyword: String,
    pub category_name: String,
    pub start_rate: f64,
    pub connects_num: i64,
    pub applicants_num_min: i64,
    pub applicants_num_max: i64,
    pub duration_min: i64,
    pub duration_max: i64,
    pub workload: Workload,
    pub ex_level_demand: ExperienceLevel,
    pub country_name: String,
    pub payment_type: PaymentType,
}

impl Default for FinancialFormInput {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            description: String::new(),
            search_keyword: String::new(),
            category_name: "web".to_owned(),
            start_rate: 0.0,
            connects_num: 1,
            applicants_num_min: 0,
            applicants_num_max: 0,
            duration_min: 0,
            duration_max: 0,
            workload: Workload::LessThan30,
            ex_level_demand: ExperienceLevel::Entry,
            country_name: String::new(),
            payment_type: PaymentType::Hourly,
        }
    }
}

impl FinancialFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.job_title.trim().is_empty() {
            bail!("Job title is required");
        }
        if self.description.trim().is_empty() {
            bail!("Description is required");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionFormInput {
    pub job_title: String,
    pub description: String,
    pub search_keyword: String,
    pub category_name: String,
    pub spent_usd: f64,
}

impl Default for CompetitionFormInput {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            description: String::new(),
            search_keyword: String::new(),
            category_name: "web".to_owned(),
            spent_usd: 0.0,
        }
    }
}

impl CompetitionFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.job_title.is_empty() || self.description.is_empty() {
            bail!("Missing required fields");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemandForecastFormInput {
    pub python: bool,
    pub sql: bool,
    pub r: bool,
}

impl DemandForecastFormInput {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrategicSegmentationFormInput {
    pub num_jobs: i64,
    pub skill_richness: f64,
}

impl StrategicSegmentationFormInput {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingFormInput {
    pub job_title: String,
    pub company: String,
    pub skills: String,
    pub country: String,
}

impl Default for PostingFormInput {
    fn default() -> Self {
        Self {
            job_title: "Software Engineer".to_owned(),
            company: "Tech Corp".to_owned(),
            skills: "Python, Machine Learning, Data Analysis".to_owned(),
            country: "USA".to_owned(),
        }
    }
}

impl PostingFormInput {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CsvUploadFormInput {
    pub file_path: String,
}

impl CsvUploadFormInput {
    pub fn file_name(&self) -> &str {
        self.file_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file_path.as_str())
    }

    fn is_csv(&self) -> bool {
        self.file_path.to_ascii_lowercase().ends_with(".csv")
    }

    pub fn validate_for_sentiment(&self) -> Result<()> {
        if self.file_path.trim().is_empty() {
            bail!("Please upload a CSV file first");
        }
        if !self.is_csv() {
            bail!("Please upload a CSV file");
        }
        Ok(())
    }

    pub fn validate_for_hr(&self) -> Result<()> {
        if self.file_path.trim().is_empty() || !self.is_csv() {
            bail!("Please upload a CSV file");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeClusteringFormInput {
    pub monthly_income: Option<i64>,
    pub age: Option<i64>,
    pub years_at_company: Option<i64>,
    pub work_life_balance: Option<i64>,
    pub job_satisfaction: Option<i64>,
    pub employee_recognition: Option<i64>,
    pub overtime: Option<YesNo>,
    pub leadership: Option<YesNo>,
    pub innovation: Option<YesNo>,
    pub remote_work: Option<YesNo>,
    pub dependents: i64,
    pub distance: i64,
}

impl EmployeeClusteringFormInput {
    pub fn validate(&self) -> Result<()> {
        let complete = self.monthly_income.is_some()
            && self.age.is_some()
            && self.years_at_company.is_some()
            && self.work_life_balance.is_some()
            && self.job_satisfaction.is_some()
            && self.employee_recognition.is_some()
            && self.overtime.is_some()
            && self.leadership.is_some()
            && self.innovation.is_some()
            && self.remote_work.is_some();
        if !complete {
            bail!("Please fill all required fields (*)");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillAnalysisFormInput {
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub current_skill: String,
    pub location: String,
    pub desired_role: String,
}

impl SkillAnalysisFormInput {
    pub fn add_current_skill(&mut self) {
        let skill = self.current_skill.trim().to_owned();
        if !skill.is_empty() && !self.skills.contains(&skill) {
            self.skills.push(skill);
            self.current_skill.clear();
        }
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|existing| existing != skill);
    }

    pub fn validate(&self) -> Result<()> {
        if self.skills.is_empty() {
            bail!("Please add at least one skill");
        }
        Ok(())
    }
}

/// Every live panel's form state, one variant per panel. The review
/// summarizer entry has no form because it is never selectable.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelForm {
    Salary(SalaryFormInput),
    Attrition(AttritionFormInput),
    WorkforceClustering(WorkforceClusteringFormInput),
    MarketSegmentation(MarketSegmentationFormInput),
    Financial(FinancialFormInput),
    Competition(CompetitionFormInput),
    DemandForecast(DemandForecastFormInput),
    StrategicSegmentation(StrategicSegmentationFormInput),
    RemotePrediction(PostingFormInput),
    PostingClustering(PostingFormInput),
    SentimentUpload(CsvUploadFormInput),
    EmployeeClustering(EmployeeClusteringFormInput),
    SkillAnalysis(SkillAnalysisFormInput),
    HrUpload(CsvUploadFormInput),
}

impl PanelForm {
    pub const fn kind(&self) -> PanelKind {
        match self {
            Self::Salary(_) => PanelKind::Salary,
            Self::Attrition(_) => PanelKind::Attrition,
            Self::WorkforceClustering(_) => PanelKind::WorkforceClustering,
            Self::MarketSegmentation(_) => PanelKind::MarketSegmentation,
            Self::Financial(_) => PanelKind::FinancialPrediction,
            Self::Competition(_) => PanelKind::Competition,
            Self::DemandForecast(_) => PanelKind::DemandForecast,
            Self::StrategicSegmentation(_) => PanelKind::StrategicSegmentation,
            Self::RemotePrediction(_) => PanelKind::RemotePrediction,
            Self::PostingClustering(_) => PanelKind::PostingClustering,
            Self::SentimentUpload(_) => PanelKind::SentimentAnalysis,
            Self::EmployeeClustering(_) => PanelKind::EmployeeClustering,
            Self::SkillAnalysis(_) => PanelKind::SkillAnalysis,
            Self::HrUpload(_) => PanelKind::HrDashboard,
        }
    }

    /// The panel's documented default record.
    pub fn default_for(kind: PanelKind) -> Option<Self> {
        match kind {
            PanelKind::Salary => Some(Self::Salary(SalaryFormInput::default())),
            PanelKind::Attrition => Some(Self::Attrition(AttritionFormInput::default())),
            PanelKind::WorkforceClustering => Some(Self::WorkforceClustering(
                WorkforceClusteringFormInput::default(),
            )),
            PanelKind::MarketSegmentation => Some(Self::MarketSegmentation(
                MarketSegmentationFormInput::default(),
            )),
            PanelKind::FinancialPrediction => Some(Self::Financial(FinancialFormInput::default())),
            PanelKind::Competition => Some(Self::Competition(CompetitionFormInput::default())),
            PanelKind::DemandForecast => {
                Some(Self::DemandForecast(DemandForecastFormInput::default()))
            }
            PanelKind::StrategicSegmentation => Some(Self::StrategicSegmentation(
                StrategicSegmentationFormInput::default(),
            )),
            PanelKind::RemotePrediction => Some(Self::RemotePrediction(PostingFormInput::default())),
            PanelKind::PostingClustering => {
                Some(Self::PostingClustering(PostingFormInput::default()))
            }
            PanelKind::SentimentAnalysis => {
                Some(Self::SentimentUpload(CsvUploadFormInput::default()))
            }
            PanelKind::EmployeeClustering => Some(Self::EmployeeClustering(
                EmployeeClusteringFormInput::default(),
            )),
            PanelKind::SkillAnalysis => Some(Self::SkillAnalysis(SkillAnalysisFormInput::default())),
            PanelKind::HrDashboard => Some(Self::HrUpload(CsvUploadFormInput::default())),
            PanelKind::ReviewSummarizer => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Salary(form) => form.validate(),
            Self::Attrition(form) => form.validate(),
            Self::WorkforceClustering(form) => form.validate(),
            Self::MarketSegmentation(form) => form.validate(),
            Self::Financial(form) => form.validate(),
            Self::Competition(form) => form.validate(),
            Self::DemandForecast(form) => form.validate(),
            Self::StrategicSegmentation(form) => form.validate(),
            Self::RemotePrediction(form) | Self::PostingClustering(form) => form.validate(),
            Self::SentimentUpload(form) => form.validate_for_sentiment(),
            Self::EmployeeClustering(form) => form.validate(),
            Self::SkillAnalysis(form) => form.validate(),
            Self::HrUpload(form) => form.validate_for_hr(),
        }
    }
}
