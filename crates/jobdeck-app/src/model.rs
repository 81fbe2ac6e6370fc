// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Which pane(s) the top-level layout shows. The one persisted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Reports,
    Split,
    Analysis,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::Reports, Self::Split, Self::Analysis];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reports => "reports",
            Self::Split => "split",
            Self::Analysis => "analysis",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "reports" => Some(Self::Reports),
            "split" => Some(Self::Split),
            "analysis" => Some(Self::Analysis),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Reports => "reports",
            Self::Split => "split",
            Self::Analysis => "analysis",
        }
    }

    pub const fn shows_reports(self) -> bool {
        matches!(self, Self::Reports | Self::Split)
    }

    pub const fn shows_analysis(self) -> bool {
        matches!(self, Self::Analysis | Self::Split)
    }

    pub const fn cycled(self) -> Self {
        match self {
            Self::Reports => Self::Split,
            Self::Split => Self::Analysis,
            Self::Analysis => Self::Reports,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Split
    }
}

/// Whether a panel can be activated. Disabled entries stay listed in the
/// menu but never become the active panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelAvailability {
    Ready,
    ComingSoon,
}

impl PanelAvailability {
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ready => "",
            Self::ComingSoon => "coming soon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    Salary,
    Attrition,
    WorkforceClustering,
    MarketSegmentation,
    FinancialPrediction,
    Competition,
    DemandForecast,
    StrategicSegmentation,
    RemotePrediction,
    PostingClustering,
    SentimentAnalysis,
    EmployeeClustering,
    ReviewSummarizer,
    SkillAnalysis,
    HrDashboard,
}

impl PanelKind {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Attrition => "attrition",
            Self::WorkforceClustering => "workforce-clustering",
            Self::MarketSegmentation => "market-segmentation",
            Self::FinancialPrediction => "financial-prediction",
            Self::Competition => "competition",
            Self::DemandForecast => "demand-forecast",
            Self::StrategicSegmentation => "strategic-segmentation",
            Self::RemotePrediction => "remote-prediction",
            Self::PostingClustering => "posting-clustering",
            Self::SentimentAnalysis => "sentiment-analysis",
            Self::EmployeeClustering => "employee-clustering",
            Self::ReviewSummarizer => "review-summarizer",
            Self::SkillAnalysis => "skill-analysis",
            Self::HrDashboard => "hr-dashboard",
        }
    }
}

/// Lifecycle of one panel's outstanding request. Editing a field clears a
/// failure but leaves a success on screen; only the next submission replaces
/// a previous result.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome<T> {
    Idle,
    Pending,
    Success(T),
    Failure(String),
}

impl<T> RequestOutcome<T> {
    pub fn begin(&mut self) {
        *self = Self::Pending;
    }

    pub fn resolve_success(&mut self, value: T) {
        *self = Self::Success(value);
    }

    pub fn resolve_failure(&mut self, message: impl Into<String>) {
        *self = Self::Failure(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn clear_failure(&mut self) {
        if matches!(self, Self::Failure(_)) {
            *self = Self::Idle;
        }
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for RequestOutcome<T> {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::{PanelAvailability, RequestOutcome, ViewMode};

    #[test]
    fn view_mode_round_trips_through_tokens() {
        for mode in ViewMode::ALL {
            assert_eq!(ViewMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn view_mode_rejects_unknown_tokens() {
        assert_eq!(ViewMode::parse("dashboard"), None);
        assert_eq!(ViewMode::parse(""), None);
        assert_eq!(ViewMode::parse("Split"), None);
    }

    #[test]
    fn view_mode_defaults_to_split() {
        assert_eq!(ViewMode::default(), ViewMode::Split);
    }

    #[test]
    fn view_mode_cycle_visits_every_mode() {
        let mut mode = ViewMode::Reports;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.cycled();
        }
        assert_eq!(mode, ViewMode::Reports);
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn split_mode_shows_both_panes() {
        assert!(ViewMode::Split.shows_reports());
        assert!(ViewMode::Split.shows_analysis());
        assert!(!ViewMode::Reports.shows_analysis());
        assert!(!ViewMode::Analysis.shows_reports());
    }

    #[test]
    fn coming_soon_panels_are_not_selectable() {
        assert!(PanelAvailability::Ready.is_selectable());
        assert!(!PanelAvailability::ComingSoon.is_selectable());
    }

    #[test]
    fn submit_moves_every_state_to_pending() {
        let mut outcome: RequestOutcome<i64> = RequestOutcome::Idle;
        outcome.begin();
        assert!(outcome.is_pending());

        outcome.resolve_success(7);
        outcome.begin();
        assert!(outcome.is_pending());

        outcome.resolve_failure("backend error");
        outcome.begin();
        assert!(outcome.is_pending());
    }

    #[test]
    fn pending_resolves_to_success_or_failure() {
        let mut outcome: RequestOutcome<i64> = RequestOutcome::Pending;
        outcome.resolve_success(1);
        assert_eq!(outcome.success(), Some(&1));

        let mut outcome: RequestOutcome<i64> = RequestOutcome::Pending;
        outcome.resolve_failure("model unavailable");
        assert_eq!(outcome.failure_message(), Some("model unavailable"));
    }

    #[test]
    fn reset_returns_to_idle_from_any_state() {
        for mut outcome in [
            RequestOutcome::Idle,
            RequestOutcome::Pending,
            RequestOutcome::Success(3),
            RequestOutcome::Failure("boom".to_owned()),
        ] {
            outcome.reset();
            assert_eq!(outcome, RequestOutcome::Idle);
        }
    }

    #[test]
    fn clear_failure_keeps_success_in_place() {
        let mut failed: RequestOutcome<i64> = RequestOutcome::Failure("boom".to_owned());
        failed.clear_failure();
        assert_eq!(failed, RequestOutcome::Idle);

        let mut succeeded: RequestOutcome<i64> = RequestOutcome::Success(42);
        succeeded.clear_failure();
        assert_eq!(succeeded.success(), Some(&42));
    }
}
