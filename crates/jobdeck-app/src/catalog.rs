// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{PanelAvailability, PanelKind};

/// Immutable description of one analysis panel. Runtime state lives in the
/// panel session, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDescriptor {
    pub kind: PanelKind,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub availability: PanelAvailability,
}

impl PanelDescriptor {
    pub const fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub const fn is_selectable(&self) -> bool {
        self.availability.is_selectable()
    }
}

/// One embedded BI report page. The URL is an opaque third-party embed
/// target consumed verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedPage {
    pub id: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub embed_url: &'static str,
}

const COMPENSATION_PANELS: [PanelDescriptor; 3] = [
    PanelDescriptor {
        kind: PanelKind::Salary,
        title: "Salary Prediction",
        description: "Salary prediction from demographics and experience",
        icon: "$",
        availability: PanelAvailability::Ready,
    },
    PanelDescriptor {
        kind: PanelKind::Attrition,
        title: "Attrition Risk",
        description: "Predict employee attrition risk",
        icon: "!",
        availability: PanelAvailability::Ready,
    },
    PanelDescriptor {
        kind: PanelKind::WorkforceClustering,
        title: "Workforce Clustering",
        description: "Occupational archetype assignment from skill levels",
        icon: "#",
        availability: PanelAvailability::Ready,
    },
];

const FREELANCE_PANELS: [PanelDescriptor; 3] = [
    PanelDescriptor {
        kind: PanelKind::MarketSegmentation,
        title: "Market Segmentation",
        description: "Cluster freelance postings into market profiles",
        icon: "%",
        availability: PanelAvailability::Ready,
    },
    PanelDescriptor {
        kind: PanelKind::FinancialPrediction,
        title: "Financial Prediction",
        description: "Forecast posting spend and revenue ratios",
        icon: "$",
        availability: PanelAvailability::Ready,
    },
    PanelDescriptor {
        kind: PanelKind::Competition,
        title: "Job Competition Level",
        description: "Predict applicant competition intensity",
        icon: "^",
        availability: PanelAvailability::Ready,
    },
];

const MARKET_PANELS: [PanelDescriptor; 2] = [
    PanelDescriptor {
        kind: PanelKind::DemandForecast,
        title: "Market Demand Forecast",
        description: "Predict job opening volumes from core skills",
        icon: "+",
        availability: PanelAvailability::Ready,
    },
    PanelDescriptor {
        kind: PanelKind::StrategicSegmentation,
        title: "Strategic Segmentation",
        description: "Analyze skill clusters and market role categories",
        icon: "&",
        availability: PanelAvailability::Ready,
    },
];

const POSTING_PANELS: [PanelDescriptor; 2] = [
    PanelDescriptor {
        kind: PanelKind::RemotePrediction,
        title: "Remote Job Prediction",
        description: "Predict if a job is remote",
        icon: "@",
        availability: PanelAvailability::Ready,
    },
    PanelDescriptor {
        kind: PanelKind::PostingClustering,
        title: "Job Clustering",
        description: "Cluster jobs based on features",
        icon: "*",
        availability: PanelAvailability::Ready,
    },
];

const EXPERIENCE_PANELS: [PanelDescriptor; 3] = [
    PanelDescriptor {
        kind: PanelKind::SentimentAnalysis,
        title: "Sentiment Analysis",
        description: "Score employee reviews uploaded as CSV",
        icon: "~",
        availability: PanelAvailability::Ready,
    },
    PanelDescriptor {
        kind: PanelKind::EmployeeClustering,
        title: "Employee Clustering",
        description: "Assign employees to engagement clusters",
        icon: "=",
        availability: PanelAvailability::Ready,
    },
    PanelDescriptor {
        kind: PanelKind::ReviewSummarizer,
        title: "Review Summarizer",
        description: "Summarize free-text reviews into themes",
        icon: "?",
        availability: PanelAvailability::ComingSoon,
    },
];

const TALENT_PANELS: [PanelDescriptor; 1] = [PanelDescriptor {
    kind: PanelKind::SkillAnalysis,
    title: "Skill Analysis",
    description: "Analyze skill gaps and workforce readiness",
    icon: ">",
    availability: PanelAvailability::Ready,
}];

const WORKFORCE_PANELS: [PanelDescriptor; 1] = [PanelDescriptor {
    kind: PanelKind::HrDashboard,
    title: "HR Analytics Dashboard",
    description: "Upload CSV files and visualize workforce analytics",
    icon: "\u{2191}",
    availability: PanelAvailability::Ready,
}];

/// The per-domain catalogs, in the order they are concatenated into the
/// master list.
pub fn catalog_sections() -> [(&'static str, &'static [PanelDescriptor]); 7] {
    [
        ("compensation & retention", &COMPENSATION_PANELS),
        ("freelance market", &FREELANCE_PANELS),
        ("market insights", &MARKET_PANELS),
        ("job postings", &POSTING_PANELS),
        ("employee experience", &EXPERIENCE_PANELS),
        ("talent", &TALENT_PANELS),
        ("workforce analytics", &WORKFORCE_PANELS),
    ]
}

/// Concatenation of every catalog, source order preserved.
pub fn master_list() -> Vec<PanelDescriptor> {
    catalog_sections()
        .into_iter()
        .flat_map(|(_, panels)| panels.iter().copied())
        .collect()
}

pub fn descriptor_for(kind: PanelKind) -> Option<PanelDescriptor> {
    master_list().into_iter().find(|panel| panel.kind == kind)
}

pub const EMBED_PAGES: [EmbedPage; 6] = [
    EmbedPage {
        id: 1,
        title: "Job Market Overview",
        description: "Executive summary of job market trends and key metrics",
        embed_url: "https://app.powerbi.com/reportEmbed?reportId=2d1c6636-e210-409d-b399-1265f169fc76&autoAuth=true&ctid=604f1a96-cbe8-43f8-abbf-f8eaf5d85730",
    },
    EmbedPage {
        id: 2,
        title: "Salary Insights",
        description: "Compensation benchmarks and salary distribution analysis",
        embed_url: "https://app.powerbi.com/reportEmbed?reportId=1da78df1-ec2f-4b59-971b-6431af3e9cf3&autoAuth=true&ctid=604f1a96-cbe8-43f8-abbf-f8eaf5d85730",
    },
    EmbedPage {
        id: 3,
        title: "Remote Work & Job Types",
        description: "Remote work trends and job type distribution",
        embed_url: "https://app.powerbi.com/reportEmbed?reportId=5cb60d85-ac59-44e4-ae1a-bb6bb4910bda&autoAuth=true&ctid=604f1a96-cbe8-43f8-abbf-f8eaf5d85730",
    },
    EmbedPage {
        id: 4,
        title: "Company & Freelance Insights",
        description: "Company hiring patterns and freelance market analysis",
        embed_url: "https://app.powerbi.com/reportEmbed?reportId=97d849ba-7103-4382-8efb-ae608ac6789b&autoAuth=true&ctid=604f1a96-cbe8-43f8-abbf-f8eaf5d85730",
    },
    EmbedPage {
        id: 5,
        title: "Workforce & HR Analytics",
        description: "Employee lifecycle and HR performance metrics",
        embed_url: "https://app.powerbi.com/reportEmbed?reportId=27942447-2c23-4caa-8b99-0fa52a6f7720&groupId=b83c3805-40a8-4e09-8413-26f5ac3e6bb4&autoAuth=true",
    },
    EmbedPage {
        id: 6,
        title: "Distribution and Evolution of Skills in Job Postings",
        description: "Skills demand trends and technology evolution",
        embed_url: "https://app.powerbi.com/reportEmbed?reportId=ee118c9f-c080-46e6-a1c6-6617b44bb22d&autoAuth=true&ctid=604f1a96-cbe8-43f8-abbf-f8eaf5d85730",
    },
];

#[cfg(test)]
mod tests {
    use super::{EMBED_PAGES, catalog_sections, descriptor_for, master_list};
    use crate::{PanelAvailability, PanelKind};
    use std::collections::BTreeSet;

    #[test]
    fn master_list_preserves_catalog_order() {
        let list = master_list();
        let mut expected = Vec::new();
        for (_, panels) in catalog_sections() {
            expected.extend(panels.iter().map(|panel| panel.kind));
        }
        let actual: Vec<PanelKind> = list.iter().map(|panel| panel.kind).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn panel_ids_are_unique_across_the_master_list() {
        let list = master_list();
        let ids: BTreeSet<&str> = list.iter().map(|panel| panel.id()).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn embed_page_ids_are_unique() {
        let ids: BTreeSet<i64> = EMBED_PAGES.iter().map(|page| page.id).collect();
        assert_eq!(ids.len(), EMBED_PAGES.len());
    }

    #[test]
    fn exactly_one_panel_is_coming_soon() {
        let disabled: Vec<PanelKind> = master_list()
            .into_iter()
            .filter(|panel| panel.availability == PanelAvailability::ComingSoon)
            .map(|panel| panel.kind)
            .collect();
        assert_eq!(disabled, vec![PanelKind::ReviewSummarizer]);
    }

    #[test]
    fn every_kind_has_a_descriptor() {
        for panel in master_list() {
            assert_eq!(descriptor_for(panel.kind), Some(panel));
        }
    }

    #[test]
    fn embed_urls_are_opaque_https_targets() {
        for page in EMBED_PAGES {
            assert!(page.embed_url.starts_with("https://"), "{}", page.title);
        }
    }
}
