// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use jobdeck_app::{PanelKind, PanelResources, PanelResult, ViewMode};
use jobdeck_client::{
    AttritionRequest, Client, CompetitionRequest, DemandForecastRequest, FeatureVectorRequest,
    FinancialRequest, MarketSegmentationRequest, PostingRequest, RoleSegmentationRequest,
    SalaryRequest, SkillAnalysisRequest, offline_salary_estimate,
};
use jobdeck_store::Store;
use jobdeck_tui::{AppRuntime, InternalEvent, PanelResolution, PanelSubmission};
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

const SENTIMENT_DOWNLOAD_NAME: &str = "sentiment_analysis_results.csv";

/// Bridges the TUI's runtime boundary onto the prediction service and the
/// settings store. Network work runs on one worker thread per call; the
/// store is only touched from the UI thread.
pub struct HttpRuntime<'a> {
    store: &'a Store,
    client: Client,
}

impl<'a> HttpRuntime<'a> {
    pub fn new(store: &'a Store, client: Client) -> Self {
        Self { store, client }
    }
}

impl AppRuntime for HttpRuntime<'_> {
    fn submit(&mut self, submission: PanelSubmission) -> Result<PanelResult> {
        run_submission(&self.client, submission)
    }

    fn load_panel_resources(&mut self, kind: PanelKind) -> Result<Option<PanelResources>> {
        load_resources(&self.client, kind)
    }

    fn download_sentiment_csv(&mut self, request_id: &str) -> Result<String> {
        download_scored_csv(&self.client, request_id)
    }

    fn persist_view_mode(&mut self, mode: ViewMode) -> Result<()> {
        self.store.put_view_mode(mode)
    }

    fn spawn_submit(
        &mut self,
        submission: PanelSubmission,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        thread::spawn(move || {
            let kind = submission.kind();
            let resolution = match run_submission(&client, submission) {
                Ok(result) => PanelResolution::Success(result),
                Err(error) => PanelResolution::Failure(error.to_string()),
            };
            let _ = tx.send(InternalEvent::PanelResolved { kind, resolution });
        });
        Ok(())
    }

    fn spawn_resource_load(&mut self, kind: PanelKind, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        thread::spawn(move || match load_resources(&client, kind) {
            Ok(Some(resources)) => {
                let _ = tx.send(InternalEvent::ResourcesLoaded {
                    kind,
                    result: Ok(resources),
                });
            }
            Ok(None) => {}
            Err(error) => {
                let _ = tx.send(InternalEvent::ResourcesLoaded {
                    kind,
                    result: Err(error.to_string()),
                });
            }
        });
        Ok(())
    }

    fn spawn_download(
        &mut self,
        kind: PanelKind,
        request_id: String,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        thread::spawn(move || {
            let result =
                download_scored_csv(&client, &request_id).map_err(|error| error.to_string());
            let _ = tx.send(InternalEvent::DownloadFinished { kind, result });
        });
        Ok(())
    }
}

fn run_submission(client: &Client, submission: PanelSubmission) -> Result<PanelResult> {
    match submission {
        PanelSubmission::Salary(form) => {
            let request = SalaryRequest::from(&form);
            match client.predict_salary(&request) {
                Ok(prediction) => Ok(PanelResult::Salary(prediction)),
                // This panel treats an unreachable backend as demo mode
                // and shows a synthesized estimate instead of an error.
                Err(_) => Ok(PanelResult::Salary(offline_salary_estimate(&form))),
            }
        }
        PanelSubmission::Attrition(form) => {
            let prediction = client.predict_attrition(&AttritionRequest::from(&form))?;
            Ok(PanelResult::Attrition(prediction))
        }
        PanelSubmission::WorkforceClustering(form) => {
            let cluster = client.predict_workforce_cluster(&FeatureVectorRequest::from(&form))?;
            Ok(PanelResult::WorkforceCluster(cluster))
        }
        PanelSubmission::MarketSegmentation(form) => {
            let segment =
                client.predict_market_segment(&MarketSegmentationRequest::from(&form))?;
            Ok(PanelResult::MarketSegment(segment))
        }
        PanelSubmission::Financial(form) => {
            let forecast = client.predict_financials(&FinancialRequest::from(&form))?;
            Ok(PanelResult::Financial(forecast))
        }
        PanelSubmission::Competition(form) => {
            let level = client.predict_competition(&CompetitionRequest::from(&form))?;
            Ok(PanelResult::Competition(level))
        }
        PanelSubmission::DemandForecast(form) => {
            let forecast = client.forecast_demand(&DemandForecastRequest::from(&form))?;
            Ok(PanelResult::DemandForecast(forecast))
        }
        PanelSubmission::StrategicSegmentation(form) => {
            let segment = client.segment_roles(&RoleSegmentationRequest::from(&form))?;
            Ok(PanelResult::RoleSegment(segment))
        }
        PanelSubmission::RemotePrediction(form) => {
            let verdict = client.predict_remote(&PostingRequest::from(&form))?;
            Ok(PanelResult::Remote(verdict))
        }
        PanelSubmission::PostingClustering(form) => {
            let cluster = client.predict_posting_cluster(&PostingRequest::from(&form))?;
            Ok(PanelResult::PostingCluster(cluster))
        }
        PanelSubmission::SentimentUpload { file_name, bytes } => {
            let report = client.analyze_sentiment(&file_name, bytes)?;
            Ok(PanelResult::Sentiment(report))
        }
        PanelSubmission::EmployeeClustering(form) => {
            let request = FeatureVectorRequest::try_from(&form)?;
            let cluster = client.predict_employee_cluster(&request)?;
            Ok(PanelResult::EmployeeCluster(cluster))
        }
        PanelSubmission::SkillAnalysis(form) => {
            let report = client.analyze_skills(&SkillAnalysisRequest::from(&form))?;
            Ok(PanelResult::SkillAnalysis(report))
        }
        PanelSubmission::HrUpload { file_name, bytes } => {
            let report = client.upload_hr_csv(&file_name, bytes)?;
            Ok(PanelResult::HrAnalytics(Box::new(report)))
        }
    }
}

fn load_resources(client: &Client, kind: PanelKind) -> Result<Option<PanelResources>> {
    match kind {
        PanelKind::WorkforceClustering => {
            let features = client.list_cluster_features()?;
            Ok(Some(PanelResources::ClusterFeatures(features)))
        }
        PanelKind::SkillAnalysis => {
            let available_skills = client.list_available_skills()?;
            let job_titles = client.list_job_titles()?;
            Ok(Some(PanelResources::SkillLists {
                available_skills,
                job_titles,
            }))
        }
        _ => Ok(None),
    }
}

fn download_scored_csv(client: &Client, request_id: &str) -> Result<String> {
    let bytes = client.download_sentiment_csv(request_id)?;
    let path = PathBuf::from(SENTIMENT_DOWNLOAD_NAME);
    fs::write(&path, bytes)
        .with_context(|| format!("write scored CSV to {}", path.display()))?;
    Ok(format!("saved {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{HttpRuntime, load_resources, run_submission};
    use anyhow::Result;
    use jobdeck_app::{PanelKind, PanelResources, PanelResult, ViewMode};
    use jobdeck_client::{Client, offline_salary_estimate};
    use jobdeck_store::Store;
    use jobdeck_testkit::{
        MockPredictionServer, json_response, valid_competition_form, valid_salary_form,
    };
    use jobdeck_tui::{AppRuntime, PanelSubmission};
    use std::time::Duration;

    fn unreachable_client() -> Client {
        Client::new("http://127.0.0.1:1", Duration::from_millis(50)).expect("client builds")
    }

    #[test]
    fn salary_submission_falls_back_to_the_offline_estimate() -> Result<()> {
        let form = valid_salary_form();
        let result = run_submission(
            &unreachable_client(),
            PanelSubmission::Salary(form.clone()),
        )?;
        assert_eq!(result, PanelResult::Salary(offline_salary_estimate(&form)));
        Ok(())
    }

    #[test]
    fn other_panels_surface_transport_failures() {
        let error = run_submission(
            &unreachable_client(),
            PanelSubmission::Competition(valid_competition_form()),
        )
        .expect_err("competition has no offline fallback");
        assert!(error.to_string().contains("cannot reach"));
    }

    #[test]
    fn competition_submission_round_trips_through_the_service() -> Result<()> {
        let server = MockPredictionServer::serve(vec![json_response(
            200,
            r#"{"prediction":2,"label":"high"}"#,
        )])?;
        let client = Client::new(server.base_url(), Duration::from_secs(2))?;

        let result = run_submission(
            &client,
            PanelSubmission::Competition(valid_competition_form()),
        )?;
        match result {
            PanelResult::Competition(level) => assert_eq!(level.label, "high"),
            other => panic!("unexpected result: {other:?}"),
        }

        let requests = server.finish();
        assert_eq!(requests[0].url, "/competition/predict");
        Ok(())
    }

    #[test]
    fn skill_analysis_resources_fetch_both_lists() -> Result<()> {
        let server = MockPredictionServer::serve(vec![
            json_response(200, r#"["Python"]"#),
            json_response(200, r#"["Data Analyst"]"#),
        ])?;
        let client = Client::new(server.base_url(), Duration::from_secs(2))?;

        let resources = load_resources(&client, PanelKind::SkillAnalysis)?
            .expect("skill analysis has resources");
        assert_eq!(
            resources,
            PanelResources::SkillLists {
                available_skills: vec!["Python".to_owned()],
                job_titles: vec!["Data Analyst".to_owned()],
            }
        );

        server.finish();
        Ok(())
    }

    #[test]
    fn panels_without_mount_resources_load_nothing() -> Result<()> {
        assert_eq!(load_resources(&unreachable_client(), PanelKind::Salary)?, None);
        Ok(())
    }

    #[test]
    fn view_mode_persists_through_the_store() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;
        let mut runtime = HttpRuntime::new(&store, unreachable_client());

        runtime.persist_view_mode(ViewMode::Analysis)?;
        assert_eq!(store.get_view_mode()?, ViewMode::Analysis);
        Ok(())
    }
}
