use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::config::constants::{PROGRESS_ANALYZING, PROGRESS_COMPLETION_STEP, PROGRESS_DONE};
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::job_mutation::JobMutation;
use crate::enums::job_status::JobStatus;
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use crate::structs::job_id::JobId;
use crate::structs::analysis_result::AnalysisResult;

#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: JobId,
    pub repo_url: String,
    pub status: JobStatus,
    pub progress: u8,
    pub results: BTreeMap<AnalysisKind, Option<AnalysisResult>>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(id: JobId, repo_url: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            repo_url: repo_url.to_string(),
            status: JobStatus::Queued,
            progress: 0,
            results: AnalysisKind::ALL.into_iter().map(|kind| (kind, None)).collect(),
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.results.values().filter(|slot| slot.is_some()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.results.len() - self.completed_count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    /// Applies one mutation or rejects it, leaving the job untouched on error.
    pub fn apply(&mut self, mutation: JobMutation) -> RepoAnalyzerResult<()> {
        if self.status.is_terminal() {
            return Err(RepoAnalyzerError::JobTerminal {
                job_id: self.id.to_string(),
                status: self.status,
            });
        }

        match mutation {
            JobMutation::Transition { status, progress } => {
                if !self.status.can_transition_to(status) {
                    return Err(RepoAnalyzerError::InvalidTransition {
                        job_id: self.id.to_string(),
                        from: self.status,
                        to: status,
                    });
                }
                if status == JobStatus::Done && !self.is_complete() {
                    return Err(RepoAnalyzerError::IncompleteResults {
                        job_id: self.id.to_string(),
                        missing: self.missing_count(),
                    });
                }
                self.status = status;
                self.raise_progress(progress);
            }
            JobMutation::Progress(progress) => self.raise_progress(progress),
            JobMutation::Result { kind, result } => {
                self.results.insert(kind, Some(result));
            }
            JobMutation::Completion { kind, result } => {
                self.results.insert(kind, Some(result));
                let completed = u8::try_from(self.completed_count()).unwrap_or(u8::MAX);
                let progress = PROGRESS_ANALYZING
                    .saturating_add(completed.saturating_mul(PROGRESS_COMPLETION_STEP))
                    .min(PROGRESS_DONE);
                self.raise_progress(progress);
            }
            JobMutation::Fail(message) => {
                self.status = JobStatus::Error;
                self.error = Some(message);
            }
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    fn raise_progress(&mut self, progress: u8) {
        self.progress = self.progress.max(progress.min(PROGRESS_DONE));
    }
}
