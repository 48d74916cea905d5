use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::job_status::JobStatus;
use crate::structs::analysis_result::AnalysisResult;

/// A field-level change applied to one job under the registry's entry lock.
#[derive(Debug, Clone)]
pub enum JobMutation {
    Transition {
        status: JobStatus,
        progress: u8,
    },
    Progress(u8),
    /// Fills one result slot without touching progress.
    Result {
        kind: AnalysisKind,
        result: AnalysisResult,
    },
    /// Fills one result slot and advances progress by one completion step.
    Completion {
        kind: AnalysisKind,
        result: AnalysisResult,
    },
    Fail(String),
}
