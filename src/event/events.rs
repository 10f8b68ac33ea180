use crate::http::{
    error::ApiError,
    model::{ApiResponse, Stats, Submission},
};

#[derive(Debug, Clone)]
pub enum Event {
    // Commands
    Initialize,
    RequestCode(String),
    SubmitSong(Submission),
    FetchStats,

    // Completions
    CodeRequestFinished(Result<ApiResponse, ApiError>),
    SubmitFinished(Result<ApiResponse, ApiError>),
    StatsFetched(Stats),
}
