//! Axum route handlers for the Generation API.

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::extract::{extract_text, UploadedResume};
use crate::generation::faq::{faq, FaqResponse};
use crate::generation::generator::{
    generate_cover_letter, generate_mock_interview, improve_resume, non_blank, suggest_jobs,
    CoverLetterRequest, JobSuggestionsRequest, MockInterviewRequest, TextResult,
};
use crate::state::AppState;
use crate::wizard::models::Draft;
use crate::wizard::render::render_draft;

#[derive(Debug, Deserialize)]
pub struct GenerateFromDraftRequest {
    pub draft: Draft,
    #[serde(default)]
    pub goals: String,
}

/// POST /api/process-resume
///
/// Multipart fields: `resume` (file), `goals` (optional text).
pub async fn handle_process_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TextResult>, AppError> {
    let mut multipart = multipart?;
    let mut upload = None;
    let mut goals = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                upload = Some(UploadedResume { file_name, bytes });
            }
            "goals" => goals = field.text().await?,
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("No resume uploaded.".to_string()))?;
    info!("Processing uploaded resume '{}'", upload.file_name);

    let resume_text = extract_text(upload).await?;
    let result = improve_resume(state.llm.as_ref(), &resume_text, &goals).await?;

    Ok(Json(result))
}

/// POST /api/generate-resume
///
/// Finalize step: renders the wizard draft to text and runs it through the
/// same rewrite as an uploaded resume.
pub async fn handle_generate_from_draft(
    State(state): State<AppState>,
    payload: Result<Json<GenerateFromDraftRequest>, JsonRejection>,
) -> Result<Json<TextResult>, AppError> {
    let Json(request) = payload?;
    request.draft.validate()?;

    let resume_text = render_draft(&request.draft);
    let result = improve_resume(state.llm.as_ref(), &resume_text, &request.goals).await?;

    Ok(Json(result))
}

/// POST /api/generate-cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    payload: Result<Json<CoverLetterRequest>, JsonRejection>,
) -> Result<Json<TextResult>, AppError> {
    let Json(request) = payload?;

    let (Some(resume_text), Some(job_description)) = (
        non_blank(&request.resume_text),
        non_blank(&request.job_description),
    ) else {
        return Err(AppError::Validation(
            "Missing required fields. Please provide resume text and job description.".to_string(),
        ));
    };

    let result = generate_cover_letter(
        state.llm.as_ref(),
        resume_text,
        job_description,
        request.company_name.as_deref(),
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/mock-interview
///
/// Unparsable model output is still a 200, with `{ error, rawResult }` in the body.
pub async fn handle_mock_interview(
    State(state): State<AppState>,
    payload: Result<Json<MockInterviewRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;

    let job_title = non_blank(&request.job_title)
        .ok_or_else(|| AppError::Validation("Job title is required.".to_string()))?;

    let value = generate_mock_interview(state.llm.as_ref(), job_title, &request).await?;
    Ok(Json(value))
}

/// POST /api/job-suggestions
pub async fn handle_job_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<JobSuggestionsRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;

    let resume_text = non_blank(&request.resume_text)
        .ok_or_else(|| AppError::Validation("Resume text is required.".to_string()))?;

    let value = suggest_jobs(state.llm.as_ref(), resume_text, &request).await?;
    Ok(Json(value))
}

/// GET /api/faq
pub async fn handle_faq() -> Json<FaqResponse> {
    Json(faq())
}
