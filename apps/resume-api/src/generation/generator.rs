//! Generation pipelines: truncate inputs, build the prompt, make one completion
//! call, reshape the answer.
//!
//! Each pipeline makes exactly one call to the completion service. Nothing is retried.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::prompts::{
    cover_letter_prompt, improve_resume_prompt, job_suggestions_prompt, mock_interview_prompt,
};
use crate::llm_client::prompts::{
    COVER_LETTER_SYSTEM, JOB_SUGGESTIONS_SYSTEM, MOCK_INTERVIEW_SYSTEM, RESUME_WRITER_SYSTEM,
};
use crate::llm_client::{strip_json_fences, CompletionRequest, CompletionService};

pub const MAX_GOALS_CHARS: usize = 1000;
pub const MAX_RESUME_CHARS: usize = 6000;
const COVER_LETTER_RESUME_CHARS: usize = 2000;
const COVER_LETTER_JD_CHARS: usize = 1500;
const INTERVIEW_RESUME_CHARS: usize = 1500;
const SUGGESTIONS_RESUME_CHARS: usize = 3000;

pub const RESUME_FALLBACK: &str = "[AI did not return a result.]";
pub const COVER_LETTER_FALLBACK: &str = "[AI did not generate a cover letter.]";
const INTERVIEW_EMPTY: &str = "[]";
const SUGGESTIONS_EMPTY: &str = "{}";

pub const INTERVIEW_FORMAT_ERROR: &str =
    "Failed to generate properly formatted interview questions.";
pub const SUGGESTIONS_FORMAT_ERROR: &str =
    "Failed to generate properly formatted job suggestions.";

/// `{ result }` body returned by the free-text endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResult {
    pub result: String,
}

/// Returns at most `max` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Rewrites an extracted resume, optionally steered by the user's career goals.
pub async fn improve_resume(
    llm: &dyn CompletionService,
    resume_text: &str,
    goals: &str,
) -> Result<TextResult, AppError> {
    let prompt = improve_resume_prompt(
        truncate_chars(resume_text, MAX_RESUME_CHARS),
        truncate_chars(goals, MAX_GOALS_CHARS),
    );

    let request = CompletionRequest {
        system: RESUME_WRITER_SYSTEM.to_string(),
        prompt,
        max_tokens: 1500,
        temperature: 0.6,
        json_output: false,
    };

    let result = llm
        .complete(&request)
        .await?
        .unwrap_or_else(|| RESUME_FALLBACK.to_string());

    info!("Resume improvement completed ({} chars)", result.len());
    Ok(TextResult { result })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
    pub company_name: Option<String>,
}

pub async fn generate_cover_letter(
    llm: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
    company_name: Option<&str>,
) -> Result<TextResult, AppError> {
    let company = company_name
        .filter(|c| !c.trim().is_empty())
        .unwrap_or("the company");

    let request = CompletionRequest {
        system: COVER_LETTER_SYSTEM.to_string(),
        prompt: cover_letter_prompt(
            truncate_chars(resume_text, COVER_LETTER_RESUME_CHARS),
            truncate_chars(job_description, COVER_LETTER_JD_CHARS),
            company,
        ),
        max_tokens: 1000,
        temperature: 0.7,
        json_output: false,
    };

    let result = llm
        .complete(&request)
        .await?
        .unwrap_or_else(|| COVER_LETTER_FALLBACK.to_string());

    Ok(TextResult { result })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterviewRequest {
    pub job_title: Option<String>,
    pub industry: Option<String>,
    pub resume_text: Option<String>,
    pub experience_level: Option<String>,
}

pub async fn generate_mock_interview(
    llm: &dyn CompletionService,
    job_title: &str,
    req: &MockInterviewRequest,
) -> Result<Value, AppError> {
    let request = CompletionRequest {
        system: MOCK_INTERVIEW_SYSTEM.to_string(),
        prompt: mock_interview_prompt(
            job_title,
            non_blank(&req.industry),
            non_blank(&req.experience_level),
            non_blank(&req.resume_text).map(|r| truncate_chars(r, INTERVIEW_RESUME_CHARS)),
        ),
        max_tokens: 2500,
        temperature: 0.7,
        json_output: true,
    };

    let raw = llm
        .complete(&request)
        .await?
        .unwrap_or_else(|| INTERVIEW_EMPTY.to_string());

    Ok(pass_through_json(raw, INTERVIEW_FORMAT_ERROR))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestionsRequest {
    pub resume_text: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub remote: bool,
}

pub async fn suggest_jobs(
    llm: &dyn CompletionService,
    resume_text: &str,
    req: &JobSuggestionsRequest,
) -> Result<Value, AppError> {
    let request = CompletionRequest {
        system: JOB_SUGGESTIONS_SYSTEM.to_string(),
        prompt: job_suggestions_prompt(
            truncate_chars(resume_text, SUGGESTIONS_RESUME_CHARS),
            non_blank(&req.location).unwrap_or("Not specified"),
            req.remote,
        ),
        max_tokens: 1500,
        temperature: 0.7,
        json_output: true,
    };

    let raw = llm
        .complete(&request)
        .await?
        .unwrap_or_else(|| SUGGESTIONS_EMPTY.to_string());

    Ok(pass_through_json(raw, SUGGESTIONS_FORMAT_ERROR))
}

/// Parses the completion as JSON and passes it through unchanged.
/// Unparsable output becomes `{ error, rawResult }` carrying the original text.
pub fn pass_through_json(raw: String, failure_message: &str) -> Value {
    match serde_json::from_str::<Value>(strip_json_fences(&raw)) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Completion output is not valid JSON: {e}");
            json!({ "error": failure_message, "rawResult": raw })
        }
    }
}

pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
