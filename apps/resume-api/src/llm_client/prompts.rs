// Shared system prompts. Each endpoint's user prompt lives in generation::prompts.

pub const RESUME_WRITER_SYSTEM: &str = "You are an expert resume writer.";

pub const COVER_LETTER_SYSTEM: &str = "You are an expert at writing compelling cover letters.";

pub const MOCK_INTERVIEW_SYSTEM: &str = "You are an expert at creating realistic interview \
    preparation questions and answers. Format your response as valid JSON.";

pub const JOB_SUGGESTIONS_SYSTEM: &str =
    "You are a career counselor and job search expert. Format your response as valid JSON.";
