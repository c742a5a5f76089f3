// Generation API: resume rewrite (upload or wizard draft), cover letters,
// mock interviews, job suggestions, and the static FAQ.
// All completion calls go through llm_client.

pub mod extract;
pub mod faq;
pub mod generator;
pub mod handlers;
pub mod prompts;
