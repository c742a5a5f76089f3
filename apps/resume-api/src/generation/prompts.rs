// User prompt builders for the generation endpoints.
// Inputs arrive already truncated; these only interpolate.

pub fn improve_resume_prompt(resume_text: &str, goals: &str) -> String {
    format!(
        "You are an expert resume writer. Given the following resume text and user career info, \
suggest clear, concise improvements to make the resume more impactful for modern job applications.

RESUME:
{resume_text}

USER GOALS (optional):
{goals}

Return the improved resume as full text in a clean, professional format. Focus on highlighting \
achievements, using action verbs, and quantifying results. Do not mention or refer to any photos \
or visuals. No commentary needed - only return the improved resume text."
    )
}

pub fn cover_letter_prompt(resume_text: &str, job_description: &str, company_name: &str) -> String {
    format!(
        "Create a professional, tailored cover letter for a job application with the following details:

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

COMPANY:
{company_name}

Write a concise, professional cover letter that connects my experience to the job requirements. \
Make it sound natural, confident, and not generic. The letter should be around 300-400 words, \
include a proper salutation, 3 paragraphs (intro connecting to role, middle showing \
qualifications, conclusion with call to action), and a professional sign-off. No images or \
charts should be mentioned."
    )
}

pub fn mock_interview_prompt(
    job_title: &str,
    industry: Option<&str>,
    experience_level: Option<&str>,
    resume_text: Option<&str>,
) -> String {
    let industry = industry
        .map(|i| format!(" in the {i} industry"))
        .unwrap_or_default();
    let experience = experience_level
        .map(|e| format!(" for someone with {e} experience"))
        .unwrap_or_default();
    let resume = resume_text
        .map(|r| format!("CANDIDATE RESUME:\n{r}\n\n"))
        .unwrap_or_default();

    format!(
        "Generate a realistic mock interview for a {job_title} position{industry}{experience}.

{resume}

Create a set of 5 interview questions with the following structure:
1. Technical/skill-based questions specific to the role
2. Behavioral questions to assess fit and soft skills
3. Problem-solving or scenario-based questions
4. Questions about past experience and achievements
5. Questions the candidate might ask the interviewer

For each question, provide:
- The interview question
- What the interviewer is looking for
- Sample strong answer (1-3 paragraphs)

Format each as JSON object with fields: \"question\", \"interviewer_looking_for\", and \
\"sample_answer\". Return the full array."
    )
}

pub fn job_suggestions_prompt(resume_text: &str, location: &str, remote: bool) -> String {
    let remote = if remote {
        "Prefers remote work"
    } else {
        "No preference"
    };

    format!(
        "Based on the following resume, suggest 5 job titles and 5 job descriptions this person \
would be qualified for. Consider skills, experience, and career trajectory.

RESUME:
{resume_text}

LOCATION: {location}
REMOTE PREFERENCE: {remote}

Format the response as a JSON object with two arrays:
1. \"job_titles\" - an array of 5 job titles with company types
2. \"job_descriptions\" - an array of 5 objects, each with \"title\", \"company\", \"location\", \
\"description\", and \"qualifications\" fields.

Make all suggestions realistic, specific, and tailored to the resume's experience level and skills."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_prompt_embeds_inputs() {
        let prompt = improve_resume_prompt("RESUME BODY", "move into management");
        assert!(prompt.contains("RESUME:\nRESUME BODY\n"));
        assert!(prompt.contains("USER GOALS (optional):\nmove into management\n"));
    }

    #[test]
    fn test_inputs_are_not_reinterpolated() {
        // Braces in user text must survive untouched.
        let prompt = cover_letter_prompt("{job_description}", "JD", "Acme");
        assert!(prompt.contains("RESUME:\n{job_description}\n"));
        assert!(prompt.contains("COMPANY:\nAcme"));
    }

    #[test]
    fn test_mock_interview_optional_clauses() {
        let bare = mock_interview_prompt("Data Engineer", None, None, None);
        assert!(bare.starts_with("Generate a realistic mock interview for a Data Engineer position.\n"));
        assert!(!bare.contains("CANDIDATE RESUME"));
        assert!(bare.contains("position.\n\n\n\nCreate a set of 5"));

        let full = mock_interview_prompt("Data Engineer", Some("fintech"), Some("5 years"), Some("CV"));
        assert!(full.contains(
            "Data Engineer position in the fintech industry for someone with 5 years experience."
        ));
        assert!(full.contains("CANDIDATE RESUME:\nCV\n\n\n\nCreate a set of 5"));
    }

    #[test]
    fn test_job_suggestions_remote_preference() {
        assert!(job_suggestions_prompt("cv", "Berlin", true)
            .contains("LOCATION: Berlin\nREMOTE PREFERENCE: Prefers remote work"));
        assert!(job_suggestions_prompt("cv", "Not specified", false)
            .contains("REMOTE PREFERENCE: No preference"));
    }
}
