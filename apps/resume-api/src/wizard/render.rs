use crate::wizard::models::{
    Certification, Draft, Education, Entry, Expiry, InterestCategory, PersonalDetails,
    SkillCategory, WorkExperience,
};

/// Renders the draft as plain resume text, section by section.
/// Empty sections are skipped. Skills and interests are grouped by category
/// in the fixed category order.
pub fn render_draft(draft: &Draft) -> String {
    let mut sections = Vec::new();

    let header = render_header(&draft.personal_details);
    if !header.is_empty() {
        sections.push(header);
    }
    if !draft.work_history.is_empty() {
        sections.push(render_section("WORK HISTORY", &draft.work_history, render_work));
    }
    if !draft.education.is_empty() {
        sections.push(render_section("EDUCATION", &draft.education, render_education));
    }
    if !draft.certifications.is_empty() {
        sections.push(render_section(
            "CERTIFICATIONS",
            &draft.certifications,
            render_certification,
        ));
    }

    let skill_lines: Vec<String> = SkillCategory::ALL
        .iter()
        .filter_map(|category| {
            let names: Vec<String> = draft
                .skills
                .iter()
                .filter(|e| e.item.category == *category)
                .map(|e| format!("{} ({})", e.item.name, e.item.proficiency.label()))
                .collect();
            (!names.is_empty()).then(|| format!("{}: {}", category.label(), names.join(", ")))
        })
        .collect();
    if !skill_lines.is_empty() {
        sections.push(format!("SKILLS\n{}", skill_lines.join("\n")));
    }

    let interest_lines: Vec<String> = InterestCategory::ALL
        .iter()
        .filter_map(|category| {
            let names: Vec<String> = draft
                .interests
                .iter()
                .filter(|e| e.item.category == *category)
                .map(|e| match e.item.description.as_deref().map(str::trim) {
                    Some(d) if !d.is_empty() => format!("{} ({d})", e.item.name),
                    _ => e.item.name.clone(),
                })
                .collect();
            (!names.is_empty()).then(|| format!("{}: {}", category.label(), names.join(", ")))
        })
        .collect();
    if !interest_lines.is_empty() {
        sections.push(format!("INTERESTS\n{}", interest_lines.join("\n")));
    }

    sections.join("\n\n")
}

fn render_header(details: &PersonalDetails) -> String {
    let contact: Vec<&str> = [
        &details.email,
        &details.phone,
        &details.address,
        &details.portfolio,
    ]
    .into_iter()
    .map(|s| s.trim())
    .filter(|s| !s.is_empty())
    .collect();

    let mut lines = Vec::new();
    if !details.full_name.trim().is_empty() {
        lines.push(details.full_name.trim().to_string());
    }
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
    }
    lines.join("\n")
}

fn render_section<T>(title: &str, entries: &[Entry<T>], render: fn(&T) -> String) -> String {
    let body: Vec<String> = entries.iter().map(|e| render(&e.item)).collect();
    format!("{title}\n{}", body.join("\n\n"))
}

fn push_achievements(lines: &mut Vec<String>, achievements: &[String]) {
    lines.extend(
        achievements
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(|a| format!("- {a}")),
    );
}

fn render_work(work: &WorkExperience) -> String {
    let mut lines = vec![format!(
        "{} at {} ({} - {})",
        work.position, work.company, work.start, work.tenure
    )];
    if !work.description.trim().is_empty() {
        lines.push(work.description.trim().to_string());
    }
    push_achievements(&mut lines, &work.achievements);
    lines.join("\n")
}

fn render_education(edu: &Education) -> String {
    let degree = if edu.field.trim().is_empty() {
        edu.degree.clone()
    } else {
        format!("{} in {}", edu.degree, edu.field.trim())
    };
    let mut lines = vec![format!(
        "{degree}, {} ({} - {})",
        edu.institution, edu.start, edu.tenure
    )];
    if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.trim().is_empty()) {
        lines.push(format!("GPA: {gpa}"));
    }
    push_achievements(&mut lines, &edu.achievements);
    lines.join("\n")
}

fn render_certification(cert: &Certification) -> String {
    let expiry = match cert.expiry {
        Expiry::NoExpiry => " • No Expiry".to_string(),
        Expiry::Expires(date) => format!(" • Expires: {date}"),
    };
    let mut lines = vec![
        format!("{} - {}", cert.name, cert.issuer),
        format!("Issued: {}{expiry}", cert.issued),
    ];
    if let Some(id) = cert.credential_id.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Credential ID: {id}"));
    }
    if let Some(url) = cert.credential_url.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Credential URL: {url}"));
    }
    lines.join("\n")
}
