//! Draft resume record assembled across the wizard steps.
//!
//! The draft lives only for the editing session. Nothing here is persisted.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wizard::DraftError;

// ────────────────────────────────────────────────────────────────────────────
// Periods
// ────────────────────────────────────────────────────────────────────────────

/// A calendar month, written `YYYY-MM` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DraftError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(YearMonth)
            .ok_or_else(|| DraftError::InvalidYearMonth(format!("{year:04}-{month:02}")))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl FromStr for YearMonth {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map(YearMonth)
            .map_err(|_| DraftError::InvalidYearMonth(s.to_string()))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DraftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Whether a position or course of study is still running.
/// Replaces a "current" flag next to a nullable end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "end", rename_all = "snake_case")]
pub enum Tenure {
    Ongoing,
    Ended(YearMonth),
}

impl Tenure {
    pub fn end(&self) -> Option<YearMonth> {
        match self {
            Tenure::Ongoing => None,
            Tenure::Ended(end) => Some(*end),
        }
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tenure::Ongoing => f.write_str("Present"),
            Tenure::Ended(end) => end.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum Expiry {
    NoExpiry,
    Expires(YearMonth),
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub portfolio: String,
}

impl PersonalDetails {
    /// Checks the fields the personal-details form marks as required.
    pub fn validate(&self) -> Result<(), DraftError> {
        for (field, value) in [
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField {
                    section: "personal details",
                    field,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start: YearMonth,
    pub tenure: Tenure,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: String,
    pub start: YearMonth,
    pub tenure: Tenure,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issued: YearMonth,
    pub expiry: Expiry,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

/// Skill level on a 1 (Beginner) to 5 (Expert) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, DraftError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Proficiency(level))
        } else {
            Err(DraftError::InvalidProficiency(level))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Beginner",
            2 => "Elementary",
            3 => "Intermediate",
            4 => "Advanced",
            _ => "Expert",
        }
    }
}

impl Default for Proficiency {
    fn default() -> Self {
        Proficiency(3)
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = DraftError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Proficiency::new(value)
    }
}

impl From<Proficiency> for u8 {
    fn from(value: Proficiency) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    #[default]
    Technical,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Languages,
    Tools,
    Frameworks,
    Other,
}

impl SkillCategory {
    /// Display order used when grouping skills.
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Technical,
        SkillCategory::SoftSkills,
        SkillCategory::Languages,
        SkillCategory::Tools,
        SkillCategory::Frameworks,
        SkillCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::Languages => "Languages",
            SkillCategory::Tools => "Tools",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub proficiency: Proficiency,
    #[serde(default)]
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestCategory {
    #[default]
    Hobbies,
    Sports,
    #[serde(rename = "Arts & Culture")]
    ArtsAndCulture,
    Technology,
    Travel,
    Volunteering,
    Other,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; 7] = [
        InterestCategory::Hobbies,
        InterestCategory::Sports,
        InterestCategory::ArtsAndCulture,
        InterestCategory::Technology,
        InterestCategory::Travel,
        InterestCategory::Volunteering,
        InterestCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestCategory::Hobbies => "Hobbies",
            InterestCategory::Sports => "Sports",
            InterestCategory::ArtsAndCulture => "Arts & Culture",
            InterestCategory::Technology => "Technology",
            InterestCategory::Travel => "Travel",
            InterestCategory::Volunteering => "Volunteering",
            InterestCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: InterestCategory,
}

// ────────────────────────────────────────────────────────────────────────────
// Entries and the draft
// ────────────────────────────────────────────────────────────────────────────

/// A list item tagged with the id it was given when added to the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: Uuid,
    #[serde(flatten)]
    pub item: T,
}

/// A type that lives in one of the draft's ordered lists.
pub trait DraftItem: Sized {
    const SECTION: &'static str;

    fn validate(&self) -> Result<(), DraftError>;
    fn list(draft: &Draft) -> &[Entry<Self>];
    fn list_mut(draft: &mut Draft) -> &mut Vec<Entry<Self>>;
}

fn require(section: &'static str, field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::MissingField { section, field })
    } else {
        Ok(())
    }
}

impl DraftItem for WorkExperience {
    const SECTION: &'static str = "work history";

    fn validate(&self) -> Result<(), DraftError> {
        require(Self::SECTION, "company", &self.company)?;
        require(Self::SECTION, "position", &self.position)
    }

    fn list(draft: &Draft) -> &[Entry<Self>] {
        &draft.work_history
    }

    fn list_mut(draft: &mut Draft) -> &mut Vec<Entry<Self>> {
        &mut draft.work_history
    }
}

impl DraftItem for Education {
    const SECTION: &'static str = "education";

    fn validate(&self) -> Result<(), DraftError> {
        require(Self::SECTION, "institution", &self.institution)?;
        require(Self::SECTION, "degree", &self.degree)?;
        require(Self::SECTION, "field", &self.field)
    }

    fn list(draft: &Draft) -> &[Entry<Self>] {
        &draft.education
    }

    fn list_mut(draft: &mut Draft) -> &mut Vec<Entry<Self>> {
        &mut draft.education
    }
}

impl DraftItem for Certification {
    const SECTION: &'static str = "certifications";

    fn validate(&self) -> Result<(), DraftError> {
        require(Self::SECTION, "name", &self.name)?;
        require(Self::SECTION, "issuer", &self.issuer)
    }

    fn list(draft: &Draft) -> &[Entry<Self>] {
        &draft.certifications
    }

    fn list_mut(draft: &mut Draft) -> &mut Vec<Entry<Self>> {
        &mut draft.certifications
    }
}

impl DraftItem for Skill {
    const SECTION: &'static str = "skills";

    fn validate(&self) -> Result<(), DraftError> {
        require(Self::SECTION, "name", &self.name)
    }

    fn list(draft: &Draft) -> &[Entry<Self>] {
        &draft.skills
    }

    fn list_mut(draft: &mut Draft) -> &mut Vec<Entry<Self>> {
        &mut draft.skills
    }
}

impl DraftItem for Interest {
    const SECTION: &'static str = "interests";

    fn validate(&self) -> Result<(), DraftError> {
        require(Self::SECTION, "name", &self.name)
    }

    fn list(draft: &Draft) -> &[Entry<Self>] {
        &draft.interests
    }

    fn list_mut(draft: &mut Draft) -> &mut Vec<Entry<Self>> {
        &mut draft.interests
    }
}

/// The in-progress resume. Created empty when a wizard starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub personal_details: PersonalDetails,
    pub work_history: Vec<Entry<WorkExperience>>,
    pub education: Vec<Entry<Education>>,
    pub certifications: Vec<Entry<Certification>>,
    pub skills: Vec<Entry<Skill>>,
    pub interests: Vec<Entry<Interest>>,
}

impl Draft {
    /// Validates and appends an item, returning the id assigned to it.
    pub fn add<T: DraftItem>(&mut self, item: T) -> Result<Uuid, DraftError> {
        item.validate()?;
        let id = Uuid::new_v4();
        T::list_mut(self).push(Entry { id, item });
        Ok(id)
    }

    /// Removes the item with `id`. Returns false if no such item exists.
    pub fn remove<T: DraftItem>(&mut self, id: Uuid) -> bool {
        let list = T::list_mut(self);
        let before = list.len();
        list.retain(|e| e.id != id);
        list.len() != before
    }

    pub fn get<T: DraftItem>(&self, id: Uuid) -> Option<&T> {
        T::list(self).iter().find(|e| e.id == id).map(|e| &e.item)
    }

    /// Replaces a whole list, as a step does when it hands its slice back.
    /// Every item must validate and ids must be unique within the list.
    pub fn replace<T: DraftItem>(&mut self, entries: Vec<Entry<T>>) -> Result<(), DraftError> {
        check_entries(&entries)?;
        *T::list_mut(self) = entries;
        Ok(())
    }

    /// Checks a draft that arrived whole (deserialized) rather than through
    /// `add`/`replace`: personal details, every list item, and id uniqueness.
    pub fn validate(&self) -> Result<(), DraftError> {
        self.personal_details.validate()?;
        check_entries(&self.work_history)?;
        check_entries(&self.education)?;
        check_entries(&self.certifications)?;
        check_entries(&self.skills)?;
        check_entries(&self.interests)?;

        let mut seen = HashSet::new();
        let ids = self
            .work_history
            .iter()
            .map(|e| (WorkExperience::SECTION, e.id))
            .chain(self.education.iter().map(|e| (Education::SECTION, e.id)))
            .chain(self.certifications.iter().map(|e| (Certification::SECTION, e.id)))
            .chain(self.skills.iter().map(|e| (Skill::SECTION, e.id)))
            .chain(self.interests.iter().map(|e| (Interest::SECTION, e.id)));
        for (section, id) in ids {
            if !seen.insert(id) {
                return Err(DraftError::DuplicateId { section, id });
            }
        }
        Ok(())
    }
}

fn check_entries<T: DraftItem>(entries: &[Entry<T>]) -> Result<(), DraftError> {
    let mut seen = HashSet::new();
    for entry in entries {
        entry.item.validate()?;
        if !seen.insert(entry.id) {
            return Err(DraftError::DuplicateId {
                section: T::SECTION,
                id: entry.id,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(company: &str) -> WorkExperience {
        WorkExperience {
            company: company.to_string(),
            position: "Software Engineer".to_string(),
            start: "2023-08".parse().unwrap(),
            tenure: Tenure::Ongoing,
            description: String::new(),
            achievements: vec![],
        }
    }

    #[test]
    fn test_year_month_parse_and_display() {
        let ym: YearMonth = "2023-08".parse().unwrap();
        assert_eq!(ym.year(), 2023);
        assert_eq!(ym.month(), 8);
        assert_eq!(ym.to_string(), "2023-08");
    }

    #[test]
    fn test_year_month_rejects_garbage() {
        assert!("2023-13".parse::<YearMonth>().is_err());
        assert!("August 2023".parse::<YearMonth>().is_err());
        assert!("".parse::<YearMonth>().is_err());
        assert!(YearMonth::new(2020, 0).is_err());
    }

    #[test]
    fn test_tenure_serde_shapes() {
        let ongoing = serde_json::to_value(Tenure::Ongoing).unwrap();
        assert_eq!(ongoing, serde_json::json!({"status": "ongoing"}));

        let ended: Tenure =
            serde_json::from_value(serde_json::json!({"status": "ended", "end": "2022-05"}))
                .unwrap();
        assert_eq!(ended.end(), Some(YearMonth::new(2022, 5).unwrap()));
        assert_eq!(ended.to_string(), "2022-05");
        assert_eq!(Tenure::Ongoing.to_string(), "Present");
    }

    #[test]
    fn test_ended_without_date_is_rejected() {
        let result: Result<Tenure, _> =
            serde_json::from_value(serde_json::json!({"status": "ended"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_proficiency_bounds() {
        assert!(Proficiency::new(0).is_err());
        assert!(Proficiency::new(6).is_err());
        assert_eq!(Proficiency::new(5).unwrap().label(), "Expert");
        assert_eq!(Proficiency::default().level(), 3);
        assert!(serde_json::from_str::<Proficiency>("9").is_err());
    }

    #[test]
    fn test_skill_defaults_match_new_skill_form() {
        let skill: Skill = serde_json::from_str(r#"{"name": "Rust"}"#).unwrap();
        assert_eq!(skill.proficiency.level(), 3);
        assert_eq!(skill.category, SkillCategory::Technical);

        let soft: Skill =
            serde_json::from_str(r#"{"name": "Mentoring", "category": "Soft Skills"}"#).unwrap();
        assert_eq!(soft.category, SkillCategory::SoftSkills);
    }

    #[test]
    fn test_interest_category_labels_roundtrip_through_serde() {
        for category in InterestCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut draft = Draft::default();
        let a = draft.add(work("Capital One")).unwrap();
        let b = draft.add(work("Eventbrite")).unwrap();
        assert_ne!(a, b);
        assert_eq!(draft.work_history.len(), 2);
        assert_eq!(draft.get::<WorkExperience>(b).unwrap().company, "Eventbrite");
    }

    #[test]
    fn test_add_rejects_missing_required_field() {
        let mut draft = Draft::default();
        let err = draft.add(work("  ")).unwrap_err();
        assert!(matches!(
            err,
            DraftError::MissingField {
                section: "work history",
                field: "company"
            }
        ));
        assert!(draft.work_history.is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut draft = Draft::default();
        let id = draft
            .add(Skill {
                name: "Rust".to_string(),
                proficiency: Proficiency::new(4).unwrap(),
                category: SkillCategory::Technical,
            })
            .unwrap();
        assert!(draft.remove::<Skill>(id));
        assert!(!draft.remove::<Skill>(id));
        assert!(draft.skills.is_empty());
    }

    #[test]
    fn test_replace_rejects_duplicate_ids() {
        let mut draft = Draft::default();
        let id = Uuid::new_v4();
        let entries = vec![
            Entry {
                id,
                item: work("A"),
            },
            Entry {
                id,
                item: work("B"),
            },
        ];
        assert!(matches!(
            draft.replace(entries),
            Err(DraftError::DuplicateId { .. })
        ));
        assert!(draft.work_history.is_empty());
    }

    #[test]
    fn test_education_requires_field_of_study() {
        let mut draft = Draft::default();
        let err = draft
            .add(Education {
                institution: "MIT".to_string(),
                degree: "BSc".to_string(),
                field: String::new(),
                start: "2015-09".parse().unwrap(),
                tenure: Tenure::Ongoing,
                gpa: None,
                achievements: vec![],
            })
            .unwrap_err();
        assert_eq!(
            err,
            DraftError::MissingField {
                section: "education",
                field: "field"
            }
        );
    }

    fn complete_details() -> PersonalDetails {
        PersonalDetails {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "London".to_string(),
            portfolio: String::new(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_draft() {
        let mut draft = Draft {
            personal_details: complete_details(),
            ..Draft::default()
        };
        draft.add(work("Capital One")).unwrap();
        draft
            .add(Skill {
                name: "Rust".to_string(),
                proficiency: Proficiency::default(),
                category: SkillCategory::Technical,
            })
            .unwrap();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_validate_catches_blank_items_that_bypassed_add() {
        let mut draft = Draft {
            personal_details: complete_details(),
            ..Draft::default()
        };
        draft.work_history.push(Entry {
            id: Uuid::new_v4(),
            item: WorkExperience {
                position: String::new(),
                ..work("")
            },
        });
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingField {
                section: "work history",
                field: "company"
            })
        );
    }

    #[test]
    fn test_validate_rejects_ids_shared_across_sections() {
        let id = Uuid::new_v4();
        let mut draft = Draft {
            personal_details: complete_details(),
            ..Draft::default()
        };
        draft.work_history.push(Entry {
            id,
            item: work("Capital One"),
        });
        draft.skills.push(Entry {
            id,
            item: Skill {
                name: "Rust".to_string(),
                proficiency: Proficiency::default(),
                category: SkillCategory::Technical,
            },
        });
        assert_eq!(
            draft.validate(),
            Err(DraftError::DuplicateId {
                section: "skills",
                id
            })
        );
    }

    #[test]
    fn test_validate_requires_personal_details() {
        let draft = Draft::default();
        assert!(matches!(
            draft.validate(),
            Err(DraftError::MissingField {
                section: "personal details",
                ..
            })
        ));
    }

    #[test]
    fn test_personal_details_portfolio_is_optional() {
        let details = PersonalDetails {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "London".to_string(),
            portfolio: String::new(),
        };
        assert!(details.validate().is_ok());

        let missing_email = PersonalDetails {
            email: String::new(),
            ..details
        };
        assert!(matches!(
            missing_email.validate(),
            Err(DraftError::MissingField { field: "email", .. })
        ));
    }

    #[test]
    fn test_draft_deserializes_camel_case_with_entry_ids() {
        let json = r#"{
            "personalDetails": {"fullName": "Ada Lovelace", "email": "ada@example.com"},
            "workHistory": [{
                "id": "6f1c2a3e-8a7b-4c1d-9e2f-0a1b2c3d4e5f",
                "company": "Analytical Engines Ltd",
                "position": "Programmer",
                "start": "1842-01",
                "tenure": {"status": "ended", "end": "1843-09"},
                "achievements": ["Wrote the first published algorithm"]
            }],
            "certifications": [{
                "id": "0b9e1f7a-1111-4222-8333-944455566677",
                "name": "AWS Solutions Architect",
                "issuer": "Amazon",
                "issued": "2022-03",
                "expiry": {"kind": "no_expiry"}
            }]
        }"#;
        let draft: Draft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.personal_details.full_name, "Ada Lovelace");
        assert_eq!(draft.work_history[0].item.achievements.len(), 1);
        assert_eq!(draft.certifications[0].item.expiry, Expiry::NoExpiry);
        assert!(draft.skills.is_empty());
    }
}
