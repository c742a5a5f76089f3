//! Linear step navigation over the draft.
//!
//! The wizard owns the draft for the lifetime of one editing session and hands
//! each step only its own slice. Finalize is the one step that sees the whole
//! draft, read-only.

use serde::{Deserialize, Serialize};

use crate::wizard::models::{
    Certification, Draft, Education, Entry, Interest, PersonalDetails, Skill, WorkExperience,
};
use crate::wizard::render::render_draft;
use crate::wizard::DraftError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalDetails,
    WorkHistory,
    Education,
    Certifications,
    Skills,
    Interests,
    Finalize,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::PersonalDetails,
        WizardStep::WorkHistory,
        WizardStep::Education,
        WizardStep::Certifications,
        WizardStep::Skills,
        WizardStep::Interests,
        WizardStep::Finalize,
    ];

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::PersonalDetails => "Personal Details",
            WizardStep::WorkHistory => "Work History",
            WizardStep::Education => "Education",
            WizardStep::Certifications => "Certifications",
            WizardStep::Skills => "Skills",
            WizardStep::Interests => "Interests",
            WizardStep::Finalize => "Finalize",
        }
    }
}

/// Borrowed view of the draft slice owned by the current step.
#[derive(Debug, PartialEq)]
pub enum StepSlice<'a> {
    PersonalDetails(&'a PersonalDetails),
    WorkHistory(&'a [Entry<WorkExperience>]),
    Education(&'a [Entry<Education>]),
    Certifications(&'a [Entry<Certification>]),
    Skills(&'a [Entry<Skill>]),
    Interests(&'a [Entry<Interest>]),
    Review(&'a Draft),
}

/// A step's edited slice, handed back to be merged into the draft.
#[derive(Debug, Clone)]
pub enum SliceUpdate {
    PersonalDetails(PersonalDetails),
    WorkHistory(Vec<Entry<WorkExperience>>),
    Education(Vec<Entry<Education>>),
    Certifications(Vec<Entry<Certification>>),
    Skills(Vec<Entry<Skill>>),
    Interests(Vec<Entry<Interest>>),
}

impl SliceUpdate {
    pub fn step(&self) -> WizardStep {
        match self {
            SliceUpdate::PersonalDetails(_) => WizardStep::PersonalDetails,
            SliceUpdate::WorkHistory(_) => WizardStep::WorkHistory,
            SliceUpdate::Education(_) => WizardStep::Education,
            SliceUpdate::Certifications(_) => WizardStep::Certifications,
            SliceUpdate::Skills(_) => WizardStep::Skills,
            SliceUpdate::Interests(_) => WizardStep::Interests,
        }
    }
}

/// One editing session: a step cursor plus the draft it edits.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    current: usize,
    draft: Draft,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on an existing draft, e.g. one rebuilt by the client.
    pub fn with_draft(draft: Draft) -> Self {
        Self { current: 0, draft }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::ALL[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == WizardStep::ALL.len() - 1
    }

    /// Advances one step. Stays on Finalize; returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Goes back one step. Stays on the first step; returns whether the cursor moved.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn slice(&self) -> StepSlice<'_> {
        match self.current_step() {
            WizardStep::PersonalDetails => StepSlice::PersonalDetails(&self.draft.personal_details),
            WizardStep::WorkHistory => StepSlice::WorkHistory(&self.draft.work_history),
            WizardStep::Education => StepSlice::Education(&self.draft.education),
            WizardStep::Certifications => StepSlice::Certifications(&self.draft.certifications),
            WizardStep::Skills => StepSlice::Skills(&self.draft.skills),
            WizardStep::Interests => StepSlice::Interests(&self.draft.interests),
            WizardStep::Finalize => StepSlice::Review(&self.draft),
        }
    }

    /// Merges the current step's edited slice back into the draft.
    /// A step may only write its own slice.
    pub fn merge(&mut self, update: SliceUpdate) -> Result<(), DraftError> {
        let current = self.current_step();
        if update.step() != current {
            return Err(DraftError::StepMismatch {
                current: current.title(),
                target: update.step().title(),
            });
        }

        match update {
            SliceUpdate::PersonalDetails(details) => {
                details.validate()?;
                self.draft.personal_details = details;
                Ok(())
            }
            SliceUpdate::WorkHistory(entries) => self.draft.replace(entries),
            SliceUpdate::Education(entries) => self.draft.replace(entries),
            SliceUpdate::Certifications(entries) => self.draft.replace(entries),
            SliceUpdate::Skills(entries) => self.draft.replace(entries),
            SliceUpdate::Interests(entries) => self.draft.replace(entries),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Plain-text review of the whole draft. Only the Finalize step reads
    /// across sections, so every other step gets `None`.
    pub fn review(&self) -> Option<String> {
        self.is_last().then(|| render_draft(&self.draft))
    }

    /// Ends the session, handing the draft to the caller.
    pub fn into_draft(self) -> Draft {
        self.draft
    }
}
