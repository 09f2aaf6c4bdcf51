//! Per-step input forms.
//!
//! Every field is optional: a form is a partial edit merged into the
//! session scratch, so a client can stage one field at a time and still
//! see it reflected in the preview before committing.

use serde::{Deserialize, Serialize};

use crate::models::resume::{ExperienceKind, FontFamily, LayoutType, Rgb};

/// One staged edit, tagged with the step it belongs to. Staging a form
/// whose variant does not match the session's current step is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepForm {
    Style(StyleForm),
    Personal(PersonalForm),
    SummarySkills(SummarySkillsForm),
    Experience(ExperienceForm),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleForm {
    pub theme_color: Option<Rgb>,
    pub text_color: Option<Rgb>,
    pub font_family: Option<FontFamily>,
    pub layout_type: Option<LayoutType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarySkillsForm {
    /// Pasted job description, kept around for later prompt building.
    pub job_description: Option<String>,
    pub job_profile: Option<String>,
    /// The editable summary text (user-typed or a generated draft).
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceForm {
    pub experience_kind: Option<ExperienceKind>,
}

/// Payload for the skill-add control on step 3.
#[derive(Debug, Clone, Deserialize)]
pub struct AddSkillRequest {
    pub name: String,
    pub rating: u8,
}

/// Payload for the project-add control on step 4 (Fresher branch).
#[derive(Debug, Clone, Deserialize)]
pub struct AddProjectRequest {
    pub project_name: String,
    pub tools_used: String,
    pub description: String,
}

/// Payload for the work-experience-add control on step 4 (Experienced
/// branch). `currently_employed` mirrors the checkbox that disables the
/// end-date field: when set, any provided end date is discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct AddWorkExperienceRequest {
    pub company_name: String,
    pub location: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub currently_employed: bool,
    pub role: String,
    pub description: String,
}
