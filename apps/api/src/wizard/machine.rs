//! Wizard state machine.
//!
//! Steps run `Style → Personal → SummarySkills → Experience → Export`,
//! strictly linear with one back-edge per step. Each step's inputs live in
//! the session scratch until `advance` commits them into the aggregate;
//! `retreat` moves backward without touching either, so committed data is
//! never lost to navigation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{
    ExperienceKind, PersonalInfo, Project, ResumeData, Skill, StyleConfig, WorkExperience,
};
use crate::render::assembler::assemble_document;
use crate::wizard::forms::{
    AddProjectRequest, AddSkillRequest, AddWorkExperienceRequest, StepForm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Style,
    Personal,
    SummarySkills,
    Experience,
    Export,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Style => 1,
            WizardStep::Personal => 2,
            WizardStep::SummarySkills => 3,
            WizardStep::Experience => 4,
            WizardStep::Export => 5,
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Style => Some(WizardStep::Personal),
            WizardStep::Personal => Some(WizardStep::SummarySkills),
            WizardStep::SummarySkills => Some(WizardStep::Experience),
            WizardStep::Experience => Some(WizardStep::Export),
            WizardStep::Export => None,
        }
    }

    fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Style => None,
            WizardStep::Personal => Some(WizardStep::Style),
            WizardStep::SummarySkills => Some(WizardStep::Personal),
            WizardStep::Experience => Some(WizardStep::SummarySkills),
            WizardStep::Export => Some(WizardStep::Experience),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Style => "Style",
            WizardStep::Personal => "Personal Details",
            WizardStep::SummarySkills => "Summary & Skills",
            WizardStep::Experience => "Experience",
            WizardStep::Export => "Export",
        }
    }
}

/// Uncommitted per-step inputs. Survives navigation in both directions;
/// only `advance` copies the current step's slice into the aggregate.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scratch {
    pub style: StyleConfig,
    pub personal: PersonalInfo,
    pub job_description: String,
    pub job_profile: String,
    pub summary: String,
    pub skills: Vec<Skill>,
    pub experience_kind: ExperienceKind,
    pub projects: Vec<Project>,
    pub work_experiences: Vec<WorkExperience>,
    /// Last generated drafts, kept so a failed regeneration never
    /// clobbers text the user may already be editing.
    pub project_summary_draft: String,
    pub work_summary_draft: String,
}

/// One wizard session: id, current step, the committed aggregate, and the
/// staged scratch. Owned by the session store for its whole lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSession {
    pub id: Uuid,
    pub step: WizardStep,
    pub data: ResumeData,
    pub scratch: Scratch,
}

impl WizardSession {
    pub fn new() -> Self {
        WizardSession {
            id: Uuid::new_v4(),
            step: WizardStep::Style,
            data: ResumeData::default(),
            scratch: Scratch::default(),
        }
    }

    /// Merges a partial step form into the scratch. The form's variant
    /// must match the current step.
    pub fn stage(&mut self, form: StepForm) -> Result<(), AppError> {
        match (&form, self.step) {
            (StepForm::Style(f), WizardStep::Style) => {
                if let Some(c) = f.theme_color {
                    self.scratch.style.theme_color = c;
                }
                if let Some(c) = f.text_color {
                    self.scratch.style.text_color = c;
                }
                if let Some(font) = f.font_family {
                    self.scratch.style.font_family = font;
                }
                if let Some(layout) = f.layout_type {
                    self.scratch.style.layout_type = layout;
                }
                Ok(())
            }
            (StepForm::Personal(f), WizardStep::Personal) => {
                let p = &mut self.scratch.personal;
                merge(&mut p.first_name, &f.first_name);
                merge(&mut p.last_name, &f.last_name);
                merge(&mut p.job_title, &f.job_title);
                merge(&mut p.phone, &f.phone);
                merge(&mut p.email, &f.email);
                Ok(())
            }
            (StepForm::SummarySkills(f), WizardStep::SummarySkills) => {
                merge(&mut self.scratch.job_description, &f.job_description);
                merge(&mut self.scratch.job_profile, &f.job_profile);
                merge(&mut self.scratch.summary, &f.summary);
                Ok(())
            }
            (StepForm::Experience(f), WizardStep::Experience) => {
                if let Some(kind) = f.experience_kind {
                    self.scratch.experience_kind = kind;
                }
                Ok(())
            }
            (form, step) => Err(AppError::Validation(format!(
                "form for step '{}' does not match current step '{}'",
                form_label(form),
                step.label()
            ))),
        }
    }

    /// Commits the current step's scratch into the aggregate and moves
    /// forward. Silent no-op on the final step. Leaving the Experience
    /// step also assembles the document the export step will reuse.
    pub fn advance(&mut self) {
        match self.step {
            WizardStep::Style => {
                self.data.style = self.scratch.style;
            }
            WizardStep::Personal => {
                self.data.personal_info = self.scratch.personal.clone();
            }
            WizardStep::SummarySkills => {
                self.data.summary = self.scratch.summary.clone();
                self.data.skills = self.scratch.skills.clone();
            }
            WizardStep::Experience => {
                self.data.experience_kind = self.scratch.experience_kind;
                self.data.projects = self.scratch.projects.clone();
                self.data.work_experiences = self.scratch.work_experiences.clone();
                self.data.rendered_html = assemble_document(&self.data);
            }
            WizardStep::Export => return,
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Moves one step back without committing or discarding anything.
    /// No-op on the first step.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Renders the live preview: the committed aggregate overlaid with the
    /// current step's uncommitted scratch. On the export step the stored
    /// document is returned as-is (byte-identity with the PDF input).
    pub fn preview(&self) -> String {
        if self.step == WizardStep::Export {
            return self.data.rendered_html.clone();
        }
        assemble_document(&self.preview_data())
    }

    fn preview_data(&self) -> ResumeData {
        let mut data = self.data.clone();
        match self.step {
            WizardStep::Style => {
                data.style = self.scratch.style;
            }
            WizardStep::Personal => {
                data.personal_info = self.scratch.personal.clone();
            }
            WizardStep::SummarySkills => {
                data.summary = self.scratch.summary.clone();
                data.skills = self.scratch.skills.clone();
            }
            WizardStep::Experience => {
                data.experience_kind = self.scratch.experience_kind;
                data.projects = self.scratch.projects.clone();
                data.work_experiences = self.scratch.work_experiences.clone();
            }
            WizardStep::Export => {}
        }
        data
    }

    // ── Within-step list edits (scratch only, committed on advance) ──────

    pub fn add_skill(&mut self, req: AddSkillRequest) -> Result<(), AppError> {
        self.require_step(WizardStep::SummarySkills, "skills")?;
        if req.name.trim().is_empty() {
            return Err(AppError::Validation("skill name cannot be empty".into()));
        }
        if !(1..=5).contains(&req.rating) {
            return Err(AppError::Validation(format!(
                "skill rating must be between 1 and 5, got {}",
                req.rating
            )));
        }
        self.scratch.skills.push(Skill {
            name: req.name.trim().to_string(),
            rating: req.rating,
        });
        Ok(())
    }

    pub fn remove_skill(&mut self, index: usize) -> Result<(), AppError> {
        self.require_step(WizardStep::SummarySkills, "skills")?;
        if index >= self.scratch.skills.len() {
            return Err(AppError::Validation(format!("no skill at index {index}")));
        }
        self.scratch.skills.remove(index);
        Ok(())
    }

    pub fn add_project(&mut self, req: AddProjectRequest) -> Result<(), AppError> {
        self.require_step(WizardStep::Experience, "projects")?;
        for (field, value) in [
            ("project_name", &req.project_name),
            ("tools_used", &req.tools_used),
            ("description", &req.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
        }
        self.scratch.projects.push(Project {
            project_name: req.project_name,
            tools_used: req.tools_used,
            description: req.description,
        });
        Ok(())
    }

    pub fn remove_project(&mut self, index: usize) -> Result<(), AppError> {
        self.require_step(WizardStep::Experience, "projects")?;
        if index >= self.scratch.projects.len() {
            return Err(AppError::Validation(format!("no project at index {index}")));
        }
        self.scratch.projects.remove(index);
        Ok(())
    }

    pub fn add_work_experience(&mut self, req: AddWorkExperienceRequest) -> Result<(), AppError> {
        self.require_step(WizardStep::Experience, "work experiences")?;
        for (field, value) in [
            ("company_name", &req.company_name),
            ("location", &req.location),
            ("description", &req.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
        }
        // The "currently employed" checkbox wins over any picked end date.
        let end_date = if req.currently_employed {
            None
        } else {
            req.end_date
        };
        self.scratch.work_experiences.push(WorkExperience {
            company_name: req.company_name,
            location: req.location,
            start_date: req.start_date,
            end_date,
            role: req.role,
            description: req.description,
        });
        Ok(())
    }

    pub fn remove_work_experience(&mut self, index: usize) -> Result<(), AppError> {
        self.require_step(WizardStep::Experience, "work experiences")?;
        if index >= self.scratch.work_experiences.len() {
            return Err(AppError::Validation(format!(
                "no work experience at index {index}"
            )));
        }
        self.scratch.work_experiences.remove(index);
        Ok(())
    }

    fn require_step(&self, step: WizardStep, what: &str) -> Result<(), AppError> {
        if self.step != step {
            return Err(AppError::Validation(format!(
                "{what} can only be edited on the '{}' step (currently on '{}')",
                step.label(),
                self.step.label()
            )));
        }
        Ok(())
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

fn merge(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

fn form_label(form: &StepForm) -> &'static str {
    match form {
        StepForm::Style(_) => WizardStep::Style.label(),
        StepForm::Personal(_) => WizardStep::Personal.label(),
        StepForm::SummarySkills(_) => WizardStep::SummarySkills.label(),
        StepForm::Experience(_) => WizardStep::Experience.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::forms::{PersonalForm, StyleForm, SummarySkillsForm};

    fn session_at_summary() -> WizardSession {
        let mut s = WizardSession::new();
        s.advance(); // Style -> Personal
        s.stage(StepForm::Personal(PersonalForm {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            job_title: Some("Engineer".into()),
            ..Default::default()
        }))
        .unwrap();
        s.advance(); // Personal -> SummarySkills
        s
    }

    #[test]
    fn test_steps_are_linear() {
        let mut s = WizardSession::new();
        let expected = [
            WizardStep::Style,
            WizardStep::Personal,
            WizardStep::SummarySkills,
            WizardStep::Experience,
            WizardStep::Export,
        ];
        for step in expected {
            assert_eq!(s.step, step);
            s.advance();
        }
        // Advance from Export is a silent no-op.
        assert_eq!(s.step, WizardStep::Export);
        s.advance();
        assert_eq!(s.step, WizardStep::Export);
    }

    #[test]
    fn test_retreat_noop_on_first_step() {
        let mut s = WizardSession::new();
        s.retreat();
        assert_eq!(s.step, WizardStep::Style);
    }

    #[test]
    fn test_back_navigation_keeps_committed_data() {
        let mut s = session_at_summary();
        s.stage(StepForm::SummarySkills(SummarySkillsForm {
            summary: Some("Loves systems.".into()),
            ..Default::default()
        }))
        .unwrap();
        s.add_skill(AddSkillRequest {
            name: "Rust".into(),
            rating: 5,
        })
        .unwrap();

        s.advance(); // commits summary + skills
        let committed = s.data.clone();

        s.retreat();
        s.advance();
        assert_eq!(s.data, committed);

        // Deep back-and-forth: nothing entered earlier is lost either.
        s.retreat();
        s.retreat();
        s.retreat();
        assert_eq!(s.step, WizardStep::Style);
        s.advance();
        s.advance();
        s.advance();
        assert_eq!(s.data, committed);
        assert_eq!(s.data.personal_info.first_name, "Ada");
        assert_eq!(s.data.skills.len(), 1);
    }

    #[test]
    fn test_stage_rejects_wrong_step_form() {
        let mut s = WizardSession::new();
        let err = s
            .stage(StepForm::Personal(PersonalForm::default()))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_advance_commits_only_current_step() {
        let mut s = WizardSession::new();
        s.stage(StepForm::Style(StyleForm {
            theme_color: Some("#123456".parse().unwrap()),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(s.data.style.theme_color, crate::models::resume::Rgb::WHITE);
        s.advance();
        let expected: crate::models::resume::Rgb = "#123456".parse().unwrap();
        assert_eq!(s.data.style.theme_color, expected);
    }

    #[test]
    fn test_preview_reflects_uncommitted_edits() {
        let mut s = session_at_summary();
        s.stage(StepForm::SummarySkills(SummarySkillsForm {
            summary: Some("Staged but not committed".into()),
            ..Default::default()
        }))
        .unwrap();
        assert!(s.preview().contains("Staged but not committed"));
        assert!(s.data.summary.is_empty());
    }

    #[test]
    fn test_skill_validation() {
        let mut s = session_at_summary();
        assert!(s
            .add_skill(AddSkillRequest {
                name: "  ".into(),
                rating: 3
            })
            .is_err());
        assert!(s
            .add_skill(AddSkillRequest {
                name: "Rust".into(),
                rating: 0
            })
            .is_err());
        assert!(s
            .add_skill(AddSkillRequest {
                name: "Rust".into(),
                rating: 6
            })
            .is_err());
        assert!(s
            .add_skill(AddSkillRequest {
                name: "Rust".into(),
                rating: 5
            })
            .is_ok());
        assert_eq!(s.scratch.skills.len(), 1);
    }

    #[test]
    fn test_skill_edits_gated_to_their_step() {
        let mut s = WizardSession::new();
        let err = s
            .add_skill(AddSkillRequest {
                name: "Rust".into(),
                rating: 5,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_remove_skill_out_of_range() {
        let mut s = session_at_summary();
        assert!(s.remove_skill(0).is_err());
    }

    #[test]
    fn test_currently_employed_overrides_end_date() {
        let mut s = session_at_summary();
        s.advance(); // -> Experience
        s.stage(StepForm::Experience(crate::wizard::forms::ExperienceForm {
            experience_kind: Some(ExperienceKind::Experienced),
        }))
        .unwrap();
        s.add_work_experience(AddWorkExperienceRequest {
            company_name: "ABC Corp".into(),
            location: "Kolkata".into(),
            start_date: chrono::NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            currently_employed: true,
            role: "Engineer".into(),
            description: "Did things".into(),
        })
        .unwrap();
        assert_eq!(s.scratch.work_experiences[0].end_date, None);
    }

    #[test]
    fn test_rendered_html_assembled_on_leaving_experience() {
        let mut s = session_at_summary();
        s.advance(); // -> Experience
        s.add_project(AddProjectRequest {
            project_name: "X".into(),
            tools_used: "Y".into(),
            description: "Z".into(),
        })
        .unwrap();
        assert!(s.data.rendered_html.is_empty());
        s.advance(); // -> Export, assembles
        assert!(s.data.rendered_html.contains("Ada Lovelace"));
        assert!(s.data.rendered_html.contains("<h3>Projects</h3>"));
        // Export preview is exactly the stored string.
        assert_eq!(s.preview(), s.data.rendered_html);
    }

    #[test]
    fn test_toggling_kind_keeps_both_lists() {
        let mut s = session_at_summary();
        s.advance(); // -> Experience
        s.add_project(AddProjectRequest {
            project_name: "X".into(),
            tools_used: "Y".into(),
            description: "Z".into(),
        })
        .unwrap();
        s.stage(StepForm::Experience(crate::wizard::forms::ExperienceForm {
            experience_kind: Some(ExperienceKind::Experienced),
        }))
        .unwrap();
        // The project list survives the toggle; it is just not rendered.
        assert_eq!(s.scratch.projects.len(), 1);
        assert!(s.preview().contains("No work experiences to display."));
        assert!(!s.preview().contains("<h3>Projects</h3>"));
    }
}
