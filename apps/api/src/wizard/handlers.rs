//! Axum route handlers for the wizard API.
//!
//! Handlers never hold the session lock across an await: backend calls
//! (text generation, PDF export) read a snapshot first, await, then
//! re-enter the store to stage the result.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts;
use crate::models::resume::{Project, Skill, WorkExperience};
use crate::pdf_export::PDF_FILE_NAME;
use crate::state::AppState;
use crate::wizard::forms::{
    AddProjectRequest, AddSkillRequest, AddWorkExperienceRequest, StepForm,
};
use crate::wizard::machine::{WizardSession, WizardStep};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub session_id: Uuid,
    pub step: WizardStep,
    pub step_number: u8,
}

impl From<&WizardSession> for StepResponse {
    fn from(session: &WizardSession) -> Self {
        StepResponse {
            session_id: session.id,
            step: session.step,
            step_number: session.step.number(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub html: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum GenerateRequest {
    /// Step-3 personal summary draft.
    Summary {
        job_description: String,
        job_profile: String,
    },
    /// Step-4 project summary draft (Fresher branch).
    Project {
        project_name: String,
        tools_used: String,
        description: String,
    },
    /// Step-4 work-experience summary draft (Experienced branch).
    Work {
        role_description: String,
        #[serde(default)]
        key_achievements: String,
        #[serde(default)]
        skills_expertise: String,
        #[serde(default)]
        impact: String,
    },
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Starts a wizard session with an empty aggregate on step 1.
pub async fn handle_create_session(State(state): State<AppState>) -> Json<StepResponse> {
    let session = state.sessions.create();
    tracing::info!("created wizard session {}", session.id);
    Json(StepResponse::from(&session))
}

/// GET /api/v1/sessions/:id
///
/// Full snapshot: step, committed aggregate and uncommitted scratch.
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WizardSession>, AppError> {
    let session = state.sessions.read_session(session_id, |s| s.clone())?;
    Ok(Json(session))
}

/// DELETE /api/v1/sessions/:id
///
/// Ends the session; the aggregate is dropped, nothing is persisted.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Navigation and staging
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/stage
///
/// Merges in-progress edits for the current step without committing, so
/// the preview can reflect them.
pub async fn handle_stage(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(form): Json<StepForm>,
) -> Result<Json<StepResponse>, AppError> {
    let response = state.sessions.with_session(session_id, |session| {
        session.stage(form)?;
        Ok(StepResponse::from(&*session))
    })?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/advance
///
/// Commits the current step into the aggregate and moves forward. An
/// optional form body is staged first. Silent no-op on the final step.
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    form: Option<Json<StepForm>>,
) -> Result<Json<StepResponse>, AppError> {
    let response = state.sessions.with_session(session_id, |session| {
        if let Some(Json(form)) = form {
            session.stage(form)?;
        }
        session.advance();
        Ok(StepResponse::from(&*session))
    })?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/retreat
///
/// Moves one step back without touching any data. No-op on step 1.
pub async fn handle_retreat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<StepResponse>, AppError> {
    let response = state.sessions.with_session(session_id, |session| {
        session.retreat();
        Ok(StepResponse::from(&*session))
    })?;
    Ok(Json(response))
}

/// GET /api/v1/sessions/:id/preview
///
/// Current preview: committed data overlaid with the step's staged edits.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PreviewResponse>, AppError> {
    let html = state.sessions.read_session(session_id, |s| s.preview())?;
    Ok(Json(PreviewResponse { html }))
}

// ────────────────────────────────────────────────────────────────────────────
// Within-step list edits
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddSkillRequest>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let skills = state.sessions.with_session(session_id, |session| {
        session.add_skill(request)?;
        Ok(session.scratch.skills.clone())
    })?;
    Ok(Json(skills))
}

/// DELETE /api/v1/sessions/:id/skills/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let skills = state.sessions.with_session(session_id, |session| {
        session.remove_skill(index)?;
        Ok(session.scratch.skills.clone())
    })?;
    Ok(Json(skills))
}

/// POST /api/v1/sessions/:id/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddProjectRequest>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.sessions.with_session(session_id, |session| {
        session.add_project(request)?;
        Ok(session.scratch.projects.clone())
    })?;
    Ok(Json(projects))
}

/// DELETE /api/v1/sessions/:id/projects/:index
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.sessions.with_session(session_id, |session| {
        session.remove_project(index)?;
        Ok(session.scratch.projects.clone())
    })?;
    Ok(Json(projects))
}

/// POST /api/v1/sessions/:id/experiences
pub async fn handle_add_work_experience(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddWorkExperienceRequest>,
) -> Result<Json<Vec<WorkExperience>>, AppError> {
    let entries = state.sessions.with_session(session_id, |session| {
        session.add_work_experience(request)?;
        Ok(session.scratch.work_experiences.clone())
    })?;
    Ok(Json(entries))
}

/// DELETE /api/v1/sessions/:id/experiences/:index
pub async fn handle_remove_work_experience(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Vec<WorkExperience>>, AppError> {
    let entries = state.sessions.with_session(session_id, |session| {
        session.remove_work_experience(index)?;
        Ok(session.scratch.work_experiences.clone())
    })?;
    Ok(Json(entries))
}

// ────────────────────────────────────────────────────────────────────────────
// Text generation
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/generate
///
/// Drafts summary / project / work copy via the generation backend. The
/// returned text is also staged as the corresponding draft, but only on
/// success, so a backend failure never clobbers existing text.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let (step, stored_jd) = state
        .sessions
        .read_session(session_id, |s| (s.step, s.scratch.job_description.clone()))?;

    let prompt = build_prompt(&request, step, &stored_jd)?;
    let text = state.llm.generate(&prompt).await?;

    state.sessions.with_session(session_id, |session| {
        stage_draft(session, &request, &text);
        Ok(())
    })?;

    Ok(Json(GenerateResponse { text }))
}

/// Stages a generated draft into the scratch of the step it belongs to.
/// The user may have navigated away while the backend call was in flight,
/// so the step is re-checked here; a stale draft is returned to the caller
/// but never staged onto a step the session has left.
fn stage_draft(session: &mut WizardSession, request: &GenerateRequest, text: &str) {
    if session.step != target_step(request) {
        tracing::warn!(
            "session {} moved to '{}' during generation, draft not staged",
            session.id,
            session.step.label()
        );
        return;
    }
    match request {
        GenerateRequest::Summary {
            job_description,
            job_profile,
        } => {
            session.scratch.job_description = job_description.clone();
            session.scratch.job_profile = job_profile.clone();
            session.scratch.summary = text.to_string();
        }
        GenerateRequest::Project { .. } => {
            session.scratch.project_summary_draft = text.to_string();
        }
        GenerateRequest::Work { .. } => {
            session.scratch.work_summary_draft = text.to_string();
        }
    }
}

fn target_step(request: &GenerateRequest) -> WizardStep {
    match request {
        GenerateRequest::Summary { .. } => WizardStep::SummarySkills,
        GenerateRequest::Project { .. } | GenerateRequest::Work { .. } => WizardStep::Experience,
    }
}

fn build_prompt(
    request: &GenerateRequest,
    step: WizardStep,
    stored_jd: &str,
) -> Result<String, AppError> {
    require_step(step, target_step(request))?;
    match request {
        GenerateRequest::Summary {
            job_description,
            job_profile,
        } => {
            if job_description.trim().is_empty() || job_profile.trim().is_empty() {
                return Err(AppError::Validation(
                    "Please provide both job description and job profile.".into(),
                ));
            }
            Ok(prompts::summary_prompt(job_description, job_profile))
        }
        GenerateRequest::Project {
            project_name,
            tools_used,
            description,
        } => {
            if project_name.trim().is_empty()
                || tools_used.trim().is_empty()
                || description.trim().is_empty()
            {
                return Err(AppError::Validation(
                    "Please fill in all fields to generate the project summary.".into(),
                ));
            }
            let jd = Some(stored_jd).filter(|jd| !jd.trim().is_empty());
            Ok(prompts::project_prompt(
                project_name,
                tools_used,
                description,
                jd,
            ))
        }
        GenerateRequest::Work {
            role_description,
            key_achievements,
            skills_expertise,
            impact,
        } => {
            if role_description.trim().is_empty() {
                return Err(AppError::Validation(
                    "Please provide a role description to generate the work summary.".into(),
                ));
            }
            Ok(prompts::work_prompt(
                role_description,
                key_achievements,
                skills_expertise,
                impact,
            ))
        }
    }
}

fn require_step(current: WizardStep, expected: WizardStep) -> Result<(), AppError> {
    if current != expected {
        return Err(AppError::Validation(format!(
            "this action belongs to the '{}' step (currently on '{}')",
            expected.label(),
            current.label()
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Export
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/export
///
/// Converts the stored document to PDF and streams it back as
/// `resume.pdf`. Any backend failure is reported and leaves the session
/// exactly as it was; the user re-invokes export manually.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (html, style) = state.sessions.with_session(session_id, |session| {
        if session.step != WizardStep::Export {
            return Err(AppError::Validation(
                "export is only available on the final step".into(),
            ));
        }
        if session.data.rendered_html.is_empty() {
            return Err(AppError::Validation(
                "nothing to export yet; complete the previous steps first".into(),
            ));
        }
        Ok((session.data.rendered_html.clone(), session.data.style))
    })?;

    let bytes = state.pdf.export(&html, &style).await?;
    tracing::info!(
        "exported session {} as {} ({} bytes)",
        session_id,
        PDF_FILE_NAME,
        bytes.len()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{PDF_FILE_NAME}\""),
        ),
    ];
    Ok((headers, bytes))
}
