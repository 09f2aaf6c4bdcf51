//! Document assembler: the full themed resume fragment.
//!
//! This is the one string handed both to the preview surface and, later,
//! to the PDF backend. Export reuses the stored string rather than
//! re-assembling, so for a given aggregate the output must be
//! byte-identical on every call.

use crate::models::resume::{ExperienceSection, LayoutType, ResumeData};
use crate::render::experience::{render_experienced_work, render_fresher_projects};
use crate::render::html::{esc, Html};
use crate::render::skills::render_skills;

const NAME_PLACEHOLDER: &str = "[Your Name]";
const TITLE_PLACEHOLDER: &str = "[Your Job Title]";
const PHONE_PLACEHOLDER: &str = "[Your Phone]";
const EMAIL_PLACEHOLDER: &str = "[Your Email]";
const SUMMARY_PLACEHOLDER: &str = "[Your professional summary or career objective goes here.]";

/// Assembles header, summary, skills and the experience-kind-specific
/// section into one themed container.
pub fn assemble_document(data: &ResumeData) -> String {
    let style = &data.style;
    let layout = style.layout_type;
    let align = if layout.is_centered() { "center" } else { "left" };
    let (name_px, title_px) = layout.header_sizes();

    let name = data
        .personal_info
        .full_name()
        .map(|n| esc(&n))
        .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());
    let job_title = non_empty_or(&data.personal_info.job_title, TITLE_PLACEHOLDER);
    let phone = non_empty_or(&data.personal_info.phone, PHONE_PLACEHOLDER);
    let email = non_empty_or(&data.personal_info.email, EMAIL_PLACEHOLDER);
    let summary = non_empty_or(&data.summary, SUMMARY_PLACEHOLDER);

    let mut w = Html::new();
    w.push(&format!(
        "<div style=\"background-color: {}; color: {}; font-family: {}; \
         padding: 20px; border-radius: 10px;\">",
        style.theme_color,
        style.text_color,
        style.font_family.css_name()
    ));

    // Creative gets the heavier header treatment.
    let (h1_extra, h3_extra) = if layout == LayoutType::Creative {
        (" font-weight: bold;", " font-style: italic;")
    } else {
        ("", "")
    };
    w.push(&format!(
        "<h1 style=\"text-align: {align}; font-size: {name_px}px;{h1_extra}\">{name}</h1>"
    ));
    w.push(&format!(
        "<h3 style=\"text-align: {align}; font-size: {title_px}px;{h3_extra}\">{job_title}</h3>"
    ));

    w.push("<div style=\"display: flex; justify-content: space-between; margin-top: 20px;\">");
    w.push(&format!("<p style=\"text-align: left;\">Phone - {phone}</p>"));
    w.push(&format!("<p style=\"text-align: right;\">Email - {email}</p>"));
    w.push("</div>");

    w.push(&format!("<p>{summary}</p>"));

    w.push("<h3>Skills</h3>");
    w.push(&render_skills(&data.skills, layout));

    match data.experience_section() {
        ExperienceSection::Fresher(projects) => {
            w.push(&render_fresher_projects(projects, style));
        }
        ExperienceSection::Experienced(entries) => {
            w.push(&render_experienced_work(entries, style));
        }
    }

    w.push("</div>");
    w.finish()
}

fn non_empty_or(value: &str, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        esc(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceKind, Project, Skill};

    fn ada() -> ResumeData {
        let mut data = ResumeData::default();
        data.personal_info.first_name = "Ada".into();
        data.personal_info.last_name = "Lovelace".into();
        data.personal_info.job_title = "Engineer".into();
        data.summary = "Loves systems.".into();
        data.skills.push(Skill {
            name: "Rust".into(),
            rating: 5,
        });
        data.experience_kind = ExperienceKind::Fresher;
        data.projects.push(Project {
            project_name: "X".into(),
            tools_used: "Y".into(),
            description: "Z".into(),
        });
        data
    }

    #[test]
    fn test_full_document_scenario() {
        let html = assemble_document(&ada());
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("Loves systems."));
        assert!(html.contains("<h3>Skills</h3>"));
        assert_eq!(html.matches(crate::render::skills::STAR).count(), 5);
        assert!(html.contains("<h3>Projects</h3>"));
        assert!(html.contains(">X</h4>"));
        assert!(html.contains("<b>Tools Used:</b> Y"));
        assert!(html.contains("<p>Z</p>"));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let data = ada();
        assert_eq!(assemble_document(&data), assemble_document(&data));
    }

    #[test]
    fn test_placeholders_for_empty_aggregate() {
        let html = assemble_document(&ResumeData::default());
        assert!(html.contains("[Your Name]"));
        assert!(html.contains("[Your Job Title]"));
        assert!(html.contains("Phone - [Your Phone]"));
        assert!(html.contains("Email - [Your Email]"));
        assert!(html.contains("[Your professional summary or career objective goes here.]"));
        // Default kind is Fresher with no projects yet.
        assert!(html.contains("No projects to display."));
    }

    #[test]
    fn test_layout_alignment_and_sizes() {
        let mut data = ada();
        let modern = assemble_document(&data);
        assert!(modern.contains("text-align: center; font-size: 32px;"));

        data.style.layout_type = crate::models::resume::LayoutType::Classic;
        let classic = assemble_document(&data);
        assert!(classic.contains("text-align: left; font-size: 28px;"));

        data.style.layout_type = crate::models::resume::LayoutType::Creative;
        let creative = assemble_document(&data);
        assert!(creative.contains("font-weight: bold;"));
        assert!(creative.contains("font-style: italic;"));
    }

    #[test]
    fn test_style_attributes_applied() {
        let mut data = ada();
        data.style.theme_color = "#102030".parse().unwrap();
        data.style.text_color = "#ABCDEF".parse().unwrap();
        data.style.font_family = crate::models::resume::FontFamily::TimesNewRoman;
        let html = assemble_document(&data);
        assert!(html.contains("background-color: #102030;"));
        assert!(html.contains("color: #ABCDEF;"));
        assert!(html.contains("font-family: Times New Roman;"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = ResumeData::default();
        data.summary = "<img src=x>".into();
        let html = assemble_document(&data);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x&gt;"));
    }
}
