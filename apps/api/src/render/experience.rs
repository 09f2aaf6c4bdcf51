//! Project and work-experience block renderers.

use chrono::NaiveDate;

use crate::models::resume::{Project, StyleConfig, WorkExperience};
use crate::render::html::{esc, Html};
use crate::render::markdown::sanitize_markdown;

const DATE_FMT: &str = "%Y-%m-%d";

/// "Projects" section for the Fresher branch: one bordered block per
/// project. Empty list gets a placeholder paragraph instead of a heading.
pub fn render_fresher_projects(projects: &[Project], style: &StyleConfig) -> String {
    if projects.is_empty() {
        return "<p>No projects to display.</p>".to_string();
    }

    let mut w = Html::new();
    w.push("<h3>Projects</h3>");
    for project in projects {
        w.push(&format!(
            "<div style=\"margin-bottom: 15px; padding: 10px; \
             border: 1px solid {}; border-radius: 5px;\">",
            style.text_color
        ));
        w.push(&format!(
            "<h4 style=\"color: {}; font-family: {};\">",
            style.text_color,
            style.font_family.css_name()
        ));
        w.text(&project.project_name);
        w.push("</h4><p><b>Tools Used:</b> ");
        w.text(&project.tools_used);
        w.push("</p><p>");
        // Drafted descriptions carry bold markers and line breaks.
        w.push(&sanitize_markdown(&esc(&project.description)));
        w.push("</p></div>");
    }
    w.finish()
}

/// "Work Experience" section for the Experienced branch: one themed block
/// per entry with role, date range, company line and bulleted description.
pub fn render_experienced_work(entries: &[WorkExperience], style: &StyleConfig) -> String {
    if entries.is_empty() {
        return "<p>No work experiences to display.</p>".to_string();
    }

    let mut w = Html::new();
    w.push("<h3>Work Experience</h3>");
    for work in entries {
        w.push(&format!(
            "<div style=\"background-color: {}; color: {}; font-family: {}; \
             padding: 20px; border-radius: 10px; margin-bottom: 10px; text-align: left;\">",
            style.theme_color,
            style.text_color,
            style.font_family.css_name()
        ));
        w.push(
            "<div style=\"display: flex; justify-content: space-between; \
             align-items: center; margin-bottom: 5px;\"><div><b>",
        );
        w.text(&work.role);
        w.push("</b></div><div><span>");
        w.text(&date_range(work.start_date, work.end_date));
        w.push("</span></div></div><div><b>");
        w.text(&work.company_name);
        w.push("</b>, <span>");
        w.text(&work.location);
        w.push("</span></div><ul style=\"margin-top: 5px; padding-left: 20px;\">");
        for item in description_bullets(&work.description) {
            w.push("<li>");
            w.push(&item);
            w.push("</li>");
        }
        w.push("</ul></div>");
    }
    w.finish()
}

/// `start - end`, with "Present" standing in for an open end date.
pub fn date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = match end {
        Some(d) => d.format(DATE_FMT).to_string(),
        None => "Present".to_string(),
    };
    format!("{} - {}", start.format(DATE_FMT), end)
}

/// Sanitizes the description once, then splits on the produced line breaks;
/// each non-empty line becomes one list item (already markup-safe).
fn description_bullets(description: &str) -> Vec<String> {
    sanitize_markdown(&esc(description))
        .split("<br/>")
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> StyleConfig {
        StyleConfig::default()
    }

    fn work(end: Option<NaiveDate>) -> WorkExperience {
        WorkExperience {
            company_name: "ABC Corp".into(),
            location: "Kolkata".into(),
            start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            end_date: end,
            role: "Engineer".into(),
            description: "- **Built** the pipeline\n- Shipped it".into(),
        }
    }

    #[test]
    fn test_open_range_renders_present() {
        let html = render_experienced_work(&[work(None)], &style());
        assert!(html.contains("2021-03-01 - Present"));
    }

    #[test]
    fn test_closed_range_renders_both_dates() {
        let end = NaiveDate::from_ymd_opt(2023, 7, 15);
        let html = render_experienced_work(&[work(end)], &style());
        assert!(html.contains("2021-03-01 - 2023-07-15"));
    }

    #[test]
    fn test_description_lines_become_bullets() {
        let html = render_experienced_work(&[work(None)], &style());
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<li><b>Built</b> the pipeline</li>"));
        assert!(html.contains("<li>Shipped it</li>"));
    }

    #[test]
    fn test_empty_work_placeholder() {
        assert_eq!(
            render_experienced_work(&[], &style()),
            "<p>No work experiences to display.</p>"
        );
    }

    #[test]
    fn test_empty_projects_placeholder() {
        assert_eq!(
            render_fresher_projects(&[], &style()),
            "<p>No projects to display.</p>"
        );
    }

    #[test]
    fn test_project_block_fields() {
        let html = render_fresher_projects(
            &[Project {
                project_name: "X".into(),
                tools_used: "Y".into(),
                description: "Z".into(),
            }],
            &style(),
        );
        assert!(html.contains("<h3>Projects</h3>"));
        assert!(html.contains(">X</h4>"));
        assert!(html.contains("<b>Tools Used:</b> Y"));
        assert!(html.contains("<p>Z</p>"));
    }

    #[test]
    fn test_blank_description_lines_dropped() {
        assert_eq!(
            description_bullets("one\n\n  \ntwo"),
            vec!["one".to_string(), "two".to_string()]
        );
    }
}
