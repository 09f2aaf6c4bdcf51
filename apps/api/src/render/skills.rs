//! Skills block renderer.

use crate::models::resume::{LayoutType, Skill};
use crate::render::html::Html;

/// Star glyph used for ratings.
pub const STAR: &str = "⭐";

/// Renders the skills block for the given layout.
///
/// Modern and Creative flow skills two per row; the other layouts list one
/// skill per line. Either way a skill shows its name in bold, a star per
/// rating point, and the literal fraction `(rating/5)`.
pub fn render_skills(skills: &[Skill], layout: LayoutType) -> String {
    let mut w = Html::new();
    if layout.is_centered() {
        for row in skills.chunks(2) {
            w.push("<div style=\"display: flex; justify-content: space-between;\">");
            for skill in row {
                w.push("<div style=\"width: 48%;\">");
                push_skill(&mut w, skill);
                w.push("</div>");
            }
            w.push("</div>");
        }
    } else {
        for skill in skills {
            w.push("<p>");
            push_skill(&mut w, skill);
            w.push("</p>");
        }
    }
    w.finish()
}

fn push_skill(w: &mut Html, skill: &Skill) {
    w.push("<b>");
    w.text(&skill.name);
    w.push("</b><br>");
    for _ in 0..skill.rating {
        w.push(STAR);
    }
    w.push(&format!(" ({}/5)", skill.rating));
}
