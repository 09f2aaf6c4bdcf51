//! Prompt builders for the three drafting actions.
//!
//! Outputs are plain natural-language instructions; the backend returns
//! unstructured text the user edits before committing. Bullet structure is
//! requested in the prompt itself, not enforced afterwards.

/// Step-3 summary draft: 3-4 lines about the candidate, anchored on the
/// pasted job description and one-line job profile.
pub fn summary_prompt(job_description: &str, job_profile: &str) -> String {
    format!(
        "Create a 3-4 line summary about myself for my resume, emphasizing my \
         personality, social skills, and interests outside of work based on the \
         following Job Description:\n{job_description}\n\n and Job Profile:\n{job_profile}"
    )
}

/// Step-4 (Fresher) project draft: three bullets in the
/// Objective / Tools / Outcome shape. The job description is interpolated
/// when the user supplied one on step 3 so the outcome can nod toward it.
pub fn project_prompt(
    project_name: &str,
    tools_used: &str,
    description: &str,
    job_description: Option<&str>,
) -> String {
    let jd = job_description.unwrap_or("(none provided)");
    format!(
        "Using the details provided below, create a concise project summary in \
         three bullet points with the following format:\n\
         **Objective:** Clearly state the project's goal or purpose.\n\
         **Tools/Technologies Used:** Mention the tools and technologies applied in the project.\n\
         **Outcome:** Summarize the key results or achievements, ensuring the outcome \
         indirectly aligns with or hints at the job description {jd}.\n\n\
         Details:\n\
         - Project Name: {project_name}\n\
         - Tools/Technologies Used: {tools_used}\n\
         - Description: {description}"
    )
}

/// Step-4 (Experienced) work draft: 3-4 polished bullets from the four
/// role detail fields.
pub fn work_prompt(
    role_description: &str,
    key_achievements: &str,
    skills_expertise: &str,
    impact: &str,
) -> String {
    format!(
        "Based on the following details, create a professional work experience \
         summary in 3 to 4 concise bullet points:\n\n\
         1. **Role Description:** {role_description}\n\
         2. **Key Achievements:** {key_achievements}\n\
         3. **Skills and Expertise:** {skills_expertise}\n\
         4. **Impact:** {impact}\n\n\
         Refine and present the information in a polished and professional manner, \
         suitable for a resume or LinkedIn profile."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_interpolates_both_inputs() {
        let p = summary_prompt("We need a Rust engineer.", "Backend engineer");
        assert!(p.contains("We need a Rust engineer."));
        assert!(p.contains("Backend engineer"));
        assert!(p.contains("3-4 line summary"));
    }

    #[test]
    fn test_project_prompt_includes_jd_when_present() {
        let p = project_prompt("X", "Y", "Z", Some("the JD"));
        assert!(p.contains("Project Name: X"));
        assert!(p.contains("Tools/Technologies Used: Y"));
        assert!(p.contains("Description: Z"));
        assert!(p.contains("the JD"));
    }

    #[test]
    fn test_project_prompt_without_jd() {
        let p = project_prompt("X", "Y", "Z", None);
        assert!(p.contains("(none provided)"));
    }

    #[test]
    fn test_work_prompt_lists_all_four_fields() {
        let p = work_prompt("built services", "cut costs", "Rust, SQL", "saved hours");
        assert!(p.contains("Role Description:** built services"));
        assert!(p.contains("Key Achievements:** cut costs"));
        assert!(p.contains("Skills and Expertise:** Rust, SQL"));
        assert!(p.contains("Impact:** saved hours"));
    }
}
