//! The resume aggregate and its typed constituents.
//!
//! One `ResumeData` is owned by a wizard session for its whole lifetime:
//! created with defaults at session start, filled in step by step, dropped
//! with the session. Nothing here touches storage.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `#RRGGBB` color, carried as a real triple so bad input fails at the
/// API boundary instead of leaking into the generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{s}' must start with '#'"))?;
        // Length is in bytes, so non-ASCII input must be rejected before
        // slicing digit pairs.
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("color '{s}' must be #RRGGBB"));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("color '{s}' must be #RRGGBB"))
        };
        Ok(Rgb {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    Helvetica,
    Arial,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Courier,
}

impl FontFamily {
    /// The name as it appears in an inline `font-family` attribute.
    pub fn css_name(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Courier => "Courier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutType {
    Modern,
    Classic,
    Minimalist,
    Creative,
}

impl LayoutType {
    /// Modern and Creative center the header and flow skills two per row;
    /// Classic and Minimalist keep everything left-aligned, one per line.
    pub fn is_centered(&self) -> bool {
        matches!(self, LayoutType::Modern | LayoutType::Creative)
    }

    /// Header font sizes in px: (name, job title).
    pub fn header_sizes(&self) -> (u8, u8) {
        match self {
            LayoutType::Modern => (32, 20),
            LayoutType::Classic => (28, 18),
            LayoutType::Minimalist => (30, 16),
            LayoutType::Creative => (34, 22),
        }
    }
}

/// Step-1 output: colors, font and layout applied to every later preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub theme_color: Rgb,
    pub text_color: Rgb,
    pub font_family: FontFamily,
    pub layout_type: LayoutType,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            theme_color: Rgb::WHITE,
            text_color: Rgb::BLACK,
            font_family: FontFamily::Helvetica,
            layout_type: LayoutType::Modern,
        }
    }
}

/// Step-2 output. Empty string means "not filled in yet"; renderers
/// substitute bracketed placeholders rather than dropping the element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub phone: String,
    pub email: String,
}

impl PersonalInfo {
    /// "First Last" with surrounding whitespace collapsed, or None if both
    /// parts are empty.
    pub fn full_name(&self) -> Option<String> {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 1..=5, enforced when the skill is added.
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_name: String,
    pub tools_used: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company_name: String,
    pub location: String,
    pub start_date: NaiveDate,
    /// None while still employed there; rendered as "Present".
    pub end_date: Option<NaiveDate>,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceKind {
    #[default]
    Fresher,
    Experienced,
}

/// Borrowed view selecting the authoritative experience list.
///
/// Both lists stay in the aggregate so toggling the kind never loses data,
/// but render and export sites must match on this union so exactly one of
/// the two ever reaches the output.
#[derive(Debug, Clone, Copy)]
pub enum ExperienceSection<'a> {
    Fresher(&'a [Project]),
    Experienced(&'a [WorkExperience]),
}

/// The single aggregate accumulating all resume content across wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub style: StyleConfig,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub skills: Vec<Skill>,
    pub experience_kind: ExperienceKind,
    pub projects: Vec<Project>,
    pub work_experiences: Vec<WorkExperience>,
    /// Assembled document, produced when leaving the Experience step and
    /// reused verbatim by the export step.
    pub rendered_html: String,
}

impl ResumeData {
    pub fn experience_section(&self) -> ExperienceSection<'_> {
        match self.experience_kind {
            ExperienceKind::Fresher => ExperienceSection::Fresher(&self.projects),
            ExperienceKind::Experienced => ExperienceSection::Experienced(&self.work_experiences),
        }
    }
}
