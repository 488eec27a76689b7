//! The issue template registry.
//!
//! Templates are recognised by literal markdown headings. The registry order
//! matters: when several titles appear in one body, the template listed last
//! wins (see [`crate::validation::validate_issue_body`]).

use serde::Serialize;

/// The kind of issue a template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Bug,
    Feature,
    Help,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TemplateKind::Bug => "bug",
            TemplateKind::Feature => "feature",
            TemplateKind::Help => "help",
        };
        f.write_str(s)
    }
}

/// An issue template, identified by its title heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub kind: TemplateKind,
    /// Human-readable name used in comments, e.g. `"bug report"`.
    pub name: &'static str,
    /// Heading whose presence marks the template as used.
    pub title: &'static str,
    /// Headings that must all be present once the template is used.
    pub required_sections: &'static [&'static str],
}

/// All issue templates, in matching order.
pub static ISSUE_TEMPLATES: &[Template] = &[
    Template {
        kind: TemplateKind::Bug,
        name: "bug report",
        title: "# Bug Report",
        required_sections: &["## Expected result", "## Actual result"],
    },
    Template {
        kind: TemplateKind::Feature,
        name: "feature request",
        title: "# Feature Request",
        required_sections: &["## Description", "## Example"],
    },
    Template {
        kind: TemplateKind::Help,
        name: "help wanted",
        title: "# Help Wanted",
        required_sections: &["## Problem"],
    },
];

/// Heading a pull request description must contain.
pub const PR_DESCRIPTION_SECTION: &str = "## Description";
