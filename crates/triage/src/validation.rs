//! Body validators for issues and pull requests.
//!
//! Matching is a case-sensitive, unanchored substring search for the literal
//! heading markers in [`crate::templates`]. The body is never parsed as
//! markdown; a marker inside a code block still counts.

use serde::Serialize;
use tracing::debug;

use crate::templates::{Template, ISSUE_TEMPLATES, PR_DESCRIPTION_SECTION};

/// Result of checking an issue body against the template registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// The last template whose title appears in the body.
    pub matched: Option<&'static Template>,
    /// `false` once any matched template is missing a required section.
    pub has_required_sections: bool,
    /// Every required section absent from the body, over all matched
    /// templates, in registry order.
    pub missing_sections: Vec<&'static str>,
}

/// Classifies an issue body against [`ISSUE_TEMPLATES`].
///
/// Templates are visited in registry order and each one whose title occurs in
/// the body overwrites the previous match, so the last matching template wins.
/// Required sections are checked for every matched template, and
/// `has_required_sections` never flips back to `true` once a section is
/// missing. A body with several titles can therefore report missing sections
/// that belong to an earlier template while naming a later one.
pub fn validate_issue_body(body: Option<&str>) -> ValidationOutcome {
    validate_against(ISSUE_TEMPLATES, body.unwrap_or_default())
}

fn validate_against(templates: &'static [Template], body: &str) -> ValidationOutcome {
    let mut outcome = ValidationOutcome {
        matched: None,
        has_required_sections: true,
        missing_sections: Vec::new(),
    };

    for template in templates {
        if !body.contains(template.title) {
            continue;
        }
        debug!(template = template.name, "Issue body uses template");
        outcome.matched = Some(template);

        for &section in template.required_sections {
            if !body.contains(section) {
                outcome.has_required_sections = false;
                outcome.missing_sections.push(section);
            }
        }
    }

    outcome
}

/// Returns `true` if a pull request body contains a description section.
pub fn has_pr_description(body: Option<&str>) -> bool {
    body.unwrap_or_default().contains(PR_DESCRIPTION_SECTION)
}
