//! Canned comment bodies.
//!
//! Every function here is pure: it interpolates a GitHub handle (and, for
//! missing sections, the matched template) into fixed markdown. Handles are
//! inserted verbatim; they come from the platform and are not escaped.

use crate::templates::{Template, TemplateKind};
use crate::UserLogin;

const JSFIDDLE_URL: &str = "https://jsfiddle.net/31d6y7mn";

const BUG_REPORT_TEMPLATE: &str = r#"```markdown
# Bug Report

<!--
Title Format
  [Scope] Summary of what is broken
-->

## Steps to reproduce
1.
2.
3.

## Expected result <!-- Required -->

## Actual result <!-- Required -->

## Testcase
<!-- Fork https://jsfiddle.net/31d6y7mn -->

## Screenshot (when possible)
![]()

## Version
x.x.x
```"#;

const FEATURE_REQUEST_TEMPLATE: &str = r#"```markdown
# Feature Request

## Description <!-- Required -->
Explain what you want in great detail

## Example <!-- Required -->

## Testcase (when possible)
<!-- Fork https://jsfiddle.net/31d6y7mn -->

## Screenshot (when possible)
![]()
```"#;

const HELP_WANTED_TEMPLATE: &str = r#"```markdown
# Help Wanted

## Problem <!-- Required -->
Describe your problem in great detail
```"#;

const PULL_REQUEST_TEMPLATE: &str = r#"```markdown
<!--
  Please read the contributing guide before you submit a pull request
  https://github.com/fomantic/Fomantic-UI/blob/master/CONTRIBUTING.md
-->

## Description <!-- Required -->

## Testcase
<!-- Fork https://jsfiddle.net/31d6y7mn -->

## Screenshot (when possible)
![]()

## Closes
#222 #333 #444
```"#;

fn template_block(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Bug => BUG_REPORT_TEMPLATE,
        TemplateKind::Feature => FEATURE_REQUEST_TEMPLATE,
        TemplateKind::Help => HELP_WANTED_TEMPLATE,
    }
}

/// Asks the author of an issue to use one of the issue templates.
pub fn no_template_used(author: &UserLogin) -> String {
    format!(
        "Hi @{author} :wave:

I noticed your issue isn't using a template, we ask users to use our issue templates to help us triage and provide the best support we can.

<details>
<summary>Please edit your comment and use one of these templates</summary>

:bug: Bug Report
{BUG_REPORT_TEMPLATE}

:rocket: Feature Request
{FEATURE_REQUEST_TEMPLATE}

:notebook: Support Question
{HELP_WANTED_TEMPLATE}

</details>
"
    )
}

/// Tells the author which template they used and shows it again so they can
/// add the required sections they left out.
pub fn missing_template_sections(author: &UserLogin, template: &Template) -> String {
    format!(
        "Hi @{author} :wave:

It looks like you have used the {name} issue template however you have missed some required sections.

<details>
<summary>Please edit your comment and add any missing sections</summary>

{block}

</details>
",
        name = template.name,
        block = template_block(template.kind),
    )
}

/// Welcomes a first-time contributor.
pub fn new_member(author: &UserLogin) -> String {
    format!(
        "Hi @{author} :wave:

Welcome to Fomantic-UI :heart:

Please make sure you have read our [contributing guide](https://github.com/fomantic/Fomantic-UI/blob/master/CONTRIBUTING.md) and our [Code of Conduct](https://github.com/fomantic/Fomantic-UI/blob/master/CODE_OF_CONDUCT.md) and if you have any questions take a look at our [FAQ document](https://github.com/fomantic/Fomantic-UI/blob/master/FAQ.md).

If you're looking for support try joining our [Discord server](https://discord.gg/YChxjJ3) and ask the community.
"
    )
}

/// Asks the author of a pull request to add a description.
pub fn no_pr_description(author: &UserLogin) -> String {
    format!(
        "Hi @{author} :wave:

Looks like you haven't added a description to your pull request.

<details>
<summary>Please edit your pull request and use this template</summary>

{PULL_REQUEST_TEMPLATE}

</details>
"
    )
}

/// Asks for a JSFiddle reproduction on behalf of `requested_by`.
///
/// `mention` is the text addressed in the triggering comment (see
/// [`crate::commands::extract_mention`]); when present the message opens by
/// greeting it.
pub fn jsfiddle(requested_by: &UserLogin, mention: Option<&str>) -> String {
    let mut message = String::new();
    if let Some(mention) = mention {
        message.push_str(&format!("Hi {mention} :wave:\n\n"));
    }

    message.push_str(&format!(
        "@{requested_by} has asked you to create a [JSFiddle]({JSFIDDLE_URL}).

We ask users to create a [JSFiddle]({JSFIDDLE_URL}) because it helps us understand your issue in a reproducible environment so we can provide the best support.

<details>
<summary>How to use</summary>
<ul>
  <li>Open <a href=\"{JSFIDDLE_URL}\">JSFiddle</a></li>
  <li>Click <code>Fork</code> at the top</li>
  <li>Add your HTML, CSS and JavaScript and reproduce your issue</li>
  <li>Click <code>Save</code> at the top</li>
  <li>Copy your URL and post it as a comment :tada:</li>
</ul>
</details>
"
    ));

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::ISSUE_TEMPLATES;

    fn login(name: &str) -> UserLogin {
        UserLogin::new(name).unwrap()
    }

    #[test]
    fn no_template_used_lists_every_template() {
        let message = no_template_used(&login("octocat"));
        assert!(message.starts_with("Hi @octocat :wave:"));
        for template in ISSUE_TEMPLATES {
            assert!(message.contains(template.title), "missing {}", template.title);
        }
    }

    #[test]
    fn missing_sections_names_the_template_and_shows_its_block() {
        let bug = &ISSUE_TEMPLATES[0];
        let message = missing_template_sections(&login("octocat"), bug);
        assert!(message.contains("used the bug report issue template"));
        assert!(message.contains("## Actual result <!-- Required -->"));
        assert!(!message.contains("# Feature Request"));

        let help = &ISSUE_TEMPLATES[2];
        let message = missing_template_sections(&login("octocat"), help);
        assert!(message.contains("used the help wanted issue template"));
        assert!(message.contains("## Problem <!-- Required -->"));
    }

    #[test]
    fn new_member_greets_the_author() {
        let message = new_member(&login("newbie"));
        assert!(message.starts_with("Hi @newbie :wave:"));
        assert!(message.contains("CODE_OF_CONDUCT.md"));
    }

    #[test]
    fn no_pr_description_includes_the_pr_template() {
        let message = no_pr_description(&login("octocat"));
        assert!(message.contains("haven't added a description"));
        assert!(message.contains("## Description <!-- Required -->"));
        assert!(message.contains("</summary>"));
    }

    #[test]
    fn jsfiddle_prefix_depends_on_mention() {
        let with_mention = jsfiddle(&login("maintainer"), Some("@reporter"));
        assert!(with_mention.starts_with("Hi @reporter :wave:\n\n@maintainer has asked"));

        let without = jsfiddle(&login("maintainer"), None);
        assert!(without.starts_with("@maintainer has asked you to create"));
    }
}
