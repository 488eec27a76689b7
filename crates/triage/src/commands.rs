//! Slash commands maintainers can issue in comments.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A slash command recognised in a comment body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    /// Ask the issue author for a JSFiddle reproduction.
    JsFiddle,
}

impl SlashCommand {
    /// Every command, in the order they are tried.
    pub const ALL: &'static [SlashCommand] = &[SlashCommand::JsFiddle];

    /// The command word, without the leading slash.
    pub fn name(self) -> &'static str {
        match self {
            SlashCommand::JsFiddle => "jsfiddle",
        }
    }
}

impl fmt::Display for SlashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// Returns the command a comment body starts with, if any.
///
/// The body must begin with `/<command>` exactly; leading whitespace is not
/// skipped and anything after the command word is allowed. Comments that do
/// not start with a known command yield `None`.
pub fn parse_command(body: &str) -> Option<SlashCommand> {
    let rest = body.strip_prefix('/')?;
    SlashCommand::ALL
        .iter()
        .copied()
        .find(|command| rest.starts_with(command.name()))
}

// The first `@` and everything after it up to the end of its line.
static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[^\r\n]*").expect("mention pattern is valid"));

/// Extracts the addressed user from a comment body.
///
/// The match is greedy: it runs from the first `@` to the end of that line,
/// so `"/jsfiddle @octocat please"` yields `"@octocat please"`.
pub fn extract_mention(body: &str) -> Option<&str> {
    MENTION.find(body).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_at_start_of_body() {
        assert_eq!(parse_command("/jsfiddle"), Some(SlashCommand::JsFiddle));
        assert_eq!(
            parse_command("/jsfiddle @octocat please"),
            Some(SlashCommand::JsFiddle)
        );
    }

    #[test]
    fn ignores_unknown_or_misplaced_commands() {
        assert_eq!(parse_command("/codepen"), None);
        assert_eq!(parse_command(" /jsfiddle"), None);
        assert_eq!(parse_command("please /jsfiddle"), None);
        assert_eq!(parse_command("jsfiddle"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn mention_runs_to_end_of_line() {
        assert_eq!(
            extract_mention("/jsfiddle @octocat please\nthanks"),
            Some("@octocat please")
        );
        assert_eq!(extract_mention("/jsfiddle @a and @b"), Some("@a and @b"));
        assert_eq!(extract_mention("/jsfiddle\r\n@octocat"), Some("@octocat"));
    }

    #[test]
    fn lone_at_sign_is_still_a_mention() {
        assert_eq!(extract_mention("/jsfiddle @"), Some("@"));
    }

    #[test]
    fn no_mention_without_at_sign() {
        assert_eq!(extract_mention("/jsfiddle"), None);
    }

    #[test]
    fn display_includes_slash() {
        assert_eq!(SlashCommand::JsFiddle.to_string(), "/jsfiddle");
    }
}
