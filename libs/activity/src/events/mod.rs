use std::io::Write;

use tracing::debug;

use crate::{response::IntoResponse, ActivityError};

pub use self::response::{Activity, Event, Repo};

mod response;

static HEADER: &str = "\n--- Actividad Reciente del Usuario ---\n";
static FOOTER: &str = "\n--------------------------------------";

pub fn parse(text: &str) -> Result<Vec<Event>, ActivityError> {
    serde_json::from_str::<Vec<Event>>(text)
        .into_response("failed to parse events")
}

/// One line per described event, in feed order.
pub fn render(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| {
            let line = event.line();
            if line.is_none() {
                debug!(task = "render events", kind = event.activity.kind());
            }
            line
        })
        .collect()
}

/// Parses the whole body before writing anything.
pub fn display<W: Write>(text: &str, out: &mut W) -> Result<(), ActivityError> {
    let events = parse(text)?;
    debug!(task = "render events", count = events.len());

    let lines = render(&events);

    writeln!(out, "{}", HEADER).into_response("failed to write header")?;
    for line in lines {
        writeln!(out, "{}", line).into_response("failed to write event")?;
    }
    writeln!(out, "{}", FOOTER).into_response("failed to write footer")?;

    Ok(())
}

#[cfg(test)]
mod test {
    use std::fs;

    use crate::{
        events::{display, parse, render, Activity},
        util::workspace_dir,
        ActivityError,
    };

    fn display_to_string(text: &str) -> (Result<(), ActivityError>, String) {
        let mut out = Vec::new();
        let result = display(text, &mut out);

        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_deserialize() {
        let dir = workspace_dir().unwrap();

        // Arrange
        let text = fs::read_to_string(
            dir.join("libs/activity/src/events/test.json"),
        );

        // Act
        let events = parse(&text.unwrap());

        // Assert
        let events = events.unwrap();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].activity, Activity::Push { commits: 2 });
        assert_eq!(events[0].repo_name(), "octocat/Hello-World");
    }

    #[test]
    fn test_render_fixture_in_feed_order() {
        let dir = workspace_dir().unwrap();
        let text =
            fs::read_to_string(dir.join("libs/activity/src/events/test.json"))
                .unwrap();

        let lines = render(&parse(&text).unwrap());

        assert_eq!(
            lines,
            vec![
                "  - Pushed 2 commits en octocat/Hello-World",
                "  - Created a new branch en octocat/Hello-World",
                "  - Opened a new issue (Action: opened) en octocat/Spoon-Knife",
                "  - A pull request was closed en octocat/Spoon-Knife",
                "  - Starred (Watched) en rust-lang/rust",
            ]
        );
    }

    #[test]
    fn test_display_watch_event() {
        // Arrange
        let text = r#"[{"type":"WatchEvent","repo":{"name":"octocat/Hello-World"},"payload":{}}]"#;

        // Act
        let (result, output) = display_to_string(text);

        // Assert
        assert!(result.is_ok());
        assert_eq!(
            output,
            "\n--- Actividad Reciente del Usuario ---\n\n  - Starred (Watched) en octocat/Hello-World\n\n--------------------------------------\n"
        );
    }

    #[test]
    fn test_display_push_event() {
        let text = r#"[{"type":"PushEvent","repo":{"name":"a/b"},"payload":{"commits":[1,2,3]}}]"#;

        let (result, output) = display_to_string(text);

        assert!(result.is_ok());
        assert!(output
            .lines()
            .any(|line| line == "  - Pushed 3 commits en a/b"));
    }

    #[test]
    fn test_display_skips_unknown_kinds() {
        let text = r#"[
            {"type":"ForkEvent","repo":{"name":"a/b"},"payload":{}},
            {"type":"GollumEvent","repo":{"name":"a/b"},"payload":{"pages":[]}}
        ]"#;

        let (result, output) = display_to_string(text);

        assert!(result.is_ok());
        assert!(!output.contains("  - "));
    }

    #[test]
    fn test_display_without_repo() {
        let text = r#"[{"type":"WatchEvent","payload":{}}]"#;

        let (result, output) = display_to_string(text);

        assert!(result.is_ok());
        assert!(output
            .contains("  - Starred (Watched) en Repositorio desconocido"));
    }

    #[test]
    fn test_display_tolerates_odd_repo_names() {
        let text = r#"[
            {"type":"WatchEvent","repo":{"name":123},"payload":{}},
            {"type":"WatchEvent","repo":{"id":1},"payload":{}}
        ]"#;

        let (result, output) = display_to_string(text);

        assert!(result.is_ok());
        let lines = output
            .lines()
            .filter(|line| line.starts_with("  - "))
            .collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "  - Starred (Watched) en 123",
                "  - Starred (Watched) en null",
            ]
        );
    }

    #[test]
    fn test_display_empty_feed() {
        let (result, output) = display_to_string("[]");

        assert!(result.is_ok());
        assert_eq!(output.lines().filter(|line| !line.is_empty()).count(), 2);
    }

    #[test]
    fn test_display_malformed_body() {
        for text in [
            r#"[{"type":"WatchEvent","repo":{"name":"a/b"}"#,
            r#"{"message":"Not Found"}"#,
            "not json",
        ] {
            let (result, output) = display_to_string(text);

            assert!(matches!(result, Err(ActivityError::Parse { .. })));
            assert!(output.is_empty());
        }
    }
}
