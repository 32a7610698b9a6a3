use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

static UNKNOWN_REPO: &str = "Repositorio desconocido";

#[derive(Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(from = "RawEvent")]
pub struct Event {
    pub activity: Activity,
    pub repo: Option<Repo>,
}

#[derive(Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct Repo {
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub name: Option<String>,
}

/// What an event did, keyed by its `type` tag. Each variant keeps only the
/// payload fields needed to describe it.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Activity {
    Push { commits: usize },
    Create { ref_type: Option<String> },
    Issues { action: Option<String> },
    PullRequest { action: Option<String> },
    Watch,
    Other(String),
}

#[derive(Deserialize)]
struct RawEvent {
    r#type: String,
    repo: Option<Repo>,
    payload: Option<Map<String, Value>>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let payload = raw.payload.unwrap_or_default();

        Self {
            activity: Activity::new(raw.r#type, &payload),
            repo: raw.repo,
        }
    }
}

impl Event {
    /// The placeholder stands in only for a missing `repo`; a repo without
    /// a name renders as `null`.
    pub fn repo_name(&self) -> &str {
        match &self.repo {
            Some(repo) => or_null(&repo.name),
            None => UNKNOWN_REPO,
        }
    }

    /// `None` when the event kind is not one we describe.
    pub fn line(&self) -> Option<String> {
        let description = self.activity.describe();
        if description.is_empty() {
            return None;
        }

        Some(format!("  - {} en {}", description, self.repo_name()))
    }
}

impl Activity {
    pub fn new(kind: String, payload: &Map<String, Value>) -> Self {
        match kind.as_str() {
            "PushEvent" => Activity::Push {
                commits: payload
                    .get("commits")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len),
            },
            "CreateEvent" => Activity::Create {
                ref_type: string_field(payload, "ref_type"),
            },
            "IssuesEvent" => Activity::Issues {
                action: string_field(payload, "action"),
            },
            "PullRequestEvent" => Activity::PullRequest {
                action: string_field(payload, "action"),
            },
            "WatchEvent" => Activity::Watch,
            _ => Activity::Other(kind),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Activity::Push { .. } => "PushEvent",
            Activity::Create { .. } => "CreateEvent",
            Activity::Issues { .. } => "IssuesEvent",
            Activity::PullRequest { .. } => "PullRequestEvent",
            Activity::Watch => "WatchEvent",
            Activity::Other(kind) => kind.as_str(),
        }
    }

    /// Empty for kinds that are not reported.
    pub fn describe(&self) -> String {
        match self {
            Activity::Push { commits } => format!("Pushed {} commits", commits),
            Activity::Create { ref_type } => {
                format!("Created a new {}", or_null(ref_type))
            }
            Activity::Issues { action } => {
                format!("Opened a new issue (Action: {})", or_null(action))
            }
            Activity::PullRequest { action } => {
                format!("A pull request was {}", or_null(action))
            }
            Activity::Watch => "Starred (Watched)".to_string(),
            Activity::Other(_) => String::new(),
        }
    }
}

fn string_field(payload: &Map<String, Value>, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Scalars are kept as text; arrays, objects and null become `None`.
fn deserialize_scalar<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(de).map(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}
