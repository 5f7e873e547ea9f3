use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// The database could not parse the command text
    #[error("{0}")]
    Document(String),

    /// The database accepted the command but failed to run it
    #[error("{0}")]
    Command(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// What the database answered to an `aggregate` command.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommandReply {
    #[serde(deserialize_with = "ok_flag")]
    pub ok: bool,
    #[serde(default)]
    pub result: Vec<Value>,
}

impl CommandReply {
    pub fn success(result: Vec<Value>) -> Self {
        Self { ok: true, result }
    }

    pub fn failure() -> Self {
        Self { ok: false, result: vec![] }
    }

    pub fn from_json_str(text: &str) -> Result<Self, ExecutionError> {
        Ok(serde_json::from_str(text)?)
    }
}

// servers answer `ok: 1.0`, test doubles often `ok: true`
fn ok_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(ok) => ok,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

/// Sends one command to a database and waits for the reply.
///
/// Implementations own the connection; the executor makes exactly one call
/// per query and never retries.
pub trait CommandRunner {
    fn run_command(&self, database: &str, command: &str) -> Result<CommandReply, ExecutionError>;
}

impl<F> CommandRunner for F
where
    F: Fn(&str, &str) -> Result<CommandReply, ExecutionError>,
{
    fn run_command(&self, database: &str, command: &str) -> Result<CommandReply, ExecutionError> {
        self(database, command)
    }
}
