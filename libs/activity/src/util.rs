use std::path::Path;

use toml::{map::Map, Value};

use crate::{response::IntoResponse, ActivityError};

/// Root of the cargo workspace this crate is built in.
#[cfg(test)]
pub fn workspace_dir() -> anyhow::Result<std::path::PathBuf> {
    use anyhow::Context;

    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = Path::new(
        std::str::from_utf8(&output)
            .context("failed to read cargo output")?
            .trim(),
    );

    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .context("failed to locate workspace root")
}

pub fn load_config(path: &Path) -> Result<Map<String, Value>, ActivityError> {
    let config = std::fs::read_to_string(path)
        .into_response(&format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&config)
        .into_response(&format!("failed to parse {}", path.display()))
}
