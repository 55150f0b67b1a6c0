//! Loading project snapshots and options, writing exported files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use xamlkit_codegen::ExportedFile;
use xamlkit_core::Project;

/// Read a JSON project snapshot (`colors`, `textStyles`, `layers`).
pub fn load_project(path: &Path) -> Result<Project> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project {}", path.display()))?;
    let project: Project = serde_json::from_str(&content)
        .with_context(|| format!("Invalid project snapshot {}", path.display()))?;
    tracing::debug!(
        colors = project.colors.len(),
        text_styles = project.text_styles.len(),
        layers = project.layers.len(),
        "loaded project"
    );
    Ok(project)
}

/// Merge an optional JSON options file with `key=value` overrides.
///
/// Override values are always strings; boolean options accept `true` and
/// `false` spelled as strings, so `defaultFontFamily=true` stays a family
/// name.
pub fn load_options(path: Option<&Path>, overrides: &[String]) -> Result<Map<String, Value>> {
    let mut options = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read options {}", path.display()))?;
            match serde_json::from_str::<Value>(&content)
                .with_context(|| format!("Invalid options file {}", path.display()))?
            {
                Value::Object(map) => map,
                _ => bail!("Options file {} must contain a JSON object", path.display()),
            }
        }
        None => Map::new(),
    };

    for entry in overrides {
        let Some((key, raw)) = entry.split_once('=') else {
            bail!("Option '{}' is not of the form key=value", entry);
        };
        options.insert(key.trim().to_string(), Value::String(raw.to_string()));
    }

    Ok(options)
}

/// Write an exported file into `dir`, creating it if needed.
pub fn write_export(dir: &Path, file: &ExportedFile) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(&file.filename);
    fs::write(&path, &file.code)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
