use crate::config::{ConfigStore, Settings};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

const PROJECT_USAGE: &str = "project <name>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_current: bool,
}

/// Registered projects in name order, or `None` when the registry is empty
/// so the caller prints the explicit empty-state message instead of a silent
/// blank listing.
pub fn list(settings: &Settings) -> Option<Vec<ProjectEntry>> {
    if settings.projects.is_empty() {
        return None;
    }

    let entries = settings
        .projects
        .iter()
        .map(|(name, path)| ProjectEntry {
            name: name.clone(),
            path: path.clone(),
            is_current: settings.last_project.as_deref() == Some(name),
        })
        .collect();
    Some(entries)
}

/// Makes an already-registered project current and persists. Returns false
/// (untouched settings) when the name is unknown; the caller then prompts for
/// a path and calls [`create`].
pub fn switch_to(store: &ConfigStore, settings: &mut Settings, name: &str) -> Result<bool> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation(
            "Please specify a project name.",
            PROJECT_USAGE,
        ));
    }

    if !settings.projects.contains_key(name) {
        return Ok(false);
    }

    settings.last_project = Some(name.to_string());
    store.save(settings)?;
    Ok(true)
}

/// Registers a new project and makes it current. A blank `raw_path` defaults
/// to `cwd/name`. The directory is created on disk if missing; a creation
/// failure aborts before any settings mutation.
pub fn create(
    store: &ConfigStore,
    settings: &mut Settings,
    name: &str,
    raw_path: &str,
    cwd: &Path,
) -> Result<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation(
            "Please specify a project name.",
            PROJECT_USAGE,
        ));
    }

    let raw_path = raw_path.trim();
    let path = if raw_path.is_empty() {
        cwd.join(name)
    } else {
        PathBuf::from(raw_path)
    };

    if !path.exists() {
        std::fs::create_dir_all(&path)
            .map_err(|e| Error::filesystem("create directory", &path, e))?;
    }

    settings.projects.insert(name.to_string(), path.clone());
    settings.last_project = Some(name.to_string());
    store.save(settings)?;

    tracing::info!(project = name, path = %path.display(), "project created");
    Ok(path)
}
