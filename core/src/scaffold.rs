use crate::config::Settings;
use crate::error::{Error, Result};
use crate::languages::Language;
use std::path::Path;

const CREATE_USAGE: &str = "create <filename>";

/// Creates `filename` with a commented header and, for languages that define
/// one, a hello-world skeleton. The write truncates an existing file —
/// overwrite is the explicit policy, mirroring snippet saves.
pub fn create_file(filename: &str, settings: &Settings) -> Result<String> {
    let filename = filename.trim();
    if filename.is_empty() {
        return Err(Error::validation(
            "Please specify a filename.",
            CREATE_USAGE,
        ));
    }

    let path = Path::new(filename);
    let language = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .unwrap_or(settings.preferences.preferred_language);

    let content = render(language, &settings.user_name, &timestamp());

    std::fs::write(path, content).map_err(|e| Error::filesystem("create file", path, e))?;

    tracing::info!(file = filename, language = %language, "file scaffolded");
    Ok(format!("Created file: {}", filename))
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn render(language: Language, user_name: &str, timestamp: &str) -> String {
    let comment = language.comment_prefix();
    let mut content = format!(
        "{comment}Created by adamx on {timestamp}\n{comment}Author: {user_name}\n\n"
    );
    if let Some(body) = language.boilerplate() {
        content.push_str(body);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn python_file_gets_hash_header_and_skeleton() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("foo.py");
        let mut settings = Settings::default();
        settings.user_name = "ada".to_string();

        let msg = create_file(target.to_str().unwrap(), &settings).unwrap();
        assert!(msg.contains("foo.py"));

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("# Created by adamx on "));
        assert!(content.contains("# Author: ada\n"));
        assert!(content.contains("def main():"));
        assert!(content.contains("print(\"Hello, World!\")"));
    }

    #[test]
    fn javascript_file_gets_slash_header_and_skeleton() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("app.js");

        create_file(target.to_str().unwrap(), &Settings::default()).unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("// Created by adamx on "));
        assert!(content.contains("console.log(\"Hello, World!\");"));
    }

    #[test]
    fn unmapped_extension_falls_back_to_preferred_language() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("notes.txt");

        // preferred_language defaults to python
        create_file(target.to_str().unwrap(), &Settings::default()).unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("# Created by adamx on "));
        assert!(content.contains("def main():"));
    }

    #[test]
    fn header_only_language_writes_no_body() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("main.rs");

        create_file(target.to_str().unwrap(), &Settings::default()).unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("// Created by adamx on "));
        assert!(content.ends_with("\n\n"));
        assert!(!content.contains("fn main"));
    }

    #[test]
    fn existing_file_is_overwritten() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("foo.py");
        std::fs::write(&target, "old content").unwrap();

        create_file(target.to_str().unwrap(), &Settings::default()).unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(!content.contains("old content"));
    }

    #[test]
    fn empty_filename_is_rejected() {
        let err = create_file("   ", &Settings::default()).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn unwritable_path_reports_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("no_such_dir").join("foo.py");

        let err = create_file(target.to_str().unwrap(), &Settings::default()).unwrap_err();
        assert!(matches!(err, Error::Filesystem { .. }));
    }
}
