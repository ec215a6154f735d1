use crate::config::{ConfigStore, Settings};
use crate::error::{Error, Result};

const SNIPPET_USAGE: &str = "snippet <name> <code>";
const USE_USAGE: &str = "use <name>";

/// Inserts or overwrites a named snippet and persists. Last write wins; no
/// versioning.
pub fn save(store: &ConfigStore, settings: &mut Settings, name: &str, body: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() || body.trim().is_empty() {
        return Err(Error::validation(
            "Please provide both a name and code.",
            SNIPPET_USAGE,
        ));
    }

    settings
        .snippets
        .insert(name.to_string(), body.to_string());
    store.save(settings)?;

    tracing::debug!(snippet = name, "snippet saved");
    Ok(())
}

/// Looks up a snippet verbatim.
pub fn get<'a>(settings: &'a Settings, name: &str) -> Result<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation(
            "Please specify a snippet name.",
            USE_USAGE,
        ));
    }

    settings
        .snippets
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::SnippetNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(tmp: &TempDir) -> ConfigStore {
        ConfigStore::new(tmp.path().join("config.json"))
    }

    #[test]
    fn save_then_get_round_trips_exactly() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let mut settings = Settings::default();

        let body = "fn grüßen() {\n    println!(\"héllo\\nwörld\");\n}";
        save(&store, &mut settings, "greet", body).unwrap();
        assert_eq!(get(&settings, "greet").unwrap(), body);

        // And it survives a reload from disk.
        let (reloaded, _) = store.load().unwrap();
        assert_eq!(get(&reloaded, "greet").unwrap(), body);
    }

    #[test]
    fn same_name_overwrites() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let mut settings = Settings::default();

        save(&store, &mut settings, "greet", "print(\"hi\")").unwrap();
        save(&store, &mut settings, "greet", "print(\"hello\")").unwrap();
        assert_eq!(get(&settings, "greet").unwrap(), "print(\"hello\")");
        assert_eq!(settings.snippets.len(), 1);
    }

    #[test]
    fn absent_name_is_not_found() {
        let settings = Settings::default();
        let err = get(&settings, "missing").unwrap_err();
        assert!(matches!(err, Error::SnippetNotFound(name) if name == "missing"));
    }

    #[test]
    fn empty_name_or_body_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let mut settings = Settings::default();

        assert!(matches!(
            save(&store, &mut settings, "", "code").unwrap_err(),
            Error::Validation { .. }
        ));
        assert!(matches!(
            save(&store, &mut settings, "name", "  ").unwrap_err(),
            Error::Validation { .. }
        ));
        assert!(settings.snippets.is_empty());
        assert!(!store.path().exists());
    }
}
