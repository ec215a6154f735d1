pub mod command;
pub mod config;
pub mod error;
pub mod languages;
pub mod projects;
pub mod responder;
pub mod scaffold;
pub mod snippets;

pub use command::{Command, parse};
pub use config::{ConfigStore, LoadSource, Preferences, Settings, Theme};
pub use error::{Error, Result};
pub use languages::Language;
pub use projects::ProjectEntry;
pub use responder::{Action, CannedResponder, ResponseProvider, THINKING_DELAY};
