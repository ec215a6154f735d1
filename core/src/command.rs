//! The interactive verb grammar. Parsing is separate from execution so each
//! verb can be tested table-style and the REPL only matches on tagged
//! variants.

/// One parsed input line. Arguments are carried verbatim (trimmed at the
/// edges); emptiness is validated at execution time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Create { filename: String },
    Explain { code: String },
    Optimize { code: String },
    Search { query: String },
    Debug { code: String },
    Projects,
    Project { name: String },
    Snippet { name: String, body: String },
    Use { name: String },
    Exit,
    /// Anything that matches no verb: free-form text routed to `generate`.
    Generate { prompt: String },
}

/// Classifies one line against the fixed verb set, case-insensitively, first
/// match wins. Verbs that take an argument only match when followed by
/// whitespace; a bare `explain` is free-form text like anything else.
pub fn parse(line: &str) -> Command {
    let line = line.trim();

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, Some(rest.trim())),
        None => (line, None),
    };

    if rest.is_none() {
        if verb.eq_ignore_ascii_case("help") {
            return Command::Help;
        }
        if verb.eq_ignore_ascii_case("projects") {
            return Command::Projects;
        }
        if verb.eq_ignore_ascii_case("exit") || verb.eq_ignore_ascii_case("quit") {
            return Command::Exit;
        }
    }

    if let Some(arg) = rest {
        let arg = arg.to_string();
        if verb.eq_ignore_ascii_case("create") {
            return Command::Create { filename: arg };
        }
        if verb.eq_ignore_ascii_case("explain") {
            return Command::Explain { code: arg };
        }
        if verb.eq_ignore_ascii_case("optimize") {
            return Command::Optimize { code: arg };
        }
        if verb.eq_ignore_ascii_case("search") {
            return Command::Search { query: arg };
        }
        if verb.eq_ignore_ascii_case("debug") {
            return Command::Debug { code: arg };
        }
        if verb.eq_ignore_ascii_case("project") {
            return Command::Project { name: arg };
        }
        if verb.eq_ignore_ascii_case("snippet") {
            let (name, body) = match arg.split_once(char::is_whitespace) {
                Some((name, body)) => (name.to_string(), body.trim_start().to_string()),
                None => (arg, String::new()),
            };
            return Command::Snippet { name, body };
        }
        if verb.eq_ignore_ascii_case("use") {
            return Command::Use { name: arg };
        }
    }

    Command::Generate {
        prompt: line.to_string(),
    }
}
