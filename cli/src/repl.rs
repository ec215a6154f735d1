use crate::banner;
use adamx_core::{
    Action, CannedResponder, Command, ConfigStore, Error, ResponseProvider, Settings, parse,
    projects, scaffold, snippets,
};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const EXPLAIN_USAGE: &str = "explain <code>";
const OPTIMIZE_USAGE: &str = "optimize <code>";
const SEARCH_USAGE: &str = "search <query>";
const DEBUG_USAGE: &str = "debug <code>";

/// The read-eval loop. Owns the settings document for the whole session and
/// persists through the store after every mutation; one bad command never
/// kills the session.
pub struct Repl {
    store: ConfigStore,
    settings: Settings,
    responder: Box<dyn ResponseProvider>,
    history: Vec<String>,
}

impl Repl {
    pub fn new(store: ConfigStore, settings: Settings) -> Self {
        Self {
            store,
            settings,
            responder: Box::new(CannedResponder::new()),
            history: Vec::new(),
        }
    }

    /// Blocks until `exit`/`quit` or end of input. Ctrl-C prints a hint and
    /// keeps the session alive.
    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;

        loop {
            match editor.readline("\n> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    self.history.push(line.to_string());
                    let _ = editor.add_history_entry(line);

                    match parse(line) {
                        Command::Exit => {
                            println!("Goodbye! Happy coding!");
                            break;
                        }
                        command => {
                            if let Err(e) = self.dispatch(command) {
                                eprintln!("{} {}", style("Error:").red().bold(), e);
                            }
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Use 'exit' to quit adamx.");
                }
                Err(ReadlineError::Eof) => {
                    println!("Goodbye! Happy coding!");
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Help => banner::print_help(),
            Command::Create { filename } => {
                let message = scaffold::create_file(&filename, &self.settings)?;
                println!("{}", message);
            }
            Command::Explain { code } => {
                require(&code, "Please provide code to explain.", EXPLAIN_USAGE)?;
                println!("\nCode Explanation:");
                println!(
                    "This code appears to {}",
                    self.respond(Action::Explain, &code)
                );
            }
            Command::Optimize { code } => {
                require(&code, "Please provide code to optimize.", OPTIMIZE_USAGE)?;
                println!("\nOptimization Suggestions:");
                println!("{}", self.respond(Action::Optimize, &code));
            }
            Command::Search { query } => {
                require(&query, "Please provide a search query.", SEARCH_USAGE)?;
                println!("\nSearch results for '{}':", query);
                println!("{}", self.respond(Action::Search, &query));
            }
            Command::Debug { code } => {
                require(&code, "Please provide code to debug.", DEBUG_USAGE)?;
                println!("\nDebugging Results:");
                println!("{}", self.respond(Action::Debug, &code));
            }
            Command::Projects => match projects::list(&self.settings) {
                None => println!("No projects found. Create one with 'project <name>'."),
                Some(entries) => {
                    println!("\nYour Projects:");
                    for entry in entries {
                        let current = if entry.is_current { " (current)" } else { "" };
                        println!("- {}: {}{}", entry.name, entry.path.display(), current);
                    }
                }
            },
            Command::Project { name } => self.switch_project(&name)?,
            Command::Snippet { name, body } => {
                snippets::save(&self.store, &mut self.settings, &name, &body)?;
                println!("Saved snippet: {}", name.trim());
            }
            Command::Use { name } => {
                let body = snippets::get(&self.settings, &name)?;
                println!("\nSnippet '{}':", name.trim());
                println!("{}", body);
            }
            Command::Generate { prompt } => {
                if prompt.is_empty() {
                    return Ok(());
                }
                println!("\nGenerating code based on your description...");
                println!("{}", self.respond(Action::Generate, &prompt));
            }
            // Exit terminates the loop before dispatch is reached.
            Command::Exit => {}
        }

        Ok(())
    }

    /// `project <name>`: switch when the name is registered, otherwise prompt
    /// for a path (blank defaults to `cwd/name`) and create it.
    fn switch_project(&mut self, name: &str) -> Result<()> {
        if projects::switch_to(&self.store, &mut self.settings, name)? {
            println!("Switched to project: {}", name.trim());
            return Ok(());
        }

        let raw_path: String = Input::new()
            .with_prompt(format!("Enter path for new project '{}'", name.trim()))
            .allow_empty(true)
            .interact_text()?;

        let cwd = std::env::current_dir()?;
        projects::create(&self.store, &mut self.settings, name, &raw_path, &cwd)?;
        println!("Created and switched to project: {}", name.trim());
        Ok(())
    }

    fn respond(&self, action: Action, input: &str) -> String {
        self.responder
            .respond(action, input, self.settings.preferences.preferred_language)
    }
}

fn require(arg: &str, message: &str, usage: &'static str) -> Result<()> {
    if arg.trim().is_empty() {
        return Err(Error::validation(message, usage).into());
    }
    Ok(())
}
