use adamx_core::Settings;
use console::style;

const BANNER: &str = r"
   _    ____    _    __  __      __  __
  /_\  |  _ \  / \  |  \/  |    / /  \ \
 //_\\ | | | |/ _ \ | |\/| |   | |    | |
/  _  \| |_| / ___ \| |  | |   | |    | |
\_/ \_/|____/_/   \_\_|  |_|    \_\  /_/

Your Terminal Coding Companion - v0.1.0
";

pub fn print_welcome(settings: &Settings) {
    println!("{}", style(BANNER).cyan().bold());
    println!(
        "Hello {}! I'm adamx, your coding companion.",
        style(&settings.user_name).white().bold()
    );
    println!("Type 'help' to see available commands or 'exit' to quit.");
}

pub fn print_help() {
    println!("\nadamx Commands:");
    println!("  help                  - Show this help message");
    println!("  create <filename>     - Create a new file");
    println!("  explain <code>        - Explain what code does");
    println!("  optimize <code>       - Suggest optimizations for code");
    println!("  search <query>        - Search documentation");
    println!("  debug <code>          - Debug code and suggest fixes");
    println!("  projects              - List your projects");
    println!("  project <name>        - Switch to or create a project");
    println!("  snippet <name> <code> - Save a code snippet");
    println!("  use <name>            - Use a saved snippet");
    println!("  exit                  - Quit adamx");
    println!("\nYou can also just describe what you want to do in natural language.");
}
