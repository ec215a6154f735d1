use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of languages adamx knows how to template and talk about.
/// Each carries a file extension and a line-comment prefix; only python and
/// the javascript family carry a boilerplate body (deliberate minimal-template
/// policy — every other language gets a header-only scaffold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Typescript,
    Java,
    C,
    Cpp,
    Rust,
    Go,
    Ruby,
    Php,
    Shell,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::Python,
        Language::Javascript,
        Language::Typescript,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::Rust,
        Language::Go,
        Language::Ruby,
        Language::Php,
        Language::Shell,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Shell => "shell",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::Javascript => "js",
            Language::Typescript => "ts",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Rust => "rs",
            Language::Go => "go",
            Language::Ruby => "rb",
            Language::Php => "php",
            Language::Shell => "sh",
        }
    }

    pub fn comment_prefix(&self) -> &'static str {
        match self {
            Language::Python | Language::Ruby | Language::Shell => "# ",
            _ => "// ",
        }
    }

    /// Hello-world skeleton written below the scaffold header, where one is
    /// defined.
    pub fn boilerplate(&self) -> Option<&'static str> {
        match self {
            Language::Python => Some(PYTHON_BOILERPLATE),
            Language::Javascript | Language::Typescript => Some(JAVASCRIPT_BOILERPLATE),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.extension() == ext)
    }

    /// Case-insensitive substring scan of `text` against language names, in
    /// declaration order ("javascript" wins over "java" for inputs naming
    /// both spellings).
    pub fn mentioned_in(text: &str) -> Option<Language> {
        let lowered = text.to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|l| lowered.contains(l.name()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.name() == lowered)
            .ok_or_else(|| format!("unknown language: {}", s))
    }
}

const PYTHON_BOILERPLATE: &str = r#""""Main module."""

def main():
    """Main function."""
    print("Hello, World!")

if __name__ == "__main__":
    main()
"#;

const JAVASCRIPT_BOILERPLATE: &str = r#"/**
 * Main module
 */

function main() {
    console.log("Hello, World!");
}

main();
"#;
