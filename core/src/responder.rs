use crate::languages::Language;
use std::fmt;
use std::time::Duration;

/// Default pause before a canned answer comes back, so the tool reads as
/// "thinking" rather than echoing. A UX contract, not a timing algorithm.
pub const THINKING_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Explain,
    Optimize,
    Search,
    Debug,
    Generate,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Explain => "explain",
            Action::Optimize => "optimize",
            Action::Search => "search",
            Action::Debug => "debug",
            Action::Generate => "generate",
        };
        f.write_str(name)
    }
}

/// The seam a real inference backend would plug into. `CannedResponder` is
/// the only implementation today; the REPL never looks behind the trait.
pub trait ResponseProvider {
    fn respond(&self, action: Action, input: &str, preferred: Language) -> String;
}

/// Simulated responses: one fixed template per action, plus a per-language
/// variant for `Generate`. No analysis of the input happens here.
pub struct CannedResponder {
    delay: Duration,
}

impl CannedResponder {
    pub fn new() -> Self {
        Self {
            delay: THINKING_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseProvider for CannedResponder {
    fn respond(&self, action: Action, input: &str, preferred: Language) -> String {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        match action {
            Action::Explain => EXPLAIN_TEMPLATE.to_string(),
            Action::Optimize => OPTIMIZE_TEMPLATE.to_string(),
            Action::Search => SEARCH_TEMPLATE.to_string(),
            Action::Debug => DEBUG_TEMPLATE.to_string(),
            Action::Generate => {
                let language = Language::mentioned_in(input).unwrap_or(preferred);
                if language == Language::Python {
                    GENERATE_PYTHON_TEMPLATE.to_string()
                } else {
                    GENERATE_JAVASCRIPT_TEMPLATE.to_string()
                }
            }
        }
    }
}

const EXPLAIN_TEMPLATE: &str = "processes data by iterating through a collection, \
applying transformations, and returning the results. \
It uses standard control flow patterns and seems to handle \
edge cases appropriately.";

const OPTIMIZE_TEMPLATE: &str = "\
1. Consider using list comprehension instead of the explicit for loop
2. The nested conditional statements could be simplified
3. There's a potential memory leak in the resource handling
4. For large inputs, consider processing in batches";

const SEARCH_TEMPLATE: &str = "\
Found several relevant documentation pages:
- Official API reference for the requested function
- Community tutorial with practical examples
- Stack Overflow thread addressing common issues";

const DEBUG_TEMPLATE: &str = "\
I found a few potential issues:
1. Missing variable initialization on line 3
2. Potential off-by-one error in the loop condition
3. Exception handling is too broad, consider catching specific exceptions
4. The function might return None implicitly in some cases";

const GENERATE_PYTHON_TEMPLATE: &str = r#"```python
def process_data(items):
    """
    Process a collection of items and return transformed results.

    Args:
        items: Iterable of items to process

    Returns:
        List of processed items
    """
    results = []
    for item in items:
        if not item:
            continue

        # Transform the item based on its properties
        processed = transform_item(item)
        results.append(processed)

    return results

def transform_item(item):
    """
    Apply transformations to a single item.
    """
    # Example transformation
    if isinstance(item, dict):
        return {k: v.upper() if isinstance(v, str) else v
                for k, v in item.items()}
    elif isinstance(item, str):
        return item.upper()
    else:
        return item
```"#;

const GENERATE_JAVASCRIPT_TEMPLATE: &str = r#"```javascript
/**
 * Process a collection of items and return transformed results.
 * @param {Array} items - Items to process
 * @returns {Array} - Processed items
 */
function processData(items) {
    const results = [];

    for (const item of items) {
        if (!item) {
            continue;
        }

        // Transform the item based on its properties
        const processed = transformItem(item);
        results.push(processed);
    }

    return results;
}

/**
 * Apply transformations to a single item.
 * @param {any} item - Item to transform
 * @returns {any} - Transformed item
 */
function transformItem(item) {
    // Example transformation
    if (typeof item === 'object' && item !== null) {
        const result = {};
        for (const [key, value] of Object.entries(item)) {
            result[key] = typeof value === 'string' ? value.toUpperCase() : value;
        }
        return result;
    } else if (typeof item === 'string') {
        return item.toUpperCase();
    } else {
        return item;
    }
}
```"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn responder() -> CannedResponder {
        CannedResponder::new().with_delay(Duration::ZERO)
    }

    #[test]
    fn responses_are_deterministic() {
        let r = responder();
        for action in [
            Action::Explain,
            Action::Optimize,
            Action::Search,
            Action::Debug,
            Action::Generate,
        ] {
            let a = r.respond(action, "some input", Language::Python);
            let b = r.respond(action, "some input", Language::Python);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn responses_are_action_keyed_not_input_derived() {
        let r = responder();
        assert_eq!(
            r.respond(Action::Explain, "foo", Language::Python),
            r.respond(Action::Explain, "completely different", Language::Rust),
        );
    }

    #[test]
    fn generate_uses_language_mentioned_in_input() {
        let r = responder();
        let out = r.respond(Action::Generate, "a python sort function", Language::Go);
        assert!(out.starts_with("```python"));
    }

    #[test]
    fn generate_falls_back_to_preferred_language() {
        let r = responder();
        let out = r.respond(Action::Generate, "please sort this list", Language::Python);
        assert!(out.starts_with("```python"));
    }

    #[test]
    fn generate_non_python_uses_javascript_variant() {
        let r = responder();
        let out = r.respond(Action::Generate, "please sort this list", Language::Rust);
        assert!(out.starts_with("```javascript"));
    }

    #[test]
    fn thinking_delay_is_bounded_not_exact() {
        let r = CannedResponder::new().with_delay(Duration::from_millis(10));
        let start = Instant::now();
        r.respond(Action::Explain, "x", Language::Python);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(10));
        assert!(elapsed < Duration::from_secs(5));
    }
}
