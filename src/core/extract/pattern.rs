use anyhow::{Context, Result};
use regex::Regex;

/// Matches translation calls such as `L:G("Bag")` or `L:G('Bag')`.
///
/// The marker is matched literally; the captured group is the raw text
/// between the quotes, exactly as written in the source file.
#[derive(Debug, Clone)]
pub struct TermPattern {
    regex: Regex,
}

impl TermPattern {
    pub fn new(call_marker: &str) -> Result<Self> {
        let source = format!(r#"{}\(["'](.+?)["']\)"#, regex::escape(call_marker));
        let regex = Regex::new(&source)
            .with_context(|| format!("Invalid call marker: \"{}\"", call_marker))?;
        Ok(Self { regex })
    }

    /// Collect every captured term in match order, duplicates included.
    pub fn find_terms(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
