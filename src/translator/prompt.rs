use std::fmt::Write;

use crate::config::Locale;

/// Build the system instruction sent with every batch.
///
/// The wording is fixed for a given domain and locale list so that repeated
/// runs with the same seed produce the same translations.
pub fn system_prompt(domain: &str, locales: &[Locale]) -> String {
    let mut prompt = format!(
        "You are a translation bot for {domain}. You translate the strings provided to you, \
one string per line, into the languages listed below. Translate every string within the context \
of {domain}, taking care to understand the nuance of its specific lingo. All inputs are in American English.\n\
Be consistent: the same string must be translated the same way across all languages.\n\
Keep capitalization consistent with the input. If the input string is in all caps, the output must also be in all caps.\n\
Keep punctuation consistent with the input. If the input string ends with a period, the output must also end with a period.\n\
Be consistent within each language: opposite values or meanings must be translated in a consistent way.\n\
Output a JSON object with one key per input line, using the input text exactly as given. The value for each key is a JSON object \
with one key per language code below and the translated string as its value.\n\
Translate into the following language codes:\n"
    );

    for locale in locales {
        let _ = writeln!(prompt, "{} - {}", locale.code, locale.name);
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_every_locale() {
        let locales = vec![Locale::new("frFR", "French"), Locale::new("koKR", "Korean")];
        let prompt = system_prompt("World of Warcraft", &locales);

        assert!(prompt.contains("translation bot for World of Warcraft"));
        assert!(prompt.ends_with("frFR - French\nkoKR - Korean\n"));
    }

    #[test]
    fn test_prompt_is_stable() {
        let locales = vec![Locale::new("deDE", "German")];
        assert_eq!(
            system_prompt("Azeroth", &locales),
            system_prompt("Azeroth", &locales)
        );
    }
}
