//! Text normalizer for free-text meal descriptions.
//!
//! Leading noise is removed in one anchored pass, in this order: a hyphen
//! bullet, a clock time, "mit", a quantity with optional unit, a size
//! adjective, and a container or measure word. Each part is optional and
//! matched at most once, so "1 Scheibe Brot" → "Brot" but "Brot mit Honig"
//! keeps its inner "mit".

use regex::Regex;
use std::sync::LazyLock;

const HYPHEN: &str = r"-\s*";
const CLOCK_TIME: &str = r"\d{1,2}:\d{2}(?:\s*uhr)?\s*";
const WITH: &str = r"mit\s+";
const QUANTITY: &str = r"\d+(?:[.,/]\d+)?\s*(?:(?:el|tl|stk|st|gr|ml|m|l|g|x)\.?)?\s+";
const SIZE: &str = r"(?:halb|klein|groß)(?:es|er|en|e)\s+";

// Longer spellings first: the engine takes the first alternative that fits.
const MEASURE_WORDS: &[&str] = &[
    "tassen?",
    "scheiben?",
    "flaschen?",
    "dosen?",
    "kannen?",
    "prisen?",
    "kugeln?",
    "tüten?",
    "verpackung(?:en)?",
    "packung(?:en)?",
    "portion(?:en)?",
    "gläser",
    "glass",
    "glas",
    "becher",
    "teller",
    "esslöffel",
    "teelöffel",
    "stücke?",
    "schlücke",
    "schluck",
    "handvoll",
    "hand",
    "kilogramm",
    "kilogram",
    "kilo",
    "milligramm",
    "milligram",
    "gramm",
    "gram",
    "litern?",
];

static LEADING_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    let measure = format!(r"(?:{})(?:\s+|$)", MEASURE_WORDS.join("|"));
    let pattern = format!(
        r"(?i)^(?:{HYPHEN})?(?:{CLOCK_TIME})?(?:{WITH})?(?:{QUANTITY})?(?:{SIZE})?(?:{measure})?"
    );
    Regex::new(&pattern).expect("leading-noise pattern")
});

/// Canonical label for a meal description: leading quantity/measure noise
/// removed, trimmed, title-cased. May return an empty string.
pub fn normalize(text: &str) -> String {
    let stripped = LEADING_NOISE.replace(text, "");
    title_case(&stripped.trim().to_lowercase())
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
/// "müsli-riegel" → "Müsli-Riegel".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
