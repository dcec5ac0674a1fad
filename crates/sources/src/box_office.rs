//! Feature extraction from the IMDB box-office blob.
//!
//! The scraper persists the field as a Python-dict-style string, e.g.
//!
//! ```text
//! {'Budget': '$30,000,000 (estimated)',
//!  'Opening Weekend United States': '$29,140,617, 26 Nov 1995',
//!  'Cumulative Worldwide Gross': '$394,436,586'}
//! ```
//!
//! Rewriting the single quotes to double quotes turns it into JSON. A blob
//! that still fails to parse, or a key that is missing, yields `None` for
//! the affected figures rather than an error.

use serde_json::Value;

const BUDGET_KEY: &str = "Budget";
const GROSS_KEY: &str = "Cumulative Worldwide Gross";
const OPENING_WEEKEND_KEY: &str = "Opening Weekend United States";

/// The three monetary figures extracted from one blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxOffice {
    pub budget: Option<u64>,
    pub gross: Option<u64>,
    pub opening_weekend: Option<u64>,
}

/// Parse a box-office blob into its monetary figures.
pub fn parse_box_office(blob: &str) -> BoxOffice {
    let json = blob.replace('\'', "\"");
    let Ok(Value::Object(fields)) = serde_json::from_str(&json) else {
        return BoxOffice::default();
    };

    let field = |key: &str| fields.get(key).and_then(Value::as_str);

    BoxOffice {
        // The budget value carries no date suffix, strip digits from the whole string
        budget: field(BUDGET_KEY).and_then(parse_amount),
        // Gross and opening weekend may carry ", 26 Nov 1995"-style suffixes;
        // only the first whitespace-separated token is the amount
        gross: field(GROSS_KEY).and_then(first_token_amount),
        opening_weekend: field(OPENING_WEEKEND_KEY).and_then(first_token_amount),
    }
}

/// Strip every non-digit character and parse what remains.
fn parse_amount(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn first_token_amount(text: &str) -> Option<u64> {
    parse_amount(text.split(' ').next()?)
}
