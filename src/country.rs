//! Phone-number country inference.
//!
//! Best-effort mapping from a free-text phone number to a country label using
//! an ordered list of national dialing-pattern heuristics. First match wins,
//! and the order is load-bearing: several prefixes are ambiguous across
//! countries (9-digit numbers starting with 9, "07..." mobiles) and the rule
//! order is what resolves them. Unmatched input returns an empty string,
//! never an error.

use std::sync::OnceLock;

use regex::Regex;

/// Ordered pattern → country rules. Evaluated top to bottom against the
/// normalized number; the first hit decides.
fn rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            // Israel: 05x mobiles (10 digits), 0[2-4,8-9] landlines (9 digits),
            // or the +972 international form.
            (r"^0(?:5\d{8}|[23489]\d{7})$", "Israel"),
            (r"^\+?972\d{8,9}$", "Israel"),
            // UK mobiles: 07 + 9 digits nationally, or 44 7 + 9 digits.
            (r"^(?:\+?44|0)7\d{9}$", "UK"),
            // Portugal: 9 digits starting with 9, or the +351 form.
            (r"^\+?351\d{9}$", "Portugal"),
            (r"^9\d{8}$", "Portugal"),
            // Italy: mobiles start with 3 (9-10 digits), optional +39.
            (r"^(?:\+?39)?3\d{8,9}$", "Italy"),
            // Japan: +81 international, or 070/080/090 mobiles.
            (r"^\+?81\d{9,10}$", "Japan"),
            (r"^0[789]0\d{8}$", "Japan"),
            // Greece: 69x mobiles with optional +30, landlines only in the
            // international form (a bare 2x number is indistinguishable from
            // a NANP number with a 2xx area code).
            (r"^(?:\+?30)?69\d{8}$", "Greece"),
            (r"^\+?302\d{9}$", "Greece"),
            // Belarus: +375, or 80xx national mobile codes.
            (r"^\+?375\d{9}$", "Belarus"),
            (r"^80(?:25|29|33|44)\d{7}$", "Belarus"),
            // Russia: 7/8 + 9xx mobile.
            (r"^(?:\+?7|8)9\d{9}$", "Russia"),
            // Switzerland before the bare Australian form: the 41 country
            // code makes these 11+ digits, which is what disambiguates them.
            (r"^\+?41(?:7[5-9]|2\d)\d{7}$", "Switzerland"),
            // Australia: 04 mobiles, +61 4, or the 9-digit form without the
            // leading 0 (length alone separates it from Swiss numbers).
            (r"^(?:\+?61)?4\d{8}$", "Australia"),
            (r"^04\d{8}$", "Australia"),
            // Netherlands: 06 mobiles or 9 digits starting with 6.
            (r"^(?:\+?31)?6\d{8}$", "Netherlands"),
            (r"^06\d{8}$", "Netherlands"),
            // Ireland: 08[3-9] mobiles or the +353 form.
            (r"^\+?353\d{7,9}$", "Ireland"),
            (r"^08[3-9]\d{7}$", "Ireland"),
            // Fallback: US-style 10-digit (NANP shape), optionally with a
            // leading 1 (11 digits).
            (r"^1?[2-9]\d{2}[2-9]\d{6}$", "USA"),
        ]
        .into_iter()
        .map(|(pattern, country)| (Regex::new(pattern).unwrap(), country))
        .collect()
    })
}

/// Strip formatting noise (whitespace, hyphens, parentheses) but keep the
/// leading `+` — the rules distinguish international from national forms.
fn normalize(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
        .collect()
}

/// Infer a country label from a phone number in any formatting.
///
/// Returns an empty string when no rule matches. Total — never fails on
/// arbitrary input.
pub fn infer_country(phone: &str) -> String {
    let normalized = normalize(phone);
    if normalized.is_empty() {
        return String::new();
    }
    for (re, country) in rules() {
        if re.is_match(&normalized) {
            return (*country).to_string();
        }
    }
    String::new()
}
