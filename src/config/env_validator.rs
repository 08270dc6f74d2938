//! Validation of `PANTRY_*` environment values
//!
//! A bad value never aborts the run: it is reported once, with a typo
//! suggestion where one is close enough, and the configured value stays.

use std::io::Write;

use tracing::warn;

/// Validator for one environment variable with a closed set of values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`; on failure report to `writer` and return `fallback`.
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        warn!(var = self.var_name, value, "ignoring invalid environment value");
        let hint = match self.closest(value) {
            Some(candidate) => format!("; did you mean '{}'?", candidate),
            None => String::new(),
        };
        let _ = writeln!(
            writer,
            "warning: ignoring {}='{}' (expected one of: {}){}",
            self.var_name,
            value,
            self.valid_values.join(", "),
            hint
        );
        fallback
    }

    /// Nearest valid value within two edits.
    fn closest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|candidate| (*candidate, levenshtein(&input, candidate)))
            .filter(|(_, dist)| *dist > 0 && *dist <= 2)
            .min_by_key(|(_, dist)| *dist)
            .map(|(candidate, _)| candidate)
    }
}

/// Edit distance over bytes; used for typo suggestions.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
