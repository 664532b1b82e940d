use std::fmt;
use std::str::FromStr;

use crate::error::OcrError;

/// Language models recognized together, written `ind+ara` on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet(Vec<String>);

impl LanguageSet {
    pub fn codes(&self) -> &[String] {
        &self.0
    }

    /// Codes of this set absent from `available`
    pub fn missing_from(&self, available: &[String]) -> Vec<&str> {
        self.0
            .iter()
            .filter(|code| !available.contains(code))
            .map(String::as_str)
            .collect()
    }
}

impl FromStr for LanguageSet {
    type Err = OcrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut codes: Vec<String> = Vec::new();
        for code in s.split('+').map(str::trim) {
            let valid = !code.is_empty()
                && code
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(OcrError::InvalidLanguage(s.to_string()));
            }
            if !codes.iter().any(|existing| existing == code) {
                codes.push(code.to_string());
            }
        }
        Ok(Self(codes))
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("+"))
    }
}
