//! Tree identifiers: `<site-code>/<year-code>/<suffix>`.

/// Fixed identifier segments chosen at deployment time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdTemplate {
    pub site_code: String,
    pub year_code: String,
}

impl IdTemplate {
    pub fn new(site_code: impl Into<String>, year_code: impl Into<String>) -> Self {
        Self {
            site_code: site_code.into(),
            year_code: year_code.into(),
        }
    }

    pub fn compose(&self, suffix: &str) -> String {
        format!("{}/{}/{}", self.site_code, self.year_code, suffix.trim())
    }

    /// Name of the QR photo uploaded for `suffix`, e.g. `GGN_25_A1_QR.jpg`.
    pub fn photo_filename(&self, suffix: &str) -> String {
        let raw = format!("{}_{}_{}_QR.jpg", self.site_code, self.year_code, suffix.trim());
        raw.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

/// Comparison key: trimmed and upper-cased.
pub fn normalize(identifier: &str) -> String {
    identifier.trim().to_uppercase()
}

pub fn is_duplicate<'a, I>(candidate: &str, existing: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let key = normalize(candidate);
    existing.into_iter().any(|id| normalize(id) == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_uses_fixed_segments() {
        let t = IdTemplate::new("GGN", "25");
        assert_eq!(t.compose(" A1 "), "GGN/25/A1");
    }

    #[test]
    fn duplicate_ignores_case_and_whitespace() {
        let existing = ["GGN/25/A1", "GGN/25/B7"];
        assert!(is_duplicate("ggn/25/a1 ", existing));
        assert!(!is_duplicate("GGN/25/A2", existing));
    }

    #[test]
    fn photo_filename_is_path_safe() {
        let t = IdTemplate::new("GGN", "25");
        assert_eq!(t.photo_filename("A1"), "GGN_25_A1_QR.jpg");
        assert_eq!(t.photo_filename("../x y"), "GGN_25_.._x_y_QR.jpg");
    }
}
