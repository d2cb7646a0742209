//! URL construction for the variation service

/// Default NCBI Variation Services base URL.
/// Overridable via --base-url / ALFF_BASE_URL (tests point this at a mock).
pub const DEFAULT_BASE_URL: &str = "https://api.ncbi.nlm.nih.gov/variation/v0";

/// Frequency endpoint for a refSNP, addressed by its numeric id (no "rs")
pub fn refsnp_frequency_url(base_url: &str, numeric_id: &str) -> String {
    format!(
        "{}/refsnp/{}/frequency",
        base_url.trim_end_matches('/'),
        numeric_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refsnp_frequency_url() {
        assert_eq!(
            refsnp_frequency_url(DEFAULT_BASE_URL, "16"),
            "https://api.ncbi.nlm.nih.gov/variation/v0/refsnp/16/frequency"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(
            refsnp_frequency_url("http://localhost:8000/", "123"),
            "http://localhost:8000/refsnp/123/frequency"
        );
    }
}
