/// Canonicalizes a free-text handle for referral matching: trim surrounding
/// whitespace, drop a single leading `@`, lowercase.
///
/// The storage collaborator applies the same normalization when a submission
/// is written. The two must stay byte-for-byte identical or referral matching
/// silently breaks, so keep this in sync with the write side.
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let trimmed = raw.trim();
    let without_at = trimmed.strip_prefix('@').unwrap_or(trimmed);
    without_at.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn trims_strips_at_and_lowercases() {
        assert_eq!(normalize(Some("@Alice_01 ")), "alice_01");
        assert_eq!(normalize(Some("alice_01")), "alice_01");
        assert_eq!(normalize(Some("  BOB.2024  ")), "bob.2024");
    }

    #[test]
    fn only_one_leading_at_is_stripped() {
        assert_eq!(normalize(Some("@@double")), "@double");
    }

    #[test]
    fn empty_and_missing_input_normalize_to_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("   ")), "");
        assert_eq!(normalize(Some("@")), "");
    }
}
