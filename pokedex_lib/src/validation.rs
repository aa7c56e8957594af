//! Input normalization. Nothing here rejects input: malformed values are
//! coerced to something the service can act on.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upper bound on page size. Every listed item costs one upstream call.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Strip ASCII control characters (0x00-0x1F and DEL), trim whitespace.
pub fn sanitize_text(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a name-or-id lookup key the way the upstream treats it:
/// sanitized and lowercased. May return an empty string.
pub fn normalize_key(input: &str) -> String {
    sanitize_text(input).to_lowercase()
}

/// Coerce a raw page number. Missing, non-numeric and non-positive values
/// become [`DEFAULT_PAGE`].
pub fn coerce_page(raw: Option<&str>) -> u32 {
    parse_positive(raw).unwrap_or(DEFAULT_PAGE)
}

/// Coerce a raw page size. Missing, non-numeric and non-positive values
/// become [`DEFAULT_PAGE_SIZE`]; larger values are clamped to [`MAX_PAGE_SIZE`].
pub fn coerce_page_size(raw: Option<&str>) -> u32 {
    parse_positive(raw)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE)
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    let value = raw?.trim().parse::<i64>().ok()?;
    if value < 1 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_control_chars() {
        assert_eq!(sanitize_text("  pika\u{0}chu\n "), "pikachu");
        assert_eq!(sanitize_text("\t\r\n"), "");
    }

    #[test]
    fn normalize_key_lowercases() {
        assert_eq!(normalize_key(" Pikachu "), "pikachu");
        assert_eq!(normalize_key("MR-MIME"), "mr-mime");
        assert_eq!(normalize_key("25"), "25");
    }

    #[test]
    fn page_defaults() {
        assert_eq!(coerce_page(None), 1);
        assert_eq!(coerce_page(Some("")), 1);
        assert_eq!(coerce_page(Some("abc")), 1);
        assert_eq!(coerce_page(Some("0")), 1);
        assert_eq!(coerce_page(Some("-3")), 1);
        assert_eq!(coerce_page(Some("2.5")), 1);
    }

    #[test]
    fn page_valid() {
        assert_eq!(coerce_page(Some("1")), 1);
        assert_eq!(coerce_page(Some(" 7 ")), 7);
    }

    #[test]
    fn page_huge_saturates() {
        assert_eq!(coerce_page(Some("99999999999")), u32::MAX);
    }

    #[test]
    fn page_size_defaults() {
        assert_eq!(coerce_page_size(None), 20);
        assert_eq!(coerce_page_size(Some("ten")), 20);
        assert_eq!(coerce_page_size(Some("0")), 20);
        assert_eq!(coerce_page_size(Some("-5")), 20);
    }

    #[test]
    fn page_size_valid_and_clamped() {
        assert_eq!(coerce_page_size(Some("1")), 1);
        assert_eq!(coerce_page_size(Some("50")), 50);
        assert_eq!(coerce_page_size(Some("100")), 100);
        assert_eq!(coerce_page_size(Some("101")), 100);
    }
}
