//! In-page anchor scrolling

/// Element id an in-page link points at, e.g. `#standings` → `standings`.
///
/// `#` alone and links to other pages yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#standings"), Some("standings"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/teams#roster"), None);
    }
}
