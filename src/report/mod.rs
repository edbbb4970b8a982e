// Report module - text rendering of normalized results

pub mod testrun;
pub mod typecheck;

pub use testrun::format_test_report;
pub use typecheck::{format_type_errors, NO_ERRORS};

/// Marker character used to underline `File:` headers in both report styles
const UNDERLINE_MARK: &str = "‾";

/// Underlines never exceed this many marker characters
const UNDERLINE_CAP: usize = 80;

/// Underline sized to the label, capped at [`UNDERLINE_CAP`] markers
pub(crate) fn underline(label: &str) -> String {
    UNDERLINE_MARK.repeat(label.chars().count().min(UNDERLINE_CAP))
}

/// Group items by a file key, preserving first-seen file order. Both report
/// styles share this convention; the output is never sorted.
pub(crate) fn group_by_file<T>(
    items: Vec<T>,
    key: impl Fn(&T) -> &str,
) -> Vec<(String, Vec<T>)> {
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for item in items {
        let file = key(&item).to_string();
        match groups.iter_mut().find(|(existing, _)| *existing == file) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((file, vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underline_matches_label_width() {
        assert_eq!(underline("a.ts"), "‾".repeat(4));
    }

    #[test]
    fn test_underline_caps_at_80() {
        let label = "x".repeat(200);
        assert_eq!(underline(&label).chars().count(), 80);
    }

    #[test]
    fn test_underline_counts_chars_not_bytes() {
        // Two characters, five bytes
        assert_eq!(underline("éé").chars().count(), 2);
    }

    #[test]
    fn test_group_by_file_first_seen_order() {
        let items = vec![("b.ts", 1), ("a.ts", 2), ("b.ts", 3)];
        let groups = group_by_file(items, |item| item.0);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "b.ts");
        assert_eq!(groups[0].1, vec![("b.ts", 1), ("b.ts", 3)]);
        assert_eq!(groups[1].0, "a.ts");
    }

    #[test]
    fn test_group_by_file_empty() {
        let groups = group_by_file(Vec::<(&str, i32)>::new(), |item| item.0);
        assert!(groups.is_empty());
    }
}
