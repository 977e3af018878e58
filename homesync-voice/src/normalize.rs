/// Collapse a device name to its matching key: underscores and whitespace
/// removed, case folded to lowercase.
///
/// `"White_LED"` and a spoken `"white led"` produce the same key. The key
/// is used only for exact voice matching, never for search.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
