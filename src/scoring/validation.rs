use std::collections::HashSet;

/// Apply the comparator's case policy to every label.
pub fn normalize<I, S>(items: I, case_sensitive: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| {
            let item = item.as_ref();
            if case_sensitive {
                item.to_string()
            } else {
                item.to_lowercase()
            }
        })
        .collect()
}

/// First label that appears more than once, if any.
pub fn find_duplicate(items: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .find(|item| !seen.insert(item.as_str()))
        .map(String::as_str)
}
