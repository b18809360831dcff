/// Split a delimited answer string into individual answers.
///
/// Any run of characters other than letters, digits, or `_` separates two
/// answers. Empty tokens (from leading or trailing delimiters) are dropped.
///
/// ```
/// use order_scorer::tokenize::split_answers;
///
/// assert_eq!(split_answers("one, two;three"), vec!["one", "two", "three"]);
/// ```
pub fn split_answers(input: &str) -> Vec<String> {
    input
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
