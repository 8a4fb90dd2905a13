//! Ingredient list cleanup applied before a list reaches the prompt builder.

use std::collections::HashSet;

/// Trim, lowercase and deduplicate a list of ingredient names.
///
/// Blank entries are dropped. Order follows the first occurrence of each name,
/// so `["Egg", "rice", "egg"]` becomes `["egg", "rice"]`.
pub fn normalize_ingredients<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|item| item.as_ref().trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
