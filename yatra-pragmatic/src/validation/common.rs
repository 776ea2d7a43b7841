use super::*;
use std::collections::HashSet;

/// Returns sorted duplicates.
pub fn get_duplicates<'a>(items: impl Iterator<Item = &'a String>) -> Option<Vec<String>> {
    let mut ids = HashSet::<_>::default();
    let duplicates =
        items.filter_map(move |id| if ids.insert(id) { None } else { Some(id.clone()) }).collect::<HashSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        let mut duplicates = duplicates.into_iter().collect::<Vec<_>>();
        duplicates.sort();
        Some(duplicates)
    }
}

/// Collects errors from validation rules.
pub fn combine_error_results(results: &[Result<(), FormatError>]) -> Result<(), Vec<FormatError>> {
    let errors = results.iter().cloned().flat_map(|result| result.err()).collect::<Vec<FormatError>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Creates a validation error.
pub fn create_error(code: &str, cause: &str, action: String) -> FormatError {
    FormatError::new(code.to_string(), cause.to_string(), action)
}
