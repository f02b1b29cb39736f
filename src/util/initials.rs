//! Avatar initials for participant rows.

#[cfg(test)]
#[path = "initials_test.rs"]
mod initials_test;

/// Delimiters that separate name parts in an email local part.
const NAME_DELIMITERS: [char; 3] = ['.', '-', '_'];

/// Derive a 1–2 character uppercase avatar label from an email address.
///
/// Uses the local part (before `@`). With two or more name parts the label
/// is the first letter of the first two; with one part it is that part's
/// first two characters; otherwise the first two characters of the local part.
pub fn participant_initials(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut parts = local.split(NAME_DELIMITERS).filter(|p| !p.is_empty());

    let label: String = match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => first.chars().take(1).chain(second.chars().take(1)).collect(),
        (Some(only), None) => only.chars().take(2).collect(),
        _ => local.chars().take(2).collect(),
    };
    label.to_uppercase()
}
