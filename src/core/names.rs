// Display formatting for graduate names as they appear in the roster
// ("KOH YI NING, PRISCILLA" style registry names).

pub const SHOW_TITLE: &str = "2026 Division of Industrial Design Graduation Show";
pub const FALLBACK_DISPLAY_NAME: &str = "Designer";

/// Lowercase everything, then uppercase the first character of each
/// space-separated word. Runs of spaces are preserved.
pub fn to_title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "SURNAME, GIVEN" becomes "Given Surname"; anything else is title-cased.
/// An empty name formats as "Designer".
pub fn format_full_display_name(full_name: &str) -> String {
    if full_name.is_empty() {
        return FALLBACK_DISPLAY_NAME.to_string();
    }
    if full_name.contains(',') {
        let mut parts = full_name.split(',');
        let surname = parts.next().unwrap_or_default().trim();
        let given = parts.next().unwrap_or_default().trim();
        return to_title_case(&format!("{given} {surname}"));
    }
    to_title_case(full_name)
}

pub fn page_title(display_name: &str) -> String {
    format!("{display_name} | {SHOW_TITLE}")
}

pub fn designer_bio(display_name: &str) -> String {
    format!(
        "{display_name} is a graduating student from the Division of Industrial Design at the \
         National University of Singapore. Their work focuses on creating meaningful design \
         solutions that address real-world problems through human-centered design approaches."
    )
}
