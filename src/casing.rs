//! snake_case -> camel case conversions used for Go identifiers and tag keys.
//!
//! Unlike `heck`, the rest of each segment is left untouched and an `id`
//! segment is upper-cased as a whole, following Go initialism style.

fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `user_id` -> `UserID`, `created_at` -> `CreatedAt`
pub fn to_upper_camel(name: &str) -> String {
    name.split('_')
        .map(|segment: &str| {
            if segment.eq_ignore_ascii_case("id") {
                segment.to_uppercase()
            } else {
                upper_first(segment)
            }
        })
        .collect()
}

/// `user_name` -> `userName`; the first segment is kept as is.
pub fn to_lower_camel(name: &str) -> String {
    let mut segments = name.split('_');
    let head = segments.next().unwrap_or_default().to_string();

    segments.fold(head, |mut text: String, segment: &str| {
        text.push_str(&upper_first(segment));
        text
    })
}
