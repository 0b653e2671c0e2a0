/// Converts a display name into a URL-safe route segment.
///
/// Lowercases the input, collapses each whitespace run into one hyphen, spells
/// `&` as `and` and drops every character outside `[a-z0-9-]`. Existing hyphens
/// are kept as-is, so the output is stable under repeated application.
///
/// ```
/// use bulk_chai::domain::location::slugify;
///
/// assert_eq!(slugify("Jammu & Kashmir"), "jammu-and-kashmir");
/// assert_eq!(slugify("Hubli Dharwad"), "hubli-dharwad");
/// ```
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        match ch {
            '&' => out.push_str("and"),
            'a'..='z' | '0'..='9' | '-' => out.push(ch),
            _ => {}
        }
    }

    out
}
