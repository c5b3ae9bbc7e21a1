//! Literal escaping for the target matching dialect.

/// Characters that are prefixed with a backslash when escaped.
///
/// `]` and `}` are intentionally absent and always pass through.
pub const METACHARACTERS: &[char] = &['\\', '.', '$', '^', '{', '[', '(', '|', ')', '*', '+', '?'];

/// Escapes every metacharacter in `raw` so the result matches `raw` literally.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
