/// Shown in place of initials when a friend has no usable name.
pub const UNKNOWN_INITIALS: &str = "?";

/// The final whitespace-delimited token of `name`, or `""` if there is none.
pub fn last_name(name: Option<&str>) -> &str {
    name.and_then(|name| name.split_whitespace().last())
        .unwrap_or("")
}

/// Initials used as a textual avatar.
///
/// - no name, or only whitespace: [UNKNOWN_INITIALS]
/// - one token: its first character
/// - more tokens: first character of the first token followed by that of the last token
///
/// The result is uppercased.
pub fn initials(name: Option<&str>) -> String {
    let mut tokens = name.unwrap_or_default().split_whitespace();
    let Some(first) = tokens.next() else {
        return UNKNOWN_INITIALS.to_string();
    };
    let mut initials = String::new();
    initials.extend(first.chars().next());
    if let Some(last) = tokens.last() {
        initials.extend(last.chars().next());
    }
    initials.to_uppercase()
}
