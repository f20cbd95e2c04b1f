/// Backend names end up in URL paths, so only a conservative alphabet is allowed.
pub fn is_valid_backend_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Heading shown above the forms, e.g. "Go Backend".
pub fn backend_title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{} Backend", first.to_uppercase(), chars.as_str()),
        None => "Backend".to_string(),
    }
}

// CSS classes used to tell backends apart on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTheme {
    pub background: &'static str,
    pub button: &'static str,
}

pub fn theme_for(name: &str) -> BackendTheme {
    match name {
        "go" => BackendTheme {
            background: "bg-cyan-500",
            button: "bg-cyan-700 hover:bg-blue-600",
        },
        _ => BackendTheme {
            background: "bg-gray-200",
            button: "bg-gray-500 hover:bg-gray-600",
        },
    }
}
