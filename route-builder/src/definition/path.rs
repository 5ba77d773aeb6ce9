//! Path template placeholders.

/// Iterate over the names of the `{param}` placeholders of a path template, in order.
///
/// Inline requirements and defaults (`{page<\d+>?1}`) are not part of the name. An unclosed
/// placeholder ends the scan.
pub(crate) fn placeholders(path: &str) -> impl Iterator<Item = &str> {
    let mut rest = path;

    std::iter::from_fn(move || {
        let start = rest.find('{')? + 1;
        let len = rest[start..].find('}')?;
        let placeholder = &rest[start..start + len];

        rest = &rest[start + len + 1..];

        let name_len = placeholder
            .find(|c: char| c == '<' || c == '?')
            .unwrap_or(placeholder.len());

        Some(&placeholder[..name_len])
    })
}
