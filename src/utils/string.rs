//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Turn a dotted package identifier into a bare DOT identifier.
///
/// Every `.` becomes `_`; nothing else is touched, so empty or otherwise odd
/// identifiers pass through literally.
pub fn dot_identifier(id: &str) -> String {
    id.replace('.', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("node", 0), "nodes");
        assert_eq!(pluralize("node", 1), "node");
        assert_eq!(pluralize("edge", 5), "edges");
    }

    #[test]
    fn test_dot_identifier() {
        assert_eq!(dot_identifier("zope.interface"), "zope_interface");
        assert_eq!(dot_identifier("a.b.c"), "a_b_c");
        assert_eq!(dot_identifier("plain"), "plain");
        assert_eq!(dot_identifier(""), "");
        assert_eq!(dot_identifier("..."), "___");
    }
}
