//! Tests for bare-token repair of region attributes

#[cfg(test)]
mod tests {
    use skin3d::annotation::sanitize::{
        BARE_TOKEN_SUBSTITUTIONS, BareTokenSubstitution, sanitize_attributes, sanitize_with,
    };
    use std::borrow::Cow;

    // Tests bare undefined is quoted
    // Verified by removing the table entry
    #[test]
    fn test_bare_undefined_is_quoted() {
        let repaired = sanitize_attributes(r#"{"lesion_id":"","annotator":undefined}"#);

        assert_eq!(repaired, r#"{"lesion_id":"","annotator":"undefined"}"#);
    }

    // Tests untouched input is borrowed
    // Verified by always allocating
    #[test]
    fn test_clean_input_is_borrowed() {
        let raw = r#"{"lesion_id":"3","annotator":"A1"}"#;

        assert!(matches!(sanitize_attributes(raw), Cow::Borrowed(_)));
    }

    // Tests quoted token is left alone
    // Verified by ignoring string state
    #[test]
    fn test_quoted_undefined_is_untouched() {
        let raw = r#"{"annotator":"undefined"}"#;

        assert_eq!(sanitize_attributes(raw), raw);
    }

    // Tests escaped quotes keep string state
    // Verified by ending strings on escaped quotes
    #[test]
    fn test_escaped_quote_inside_string() {
        let raw = r#"{"note":"said \"undefined\" twice","lesion_id":undefined}"#;

        assert_eq!(
            sanitize_attributes(raw),
            r#"{"note":"said \"undefined\" twice","lesion_id":"undefined"}"#
        );
    }

    // Tests longer identifiers are not split
    // Verified by matching substrings
    #[test]
    fn test_token_inside_identifier_is_untouched() {
        let raw = "{undefined_ratio:1,x:notundefined}";

        assert_eq!(sanitize_attributes(raw), raw);
    }

    // Tests every occurrence is replaced
    // Verified by stopping after the first replacement
    #[test]
    fn test_multiple_occurrences() {
        let repaired = sanitize_attributes("{\"a\":undefined, \"b\": [undefined]}");

        assert_eq!(repaired, "{\"a\":\"undefined\", \"b\": [\"undefined\"]}");
    }

    // Tests a caller table extends the repairs
    // Verified by ignoring the caller table
    #[test]
    fn test_custom_substitution_table() {
        let table = [
            BareTokenSubstitution {
                token: "NaN",
                replacement: "null",
            },
            BARE_TOKEN_SUBSTITUTIONS[0],
        ];

        assert_eq!(
            sanitize_with("{\"a\":NaN,\"b\":undefined}", &table),
            "{\"a\":null,\"b\":\"undefined\"}"
        );
    }
}
