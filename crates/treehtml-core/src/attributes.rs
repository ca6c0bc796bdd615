//! Attribute rendering

use crate::ast::Attributes;
use crate::escape::escape_html;

/// Render an attribute map as ` key="value"` fragments.
///
/// Fragments are ordered by key so the output does not depend on insertion
/// order. Null-valued attributes are left out; a missing map renders as the
/// empty string.
pub fn format_attributes(attrs: Option<&Attributes>) -> String {
    let Some(attrs) = attrs else {
        return String::new();
    };

    let mut present: Vec<(&str, &str)> = attrs
        .iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
        .collect();
    present.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (key, value) in present {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_html(value, false));
        out.push('"');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, Option<&str>)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_no_attributes() {
        assert_eq!(format_attributes(None), "");
        assert_eq!(format_attributes(Some(&Attributes::new())), "");
    }

    #[test]
    fn test_sorted_by_key() {
        let a = attrs(&[("title", Some("t")), ("href", Some("u")), ("class", Some("c"))]);
        let b = attrs(&[("class", Some("c")), ("title", Some("t")), ("href", Some("u"))]);
        let expected = r#" class="c" href="u" title="t""#;
        assert_eq!(format_attributes(Some(&a)), expected);
        assert_eq!(format_attributes(Some(&b)), expected);
    }

    #[test]
    fn test_null_values_omitted() {
        let a = attrs(&[("id", None), ("class", Some("x"))]);
        assert_eq!(format_attributes(Some(&a)), r#" class="x""#);

        let only_null = attrs(&[("id", None)]);
        assert_eq!(format_attributes(Some(&only_null)), "");
    }

    #[test]
    fn test_values_escaped_keeping_entities() {
        let a = attrs(&[("title", Some(r#"say "hi" & &amp; <b>"#))]);
        assert_eq!(
            format_attributes(Some(&a)),
            r#" title="say &quot;hi&quot; &amp; &amp; &lt;b&gt;""#
        );
    }

    #[test]
    fn test_empty_value_kept() {
        let a = attrs(&[("alt", Some(""))]);
        assert_eq!(format_attributes(Some(&a)), r#" alt="""#);
    }

    #[test]
    fn test_prefix_keys_sort_by_key() {
        let a = attrs(&[("data-x", Some("2")), ("data", Some("1"))]);
        assert_eq!(format_attributes(Some(&a)), r#" data="1" data-x="2""#);
    }
}
