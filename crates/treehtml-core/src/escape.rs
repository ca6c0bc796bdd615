//! HTML escaping

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// The four characters that are special in HTML text and attribute values
static SPECIALS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[<>"&]"#).unwrap());

/// Character or numeric entity references, tried before a lone `&`
static SPECIALS_OR_ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"&(?:[A-Za-z0-9_]+|#x?[A-Za-z0-9_]+);|[<>"&]"#).unwrap()
});

/// Escape the special HTML characters in `text`.
///
/// With `escape_all` every `<`, `>`, `"` and `&` is replaced. Without it,
/// entity references such as `&amp;`, `&#39;` or `&#x3A;` are passed through
/// and only the remaining specials are replaced.
///
/// Returns the input unchanged (borrowed) when there is nothing to escape.
pub fn escape_html(text: &str, escape_all: bool) -> Cow<'_, str> {
    let re: &Regex = if escape_all {
        &SPECIALS_RE
    } else {
        &SPECIALS_OR_ENTITY_RE
    };

    let mut matches = re.find_iter(text).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in matches {
        out.push_str(&text[last..m.start()]);
        // Anything longer than one character is an entity reference
        out.push_str(replacement(m.as_str()).unwrap_or(m.as_str()));
        last = m.end();
    }
    out.push_str(&text[last..]);

    Cow::Owned(out)
}

fn replacement(special: &str) -> Option<&'static str> {
    match special {
        "<" => Some("&lt;"),
        ">" => Some("&gt;"),
        "\"" => Some("&quot;"),
        "&" => Some("&amp;"),
        _ => None,
    }
}
