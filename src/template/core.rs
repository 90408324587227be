use std::collections::HashMap;

use crate::error::{RenderError, Result};

/// Binding table resolving placeholder names to replacement text.
pub type Bindings = HashMap<String, String>;

/// One run of a tokenized template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, with `%%` escapes already collapsed to `%`.
    Literal(String),
    /// Placeholder name from a `%(name)s` token.
    Placeholder(String),
}

impl Segment {
    /// Re-serialize the segment as template text. Literal percent signs are
    /// escaped back to `%%` so the result tokenizes to the same segment.
    pub fn to_template(&self) -> String {
        match self {
            Segment::Literal(text) => text.replace('%', "%%"),
            Segment::Placeholder(name) => format!("%({name})s"),
        }
    }
}

/// Split a template string into alternating literal and placeholder runs.
///
/// A placeholder is exactly `%(name)s` where `name` is non-empty and free of
/// whitespace. `%%` collapses to a literal percent sign; any other `%` usage
/// stays literal text.
pub fn tokenize(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        literal.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(stripped) = tail.strip_prefix("%%") {
            literal.push('%');
            rest = stripped;
            continue;
        }

        if let Some((name, after)) = parse_placeholder(tail) {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name.to_string()));
            rest = after;
            continue;
        }

        literal.push('%');
        rest = &tail[1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Parse a `%(name)s` token at the start of `text`, returning the name and
/// the remainder after the token.
fn parse_placeholder(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_prefix("%(")?;
    let close = body.find(')')?;
    let name = &body[..close];
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return None;
    }
    let after = body[close + 1..].strip_prefix('s')?;
    Some((name, after))
}

/// Expand every placeholder in `template` against `bindings`, with `extra`
/// taking precedence when both define a name. An unresolved placeholder is a
/// hard error, never passed through literally.
pub fn expand(template: &str, bindings: &Bindings, extra: Option<&Bindings>) -> Result<String> {
    let mut out = String::with_capacity(template.len());

    for segment in tokenize(template) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Placeholder(name) => {
                let value = extra
                    .and_then(|map| map.get(&name))
                    .or_else(|| bindings.get(&name))
                    .ok_or_else(|| RenderError::UnresolvedToken(name.clone()))?;
                out.push_str(value);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings(pairs: &[(&str, &str)]) -> Bindings {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn tokenize_splits_literals_and_placeholders() {
        let segments = tokenize("a %(face-normal)sb");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a ".to_string()),
                Segment::Placeholder("face-normal".to_string()),
                Segment::Literal("b".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_collapses_percent_escapes() {
        let segments = tokenize("100%% sure");
        assert_eq!(segments, vec![Segment::Literal("100% sure".to_string())]);
    }

    #[test]
    fn tokenize_leaves_malformed_tokens_literal() {
        let segments = tokenize("50% off %(bad name)s");
        assert_eq!(
            segments,
            vec![Segment::Literal("50% off %(bad name)s".to_string())]
        );
    }

    #[test]
    fn to_template_round_trips_through_tokenize() {
        let segments = tokenize("50%% off %(face-normal)s");
        let rebuilt: String = segments.iter().map(Segment::to_template).collect();
        assert_eq!(rebuilt, "50%% off %(face-normal)s");
        assert_eq!(tokenize(&rebuilt), segments);
    }

    #[test]
    fn expand_resolves_against_bindings() {
        let base = bindings(&[("face-normal", "\x1b[0m")]);
        let out = expand("x%(face-normal)sy", &base, None).unwrap();
        assert_eq!(out, "x\x1b[0my");
    }

    #[test]
    fn expand_prefers_extra_bindings() {
        let base = bindings(&[("name", "base")]);
        let extra = bindings(&[("name", "extra")]);
        let out = expand("%(name)s", &base, Some(&extra)).unwrap();
        assert_eq!(out, "extra");
    }

    #[test]
    fn expand_fails_on_unresolved_placeholder() {
        let base = Bindings::new();
        let err = expand("%(missing)s", &base, None).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RenderError::UnresolvedToken(name) if name == "missing"
        ));
    }
}
