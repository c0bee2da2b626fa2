//! Path template expansion and query-string encoding

use crate::error::{ClientError, Result};

/// Expand `{name}` expressions in `template` with percent-encoded values.
///
/// Every variable referenced by the template must be present and non-empty.
pub fn expand(template: &str, vars: &[(&str, &str)]) -> Result<String> {
    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(|c: char| c == '{' || c == '}') {
        if rest.as_bytes()[open] == b'}' {
            return Err(ClientError::PathExpansion(format!(
                "unmatched '}}' in template '{}'",
                template
            )));
        }

        expanded.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            ClientError::PathExpansion(format!("unclosed expression in template '{}'", template))
        })?;

        let name = &after[..close];
        if name.is_empty() || name.contains('{') {
            return Err(ClientError::PathExpansion(format!(
                "malformed expression '{{{}}}' in template '{}'",
                name, template
            )));
        }

        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| ClientError::PathExpansion(format!("missing variable: {}", name)))?;

        if value.is_empty() {
            return Err(ClientError::PathExpansion(format!("empty variable: {}", name)));
        }

        expanded.push_str(&urlencoding::encode(value));
        rest = &after[close + 1..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}

/// Encode ordered key/value pairs as `application/x-www-form-urlencoded`
pub fn encode_query<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish()
}
