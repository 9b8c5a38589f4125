//! Path template filling for REST endpoints
//!
//! Templates carry `{placeholder}` segments filled from the call's
//! arguments, e.g. `contentd/cdn_prefix/{cdn_prefix_id}`. An unresolved
//! placeholder is a hard failure.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::transport::Payload;

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fill every `{placeholder}` in `template` from `args`
pub fn fill(template: &str, args: &Payload) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| AppError::UnresolvedPlaceholder {
            template: template.to_string(),
            placeholder: after.to_string(),
        })?;
        let name = &after[..end];
        let value = args.get(name).ok_or_else(|| AppError::UnresolvedPlaceholder {
            template: template.to_string(),
            placeholder: name.to_string(),
        })?;
        out.push_str(&render_value(value));
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Join a base URL and a filled path with a single separator
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
