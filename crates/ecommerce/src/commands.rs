//! Call-expression templates for the `ga()` command queue.
//!
//! String arguments are emitted as JSON string literals, so quotes and
//! control characters inside them are escaped. Field-object payloads are
//! inserted verbatim: they are expected to be JSON already.

use ga_tracking_core::{TrackingError, TrackingResult};

fn quote(value: &str) -> TrackingResult<String> {
    Ok(serde_json::to_string(value)?)
}

fn require_non_empty(value: &str, what: &str) -> TrackingResult<()> {
    if value.is_empty() {
        return Err(TrackingError::invalid(format!("{what} must not be empty")));
    }
    Ok(())
}

/// `ga("<command>");` or `ga("<command>",<payload>);` when a non-empty
/// payload is given.
pub fn format_command(command: &str, payload: Option<&str>) -> TrackingResult<String> {
    require_non_empty(command, "command")?;
    let command = quote(command)?;

    Ok(match payload.filter(|p| !p.is_empty()) {
        Some(payload) => format!("ga({command},{payload});"),
        None => format!("ga({command});"),
    })
}

/// `ga("ec:setAction","<action>"[,<fieldObject>]);`
pub fn format_set_action(action: &str, field_object: Option<&str>) -> TrackingResult<String> {
    require_non_empty(action, "action")?;
    let action = quote(action)?;

    Ok(match field_object.filter(|f| !f.is_empty()) {
        Some(field_object) => format!("ga(\"ec:setAction\",{action},{field_object});"),
        None => format!("ga(\"ec:setAction\",{action});"),
    })
}

/// `ga("send", "event", "<category>", "<action>"[, "<label>"][, <value>]);`
///
/// The label is omitted when empty, the value when negative.
pub fn format_event(
    category: &str,
    action: &str,
    label: Option<&str>,
    value: Option<i32>,
) -> TrackingResult<String> {
    require_non_empty(category, "event category")?;
    require_non_empty(action, "event action")?;

    let mut script = format!("ga(\"send\", \"event\", {}, {}", quote(category)?, quote(action)?);
    if let Some(label) = label.filter(|l| !l.is_empty()) {
        script.push_str(", ");
        script.push_str(&quote(label)?);
    }
    if let Some(value) = value.filter(|v| *v >= 0) {
        script.push_str(&format!(", {value}"));
    }
    script.push_str(");");

    Ok(script)
}

/// `ga("require","<library>");`
pub fn format_require(library: &str) -> TrackingResult<String> {
    require_non_empty(library, "library")?;
    Ok(format!("ga(\"require\",{});", quote(library)?))
}
