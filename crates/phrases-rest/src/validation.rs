//! Translation of validator violations into client-facing messages.

use validator::ValidationErrors;

/// Flattens field violations into "The <field> field <constraint>"
/// messages, one per violated constraint, sorted for stable output.
pub fn field_violation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        let field_name = display_field_name(field.as_ref());
        for err in field_errors {
            let constraint = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("is invalid ({})", err.code));
            messages.push(format!("The {} field {}", field_name, constraint));
        }
    }

    messages.sort();
    messages
}

// Reference fields are exposed as `<relation>_id`; clients know them by
// the relation name.
fn display_field_name(field: &str) -> &str {
    field.strip_suffix("_id").unwrap_or(field)
}
