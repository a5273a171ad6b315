//! Rendering of field rule violations into a single user-facing message.
//!
//! Rules themselves are declared on the request DTOs with `validator`
//! attributes. Each DTO also lists its fields, in report order, together
//! with the name shown to clients.

use validator::{Validate, ValidationErrors};

/// A request DTO with declared field rules.
pub trait ValidatedRequest: Validate {
    /// `(field, display name)` pairs in the order violations are reported.
    const FIELDS: &'static [(&'static str, &'static str)];

    /// Runs every rule and joins all violations into one message.
    fn check(&self) -> Result<(), String> {
        self.validate()
            .map_err(|errors| describe_violations(&errors, Self::FIELDS))
    }
}

/// Builds one message per failing field, joined with `", "`.
///
/// Declared fields come first, in declaration order. Any other failing field
/// follows under its raw name, sorted, so the output is always deterministic.
pub fn describe_violations(
    errors: &ValidationErrors,
    fields: &[(&'static str, &'static str)],
) -> String {
    let field_errors = errors.field_errors();

    let mut undeclared: Vec<&str> = field_errors
        .keys()
        .map(|key| &**key)
        .filter(|key| !fields.iter().any(|(field, _)| field == key))
        .collect();
    undeclared.sort_unstable();

    let declared = fields.iter().map(|(field, name)| (*field, *name));
    let undeclared = undeclared.into_iter().map(|key| (key, key));

    declared
        .chain(undeclared)
        .filter_map(|(field, name)| {
            let first = field_errors.get(field)?.first()?;
            Some(rule_message(name, &first.code))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn rule_message(field: &str, code: &str) -> String {
    match code {
        "required" => format!("field {field} is a required field"),
        "url" => format!("field {field} is not a valid URL"),
        _ => format!("field {field} is not valid"),
    }
}
