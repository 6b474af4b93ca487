//! `${VAR}` and `${VAR:-default}` references in configuration strings.
//!
//! Only the braced form is recognised, so a literal `$` in a URL survives.

use std::env::VarError;

use crate::ConfigError;

/// Replace environment references in `value`, naming `field` on failure.
///
/// Strings without `${` are left untouched.
pub(crate) fn expand_field(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), |name| {
        std::env::var(name).map(Some).map_err(|source| Unresolved {
            name: name.to_owned(),
            source,
        })
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: e.cause.describe(value),
    })?;

    *value = expanded.into_owned();
    Ok(())
}

/// Variable that could not be substituted.
struct Unresolved {
    name: String,
    source: VarError,
}

impl Unresolved {
    fn describe(&self, value: &str) -> String {
        let reason = match self.source {
            VarError::NotPresent => "is not set",
            VarError::NotUnicode(_) => "is not valid unicode",
        };
        format!("${{{}}} {reason} (in `{value}`)", self.name)
    }
}
