//! Validation of raw field edits coming from the WebUI.
//!
//! The browser sends `{"field": "<name>", "value": <any JSON>}`.  Before the
//! live configuration is touched, [`parse_update`] checks that:
//!
//! 1. `field` is one of the four managed names → otherwise [`UpdateError::UnknownField`].
//! 2. For `*_list_type`, `value` is exactly `"whitelist"` or `"blacklist"`
//!    → otherwise [`UpdateError::InvalidEnum`].
//! 3. For `*_list`, `value` is an array → otherwise [`UpdateError::InvalidType`],
//!    and *every* element coerces to an integer → otherwise
//!    [`UpdateError::InvalidElement`].
//!
//! # All-or-nothing coercion
//!
//! The whole array is coerced into a fresh `Vec<i64>` first.  If any element
//! fails, the partially built vector is dropped and nothing reaches the
//! configuration.  A returned [`FieldUpdate`] is therefore always safe to
//! apply.
//!
//! # What counts as an integer?
//!
//! | JSON element      | Result                                  |
//! |-------------------|-----------------------------------------|
//! | `123`             | `123`                                   |
//! | `12.9`            | `12` (truncated toward zero)            |
//! | `"456"`, `" -7 "` | `456`, `-7` (surrounding spaces ignored)|
//! | `"1_000"`         | `1000` (single `_` between digits)      |
//! | `"abc"`, `"1.5"`, `"1__0"`, `"_1"` | rejected               |
//! | `true`, `null`, `[]`, `{}` | rejected                       |

use serde_json::Value;
use thiserror::Error;

use super::chat::{ChatField, ListType, Scope};

/// Why a proposed edit was refused.  No variant is ever produced after the
/// configuration has been modified.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpdateError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{field} must be whitelist or blacklist, got {value}")]
    InvalidEnum { field: ChatField, value: String },

    #[error("{field} must be an array")]
    InvalidType { field: ChatField },

    #[error("{field} elements must be numeric (element {index} is {found})")]
    InvalidElement {
        field: ChatField,
        index: usize,
        found: String,
    },
}

/// A validated edit, ready for [`crate::ChatConfig::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    ListType(Scope, ListType),
    List(Scope, Vec<i64>),
}

impl FieldUpdate {
    /// The field this update targets.
    pub fn field(&self) -> ChatField {
        match self {
            Self::ListType(Scope::Group, _) => ChatField::GroupListType,
            Self::ListType(Scope::Private, _) => ChatField::PrivateListType,
            Self::List(Scope::Group, _) => ChatField::GroupList,
            Self::List(Scope::Private, _) => ChatField::PrivateList,
        }
    }

    /// Human-readable confirmation shown in the WebUI after a save.
    pub fn summary(&self) -> String {
        match self {
            Self::ListType(_, mode) => format!("{} updated to: {mode}", self.field()),
            Self::List(Scope::Group, ids) => {
                format!("{} updated, {} groups", self.field(), ids.len())
            }
            Self::List(Scope::Private, ids) => {
                format!("{} updated, {} users", self.field(), ids.len())
            }
        }
    }
}

/// Validates `raw` against the rules for `field_name`.
///
/// # Errors
///
/// See the module documentation for the full list of rejection rules.
pub fn parse_update(field_name: &str, raw: &Value) -> Result<FieldUpdate, UpdateError> {
    let field = ChatField::from_name(field_name)
        .ok_or_else(|| UpdateError::UnknownField(field_name.to_string()))?;

    if field.is_list_type() {
        let mode = raw
            .as_str()
            .and_then(ListType::from_literal)
            .ok_or_else(|| UpdateError::InvalidEnum {
                field,
                value: raw.to_string(),
            })?;
        return Ok(FieldUpdate::ListType(field.scope(), mode));
    }

    let elements = raw.as_array().ok_or(UpdateError::InvalidType { field })?;
    let ids = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            coerce_id(element).ok_or_else(|| UpdateError::InvalidElement {
                field,
                index,
                found: element.to_string(),
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    Ok(FieldUpdate::List(field.scope(), ids))
}

/// Coerces one list element into a chat identifier.
fn coerce_id(element: &Value) -> Option<i64> {
    match element {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_float)),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

/// Base-10 integer with an optional sign and single underscores allowed
/// between digits (`"1_000"`, `"-2_5"`).
fn parse_decimal(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return None;
    }
    text.replace('_', "").parse::<i64>().ok()
}

fn truncate_float(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
