//! Merging the in-memory chat configuration into a parsed TOML document.
//!
//! Only the four managed keys under `[chat]` are written.  For a key that
//! already exists, the new value inherits the old value's decor (the spacing
//! after `=` and any trailing `# comment`), and the key itself keeps its
//! leading comment lines.  Every other table, key and comment is left as it
//! was parsed.

use chatcfg_core::{ChatConfig, ChatField};
use toml_edit::{Array, DocumentMut, Item, Table, TableLike, Value};

use super::PersistError;

/// Name of the table holding the managed keys.
pub const CHAT_SECTION: &str = "chat";

/// Writes the four managed fields of `config` into `document`.
///
/// Creates an empty `[chat]` table first when the document has none.
///
/// # Errors
///
/// Returns [`PersistError::NotATable`] when `chat` exists but is a plain
/// value (e.g. `chat = 1`).  The document is not modified in that case.
pub fn merge_chat_section(document: &mut DocumentMut, config: &ChatConfig) -> Result<(), PersistError> {
    let root = document.as_table_mut();
    if !root.contains_key(CHAT_SECTION) {
        root.insert(CHAT_SECTION, Item::Table(Table::new()));
    }

    let item = root.get_mut(CHAT_SECTION).ok_or_else(not_a_table)?;
    if let Some(table) = item.as_table_mut() {
        // A table only known through `[chat.sub]` headers would otherwise
        // swallow the keys written below.
        table.set_implicit(false);
    }
    let chat = item.as_table_like_mut().ok_or_else(not_a_table)?;

    for field in ChatField::ALL {
        set_preserving_decor(chat, field.as_str(), field_value(config, field));
    }
    Ok(())
}

fn not_a_table() -> PersistError {
    PersistError::NotATable {
        key: CHAT_SECTION.to_string(),
    }
}

/// Renders one managed field as a TOML value.
fn field_value(config: &ChatConfig, field: ChatField) -> Value {
    let scope = field.scope();
    if field.is_list_type() {
        Value::from(config.list_type(scope).as_str())
    } else {
        Value::from(config.list(scope).iter().copied().collect::<Array>())
    }
}

/// Replaces `key` with `value`, keeping the old value's decor if present.
fn set_preserving_decor(table: &mut dyn TableLike, key: &str, mut value: Value) {
    if let Some(Item::Value(existing)) = table.get_mut(key) {
        *value.decor_mut() = existing.decor().clone();
        *existing = value;
        return;
    }
    table.insert(key, Item::Value(value));
}

// ── Tests ─────────────────────────────────────────────────────────────────────
