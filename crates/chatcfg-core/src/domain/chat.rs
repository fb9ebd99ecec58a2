//! Chat list configuration: the four fields the WebUI manages.
//!
//! In the configuration file these live under the `[chat]` table:
//!
//! ```toml
//! [chat]
//! group_list_type = "whitelist"
//! group_list = [123456, 789012]
//! private_list_type = "blacklist"
//! private_list = []
//! ```
//!
//! `serde` maps that table onto [`ChatConfig`].  The struct-level
//! `#[serde(default)]` means any missing key falls back to the value in
//! [`ChatConfig::default`], so a partially written table still loads.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::update::FieldUpdate;

/// How a scope list is interpreted.
///
/// Serialized as the lowercase literal (`"whitelist"` / `"blacklist"`), which
/// is also the only spelling accepted from the WebUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Only identifiers present in the list are served.
    #[default]
    Whitelist,
    /// Identifiers present in the list are ignored.
    Blacklist,
}

impl ListType {
    /// Parses an exact, case-sensitive literal.
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "whitelist" => Some(Self::Whitelist),
            "blacklist" => Some(Self::Blacklist),
            _ => None,
        }
    }

    /// The literal written to disk and returned over the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whitelist => "whitelist",
            Self::Blacklist => "blacklist",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two chat scopes that carry their own list and list mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Group,
    Private,
}

/// The closed set of fields the WebUI may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatField {
    GroupListType,
    GroupList,
    PrivateListType,
    PrivateList,
}

impl ChatField {
    /// All managed fields, in the order they appear in snapshots and on disk.
    pub const ALL: [ChatField; 4] = [
        ChatField::GroupListType,
        ChatField::GroupList,
        ChatField::PrivateListType,
        ChatField::PrivateList,
    ];

    /// Looks up a field by its wire/TOML key.  Returns `None` for anything
    /// outside the managed set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// The key used both in the JSON API and in the `[chat]` table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GroupListType => "group_list_type",
            Self::GroupList => "group_list",
            Self::PrivateListType => "private_list_type",
            Self::PrivateList => "private_list",
        }
    }

    pub fn scope(self) -> Scope {
        match self {
            Self::GroupListType | Self::GroupList => Scope::Group,
            Self::PrivateListType | Self::PrivateList => Scope::Private,
        }
    }

    /// `true` for the `*_list_type` fields.
    pub fn is_list_type(self) -> bool {
        matches!(self, Self::GroupListType | Self::PrivateListType)
    }
}

impl fmt::Display for ChatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chat section of the application configuration.
///
/// One instance is created at process start and shared for the lifetime of
/// the process; the WebUI mutates it in place through [`ChatConfig::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Mode of [`ChatConfig::group_list`].
    pub group_list_type: ListType,
    /// Group chat identifiers, in the order the operator entered them.
    pub group_list: Vec<i64>,
    /// Mode of [`ChatConfig::private_list`].
    pub private_list_type: ListType,
    /// Private chat identifiers, in the order the operator entered them.
    pub private_list: Vec<i64>,
}

impl ChatConfig {
    /// Applies an already-validated update.
    ///
    /// Assignment is total: once a [`FieldUpdate`] exists there is nothing
    /// left that can fail.  Lists are replaced wholesale, never merged.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::ListType(Scope::Group, mode) => self.group_list_type = mode,
            FieldUpdate::ListType(Scope::Private, mode) => self.private_list_type = mode,
            FieldUpdate::List(Scope::Group, ids) => self.group_list = ids,
            FieldUpdate::List(Scope::Private, ids) => self.private_list = ids,
        }
    }

    pub fn list_type(&self, scope: Scope) -> ListType {
        match scope {
            Scope::Group => self.group_list_type,
            Scope::Private => self.private_list_type,
        }
    }

    pub fn list(&self, scope: Scope) -> &[i64] {
        match scope {
            Scope::Group => &self.group_list,
            Scope::Private => &self.private_list,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modes_are_whitelist_with_empty_lists() {
        let cfg = ChatConfig::default();
        assert_eq!(cfg.group_list_type, ListType::Whitelist);
        assert_eq!(cfg.private_list_type, ListType::Whitelist);
        assert!(cfg.group_list.is_empty());
        assert!(cfg.private_list.is_empty());
    }

    #[test]
    fn test_list_type_literals_are_case_sensitive() {
        assert_eq!(ListType::from_literal("whitelist"), Some(ListType::Whitelist));
        assert_eq!(ListType::from_literal("blacklist"), Some(ListType::Blacklist));
        assert_eq!(ListType::from_literal("Whitelist"), None);
        assert_eq!(ListType::from_literal("BLACKLIST"), None);
        assert_eq!(ListType::from_literal(" whitelist"), None);
    }

    #[test]
    fn test_field_names_round_trip_through_from_name() {
        for field in ChatField::ALL {
            assert_eq!(ChatField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(ChatField::from_name("bogus"), None);
        assert_eq!(ChatField::from_name("GROUP_LIST"), None);
    }

    #[test]
    fn test_field_scope_and_kind() {
        assert_eq!(ChatField::GroupList.scope(), Scope::Group);
        assert_eq!(ChatField::PrivateListType.scope(), Scope::Private);
        assert!(ChatField::GroupListType.is_list_type());
        assert!(!ChatField::PrivateList.is_list_type());
    }

    #[test]
    fn test_apply_replaces_list_wholesale() {
        // Arrange
        let mut cfg = ChatConfig {
            group_list: vec![1, 2, 3],
            ..ChatConfig::default()
        };

        // Act
        cfg.apply(FieldUpdate::List(Scope::Group, vec![9]));

        // Assert – replaced, not appended
        assert_eq!(cfg.group_list, vec![9]);
        assert!(cfg.private_list.is_empty());
    }

    #[test]
    fn test_apply_list_type_touches_only_its_scope() {
        let mut cfg = ChatConfig::default();

        cfg.apply(FieldUpdate::ListType(Scope::Private, ListType::Blacklist));

        assert_eq!(cfg.private_list_type, ListType::Blacklist);
        assert_eq!(cfg.group_list_type, ListType::Whitelist);
        assert_eq!(cfg.list_type(Scope::Private), ListType::Blacklist);
    }

    #[test]
    fn test_snapshot_serializes_as_flat_json_object() {
        // Arrange
        let cfg = ChatConfig {
            group_list_type: ListType::Blacklist,
            group_list: vec![111, 222],
            private_list_type: ListType::Whitelist,
            private_list: vec![],
        };

        // Act
        let json = serde_json::to_value(&cfg).expect("serialize");

        // Assert
        assert_eq!(
            json,
            serde_json::json!({
                "group_list_type": "blacklist",
                "group_list": [111, 222],
                "private_list_type": "whitelist",
                "private_list": [],
            })
        );
    }

    #[test]
    fn test_partial_chat_table_deserializes_with_defaults() {
        // Arrange: only one key present
        let text = r#"group_list = [5, 6]"#;

        // Act
        let cfg: ChatConfig = toml::from_str(text).expect("deserialize");

        // Assert
        assert_eq!(cfg.group_list, vec![5, 6]);
        assert_eq!(cfg.group_list_type, ListType::Whitelist);
        assert!(cfg.private_list.is_empty());
    }

    #[test]
    fn test_unknown_list_type_literal_is_rejected_when_loading() {
        let text = r#"group_list_type = "greylist""#;
        let result: Result<ChatConfig, toml::de::Error> = toml::from_str(text);
        assert!(result.is_err());
    }
}
