//! Integration tests for the edit pipeline: `parse_update` + `ChatConfig::apply`.
//!
//! These mirror how the WebUI uses the crate: validate first, apply only on
//! success, and check the configuration afterwards.

use chatcfg_core::{parse_update, ChatConfig, ListType, UpdateError};
use serde_json::{json, Value};

/// Validates and applies in one step, exactly as the store does.
fn edit(cfg: &mut ChatConfig, field: &str, raw: Value) -> Result<(), UpdateError> {
    let update = parse_update(field, &raw)?;
    cfg.apply(update);
    Ok(())
}

fn seeded() -> ChatConfig {
    ChatConfig {
        group_list_type: ListType::Blacklist,
        group_list: vec![10, 20],
        private_list_type: ListType::Whitelist,
        private_list: vec![30],
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_every_valid_mode_is_visible_after_update() {
    for literal in ["whitelist", "blacklist"] {
        for field in ["group_list_type", "private_list_type"] {
            let mut cfg = seeded();
            edit(&mut cfg, field, json!(literal)).expect("valid literal");

            let snapshot = serde_json::to_value(&cfg).unwrap();
            assert_eq!(snapshot[field], json!(literal));
        }
    }
}

#[test]
fn test_other_strings_leave_mode_unchanged() {
    let rejected = ["greylist", "", "Whitelist", "black list", "whitelist ", "allow"];
    for literal in rejected {
        // Arrange
        let mut cfg = seeded();
        let before = cfg.clone();

        // Act
        let result = edit(&mut cfg, "group_list_type", json!(literal));

        // Assert
        assert!(
            matches!(result, Err(UpdateError::InvalidEnum { .. })),
            "{literal:?} must be rejected"
        );
        assert_eq!(cfg, before);
    }
}

#[test]
fn test_numeric_lists_are_stored_coerced_in_original_order() {
    let cases = [
        (json!([]), vec![]),
        (json!([5]), vec![5]),
        (json!(["111", "222", 333]), vec![111, 222, 333]),
        (json!([3, "2", 1, "2"]), vec![3, 2, 1, 2]),
        (json!(["-100", 9_007_199_254_740_993_i64]), vec![-100, 9_007_199_254_740_993]),
    ];

    for (raw, expected) in cases {
        let mut cfg = seeded();
        edit(&mut cfg, "group_list", raw.clone()).expect("numeric list");
        assert_eq!(cfg.group_list, expected, "input {raw}");
    }
}

#[test]
fn test_single_non_numeric_element_leaves_list_unchanged() {
    for position in 0..3 {
        // Arrange: one bad element at each position
        let mut elements = vec![json!(1), json!("2"), json!(3)];
        elements[position] = json!("not-a-number");
        let mut cfg = seeded();

        // Act
        let result = edit(&mut cfg, "private_list", Value::Array(elements));

        // Assert
        assert!(matches!(
            result,
            Err(UpdateError::InvalidElement { index, .. }) if index == position
        ));
        assert_eq!(cfg.private_list, vec![30]);
    }
}

#[test]
fn test_list_update_does_not_touch_other_fields() {
    let mut cfg = seeded();

    edit(&mut cfg, "private_list", json!([1, 2])).unwrap();

    assert_eq!(cfg.private_list, vec![1, 2]);
    assert_eq!(cfg.group_list, vec![10, 20]);
    assert_eq!(cfg.group_list_type, ListType::Blacklist);
    assert_eq!(cfg.private_list_type, ListType::Whitelist);
}

#[test]
fn test_unknown_field_performs_no_mutation() {
    let mut cfg = seeded();
    let before = cfg.clone();

    let result = edit(&mut cfg, "bogus", json!(1));

    assert_eq!(result, Err(UpdateError::UnknownField("bogus".to_string())));
    assert_eq!(cfg, before);
}
