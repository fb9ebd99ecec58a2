//! Save/reload behaviour of [`ConfigStore`] over a real file.

use std::sync::Arc;

use chatcfg_core::{ChatConfig, ListType};
use chatcfg_webui::application::{ConfigStore, SharedChatConfig};
use chatcfg_webui::infrastructure::storage::config_file::load_chat_config;
use chatcfg_webui::infrastructure::TomlFileStore;
use serde_json::json;
use tokio::sync::RwLock;

const CONFIG: &str = "\
[bot]
name = \"helper\"

[chat]
group_list_type = \"whitelist\"
group_list = []
private_list_type = \"whitelist\"
private_list = []
";

fn store_for(path: &std::path::Path) -> (SharedChatConfig, Arc<ConfigStore>) {
    let chat = load_chat_config(path).expect("load").into_inner();
    let config: SharedChatConfig = Arc::new(RwLock::new(chat));
    let store = Arc::new(ConfigStore::new(
        Arc::clone(&config),
        Arc::new(TomlFileStore::new(path)),
    ));
    (config, store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_restart_sees_every_saved_edit() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();
    let (_, store) = store_for(&path);

    // Act: a series of edits, then a fresh load as after a restart
    store.apply_update("group_list_type", &json!("blacklist")).await.unwrap();
    store.apply_update("group_list", &json!([7, "8"])).await.unwrap();
    store.apply_update("private_list", &json!([42.9])).await.unwrap();
    let (reloaded, _) = store_for(&path);

    // Assert
    let expected = ChatConfig {
        group_list_type: ListType::Blacklist,
        group_list: vec![7, 8],
        private_list_type: ListType::Whitelist,
        private_list: vec![42],
    };
    assert_eq!(*reloaded.read().await, expected);
    assert_eq!(store.get_snapshot().await, expected);
}

#[tokio::test]
async fn test_external_edits_to_other_sections_survive_a_save() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();
    let (_, store) = store_for(&path);

    // Act: the operator edits another section while the process runs
    let edited = CONFIG.replace("name = \"helper\"", "name = \"renamed\" # changed by hand");
    std::fs::write(&path, &edited).unwrap();
    store.apply_update("private_list_type", &json!("blacklist")).await.unwrap();

    // Assert
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("name = \"renamed\" # changed by hand"));
    assert!(text.contains("private_list_type = \"blacklist\""));
}

#[tokio::test]
async fn test_save_leaves_no_temporary_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();
    let (_, store) = store_for(&path);

    store.apply_update("group_list", &json!([1])).await.unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("config.toml")]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_leave_file_matching_memory() {
    for _ in 0..20 {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, CONFIG).unwrap();
        let (config, store) = store_for(&path);

        // Act: two racing edits of the same field
        let a = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.apply_update("group_list", &json!([1, 2])).await }
        });
        let b = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.apply_update("group_list", &json!([3, 4])).await }
        });
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        // Assert: exactly one value won, and file and memory agree on it
        let in_memory = config.read().await.group_list.clone();
        let on_disk = load_chat_config(&path).unwrap().into_inner().group_list;
        assert!(in_memory == vec![1, 2] || in_memory == vec![3, 4]);
        assert_eq!(on_disk, in_memory);
    }
}
