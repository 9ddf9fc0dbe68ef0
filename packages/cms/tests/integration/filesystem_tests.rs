use cms::storage::filesystem::FilesystemStorage;
use cms::test_utils::TestContext;
use cms::{AppConfig, Cms, Language, StorageConfig};
use std::sync::Arc;

fn open(dir: &std::path::Path) -> Cms {
    let config = AppConfig::local(StorageConfig::Filesystem {
        base_path: dir.to_string_lossy().to_string(),
    });
    Cms::from_config(config).expect("filesystem storage should open")
}

#[test]
fn test_documents_persist_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    let first = open(dir.path());
    first.preferences().set_language(Language::En).unwrap();
    first.lawyers().delete("3").unwrap();

    let second = open(dir.path());
    assert_eq!(second.preferences().language(), Language::En);
    let ids: Vec<_> = second
        .lawyers()
        .list()
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
    assert!(dir.path().join("lawyers.json").exists());
}

#[test]
fn test_filesystem_backend_with_test_config() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FilesystemStorage::new(dir.path()).unwrap());
    let cms = Cms::new(backend, TestContext::config());
    assert!(cms.session().login("superadmin", "admin123").is_ok());
    assert!(dir.path().join("loggedInUser.json").exists());
}
