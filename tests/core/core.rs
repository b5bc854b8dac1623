use adr::core::config::{self, Configuration};
use adr::core::error::AdrError;
use adr::core::readme;
use adr::core::record::{self, create_record};
use adr::core::scaffold::{bootstrap, ensure_base_directory};
use adr::core::store::AdrStore;
use adr::core::template;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn initialized_store(working_dir: &Path) -> (AdrStore, Configuration) {
    let base = ensure_base_directory(None, working_dir).expect("ensure base dir");
    let config = bootstrap(&base.store, None).expect("bootstrap");
    (base.store, config)
}

#[test]
fn ensure_base_directory_creates_then_preserves() {
    let tmp = tempdir().expect("tempdir");
    let first = ensure_base_directory(Some(Path::new("adrs")), tmp.path()).expect("create");
    assert!(first.created);
    assert!(tmp.path().join("adrs").is_dir());

    let keep = tmp.path().join("adrs/0-keep-me.md");
    fs::write(&keep, "do not truncate").expect("write record");

    let second = ensure_base_directory(Some(Path::new("adrs")), tmp.path()).expect("reuse");
    assert!(!second.created);
    assert_eq!(second.store, first.store);
    assert_eq!(
        fs::read_to_string(&keep).expect("read record"),
        "do not truncate"
    );
}

#[test]
fn fresh_bootstrap_starts_counter_at_zero() {
    let tmp = tempdir().expect("tempdir");
    let (store, config) = initialized_store(tmp.path());

    assert_eq!(config.current_id, 0);
    assert_eq!(
        store.root,
        tmp.path().join("architecture-decision-records")
    );

    let raw = fs::read_to_string(store.config_path()).expect("read config.json");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("parse config.json");
    assert_eq!(json["current_id"], 0);
    assert_eq!(
        json["base_directory"],
        store.root.to_string_lossy().into_owned()
    );
    assert_eq!(
        fs::read_to_string(store.template_path()).expect("read template"),
        template::DEFAULT_TEMPLATE
    );
}

#[test]
fn bootstrap_twice_resets_counter() {
    let tmp = tempdir().expect("tempdir");
    let (store, mut config) = initialized_store(tmp.path());
    config.current_id = 9;
    config::save(&store, &config).expect("save");
    assert_eq!(config::load(&store).expect("load").current_id, 9);

    let reset = bootstrap(&store, None).expect("second bootstrap");
    assert_eq!(reset.current_id, 0);
    assert_eq!(config::load(&store).expect("load").current_id, 0);
}

#[test]
fn save_then_load_is_lossless() {
    let tmp = tempdir().expect("tempdir");
    let store = AdrStore::new(tmp.path());
    for config in [
        Configuration {
            base_directory: tmp.path().to_path_buf(),
            current_id: 42,
            readme_name: Some("/work/README.md".into()),
        },
        Configuration {
            base_directory: PathBuf::from("relative/adrs"),
            current_id: 0,
            readme_name: None,
        },
    ] {
        config::save(&store, &config).expect("save");
        let loaded = config::load(&store).expect("load");
        assert_eq!(loaded, config);
        config::save(&store, &loaded).expect("save again");
        assert_eq!(config::load(&store).expect("reload"), config);
    }
}

#[test]
fn load_without_config_is_not_found() {
    let tmp = tempdir().expect("tempdir");
    match config::load(&AdrStore::new(tmp.path())) {
        Err(AdrError::NotFoundError(msg)) => assert!(msg.contains("config.json")),
        other => panic!("expected NotFoundError, got {:?}", other),
    }
}

#[test]
fn create_record_end_to_end() {
    let tmp = tempdir().expect("tempdir");
    let (store, mut config) = initialized_store(tmp.path());

    let path = create_record(&store, &config, "some name").expect("create record");
    assert_eq!(path, store.root.join("0-some-name.md"));

    let body = fs::read_to_string(&path).expect("read record");
    assert!(body.contains("# some name"));
    assert!(body.contains("## Status\nProposed"));
    assert!(!body.contains("{{"));

    assert_eq!(config.advance().expect("advance"), 0);
    config::save(&store, &config).expect("save");
    assert_eq!(config::load(&store).expect("load").current_id, 1);
}

#[test]
fn create_record_uses_current_number_and_is_deterministic() {
    let tmp = tempdir().expect("tempdir");
    let (store, mut config) = initialized_store(tmp.path());
    config.current_id = 5;

    let first = create_record(&store, &config, "My Decision").expect("first");
    let again = create_record(&store, &config, "  My   Decision ").expect("again");
    assert_eq!(first.file_name().and_then(|n| n.to_str()), Some("5-My-Decision.md"));
    assert_eq!(first, again);

    let records: Vec<_> = fs::read_dir(&store.root)
        .expect("read dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("5-"))
        .collect();
    assert_eq!(records.len(), 1);
}

#[test]
fn create_record_honours_custom_template() {
    let tmp = tempdir().expect("tempdir");
    let (store, config) = initialized_store(tmp.path());
    fs::write(
        store.template_path(),
        "Title: {{ .Title }}\nNo: {{Number}}\nState: {{Status}}\n",
    )
    .expect("write template");

    let path = create_record(&store, &config, "Cache reads").expect("create");
    assert_eq!(
        fs::read_to_string(path).expect("read"),
        "Title: Cache reads\nNo: {{Number}}\nState: Proposed\n"
    );
}

#[test]
fn create_record_without_template_fails() {
    let tmp = tempdir().expect("tempdir");
    let (store, config) = initialized_store(tmp.path());
    fs::remove_file(store.template_path()).expect("remove template");

    let err = create_record(&store, &config, "Orphan").unwrap_err();
    assert!(matches!(err, AdrError::TemplateParseError(_)));
    assert!(!store.root.join("0-Orphan.md").exists());
}

#[test]
fn create_record_rejects_blank_title() {
    let tmp = tempdir().expect("tempdir");
    let (store, config) = initialized_store(tmp.path());
    let err = create_record(&store, &config, " \t ").unwrap_err();
    assert!(matches!(err, AdrError::ValidationError(_)));
    assert!(record::validate_title("ok").is_ok());
}

#[test]
fn create_record_into_missing_base_directory_is_write_error() {
    let tmp = tempdir().expect("tempdir");
    let (store, mut config) = initialized_store(tmp.path());
    config.base_directory = tmp.path().join("gone");

    let err = create_record(&store, &config, "Lost").unwrap_err();
    assert!(matches!(err, AdrError::WriteError { .. }));
}

#[test]
fn readme_index_is_appended_after_record() {
    let tmp = tempdir().expect("tempdir");
    let readme_path = tmp.path().join("README.md");
    fs::write(&readme_path, "# Service\n").expect("write readme");

    let (store, config) = initialized_store(tmp.path());
    readme::append_index_header(&readme_path).expect("header");
    let path = create_record(&store, &config, "Pick a queue").expect("create");
    readme::append_record_index(&readme_path, &path, "Pick a queue").expect("index");

    let body = fs::read_to_string(&readme_path).expect("read readme");
    assert_eq!(
        body,
        "# Service\n\n## ADR index\n* [Pick a queue](architecture-decision-records/0-Pick-a-queue.md)\n"
    );
}
