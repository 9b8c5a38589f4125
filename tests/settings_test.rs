//! Tests for configuration loading and facade construction from settings

use callgate::catalog::Catalog;
use callgate::config::Settings;
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
credential = 911

[logging]
level = "debug"
format = "json"

[rest]
name = "contentd"
url = "amc_url"

[[rpc]]
family = "onev"
address = "onev_url"

[[rpc]]
family = "cob"
address = "cob_url"

[[rpc]]
family = "plc"
address = "plc_url"
"#,
    );

    let settings = Settings::load_from_path(file.path()).unwrap();
    settings.validate().unwrap();

    assert_eq!(settings.credential, Some(911));
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.rpc.len(), 3);

    let facade = settings.facade(&Catalog::builtin()).unwrap();
    assert!(facade.get_cdn_prefix(5).unwrap().is_authorized());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let settings = Settings::load_from_path("does/not/exist.toml").unwrap();
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.rest.name, "contentd");
    assert!(settings.rpc.is_empty());
}

#[test]
fn test_facade_requires_all_rpc_families() {
    let file = write_config(
        r#"
[rest]
name = "contentd"
url = "amc_url"

[[rpc]]
family = "onev"
address = "onev_url"
"#,
    );

    let settings = Settings::load_from_path(file.path()).unwrap();
    assert!(settings.facade(&Catalog::builtin()).is_err());
}
