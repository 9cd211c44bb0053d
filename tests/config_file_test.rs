use pizza_me::config::file::FileConfig;
use pizza_me::config::{CliConfig, Settings, DEFAULT_LOCATION_ENDPOINT};
use pizza_me::SortOrder;
use std::io::Write;
use tempfile::NamedTempFile;

fn cli_with_config(path: std::path::PathBuf) -> CliConfig {
    CliConfig {
        zip: None,
        location_endpoint: None,
        search_endpoint: None,
        timeout_seconds: None,
        limit: None,
        sort: None,
        interactive: false,
        config: Some(path),
        verbose: false,
    }
}

#[test]
fn file_values_fill_in_for_missing_flags() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [endpoints]
        search = "https://pizza.example.com/v2/search"

        [search]
        timeout_seconds = 30
        limit = 5

        [display]
        sort = "name"
        "#
    )
    .unwrap();

    let settings = Settings::resolve(cli_with_config(file.path().to_path_buf())).unwrap();

    assert_eq!(settings.search_endpoint, "https://pizza.example.com/v2/search");
    assert_eq!(settings.location_endpoint, DEFAULT_LOCATION_ENDPOINT);
    assert_eq!(settings.timeout_seconds, 30);
    assert_eq!(settings.limit, Some(5));
    assert_eq!(settings.sort, SortOrder::Name);
}

#[test]
fn partial_file_is_fine() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [display]
        sort = "distance"
        "#
    )
    .unwrap();

    let settings = Settings::resolve(cli_with_config(file.path().to_path_buf())).unwrap();
    assert_eq!(settings.sort, SortOrder::Distance);
    assert!(settings.limit.is_none());
}

#[test]
fn missing_file_is_a_config_error() {
    let result = FileConfig::load(std::path::Path::new("/nonexistent/pizza-me.toml"));
    assert!(result.is_err());
}

#[test]
fn unparseable_file_is_a_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "this is [ not toml").unwrap();
    assert!(FileConfig::load(file.path()).is_err());
}
