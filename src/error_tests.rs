use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = ChartOptsError::Config("unsupported version".to_string());
    assert_eq!(err.to_string(), "Configuration error: unsupported version");
}

#[test]
fn error_display_file_read() {
    let err = ChartOptsError::FileRead {
        path: PathBuf::from("chart.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("chart.toml"));
}

#[test]
fn error_file_read_keeps_source() {
    use std::error::Error as _;

    let err = ChartOptsError::FileRead {
        path: PathBuf::from("chart.toml"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let source = err.source().expect("source should be set");
    assert_eq!(source.to_string(), "denied");
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: ChartOptsError = io_err.into();
    assert!(matches!(err, ChartOptsError::Io(_)));
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn error_from_toml() {
    let toml_err = toml::from_str::<toml::Value>("invalid [[[ toml").unwrap_err();
    let err: ChartOptsError = toml_err.into();
    assert!(matches!(err, ChartOptsError::TomlParse(_)));
    assert!(err.to_string().starts_with("TOML parse error"));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: ChartOptsError = json_err.into();
    assert!(matches!(err, ChartOptsError::JsonSerialize(_)));
}
