//! Integration tests for loading render defaults from disk.

mod common;

use chart_opts::config::{ConfigLoader, FileConfigLoader};
use chart_opts::options::{ChartOptions, GlobalOpts, TitleOpts};
use chart_opts::{ChartOptsError, OptionBuilder};
use common::{BASIC_CONFIG, TestFixture};

#[test]
fn load_from_path_reads_init_section() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("charts/defaults.toml", BASIC_CONFIG);

    let config = FileConfigLoader::new().load_from_path(&path).unwrap();

    assert_eq!(config.init.width, "1280px");
    assert_eq!(config.init.height, "720px");
    assert_eq!(config.init.theme, "dark");
    assert_eq!(config.init.renderer, "canvas");
}

#[test]
fn loaded_init_feeds_document_background() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("defaults.toml", BASIC_CONFIG);
    let config = FileConfigLoader::new().load_from_path(&path).unwrap();

    let doc = ChartOptions::new(config.init)
        .set_global_opts(GlobalOpts::new().title_opts(TitleOpts::new().title("Load")));

    let opts = doc.options();
    assert_eq!(opts["backgroundColor"], "#101010");
    assert_eq!(opts["title"], TitleOpts::new().title("Load").opts());
}

#[test]
fn missing_file_reports_path() {
    let fixture = TestFixture::new();
    let path = fixture.path().join("absent.toml");

    let err = FileConfigLoader::new().load_from_path(&path).unwrap_err();

    assert!(matches!(err, ChartOptsError::FileRead { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_toml_on_disk_is_parse_error() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("broken.toml", "invalid [[[ toml");

    let err = FileConfigLoader::new().load_from_path(&path).unwrap_err();

    assert!(matches!(err, ChartOptsError::TomlParse(_)));
}
