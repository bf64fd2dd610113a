//! Options loading and suggestion tests.

use std::io::Write;

use tincture::Error;
use tincture::color::HexFormat;
use tincture::config::{NamedColors, Options};
use tincture::suggest::Suggester;
use tincture::syntax::casing::Casing;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create options file");
    file.write_all(content.as_bytes()).expect("Failed to write options file");
    path
}

#[test]
fn test_load_toml_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "tincture.toml",
        "hex-format = \"RRGGBB\"\nnamed-colors = \"always\"\nproperty-casing = \"camelCase\"\n",
    );

    let options = Options::load(&path).unwrap();
    assert_eq!(options.hex_format, HexFormat::Rrggbb);
    assert_eq!(options.named_colors, NamedColors::Always);
    assert_eq!(options.property_casing, Casing::Camel);
    assert!(!options.allow_useless_alpha);
}

#[test]
fn test_load_json_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "tincture.json", r#"{ "allow-useless-alpha": true }"#);

    let options = Options::load(&path).unwrap();
    assert!(options.allow_useless_alpha);
    assert_eq!(options.hex_format, HexFormat::Default);
}

#[test]
fn test_load_errors() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    assert!(matches!(Options::load(&missing), Err(Error::Io { .. })));

    let yaml = write_file(&dir, "tincture.yaml", "hex-format: RGB\n");
    assert!(matches!(Options::load(&yaml), Err(Error::UnsupportedFormat { .. })));

    let broken = write_file(&dir, "broken.json", "{ \"hex-format\": ");
    assert!(matches!(Options::load(&broken), Err(Error::Json(_))));

    let unknown = write_file(&dir, "unknown.toml", "hex-format = \"short\"\n");
    assert!(matches!(Options::load(&unknown), Err(Error::Toml(_))));
}

#[test]
fn test_suggester_from_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "tincture.toml", "named-colors = \"always\"\n");
    let suggester = Suggester::new(Options::load(&path).unwrap());

    assert_eq!(suggester.color("#ff0000").as_deref(), Some("red"));
    assert_eq!(suggester.color("rgba(0, 0, 0, 1)").as_deref(), Some("black"));
    assert_eq!(suggester.color("rgba(0, 0, 0, .5)"), None);
    assert_eq!(suggester.color("red"), None);
}

#[test]
fn test_useless_alpha_can_be_allowed() {
    let suggester = Suggester::new(Options {
        allow_useless_alpha: true,
        ..Options::default()
    });
    assert_eq!(suggester.color("rgba(0, 0, 0, 1)"), None);

    let suggester = Suggester::default();
    assert_eq!(suggester.color("rgba(0, 0, 0, 1)").as_deref(), Some("rgb(0, 0, 0)"));
    assert_eq!(suggester.color("hsl(0 0% 0% / 100%)").as_deref(), Some("hsl(0 0% 0%)"));
}

#[test]
fn test_color_errors_convert() {
    let color = tincture::color::Color::parse("rgb(1, 2)");
    let result: tincture::Result<String> =
        color.try_to_hex(HexFormat::Default).map_err(Error::from);
    let error = result.unwrap_err();
    assert!(matches!(error, Error::Color(_)));
    assert_eq!(error.to_string(), "color 'rgb(1, 2)' is incomplete");
}
