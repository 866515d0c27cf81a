//! Integration tests using TOML fixtures.
//!
//! This test harness loads test cases from TOML files in the `fixtures/`
//! directory and runs them through `refnum::renumber`. Each fixture gives
//! an input document, the expected output, and the warnings expected
//! along the way.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// A test fixture loaded from a TOML file.
#[derive(Debug, Deserialize)]
struct Fixture {
    /// Name of the test case
    name: String,
    /// Input document text
    input: String,
    /// Expected output text
    expected: String,
    /// Expected warnings, in order of emission
    #[serde(default)]
    warnings: Vec<String>,
}

/// Load all fixtures from a directory.
fn load_fixtures(dir: &Path) -> Vec<(String, Fixture)> {
    let mut fixtures = Vec::new();

    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();

        if path.extension().map_or(false, |e| e == "toml") {
            let content = fs::read_to_string(&path).unwrap();
            let fixture: Fixture = toml::from_str(&content).unwrap();
            let file = path.file_stem().unwrap().to_string_lossy().to_string();
            fixtures.push((file, fixture));
        }
    }

    fixtures
}

#[test]
fn test_fixtures() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let fixtures = load_fixtures(&dir);
    assert!(
        !fixtures.is_empty(),
        "no fixtures found in {}",
        dir.display()
    );

    for (file, fixture) in fixtures {
        let result = refnum::renumber(&fixture.input);

        assert_eq!(
            result.text, fixture.expected,
            "fixture '{}' ({}.toml): output mismatch",
            fixture.name, file
        );

        let warnings: Vec<String> = result.diagnostics.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            warnings, fixture.warnings,
            "fixture '{}' ({}.toml): warnings mismatch",
            fixture.name, file
        );
    }
}
