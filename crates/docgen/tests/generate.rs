use std::fs;
use std::path::Path;

use docgen::app::generate::Generator;
use docgen::infra::config::Config;

const ICON_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot a real png but stable bytes";

const README_MD: &str = "\
<!-- BEGIN:FR -->
# Gestionnaire de batterie

## Aperçu

Bonjour, ceci est la documentation.

<!-- END:FR -->
<!-- BEGIN:EN -->
# Battery Manager

## Overview

Hello, this is the documentation.

<!-- END:EN -->
";

const REFERENCES_MD: &str = "\
<!-- BEGIN:FR -->
## Références

| Sujet | Lien |
| --- | --- |
| ACPI | spec |

<!-- END:FR -->
<!-- BEGIN:EN -->
## References

| Topic | Link |
| --- | --- |
| ACPI | spec |

<!-- END:EN -->
";

fn write_project(root: &Path) {
    fs::create_dir_all(root.join("docs")).expect("docs dir");
    fs::create_dir_all(root.join("resources")).expect("resources dir");
    fs::write(root.join("docs/README.md"), README_MD).expect("README.md");
    fs::write(root.join("docs/REFERENCES.md"), REFERENCES_MD).expect("REFERENCES.md");
    fs::write(root.join("resources/icon.png"), ICON_BYTES).expect("icon.png");
}

#[test]
fn full_run_produces_pages_and_icon() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write_project(root);

    Generator::new(root, Config::default()).run().expect("run");

    let readme = fs::read_to_string(root.join("docs/README.html")).expect("README.html");
    assert!(readme.contains("<p>Bonjour, ceci est la documentation.</p>"));
    assert!(readme.contains("<p>Hello, this is the documentation.</p>"));
    assert!(readme.contains("<title>Battery Manager — README</title>"));
    assert!(readme.contains("<a href=\"README.html\" aria-current=\"page\">README</a>"));
    assert!(readme.contains("href=\"#aperçu\""));

    let references = fs::read_to_string(root.join("docs/REFERENCES.html")).expect("REFERENCES.html");
    assert!(references.contains("<table>"));
    assert!(references.contains("<a href=\"REFERENCES.html\" aria-current=\"page\">References</a>"));
    assert!(references.contains("<title>Battery Manager — References</title>"));

    let icon = fs::read(root.join("docs/icon.png")).expect("icon copied");
    assert_eq!(icon, ICON_BYTES);
}

#[test]
fn rerun_is_idempotent() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write_project(root);

    let generator = Generator::new(root, Config::default());
    generator.run().expect("first run");

    let first_readme = fs::read(root.join("docs/README.html")).unwrap();
    let first_references = fs::read(root.join("docs/REFERENCES.html")).unwrap();
    let first_icon = fs::read(root.join("docs/icon.png")).unwrap();

    generator.run().expect("second run");

    assert_eq!(fs::read(root.join("docs/README.html")).unwrap(), first_readme);
    assert_eq!(
        fs::read(root.join("docs/REFERENCES.html")).unwrap(),
        first_references
    );
    assert_eq!(fs::read(root.join("docs/icon.png")).unwrap(), first_icon);
}

#[test]
fn missing_language_block_aborts_that_page() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write_project(root);
    // Break the EN block of REFERENCES.md only.
    fs::write(
        root.join("docs/REFERENCES.md"),
        "<!-- BEGIN:FR -->seulement du français<!-- END:FR -->",
    )
    .unwrap();

    let err = Generator::new(root, Config::default()).run().unwrap_err();
    assert!(err.to_string().contains("EN"));
    assert!(err.to_string().contains("REFERENCES.md"));

    // README was rendered before the failure; REFERENCES never was.
    assert!(root.join("docs/README.html").exists());
    assert!(!root.join("docs/REFERENCES.html").exists());
}

#[test]
fn missing_source_document_fails_with_its_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write_project(root);
    fs::remove_file(root.join("docs/README.md")).unwrap();

    let err = Generator::new(root, Config::default()).run().unwrap_err();
    assert!(err.to_string().contains("README.md"));
    assert!(!root.join("docs/README.html").exists());
}

#[test]
fn configured_branding_flows_into_pages() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write_project(root);
    fs::write(
        root.join("docgen.toml"),
        r#"
[site]
name = "Power Station"
subtitle = "Manuals"
"#,
    )
    .unwrap();

    let config = Config::load(root, None).expect("config");
    Generator::new(root, config).run().expect("run");

    let readme = fs::read_to_string(root.join("docs/README.html")).unwrap();
    assert!(readme.contains("<title>Power Station — README</title>"));
    assert!(readme.contains("<div class=\"subtitle\">Manuals</div>"));
}
