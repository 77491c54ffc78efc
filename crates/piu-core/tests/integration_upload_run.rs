//! Integration test: full simulated upload run against a temp working dir.
//!
//! Drives the public API end to end — catalog in, manifest file out — and
//! asserts the exact bytes the tool is contracted to produce.

use piu_core::catalog::builtin_catalog;
use piu_core::config::PiuConfig;
use piu_core::manifest::UrlManifest;
use piu_core::uploader::simulate_uploads;
use tempfile::tempdir;

const EXPECTED_JSON: &str = "{\n    \
    \"free_shipping\": \"https://res.cloudinary.com/your-cloud-name/image/upload/v1234567890/manus-promo-icons/free_shipping.png\",\n    \
    \"percentage\": \"https://res.cloudinary.com/your-cloud-name/image/upload/v1234567890/manus-promo-icons/percentage.png\",\n    \
    \"buy_x_get_y\": \"https://res.cloudinary.com/your-cloud-name/image/upload/v1234567890/manus-promo-icons/buy_x_get_y.png\",\n    \
    \"default\": \"https://res.cloudinary.com/your-cloud-name/image/upload/v1234567890/manus-promo-icons/default.png\",\n    \
    \"time_range\": \"https://res.cloudinary.com/your-cloud-name/image/upload/v1234567890/manus-promo-icons/time_range.png\"\n}";

#[test]
fn upload_run_writes_exact_manifest_and_leaves_no_placeholders() {
    let work_dir = tempdir().unwrap();
    let cfg = PiuConfig::default();
    let icons = builtin_catalog();

    let mut progress_lines = Vec::new();
    let manifest = simulate_uploads(
        &icons,
        &cfg.base_url,
        &cfg.folder,
        work_dir.path(),
        |icon, url| progress_lines.push(format!("Uploaded {} to: {}", icon.name, url)),
    )
    .expect("simulate_uploads");

    let output_path = work_dir.path().join(&cfg.output_filename);
    manifest.save(&output_path).expect("save manifest");

    // One progress line per icon, in catalog order.
    assert_eq!(progress_lines.len(), 5);
    assert_eq!(
        progress_lines[0],
        "Uploaded TruckIcon to: https://res.cloudinary.com/your-cloud-name/image/upload/v1234567890/manus-promo-icons/free_shipping.png"
    );

    // Exact bytes on disk, 4-space indent, no trailing newline.
    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, EXPECTED_JSON);

    // The manifest file is the only thing left in the working directory.
    let mut names: Vec<String> = std::fs::read_dir(work_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, [cfg.output_filename.clone()]);

    // The file round-trips to the in-memory mapping.
    let loaded = UrlManifest::load(&output_path).unwrap();
    assert_eq!(loaded, manifest);
}

#[test]
fn two_runs_produce_byte_identical_output() {
    let cfg = PiuConfig::default();
    let icons = builtin_catalog();

    let run_once = || {
        let work_dir = tempdir().unwrap();
        let manifest =
            simulate_uploads(&icons, &cfg.base_url, &cfg.folder, work_dir.path(), |_, _| {})
                .unwrap();
        let path = work_dir.path().join(&cfg.output_filename);
        manifest.save(&path).unwrap();
        std::fs::read(&path).unwrap()
    };

    assert_eq!(run_once(), run_once());
}
