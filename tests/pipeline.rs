//! End-to-end runs through settings, rendering, and PNG output.

use std::collections::HashSet;
use std::fs;

use hex_tessellator::app;
use hex_tessellator::error::{AppError, SettingsError};
use hex_tessellator::render::AntiAlias;
use hex_tessellator::settings::Settings;

fn tiny(dir: &std::path::Path) -> Settings {
    Settings {
        width: 96,
        height: 64,
        circumradius: 10.0,
        margin: 2.0,
        line_width: 2,
        color_fill: "255,255,0".into(),
        color_line: "red".into(),
        color_background: "#000000".into(),
        antialias: AntiAlias::Off,
        file: dir.join("grid"),
        ..Settings::default()
    }
}

// ── rendering ───────────────────────────────────────────────────────

#[test]
fn renders_requested_size_with_palette_colors() {
    let dir = tempfile::tempdir().unwrap();
    let summary = app::run(&tiny(dir.path()), None).unwrap();

    let image = image::open(dir.path().join("grid.png")).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (96, 64));
    assert_eq!(image.get_pixel(48, 32).0, [255, 255, 0]);
    assert!(image.pixels().any(|p| p.0 == [255, 0, 0]));
    assert!(summary.layers >= 1);
    assert_eq!(summary.polygon_count % 2, 0);
}

#[test]
fn supersampled_render_keeps_requested_size() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        antialias: AntiAlias::Medium,
        ..tiny(dir.path())
    };
    let summary = app::run(&settings, None).unwrap();
    let image = image::open(&summary.output).unwrap();
    assert_eq!((image.width(), image.height()), (96, 64));
}

#[test]
fn full_cull_leaves_background_only() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        circumradius: 200.0,
        layers: 1,
        cull: true,
        ..tiny(dir.path())
    };
    let summary = app::run(&settings, None).unwrap();
    assert_eq!(summary.polygon_count, 0);
    let image = image::open(&summary.output).unwrap().to_rgb8();
    assert!(image.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn bad_color_fails_without_writing_image() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        color_line: "300,0,0".into(),
        ..tiny(dir.path())
    };
    assert!(matches!(app::run(&settings, None), Err(AppError::Color(_))));
    assert!(!dir.path().join("grid.png").exists());
}

// ── settings files ──────────────────────────────────────────────────

#[test]
fn exported_settings_reproduce_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let original = tiny(dir.path());
    let first = app::run(&original, Some(dir.path().join("saved").as_path())).unwrap();
    let (exported, _) = first.exported.unwrap();
    assert_eq!(exported, dir.path().join("saved.json"));

    let imported = Settings::import(&dir.path().join("saved")).unwrap();
    let restored = Settings::default().merge(imported, &HashSet::new());
    assert_eq!(restored, original);

    let second = app::run(&restored, None).unwrap();
    assert_eq!(
        fs::read(&first.output).unwrap(),
        fs::read(&second.output).unwrap()
    );
}

#[test]
fn command_line_beats_imported_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(&path, r#"{"width": 40, "height": 30, "antialias": "low"}"#).unwrap();

    let cli = Settings {
        width: 50,
        ..tiny(dir.path())
    };
    let explicit: HashSet<String> = ["width".to_string()].into();
    let merged = cli.merge(Settings::import(&path).unwrap(), &explicit);
    assert_eq!((merged.width, merged.height), (50, 30));
    assert_eq!(merged.antialias, AntiAlias::Low);

    let summary = app::run(&merged, None).unwrap();
    let image = image::open(&summary.output).unwrap();
    assert_eq!((image.width(), image.height()), (50, 30));
}

#[test]
fn missing_import_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::import(&dir.path().join("absent")).unwrap_err();
    match err {
        SettingsError::NotFound(path) => assert_eq!(path, dir.path().join("absent.json")),
        other => panic!("unexpected error: {other}"),
    }
}
