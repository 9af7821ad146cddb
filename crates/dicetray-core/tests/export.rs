use dicetray_core::{MeshBuilder, ScadExporter, Solid};
use tempfile::TempDir;

fn sample_tray() -> Solid {
    Solid::rounded_cube([40.0, 20.0, 6.0], 2.0, true)
        - Solid::cube([10.0, 10.0, 6.0]).translate([5.0, 5.0, 2.0])
        - Solid::cylinder(8.0, 7.0).right(30.0)
}

#[test]
fn test_save_writes_named_file() {
    let dir = TempDir::new().unwrap();
    let exporter = ScadExporter::new(dir.path(), "tray", 250);

    let path = exporter.save(&sample_tray(), "-0").unwrap();

    assert_eq!(path, dir.path().join("tray-0.scad"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("$fn = 250;\n"));
    assert!(content.contains("use <rounded/roundCornersCube.scad>"));
    assert!(content.contains("difference() {"));
    assert_eq!(content.matches("cylinder(").count(), 1);
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("models").join("scad");
    let exporter = ScadExporter::new(&nested, "tray", 100);

    let path = exporter.save(&Solid::cube([1.0, 1.0, 1.0]), "-cover-Plus").unwrap();

    assert!(path.exists());
    assert_eq!(path.file_name().unwrap(), "tray-cover-Plus.scad");
}

#[test]
fn test_save_stl_writes_ascii_mesh() {
    let dir = TempDir::new().unwrap();
    let exporter = ScadExporter::new(dir.path(), "cover", 250);
    let mesher = MeshBuilder::new(24).unwrap();
    let cover = Solid::cube([30.0, 14.0, 0.6]) - Solid::cube([10.0, 8.0, 2.0]).translate([-1.0, -1.0, -0.1]);

    let path = exporter.save_stl(&cover, "-cover-L", &mesher).unwrap();

    assert_eq!(path.extension().unwrap(), "stl");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("solid"));
    assert!(content.contains("facet normal"));
}
