//! Integration tests for cylinder-export
//!
//! Runs the compiled binary and checks the files it leaves behind.

use cylinder_model::read_cylinder_mesh;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn cylinder_export(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cylinder-export"))
        .args(args)
        .output()
        .expect("Failed to run cylinder-export")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

/// Test top ratio -> .cylmesh
#[test]
fn test_mesh_command() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mesh_path = dir.path().join("can.cylmesh");

    let output = cylinder_export(&["mesh", "1.0", "-o", path_arg(&mesh_path)]);
    assert!(output.status.success(), "cylinder-export mesh command failed");

    let data = std::fs::read(&mesh_path).expect("Failed to read mesh file");
    let mesh = read_cylinder_mesh(&data).expect("Mesh file should parse");
    assert_eq!(mesh.header.vertex_count, 130);
    assert_eq!(mesh.header.index_count, 768);
    assert_eq!(mesh.indices.len(), 768);
}

/// Test top ratio -> .obj, with a negative ratio on the command line
#[test]
fn test_obj_command_accepts_negative_ratio() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("hourglass.obj");

    let output = cylinder_export(&["obj", "-0.5", "-o", path_arg(&obj_path)]);
    assert!(output.status.success(), "cylinder-export obj command failed");

    let obj = std::fs::read_to_string(&obj_path).expect("Failed to read OBJ file");
    assert!(obj.contains("o hourglass\n"));
    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 130);
    assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 256);
}

/// Test manifest -> output directory
#[test]
fn test_build_command() {
    let dir = tempdir().expect("Failed to create temp dir");
    let manifest_path = dir.path().join("cylinders.toml");
    let out_dir = dir.path().join("out");

    std::fs::write(
        &manifest_path,
        r#"
        [cylinders]
        can = 1.0
        cone = { top_ratio = 0.0, format = "obj" }
        "#,
    )
    .expect("Failed to write manifest");

    let output = cylinder_export(&["build", path_arg(&manifest_path), "-o", path_arg(&out_dir)]);
    assert!(output.status.success(), "cylinder-export build command failed");

    assert!(out_dir.join("can.cylmesh").exists());
    assert!(out_dir.join("cone.obj").exists());
}

/// Test that check rejects a non-finite ratio
#[test]
fn test_check_rejects_nan() {
    let dir = tempdir().expect("Failed to create temp dir");
    let manifest_path = dir.path().join("cylinders.toml");
    std::fs::write(&manifest_path, "[cylinders]\nbroken = nan\n")
        .expect("Failed to write manifest");

    let output = cylinder_export(&["check", path_arg(&manifest_path)]);
    assert!(!output.status.success(), "check should fail on NaN ratio");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken"), "stderr was: {}", stderr);
}

/// Test that a missing manifest is reported, not panicked on
#[test]
fn test_missing_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let manifest_path = dir.path().join("nope.toml");

    let output = cylinder_export(&["check", path_arg(&manifest_path)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read manifest"), "stderr was: {}", stderr);
}

/// Test info runs without writing anything
#[test]
fn test_info_command() {
    let output = cylinder_export(&["info", "0.5"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Vertices: 130"), "stdout was: {}", stdout);
}
