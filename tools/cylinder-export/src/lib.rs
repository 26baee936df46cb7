//! cylinder-export library
//!
//! Writes cylinder meshes to disk, one at a time or from a TOML manifest.

pub mod convert;
pub mod manifest;

pub use convert::{OutputFormat, write_mesh_file, write_obj_file};
pub use manifest::{CylinderEntry, DetailedEntry, Manifest, build_all, load_manifest, validate};
