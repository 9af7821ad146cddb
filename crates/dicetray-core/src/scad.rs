//! OpenSCAD export
//!
//! Renders a [`Solid`] tree to OpenSCAD source and writes it to disk.
//! Every file starts with a `$fn` resolution directive followed by one
//! `use <...>` line per external library the tree references.

use crate::error::{CoreError, CoreResult};
use crate::mesh::MeshBuilder;
use crate::solid::Solid;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default `$fn` used by the tray files.
pub const DEFAULT_RESOLUTION: u32 = 250;

const INDENT: &str = "    ";

/// Renders solids to OpenSCAD source text.
#[derive(Debug, Clone)]
pub struct ScadWriter {
    resolution: u32,
}

impl Default for ScadWriter {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl ScadWriter {
    pub fn new(resolution: u32) -> Self {
        Self { resolution }
    }

    /// Full file content: header, library imports and the model.
    pub fn render(&self, solid: &Solid) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "$fn = {};", self.resolution);
        out.push('\n');

        let libs = solid.libraries();
        for lib in &libs {
            let _ = writeln!(out, "use <{}>", lib);
        }
        if !libs.is_empty() {
            out.push('\n');
        }

        Self::write_node(&mut out, solid, 0);
        out
    }

    fn write_node(out: &mut String, solid: &Solid, depth: usize) {
        let pad = INDENT.repeat(depth);
        match solid {
            Solid::Cube { size } => {
                let _ = writeln!(out, "{pad}cube(size = {});", vec3(size));
            }
            Solid::Cylinder { diameter, height } => {
                let _ = writeln!(
                    out,
                    "{pad}cylinder(d = {}, h = {});",
                    num(*diameter),
                    num(*height)
                );
            }
            Solid::RoundedCube {
                size,
                radius,
                sides_only,
            } => {
                let _ = writeln!(
                    out,
                    "{pad}roundedCube({}, {}, {});",
                    vec3(size),
                    num(*radius),
                    sides_only
                );
            }
            Solid::Translate { offset, child } => {
                Self::write_block(out, &format!("translate(v = {})", vec3(offset)), [&**child], depth);
            }
            Solid::Rotate { degrees, child } => {
                Self::write_block(out, &format!("rotate(a = {})", vec3(degrees)), [&**child], depth);
            }
            Solid::Union(children) => {
                Self::write_block(out, "union()", children.iter(), depth);
            }
            Solid::Difference { base, cuts } => {
                Self::write_block(
                    out,
                    "difference()",
                    std::iter::once(&**base).chain(cuts.iter()),
                    depth,
                );
            }
            Solid::Highlight(child) => {
                let mut inner = String::new();
                Self::write_node(&mut inner, child, depth);
                // The modifier goes in front of the child's first statement.
                let _ = write!(out, "{pad}#{}", inner.trim_start());
            }
        }
    }

    fn write_block<'a, I>(out: &mut String, head: &str, children: I, depth: usize)
    where
        I: IntoIterator<Item = &'a Solid>,
    {
        let pad = INDENT.repeat(depth);
        let _ = writeln!(out, "{pad}{head} {{");
        for child in children {
            Self::write_node(out, child, depth + 1);
        }
        let _ = writeln!(out, "{pad}}}");
    }
}

fn num(v: f64) -> String {
    if v == 0.0 {
        // Avoids printing "-0".
        "0".to_string()
    } else {
        format!("{}", v)
    }
}

fn vec3(v: &[f64; 3]) -> String {
    format!("[{}, {}, {}]", num(v[0]), num(v[1]), num(v[2]))
}

/// Writes solids as `<directory>/<base_name><suffix>.scad`.
#[derive(Debug, Clone)]
pub struct ScadExporter {
    directory: PathBuf,
    base_name: String,
    writer: ScadWriter,
}

impl ScadExporter {
    pub fn new(directory: impl Into<PathBuf>, base_name: impl Into<String>, resolution: u32) -> Self {
        Self {
            directory: directory.into(),
            base_name: base_name.into(),
            writer: ScadWriter::new(resolution),
        }
    }

    pub fn output_path(&self, suffix: &str) -> PathBuf {
        self.path_with_extension(suffix, "scad")
    }

    fn path_with_extension(&self, suffix: &str, extension: &str) -> PathBuf {
        self.directory
            .join(format!("{}{}.{}", self.base_name, suffix, extension))
    }

    /// Render `solid` and write it under `suffix`, returning the written path.
    pub fn save(&self, solid: &Solid, suffix: &str) -> CoreResult<PathBuf> {
        let path = self.output_path(suffix);
        let content = self.writer.render(solid);
        self.write_file(&path, content.as_bytes())?;
        info!(path = %path.display(), primitives = solid.primitive_count(), "Wrote OpenSCAD model");
        Ok(path)
    }

    /// Mesh `solid` with csgrs and write it as ASCII STL under `suffix`.
    pub fn save_stl(&self, solid: &Solid, suffix: &str, mesher: &MeshBuilder) -> CoreResult<PathBuf> {
        let path = self.path_with_extension(suffix, "stl");
        let name = format!("{}{}", self.base_name, suffix);
        let stl = mesher.to_stl_ascii(solid, &name)?;
        self.write_file(&path, stl.as_bytes())?;
        info!(path = %path.display(), "Wrote STL preview");
        Ok(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> CoreResult<()> {
        if !self.directory.as_os_str().is_empty() && !self.directory.exists() {
            debug!(dir = %self.directory.display(), "Creating output directory");
            std::fs::create_dir_all(&self.directory)?;
        }
        std::fs::write(path, content).map_err(|e| CoreError::Export {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_resolution() {
        let text = ScadWriter::new(32).render(&Solid::cube([1.0, 2.0, 3.0]));
        assert!(text.starts_with("$fn = 32;\n"));
        assert!(text.contains("cube(size = [1, 2, 3]);"));
        assert!(!text.contains("use <"));
    }

    #[test]
    fn test_rounded_cube_pulls_in_library() {
        let text = ScadWriter::default().render(&Solid::rounded_cube([136.0, 52.0, 16.5], 3.0, true));
        assert!(text.starts_with("$fn = 250;\n"));
        assert!(text.contains("use <rounded/roundCornersCube.scad>"));
        assert!(text.contains("roundedCube([136, 52, 16.5], 3, true);"));
    }

    #[test]
    fn test_nested_blocks_are_indented() {
        let solid = Solid::cube([10.0, 10.0, 10.0]) - Solid::cylinder(2.0, 11.0).right(5.0);
        let text = ScadWriter::default().render(&solid);
        let expected = "difference() {\n    cube(size = [10, 10, 10]);\n    translate(v = [5, 0, 0]) {\n        cylinder(d = 2, h = 11);\n    }\n}\n";
        assert!(text.ends_with(expected), "unexpected output:\n{text}");
    }

    #[test]
    fn test_negative_zero_is_printed_as_zero() {
        let text = ScadWriter::default().render(&Solid::cube([1.0, 1.0, 1.0]).back(0.0));
        assert!(text.contains("translate(v = [0, 0, 0])"));
    }

    #[test]
    fn test_highlight_prefixes_statement() {
        let text = ScadWriter::default().render(&Solid::cube([1.0, 1.0, 1.0]).right(2.0).highlight());
        assert!(text.contains("#translate(v = [2, 0, 0]) {"));
    }

    #[test]
    fn test_output_path_uses_suffix() {
        let exporter = ScadExporter::new("out", "LanternDiceHolder", 250);
        assert_eq!(
            exporter.output_path("-cover-Plus"),
            PathBuf::from("out").join("LanternDiceHolder-cover-Plus.scad")
        );
    }
}
