use std::fmt;

pub const OUTPUT_SUFFIX: &str = ".bin";

const FLATTEN_CHAR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shader source, relative to the repository root, and the stage it is
/// compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderManifestEntry {
    pub path: &'static str,
    pub stage: ShaderStage,
}

impl ShaderManifestEntry {
    pub const fn new(path: &'static str, stage: ShaderStage) -> Self {
        Self { path, stage }
    }

    pub fn output_file_name(&self) -> String {
        output_file_name(self.path)
    }
}

pub static MANIFEST: &[ShaderManifestEntry] = &[
    ShaderManifestEntry::new("rock3d/r3d/shaders/world/vert.sc", ShaderStage::Vertex),
    ShaderManifestEntry::new("rock3d/r3d/shaders/world/frag.sc", ShaderStage::Fragment),
    ShaderManifestEntry::new("rocked/shaders/imgui/vert.sc", ShaderStage::Vertex),
    ShaderManifestEntry::new("rocked/shaders/imgui/frag.sc", ShaderStage::Fragment),
];

/// Flattens a repository-relative path into a single file name.
///
/// Both separator styles are replaced so the result does not depend on the
/// host platform.
///
/// Not injective across separators and underscores: `a/b.sc` and `a_b.sc`
/// both become `a_b.sc.bin`. Manifest paths must not rely on that difference.
pub fn output_file_name(relative: &str) -> String {
    let mut name: String = relative
        .chars()
        .map(|c| match c {
            '/' | '\\' => FLATTEN_CHAR,
            c => c,
        })
        .collect();
    name.push_str(OUTPUT_SUFFIX);
    name
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn flattens_forward_slashes() {
        assert_eq!(
            output_file_name("rock3d/r3d/shaders/world/vert.sc"),
            "rock3d_r3d_shaders_world_vert.sc.bin"
        );
    }

    #[test]
    fn flattens_backslashes_like_forward_slashes() {
        assert_eq!(
            output_file_name(r"rocked\shaders\imgui\frag.sc"),
            output_file_name("rocked/shaders/imgui/frag.sc")
        );
    }

    #[test]
    fn manifest_names_are_unique() {
        let names: HashSet<_> = MANIFEST.iter().map(|e| e.output_file_name()).collect();
        assert_eq!(names.len(), MANIFEST.len());
    }

    #[test]
    fn same_base_name_in_different_dirs_does_not_collide() {
        let world = output_file_name("rock3d/r3d/shaders/world/vert.sc");
        let imgui = output_file_name("rocked/shaders/imgui/vert.sc");
        assert_ne!(world, imgui);
    }

    #[test]
    fn separator_and_underscore_flatten_alike() {
        assert_eq!(output_file_name("a/b.sc"), output_file_name("a_b.sc"));
    }

    #[test]
    fn naming_is_deterministic() {
        for entry in MANIFEST {
            assert_eq!(entry.output_file_name(), entry.output_file_name());
        }
    }

    #[test]
    fn stage_renders_as_compiler_type() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
        assert_eq!(ShaderStage::Compute.to_string(), "compute");
    }
}
