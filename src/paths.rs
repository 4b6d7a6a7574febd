use std::env;
use std::path::PathBuf;

use crate::config::BuildConfig;

/// Triplet used when the host has no vcpkg mapping; the layout the build was
/// first set up for.
pub const FALLBACK_TRIPLET: &str = "x64-windows";

/// vcpkg triplet for a Rust `(ARCH, OS)` pair, if vcpkg ships one.
pub fn triplet_for(arch: &str, os: &str) -> Option<&'static str> {
    let triplet = match (arch, os) {
        ("x86_64", "windows") => "x64-windows",
        ("x86_64", "linux") => "x64-linux",
        ("x86_64", "macos") => "x64-osx",
        ("aarch64", "windows") => "arm64-windows",
        ("aarch64", "linux") => "arm64-linux",
        ("aarch64", "macos") => "arm64-osx",
        ("x86", "windows") => "x86-windows",
        ("x86", "linux") => "x86-linux",
        _ => return None,
    };
    Some(triplet)
}

/// vcpkg triplet for the host, matching where vcpkg installs `shaderc`.
pub fn host_triplet() -> &'static str {
    triplet_for(env::consts::ARCH, env::consts::OS).unwrap_or_else(|| {
        log::warn!(
            "no vcpkg triplet for {}-{}, using {}",
            env::consts::ARCH,
            env::consts::OS,
            FALLBACK_TRIPLET
        );
        FALLBACK_TRIPLET
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub root: PathBuf,
    pub assets_dir: PathBuf,
    pub vcpkg_installed_dir: PathBuf,
    pub shaderc_exe: PathBuf,
    pub shaderc_include_dir: PathBuf,
    pub shaders_dir: PathBuf,
    pub profile: String,
    pub profile_dir: PathBuf,
}

impl BuildPaths {
    pub fn new(root: impl Into<PathBuf>, triplet: &str, profile: &str) -> Self {
        let root = root.into();
        let build_dir = root.join("build");
        let assets_dir = build_dir.join("assets");
        let vcpkg_installed_dir = build_dir.join("vcpkg_installed");
        let triplet_dir = vcpkg_installed_dir.join(triplet);

        let shaderc_exe = triplet_dir
            .join("tools")
            .join("bgfx")
            .join(format!("shaderc{}", env::consts::EXE_SUFFIX));
        let shaderc_include_dir = triplet_dir.join("include").join("bgfx");

        let shaders_dir = assets_dir.join("shaders");
        let profile_dir = shaders_dir.join(profile);

        Self {
            root,
            assets_dir,
            vcpkg_installed_dir,
            shaderc_exe,
            shaderc_include_dir,
            shaders_dir,
            profile: profile.to_string(),
            profile_dir,
        }
    }

    pub fn from_config(config: &BuildConfig) -> anyhow::Result<Self> {
        let root = config.root_dir()?;
        let triplet = config.triplet.as_deref().unwrap_or_else(|| host_triplet());

        let mut paths = Self::new(root, triplet, config.profile());
        if let Some(shaderc) = &config.shaderc {
            paths.shaderc_exe = shaderc.clone();
        }

        log::debug!("Repository root: {}", paths.root.display());
        log::debug!("Shader compiler: {}", paths.shaderc_exe.display());
        Ok(paths)
    }

    pub fn source(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn output(&self, file_name: &str) -> PathBuf {
        self.profile_dir.join(file_name)
    }
}
