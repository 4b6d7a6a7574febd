use std::env;
use std::path::PathBuf;

use anyhow::Context;

pub const ROOT_VAR: &str = "ROCK3D_ROOT";
pub const SHADERC_VAR: &str = "ROCK3D_SHADERC";
pub const TRIPLET_VAR: &str = "ROCK3D_VCPKG_TRIPLET";
pub const PROFILE_VAR: &str = "ROCK3D_SHADER_PROFILE";

pub const DEFAULT_PROFILE: &str = "spirv15-12";

/// Overrides for the compiled-in build layout. `None` means use the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub root: Option<PathBuf>,
    pub shaderc: Option<PathBuf>,
    pub triplet: Option<String>,
    pub profile: Option<String>,
}

impl BuildConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            root: get(ROOT_VAR).map(PathBuf::from),
            shaderc: get(SHADERC_VAR).map(PathBuf::from),
            triplet: get(TRIPLET_VAR),
            profile: get(PROFILE_VAR),
        }
    }

    /// Repository root: the override, else the current directory.
    pub fn root_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => env::current_dir().context("failed to read current directory"),
        }
    }

    pub fn profile(&self) -> &str {
        self.profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = BuildConfig::from_lookup(|_| None);
        assert_eq!(config, BuildConfig::default());
        assert_eq!(config.profile(), "spirv15-12");
    }

    #[test]
    fn reads_every_override() {
        let config = BuildConfig::from_lookup(lookup(&[
            (ROOT_VAR, "/src/rock3d"),
            (SHADERC_VAR, "/opt/bgfx/shaderc"),
            (TRIPLET_VAR, "x64-linux"),
            (PROFILE_VAR, "metal"),
        ]));

        assert_eq!(config.root, Some(PathBuf::from("/src/rock3d")));
        assert_eq!(config.shaderc, Some(PathBuf::from("/opt/bgfx/shaderc")));
        assert_eq!(config.triplet.as_deref(), Some("x64-linux"));
        assert_eq!(config.profile(), "metal");
    }

    #[test]
    fn root_dir_prefers_override() {
        let config = BuildConfig::from_lookup(lookup(&[(ROOT_VAR, "/src/rock3d")]));
        assert_eq!(config.root_dir().unwrap(), PathBuf::from("/src/rock3d"));
        assert_eq!(
            BuildConfig::default().root_dir().unwrap(),
            env::current_dir().unwrap()
        );
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = BuildConfig::from_lookup(lookup(&[(ROOT_VAR, ""), (PROFILE_VAR, "  ")]));
        assert!(config.root.is_none());
        assert_eq!(config.profile(), DEFAULT_PROFILE);
    }
}
