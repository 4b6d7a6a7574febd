use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::compiler::{CompileJob, ShaderCompiler};
use crate::error::BuildError;
use crate::manifest::{MANIFEST, ShaderManifestEntry};
use crate::paths::BuildPaths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    NotStarted,
    EnsuringOutputDir,
    CompilingEntry(usize),
    Done,
    /// The run stopped at the first error. The reason is the error `run`
    /// returned; nothing is retried.
    Failed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub outputs: Vec<PathBuf>,
}

pub struct AssetBuilder<C> {
    paths: BuildPaths,
    manifest: &'static [ShaderManifestEntry],
    compiler: C,
    state: BuildState,
}

impl<C: ShaderCompiler> AssetBuilder<C> {
    pub fn new(paths: BuildPaths, compiler: C) -> Self {
        Self::with_manifest(paths, MANIFEST, compiler)
    }

    pub fn with_manifest(
        paths: BuildPaths,
        manifest: &'static [ShaderManifestEntry],
        compiler: C,
    ) -> Self {
        Self {
            paths,
            manifest,
            compiler,
            state: BuildState::NotStarted,
        }
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn paths(&self) -> &BuildPaths {
        &self.paths
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Compiles every manifest entry in order, stopping at the first failure.
    /// Outputs written before the failure are left in place.
    pub fn run(&mut self) -> anyhow::Result<BuildReport> {
        let result = self.run_inner();
        self.state = if result.is_ok() {
            BuildState::Done
        } else {
            BuildState::Failed
        };
        result
    }

    fn run_inner(&mut self) -> anyhow::Result<BuildReport> {
        self.state = BuildState::EnsuringOutputDir;
        ensure_dir(&self.paths.assets_dir)?;
        ensure_dir(&self.paths.profile_dir)?;

        let mut report = BuildReport::default();
        for (index, entry) in self.manifest.iter().enumerate() {
            self.state = BuildState::CompilingEntry(index);
            let output = self
                .compile_one(entry)
                .with_context(|| format!("failed to build {}", entry.path))?;
            report.outputs.push(output);
        }

        log::info!(
            "Compiled {} shader(s) into {}",
            report.outputs.len(),
            self.paths.profile_dir.display()
        );
        Ok(report)
    }

    pub fn compile_one(&mut self, entry: &ShaderManifestEntry) -> anyhow::Result<PathBuf> {
        let input = self.paths.source(entry.path);
        if !input.exists() {
            return Err(BuildError::MissingSourceFile { path: input }.into());
        }

        let output = self.paths.output(&entry.output_file_name());
        let job = CompileJob {
            include_dir: self.paths.shaderc_include_dir.clone(),
            input,
            output,
            stage: entry.stage,
            profile: self.paths.profile.clone(),
        };

        log::info!("Compiling {} ({})", entry.path, entry.stage);
        self.compiler.compile(&job)?;
        log::trace!("  wrote {}", job.output.display());

        Ok(job.output)
    }
}

fn ensure_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| BuildError::OutputDirectoryCreationFailure {
        path: path.to_path_buf(),
        source,
    })
}
