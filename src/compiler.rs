use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::error::BuildError;
use crate::manifest::ShaderStage;

/// One compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileJob {
    pub include_dir: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub stage: ShaderStage,
    pub profile: String,
}

impl CompileJob {
    /// Command-line arguments in the order `shaderc` expects them.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-i".into(),
            self.include_dir.clone().into_os_string(),
            "-f".into(),
            self.input.clone().into_os_string(),
            "-o".into(),
            self.output.clone().into_os_string(),
            "--type".into(),
            self.stage.as_str().into(),
            "--profile".into(),
            self.profile.clone().into(),
        ]
    }
}

pub trait ShaderCompiler {
    fn compile(&mut self, job: &CompileJob) -> Result<(), BuildError>;
}

/// bgfx `shaderc`, run as a blocking subprocess with inherited stdio.
pub struct Shaderc {
    exe: PathBuf,
}

impl Shaderc {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self { exe: exe.into() }
    }
}

impl ShaderCompiler for Shaderc {
    fn compile(&mut self, job: &CompileJob) -> Result<(), BuildError> {
        log::debug!("{} {:?}", self.exe.display(), job.args());

        let status = Command::new(&self.exe)
            .args(job.args())
            .status()
            .map_err(|source| BuildError::CompilerInvocationFailure {
                compiler: self.exe.clone(),
                source,
            })?;

        // Signal termination has no exit code and counts as a failure too.
        if !status.success() {
            return Err(BuildError::CompilationFailure {
                input: job.input.clone(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> CompileJob {
        CompileJob {
            include_dir: PathBuf::from("inc"),
            input: PathBuf::from("in.sc"),
            output: PathBuf::from("out.bin"),
            stage: ShaderStage::Fragment,
            profile: "spirv15-12".to_string(),
        }
    }

    #[test]
    fn args_are_passed_in_order() {
        let args: Vec<_> = job()
            .args()
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect();
        assert_eq!(
            args,
            [
                "-i", "inc", "-f", "in.sc", "-o", "out.bin", "--type", "fragment", "--profile",
                "spirv15-12"
            ]
        );
    }

    #[test]
    fn missing_executable_is_an_invocation_failure() {
        let mut compiler = Shaderc::new("definitely/not/a/real/shaderc");
        let err = compiler.compile(&job()).unwrap_err();
        assert!(matches!(err, BuildError::CompilerInvocationFailure { .. }));
    }
}
