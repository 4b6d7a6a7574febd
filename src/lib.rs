pub mod builder;
pub mod compiler;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod paths;

pub use builder::{AssetBuilder, BuildReport, BuildState};
pub use compiler::{CompileJob, ShaderCompiler, Shaderc};
pub use config::BuildConfig;
pub use error::BuildError;
pub use manifest::{MANIFEST, ShaderManifestEntry, ShaderStage, output_file_name};
pub use paths::BuildPaths;
