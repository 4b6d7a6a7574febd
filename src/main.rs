use std::process::ExitCode;

use anyhow::Context;

use rock3d_assets::{AssetBuilder, BuildConfig, BuildPaths, Shaderc, logging};

const TOOL_NAME: &str = "build_assets";

fn run() -> anyhow::Result<()> {
    let config = BuildConfig::from_env();
    logging::init(&config.root_dir()?)?;

    let paths = BuildPaths::from_config(&config).context("failed to resolve build paths")?;

    let compiler = Shaderc::new(&paths.shaderc_exe);
    AssetBuilder::new(paths, compiler).run()?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("{TOOL_NAME}: {e:#}");
            ExitCode::FAILURE
        }
    }
}
