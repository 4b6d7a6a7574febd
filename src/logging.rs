use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub const CONFIG_FILE: &str = "log4rs.yml";

/// Where `log4rs.yml` is looked for, in order: the engine repository, then
/// this tool's own source directory.
pub fn config_candidates(root: &Path) -> [PathBuf; 2] {
    [
        root.join(CONFIG_FILE),
        Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE),
    ]
}

pub fn find_config(root: &Path) -> Option<PathBuf> {
    config_candidates(root).into_iter().find(|p| p.is_file())
}

/// Loads the first `log4rs.yml` found, otherwise logs `info` and up to stderr.
pub fn init(root: &Path) -> anyhow::Result<()> {
    if let Some(file) = find_config(root) {
        return log4rs::init_file(&file, Default::default())
            .with_context(|| format!("failed to load logging config file {}", file.display()));
    }

    log4rs::init_config(default_config()?).context("failed to install logger")?;
    Ok(())
}

fn default_config() -> anyhow::Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l}):5} - {m}{n}")))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .context("invalid default logging config")
}
