use std::path::PathBuf;

use anyhow::Result;

use super::args::Arguments;
use crate::{
    config::GeneratorConfig,
    generator::{GenerationReport, is_stale, run as generate},
};

#[derive(Debug)]
pub enum RunOutcome {
    Generated(GenerationReport),
    /// `--if-stale` was given and the outputs are newer than the input.
    UpToDate(PathBuf),
}

/// Turn parsed arguments into a validated generator configuration.
///
/// Fails without touching the filesystem.
pub fn config_from_args(args: &Arguments) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::from_input(
        args.input.clone(),
        args.output_dir.clone(),
        args.output_file.clone(),
    )?
    .with_comment_language(args.comment.clone());

    if let Some(java_file) = &args.java_file {
        config = config.with_source(java_file.clone(), args.java_package.clone());
    }

    config.validate()?;
    Ok(config)
}

pub fn run(config: GeneratorConfig, if_stale: bool) -> Result<RunOutcome> {
    if if_stale {
        let output = config.output_dir.join(&config.base_name);
        if !is_stale(&config.input_file, &output)? {
            return Ok(RunOutcome::UpToDate(output));
        }
    }

    generate(config).map(RunOutcome::Generated)
}
