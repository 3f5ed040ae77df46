use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use friendlist::query::ClientConfig;
use friendlist::view::LocalImages;
use friendlist::{output, source, Outcome, Source};

use crate::config::{Config, GeneratorName};

mod config;

/// Where a generator writes to.
#[derive(Debug, Clone, Eq, PartialEq)]
enum Target {
    File(PathBuf),
    StdOut,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let config = Config::parse();
    let source = source_for(&config.input);
    let mut exe = friendlist::Executor::new(source, friendlist::parser::Json::default())
        .client_config(ClientConfig {
            retry: config.retry,
        })
        .pending(config.pending);
    if let Some(parser_config) = parser_config(&config)? {
        exe = exe.parser_config(parser_config);
    }
    if let Some(root) = &config.image_root {
        exe = exe.image_check(LocalImages::new(root));
    }
    for generator_name in &config.generator {
        exe = exe.generator(generator_name.create_impl());
        for target in targets(*generator_name, &config) {
            exe = match target {
                Target::File(path) => exe.output(output::File::create(path)?),
                Target::StdOut => exe.output(output::StdOut::default()),
            };
        }
    }
    match exe.execute()? {
        Outcome::Failed => {
            error!("friends could not be loaded");
            Ok(ExitCode::FAILURE)
        }
        outcome => {
            info!("done: {:?}", outcome);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn source_for(input: &str) -> Box<dyn Source> {
    if input == "-" {
        return Box::<source::StdIn>::default();
    }
    let path = Path::new(input);
    if path.is_dir() {
        Box::new(source::Directory::new(path))
    } else {
        Box::new(source::File::new(path))
    }
}

fn parser_config(config: &Config) -> Result<Option<friendlist::parser::Config>> {
    match &config.parser_config {
        None => Ok(None),
        Some(path) => {
            let file = File::open(path).context("read parser config")?;
            let reader = BufReader::new(file);
            Ok(Some(serde_json::from_reader(reader)?))
        }
    }
}

fn targets(generator_name: GeneratorName, config: &Config) -> Vec<Target> {
    let mut targets = config
        .output
        .iter()
        .filter(|output| output.generator == generator_name)
        .map(|output| Target::File(output.path.clone()))
        .collect::<Vec<_>>();
    if targets.is_empty() || config.stdout.contains(&generator_name) {
        targets.push(Target::StdOut);
    }
    targets
}
