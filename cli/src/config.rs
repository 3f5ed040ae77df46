use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "friendlist", author, version, about)]
pub struct Config {
    /// Where the friends document comes from.
    ///
    /// A path to a json file, a directory containing `friends.json`, or `-` to read from stdin.
    #[arg(short, long, value_name = "PATH")]
    pub input: String,

    /// Path to a [friendlist::parser::Config] in json format.
    #[arg(long)]
    pub parser_config: Option<PathBuf>,

    /// Name of generators to use.
    #[arg(short, long, required(true))]
    pub generator: Vec<GeneratorName>,

    /// Each argument should be a key=value pair where the key is a [GeneratorName] and the value
    /// is the path of the file to write.
    ///
    /// Generators without an --output print to stdout.
    ///
    /// Example:
    ///     -g html -g markdown -o html=out/friends.html
    /// writes html to out/friends.html and prints markdown to stdout.
    #[arg(short, long, value_parser=parse_output)]
    pub output: Vec<Output>,

    /// Generators that also print to stdout in addition to their --output files.
    #[arg(long)]
    pub stdout: Vec<GeneratorName>,

    /// Check avatar images relative to this directory and show initials for any that are
    /// missing. Remote images are assumed to load.
    #[arg(long, value_name = "DIR")]
    pub image_root: Option<PathBuf>,

    /// Number of additional fetch attempts before giving up.
    #[arg(long, default_value_t = 3)]
    pub retry: u32,

    /// Render the loading state without fetching.
    #[arg(long)]
    pub pending: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GeneratorName {
    Html,
    Markdown,
    Dbg,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    pub generator: GeneratorName,
    pub path: PathBuf,
}

fn parse_output(arg: &str) -> Result<Output> {
    let vec = arg.split('=').collect_vec();
    if vec.len() != 2 {
        return Err(anyhow!(
            "output must be in the form '<generator>=<output/path>'"
        ));
    }
    let generator = GeneratorName::from_str(vec[0], true)
        .map_err(|_| anyhow!("'{}' is not a valid generator name", vec[0]))?;
    let path = PathBuf::from(vec[1]);
    Ok(Output { generator, path })
}

impl GeneratorName {
    pub fn create_impl(&self) -> Box<dyn friendlist::Generator> {
        match self {
            GeneratorName::Html => Box::new(friendlist::generator::Html::default()),
            GeneratorName::Markdown => Box::new(friendlist::generator::Markdown::default()),
            GeneratorName::Dbg => Box::new(friendlist::generator::Dbg::default()),
        }
    }
}
