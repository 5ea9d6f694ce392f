use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Parser)]
#[clap(version, about = "Lint the resource files of a documentation tree")]
pub struct Args {
    /// The directory to use as the documentation root when scanning and when
    /// searching for the config file
    #[clap(short, long)]
    cwd: Option<String>,

    /// The path (relative to the documentation root) where a reslint.toml
    /// config file is located
    #[clap(long, default_value = "reslint.toml")]
    pub config_path: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Check resource files and report every finding
    Lint(LintArgs),

    /// List the checks that would run in the current mode
    Rules,
}

#[derive(Clone, Debug, clap::Args)]
pub struct LintArgs {
    /// Lint a single file instead of scanning the whole tree
    #[clap(long)]
    pub file: Option<String>,

    /// Don't print a line for files which pass every check
    #[clap(long, default_value_t = false)]
    pub hide_passes: bool,

    /// How lint results should be printed
    #[clap(long, value_enum, default_value_t = Reporter::Ansi)]
    pub reporter: Reporter,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Reporter {
    Ansi,
    Json,
}

impl Args {
    pub fn cwd(&self) -> PathBuf {
        self.cwd
            .as_ref()
            .map(|c| Path::new(c.as_str()).to_path_buf())
            .or_else(|| std::env::current_dir().ok())
            .expect("Unable to access current working directory")
    }

    pub fn config_path(&self) -> PathBuf {
        self.cwd().join(self.config_path.as_str())
    }
}
