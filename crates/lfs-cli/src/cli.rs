use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lfs",
    about = "Read-only LFS object server",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve objects over HTTP
    Serve(ServeArgs),
    /// Print where an object lives in the store
    Locate(LocateArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Store root (objects are read from <root>/objects)
    #[arg(long)]
    pub root: Option<PathBuf>,
    #[arg(long)]
    pub host: Option<String>,
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args)]
pub struct LocateArgs {
    pub oid: String,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
