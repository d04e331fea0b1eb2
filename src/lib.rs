//! jot - save, tag, and search short text notes from the command line

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_categories, handle_clear, handle_completions, handle_edit, handle_list,
        handle_rm, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let store_path = config.store_path(cli.store.as_ref());

    match &cli.command {
        Command::Add(args) => handle_add(args, &store_path),
        Command::List(args) => handle_list(args, &store_path),
        Command::Show(args) => handle_show(args, &store_path),
        Command::Edit(args) => handle_edit(args, &store_path),
        Command::Rm(args) => handle_rm(args, &store_path),
        Command::Clear(args) => handle_clear(args, &store_path),
        Command::Categories(args) => handle_categories(args, &store_path),
        Command::Completions(args) => handle_completions(args),
    }
}
