//! CLI command definitions and handlers

pub mod config;
pub mod confirm;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - save, tag, and search short text notes
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Store file (overrides config file and default location)
    #[arg(short = 's', long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new note
    Add(AddArgs),

    /// List notes, optionally filtered by search term and category
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note's full content
    Show(ShowArgs),

    /// Replace a note's content and tags
    Edit(EditArgs),

    /// Delete a note
    Rm(RmArgs),

    /// Delete all notes
    Clear(ClearArgs),

    /// List categories (every distinct tag, plus "All")
    Categories(CategoriesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note content
    pub content: String,

    /// Comma-separated tags (e.g. "work, errand")
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show notes whose content contains this term (case-insensitive)
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Only show notes tagged with this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id or unique id prefix
    pub id: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id or unique id prefix
    pub id: String,

    /// Replacement content
    pub content: String,

    /// Comma-separated tags; replaces the note's tags (omit to clear them)
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note id or unique id prefix
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `clear` command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `categories` command
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Show note counts for each category
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
