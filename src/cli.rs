//! CLI argument parsing for the catalog inspector.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "senum",
    version,
    about = "Inspect enum catalogs: keys, values, labels, options, and lookups",
    after_help = "Examples:\n  senum init --catalog enums.json\n  senum names --catalog enums.json\n  senum keys --catalog enums.json --enum days\n  senum get --catalog enums.json --enum statuses 31 --field label\n  senum options --catalog enums.json --enum statuses --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug logs on stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter catalog
    Init(InitArgs),
    /// List the enums a catalog declares
    Names(CatalogArgs),
    /// Print node keys in table order
    Keys(EnumArgs),
    /// Print node values in table order
    Values(EnumArgs),
    /// Print node labels in table order
    Labels(EnumArgs),
    /// Print the value-to-label mapping
    Options(EnumArgs),
    /// Print every node with all fields
    Show(EnumArgs),
    /// Resolve a selector by value, key, or label
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Catalog file to create
    #[arg(long, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Overwrite an existing catalog
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file declaring the enums
    #[arg(long, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EnumArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Name of the enum inside the catalog
    #[arg(long = "enum", value_name = "NAME")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: EnumArgs,

    /// Value, key, or label to resolve
    pub selector: String,

    /// Field to read instead of the whole node
    #[arg(long)]
    pub field: Option<String>,

    /// Printed when nothing resolves (parsed as JSON when possible)
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,
}
