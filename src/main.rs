use anyhow::{anyhow, Result};
use clap::Parser;
use serde_json::{Number, Value};
use super_enum::catalog::{default_catalog, load_catalog, write_catalog};
use super_enum::EnumTable;

mod cli;
mod logging;

use cli::{CatalogArgs, Command, EnumArgs, GetArgs, InitArgs, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    logging::init_logging(args.verbose)?;

    match args.command {
        Command::Init(args) => cmd_init(args),
        Command::Names(args) => cmd_names(args),
        Command::Keys(args) => print_list(&args, EnumTable::keys),
        Command::Values(args) => print_list(&args, EnumTable::values),
        Command::Labels(args) => print_list(&args, EnumTable::labels),
        Command::Options(args) => cmd_options(args),
        Command::Show(args) => cmd_show(args),
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_init(args: InitArgs) -> Result<()> {
    if args.catalog.exists() && !args.force {
        return Err(anyhow!(
            "catalog {} already exists (use --force to overwrite)",
            args.catalog.display()
        ));
    }
    write_catalog(&args.catalog, &default_catalog())?;
    println!("wrote {}", args.catalog.display());
    Ok(())
}

fn cmd_names(args: CatalogArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let names: Vec<Value> = catalog.names().map(Value::from).collect();
    print_values(&names, args.json)
}

fn load_table(args: &EnumArgs) -> Result<EnumTable> {
    load_catalog(&args.catalog.catalog)?.build(&args.name)
}

fn print_list(args: &EnumArgs, project: fn(&EnumTable) -> Vec<Value>) -> Result<()> {
    let table = load_table(args)?;
    print_values(&project(&table), args.catalog.json)
}

fn cmd_options(args: EnumArgs) -> Result<()> {
    let options = load_table(&args)?.options();
    if args.catalog.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }
    for (value, label) in &options {
        println!("{value}\t{}", display_value(label));
    }
    Ok(())
}

fn cmd_show(args: EnumArgs) -> Result<()> {
    let table = load_table(&args)?;
    if args.catalog.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }
    for node in &table {
        println!("{}", node.to_json());
    }
    Ok(())
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let table = load_table(&args.target)?;
    let node = selector_candidates(&args.selector)
        .into_iter()
        .find_map(|selector| table.get(selector));
    let default = args.default.as_deref().map(parse_loose);
    let result = match (node, args.field.as_deref()) {
        (Some(node), None) => node.to_json(),
        (Some(node), Some(field)) => node.field(field).or(default).ok_or_else(|| {
            anyhow!(
                "node {:?} in enum {:?} has no field {field:?}",
                args.selector,
                args.target.name
            )
        })?,
        (None, _) => default.ok_or_else(|| {
            anyhow!(
                "no node matches {:?} in enum {:?}",
                args.selector,
                args.target.name
            )
        })?,
    };
    if args.target.catalog.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", display_value(&result));
    }
    Ok(())
}

/// Command-line selectors arrive as text; numerals are tried as numbers
/// first so fractional values resolve too.
fn selector_candidates(raw: &str) -> Vec<Value> {
    let mut candidates = Vec::with_capacity(2);
    if let Ok(number) = raw.parse::<Number>() {
        candidates.push(Value::Number(number));
    }
    candidates.push(Value::String(raw.to_string()));
    candidates
}

fn parse_loose(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn print_values(values: &[Value], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(values)?);
        return Ok(());
    }
    for value in values {
        println!("{}", display_value(value));
    }
    Ok(())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
