use anyhow::{Context, Result};
use bracket_menu::{BracketMenu, ItemLoader, Menu, MenuConfig, RouteContext};
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn parse_param(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("invalid parameter '{}', expected NAME=VALUE", raw))?;
    Ok((name.to_string(), value.to_string()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("bracket-menu")
        .about("Render a JSON menu tree as bracket theme sidebar HTML")
        .arg(
            Arg::new("input")
                .help("JSON file holding an array of menu items")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("route")
                .long("route")
                .help("Route of the current request, e.g. site/about")
                .default_value(""),
        )
        .arg(
            Arg::new("param")
                .long("param")
                .short('p')
                .value_name("NAME=VALUE")
                .help("Parameter of the current request (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("module-prefix")
                .long("module-prefix")
                .help("Module namespace prepended to relative item routes"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("JSON file with renderer settings"),
        )
        .arg(
            Arg::new("no-container")
                .long("no-container")
                .help("Emit the items without the outer menu tag")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input_file = matches
        .get_one::<String>("input")
        .context("missing input file")?;

    let config = match matches.get_one::<String>("config") {
        Some(path) => MenuConfig::from_file(Path::new(path))?,
        None => MenuConfig::default(),
    };

    let route = matches
        .get_one::<String>("route")
        .cloned()
        .unwrap_or_default();
    let mut context = RouteContext::new(route);
    if let Some(prefix) = matches.get_one::<String>("module-prefix") {
        context = context.with_module_prefix(prefix.clone());
    }
    for raw in matches.get_many::<String>("param").into_iter().flatten() {
        let (name, value) = parse_param(raw)?;
        context = context.with_param(name, value);
    }

    let items = ItemLoader::load_items(Path::new(input_file))?;
    debug!(count = items.len(), route = %context.route, "rendering menu");

    let menu = BracketMenu::new(config);
    let output = if matches.get_flag("no-container") {
        menu.render(&items, &context)
    } else {
        menu.render_menu(&items, &context)
    };

    println!("{}", output);

    Ok(())
}
