//! `rove inspect` - print the resolved routes without emitting code.

use rove_core::{Scanner, flatten};

use crate::cli::InspectArgs;
use crate::commands::{resolve_root, under_root};
use crate::config::ConfigDiscovery;

pub fn execute(args: InspectArgs) -> anyhow::Result<()> {
    let root = resolve_root(args.root)?;
    let config = ConfigDiscovery::new(&root).load_or_default()?;

    let app_dir = args
        .app_dir
        .or(config.routes.app_dir)
        .map(|dir| under_root(&root, dir))
        .unwrap_or_else(|| root.join("app"));

    let mut scanner = Scanner::new(app_dir);
    if let Some(extensions) = config.routes.extensions {
        scanner = scanner.extensions(extensions);
    }
    let routes = flatten(&scanner.scan());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    if routes.is_empty() {
        println!("no routes found");
        return Ok(());
    }
    for route in &routes {
        let layouts = match route.layouts.len() {
            0 => String::from("no layout"),
            1 => String::from("1 layout"),
            n => format!("{n} layouts"),
        };
        println!(
            "{:<24} {}  ({layouts})",
            route.pattern,
            route.page.display()
        );
    }
    Ok(())
}
