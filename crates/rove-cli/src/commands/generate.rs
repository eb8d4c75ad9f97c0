//! `rove generate` - compile the app directory into a router module.

use std::fs;

use anyhow::Context;
use tracing::info;

use rove_plugin::{Generator, GeneratorOptions, Mode};

use crate::cli::GenerateArgs;
use crate::commands::{resolve_root, under_root};
use crate::config::ConfigDiscovery;

pub fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    let root = resolve_root(args.root)?;
    let config = ConfigDiscovery::new(&root).load_or_default()?;

    let app_dir = args
        .app_dir
        .or(config.routes.app_dir)
        .map(|dir| under_root(&root, dir))
        .unwrap_or_else(|| root.join("app"));
    let mode = args
        .mode
        .or(config.routes.mode)
        .map(Mode::from)
        .unwrap_or(Mode::Build);

    let mut options = GeneratorOptions::new(&root).app_dir(app_dir).mode(mode);
    if let Some(extensions) = config.routes.extensions {
        options = options.extensions(extensions);
    }

    let generator = Generator::new(options)?;
    let module = generator.generate();

    match args.output.or(config.routes.output) {
        Some(output) => {
            let output = under_root(&root, output);
            fs::write(&output, module)
                .with_context(|| format!("cannot write {}", output.display()))?;
            info!(output = %output.display(), "wrote router module");
        }
        None => print!("{module}"),
    }
    Ok(())
}
