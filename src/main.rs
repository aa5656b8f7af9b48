//! CLI entry point for potioncolorizer.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use potioncolorizer::catalog::VanillaCatalog;
use potioncolorizer::cli::{Cli, OutputFormat};
use potioncolorizer::colorizer::{ColorRegistry, Colorizer};
use potioncolorizer::config::{FileConfigStore, ModConfig};
use potioncolorizer::i18n::LangTable;
use potioncolorizer::logging::init_logging;
use potioncolorizer::report::Report;
use potioncolorizer::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref(), &cli.log_level);

    let mut config = ModConfig::load_layered(&cli.config, &cli.to_config_overrides())
        .wrap_err_with(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    for (id, color) in &cli.set {
        config.overrides.insert(id.clone(), *color);
    }
    for id in &cli.unset {
        config.overrides.remove(id);
    }

    // Stand-in for the host: an in-memory registry seeded from the vanilla catalog
    let catalog = VanillaCatalog;
    let adapter = ColorRegistry::from_catalog(&catalog);
    let mut colorizer = Colorizer::new(config, Box::new(adapter));
    colorizer.on_init_completed(&catalog);

    let localizer = LangTable::english();
    let mut store = FileConfigStore::new(&cli.config);

    // Launch the panel if --interactive flag is set
    if cli.interactive {
        return tui::run(
            colorizer.into_shared(),
            Box::new(store),
            Box::new(localizer),
            cli.line_style.into(),
        );
    }

    if cli.save {
        colorizer
            .write_config(&mut store)
            .wrap_err_with(|| format!("Failed to write {}", cli.config.display()))?;
        eprintln!("Wrote configuration to {}", cli.config.display());
    }

    let report = Report::build(&colorizer, &localizer);
    let output = match cli.format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(&report).wrap_err("Failed to serialize report to YAML")?
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)
                .wrap_err("Failed to serialize report to JSON")?;
            json.push('\n');
            json
        }
    };
    print!("{output}");

    Ok(())
}
