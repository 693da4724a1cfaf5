use clap::Parser;
use factory_loader::utils::{logger, validation::Validate};
use factory_loader::{
    dummy_factory_registry, CliConfig, FactoriesLoader, FactoriesSource, FactoryDescription,
    LoaderError, LocalSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting factory-loader");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let sources: Vec<Box<dyn FactoriesSource>> = config
        .configs
        .iter()
        .map(|path| Box::new(LocalSource::new(path)) as Box<dyn FactoriesSource>)
        .collect();

    let loader = match FactoriesLoader::from_sources(&sources).await {
        Ok(loader) => loader,
        Err(e) => {
            tracing::error!("❌ Failed to read factories files: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let registry = dummy_factory_registry();
    let loaded = match loader.load_named(
        &config.capability,
        &registry,
        &config.arguments(),
        &config.failure_handler(),
    ) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ Loading '{}' failed: {}", config.capability, e);
            eprintln!("❌ {}", e);
            if matches!(e, LoaderError::Instantiation { .. }) {
                eprintln!("   caused by: {}", e.root_cause());
            }
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    tracing::info!(
        "✅ Loaded {} factory(ies) for '{}'",
        loaded.len(),
        config.capability
    );

    let descriptions: Vec<FactoryDescription> = loaded
        .into_iter()
        .map(|(implementation, factory)| FactoryDescription {
            implementation,
            description: factory.describe(),
        })
        .collect();

    let output = if config.json {
        FactoryDescription::render_json(&descriptions)
    } else {
        Ok(FactoryDescription::render_lines(&descriptions))
    };

    match output {
        Ok(text) => print!("{}", text),
        Err(e) => {
            tracing::error!("❌ Writing results failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    }

    Ok(())
}
