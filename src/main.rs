use linecolor::models::{AppError, Config, ConfigError};
use linecolor::services::{ColorSetLoader, LoadColorSet};
use log::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(path)) => {
            warn!("no config at {path}, using built-in color sets");
            Config::default()
        }
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let root = config.storage_root();
    info!("loading color sets from {root}");

    let loaders: Vec<ColorSetLoader> = config
        .sources()
        .into_iter()
        .map(|source| ColorSetLoader::on_disk(source, root))
        .collect();

    let mut total = 0;
    for loader in &loaders {
        let set = loader.load_color_set();
        info!("color set {}: {} colors", loader.name(), set.len());

        if set.is_empty() {
            warn!(
                "color set {} has no usable colors, check {}",
                loader.name(),
                loader.source().file
            );
            continue;
        }

        let colors: Vec<String> = set.iter().map(ToString::to_string).collect();
        println!("{}: {}", loader.name(), colors.join(" "));
        total += set.len();
    }

    if total == 0 {
        return Err(AppError("no colors could be loaded from any color set".to_string()).into());
    }

    Ok(())
}
