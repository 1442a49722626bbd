use std::path::PathBuf;

use anyhow::Result;
use nagar_infrastructure::ConfigService;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };

    println!("# {}", service.config_path()?.display());
    print!("{}", toml::to_string_pretty(&service.get_config())?);
    Ok(())
}
