//! Config and reference commands.

use crate::config;
use crate::genius::ResponseKind;

/// Print the config location and effective settings
pub fn cmd_config(init: bool) -> anyhow::Result<()> {
    let Some(path) = config::config_path() else {
        anyhow::bail!("Could not determine config directory");
    };

    if init && !path.exists() {
        config::save(&config::Config::default())?;
        println!("Wrote default config to {}", path.display());
    }

    let config = config::load();
    println!("Config file: {}", path.display());
    println!("  exists:      {}", path.exists());
    println!("  text_format: {}", config.decode.text_format);
    println!("  strict:      {}", config.decode.strict);
    Ok(())
}

/// Print every endpoint kind with the response keys it reads
pub fn cmd_kinds() {
    for kind in ResponseKind::ALL {
        println!("{:<14} {}", kind.as_str(), kind.response_keys().join(", "));
    }
}
