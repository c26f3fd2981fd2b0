use crate::config::CONFIG_FILE_NAME;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Supplyscore configuration
#
# Default decimal weights applied to KPI metrics that arrive without an
# explicit weight. Each must be between 0.0 and 1.0; they are normalized
# against each other at scoring time and need not sum to 1.

[weights]
otif = 0.4
corrective_actions = 0.35
esg_compliance = 0.25
"#;

    fs::write(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
