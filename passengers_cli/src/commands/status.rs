use anyhow::Result;

use crate::config::Config;
use crate::output::{print_status, OutputFormat};

pub async fn run(config: &Config, format: &OutputFormat) -> Result<bool> {
    let status = config.client().get_status().await?;
    print_status(&status, format);
    Ok(true)
}
