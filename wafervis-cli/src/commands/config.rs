//! Config command implementation - print or write configuration files

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::CliError;

pub fn execute(config: &Config, example: bool, output: Option<PathBuf>, force: bool) -> Result<()> {
    let selected = if example { Config::default() } else { config.clone() };

    match output {
        Some(path) => {
            if path.exists() && !force {
                return Err(CliError::config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }
            selected.save_to_file(&path)?;
            log::info!("Wrote configuration to {}", path.display());
        }
        None if example => print!("{}", Config::example_toml()?),
        None => print!("{}", toml::to_string_pretty(&selected)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_example_refuses_overwrite() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("wafervis.toml");

        execute(&Config::default(), true, Some(path.clone()), false)?;
        assert_eq!(Config::load_from_file(&path)?, Config::default());

        let err = execute(&Config::default(), true, Some(path.clone()), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        execute(&Config::default(), true, Some(path), true)?;
        Ok(())
    }
}
