use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { force } = &cli.command else {
        return Ok(());
    };

    let path = cli
        .config
        .as_deref()
        .map(crate::utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    info(format!("Writing default configuration to {}", path.display()));
    Config::default().save(&path)?;
    success("racetable initialization completed!");
    Ok(())
}
