use crate::cli::parser::Commands;
use crate::config::{Config, parse_offset};
use crate::core::time::{elapsed_millis_in, format_elapsed, format_elapsed_ms};
use crate::errors::AppResult;
use tracing::debug;

/// Handle the `elapsed` command. Unparsable input prints an empty line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Elapsed {
        from,
        to,
        ms,
        utc_offset,
    } = cmd
    else {
        return Ok(());
    };

    let offset = match utc_offset {
        Some(o) => parse_offset(Some(o))?,
        None => cfg.local_offset()?,
    };

    let millis = elapsed_millis_in(from, to, offset);
    debug!(from = from.as_str(), to = to.as_str(), ?millis, "elapsed");

    let shown = if *ms {
        format_elapsed_ms(millis)
    } else {
        format_elapsed(millis)
    };
    println!("{shown}");
    Ok(())
}
