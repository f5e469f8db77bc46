use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;
use log::error;

use nb_render::prelude::*;

fn main() -> ExitCode {
    let matches = get_matches();

    // Reject unknown groups before anything touches the disk, log file included
    let category = get_category(&matches).and_then(|name| Category::from_str(&name));
    let log_file = match category {
        Ok(_) => get_log_file(&matches),
        Err(_) => Ok(String::new()),
    };

    let logger = log_file
        .map_err(anyhow::Error::from)
        .and_then(|log_file| init_logger(get_verbosity(&matches), &log_file));
    if let Err(e) = logger {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match category.map_err(anyhow::Error::from).and_then(|category| run(&matches, category)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches, category: Category) -> Result<()> {
    let config = load_or_default(&get_config_path(matches))?;
    let mut converter = CommandConverter::new(config.converter.clone());
    let options = RenderOptions {
        config,
        dry_run: is_dry_run(matches),
    };

    render_category(category, &options, &mut converter)?;

    Ok(())
}
