use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_version};

use crate::constants::{
    CATEGORY_HELP, CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `category`: The notebook group to render (positional, required)
/// - `config`: Path to the configuration file
/// - `dry`: List conversions without running them
/// - `verbose`: Increase verbosity level
/// - `log_file` / `log_locally`: Where the log file is written
pub fn build_command() -> Command {
    // unknown names are rejected by Category::from_str, not by clap
    let arg_category = Arg::new("category")
        .help(CATEGORY_HELP)
        .required(true)
        .index(1);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name("render-nb")
        .version(crate_version!())
        .arg(arg_category)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments, exiting with a usage message on error
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the requested category name, unvalidated
///
/// # Errors
/// Returns an error if the argument is missing
pub fn get_category(matches: &ArgMatches) -> Result<String> {
    matches
        .get_one::<String>("category")
        .cloned()
        .ok_or_else(|| generic_error("No notebook group given"))
}

/// Gets the configuration file path
pub fn get_config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the path of the log file
///
/// The file lives in the platform configuration directory unless
/// `--log-locally` is given. An empty name disables file logging.
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined or created
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() || matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path.as_path().to_str().ok_or_else(|| {
            generic_error(&format!("Failed to convert path to string: {:?}", path))
        })?;
        Ok(path_str.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_is_positional() {
        let matches = build_command().get_matches_from(["render-nb", "estimation"]);
        assert_eq!(get_category(&matches).unwrap(), "estimation");
        assert!(!is_dry_run(&matches));
        assert_eq!(get_config_path(&matches), PathBuf::from("render.yaml"));
    }

    #[test]
    fn test_category_is_required() {
        let result = build_command().try_get_matches_from(["render-nb"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_category_is_left_to_the_renderer() {
        let matches = build_command().get_matches_from(["render-nb", "tutorial"]);
        assert_eq!(get_category(&matches).unwrap(), "tutorial");
    }

    #[test]
    fn test_flags() {
        let matches = build_command().get_matches_from([
            "render-nb",
            "core",
            "--dry",
            "-vv",
            "--config",
            "other.yaml",
        ]);
        assert!(is_dry_run(&matches));
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);
        assert_eq!(get_config_path(&matches), PathBuf::from("other.yaml"));
    }

    #[test]
    fn test_local_log_file() {
        let matches =
            build_command().get_matches_from(["render-nb", "core", "-L", "-l", "batch.log"]);
        assert_eq!(get_log_file(&matches).unwrap(), "batch.log");

        let matches = build_command().get_matches_from(["render-nb", "core", "-l", ""]);
        assert_eq!(get_log_file(&matches).unwrap(), "");
    }
}
