/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Wildcard character used in path patterns
pub const WILDCARD: &str = "*";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the platform configuration directory, which is where the
/// log file lives unless logging locally.
pub const APPLICATION: &str = "nb_render";

/// Suffix appended to a category name to get its directory name
pub const CATEGORY_DIRECTORY_SUFFIX: &str = "_examples";

/// Directory holding one subdirectory of notebooks per category
pub const DEFAULT_INPUT_ROOT: &str = "rail/examples";

/// Directory receiving the rendered documents
pub const DEFAULT_OUTPUT_ROOT: &str = "docs/rendered";

/// Extension of the notebooks to render
pub const DEFAULT_NOTEBOOK_EXTENSION: &str = "ipynb";

/// Program used for the conversion
pub const DEFAULT_CONVERTER_PROGRAM: &str = "jupyter";

/// Subcommand of the converter program
pub const DEFAULT_CONVERTER_SUBCOMMAND: &str = "nbconvert";

/// Target document format, which doubles as the output extension
pub const DEFAULT_TARGET_FORMAT: &str = "rst";

/// Exit status recorded when the converter cannot be started at all
///
/// Matches what a shell reports for a command it cannot find.
pub const SPAWN_FAILURE_STATUS: i32 = 127;

/// Exit status recorded when the converter was terminated by a signal
pub const SIGNAL_TERMINATION_STATUS: i32 = -1;

/// Help text for the category positional argument
pub const CATEGORY_HELP: &str =
    "Notebook group to render: core, creation, estimation, evaluation or goldenspike";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "List the conversions without running them";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file to the current directory instead of the config directory";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "render.yaml";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "render-nb.log";
