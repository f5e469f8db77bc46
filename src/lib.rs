//! Renders the example notebooks of one category into documentation pages.
//!
//! Notebooks live in `<input_root>/<category>_examples/*.ipynb`. Each one is
//! handed to an external converter (`jupyter nbconvert` by default) which
//! writes `<output_root>/<category>_examples/<name>.rst`. Every notebook is
//! attempted; the ones that failed are reported together at the end.

pub mod category;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::category::Category;
    pub use crate::cli::{
        build_command, get_category, get_config_path, get_log_file, get_matches, get_verbosity,
        is_dry_run,
    };
    pub use crate::config::{ConverterConfig, RenderConfig, load_config, load_or_default};
    pub use crate::errors::{
        Error, Result, batch_conversion_failed_error, file_operation_error, generic_error,
        invalid_category_error,
    };
    pub use crate::file_ops::{CommandConverter, Converter};
    pub use crate::logging::{LogLevel, init_logger};
    pub use crate::workflow::{
        BatchReport, ConversionResult, RenderOptions, render_category, render_group, run_batch,
    };
}
