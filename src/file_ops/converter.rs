//! Notebook conversion
//!
//! This module runs the external conversion tool. The tool is started with an
//! explicit argument list, never through a shell, so paths containing spaces
//! or quotes reach it untouched.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use log::{debug, error, warn};

use crate::config::ConverterConfig;
use crate::constants::{SIGNAL_TERMINATION_STATUS, SPAWN_FAILURE_STATUS};
use crate::path_gen::absolute_path;

/// Something that turns one notebook into one document
pub trait Converter {
    /// Converts `source` into `output`, blocking until done
    ///
    /// Returns the exit status of the conversion, where 0 means success.
    fn convert(&mut self, source: &Path, output: &Path) -> i32;
}

/// Runs a command line conversion tool such as `jupyter nbconvert`
#[derive(Debug, Clone)]
pub struct CommandConverter {
    config: ConverterConfig,
}

impl CommandConverter {
    pub fn new(config: ConverterConfig) -> Self {
        CommandConverter { config }
    }

    /// The arguments passed to the program for one conversion
    pub fn arguments(&self, source: &Path, output: &Path) -> Vec<OsString> {
        let mut arguments: Vec<OsString> = Vec::new();
        arguments.extend(self.config.subcommand.iter().map(OsString::from));
        arguments.push("--to".into());
        arguments.push((&self.config.target_format).into());
        arguments.push("--output".into());
        arguments.push(output.into());
        if self.config.execute {
            arguments.push("--execute".into());
        }
        arguments.push(source.into());
        arguments
    }

    fn command(&self, source: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.config.program);
        command.args(self.arguments(source, output));
        command
    }
}

impl Converter for CommandConverter {
    fn convert(&mut self, source: &Path, output: &Path) -> i32 {
        let output = absolute_path(output).unwrap_or_else(|e| {
            warn!("{e}, passing {} as is", output.display());
            output.to_path_buf()
        });

        let mut command = self.command(source, &output);
        debug!("Running {command:?}");

        match command.status() {
            Ok(status) => status.code().unwrap_or_else(|| {
                warn!(
                    "{} was terminated by a signal while converting {}",
                    self.config.program,
                    source.display()
                );
                SIGNAL_TERMINATION_STATUS
            }),
            Err(e) => {
                error!("Failed to start {}: {}", self.config.program, e);
                SPAWN_FAILURE_STATUS
            }
        }
    }
}
