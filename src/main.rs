// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> RunConfig --> Logging --> run_generate_command
//! ```

use std::process::ExitCode;

use cmm::cli::{self, Cli};
use cmm::cmd::generate::{GenerateOptions, run_generate_command};
use cmm::config::RunConfig;
use cmm::config::types::LogSettings;
use cmm::error::Result;
use cmm::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;
use tracing::debug;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(solution_dir) = cli.generate.solution_dir() else {
        println!("Argument Error: parameter solution_dir was not set.");
        return ExitCode::FAILURE;
    };

    let (config, loaded_files) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config.log)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    for line in &loaded_files {
        debug!("config file {line}");
    }

    let options = GenerateOptions {
        dry: cli.global.dry,
        dump: cli.generate.dump,
    };
    match run_generate_command(solution_dir, &config, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(settings: &LogSettings) -> LogConfig {
    let log_file = (!settings.file.as_os_str().is_empty()).then(|| settings.file.display().to_string());

    LogConfig::builder()
        .with_console_level(settings.level)
        .with_file_level(settings.file_level)
        .maybe_with_log_file(log_file)
        .build()
}

fn load_config(cli: &Cli) -> Result<(RunConfig, Vec<String>)> {
    let loader = cli.global.add_config_files(RunConfig::builder());
    let loaded_files = loader.format_loaded_files();
    let loader = loader.with_env_prefix("CMM");
    let loader = cli.global.apply_overrides(loader)?;
    let config = cli.generate.apply_overrides(loader)?.build()?;
    Ok((config, loaded_files))
}
