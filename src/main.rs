// Copyright 2024 The suvctl Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod commands;
mod config;
mod console_format;
mod normalize;
mod portal;
mod report;
mod status;
mod types;
mod ui;

use cli::{CliArgs, Command};
use commands::{EXIT_FAILURE, EXIT_OK};
use config::Settings;
use portal::SnapshotPortal;
use std::io::{self, Write};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = CliArgs::parse_args();
    let error_colors = config::error_colors(&args);

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e, error_colors);
        std::process::exit(EXIT_FAILURE);
    }

    let exit_code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            ui::print_error(&e, error_colors);
            EXIT_FAILURE
        }
    };

    std::process::exit(exit_code);
}

/// Dispatch the subcommand and return the process exit code
fn run(args: &CliArgs) -> Result<i32, String> {
    let mut out = io::stdout().lock();

    match &args.command {
        Command::Version => {
            writeln!(out, "suvctl {}", env!("CARGO_PKG_VERSION")).map_err(|e| e.to_string())?;
            Ok(EXIT_OK)
        }
        Command::Grades(grades) => {
            let settings = load_settings(args)?;
            let portal = open_portal(&settings)?;
            commands::run_grades(&portal, &grades.filter(), &settings.render, &mut out)
        }
        Command::Search(search) => {
            // Nothing to search by: explain and leave the portal alone
            let Some(request) = search.request() else {
                writeln!(out, "{}\n\n{}", commands::MISSING_CRITERIA, cli::search_help()).map_err(|e| e.to_string())?;
                return Ok(EXIT_OK);
            };
            let settings = load_settings(args)?;
            let portal = open_portal(&settings)?;
            commands::run_search(&portal, &request, &settings.render, &mut out)
        }
    }
}

fn load_settings(args: &CliArgs) -> Result<Settings, String> {
    let settings = config::resolve_settings(args)?;

    if settings.render.detailed {
        match &settings.config_file {
            Some(path) => ui::detail(&format!("config file: {}", path.display())),
            None => ui::detail("config file: none"),
        }
        ui::detail(&format!("output format: {}", settings.render.format.name()));
    }

    Ok(settings)
}

fn open_portal(settings: &Settings) -> Result<SnapshotPortal, String> {
    let portal = SnapshotPortal::load(&settings.snapshot)?;
    if settings.render.detailed {
        ui::detail(&format!("snapshot: {}", portal.source().display()));
    }
    Ok(portal)
}
