// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::{self, Flags};
use iced_compare::config::paths;
use iced_compare::tracing_setup::init_tracing;
use std::process::ExitCode;

const HELP: &str = "\
iced_compare: drag a divider across two overlaid images

USAGE:
  iced_compare [OPTIONS] <BEFORE> <AFTER>

OPTIONS:
  --before-label <TEXT>   Label above the left side
  --after-label <TEXT>    Label above the right side
  --lang <LOCALE>         UI language (en-US, es)
  --config-dir <DIR>      Override the settings directory
  --debug                 Verbose logging
  -h, --help              Print this help
";

struct Cli {
    flags: Flags,
    config_dir: Option<String>,
    debug: bool,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Cli, pico_args::Error> {
    let before_label = args.opt_value_from_str("--before-label")?;
    let after_label = args.opt_value_from_str("--after-label")?;
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let debug = args.contains("--debug");
    let before = args.opt_free_from_str()?;
    let after = args.opt_free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments left: {rest:?}");
    }

    Ok(Cli {
        flags: Flags {
            before,
            after,
            before_label,
            after_label,
            lang,
        },
        config_dir,
        debug,
    })
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = init_tracing(cli.debug) {
        eprintln!("{err}");
    }
    paths::init_cli_override(cli.config_dir);

    match app::run(cli.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
