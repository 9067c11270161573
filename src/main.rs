// SPDX-License-Identifier: MPL-2.0
use iced_scrub::config;
use iced_scrub::gesture::GestureOptions;
use iced_scrub::trace::Trace;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_scrub - replay pointer gesture traces against an in-memory media surface

USAGE:
  iced_scrub replay <TRACE.toml> [OPTIONS]

OPTIONS:
  --symmetric-touch     Give touch input press/hold/tap semantics
  --clamp-drag-seek     Clamp drag scrubbing to [0, duration]
  --config-dir <DIR>    Read settings.toml from DIR
  -h, --help            Print this help
";

struct Flags {
    trace: PathBuf,
    symmetric_touch: bool,
    clamp_drag_seek: bool,
    config_dir: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let symmetric_touch = args.contains("--symmetric-touch");
    let clamp_drag_seek = args.contains("--clamp-drag-seek");
    let config_dir = args.opt_value_from_str("--config-dir")?;

    match args.subcommand()?.as_deref() {
        Some("replay") => {}
        _ => return Ok(None),
    }
    let trace = args.free_from_str()?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unused arguments: {:?}", remaining);
    }

    Ok(Some(Flags {
        trace,
        symmetric_touch,
        clamp_drag_seek,
        config_dir,
    }))
}

fn main() -> ExitCode {
    env_logger::init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let (config, warning) = config::load_with_override(flags.config_dir);
    if let Some(warning) = warning {
        log::warn!("Using default settings ({warning})");
    }

    let mut options = GestureOptions::from(&config);
    options.symmetric_touch |= flags.symmetric_touch;
    options.clamp_drag_seek |= flags.clamp_drag_seek;

    match Trace::load(&flags.trace) {
        Ok(trace) => {
            println!("{}", trace.replay(options));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to replay {}: {err}", flags.trace.display());
            ExitCode::FAILURE
        }
    }
}
