use std::process;

use clap::Parser;

use bx_manager::catalog::Catalog;
use bx_manager::commands::catalog::catalog;
use bx_manager::commands::combo::combo;
use bx_manager::commands::init::init;
use bx_manager::commands::part::part;
use bx_manager::commands::stats::stats;
use bx_manager::configuration::cli::{Args, Commands};
use bx_manager::configuration::{self, Configuration};
use bx_manager::errors::{Advice, BxError, EnvironmentError};
use bx_manager::logging::{self, Verbosity};
use bx_manager::workspace::Workspace;

fn main() {
    let args = Args::parse();
    let verbosity = Verbosity::new(args.verbose, args.quiet);
    logging::init(false, verbosity);

    if let Err(e) = run(args, verbosity) {
        let mut advice = None;
        if let Verbosity::Normal = verbosity {
            if let Some(adv) = e.advice() {
                advice = Some(adv)
            }
        }

        let any_err = anyhow::Error::from(e);
        logging::err(any_err);

        if let Verbosity::Normal = verbosity {
            if let Some(adv) = advice {
                logging::println_stderr("");
                logging::println_stderr(&adv)
            }
        }

        process::exit(1);
    }
}

fn run(args: Args, verbosity: Verbosity) -> Result<(), BxError> {
    if args.command == Commands::Init {
        init(&args)?;
        return Ok(());
    }

    let cfg = configuration::get(&args)?;

    if args.force_color {
        colored::control::set_override(true);
    } else if let Some(no_color) =
        cfg.no_color()
            .map_err(|source| EnvironmentError::ConfigurationOptionLoading {
                option_name: "no_color".to_string(),
                source,
            })?
    {
        if no_color {
            colored::control::set_override(false);
        }
    }
    logging::init(args.command.json(), verbosity);

    if let Commands::Catalog(opts) = &args.command {
        catalog(&Catalog::builtin(), opts)?;
        return Ok(());
    }

    let collection_file = configuration::get_collection_file(&args, &cfg)
        .map_err(|source| EnvironmentError::ConfigurationOptionLoading {
            option_name: "collection_file".to_string(),
            source,
        })?
        .ok_or(EnvironmentError::CollectionFileUnknown)?;

    let mut workspace = Workspace::open(collection_file, Catalog::builtin())?;

    match &args.command {
        Commands::Init | Commands::Catalog(_) => {
            unreachable!()
        }
        Commands::Part(opts) => {
            part(&mut workspace, opts, &cfg)?;
        }
        Commands::Combo(opts) => {
            combo(&mut workspace, opts, &cfg)?;
        }
        Commands::Stats(_) => {
            stats(workspace.collection())?;
        }
    }

    Ok(())
}
