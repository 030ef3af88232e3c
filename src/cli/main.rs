/*!
A simple CLI interface to the library.

# Use

```sh
fmf_cli [--option(=value)]* file
```

## Options

No configuration option is required. Though, of note:

- `--start_size=N` sets the initial domain size.
- `--use_constants_as_start` starts at the number of constants instead.
- `--symmetry_ratio=F` scales the canonicity window.
- `--widget_order=function_first|argument_first|diagonal`
- `--symbol_order=occurrence|preprocessed_usage|usage`
- `--time_limit=SECONDS` bounds the whole search.
- `--dimacs-snapshot=PATH` writes each round's SAT problem as DIMACS CNF.

For full documentation of the supported options, see the source of [config::parse_args].
*/

mod config;
use config::CliConfig;

mod misc;
use misc::examine_parse_report;

mod dimacs_snapshot;

use fmf::input;
use fmf::reports::Outcome;
use fmf::search::SearchLoop;

/// Entrypoint to the CLI.
fn main() {
    #[cfg(feature = "cli_logging")]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("c usage: fmf_cli [--option(=value)]* file");
        std::process::exit(1);
    }

    let mut cli_options = CliConfig::default();
    let cfg = match config::parse_args(&args, &mut cli_options) {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let path = args.last().unwrap();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            println!("c could not read {path}: {e}");
            std::process::exit(1);
        }
    };

    let signature = match input::parse(&text) {
        Ok(signature) => signature,
        Err(e) => {
            println!("c parse error: {e:?}");
            std::process::exit(1);
        }
    };

    examine_parse_report(&signature);

    let outcome = SearchLoop::run_with(&signature, &cfg, |n, encoded| {
        if let Some(base) = &cli_options.dimacs_snapshot {
            match dimacs_snapshot::write_snapshot(base, n, encoded.layout.total_vars, encoded.all_clauses()) {
                Ok(path) => println!("c wrote snapshot: {}", path.display()),
                Err(e) => println!("c could not write snapshot: {e}"),
            }
        }
    });

    println!("s {outcome}");

    match outcome {
        Outcome::Satisfiable(model) => {
            println!("{model}");
        }

        Outcome::Refutation(_) => {}

        Outcome::TimeLimit => std::process::exit(2),

        Outcome::Unknown => std::process::exit(2),
    }
}
