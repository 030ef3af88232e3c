use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, SatBackend, SymbolOrderPolicy, WidgetOrder};

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// If set, write a DIMACS snapshot of each round's SAT problem here,
    /// with the round's `n` appended to the file stem (spec §6, "Persistent state").
    pub dimacs_snapshot: Option<PathBuf>,
}

pub enum ConfigError {
    NonSpecific(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Parse CLI arguments to a [Config] struct and a [CliConfig] struct.
///
/// If an unrecognised argument or invalid option is found a message is
/// printed and an error is returned; the caller is expected to exit.
pub(super) fn parse_args(args: &[String], cli_options: &mut CliConfig) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    // args[0] is the program name, args[last] is the input path (see `main`);
    // everything between is a `--flag` or `--flag=value` option.
    'arg_examination: for arg in &args[1..args.len() - 1] {
        let mut split = arg.split('=');
        match split.next() {
            Some("--use_constants_as_start") => {
                println!("c n will start at the number of constants.");
                cfg.use_constants_as_start = true;
            }

            Some("--use_model_size_cap") => {
                println!("c the model-size cap axiom will be emitted each round.");
                cfg.use_model_size_cap = true;
            }

            Some("--start_size") => {
                let (min, max) = cfg.start_size.min_max();
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u32>() {
                        if min <= value && value <= max {
                            println!("c start_size set to: {value}");
                            cfg.start_size.value = value;
                            continue 'arg_examination;
                        }
                    }
                }
                println!("c start_size requires a value between {min} and {max}");
                return Err(ConfigError::NonSpecific("start_size"));
            }

            Some("--symmetry_ratio") => {
                let (min, max) = cfg.symmetry_ratio.min_max();
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<f64>() {
                        if min <= value && value <= max {
                            println!("c symmetry_ratio set to: {value}");
                            cfg.symmetry_ratio.value = value;
                            continue 'arg_examination;
                        }
                    }
                }
                println!("c symmetry_ratio requires a value between {min} and {max}");
                return Err(ConfigError::NonSpecific("symmetry_ratio"));
            }

            Some("--time_limit") => {
                if let Some(request) = split.next() {
                    if let Ok(seconds) = request.parse::<u64>() {
                        println!("c time_limit set to: {seconds}s");
                        cfg.time_limit.value = Duration::from_secs(seconds);
                        continue 'arg_examination;
                    }
                }
                println!("c time_limit requires a value in seconds");
                return Err(ConfigError::NonSpecific("time_limit"));
            }

            Some("--widget_order") => {
                match split.next() {
                    Some("function_first") => cfg.widget_order = WidgetOrder::FunctionFirst,
                    Some("argument_first") => cfg.widget_order = WidgetOrder::ArgumentFirst,
                    Some("diagonal") => cfg.widget_order = WidgetOrder::Diagonal,
                    _ => {
                        println!("c widget_order must be one of: function_first, argument_first, diagonal");
                        return Err(ConfigError::NonSpecific("widget_order"));
                    }
                }
                println!("c widget_order set to: {:?}", cfg.widget_order);
            }

            Some("--symbol_order") => {
                match split.next() {
                    Some("occurrence") => cfg.symbol_order = SymbolOrderPolicy::Occurrence,
                    Some("preprocessed_usage") => cfg.symbol_order = SymbolOrderPolicy::PreprocessedUsage,
                    Some("usage") => cfg.symbol_order = SymbolOrderPolicy::Usage,
                    _ => {
                        println!("c symbol_order must be one of: occurrence, preprocessed_usage, usage");
                        return Err(ConfigError::NonSpecific("symbol_order"));
                    }
                }
                println!("c symbol_order set to: {:?}", cfg.symbol_order);
            }

            Some("--sat_backend") => {
                match split.next() {
                    Some("builtin_dpll") => cfg.sat_backend = SatBackend::BuiltinDpll,
                    _ => {
                        println!("c sat_backend must be one of: builtin_dpll");
                        return Err(ConfigError::NonSpecific("sat_backend"));
                    }
                }
            }

            Some("--dimacs-snapshot") => {
                if let Some(path) = split.next() {
                    println!("c DIMACS snapshots will be written to: {path}*");
                    cli_options.dimacs_snapshot = Some(PathBuf::from(path));
                    continue 'arg_examination;
                }
                println!("c --dimacs-snapshot requires a path");
                return Err(ConfigError::NonSpecific("dimacs-snapshot"));
            }

            Some(other) => {
                println!("c Unknown option: {other}");
                return Err(ConfigError::NonSpecific("unknown option"));
            }

            None => {}
        }
    }

    Ok(cfg)
}
