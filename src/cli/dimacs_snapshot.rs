//! A thin DIMACS writer for the optional per-round snapshot (spec §6,
//! "Persistent state: ... a DIMACS snapshot of the per-round SAT problem
//! may be written alongside the model"), grounded on the shape of
//! `otter_sat::builder::dimacs`'s parser, inverted into writing.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fmf::solver::Lit;

/// Write one round's clause set as DIMACS CNF to `<base>_<n>.cnf`.
pub fn write_snapshot<'a>(
    base: &Path,
    n: u32,
    total_vars: u64,
    clauses: impl Iterator<Item = &'a Vec<Lit>>,
) -> io::Result<PathBuf> {
    let mut path = base.to_path_buf();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.set_file_name(format!("{stem}_{n}.cnf"));

    let clauses: Vec<&Vec<Lit>> = clauses.collect();
    let mut file = File::create(&path)?;
    writeln!(file, "p cnf {total_vars} {}", clauses.len())?;
    for clause in clauses {
        for lit in clause {
            write!(file, "{lit} ")?;
        }
        writeln!(file, "0")?;
    }

    Ok(path)
}
