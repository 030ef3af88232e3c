/*!
A compact, non-incremental DPLL backend: unit propagation plus branching,
with no clause learning. This is the one bundled [SolverBridge]
implementation (spec §6 names the interface; a full CDCL engine is
out of scope, spec §1).

Branch order is randomised the way the teacher randomises decisions, using
[rand] rather than a fixed tie-break.
*/

use rand::Rng;

use super::{Lit, SolveResult, SolverBridge};

#[derive(Default)]
pub struct DpllBridge {
    num_vars: usize,
    clauses: Vec<Vec<Lit>>,
    model: Vec<Option<bool>>,
}

impl SolverBridge for DpllBridge {
    fn ensure_var_count(&mut self, n: u64) {
        self.num_vars = n as usize;
        self.model = vec![None; self.num_vars + 1];
    }

    fn add_clause(&mut self, lits: &[Lit]) {
        self.clauses.push(lits.to_vec());
    }

    fn solve(&mut self) -> SolveResult {
        let mut assignment = vec![None; self.num_vars + 1];
        if dpll(&self.clauses, &mut assignment) {
            self.model = assignment;
            SolveResult::Satisfiable
        } else {
            SolveResult::Unsatisfiable
        }
    }

    fn value_of(&self, lit: Lit) -> bool {
        let var = lit.unsigned_abs() as usize;
        let value = self.model.get(var).copied().flatten().unwrap_or(false);
        if lit < 0 {
            !value
        } else {
            value
        }
    }
}

/// The status of a clause under a partial assignment.
enum ClauseStatus {
    Satisfied,
    Conflict,
    Unit(Lit),
    Unresolved,
}

fn clause_status(clause: &[Lit], assignment: &[Option<bool>]) -> ClauseStatus {
    let mut unassigned: Option<Lit> = None;
    let mut unassigned_count = 0;
    for &lit in clause {
        let var = lit.unsigned_abs() as usize;
        match assignment[var] {
            Some(value) if (lit > 0) == value => return ClauseStatus::Satisfied,
            Some(_) => {}
            None => {
                unassigned_count += 1;
                unassigned = Some(lit);
            }
        }
    }
    match unassigned_count {
        0 => ClauseStatus::Conflict,
        1 => ClauseStatus::Unit(unassigned.unwrap()),
        _ => ClauseStatus::Unresolved,
    }
}

/// Unit-propagate `clauses` against `assignment` in place. Returns `false` on conflict.
fn propagate(clauses: &[Vec<Lit>], assignment: &mut [Option<bool>]) -> bool {
    loop {
        let mut progressed = false;
        for clause in clauses {
            match clause_status(clause, assignment) {
                ClauseStatus::Conflict => return false,
                ClauseStatus::Unit(lit) => {
                    let var = lit.unsigned_abs() as usize;
                    if assignment[var].is_none() {
                        assignment[var] = Some(lit > 0);
                        progressed = true;
                    }
                }
                ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}
            }
        }
        if !progressed {
            return true;
        }
    }
}

fn pick_unassigned(clauses: &[Vec<Lit>], assignment: &[Option<bool>]) -> Option<usize> {
    for clause in clauses {
        if let ClauseStatus::Unresolved = clause_status(clause, assignment) {
            for &lit in clause {
                let var = lit.unsigned_abs() as usize;
                if assignment[var].is_none() {
                    return Some(var);
                }
            }
        }
    }
    None
}

fn dpll(clauses: &[Vec<Lit>], assignment: &mut Vec<Option<bool>>) -> bool {
    if !propagate(clauses, assignment) {
        return false;
    }

    let var = match pick_unassigned(clauses, assignment) {
        None => return true,
        Some(v) => v,
    };

    let first_true = rand::rng().random_bool(0.5);
    for &value in if first_true { &[true, false] } else { &[false, true] } {
        let mut trial = assignment.clone();
        trial[var] = Some(value);
        if dpll(clauses, &mut trial) {
            *assignment = trial;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_a_tiny_satisfiable_formula() {
        let mut bridge = DpllBridge::default();
        bridge.ensure_var_count(2);
        bridge.add_clause(&[1, 2]);
        bridge.add_clause(&[-1]);
        assert_eq!(bridge.solve(), SolveResult::Satisfiable);
        assert!(!bridge.value_of(1));
        assert!(bridge.value_of(2));
    }

    #[test]
    fn detects_unsatisfiability() {
        let mut bridge = DpllBridge::default();
        bridge.ensure_var_count(1);
        bridge.add_clause(&[1]);
        bridge.add_clause(&[-1]);
        assert_eq!(bridge.solve(), SolveResult::Unsatisfiable);
    }
}
