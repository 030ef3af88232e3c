/*!
The Encoder (spec §4.4): the heart of the system. Given a target domain
size `n`, lays out propositional variables for all `f(d̄)=e` and `p(d̄)`
facts within bounds, then emits clauses for ground facts, clause
instances, functionality, totality, and symmetry breaking.
*/

pub mod layout;

mod ground;
mod instances;
mod functionality;
mod totality;
mod symmetry;

pub use layout::Layout;

use log::trace;

use crate::config::Config;
use crate::misc::log::targets;
use crate::signature::{Prepared, Signature};
use crate::solver::Lit;
use crate::sort::SortedSignature;
use crate::symbol_order::{rebuild_grounded_terms, SymbolOrder};
use crate::types::err::ErrorKind;

/// The emitted clause groups for one round, kept separate so the search
/// loop (or a DIMACS snapshot) can report group sizes.
pub struct Encoded {
    pub layout: Layout,
    pub ground: Vec<Vec<Lit>>,
    pub instances: Vec<Vec<Lit>>,
    pub functionality: Vec<Vec<Lit>>,
    pub ordered_totality: Vec<Vec<Lit>>,
    pub totality: Vec<Vec<Lit>>,
    pub canonicity: Vec<Vec<Lit>>,
    pub model_size_cap: Option<Vec<Lit>>,
}

impl Encoded {
    /// Every clause in emission order (spec §4.5 step 3: ground, instances,
    /// functionality, symmetry-ordered, totality, canonicity).
    pub fn all_clauses(&self) -> impl Iterator<Item = &Vec<Lit>> {
        self.ground
            .iter()
            .chain(self.instances.iter())
            .chain(self.functionality.iter())
            .chain(self.ordered_totality.iter())
            .chain(self.totality.iter())
            .chain(self.canonicity.iter())
            .chain(self.model_size_cap.iter())
    }
}

/// Encode the grounding of `signature` at domain size `n` (spec §4.4, §4.5 step 3).
pub fn encode(
    signature: &Signature,
    prepared: &Prepared,
    sorted: &SortedSignature,
    symbol_order: &mut SymbolOrder,
    config: &Config,
    n: u32,
    max_model_size: Option<u32>,
) -> Result<Encoded, ErrorKind> {
    let layout = Layout::build(signature, n)?;
    rebuild_grounded_terms(symbol_order, sorted, n, config.widget_order);

    trace!(target: targets::ENCODE, "encoding round n={n}, total_vars={}", layout.total_vars);

    let ground = ground::ground_clauses(signature, &prepared.ground, &layout);
    let instances = instances::clause_instances(signature, &prepared.non_ground, sorted, &layout);
    let functionality = functionality::functionality_clauses(signature, sorted, &layout);
    let ordered_totality = symmetry::ordered_totality_clauses(signature, symbol_order, &layout);
    let totality = totality::totality_clauses(signature, sorted, &layout);
    let ratio = config.symmetry_ratio.value;
    let canonicity = symmetry::canonicity_clauses(signature, symbol_order, &layout, ratio, max_model_size);
    let model_size_cap = if config.use_model_size_cap {
        symmetry::model_size_cap_clause(signature, sorted, &layout)
    } else {
        None
    };

    Ok(Encoded {
        layout,
        ground,
        instances,
        functionality,
        ordered_totality,
        totality,
        canonicity,
        model_size_cap,
    })
}
