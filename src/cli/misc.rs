use fmf::signature::Signature;

/// Print a short summary of a parsed signature, in the same `c `-prefixed
/// commentary style the teacher's CLI reports on a parsed DIMACS file.
pub fn examine_parse_report(signature: &Signature) {
    println!("c Read        {} functions.", signature.functions.len());
    println!("c Read        {} predicates.", signature.predicates.len());
    println!("c Read        {} clauses.", signature.clauses.len());
    if signature.is_epr() {
        println!("c Problem is effectively propositional (EPR).");
    }
}
