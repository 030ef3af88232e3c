/*!
A minimal first-order clause-set text format: one clause per line,
whitespace-separated literals.

Grammar (informal):
- a literal is `~atom` (negated predicate atom), `atom` (predicate atom),
  `term=term` (variable/definitional equality), or `term!=term` (its negation).
- a term is `Name` (a variable — identifiers starting with an uppercase
  letter, Prolog-style), `name` (a constant), or `name(term, term, ...)`
  (a function/predicate application).

This is ambient I/O glue (spec's ClausePreparer/Signature are external
contracts); it performs the minimal definitional flattening needed to turn
surface syntax like `f(f(X)) = X` into the flat literal shape the rest of
the crate assumes (spec §4.1), introducing a fresh variable and a negated
defining literal per non-variable subterm.
*/

use std::collections::HashMap;

use crate::signature::{FunctionId, PredicateId, RawClause, RawLiteral, Signature, SymbolInfo, VarId};
use crate::types::err::ParseError;

#[derive(Clone, Debug)]
enum Term {
    Var(String),
    App(String, Vec<Term>),
}

/// Interns function and predicate symbols by `(name, arity)`, accumulating
/// into a [Signature] across every line of a file.
#[derive(Default)]
struct SymbolTable {
    functions: HashMap<String, FunctionId>,
    predicates: HashMap<String, PredicateId>,
}

impl SymbolTable {
    fn function(&mut self, signature: &mut Signature, name: &str, arity: u32) -> Result<FunctionId, ParseError> {
        if let Some(&id) = self.functions.get(name) {
            if signature.function_arity(id) != arity {
                return Err(ParseError::ArityMismatch(name.to_string()));
            }
            return Ok(id);
        }
        let id = FunctionId(signature.functions.len() as u32);
        signature.functions.push(SymbolInfo { name: name.to_string(), arity });
        self.functions.insert(name.to_string(), id);
        Ok(id)
    }

    fn predicate(&mut self, signature: &mut Signature, name: &str, arity: u32) -> Result<PredicateId, ParseError> {
        if let Some(&id) = self.predicates.get(name) {
            if signature.predicate_arity(id) != arity {
                return Err(ParseError::ArityMismatch(name.to_string()));
            }
            return Ok(id);
        }
        let id = PredicateId(signature.predicates.len() as u32);
        signature.predicates.push(SymbolInfo { name: name.to_string(), arity });
        self.predicates.insert(name.to_string(), id);
        Ok(id)
    }
}

#[derive(Default)]
struct VarAlloc {
    next: u32,
    named: HashMap<String, VarId>,
}

impl VarAlloc {
    fn named(&mut self, name: &str) -> VarId {
        *self.named.entry(name.to_string()).or_insert_with(|| {
            let id = VarId(self.next);
            self.next += 1;
            id
        })
    }

    fn fresh(&mut self) -> VarId {
        let id = VarId(self.next);
        self.next += 1;
        id
    }
}

/// Parse a whole clause-set: one clause per non-empty, non-comment line.
/// Lines starting with `#` or `%` are comments.
pub fn parse(text: &str) -> Result<Signature, ParseError> {
    let mut signature = Signature::default();
    let mut symbols = SymbolTable::default();
    let mut any = false;

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }
        any = true;
        let clause = parse_clause(line, lineno + 1, &mut signature, &mut symbols)?;
        signature.clauses.push(clause);
    }

    if !any {
        return Err(ParseError::Empty);
    }

    Ok(signature)
}

fn parse_clause(
    line: &str,
    lineno: usize,
    signature: &mut Signature,
    symbols: &mut SymbolTable,
) -> Result<RawClause, ParseError> {
    let mut literals = Vec::new();
    let mut vars = VarAlloc::default();

    for token in line.split_whitespace() {
        parse_literal(token, lineno, signature, symbols, &mut vars, &mut literals)?;
    }

    Ok(literals)
}

fn parse_literal(
    token: &str,
    lineno: usize,
    signature: &mut Signature,
    symbols: &mut SymbolTable,
    vars: &mut VarAlloc,
    out: &mut Vec<RawLiteral>,
) -> Result<(), ParseError> {
    if let Some(idx) = token.find("!=") {
        let (lhs, rhs) = (&token[..idx], &token[idx + 2..]);
        return parse_equation(lhs, rhs, false, lineno, signature, symbols, vars, out);
    }
    if let Some(idx) = token.find('=') {
        let (lhs, rhs) = (&token[..idx], &token[idx + 1..]);
        return parse_equation(lhs, rhs, true, lineno, signature, symbols, vars, out);
    }

    let (negated, atom) = match token.strip_prefix('~') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if atom.is_empty() {
        return Err(ParseError::Negation(lineno));
    }
    let term = parse_term(atom, lineno)?;
    let (name, args) = match term {
        Term::App(name, args) => (name, args),
        Term::Var(_) => return Err(ParseError::Line(lineno)),
    };
    let arg_vars: Vec<VarId> = args
        .iter()
        .map(|a| flatten_term(a, lineno, signature, symbols, vars, out))
        .collect::<Result<_, _>>()?;
    let predicate = symbols.predicate(signature, &name, arg_vars.len() as u32)?;
    out.push(RawLiteral::Pred {
        predicate,
        args: arg_vars,
        polarity: !negated,
    });
    Ok(())
}

fn parse_equation(
    lhs: &str,
    rhs: &str,
    polarity: bool,
    lineno: usize,
    signature: &mut Signature,
    symbols: &mut SymbolTable,
    vars: &mut VarAlloc,
    out: &mut Vec<RawLiteral>,
) -> Result<(), ParseError> {
    if lhs.is_empty() || rhs.is_empty() {
        return Err(ParseError::MissingDelimiter(lineno));
    }
    let lhs_term = parse_term(lhs, lineno)?;
    let rhs_term = parse_term(rhs, lineno)?;

    // A definitional equality `f(x̄) = y` is kept as a single DefEq literal
    // (rather than flattened into an auxiliary variable) when one side is a
    // bare function application and the other a variable — the common case
    // and the one the flat literal shape exists to express directly.
    match (lhs_term, rhs_term) {
        (Term::App(name, args), Term::Var(y)) | (Term::Var(y), Term::App(name, args)) => {
            let arg_vars: Vec<VarId> = args
                .iter()
                .map(|a| flatten_term(a, lineno, signature, symbols, vars, out))
                .collect::<Result<_, _>>()?;
            let function = symbols.function(signature, &name, arg_vars.len() as u32)?;
            let image = vars.named(&y);
            out.push(RawLiteral::DefEq {
                function,
                args: arg_vars,
                image,
                polarity,
            });
            Ok(())
        }
        (lhs_term, rhs_term) => {
            let x = flatten_term(&lhs_term, lineno, signature, symbols, vars, out)?;
            let y = flatten_term(&rhs_term, lineno, signature, symbols, vars, out)?;
            out.push(RawLiteral::VarEq { x, y, polarity });
            Ok(())
        }
    }
}

fn flatten_term(
    term: &Term,
    lineno: usize,
    signature: &mut Signature,
    symbols: &mut SymbolTable,
    vars: &mut VarAlloc,
    out: &mut Vec<RawLiteral>,
) -> Result<VarId, ParseError> {
    match term {
        Term::Var(name) => Ok(vars.named(name)),
        Term::App(name, args) => {
            let arg_vars: Vec<VarId> = args
                .iter()
                .map(|a| flatten_term(a, lineno, signature, symbols, vars, out))
                .collect::<Result<_, _>>()?;
            let function = symbols.function(signature, name, arg_vars.len() as u32)?;
            let image = vars.fresh();
            out.push(RawLiteral::DefEq {
                function,
                args: arg_vars,
                image,
                polarity: false,
            });
            Ok(image)
        }
    }
}

fn parse_term(s: &str, lineno: usize) -> Result<Term, ParseError> {
    if let Some(open) = s.find('(') {
        if !s.ends_with(')') {
            return Err(ParseError::MissingDelimiter(lineno));
        }
        let name = &s[..open];
        let inner = &s[open + 1..s.len() - 1];
        let args = split_args(inner, lineno)?
            .into_iter()
            .map(|a| parse_term(a.trim(), lineno))
            .collect::<Result<Vec<_>, _>>()?;
        if name.is_empty() {
            return Err(ParseError::Line(lineno));
        }
        Ok(Term::App(name.to_string(), args))
    } else {
        if s.is_empty() {
            return Err(ParseError::Line(lineno));
        }
        if s.chars().next().unwrap().is_uppercase() {
            Ok(Term::Var(s.to_string()))
        } else {
            Ok(Term::App(s.to_string(), vec![]))
        }
    }
}

fn split_args(inner: &str, lineno: usize) -> Result<Vec<&str>, ParseError> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut depth = 0i32;
    let mut start = 0usize;
    let mut parts = Vec::new();
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::MissingDelimiter(lineno));
    }
    parts.push(&inner[start..]);
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_propositional_clauses() {
        let sig = parse("p q\n~p\n").unwrap();
        assert_eq!(sig.clauses.len(), 2);
        assert_eq!(sig.predicates.len(), 2);
    }

    #[test]
    fn parses_constant_equalities() {
        let sig = parse("a=b\nb=c\na!=c\n").unwrap();
        assert_eq!(sig.clauses.len(), 3);
        assert_eq!(sig.functions.len(), 3);
    }

    #[test]
    fn flattens_nested_function_application() {
        let sig = parse("f(f(X))=X\nf(a)!=a\n").unwrap();
        assert_eq!(sig.clauses.len(), 2);
        // f(f(X)) = X: the inner f(X) flattens to one auxiliary DefEq, and the
        // outer equation is itself a direct DefEq against the result.
        assert_eq!(sig.clauses[0].len(), 2);
        // f(a) != a: both sides need flattening (neither is a bare variable),
        // so this clause gets two auxiliary DefEq literals plus the VarEq.
        assert_eq!(sig.clauses[1].len(), 4);
    }

    #[test]
    fn rejects_arity_mismatch() {
        let err = parse("p(X)\np(X,Y)\n").unwrap_err();
        assert!(matches!(err, ParseError::ArityMismatch(_)));
    }
}
