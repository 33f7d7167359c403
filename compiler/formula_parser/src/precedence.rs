//! Operator precedence table

use std::collections::HashMap;

use formula_lexer::Operator;
use lazy_static::lazy_static;

lazy_static! {
    /// Binding strength of each operator. Higher binds tighter.
    ///
    /// Built once on first use and never mutated, so concurrent readers need
    /// no synchronisation.
    static ref PRECEDENCE: HashMap<Operator, u8> = {
        let mut table = HashMap::new();
        table.insert(Operator::Add, 1);
        table.insert(Operator::Sub, 1);
        table.insert(Operator::Mul, 2);
        table.insert(Operator::Div, 2);
        table
    };
}

/// Precedence level of `op`: 1 for `+ -`, 2 for `* /`.
pub fn precedence(op: Operator) -> u8 {
    PRECEDENCE.get(&op).copied().unwrap_or(0)
}
