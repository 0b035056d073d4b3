/*!
Clauses of the reference engine, and propagation over their watched literals.

Each stored clause has at least two literals, and watches the literals at indices `0` and `1`.
The watch list of a literal holds the key of each clause watching the literal.

During propagation the list of the literal made false is taken from the database, so other lists may be extended while it is inspected.
Clauses are only moved to the list of a literal which is not false, and so the taken list never receives a key while it is away.
*/

use crate::{
    engine::cdcl::{literal::Lit, trail::Trail},
    misc::log::targets,
};

pub struct Clause {
    pub literals: Vec<Lit>,

    /// Whether the clause was learnt, rather than added.
    pub learnt: bool,
}

#[derive(Default)]
pub struct ClauseDB {
    clauses: Vec<Clause>,

    /// Keys of clauses watching each literal, indexed by [Lit::index].
    watches: Vec<Vec<usize>>,
}

impl ClauseDB {
    pub fn ensure_var(&mut self, var: usize) {
        let required = 2 * (var + 1);
        if self.watches.len() < required {
            self.watches.resize_with(required, Vec::new);
        }
    }

    pub fn get(&self, key: usize) -> &Clause {
        &self.clauses[key]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn learnt_count(&self) -> usize {
        self.clauses.iter().filter(|clause| clause.learnt).count()
    }

    /// Stores a clause, watching the first two literals, and returns the key of the clause.
    pub fn attach(&mut self, literals: Vec<Lit>, learnt: bool) -> usize {
        debug_assert!(literals.len() > 1);
        let key = self.clauses.len();
        self.watches[literals[0].index()].push(key);
        self.watches[literals[1].index()].push(key);
        self.clauses.push(Clause { literals, learnt });
        key
    }
}

/// Propagates each assignment on the trail not yet propagated.
///
/// Returns the key of a conflicting clause, if some clause is false on the valuation.
pub fn propagate(trail: &mut Trail, db: &mut ClauseDB) -> Option<usize> {
    while trail.q_head < trail.literals.len() {
        let literal = trail.literals[trail.q_head];
        trail.q_head += 1;
        let false_literal = !literal;

        let mut watchers = std::mem::take(&mut db.watches[false_literal.index()]);
        let mut conflict = None;
        let mut index = 0;

        'watch_loop: while index < watchers.len() {
            let key = watchers[index];
            let literals = &mut db.clauses[key].literals;

            if literals[0] == false_literal {
                literals.swap(0, 1);
            }
            let first = literals[0];
            if trail.value_lit(first) == Some(true) {
                index += 1;
                continue 'watch_loop;
            }

            for candidate in 2..literals.len() {
                if trail.value_lit(literals[candidate]) != Some(false) {
                    literals.swap(1, candidate);
                    db.watches[literals[1].index()].push(key);
                    watchers.swap_remove(index);
                    continue 'watch_loop;
                }
            }

            match trail.value_lit(first) {
                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on clause {key}");
                    conflict = Some(key);
                    break 'watch_loop;
                }
                _ => {
                    trail.assign(first, Some(key));
                    index += 1;
                }
            }
        }

        db.watches[false_literal.index()] = watchers;

        if conflict.is_some() {
            trail.q_head = trail.literals.len();
            return conflict;
        }
    }
    None
}
