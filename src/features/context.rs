//! Name-to-line binding for multi-curve specifications.
//!
//! A [`Context`] is an immutable set of possible bijective mappings from
//! symbolic names to line indices. Clauses that mention names narrow the
//! set; if every assignment is ruled out, the clause fails. Inputs have
//! a handful of lines at most, so the assignment set stays tiny even
//! though expansion is factorial in principle.

use std::collections::BTreeMap;

use crate::core::Input;

/// One possible mapping of names to line indices. Bijective: no two
/// names share a line.
pub type Assignment = BTreeMap<String, usize>;

/// An immutable set of candidate name-to-line assignments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    line_count: usize,
    names: Vec<String>,
    assignments: Vec<Assignment>,
}

impl Context {
    /// The standard name for a numbered line: A to Z for lines 0 to 25.
    pub fn standard_line_name(index: usize) -> String {
        char::from(b'A' + (index as u8)).to_string()
    }

    /// An empty context over this input: one assignment binding nothing.
    pub fn new(input: &Input) -> Self {
        Context {
            line_count: input.lines().len(),
            names: vec![],
            assignments: vec![Assignment::new()],
        }
    }

    /// The current candidate assignments.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Narrow this context with a predicate over assignments that bind
    /// all of `names`.
    ///
    /// Each unseen name is expanded over every line not already used by
    /// the assignment; assignments failing the predicate are dropped.
    /// Returns `None` when nothing survives.
    pub fn make_new_context<F>(&self, is_valid: F, names: &[&str]) -> Option<Context>
    where
        F: Fn(&Assignment) -> bool,
    {
        let mut context = self.clone();
        for name in names {
            context = context.put_if_absent(name);
        }

        let assignments: Vec<Assignment> = context
            .assignments
            .iter()
            .filter(|assignment| is_valid(assignment))
            .cloned()
            .collect();

        if assignments.is_empty() {
            None
        } else {
            Some(Context {
                line_count: context.line_count,
                names: context.names,
                assignments,
            })
        }
    }

    /// Expand every assignment over all unused lines for a new name.
    /// Known names leave the context unchanged.
    fn put_if_absent(&self, name: &str) -> Context {
        if self.names.iter().any(|n| n == name) {
            return self.clone();
        }

        let assignments: Vec<Assignment> = self
            .assignments
            .iter()
            .flat_map(|assignment| {
                (0..self.line_count)
                    .filter(|line| !assignment.values().any(|used| used == line))
                    .map(|line| {
                        let mut next = assignment.clone();
                        next.insert(name.to_string(), line);
                        next
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let mut names = self.names.clone();
        names.push(name.to_string());

        Context {
            line_count: self.line_count,
            names,
            assignments,
        }
    }
}
