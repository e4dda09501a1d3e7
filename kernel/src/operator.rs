//! Operators and the operator table.
//!
//! An [`Operator`] is a named, pure transition `&S -> Option<S>` paired with a
//! fixed edge cost. `None` is the normal "not applicable here" signal (for
//! example a move that would leave the board); it is never an error.
//!
//! The [`OperatorTable`] is the ordered catalog the engine expands with.
//! Expansion applies operators in table order, so the table order is part of
//! the search's determinism contract.

use std::collections::BTreeSet;
use std::fmt;

use crate::state::Cost;

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

type Transition<S> = Box<dyn Fn(&S) -> Option<S> + Send + Sync>;

/// A named state transition with a table-supplied cost.
pub struct Operator<S> {
    name: String,
    cost: Cost,
    transition: Transition<S>,
}

impl<S> Operator<S> {
    /// Build an operator from a name, an edge cost and a transition function.
    ///
    /// The transition must be pure and total: it returns `None` when the move
    /// is illegal for the given state, never an unchanged copy of its input.
    pub fn new<F>(name: impl Into<String>, cost: Cost, transition: F) -> Self
    where
        F: Fn(&S) -> Option<S> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            cost,
            transition: Box::new(transition),
        }
    }

    /// Human-readable name, used in path traces.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Edge cost charged when this operator produces a child.
    #[must_use]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Apply the transition. `None` means the operator is inapplicable.
    #[must_use]
    pub fn apply(&self, state: &S) -> Option<S> {
        (self.transition)(state)
    }
}

impl<S> fmt::Debug for Operator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// OperatorTableError
// ---------------------------------------------------------------------------

/// Error type for operator table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorTableError {
    /// The table has no operators; nothing could ever be expanded.
    Empty,
    /// Two operators share the same name.
    DuplicateName { name: String },
    /// An operator declares a negative cost (closed nodes are never re-opened).
    NegativeCost { name: String, cost: Cost },
}

impl fmt::Display for OperatorTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "operator table is empty"),
            Self::DuplicateName { name } => {
                write!(f, "duplicate operator name in table: {name}")
            }
            Self::NegativeCost { name, cost } => {
                write!(f, "operator {name} has negative cost {cost}")
            }
        }
    }
}

impl std::error::Error for OperatorTableError {}

// ---------------------------------------------------------------------------
// OperatorTable
// ---------------------------------------------------------------------------

/// Ordered, name-unique collection of operators.
#[derive(Debug)]
pub struct OperatorTable<S> {
    operators: Vec<Operator<S>>,
}

impl<S> OperatorTable<S> {
    /// Build a table from operators in expansion order.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorTableError::Empty`] for an empty list,
    /// [`OperatorTableError::DuplicateName`] if two operators share a name, and
    /// [`OperatorTableError::NegativeCost`] if any cost is below zero.
    pub fn new(operators: Vec<Operator<S>>) -> Result<Self, OperatorTableError> {
        if operators.is_empty() {
            return Err(OperatorTableError::Empty);
        }
        let mut seen = BTreeSet::new();
        for op in &operators {
            if op.cost < 0 {
                return Err(OperatorTableError::NegativeCost {
                    name: op.name.clone(),
                    cost: op.cost,
                });
            }
            if !seen.insert(op.name.as_str()) {
                return Err(OperatorTableError::DuplicateName {
                    name: op.name.clone(),
                });
            }
        }
        Ok(Self { operators })
    }

    /// Look up an operator by its table index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Operator<S>> {
        self.operators.get(index)
    }

    /// Look up an operator by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Operator<S>> {
        self.operators.iter().find(|op| op.name == name)
    }

    /// Operators in expansion order.
    pub fn iter(&self) -> impl Iterator<Item = &Operator<S>> {
        self.operators.iter()
    }

    /// Number of operators (the maximum branching factor).
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Always `false` for a constructed table; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl<'a, S> IntoIterator for &'a OperatorTable<S> {
    type Item = &'a Operator<S>;
    type IntoIter = std::slice::Iter<'a, Operator<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.operators.iter()
    }
}
