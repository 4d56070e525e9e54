use crate::graph::Graph;

/// A rewrite rule: a pattern graph paired with the graph that replaces it.
///
/// A production is the unit consumed by an external graph-transformation
/// engine. It is immutable once built, and no validation is performed here
/// that the two graphs are structurally compatible; that is the engine's
/// concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    pattern: Graph,
    replacement: Graph,
}

impl Production {
    pub fn new(pattern: Graph, replacement: Graph) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    pub fn pattern(&self) -> &Graph {
        &self.pattern
    }

    pub fn replacement(&self) -> &Graph {
        &self.replacement
    }
}
