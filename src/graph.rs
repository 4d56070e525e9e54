use core::fmt;
use indexmap::IndexMap;

/// A property value, tagged with the literal form it was written in.
///
/// The parser stores the literal text exactly as it appeared; no numeric
/// coercion happens at this layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Text assembled from a quoted span.
    Quoted(String),
    /// A decimal digit sequence.
    Number(String),
    /// A bare identifier.
    Bare(String),
}

impl Value {
    pub fn as_str(&self) -> &str {
        match self {
            Value::Quoted(s) | Value::Number(s) | Value::Bare(s) => s,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value properties attached to one node or edge.
///
/// Insertion order is preserved; re-assigning a key keeps its original slot
/// and replaces the value (last write wins).
pub type Properties = IndexMap<String, Value>;

/// A set of nodes and directed edges, each carrying a property map.
///
/// `Graph` is only a container: the parser populates it, and the rewriting
/// engine that consumes productions queries it. Node identifiers are unique.
/// An edge may name identifiers that were never declared as node statements;
/// such identifiers exist in the edge key but are not inserted into the
/// node map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: IndexMap<String, Properties>,
    edges: IndexMap<(String, String), Properties>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, merging `props` into any earlier declaration of the
    /// same identifier.
    pub fn add_node(&mut self, id: impl Into<String>, props: Properties) {
        self.nodes.entry(id.into()).or_default().extend(props);
    }

    /// Adds a directed edge `from -> to`, merging `props` into any earlier
    /// declaration of the same ordered pair.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, props: Properties) {
        self.edges
            .entry((from.into(), to.into()))
            .or_default()
            .extend(props);
    }

    pub fn node(&self, id: &str) -> Option<&Properties> {
        self.nodes.get(id)
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&Properties> {
        self.edges.get(&(from.to_string(), to.to_string()))
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Properties)> {
        self.nodes.iter().map(|(id, props)| (id.as_str(), props))
    }

    /// Edges in declaration order, as `((from, to), properties)`.
    pub fn edges(&self) -> impl Iterator<Item = ((&str, &str), &Properties)> {
        self.edges
            .iter()
            .map(|((from, to), props)| ((from.as_str(), to.as_str()), props))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), Value::Bare(v.to_string())))
            .collect()
    }

    #[test]
    fn redeclaration_merges_last_write_wins() {
        let mut graph = Graph::new();
        graph.add_node("a", props(&[("color", "red"), ("sides", "4")]));
        graph.add_node("a", props(&[("color", "blue")]));

        assert_eq!(graph.node_count(), 1);
        let a = graph.node("a").unwrap();
        assert_eq!(a["color"], Value::Bare("blue".to_string()));
        assert_eq!(a["sides"], Value::Bare("4".to_string()));
        // The re-assigned key keeps its original position.
        let keys: Vec<&str> = a.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["color", "sides"]);
    }

    #[test]
    fn edges_are_keyed_by_ordered_pair() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", Properties::new());
        graph.add_edge("b", "a", Properties::new());

        assert_eq!(graph.edge_count(), 2);
        assert!(graph.edge("a", "b").is_some());
        assert!(graph.edge("b", "a").is_some());
        // Edge endpoints do not become nodes.
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn declaration_order_is_preserved() {
        let mut graph = Graph::new();
        for id in &["c", "a", "b"] {
            graph.add_node(*id, Properties::new());
        }
        let ids: Vec<&str> = graph.nodes().map(|(id, _)| id).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}
