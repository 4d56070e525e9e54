use indexmap::IndexMap;
use log::debug;

use crate::error::Error;
use crate::graph::{Graph, Properties, Value};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::production::Production;

/// One node or edge statement, before it lands in a graph.
enum GraphStmt {
    Node {
        id: String,
        props: Properties,
    },
    Edge {
        from: String,
        to: String,
        props: Properties,
    },
}

impl GraphStmt {
    fn apply(self, graph: &mut Graph) {
        match self {
            GraphStmt::Node { id, props } => graph.add_node(id, props),
            GraphStmt::Edge { from, to, props } => graph.add_edge(from, to, props),
        }
    }
}

/// Recursive-descent parser for the grammar language.
///
/// Drives the lexer over the whole token stream exactly once, left to right,
/// with one token of lookahead. On success the results are reachable from
/// the parser: [`graph`](Parser::graph) holds the top-level nodes and edges,
/// [`productions`](Parser::productions) the named rewrite rules.
///
/// Grammar:
///
/// ```text
/// grammar    := statement* EOF
/// statement  := node_stmt | edge_stmt | rule_stmt
/// node_stmt  := ID [ "{" prop* "}" ] ";"
/// edge_stmt  := ID "->" ID [ "{" prop* "}" ] ";"
/// rule_stmt  := ID "(" graph_stmt* ")" "->" "(" graph_stmt* ")" ";"
/// graph_stmt := node_stmt | edge_stmt
/// prop       := ID "=" value ";"
/// value      := NUMBER | QUOTE ... QUOTE | ID
/// ```
///
/// A failed parse leaves no guarantee about the state of the partially
/// built graph; callers must discard it.
pub struct Parser {
    lexer: Lexer,
    lookahead: Token,
    line: u32,
    column: u32,
    graph: Graph,
    productions: IndexMap<String, Production>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            lookahead: Token::new(TokenKind::Eof, "<EOF>"),
            line: 1,
            column: 1,
            graph: Graph::new(),
            productions: IndexMap::new(),
        }
    }

    /// The top-level graph built from node and edge statements.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Named productions, in declaration order. Re-declaring a name
    /// replaces the earlier production.
    pub fn productions(&self) -> &IndexMap<String, Production> {
        &self.productions
    }

    /// Consumes the entire token stream and populates the graph and
    /// production set. Fatal on the first lexical or syntax error.
    pub fn parse(&mut self) -> Result<(), Error> {
        self.advance()?;
        while self.lookahead.kind != TokenKind::Eof {
            self.statement()?;
        }
        debug!(
            "parsed {} nodes, {} edges, {} productions",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.productions.len()
        );
        Ok(())
    }

    /// Refreshes the lookahead token and its position. The recorded
    /// position points just past the token's last character.
    fn advance(&mut self) -> Result<(), Error> {
        self.lookahead = self.lexer.next_token()?;
        self.line = self.lexer.line();
        self.column = self.lexer.column();
        Ok(())
    }

    fn take(&mut self) -> Result<Token, Error> {
        let token = self.lookahead.clone();
        self.advance()?;
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.lookahead.kind == kind {
            self.take()
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        Error::Syntax {
            expected: expected.to_string(),
            found: self.lookahead.text.clone(),
            line: self.line,
            column: self.column,
        }
    }

    fn statement(&mut self) -> Result<(), Error> {
        let name = self.expect(TokenKind::Ident, "an identifier")?;
        if self.lookahead.kind == TokenKind::LParen {
            self.rule_statement(name.text)
        } else {
            let stmt = self.finish_graph_statement(name.text)?;
            stmt.apply(&mut self.graph);
            Ok(())
        }
    }

    /// Completes a node or edge statement whose leading identifier has
    /// already been consumed.
    fn finish_graph_statement(&mut self, id: String) -> Result<GraphStmt, Error> {
        if self.lookahead.kind == TokenKind::Arrow {
            self.advance()?;
            let to = self.expect(TokenKind::Ident, "an edge target identifier")?;
            let props = self.property_block()?;
            self.expect(TokenKind::Semicolon, "';'")?;
            debug!("edge {} -> {}", id, to.text);
            Ok(GraphStmt::Edge {
                from: id,
                to: to.text,
                props,
            })
        } else {
            let props = self.property_block()?;
            self.expect(TokenKind::Semicolon, "';'")?;
            debug!("node {}", id);
            Ok(GraphStmt::Node { id, props })
        }
    }

    /// `ID "(" graph_stmt* ")" "->" "(" graph_stmt* ")" ";"` — the leading
    /// identifier names the production.
    fn rule_statement(&mut self, name: String) -> Result<(), Error> {
        self.expect(TokenKind::LParen, "'('")?;
        let pattern = self.graph_block()?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::Arrow, "'->'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let replacement = self.graph_block()?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::Semicolon, "';'")?;
        debug!(
            "production {}: pattern ({} nodes, {} edges), replacement ({} nodes, {} edges)",
            name,
            pattern.node_count(),
            pattern.edge_count(),
            replacement.node_count(),
            replacement.edge_count()
        );
        self.productions
            .insert(name, Production::new(pattern, replacement));
        Ok(())
    }

    /// Node and edge statements up to the closing `)`. Rule statements do
    /// not nest.
    fn graph_block(&mut self) -> Result<Graph, Error> {
        let mut graph = Graph::new();
        while self.lookahead.kind != TokenKind::RParen {
            let id = self.expect(TokenKind::Ident, "an identifier or ')'")?;
            let stmt = self.finish_graph_statement(id.text)?;
            stmt.apply(&mut graph);
        }
        Ok(graph)
    }

    /// An optional `"{" prop* "}"` block. Returns an empty map when the
    /// block is absent. A key assigned twice keeps the last value.
    fn property_block(&mut self) -> Result<Properties, Error> {
        let mut props = Properties::new();
        if self.lookahead.kind == TokenKind::LBrace {
            self.advance()?;
            while self.lookahead.kind != TokenKind::RBrace {
                let key = self.expect(TokenKind::Ident, "a property name or '}'")?;
                self.expect(TokenKind::Equals, "'='")?;
                let value = self.value()?;
                self.expect(TokenKind::Semicolon, "';'")?;
                props.insert(key.text, value);
            }
            self.advance()?;
        }
        Ok(props)
    }

    /// The right-hand side of a property assignment. The lexer never
    /// captures string bodies, so a quoted span is assembled here from the
    /// tokens between the two quote marks, joined by single spaces.
    fn value(&mut self) -> Result<Value, Error> {
        match self.lookahead.kind {
            TokenKind::Number => Ok(Value::Number(self.take()?.text)),
            TokenKind::Ident => Ok(Value::Bare(self.take()?.text)),
            TokenKind::Quote => {
                self.advance()?;
                let mut parts: Vec<String> = Vec::new();
                loop {
                    match self.lookahead.kind {
                        TokenKind::Quote => {
                            self.advance()?;
                            break;
                        }
                        TokenKind::Eof => return Err(self.unexpected("a closing quote")),
                        _ => parts.push(self.take()?.text),
                    }
                }
                Ok(Value::Quoted(parts.join(" ")))
            }
            _ => Err(self.unexpected("a number, quoted text, or identifier")),
        }
    }
}
