//! Driver boundary: load grammar text, run the parser, report the result.
//!
//! File access lives here and only here; the lexer and parser operate on a
//! fully buffered string.

use core::fmt;
use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Parses grammar text and hands back the populated parser.
pub fn parse_grammar(text: &str) -> Result<Parser, Error> {
    let mut parser = Parser::new(Lexer::new(text));
    parser.parse()?;
    Ok(parser)
}

/// Reads a grammar file, parses it, and optionally prints a report of the
/// graph data to stdout.
pub fn generate_from_file(path: impl AsRef<Path>, report: bool) -> Result<Parser, Error> {
    let text = fs::read_to_string(path)?;
    let parser = parse_grammar(&text)?;
    if report {
        let mut out = String::new();
        if write_report(&parser, &mut out).is_ok() {
            print!("{}", out);
        }
    }
    Ok(parser)
}

/// Writes a textual summary of the parsed graph: every node and edge with
/// its properties, followed by the node and edge counts.
pub fn write_report(parser: &Parser, out: &mut dyn fmt::Write) -> fmt::Result {
    let banner = "======================================================";
    writeln!(out, "{}", banner)?;
    writeln!(out, "GRAPH DATA")?;
    writeln!(out)?;

    for (id, props) in parser.graph().nodes() {
        writeln!(out)?;
        writeln!(out, "{}", id.to_uppercase())?;
        writeln!(out, "============================")?;
        for (key, value) in props.iter() {
            writeln!(out, "{} : {}", key, value)?;
        }
    }

    for ((from, to), props) in parser.graph().edges() {
        writeln!(out)?;
        writeln!(out, "{}  ->  {}", from.to_uppercase(), to.to_uppercase())?;
        writeln!(out, "============================")?;
        for (key, value) in props.iter() {
            writeln!(out, "{} : {}", key, value)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Nodes: {}", parser.graph().node_count())?;
    writeln!(out, "Edges: {}", parser.graph().edge_count())?;
    writeln!(out)?;
    writeln!(out, "{}", banner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_test;

    #[test]
    fn report_lists_nodes_edges_and_counts() {
        init_test();
        let parser = parse_grammar(
            "start { color = red; };\n\
             start -> finish { label = 'all done'; };\n",
        )
        .unwrap();

        let mut report = String::new();
        write_report(&parser, &mut report).unwrap();

        assert!(report.contains("GRAPH DATA"));
        assert!(report.contains("START"));
        assert!(report.contains("color : red"));
        assert!(report.contains("START  ->  FINISH"));
        assert!(report.contains("label : all done"));
        assert!(report.contains("Nodes: 1"));
        assert!(report.contains("Edges: 1"));
    }

    #[test]
    fn generate_from_file_round_trip() {
        let path = std::env::temp_dir().join("graft_generator_round_trip.graph");
        fs::write(&path, "a -> b;\n").unwrap();

        let parser = generate_from_file(&path, false).unwrap();
        assert_eq!(parser.graph().edge_count(), 1);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("graft_no_such_file.graph");
        match generate_from_file(&path, false) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other.map(|_| ())),
        }
    }
}
