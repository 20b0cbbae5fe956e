//! GraphML rendering of generated trees.
//!
//! Each node and edge is written on its own line as a self-closing element.
//! Optional attributes (`x`, `y`, `weight`) appear only when the record
//! carries them, so an unweighted edge has no `weight` attribute at all.

use std::io::{self, Write};

use sapling_core::{Edge, GeneratedTree, Node};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns"
xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns
http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">
<graph edgedefault="undirected">
"#;

const FOOTER: &str = "</graph>\n</graphml>\n";

/// Writes `tree` to `writer` as an undirected GraphML document.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use sapling_cli::graphml::write_graphml;
/// use sapling_core::TreeGeneratorBuilder;
///
/// let tree = TreeGeneratorBuilder::new(2)
///     .with_seed(1)
///     .build()?
///     .generate()?;
/// let mut buffer = Vec::new();
/// write_graphml(&tree, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains(r#"<node id="2" />"#));
/// assert!(text.contains(r#"<edge source="1" target="2" />"#));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_graphml(tree: &GeneratedTree, mut writer: impl Write) -> io::Result<()> {
    writer.write_all(HEADER.as_bytes())?;
    for node in tree.nodes() {
        write_node(&mut writer, node)?;
    }
    for edge in tree.edges() {
        write_edge(&mut writer, edge)?;
    }
    writer.write_all(FOOTER.as_bytes())
}

fn write_node(writer: &mut impl Write, node: &Node) -> io::Result<()> {
    write!(writer, r#"<node id="{}""#, node.id())?;
    if let Some(position) = node.position() {
        write!(writer, r#" x="{}" y="{}""#, position.x(), position.y())?;
    }
    if let Some(weight) = node.weight() {
        write!(writer, r#" weight="{weight}""#)?;
    }
    writeln!(writer, " />")
}

fn write_edge(writer: &mut impl Write, edge: &Edge) -> io::Result<()> {
    write!(
        writer,
        r#"<edge source="{}" target="{}""#,
        edge.source(),
        edge.target()
    )?;
    if let Some(weight) = edge.weight() {
        write!(writer, r#" weight="{weight}""#)?;
    }
    writeln!(writer, " />")
}
