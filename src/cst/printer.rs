//! Directory-listing style rendering of a CST.
//!
//! ```text
//! program
//! ├── declarations
//! ├── init_block
//! │   ├── INIT 'init'
//! │   └── RBRACE '}'
//! └── play_block
//!     └── ...
//! ```

use std::fmt::{self, Display, Write};

use super::cst::CstNode;

pub fn render(node: &CstNode) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_tree(node, &mut out);
    out
}

pub fn write_tree<W: Write>(node: &CstNode, out: &mut W) -> fmt::Result {
    writeln!(out, "{}", label(node))?;
    write_children(node, "", out)
}

fn write_children<W: Write>(node: &CstNode, prefix: &str, out: &mut W) -> fmt::Result {
    let children = node.children();

    for (i, child) in children.iter().enumerate() {
        let (connector, continuation) = if i + 1 == children.len() {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        writeln!(out, "{}{}{}", prefix, connector, label(child))?;
        write_children(child, &format!("{}{}", prefix, continuation), out)?;
    }

    Ok(())
}

fn label(node: &CstNode) -> String {
    match node.token() {
        Some(token) => token.to_string(),
        None => node.rule_name().to_string(),
    }
}

impl Display for CstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, f)
    }
}
