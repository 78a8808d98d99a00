//! Graphviz rendering of commit history
//!
//! ```text
//! digraph witlog{
//!   node[shape=rect]
//!   c_<id> [label="<short id>: <first message line>"]
//!   c_<id> -> c_<parent>;
//! }
//! ```

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

pub const GRAPH_NAME: &str = "witlog";

pub fn header() -> String {
    format!("digraph {GRAPH_NAME}{{\n  node[shape=rect]\n")
}

pub fn footer() -> String {
    "}\n".to_string()
}

/// Node line followed by one edge line per parent
pub fn commit_lines(oid: &ObjectId, commit: &Commit) -> anyhow::Result<String> {
    let mut lines = format!(
        "  c_{oid} [label=\"{}: {}\"]\n",
        oid.to_short_oid(),
        escape_label(&first_line(commit))
    );

    for parent in commit.parents()? {
        lines.push_str(&format!("  c_{oid} -> c_{parent};\n"));
    }

    Ok(lines)
}

fn first_line(commit: &Commit) -> String {
    String::from_utf8_lossy(commit.message())
        .trim()
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

pub fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::object::Unpackable;
    use pretty_assertions::assert_eq;

    const TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
    const PARENT: &str = "0155eb4229851634a0f03eb265b69f5a2d56f341";

    #[test]
    fn escapes_backslashes_and_quotes() {
        assert_eq!(escape_label(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
    }

    #[test]
    fn renders_node_with_first_message_line_and_edges() {
        let commit = Commit::deserialize(
            format!("tree {TREE}\nparent {PARENT}\n\n\n  Fix \"quoted\" bug\n\nbody\n").as_bytes(),
        )
        .unwrap();
        let oid = ObjectId::try_parse("d670460b4b4aece5915caf5c68d12f560a9fe3e4".to_string())
            .unwrap();

        assert_eq!(
            commit_lines(&oid, &commit).unwrap(),
            format!(
                "  c_{oid} [label=\"d670460b: Fix \\\"quoted\\\" bug\"]\n  c_{oid} -> c_{PARENT};\n"
            )
        );
    }

    #[test]
    fn header_and_footer_wrap_the_graph() {
        assert_eq!(header(), "digraph witlog{\n  node[shape=rect]\n");
        assert_eq!(footer(), "}\n");
    }
}
