//! POM descriptor field lookup

use roxmltree::{Document, Node, ParsingOptions};

use crate::version::error::RegistryError;

/// Parsed project descriptor
pub struct PomDocument<'input> {
    doc: Document<'input>,
}

impl<'input> PomDocument<'input> {
    /// Parse `content`, accepting a `<!DOCTYPE>` declaration
    pub fn parse(content: &'input str) -> Result<Self, RegistryError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        Ok(Self {
            doc: Document::parse_with_options(content, options)?,
        })
    }

    /// Text of the element at a dotted `path` below the project root
    ///
    /// `"url"` is `<project><url>`, `"scm.url"` is `<project><scm><url>`.
    /// Only the first matching child is followed at each step.
    pub fn value_with_path(&self, path: &str) -> Option<String> {
        let node = path
            .split('.')
            .try_fold(self.doc.root_element(), |node, name| child_element(node, name))?;
        let text = node.text()?.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}
