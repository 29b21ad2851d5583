//! Adapter from `roxmltree` into the `Tree<XmlNode>` document model.
//!
//! Comments and processing instructions are dropped. CDATA sections and
//! character references are already merged into text by the reader.

use roxmltree::{Edge, Node, ParsingOptions};
use tree::Tree;

use crate::{data_types::*, error::XmlError};

fn tag(node: Node) -> XmlNode {
    XmlNode::Element(Tag {
        name: node.tag_name().name().to_owned(),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_owned(), a.value().to_owned()))
            .collect(),
    })
}

pub fn parse_document(input: &str) -> Result<Document, XmlError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    let parsed = roxmltree::Document::parse_with_options(input, options).map_err(|e| {
        let pos = e.pos();
        XmlError {
            line: pos.row as usize,
            column: pos.col as usize,
            message: e.to_string(),
        }
    })?;

    // Built from open/close events so nesting depth never grows the call stack.
    let mut open: Vec<(XmlNode, Vec<Document>)> = Vec::new();
    let mut root = None;

    for edge in parsed.root_element().traverse() {
        match edge {
            Edge::Open(node) if node.is_element() => open.push((tag(node), Vec::new())),
            Edge::Open(node) if node.is_text() => {
                if let Some((_, children)) = open.last_mut() {
                    let text = node.text().unwrap_or_default().to_owned();
                    children.push(Tree::Leaf(XmlNode::Text(text)));
                }
            }
            Edge::Close(node) if node.is_element() => {
                let Some((item, children)) = open.pop() else {
                    continue;
                };
                let element = Tree::Node(item, children);
                match open.last_mut() {
                    Some((_, siblings)) => siblings.push(element),
                    None => root = Some(element),
                }
            }
            _ => {}
        }
    }

    // `roxmltree` guarantees a root element on success.
    root.ok_or_else(|| XmlError {
        line: 1,
        column: 1,
        message: "document has no root element".to_owned(),
    })
}

/// Text of an element up to its first child element, or `None` when there is
/// none.
pub fn leading_text(element: &Document) -> Option<String> {
    let text: String = element
        .children()
        .iter()
        .map_while(|c| match c.item() {
            XmlNode::Text(s) => Some(s.as_str()),
            XmlNode::Element(_) => None,
        })
        .collect();

    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(doc: &Document) -> Vec<String> {
        doc.iter()
            .filter_map(|n| match n {
                XmlNode::Element(t) => Some(t.name.clone()),
                XmlNode::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn parses_tmx_like_document() {
        let doc = parse_document(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.10" orientation="orthogonal" width="2" height="2">
 <tileset firstgid="1" source="village.tsx"/>
 <layer id="1" name="Ground" width="2" height="2">
  <data encoding="csv">
1,2,
3,4
</data>
 </layer>
</map>
"#,
        )
        .unwrap();

        assert!(doc.item().tag_has_name("map"));
        assert_eq!(doc.item().attribute("width"), Some("2"));
        assert_eq!(names(&doc), vec!["map", "tileset", "layer", "data"]);

        let layer = doc.find_child(|n| n.tag_has_name("layer")).unwrap();
        assert_eq!(layer.item().attribute("name"), Some("Ground"));
        let data = layer.find_child(|n| n.tag_has_name("data")).unwrap();
        assert_eq!(leading_text(data).as_deref(), Some("\n1,2,\n3,4\n"));
    }

    #[test]
    fn decodes_references_and_cdata() {
        let doc = parse_document(
            "<r a='x &amp; &quot;y&quot;' b=\"&#65;&#x42;\">&lt;<![CDATA[1,<2>]]>&gt;</r>",
        )
        .unwrap();
        assert_eq!(doc.item().attribute("a"), Some("x & \"y\""));
        assert_eq!(doc.item().attribute("b"), Some("AB"));
        assert_eq!(leading_text(&doc).as_deref(), Some("<1,<2>>"));
    }

    #[test]
    fn comments_and_pis_are_dropped() {
        let doc = parse_document(
            "<!-- head --><!DOCTYPE map><r><!-- c -->a<?pi x?>b<e/>c</r><!-- tail -->",
        )
        .unwrap();
        // Text after the first child element isn't leading text.
        assert_eq!(leading_text(&doc).as_deref(), Some("ab"));
        assert_eq!(doc.children().len(), 4);
    }

    #[test]
    fn leading_text_none_when_empty() {
        let doc = parse_document("<data encoding=\"csv\"></data>").unwrap();
        assert_eq!(leading_text(&doc), None);
        let doc = parse_document("<data><tile gid=\"1\"/></data>").unwrap();
        assert_eq!(leading_text(&doc), None);
    }

    #[test]
    fn mismatched_end_tag() {
        let err = parse_document("<map>\n  <layer></data>\n</map>").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.column > 1, "{err}");
    }

    #[test]
    fn rejects_malformed_documents() {
        for input in [
            "",
            "   ",
            "not xml",
            "<map>",
            "<map><layer></map>",
            "<map a=\"1\" a=\"2\"/>",
            "<map a=1/>",
            "<map>&bogus;</map>",
            "<map>a & b</map>",
            "<map/><extra/>",
            "<map/>trailing",
            "<map><!-- unterminated </map>",
        ] {
            assert!(parse_document(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn accepts_bom_and_trailing_whitespace() {
        assert!(parse_document("\u{feff}<map/>\n\n").is_ok());
    }

    #[test]
    fn deep_nesting() {
        let depth = 20_000;
        let input = format!(
            "<map><layer><data>3</data></layer>{}{}</map>",
            "<g>".repeat(depth),
            "</g>".repeat(depth)
        );

        let doc = parse_document(&input).unwrap();

        assert_eq!(doc.iter().count(), depth + 4);
    }
}
