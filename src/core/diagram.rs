//! Reads the shapes of a draw.io diagram.
//!
//! A `.drawio` file looks like
//!
//! ```text
//! <mxfile>
//!   <diagram name="Page-1">
//!     <mxGraphModel>
//!       <root>
//!         <mxCell id="0"/>
//!         <object id="2" label="..."><mxCell style="..."><mxGeometry x=".."/></mxCell></object>
//!       </root>
//!     </mxGraphModel>
//!   </diagram>
//! </mxfile>
//! ```
//!
//! Only the first page is read. Shapes wrapped in `object` or `UserObject`
//! carry their label on the wrapper and their style and geometry on the inner
//! `mxCell`; both levels are folded into one [`DrawioElement`].

use crate::domain::model::DrawioElement;
use crate::utils::error::Result;
use roxmltree::{Document, Node};
use std::path::Path;

pub fn parse_diagram(path: &Path) -> Result<Vec<DrawioElement>> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    parse_diagram_str(&content)
}

pub fn parse_diagram_str(content: &str) -> Result<Vec<DrawioElement>> {
    let document = Document::parse(content)?;
    let root = document.root_element();

    let models: Vec<Node> = if root.tag_name().name() == "mxGraphModel" {
        vec![root]
    } else {
        match child_elements(root, "diagram").next() {
            Some(page) => {
                let models: Vec<Node> = child_elements(page, "mxGraphModel").collect();
                if models.is_empty() && page.text().is_some_and(|t| !t.trim().is_empty()) {
                    tracing::warn!(
                        "Page '{}' is compressed; save the diagram uncompressed to read its shapes",
                        page.attribute("name").unwrap_or_default()
                    );
                }
                models
            }
            None => {
                tracing::warn!("No <diagram> element under <{}>", root.tag_name().name());
                Vec::new()
            }
        }
    };

    let mut elements = Vec::new();
    for model in models {
        for cell_root in child_elements(model, "root") {
            for shape in cell_root.children().filter(Node::is_element) {
                match shape.tag_name().name() {
                    "mxCell" => elements.push(parse_mxcell(shape)),
                    "object" | "UserObject" => elements.push(parse_object(shape)),
                    other => tracing::warn!("Skipping unsupported shape element <{}>", other),
                }
            }
        }
    }

    tracing::debug!("Parsed {} shapes", elements.len());
    Ok(elements)
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

fn first_descendant<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

fn attr(node: Node, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

fn parse_mxgeometry(node: Node) -> DrawioElement {
    DrawioElement {
        x: attr(node, "x"),
        y: attr(node, "y"),
        width: attr(node, "width"),
        height: attr(node, "height"),
        ..Default::default()
    }
}

fn parse_mxcell(node: Node) -> DrawioElement {
    let cell = DrawioElement {
        value: attr(node, "value"),
        style: attr(node, "style"),
        id: attr(node, "id"),
        parent: attr(node, "parent"),
        vertex: attr(node, "vertex"),
        ..Default::default()
    };

    match first_descendant(node, "mxGeometry") {
        Some(geometry) => merge_prefer_first(cell, parse_mxgeometry(geometry)),
        None => cell,
    }
}

/// `object` and `UserObject` wrappers.
fn parse_object(node: Node) -> DrawioElement {
    let wrapper = DrawioElement {
        label: attr(node, "label"),
        id: attr(node, "id"),
        tags: attr(node, "tags"),
        ..Default::default()
    };

    match first_descendant(node, "mxCell") {
        Some(cell) => merge_prefer_first(wrapper, parse_mxcell(cell)),
        None => wrapper,
    }
}

/// Field by field, keeps `first` unless it is absent.
fn merge_prefer_first(first: DrawioElement, second: DrawioElement) -> DrawioElement {
    DrawioElement {
        id: first.id.or(second.id),
        value: first.value.or(second.value),
        label: first.label.or(second.label),
        tags: first.tags.or(second.tags),
        style: first.style.or(second.style),
        parent: first.parent.or(second.parent),
        vertex: first.vertex.or(second.vertex),
        x: first.x.or(second.x),
        y: first.y.or(second.y),
        width: first.width.or(second.width),
        height: first.height.or(second.height),
    }
}
