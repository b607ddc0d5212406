use super::*;
use crate::graph::Graph;
use crate::layout::{Point, Viewport};
use crate::renderers::render;

fn frame() -> Frame {
    let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let coords = vec![
        Point::new(20.0, 20.0),
        Point::new(60.0, 20.0),
        Point::new(100.0 / 3.0, 70.0),
    ];
    Frame::new(Viewport::new(120, 90), render(&graph, &coords))
}

#[test]
fn test_svg_document_shell() {
    let svg = SvgRenderer::default().render(&frame());
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="90" viewBox="0 0 120 90">"#
    ));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_svg_element_counts() {
    let svg = SvgRenderer::default().render(&frame());
    assert_eq!(svg.matches("<line ").count(), 2);
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert_eq!(svg.matches("<text ").count(), 3);
}

#[test]
fn test_svg_edges_drawn_before_nodes() {
    let svg = SvgRenderer::default().render(&frame());
    let last_line = svg.rfind("<line ").unwrap();
    let first_circle = svg.find("<circle ").unwrap();
    assert!(last_line < first_circle);
}

#[test]
fn test_svg_node_markup() {
    let svg = SvgRenderer::default().render(&frame());
    assert!(svg.contains(
        r##"<circle cx="33.33" cy="70" r="10" fill="#ff0000" stroke="#000000" stroke-width="1"/>"##
    ));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(">2</text>"));
    assert!(svg.contains(
        r##"<line x1="20" y1="20" x2="60" y2="20" stroke="#c0c0c0" stroke-width="1"/>"##
    ));
}

#[test]
fn test_svg_empty_frame() {
    let empty = Frame::new(Viewport::new(0, 0), Vec::new());
    let svg = SvgRenderer::default().render(&empty);
    assert!(svg.contains(r#"width="0" height="0""#));
    assert!(!svg.contains("<circle"));
}

#[test]
fn test_escape() {
    assert_eq!(escape("a<b>&c"), "a&lt;b&gt;&amp;c");
}
