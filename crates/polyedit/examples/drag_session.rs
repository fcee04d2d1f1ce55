//! Scripted editing session: add shapes, drag one by a vertex, then undo.
//!
//! Usage:
//!   cargo run -p polyedit --example drag_session -- [seed]
//!
//! Prints each shape's kind, centroid and convexity after every step.

use polyedit::prelude::*;

fn dump(step: &str, ed: &Editor) {
    println!("{step}:");
    for (id, poly) in ed.scene().iter() {
        let c = poly.centroid();
        println!(
            "  #{} {:<12} centroid=({:>8.2}, {:>8.2}) convex={}",
            id.0,
            poly.kind().to_string(),
            c[0],
            c[1],
            poly.is_convex()
        );
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let (w, h) = (800.0, 600.0);
    let mut ed = Editor::new(w, h, EditorCfg::default(), seed);
    for kind in [ShapeKind::Quad, ShapeKind::Pentagon, ShapeKind::circle()] {
        ed.add_shape(kind);
    }
    dump("added", &ed);

    // grab the first vertex of the first shape and pull it outwards
    let Some((_, first)) = ed.scene().iter().next() else {
        return;
    };
    let p = first[0];
    let (x, y) = (p[0] + w / 2.0, h / 2.0 - p[1]);
    ed.hover(x, y);
    ed.press(Button::Left, x, y);
    ed.drag(x + 20.0, y - 10.0);
    ed.release(Button::Left);
    dump("dragged vertex", &ed);

    ed.undo();
    dump("undone", &ed);
}
