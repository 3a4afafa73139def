//! Tabular dump of a timeline: one canvas header, then per shape a
//! header line and one `motion` line per consecutive keyframe pair.

use std::fmt::Write as _;
use std::io;

use cel_animation_core::{Keyframe, TimelineStore};

/// Renders the whole store into the line-oriented `motion` table.
///
/// A shape with a single keyframe emits one single-tuple line; a shape
/// with none emits only its header. The tuple columns are
/// tick, x, y, width, height, red, green, blue, tab-separated, with two
/// tabs between the endpoints of a pair.
#[derive(Debug)]
pub struct TextualExporter<'a> {
    store: &'a TimelineStore,
}

impl<'a> TextualExporter<'a> {
    pub fn new(store: &'a TimelineStore) -> Self {
        Self { store }
    }

    /// The full document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let canvas = self.store.canvas();
        let _ = writeln!(
            out,
            "Canvas {} {} {} {}",
            canvas.x(),
            canvas.y(),
            canvas.width(),
            canvas.height()
        );
        for (name, kind) in self.store.shapes() {
            let frames = self.store.keyframes(name);
            let _ = writeln!(out, "Shape {name} {kind}");
            if let [only] = frames.as_slice() {
                let _ = writeln!(out, "motion {name}\t{}", tuple(only));
            }
            for pair in frames.windows(2) {
                let _ = writeln!(
                    out,
                    "motion {name}\t{}\t\t{}",
                    tuple(&pair[0]),
                    tuple(&pair[1])
                );
            }
        }
        out
    }

    /// Write the document to `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }
}

fn tuple(frame: &Keyframe) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        frame.tick(),
        frame.x(),
        frame.y(),
        frame.width(),
        frame.height(),
        frame.red(),
        frame.green(),
        frame.blue()
    )
}
