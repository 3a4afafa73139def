//! SVG animation document: one element per shape seeded from its first
//! keyframe, plus `<animate>` children for every attribute that changes
//! across consecutive keyframe pairs.
//!
//! Timing arithmetic mirrors the legacy exporter exactly: the per-tick
//! millisecond step is the integer division `1000 / ticks_per_second`,
//! applied before multiplying by tick deltas. Positions subtract the
//! canvas offsets so the document is origin-relative.

use std::fmt::Write as _;
use std::io;

use cel_animation_core::{Keyframe, ShapeKind, TimelineStore};

use crate::ExportError;

/// Compatibility switches for quirks preserved from the legacy exporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SvgQuirks {
    /// Drive the vertical size channel from keyframe width rather than
    /// height: ellipse `ry` radii, the from/to values of every vertical
    /// size animation, and the stray `ry` element emitted for circles.
    /// Defaults to true for byte-exact legacy output.
    pub vertical_size_from_width: bool,
}

impl Default for SvgQuirks {
    fn default() -> Self {
        Self {
            vertical_size_from_width: true,
        }
    }
}

/// Renders the whole store into an SVG animation document.
///
/// Shapes with zero keyframes are omitted entirely; every other shape
/// becomes one element whose tag follows its kind, with `<animate>`
/// children ordered move, color, size per keyframe pair.
#[derive(Debug)]
pub struct SvgExporter<'a> {
    store: &'a TimelineStore,
    ticks_per_second: u32,
    quirks: SvgQuirks,
}

impl<'a> SvgExporter<'a> {
    /// `ticks_per_second` scales ticks to milliseconds and must be
    /// positive.
    pub fn new(store: &'a TimelineStore, ticks_per_second: u32) -> Result<Self, ExportError> {
        Self::with_quirks(store, ticks_per_second, SvgQuirks::default())
    }

    pub fn with_quirks(
        store: &'a TimelineStore,
        ticks_per_second: u32,
        quirks: SvgQuirks,
    ) -> Result<Self, ExportError> {
        if ticks_per_second == 0 {
            return Err(ExportError::NonPositiveRate {
                rate: ticks_per_second,
            });
        }
        Ok(Self {
            store,
            ticks_per_second,
            quirks,
        })
    }

    /// The full document.
    pub fn render(&self) -> String {
        let canvas = self.store.canvas();
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg width=\"{}\" height=\"{}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n\n",
            canvas.width(),
            canvas.height()
        );
        for (name, kind) in self.store.shapes() {
            let frames = self.store.keyframes(name);
            let Some(first) = frames.first() else {
                continue;
            };
            let _ = writeln!(
                out,
                "<{} id=\"{}\" {} {} fill=\"{}\" visibility=\"visible\">",
                kind.svg_tag(),
                name,
                self.position(kind, first),
                self.dimensions(kind, first),
                rgb(first)
            );
            for pair in frames.windows(2) {
                self.push_move(&mut out, kind, &pair[0], &pair[1]);
                self.push_color(&mut out, &pair[0], &pair[1]);
                self.push_size(&mut out, kind, &pair[0], &pair[1]);
            }
            let _ = write!(out, "</{}>\n\n", kind.svg_tag());
        }
        out.push_str("</svg>");
        out
    }

    /// Write the document to `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }

    fn position(&self, kind: ShapeKind, frame: &Keyframe) -> String {
        let canvas = self.store.canvas();
        let (x, y) = (frame.x() - canvas.x(), frame.y() - canvas.y());
        match kind {
            ShapeKind::Rectangle => format!("x=\"{x}\" y=\"{y}\""),
            ShapeKind::Ellipse | ShapeKind::Circle => format!("cx=\"{x}\" cy=\"{y}\""),
        }
    }

    fn dimensions(&self, kind: ShapeKind, frame: &Keyframe) -> String {
        match kind {
            ShapeKind::Rectangle => {
                format!("width=\"{}\" height=\"{}\"", frame.width(), frame.height())
            }
            ShapeKind::Circle => format!("r=\"{:.1}\"", half(frame.width())),
            ShapeKind::Ellipse => {
                let ry = if self.quirks.vertical_size_from_width {
                    half(frame.width())
                } else {
                    half(frame.height())
                };
                format!("rx=\"{:.1}\" ry=\"{:.1}\"", half(frame.width()), ry)
            }
        }
    }

    // begin/dur for the segment between two keyframes, in milliseconds.
    fn timing(&self, prev: &Keyframe, next: &Keyframe) -> String {
        let step = u64::from(1000 / self.ticks_per_second);
        format!(
            "begin=\"{}ms\" dur=\"{}ms\"",
            u64::from(prev.tick()) * step,
            u64::from(next.tick() - prev.tick()) * step
        )
    }

    fn push_animate(
        &self,
        out: &mut String,
        prev: &Keyframe,
        next: &Keyframe,
        attr: &str,
        from: &str,
        to: &str,
    ) {
        let _ = writeln!(
            out,
            "<animate attributeType=\"xml\" {} attributeName=\"{attr}\" from=\"{from}\" to=\"{to}\" fill=\"freeze\" />",
            self.timing(prev, next)
        );
    }

    fn push_move(&self, out: &mut String, kind: ShapeKind, prev: &Keyframe, next: &Keyframe) {
        if !prev.moves_from(next) {
            return;
        }
        let canvas = self.store.canvas();
        let (horizontal, vertical) = match kind {
            ShapeKind::Rectangle => ("x", "y"),
            ShapeKind::Ellipse | ShapeKind::Circle => ("cx", "cy"),
        };
        if prev.x() != next.x() {
            self.push_animate(
                out,
                prev,
                next,
                horizontal,
                &(prev.x() - canvas.x()).to_string(),
                &(next.x() - canvas.x()).to_string(),
            );
        }
        if prev.y() != next.y() {
            self.push_animate(
                out,
                prev,
                next,
                vertical,
                &(prev.y() - canvas.y()).to_string(),
                &(next.y() - canvas.y()).to_string(),
            );
        }
    }

    fn push_color(&self, out: &mut String, prev: &Keyframe, next: &Keyframe) {
        if prev.recolors_from(next) {
            self.push_animate(out, prev, next, "fill", &rgb(prev), &rgb(next));
        }
    }

    fn push_size(&self, out: &mut String, kind: ShapeKind, prev: &Keyframe, next: &Keyframe) {
        if !prev.resizes_from(next) {
            return;
        }
        if prev.width() != next.width() {
            let attr = match kind {
                ShapeKind::Rectangle => "width",
                ShapeKind::Ellipse => "rx",
                ShapeKind::Circle => "r",
            };
            self.push_animate(
                out,
                prev,
                next,
                attr,
                &prev.width().to_string(),
                &next.width().to_string(),
            );
        }
        if prev.height() != next.height() {
            if self.quirks.vertical_size_from_width {
                let attr = match kind {
                    ShapeKind::Rectangle => "height",
                    ShapeKind::Ellipse | ShapeKind::Circle => "ry",
                };
                self.push_animate(
                    out,
                    prev,
                    next,
                    attr,
                    &prev.width().to_string(),
                    &next.width().to_string(),
                );
            } else {
                match kind {
                    ShapeKind::Rectangle => self.push_animate(
                        out,
                        prev,
                        next,
                        "height",
                        &prev.height().to_string(),
                        &next.height().to_string(),
                    ),
                    ShapeKind::Ellipse => self.push_animate(
                        out,
                        prev,
                        next,
                        "ry",
                        &prev.height().to_string(),
                        &next.height().to_string(),
                    ),
                    // a circle has no vertical radius channel
                    ShapeKind::Circle => {}
                }
            }
        }
    }
}

fn half(value: i32) -> f64 {
    f64::from(value) / 2.0
}

fn rgb(frame: &Keyframe) -> String {
    format!("rgb({},{},{})", frame.red(), frame.green(), frame.blue())
}
