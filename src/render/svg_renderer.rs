use std::fmt::Write as _;

use crate::core::PathCommand;
use crate::core::format::escape_markup;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, PathPrimitive, Primitive, RectPrimitive, RenderFrame, Renderer,
    StrokeStyle, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderer backend producing a standalone SVG document.
///
/// Each `render` call replaces the previous document; hosts read it back
/// through [`SvgRenderer::document`] and embed or write it as they see fit.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Option<Color>,
    font_family: String,
    document: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            background: None,
            font_family: "sans-serif".to_owned(),
            document: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Color) -> ChartResult<Self> {
        color.validate()?;
        self.background = Some(color);
        Ok(self)
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(
        &self,
        frame: &RenderFrame,
    ) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let mut out = String::with_capacity(256 + frame.items.len() * 96);
        let mut stats = SvgRenderStats::default();
        let (width, height) = (frame.viewport.width, frame.viewport.height);

        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}">"#,
            escape_markup(&self.font_family)
        )?;
        if let Some(background) = self.background {
            write!(
                out,
                r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
                background.to_css()
            )?;
        }

        for item in &frame.items {
            match &item.primitive {
                Primitive::Line(line) => {
                    write_line(&mut out, line)?;
                    stats.lines_drawn += 1;
                }
                Primitive::Path(path) => {
                    write_path(&mut out, path)?;
                    stats.paths_drawn += 1;
                }
                Primitive::Rect(rect) => {
                    write_rect(&mut out, rect)?;
                    stats.rects_drawn += 1;
                }
                Primitive::Text(text) => {
                    write_text(&mut out, text)?;
                    stats.texts_drawn += 1;
                }
            }
        }

        out.push_str("</svg>");
        Ok((out, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = self.write_document(frame).map_err(|err| {
            ChartError::InvalidData(format!("failed to write svg document: {err}"))
        })?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn stroke_attributes(out: &mut String, stroke: StrokeStyle) -> std::fmt::Result {
    write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_css(),
        stroke.width
    )?;
    if stroke.opacity < 1.0 {
        write!(out, r#" stroke-opacity="{}""#, stroke.opacity)?;
    }
    if let Some([dash, gap]) = stroke.dash {
        write!(out, r#" stroke-dasharray="{dash},{gap}""#)?;
    }
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}""#,
        line.x1, line.y1, line.x2, line.y2
    )?;
    stroke_attributes(out, line.stroke)?;
    out.push_str("/>");
    Ok(())
}

fn write_path(out: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    out.push_str(r#"<path fill="none" d=""#);
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo { x, y } => write!(out, "M{x:.2},{y:.2}")?,
            PathCommand::LineTo { x, y } => write!(out, "L{x:.2},{y:.2}")?,
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => write!(out, "C{x1:.2},{y1:.2},{x2:.2},{y2:.2},{x:.2},{y:.2}")?,
        }
    }
    out.push('"');
    stroke_attributes(out, path.stroke)?;
    out.push_str("/>");
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}""#,
        rect.x, rect.y, rect.width, rect.height
    )?;
    match rect.fill {
        Some(fill) => write!(out, r#" fill="{}""#, fill.to_css())?,
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = rect.stroke {
        stroke_attributes(out, stroke)?;
    }
    out.push_str("/>");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"<text x="{:.2}" y="{:.2}" font-size="{}" fill="{}" text-anchor="{anchor}""#,
        text.x,
        text.y,
        text.font_size_px,
        text.color.to_css()
    )?;
    if text.rotation_deg != 0.0 {
        write!(
            out,
            r#" transform="rotate({} {:.2} {:.2})""#,
            text.rotation_deg, text.x, text.y
        )?;
    }
    if text.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    write!(out, ">{}</text>", escape_markup(&text.text))
}
