use crate::fonts::{approximate_width, builtin_font, is_standard_family, win_ansi_bytes};
use folio_render_core::utils::{flip_y, inches_to_points, parse_color};
use folio_render_core::{PageCanvas, RenderError, Stroke, TextAlign, TextPlacement, TextStyle, wrap_text};
use folio_types::{Color, Geometry, Rect};
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::matrix::TextMatrix;
use printpdf::ops::Op;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{DictItem, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb, XObjectId};
use std::collections::{HashMap, HashSet};

const MM_PER_INCH: f32 = 25.4;
/// Spacing between wrapped lines, as a multiple of the font size.
pub const WRAP_LINE_SPACING: f32 = 1.15;

/// A printpdf-backed page canvas. Operations are buffered per page and only
/// turned into a document by [`PdfCanvas::finish`].
pub struct PdfCanvas {
    document: PdfDocument,
    page_width: f32,
    page_height: f32,
    pages: Vec<Vec<Op>>,
    images: HashMap<String, (XObjectId, (usize, usize))>,
    reported_fonts: HashSet<String>,
}

impl PdfCanvas {
    /// Creates a canvas with one blank page sized from the resolved geometry.
    pub fn new(title: &str, geometry: &Geometry) -> Self {
        log::debug!(
            "Creating {:.2}in x {:.2}in PDF canvas",
            geometry.page.width,
            geometry.page.height
        );
        Self {
            document: PdfDocument::new(title),
            page_width: geometry.page.width,
            page_height: geometry.page.height,
            pages: vec![Vec::new()],
            images: HashMap::new(),
            reported_fonts: HashSet::new(),
        }
    }

    /// Serializes every page. Returns the document bytes and the page count.
    pub fn finish(mut self) -> (Vec<u8>, usize) {
        let page_count = self.pages.len();
        let width = Mm(self.page_width * MM_PER_INCH);
        let height = Mm(self.page_height * MM_PER_INCH);
        for ops in self.pages.drain(..) {
            self.document.pages.push(PdfPage::new(width, height, ops));
        }
        // Text lines are raw `Tj` operators, which the secure mode drops.
        let options = PdfSaveOptions {
            secure: false,
            ..Default::default()
        };
        let mut warnings = Vec::new();
        let bytes = self.document.save(&options, &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warnings while saving", warnings.len());
        }
        (bytes, page_count)
    }

    fn ops(&mut self) -> &mut Vec<Op> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Top-left inch coordinates to PDF points with a bottom-left origin.
    fn to_pdf_point(&self, x: f32, y: f32) -> Point {
        Point {
            x: Pt(inches_to_points(x)),
            y: Pt(inches_to_points(flip_y(y, self.page_height))),
        }
    }

    fn note_font(&mut self, family: &str) {
        if !is_standard_family(family) && self.reported_fonts.insert(family.to_string()) {
            log::warn!(
                "Font family '{}' is not a standard PDF font, using Helvetica",
                family
            );
        }
    }

    fn register_image(&mut self, key: &str, data: &[u8]) -> Result<(XObjectId, (usize, usize)), RenderError> {
        if let Some((id, dims)) = self.images.get(key) {
            return Ok((id.clone(), *dims));
        }
        let mut warnings = Vec::new();
        let raw_image = printpdf::image::RawImage::decode_from_bytes(data, &mut warnings)
            .map_err(|e| RenderError::image(&image_label(key), e))?;
        let dims = (raw_image.width, raw_image.height);
        if dims.0 == 0 || dims.1 == 0 {
            return Err(RenderError::image(&image_label(key), "image has no pixels"));
        }
        let id = XObjectId::new();
        self.document
            .resources
            .xobjects
            .map
            .insert(id.clone(), XObject::Image(raw_image));
        self.images.insert(key.to_string(), (id.clone(), dims));
        log::debug!("Registered image {}x{} for '{}'", dims.0, dims.1, image_label(key));
        Ok((id, dims))
    }
}

fn to_pdf_color(color: Color) -> printpdf::color::Color {
    let (r, g, b) = color.to_unit_rgb();
    printpdf::color::Color::Rgb(Rgb::new(r, g, b, None))
}

fn image_label(key: &str) -> String {
    key.chars().take(48).collect()
}

/// A `Tj` operator with already encoded bytes. printpdf would write builtin
/// font text as UTF-8 under a WinAnsi font dictionary.
fn show_text(bytes: Vec<u8>) -> Op {
    Op::Unknown {
        key: "Tj".to_string(),
        value: vec![DictItem::String {
            data: bytes,
            literal: false,
        }],
    }
}

fn line_point(p: Point) -> LinePoint {
    LinePoint { p, bezier: false }
}

impl PageCanvas for PdfCanvas {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
        log::debug!("Added page {}", self.pages.len());
    }

    fn draw_text(
        &mut self,
        content: &str,
        placement: TextPlacement,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        if content.is_empty() {
            return Ok(());
        }
        let fill = to_pdf_color(parse_color(&style.color)?);
        self.note_font(&style.family);
        let font = builtin_font(&style.family, style.style);

        let lines = match placement.max_width {
            Some(max_width) => wrap_text(&*self, content, style, max_width),
            None => vec![content.to_string()],
        };
        let line_height = style.size_inches() * WRAP_LINE_SPACING;

        let mut ops = vec![
            Op::StartTextSection,
            Op::SetFillColor { col: fill },
            Op::SetFontSizeBuiltinFont {
                size: Pt(style.size),
                font,
            },
            // Writes nothing; adds the font to the page resources.
            Op::WriteTextBuiltinFont {
                items: Vec::new(),
                font,
            },
        ];
        for (i, line) in lines.into_iter().enumerate() {
            let width = approximate_width(&line, style);
            let x = match placement.align {
                TextAlign::Left => placement.x,
                TextAlign::Center => placement.x - width / 2.0,
                TextAlign::Right => placement.x - width,
            };
            let origin = self.to_pdf_point(x, placement.y + i as f32 * line_height);
            ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(origin.x, origin.y),
            });
            let (bytes, replaced) = win_ansi_bytes(&line);
            if replaced > 0 {
                log::warn!(
                    "{} character(s) in '{}' have no WinAnsi code, drawn as '?'",
                    replaced,
                    line
                );
            }
            ops.push(show_text(bytes));
        }
        ops.push(Op::EndTextSection);
        self.ops().extend(ops);
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        stroke: &Stroke,
    ) -> Result<(), RenderError> {
        let color = to_pdf_color(parse_color(&stroke.color)?);
        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    line_point(self.to_pdf_point(from.0, from.1)),
                    line_point(self.to_pdf_point(to.0, to.1)),
                ],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        };
        let thickness = Pt(inches_to_points(stroke.width));
        let ops = self.ops();
        ops.push(Op::SetOutlineColor { col: color });
        ops.push(Op::SetOutlineThickness { pt: thickness });
        ops.push(Op::DrawPolygon { polygon });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        fill: Option<&str>,
        stroke: Option<&Stroke>,
    ) -> Result<(), RenderError> {
        let mode = match (fill, stroke) {
            (None, None) => return Ok(()),
            (Some(_), None) => PaintMode::Fill,
            (None, Some(_)) => PaintMode::Stroke,
            (Some(_), Some(_)) => PaintMode::FillStroke,
        };
        let mut ops = Vec::new();
        if let Some(fill) = fill {
            ops.push(Op::SetFillColor {
                col: to_pdf_color(parse_color(fill)?),
            });
        }
        if let Some(stroke) = stroke {
            ops.push(Op::SetOutlineColor {
                col: to_pdf_color(parse_color(&stroke.color)?),
            });
            ops.push(Op::SetOutlineThickness {
                pt: Pt(inches_to_points(stroke.width)),
            });
        }
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
        let points = vec![
            line_point(self.to_pdf_point(left, bottom)),
            line_point(self.to_pdf_point(right, bottom)),
            line_point(self.to_pdf_point(right, top)),
            line_point(self.to_pdf_point(left, top)),
        ];
        ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
        self.ops().extend(ops);
        Ok(())
    }

    fn draw_image(&mut self, key: &str, data: &[u8], rect: Rect) -> Result<(), RenderError> {
        let (id, (px_width, px_height)) = self.register_image(key, data)?;
        let origin = self.to_pdf_point(rect.x, rect.y + rect.height);
        let transform = XObjectTransform {
            translate_x: Some(origin.x),
            translate_y: Some(origin.y),
            scale_x: Some(inches_to_points(rect.width) / px_width as f32),
            scale_y: Some(inches_to_points(rect.height) / px_height as f32),
            rotate: None,
            dpi: Some(72.0),
        };
        self.ops().push(Op::UseXobject { id, transform });
        Ok(())
    }

    fn text_width(&self, content: &str, style: &TextStyle) -> f32 {
        approximate_width(content, style)
    }
}
