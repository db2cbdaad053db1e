use std::collections::HashMap;
use std::f64::consts::TAU;
use std::sync::Arc;

use vello_cpu::kurbo::{self as vk, Shape};

use crate::{
    compose::text::MARKER_INDENT_EM,
    compose::tree::{
        Axis, Element, Layer, LoadState, Paint, ParagraphKind, StyledRun, TextFlow, VerticalAlign,
    },
    foundation::core::{Color, FrameSize, Rect},
    foundation::error::{CarouselError, CarouselResult},
    model::settings::TextAlign,
    model::slide::ImageRef,
    render::backend::{FrameRGBA, RenderBackend, RenderMode, RenderSettings},
    render::images::PreparedImage,
    render::settle::SettledFrame,
    render::text::{RunBrush, TextEngine},
};

/// Label line box, in em.
const LABEL_LINE_EM: f64 = 1.2;
const SPINNER_DOTS: usize = 12;
const FAILED_SURFACE: Color = Color::rgba(128, 128, 128, 48);

/// CPU raster backend powered by `vello_cpu` and `parley`.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
    text: TextEngine,
    image_cache: HashMap<ImageRef, CachedImage>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
    font_cache: FontCache,
}

/// Shaped fonts re-wrapped for the rasterizer, keyed by blob id and face index.
type FontCache = HashMap<(u64, u32), vello_cpu::peniko::FontData>;

#[derive(Clone)]
struct CachedImage {
    bytes: Arc<Vec<u8>>,
    paint: vello_cpu::Image,
    width: f64,
    height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    start: [u8; 4],
    end: [u8; 4],
    w: u32,
    h: u32,
}

/// Per-render values threaded through the draw helpers.
#[derive(Clone, Copy)]
struct DrawCx<'a> {
    frame: &'a SettledFrame,
    /// Device px per reference px.
    scale: f64,
    spinner_phase: f64,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("settings", &self.settings)
            .field("cached_images", &self.image_cache.len())
            .finish_non_exhaustive()
    }
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        let text = TextEngine::new(&settings.fonts);
        Self {
            settings,
            ctx: None,
            text,
            image_cache: HashMap::new(),
            gradient_cache: HashMap::new(),
            font_cache: HashMap::new(),
        }
    }

    fn take_ctx(&mut self, width: u16, height: u16) -> vello_cpu::RenderContext {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        ctx
    }

    fn image_for(&mut self, frame: &SettledFrame, source: &ImageRef) -> Option<CachedImage> {
        let prepared = frame.image(source)?;
        if let Some(hit) = self.image_cache.get(source)
            && Arc::ptr_eq(&hit.bytes, &prepared.rgba8_premul)
        {
            return Some(hit.clone());
        }
        match image_paint(prepared) {
            Ok(paint) => {
                let cached = CachedImage {
                    bytes: prepared.rgba8_premul.clone(),
                    paint,
                    width: f64::from(prepared.width),
                    height: f64::from(prepared.height),
                };
                self.image_cache.insert(source.clone(), cached.clone());
                Some(cached)
            }
            Err(e) => {
                tracing::warn!(error = %e, "image cannot be rasterized; drawing placeholder");
                None
            }
        }
    }

    fn gradient_paint(&mut self, start: Color, end: Color, w: u32, h: u32) -> CarouselResult<vello_cpu::Image> {
        let key = GradientKey {
            start: start.to_premul(),
            end: end.to_premul(),
            w,
            h,
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }
        let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
        let h1 = (h.max(1) - 1) as f32;
        for y in 0..h {
            let t = if h1 <= 0.0 { 0.0 } else { (y as f32) / h1 };
            let lerp = |a: u8, b: u8| -> u8 {
                let af = f32::from(a);
                let bf = f32::from(b);
                (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
            };
            let c = [
                lerp(key.start[0], key.end[0]),
                lerp(key.start[1], key.end[1]),
                lerp(key.start[2], key.end[2]),
                lerp(key.start[3], key.end[3]),
            ];
            for x in 0..w {
                let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
                bytes[idx..idx + 4].copy_from_slice(&c);
            }
        }
        let img = premul_bytes_to_image(&bytes, w, h)?;
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }

    fn draw_layer(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        cx: DrawCx<'_>,
        layer: &Layer,
        size: FrameSize,
    ) -> CarouselResult<()> {
        let rect = layer
            .geometry
            .resolve(f64::from(size.width), f64::from(size.height));
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Ok(());
        }
        let radius = layer.style.radius * cx.scale;
        let opacity = layer.style.opacity.clamp(0.0, 1.0) as f32;
        if opacity < 1.0 {
            ctx.push_opacity_layer(opacity);
        }

        match layer.style.fill {
            Some(Paint::Solid { color }) => {
                ctx.set_transform(vk::Affine::IDENTITY);
                ctx.set_paint(cpu_color(color));
                fill_rounded(ctx, rect, radius);
            }
            Some(Paint::VerticalGradient { top, bottom }) => {
                let w = rect.width().ceil().max(1.0) as u32;
                let h = rect.height().ceil().max(1.0) as u32;
                let img = self.gradient_paint(top, bottom, w, h)?;
                ctx.set_transform(vk::Affine::translate((rect.x0, rect.y0)));
                ctx.set_paint(img);
                ctx.fill_rect(&vk::Rect::new(0.0, 0.0, rect.width(), rect.height()));
            }
            None => {}
        }

        for child in &layer.children {
            self.draw_element(ctx, cx, child, rect, radius);
        }

        if opacity < 1.0 {
            ctx.pop_layer();
        }
        Ok(())
    }

    fn draw_element(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        cx: DrawCx<'_>,
        element: &Element,
        rect: Rect,
        radius: f64,
    ) {
        match element {
            Element::Image {
                source,
                focal_y,
                load,
            } => {
                let img = match load {
                    LoadState::Loaded => self.image_for(cx.frame, source),
                    _ => None,
                };
                match img {
                    Some(img) => draw_cover(ctx, &img, rect, *focal_y, ImageClip::Rounded(radius)),
                    None => {
                        ctx.set_transform(vk::Affine::IDENTITY);
                        ctx.set_paint(cpu_color(FAILED_SURFACE));
                        fill_rounded(ctx, rect, radius);
                    }
                }
            }
            Element::Placeholder { surface, ink, .. } => {
                ctx.set_transform(vk::Affine::IDENTITY);
                ctx.set_paint(cpu_color(*surface));
                fill_rounded(ctx, rect, radius);
                draw_spinner(ctx, rect, *ink, cx.spinner_phase);
            }
            Element::Text(flow) => self.draw_flow(ctx, cx, flow, rect),
            Element::Stack { align, .. } => {
                let (w, h) = self.measure(cx, element);
                let x = rect.x0 + (rect.width() - w) * align.factor();
                let y = rect.y0 + (rect.height() - h) / 2.0;
                self.draw_sized(ctx, cx, element, Rect::new(x, y, x + w, y + h));
            }
            _ => {
                let (w, h) = self.measure(cx, element);
                let r = Rect::new(rect.x0, rect.y0, rect.x0 + w, rect.y0 + h);
                self.draw_sized(ctx, cx, element, r);
            }
        }
    }

    /// Draw an inline element into a box of exactly its measured size.
    fn draw_sized(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        cx: DrawCx<'_>,
        element: &Element,
        rect: Rect,
    ) {
        match element {
            Element::Avatar {
                source,
                load,
                fallback,
                ..
            } => {
                let img = match (source, load) {
                    (Some(src), LoadState::Loaded) => self.image_for(cx.frame, src),
                    _ => None,
                };
                match img {
                    Some(img) => draw_cover(ctx, &img, rect, 50.0, ImageClip::Circle),
                    None => {
                        ctx.set_transform(vk::Affine::IDENTITY);
                        ctx.set_paint(cpu_color(*fallback));
                        fill_circle(ctx, rect);
                    }
                }
            }
            Element::Label {
                text,
                size,
                bold,
                color,
            } => {
                let run = label_run(text, *bold, *color);
                let size_px = (size * cx.scale) as f32;
                let layout = self.text.layout_runs(
                    std::slice::from_ref(&run),
                    "sans-serif",
                    size_px,
                    None,
                );
                draw_layout(
                    ctx,
                    &mut self.font_cache,
                    &layout,
                    std::slice::from_ref(&run),
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    f64::from(size_px) * LABEL_LINE_EM,
                    TextAlign::Left,
                );
            }
            Element::VerifiedBadge { color, .. } => {
                ctx.set_transform(vk::Affine::IDENTITY);
                ctx.set_paint(cpu_color(*color));
                fill_circle(ctx, rect);
                ctx.set_paint(cpu_color(Color::WHITE));
                ctx.fill_path(&check_mark(rect));
            }
            Element::Stack {
                axis,
                gap,
                align,
                items,
            } => {
                let gap = gap * cx.scale;
                let mut cursor = match axis {
                    Axis::Row => rect.x0,
                    Axis::Column => rect.y0,
                };
                for item in items {
                    let (w, h) = self.measure(cx, item);
                    let r = match axis {
                        Axis::Row => {
                            let y = rect.y0 + (rect.height() - h) / 2.0;
                            Rect::new(cursor, y, cursor + w, y + h)
                        }
                        Axis::Column => {
                            let x = rect.x0 + (rect.width() - w) * align.factor();
                            Rect::new(x, cursor, x + w, cursor + h)
                        }
                    };
                    self.draw_sized(ctx, cx, item, r);
                    cursor += match axis {
                        Axis::Row => w + gap,
                        Axis::Column => h + gap,
                    };
                }
            }
            other => self.draw_element(ctx, cx, other, rect, 0.0),
        }
    }

    /// Intrinsic size in device px; block elements have none.
    fn measure(&mut self, cx: DrawCx<'_>, element: &Element) -> (f64, f64) {
        match element {
            Element::Avatar { diameter, .. } => (diameter * cx.scale, diameter * cx.scale),
            Element::VerifiedBadge { size, .. } => (size * cx.scale, size * cx.scale),
            Element::Label {
                text,
                size,
                bold,
                color,
            } => {
                let size_px = size * cx.scale;
                let run = label_run(text, *bold, *color);
                let w = self.text.measure_line(&run, "sans-serif", size_px as f32);
                (w, size_px * LABEL_LINE_EM)
            }
            Element::Stack {
                axis, gap, items, ..
            } => {
                let gap = gap * cx.scale;
                let sizes: Vec<(f64, f64)> = items.iter().map(|i| self.measure(cx, i)).collect();
                let gaps = gap * sizes.len().saturating_sub(1) as f64;
                match axis {
                    Axis::Row => (
                        sizes.iter().map(|s| s.0).sum::<f64>() + gaps,
                        sizes.iter().map(|s| s.1).fold(0.0, f64::max),
                    ),
                    Axis::Column => (
                        sizes.iter().map(|s| s.0).fold(0.0, f64::max),
                        sizes.iter().map(|s| s.1).sum::<f64>() + gaps,
                    ),
                }
            }
            Element::Image { .. } | Element::Placeholder { .. } | Element::Text(_) => (0.0, 0.0),
        }
    }

    fn draw_flow(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        cx: DrawCx<'_>,
        flow: &TextFlow,
        rect: Rect,
    ) {
        let s = cx.scale;
        let mut shaped = Vec::with_capacity(flow.paragraphs.len());
        let mut total = 0.0;
        let mut prev_text = false;
        for p in &flow.paragraphs {
            if p.kind == ParagraphKind::Spacer {
                total += p.space * s;
                prev_text = false;
                shaped.push(None);
                continue;
            }
            let gap = if prev_text { flow.paragraph_gap * s } else { 0.0 };
            let size_px = p.font_size * s;
            let indent = if p.marker.is_some() {
                size_px * MARKER_INDENT_EM
            } else {
                0.0
            };
            let width = (rect.width() - indent).max(1.0);
            let layout =
                self.text
                    .layout_runs(&p.runs, &flow.font_family, size_px as f32, Some(width as f32));
            let line_px = size_px * flow.line_height;
            let lines = layout.lines().count().max(1);
            let height = lines as f64 * line_px;
            total += gap + height;
            prev_text = true;
            shaped.push(Some((gap, indent, width, line_px, height, layout)));
        }

        let mut y = match flow.valign {
            VerticalAlign::Top => rect.y0,
            VerticalAlign::Center => rect.y0 + ((rect.height() - total) / 2.0).max(0.0),
        };
        for (p, shaped) in flow.paragraphs.iter().zip(shaped) {
            let Some((gap, indent, width, line_px, height, layout)) = shaped else {
                y += p.space * s;
                continue;
            };
            y += gap;
            if let Some(marker) = &p.marker {
                let size_px = (p.font_size * s) as f32;
                let m = self.text.layout_runs(
                    std::slice::from_ref(marker),
                    &flow.font_family,
                    size_px,
                    None,
                );
                draw_layout(
                    ctx,
                    &mut self.font_cache,
                    &m,
                    std::slice::from_ref(marker),
                    rect.x0,
                    y,
                    indent,
                    line_px,
                    TextAlign::Left,
                );
            }
            draw_layout(
                ctx,
                &mut self.font_cache,
                &layout,
                &p.runs,
                rect.x0 + indent,
                y,
                width,
                line_px,
                flow.align,
            );
            y += height;
        }
    }
}

impl RenderBackend for CpuBackend {
    fn render(
        &mut self,
        frame: &SettledFrame,
        size: FrameSize,
        mode: RenderMode,
    ) -> CarouselResult<FrameRGBA> {
        size.validate()?;
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| CarouselError::render("frame width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| CarouselError::render("frame height exceeds u16"))?;

        let tree = frame.tree();
        let cx = DrawCx {
            frame,
            scale: size.px_scale(),
            spinner_phase: mode.spinner_phase(),
        };

        let mut ctx = self.take_ctx(width, height);
        ctx.set_transform(vk::Affine::IDENTITY);
        ctx.set_paint(cpu_color(tree.background));
        ctx.fill_rect(&vk::Rect::new(
            0.0,
            0.0,
            f64::from(size.width),
            f64::from(size.height),
        ));

        let mut result = Ok(());
        for layer in &tree.layers {
            result = self.draw_layer(&mut ctx, cx, layer, size);
            if result.is_err() {
                break;
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);
        result?;

        Ok(FrameRGBA {
            width: size.width,
            height: size.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn render_settings(&self) -> &RenderSettings {
        &self.settings
    }
}

fn label_run(text: &str, bold: bool, color: Color) -> StyledRun {
    StyledRun {
        text: text.to_string(),
        style: crate::markup::inline::RunStyle::Plain,
        color,
        bold,
        italic: false,
        strike: false,
        underline: false,
        highlight: None,
    }
}

fn cpu_color(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn cpu_rect(r: Rect) -> vk::Rect {
    vk::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn fill_rounded(ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64) {
    if radius > 0.0 {
        let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
        ctx.fill_path(&vk::RoundedRect::from_rect(cpu_rect(rect), r).to_path(0.1));
    } else {
        ctx.fill_rect(&cpu_rect(rect));
    }
}

fn fill_circle(ctx: &mut vello_cpu::RenderContext, rect: Rect) {
    let c = rect.center();
    let r = rect.width().min(rect.height()) / 2.0;
    ctx.fill_path(&vk::Circle::new((c.x, c.y), r).to_path(0.1));
}

#[derive(Clone, Copy)]
enum ImageClip {
    Rounded(f64),
    Circle,
}

/// Cover-fit `img` into `dst`; `focal_y` picks the vertical crop (0 top, 100 bottom).
///
/// Only the visible source region is filled, so no clip layer is needed.
fn draw_cover(
    ctx: &mut vello_cpu::RenderContext,
    img: &CachedImage,
    dst: Rect,
    focal_y: f64,
    clip: ImageClip,
) {
    if img.width <= 0.0 || img.height <= 0.0 || dst.width() <= 0.0 || dst.height() <= 0.0 {
        return;
    }
    let s = (dst.width() / img.width).max(dst.height() / img.height);
    let sw = dst.width() / s;
    let sh = dst.height() / s;
    let sx0 = (img.width - sw) / 2.0;
    let sy0 = (img.height - sh) * focal_y.clamp(0.0, 100.0) / 100.0;

    ctx.set_transform(
        vk::Affine::translate((dst.x0 - sx0 * s, dst.y0 - sy0 * s)) * vk::Affine::scale(s),
    );
    ctx.set_paint(img.paint.clone());
    let src = vk::Rect::new(sx0, sy0, sx0 + sw, sy0 + sh);
    match clip {
        ImageClip::Rounded(r) if r > 0.0 => {
            let r = (r / s).min(sw / 2.0).min(sh / 2.0);
            ctx.fill_path(&vk::RoundedRect::from_rect(src, r).to_path(0.1));
        }
        ImageClip::Rounded(_) => ctx.fill_rect(&src),
        ImageClip::Circle => {
            let c = src.center();
            ctx.fill_path(&vk::Circle::new(c, sw.min(sh) / 2.0).to_path(0.1));
        }
    }
    ctx.set_transform(vk::Affine::IDENTITY);
}

/// Ring of dots; the brightest dot sits at `phase` turns from the top.
fn draw_spinner(ctx: &mut vello_cpu::RenderContext, rect: Rect, ink: Color, phase: f64) {
    let c = rect.center();
    let ring = (rect.width().min(rect.height()) * 0.06).max(4.0);
    let dot = ring * 0.18;
    ctx.set_transform(vk::Affine::IDENTITY);
    for k in 0..SPINNER_DOTS {
        let t = k as f64 / SPINNER_DOTS as f64;
        let angle = TAU * t - TAU / 4.0;
        let age = (phase - t).rem_euclid(1.0);
        ctx.set_paint(cpu_color(ink.scale_alpha(1.0 - 0.8 * age)));
        let p = (c.x + ring * angle.cos(), c.y + ring * angle.sin());
        ctx.fill_path(&vk::Circle::new(p, dot).to_path(0.1));
    }
}

fn check_mark(rect: Rect) -> vk::BezPath {
    let at = |u: f64, v: f64| vk::Point::new(rect.x0 + rect.width() * u, rect.y0 + rect.height() * v);
    let mut path = vk::BezPath::new();
    path.move_to(at(0.24, 0.50));
    path.line_to(at(0.32, 0.42));
    path.line_to(at(0.44, 0.55));
    path.line_to(at(0.68, 0.30));
    path.line_to(at(0.76, 0.38));
    path.line_to(at(0.44, 0.71));
    path.close_path();
    path
}

/// Draw a shaped paragraph with its top-left at `(x, y)`.
///
/// Lines are stacked at `line_px` and aligned by hand inside `width`; decorations come from
/// the styled run each glyph run points back to.
#[allow(clippy::too_many_arguments)]
fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    fonts: &mut FontCache,
    layout: &parley::Layout<RunBrush>,
    runs: &[StyledRun],
    x: f64,
    y: f64,
    width: f64,
    line_px: f64,
    align: TextAlign,
) {
    let k = match align {
        TextAlign::Left | TextAlign::Justify => 0.0,
        TextAlign::Center => 0.5,
        TextAlign::Right => 1.0,
    };
    ctx.set_transform(vk::Affine::IDENTITY);

    for (i, line) in layout.lines().enumerate() {
        let m = line.metrics();
        let ascent = f64::from(m.ascent);
        let descent = f64::from(m.descent);
        let dx = x + (width - f64::from(m.advance)).max(0.0) * k;
        let baseline = y + i as f64 * line_px + (line_px - (ascent + descent)) / 2.0 + ascent;

        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let Some(styled) = runs.get(run.style().brush.0 as usize) else {
                continue;
            };
            let dy = baseline - f64::from(run.baseline());
            let x0 = dx + f64::from(run.offset());
            let x1 = x0 + f64::from(run.advance());
            let font_size = f64::from(run.run().font_size());

            if let Some(hl) = styled.highlight {
                ctx.set_paint(cpu_color(hl));
                ctx.fill_rect(&vk::Rect::new(x0, baseline - ascent, x1, baseline + descent));
            }

            ctx.set_paint(cpu_color(styled.color));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: (f64::from(g.x) + dx) as f32,
                y: (f64::from(g.y) + dy) as f32,
            });
            let shaped = run.run().font();
            let font = fonts
                .entry((shaped.data.id(), shaped.index))
                .or_insert_with(|| {
                    vello_cpu::peniko::FontData::new(
                        vello_cpu::peniko::Blob::from(shaped.data.data().to_vec()),
                        shaped.index,
                    )
                });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);

            let thickness = (font_size * 0.06).max(1.0);
            if styled.underline {
                let top = baseline + font_size * 0.1;
                ctx.fill_rect(&vk::Rect::new(x0, top, x1, top + thickness));
            }
            if styled.strike {
                let top = baseline - font_size * 0.3;
                ctx.fill_rect(&vk::Rect::new(x0, top, x1, top + thickness));
            }
        }
    }
}

fn image_paint(prepared: &PreparedImage) -> CarouselResult<vello_cpu::Image> {
    premul_bytes_to_image(&prepared.rgba8_premul, prepared.width, prepared.height)
}

fn premul_bytes_to_image(bytes: &[u8], width: u32, height: u32) -> CarouselResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CarouselError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CarouselError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CarouselError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
