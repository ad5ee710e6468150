//! Direct2D badge rendering.
//!
//! Draws into a 32-bit premultiplied DIB through a DC render target so the
//! result can be handed to `UpdateLayeredWindow` with per-pixel alpha. Brush
//! colors are straight alpha; Direct2D premultiplies them on the way in.

use tracing::debug;
use windows::core::{w, HSTRING};
use windows::Win32::Foundation::{D2DERR_RECREATE_TARGET, RECT};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_FIGURE_BEGIN_FILLED, D2D1_FIGURE_END_CLOSED,
    D2D1_PIXEL_FORMAT, D2D_SIZE_F,
};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1DCRenderTarget, ID2D1Factory, ID2D1PathGeometry, ID2D1RenderTarget,
    ID2D1SolidColorBrush, D2D1_ANTIALIAS_MODE_PER_PRIMITIVE, D2D1_ARC_SEGMENT, D2D1_ARC_SIZE_SMALL,
    D2D1_DRAW_TEXT_OPTIONS_NONE, D2D1_FACTORY_TYPE_SINGLE_THREADED,
    D2D1_RENDER_TARGET_PROPERTIES, D2D1_RENDER_TARGET_TYPE_DEFAULT,
    D2D1_RENDER_TARGET_USAGE_NONE, D2D1_SWEEP_DIRECTION_CLOCKWISE,
    D2D1_TEXT_ANTIALIAS_MODE_GRAYSCALE,
};
use windows::Win32::Graphics::DirectWrite::{
    DWriteCreateFactory, IDWriteFactory, IDWriteTextFormat, IDWriteTextLayout,
    DWRITE_FACTORY_TYPE_SHARED, DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL,
    DWRITE_FONT_WEIGHT_BOLD, DWRITE_TEXT_METRICS, DWRITE_WORD_WRAPPING_NO_WRAP,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Gdi::HDC;
use windows_numerics::Vector2;

use crate::error::{OsdError, Result};
use crate::render::{
    BadgeContent, BadgeLayout, BadgeStyle, PointF, Rgba, RoundedRectPath, TextExtent, TextMeasure,
};

/// Layout box used when measuring; text never wraps so only the height of a
/// line matters.
const MEASURE_BOX: f32 = 4096.0;

/// Renderer state built once at startup.
pub struct D2dRenderer {
    factory: ID2D1Factory,
    dwrite: IDWriteFactory,
    text_format: IDWriteTextFormat,
    outline: ID2D1PathGeometry,
    /// Recreated after device loss.
    target: Option<ID2D1DCRenderTarget>,
    style: BadgeStyle,
}

impl D2dRenderer {
    /// Create factories, the text format and the background geometry.
    ///
    /// COM must already be initialized on this thread.
    pub fn new(style: BadgeStyle) -> Result<Self> {
        unsafe {
            let factory: ID2D1Factory =
                D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;
            let dwrite: IDWriteFactory = DWriteCreateFactory(DWRITE_FACTORY_TYPE_SHARED)?;

            // Points to DIPs; the target runs at 96 DPI so a DIP is a pixel.
            let font_size = style.font_size * 96.0 / 72.0;
            let text_format = dwrite.CreateTextFormat(
                &HSTRING::from(style.font_family.as_str()),
                None,
                DWRITE_FONT_WEIGHT_BOLD,
                DWRITE_FONT_STYLE_NORMAL,
                DWRITE_FONT_STRETCH_NORMAL,
                font_size,
                w!("en-us"),
            )?;
            text_format.SetWordWrapping(DWRITE_WORD_WRAPPING_NO_WRAP)?;

            let outline = build_outline(&factory, &style.outline())?;
            debug!(font = %style.font_family, font_size, "renderer ready");

            Ok(Self {
                factory,
                dwrite,
                text_format,
                outline,
                target: None,
                style,
            })
        }
    }

    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }

    /// Render the full badge into the bitmap selected in `dc`.
    ///
    /// Empty content draws only the background. Any failure drops the cached
    /// target so the next frame starts from a fresh one.
    pub fn draw(&mut self, dc: HDC, content: &BadgeContent) -> Result<()> {
        let layout = match content.segments() {
            Some(segments) => Some((
                segments,
                BadgeLayout::compute(
                    &segments,
                    &*self,
                    self.style.width as f32,
                    self.style.height as f32,
                )?,
            )),
            None => None,
        };

        let target = self.target()?;
        let rect = RECT {
            left: 0,
            top: 0,
            right: self.style.width,
            bottom: self.style.height,
        };
        unsafe { target.BindDC(dc, &rect).map_err(render_error)? };
        let rt: ID2D1RenderTarget = target.into();

        // Fallible allocations happen before BeginDraw so an error never
        // leaves the target mid-draw.
        let background = brush(&rt, self.style.background)?;
        let mut runs = Vec::with_capacity(2);
        if let Some((segments, layout)) = layout {
            runs.push(TextRun {
                origin: vector(layout.label_origin),
                layout: self.text_layout(segments.label, layout.label_extent)?,
                brush: brush(&rt, self.style.text)?,
            });
            runs.push(TextRun {
                origin: vector(layout.status_origin),
                layout: self.text_layout(segments.status, layout.status_extent)?,
                brush: brush(&rt, self.style.status_color(&segments))?,
            });
        }

        unsafe {
            rt.BeginDraw();
            rt.Clear(Some(&d2d_color(Rgba::TRANSPARENT)));
            rt.SetAntialiasMode(D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);
            rt.SetTextAntialiasMode(D2D1_TEXT_ANTIALIAS_MODE_GRAYSCALE);
            rt.FillGeometry(&self.outline, &background, None);
            for run in &runs {
                rt.DrawTextLayout(run.origin, &run.layout, &run.brush, D2D1_DRAW_TEXT_OPTIONS_NONE);
            }

            if let Err(e) = rt.EndDraw(None, None) {
                let lost = e.code() == D2DERR_RECREATE_TARGET;
                debug!(error = %e, lost, "dropping render target");
                self.target = None;
                return Err(render_error(e));
            }
        }
        Ok(())
    }

    /// True while a render target is cached for the next frame.
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    fn target(&mut self) -> Result<ID2D1DCRenderTarget> {
        if let Some(target) = &self.target {
            return Ok(target.clone());
        }

        let props = D2D1_RENDER_TARGET_PROPERTIES {
            r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
            pixelFormat: D2D1_PIXEL_FORMAT {
                format: DXGI_FORMAT_B8G8R8A8_UNORM,
                alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
            },
            dpiX: 96.0,
            dpiY: 96.0,
            usage: D2D1_RENDER_TARGET_USAGE_NONE,
            minLevel: Default::default(),
        };
        let target = unsafe { self.factory.CreateDCRenderTarget(&props)? };
        self.target = Some(target.clone());
        Ok(target)
    }

    fn text_layout(&self, text: &str, extent: TextExtent) -> Result<IDWriteTextLayout> {
        let wide: Vec<u16> = text.encode_utf16().collect();
        let layout = unsafe {
            self.dwrite
                .CreateTextLayout(
                    &wide,
                    &self.text_format,
                    extent.width.max(1.0),
                    extent.height.max(self.style.height as f32),
                )
                .map_err(render_error)?
        };
        Ok(layout)
    }
}

impl TextMeasure for D2dRenderer {
    fn measure(&self, text: &str) -> Result<TextExtent> {
        let layout = self.text_layout(
            text,
            TextExtent {
                width: MEASURE_BOX,
                height: MEASURE_BOX,
            },
        )?;
        let mut metrics = DWRITE_TEXT_METRICS::default();
        unsafe { layout.GetMetrics(&mut metrics)? };
        Ok(TextExtent {
            width: metrics.widthIncludingTrailingWhitespace,
            height: metrics.height,
        })
    }
}

/// One positioned line of text with its brush.
struct TextRun {
    origin: Vector2,
    layout: IDWriteTextLayout,
    brush: ID2D1SolidColorBrush,
}

fn brush(rt: &ID2D1RenderTarget, color: Rgba) -> Result<ID2D1SolidColorBrush> {
    unsafe { rt.CreateSolidColorBrush(&d2d_color(color), None) }.map_err(render_error)
}

fn render_error(e: windows::core::Error) -> OsdError {
    OsdError::Render(e.to_string())
}

/// Rounded rectangle as one closed, filled figure.
fn build_outline(factory: &ID2D1Factory, path: &RoundedRectPath) -> Result<ID2D1PathGeometry> {
    unsafe {
        let geometry = factory.CreatePathGeometry()?;
        let sink = geometry.Open()?;

        sink.BeginFigure(vector(path.start), D2D1_FIGURE_BEGIN_FILLED);
        for corner in &path.corners {
            sink.AddLine(vector(corner.from));
            sink.AddArc(&D2D1_ARC_SEGMENT {
                point: vector(corner.to),
                size: D2D_SIZE_F {
                    width: corner.radius,
                    height: corner.radius,
                },
                rotationAngle: 0.0,
                sweepDirection: D2D1_SWEEP_DIRECTION_CLOCKWISE,
                arcSize: D2D1_ARC_SIZE_SMALL,
            });
        }
        sink.EndFigure(D2D1_FIGURE_END_CLOSED);
        sink.Close()?;

        Ok(geometry)
    }
}

fn vector(p: PointF) -> Vector2 {
    Vector2::new(p.x, p.y)
}

fn d2d_color(c: Rgba) -> D2D1_COLOR_F {
    let (r, g, b, a) = c.normalized();
    D2D1_COLOR_F { r, g, b, a }
}
