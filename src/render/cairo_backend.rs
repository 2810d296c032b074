use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{ViewerError, ViewerResult};
use crate::render::{
    CirclePrimitive, Color, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer, Shape,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into a Cairo context owned by the host, such as a
/// toolkit draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ViewerResult<()>;
}

/// Cairo + Pango renderer.
///
/// Draws offscreen into its own image surface through `Renderer::render`, or
/// onto an external context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ViewerResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ViewerError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(0.047, 0.063, 0.086),
            font_family: "Inter".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ViewerResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ViewerResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match &command.shape {
                Shape::Line(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.set_dash(&[], 0.0);
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                Shape::Polyline(polyline) => {
                    stroke_polyline(context, polyline)?;
                    stats.polylines_drawn += 1;
                }
                Shape::Circle(circle) => {
                    fill_circle(context, *circle)?;
                    stats.circles_drawn += 1;
                }
                Shape::Rect(rect) => {
                    paint_rect(context, *rect)?;
                    stats.rects_drawn += 1;
                }
                Shape::Text(text) => {
                    self.show_text(context, text)?;
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }

    fn show_text(&self, context: &Context, text: &TextPrimitive) -> ViewerResult<()> {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("{} {}px", self.font_family, text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let dx = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -f64::from(text_width) / 2.0,
            TextHAlign::Right => -f64::from(text_width),
        };

        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        context.translate(text.x, text.y);
        context.rotate(text.rotation_rad);
        apply_color(context, text.color);
        context.move_to(dx, -f64::from(text_height) / 2.0);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewerResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ViewerResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn stroke_polyline(context: &Context, polyline: &PolylinePrimitive) -> ViewerResult<()> {
    let mut points = polyline.points.iter();
    let Some(&(x0, y0)) = points.next() else {
        return Ok(());
    };
    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    context.set_dash(&polyline.dash, 0.0);
    context.move_to(x0, y0);
    for &(x, y) in points {
        context.line_to(x, y);
    }
    let result = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err));
    context.set_dash(&[], 0.0);
    result
}

fn fill_circle(context: &Context, circle: CirclePrimitive) -> ViewerResult<()> {
    apply_color(context, circle.fill_color);
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill circle", err))
}

fn paint_rect(context: &Context, rect: RectPrimitive) -> ViewerResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err));
    }
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    apply_color(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ViewerError {
    ViewerError::InvalidData(format!("{prefix}: {err}"))
}
