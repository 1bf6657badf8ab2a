use super::theme::Theme;
use super::{ARROW_LINE_WIDTH, CIRCLE_LINE_WIDTH, REFERENCE_SIZE, TICK_RADIUS};
use crate::output::OutputError;
use cairo::{Context, Format, ImageSurface, SvgSurface};
use modring::geometry::CENTER;
use modring::{Arrow, Diagram, Point};
use palette::Srgba;
use std::f64::consts::PI;
use std::path::Path;

/// Maps the unit square (y up) onto a square pixel canvas (y down).
#[derive(Debug, Clone, Copy)]
struct Canvas {
    size: f64,
}

impl Canvas {
    fn to_px(self, p: Point) -> (f64, f64) {
        (p.x * self.size, (1.0 - p.y) * self.size)
    }

    fn scale(self) -> f64 {
        self.size / REFERENCE_SIZE
    }
}

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct ArrowRenderer<'a> {
    arrow: &'a Arrow,
    canvas: Canvas,
}

impl<'a> ArrowRenderer<'a> {
    fn new(arrow: &'a Arrow, canvas: Canvas) -> Self {
        Self { arrow, canvas }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        // self loops are shown by their tick alone
        let Some(head) = &self.arrow.head else {
            return Ok(());
        };
        self.draw_shaft(cr)?;
        self.draw_head(cr, head)
    }

    fn draw_shaft(&self, cr: &Context) -> Result<(), cairo::Error> {
        let (x0, y0) = self.canvas.to_px(self.arrow.tail);
        let (x1, y1) = self.canvas.to_px(self.arrow.shaft_end);
        cr.set_line_width(ARROW_LINE_WIDTH * self.canvas.scale());
        cr.move_to(x0, y0);
        cr.line_to(x1, y1);
        cr.stroke()
    }

    fn draw_head(&self, cr: &Context, head: &[Point; 4]) -> Result<(), cairo::Error> {
        for (i, p) in head.iter().enumerate() {
            let (x, y) = self.canvas.to_px(*p);
            if i == 0 {
                cr.move_to(x, y);
            } else {
                cr.line_to(x, y);
            }
        }
        cr.close_path();
        cr.fill()
    }
}

pub fn draw(
    cr: &Context,
    diagram: &Diagram,
    arrows: &[Arrow],
    theme: &Theme,
    size: f64,
) -> Result<(), cairo::Error> {
    let canvas = Canvas { size };

    set_color(cr, theme.background);
    cr.paint()?;

    draw_ticks(cr, diagram, theme, canvas)?;

    set_color(cr, theme.arrow);
    for arrow in arrows {
        ArrowRenderer::new(arrow, canvas).draw(cr)?;
    }

    draw_circle(cr, diagram, theme, canvas)
}

fn draw_ticks(
    cr: &Context,
    diagram: &Diagram,
    theme: &Theme,
    canvas: Canvas,
) -> Result<(), cairo::Error> {
    set_color(cr, theme.tick);
    for p in diagram.ring.points() {
        let (x, y) = canvas.to_px(*p);
        cr.new_sub_path();
        cr.arc(x, y, TICK_RADIUS * canvas.scale(), 0.0, 2.0 * PI);
    }
    cr.fill()
}

fn draw_circle(
    cr: &Context,
    diagram: &Diagram,
    theme: &Theme,
    canvas: Canvas,
) -> Result<(), cairo::Error> {
    let (cx, cy) = canvas.to_px(CENTER);
    set_color(cr, theme.circle);
    cr.set_line_width(CIRCLE_LINE_WIDTH * canvas.scale());
    cr.new_sub_path();
    cr.arc(cx, cy, diagram.ring.radius() * canvas.size, 0.0, 2.0 * PI);
    cr.stroke()
}

pub fn render_surface(
    diagram: &Diagram,
    arrows: &[Arrow],
    theme: &Theme,
    size: u32,
) -> Result<ImageSurface, cairo::Error> {
    let px = i32::try_from(size).map_err(|_| cairo::Error::InvalidSize)?;
    let surface = ImageSurface::create(Format::ARgb32, px, px)?;
    let cr = Context::new(&surface)?;
    draw(&cr, diagram, arrows, theme, size as f64)?;
    drop(cr);
    Ok(surface)
}

pub fn render_png(
    path: &Path,
    diagram: &Diagram,
    arrows: &[Arrow],
    theme: &Theme,
    size: u32,
) -> Result<(), OutputError> {
    let surface = render_surface(diagram, arrows, theme, size)?;
    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}

pub fn render_svg(
    path: &Path,
    diagram: &Diagram,
    arrows: &[Arrow],
    theme: &Theme,
    size: u32,
) -> Result<(), OutputError> {
    let side = size as f64;
    let surface = SvgSurface::new(side, side, Some(path))?;
    let cr = Context::new(&surface)?;
    draw(&cr, diagram, arrows, theme, side)?;
    drop(cr);
    surface.finish();
    Ok(())
}
