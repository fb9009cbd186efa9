use std::{fmt::{self, Write as _}, fs, io::{self, Write as _}, path};

use crate::{Coords, Polygon, PslgError, config::env};

/// Labels are skipped for rings with more vertices than this, they would overlap
const MAX_LABELED_VERTICES: usize = 64;

pub(crate) struct SvgContext {
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    fn from_vertices(vertices: &[Coords]) -> Self {
        let mut context = Self {
            view_x_min: f32::MAX,
            view_x_max: f32::MIN,
            view_y_min: f32::MAX,
            view_y_max: f32::MIN,
            show_labels: env::svg::show_labels() && vertices.len() <= MAX_LABELED_VERTICES,
        };
        for v in vertices {
            // SVG y grows downward
            let (x, y) = (v.x() as f32, -v.y() as f32);
            context.view_x_min = context.view_x_min.min(x);
            context.view_x_max = context.view_x_max.max(x);
            context.view_y_min = context.view_y_min.min(y);
            context.view_y_max = context.view_y_max.max(y);
        }
        let margin = context.view_max_size().max(1.0) * 0.1;
        context.view_x_min -= margin;
        context.view_x_max += margin;
        context.view_y_min -= margin;
        context.view_y_max += margin;
        context
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }
    pub fn view_max_size(&self) -> f32 { self.view_w().max(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

/// Renders the vertices and boundary segments of `polygon` as an SVG document
pub fn render<P: Polygon + ?Sized>(polygon: &P) -> Result<String, PslgError> {
    let vertices = (0..polygon.vertex_count())
        .map(|i| Coords::try_from_vertex(&polygon.get_vertex(i), i))
        .collect::<Result<Vec<_>, _>>()?;
    let context = SvgContext::from_vertices(&vertices);

    let mut content = String::new();
    write_svg(&mut content, &context, &vertices, polygon)
        .map_err(|_| PslgError::Io(io::Error::new(io::ErrorKind::Other, "failed to format SVG")))?;
    Ok(content)
}

fn write_svg<P: Polygon + ?Sized>(w: &mut String, context: &SvgContext, vertices: &[Coords], polygon: &P) -> fmt::Result {
    use svg_fmt::{black, green, line_segment, rgb, text, Fill};

    let point = |i: usize| (vertices[i].x() as f32, -vertices[i].y() as f32);

    writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", context.view_x_min, context.view_y_min, context.view_w(), context.view_h())?;
    for s in polygon.iter_segments() {
        let (x1, y1) = point(s.start);
        let (x2, y2) = point(s.end);
        writeln!(w, "{}", line_segment(x1, y1, x2, y2).color(rgb(255, 0, 255)).width(context.percent(0.3)))?;
    }
    for i in 0..vertices.len() {
        let (x, y) = point(i);
        writeln!(w, "{}", circle(x, y, context.percent(0.6)).fill(Fill::Color(green())))?;
        if context.show_labels {
            writeln!(w, "{}", text(x, y, format!("v{}", i)).size(context.percent(3.0)).color(black()))?;
        }
    }
    writeln!(w, "</svg>")
}

/// Writes an SVG preview of `polygon` to `path`, or to `CIRCLE_PSLG_SVG_OUTPUT_PATH` when `path` is `None`.
///
/// Returns the path written, if any.
pub fn write_preview<P: Polygon + ?Sized>(polygon: &P, path: Option<&path::Path>) -> Result<Option<path::PathBuf>, PslgError> {
    let path = match path.map(path::Path::to_path_buf).or_else(env::svg::output_path) {
        Some(path) => path,
        None => return Ok(None),
    };

    let content = render(polygon)?;
    let mut w = io::BufWriter::new(fs::File::create(&path)?);
    w.write_all(content.as_bytes())?;
    w.flush()?;
    log::info!("wrote SVG preview to {}", path.display());
    Ok(Some(path))
}

// svg_fmt is missing a function for Circle
fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
        comment: None,
    }
}
