//! Annotated heatmap charts rendered to SVG.

use plotters::coord::Shift;
use plotters::prelude::{
    Color, DrawingArea, IntoDrawingArea, IntoFont, Rectangle, SVGBackend, Text, TextStyle,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontTransform, RGBColor, BLACK, WHITE};
use seasonscope_analysis::Heatmap;
use seasonscope_core::{ChartConfig, Palette, SeasonError};
use tracing::debug;

use crate::palette;

const MARGIN: i32 = 20;
const TICK_GAP: i32 = 6;
const COLORBAR_WIDTH: i32 = 22;
const COLORBAR_STEPS: i32 = 64;
const COLORBAR_TICKS: usize = 5;

/// Explicit styling for one render call.
///
/// Built from the `[chart]` section of the configuration; nothing about a
/// chart's look lives in process-wide state.
///
/// # Examples
///
/// ```
/// use seasonscope_core::{ChartConfig, Palette};
/// use seasonscope_render::HeatmapStyle;
///
/// let style = HeatmapStyle::from(&ChartConfig::default());
/// assert_eq!(style.palette, Palette::YlOrRd);
/// assert_eq!(style.width, 1200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapStyle {
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub font_family: String,
    pub title_size: u32,
    pub label_size: u32,
    /// Cell annotation size; 0 disables annotations.
    pub annotation_size: u32,
}

impl From<&ChartConfig> for HeatmapStyle {
    fn from(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            palette: config.palette,
            font_family: config.font_family.clone(),
            title_size: config.title_size,
            label_size: config.label_size,
            annotation_size: config.annotation_size,
        }
    }
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self::from(&ChartConfig::default())
    }
}

impl HeatmapStyle {
    fn text(
        &self,
        size: u32,
        color: RGBColor,
        pos: Pos,
        rotation: FontTransform,
    ) -> TextStyle<'_> {
        TextStyle {
            font: (self.font_family.as_str(), f64::from(size))
                .into_font()
                .transform(rotation),
            color: color.to_backend_color(),
            pos,
        }
    }
}

/// Pixel rectangle of the cell grid and the space around it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Layout {
    fn compute(heatmap: &Heatmap, style: &HeatmapStyle) -> Self {
        let label = style.label_size as i32;
        // Rough glyph width; text is laid out by the SVG viewer, not here.
        let glyph = (style.label_size as f64 * 0.6).ceil() as i32;

        let row_ticks = longest(&heatmap.matrix.rows) * glyph + TICK_GAP;
        let column_ticks = if heatmap.labels.rotate_x_labels {
            longest(&heatmap.matrix.columns) * glyph + TICK_GAP
        } else {
            label + TICK_GAP
        };
        let colorbar_caption = if heatmap.labels.colorbar_label.is_some() {
            label * 2
        } else {
            0
        };

        Self {
            left: MARGIN + label * 2 + row_ticks,
            top: MARGIN + style.title_size as i32 * 2,
            right: style.width as i32
                - MARGIN
                - colorbar_caption
                - label * 4
                - COLORBAR_WIDTH
                - MARGIN,
            bottom: style.height as i32 - MARGIN - label * 2 - column_ticks,
        }
    }

    fn width(&self) -> i32 {
        self.right - self.left
    }

    fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

fn longest(labels: &[String]) -> i32 {
    labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32
}

/// Render `heatmap` as an SVG document.
///
/// Each cell is filled from the style's palette on a single scale spanning
/// the matrix minimum to maximum and annotated with its share as a
/// percentage (`"37.50%"`). States run down the left, columns along the
/// bottom, and a color bar on the right shows the scale.
///
/// # Errors
///
/// Returns [`SeasonError::Render`] if the matrix is empty, the canvas is too
/// small to fit the grid, or drawing fails.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::{Heatmap, HeatmapLabels, HeatmapMatrix};
/// use seasonscope_render::{render_svg, HeatmapStyle};
///
/// let heatmap = Heatmap {
///     labels: HeatmapLabels {
///         title: "Demand".into(),
///         x_label: "Season".into(),
///         y_label: "State".into(),
///         colorbar_label: None,
///         rotate_x_labels: false,
///     },
///     matrix: HeatmapMatrix::new(
///         vec!["SP".into()],
///         vec!["Summer".into(), "Winter".into()],
///         vec![vec![0.25, 0.75]],
///     ),
/// };
/// let svg = render_svg(&heatmap, &HeatmapStyle::default()).unwrap();
/// assert!(svg.contains("75.00%"));
/// ```
pub fn render_svg(heatmap: &Heatmap, style: &HeatmapStyle) -> Result<String, SeasonError> {
    let matrix = &heatmap.matrix;
    let Some(range) = matrix.value_range() else {
        return Err(SeasonError::Render("nothing to draw: the matrix is empty".into()));
    };

    let layout = Layout::compute(heatmap, style);
    if layout.width() < matrix.columns.len() as i32 || layout.height() < matrix.rows.len() as i32
    {
        return Err(SeasonError::Render(format!(
            "a {}x{} canvas is too small for {} rows and {} columns",
            style.width,
            style.height,
            matrix.rows.len(),
            matrix.columns.len()
        )));
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        draw_title(&root, heatmap, style)?;
        draw_cells(&root, heatmap, style, layout, range)?;
        draw_axes(&root, heatmap, style, layout)?;
        draw_colorbar(&root, heatmap, style, layout, range)?;

        root.present().map_err(render_error)?;
    }

    debug!(
        rows = matrix.rows.len(),
        columns = matrix.columns.len(),
        bytes = svg.len(),
        "rendered heatmap"
    );
    Ok(svg)
}

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

fn render_error<E: std::fmt::Display>(err: E) -> SeasonError {
    SeasonError::Render(err.to_string())
}

/// Position of `value` on the color scale.
fn scale(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        (value - lo) / (hi - lo)
    } else {
        0.0
    }
}

/// Pixel offset of band `i` out of `n` across `extent`.
fn band(i: usize, n: usize, extent: i32) -> i32 {
    (i as i64 * i64::from(extent) / n as i64) as i32
}

fn draw_title(
    root: &Area<'_>,
    heatmap: &Heatmap,
    style: &HeatmapStyle,
) -> Result<(), SeasonError> {
    let center = Pos::new(HPos::Center, VPos::Center);
    root.draw(&Text::new(
        heatmap.labels.title.clone(),
        (style.width as i32 / 2, MARGIN + style.title_size as i32 / 2),
        style.text(style.title_size, BLACK, center, FontTransform::None),
    ))
    .map_err(render_error)
}

fn draw_cells(
    root: &Area<'_>,
    heatmap: &Heatmap,
    style: &HeatmapStyle,
    layout: Layout,
    range: (f64, f64),
) -> Result<(), SeasonError> {
    let matrix = &heatmap.matrix;
    let (rows, columns) = (matrix.rows.len(), matrix.columns.len());
    let center = Pos::new(HPos::Center, VPos::Center);

    for (r, values) in matrix.values.iter().enumerate() {
        let y0 = layout.top + band(r, rows, layout.height());
        let y1 = layout.top + band(r + 1, rows, layout.height());
        for (c, &value) in values.iter().enumerate() {
            let x0 = layout.left + band(c, columns, layout.width());
            let x1 = layout.left + band(c + 1, columns, layout.width());
            let fill = palette::sample(style.palette, scale(value, range));

            root.draw(&Rectangle::new([(x0, y0), (x1, y1)], fill.filled()))
                .map_err(render_error)?;
            root.draw(&Rectangle::new([(x0, y0), (x1, y1)], WHITE.stroke_width(1)))
                .map_err(render_error)?;

            if style.annotation_size > 0 {
                root.draw(&Text::new(
                    format!("{:.2}%", value * 100.0),
                    ((x0 + x1) / 2, (y0 + y1) / 2),
                    style.text(
                        style.annotation_size,
                        palette::contrasting_text(fill),
                        center,
                        FontTransform::None,
                    ),
                ))
                .map_err(render_error)?;
            }
        }
    }
    Ok(())
}

fn draw_axes(
    root: &Area<'_>,
    heatmap: &Heatmap,
    style: &HeatmapStyle,
    layout: Layout,
) -> Result<(), SeasonError> {
    let matrix = &heatmap.matrix;
    let label = style.label_size as i32;

    let row_tick = Pos::new(HPos::Right, VPos::Center);
    for (r, name) in matrix.rows.iter().enumerate() {
        let y = layout.top
            + (band(r, matrix.rows.len(), layout.height())
                + band(r + 1, matrix.rows.len(), layout.height()))
                / 2;
        root.draw(&Text::new(
            name.clone(),
            (layout.left - TICK_GAP, y),
            style.text(style.label_size, BLACK, row_tick, FontTransform::None),
        ))
        .map_err(render_error)?;
    }

    let (column_tick, rotation) = if heatmap.labels.rotate_x_labels {
        (Pos::new(HPos::Right, VPos::Center), FontTransform::Rotate270)
    } else {
        (Pos::new(HPos::Center, VPos::Top), FontTransform::None)
    };
    for (c, name) in matrix.columns.iter().enumerate() {
        let x = layout.left
            + (band(c, matrix.columns.len(), layout.width())
                + band(c + 1, matrix.columns.len(), layout.width()))
                / 2;
        root.draw(&Text::new(
            name.clone(),
            (x, layout.bottom + TICK_GAP),
            style.text(style.label_size, BLACK, column_tick, rotation.clone()),
        ))
        .map_err(render_error)?;
    }

    let caption = Pos::new(HPos::Center, VPos::Center);
    root.draw(&Text::new(
        heatmap.labels.x_label.clone(),
        (
            layout.left + layout.width() / 2,
            style.height as i32 - MARGIN - label / 2,
        ),
        style.text(style.label_size, BLACK, caption, FontTransform::None),
    ))
    .map_err(render_error)?;
    root.draw(&Text::new(
        heatmap.labels.y_label.clone(),
        (MARGIN + label / 2, layout.top + layout.height() / 2),
        style.text(style.label_size, BLACK, caption, FontTransform::Rotate270),
    ))
    .map_err(render_error)
}

fn draw_colorbar(
    root: &Area<'_>,
    heatmap: &Heatmap,
    style: &HeatmapStyle,
    layout: Layout,
    range: (f64, f64),
) -> Result<(), SeasonError> {
    let x0 = layout.right + MARGIN;
    let x1 = x0 + COLORBAR_WIDTH;
    let height = layout.height();

    // Drawn bottom (low) to top (high) in thin horizontal slices.
    for step in 0..COLORBAR_STEPS {
        let y1 = layout.bottom - band(step as usize, COLORBAR_STEPS as usize, height);
        let y0 = layout.bottom - band(step as usize + 1, COLORBAR_STEPS as usize, height);
        let t = (f64::from(step) + 0.5) / f64::from(COLORBAR_STEPS);
        root.draw(&Rectangle::new(
            [(x0, y0), (x1, y1)],
            palette::sample(style.palette, t).filled(),
        ))
        .map_err(render_error)?;
    }
    root.draw(&Rectangle::new(
        [(x0, layout.top), (x1, layout.bottom)],
        BLACK.stroke_width(1),
    ))
    .map_err(render_error)?;

    let (lo, hi) = range;
    let tick = Pos::new(HPos::Left, VPos::Center);
    for i in 0..COLORBAR_TICKS {
        let t = i as f64 / (COLORBAR_TICKS - 1) as f64;
        let y = layout.bottom - band(i, COLORBAR_TICKS - 1, height);
        root.draw(&Text::new(
            format!("{:.0}%", (lo + (hi - lo) * t) * 100.0),
            (x1 + TICK_GAP, y),
            style.text(style.label_size, BLACK, tick, FontTransform::None),
        ))
        .map_err(render_error)?;
    }

    if let Some(caption) = &heatmap.labels.colorbar_label {
        root.draw(&Text::new(
            caption.clone(),
            (
                x1 + style.label_size as i32 * 4,
                layout.top + height / 2,
            ),
            style.text(
                style.label_size,
                BLACK,
                Pos::new(HPos::Center, VPos::Center),
                FontTransform::Rotate270,
            ),
        ))
        .map_err(render_error)?;
    }
    Ok(())
}
