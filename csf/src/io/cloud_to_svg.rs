use crate::io::svg_util::{SvgDrawOptions, change_brightness};
use cumulus::geometry::primitives::{Point, Rect};
use svg::Document;
use svg::node::element::{Circle, Group, Rectangle, Title};

/// Renders a placed-set snapshot into an SVG document.
///
/// The canvas is the bounding box of all rectangles scaled by
/// `options.scale`, with `options.padding` blank canvas units added on
/// every side. Rectangles are drawn in placement order.
pub fn cloud_to_svg(rects: &[Rect], anchor: Point, options: SvgDrawOptions) -> Document {
    assert!(!rects.is_empty(), "cannot render an empty cloud");
    assert!(options.scale > 0.0, "scale must be positive");

    let bbox = rects
        .iter()
        .copied()
        .reduce(Rect::bounding_rect)
        .expect("cloud is not empty");

    let scale = options.scale;
    let padding = options.padding as f64;
    let canvas_w = bbox.width() as f64 * scale + 2.0 * padding;
    let canvas_h = bbox.height() as f64 * scale + 2.0 * padding;

    let theme = options.theme.get_theme();
    let stroke_color = change_brightness(theme.rect_fill, 0.4);

    let to_canvas =
        |p: Point| {
            (
                (p.x() - bbox.x_min) as f64 * scale + padding,
                (p.y() - bbox.y_min) as f64 * scale + padding,
            )
        };

    let background = Rectangle::new()
        .set("width", canvas_w)
        .set("height", canvas_h)
        .set("fill", theme.background);

    let mut rect_group = Group::new().set("id", "rectangles");
    for (i, rect) in rects.iter().enumerate() {
        let (x, y) = to_canvas(Point(rect.x_min, rect.y_min));
        let title = Title::new(format!(
            "rect {}, size: {}, center: ({}, {})",
            i,
            rect.size(),
            rect.center().x(),
            rect.center().y()
        ));
        rect_group = rect_group.add(
            Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", rect.width() as f64 * scale)
                .set("height", rect.height() as f64 * scale)
                .set("fill", theme.rect_fill)
                .set("stroke", stroke_color.as_str())
                .set("stroke-width", theme.stroke_width)
                .add(title),
        );
    }

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, canvas_w, canvas_h))
        .add(background)
        .add(rect_group);

    if options.draw_anchor {
        let (cx, cy) = to_canvas(anchor);
        document = document.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", f64::max(1.0, scale / 2.0))
                .set("fill", "black"),
        );
    }

    document
}
