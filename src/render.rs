use crate::declutter::{PassReport, Point, closest_point_on_edge, endpoint_from_bearing};
use crate::scene::Scene;

/// Knobs for the debug renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Draw the accepted sector's bounding rays and bisector.
    pub show_rays: bool,
}

/// Render a scene and one pass over it as a standalone SVG document:
/// original boxes dashed, relocated boxes solid with a leader line back
/// to the anchor, anchors as dots. Dropped anchors keep their dot and
/// dashed box so the failure is visible.
pub fn render_svg(scene: &Scene, report: &PassReport, options: &RenderOptions) -> String {
    let (min, max) = bounds(scene, report);
    let pad = 0.05 * (max.x - min.x).max(max.y - min.y).max(1.0);
    let view_x = min.x - pad;
    let view_y = min.y - pad;
    let view_w = (max.x - min.x) + 2.0 * pad;
    let view_h = (max.y - min.y) + 2.0 * pad;
    // All stroke widths and radii scale with the view so arbitrary
    // scene units render legibly.
    let unit = view_w.max(view_h) / 400.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{view_x:.3} {view_y:.3} {view_w:.3} {view_h:.3}\">",
    ));
    svg.push_str(&format!(
        "<rect x=\"{view_x:.3}\" y=\"{view_y:.3}\" width=\"{view_w:.3}\" height=\"{view_h:.3}\" fill=\"#ffffff\"/>",
    ));

    for label in &scene.labels {
        let rect = label.rect.to_rect();
        svg.push_str(&format!(
            "<rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\" fill=\"none\" stroke=\"#9ca3af\" stroke-width=\"{:.3}\" stroke-dasharray=\"{:.3} {:.3}\"/>",
            rect.a.x,
            rect.a.y,
            rect.width(),
            rect.height(),
            0.6 * unit,
            2.0 * unit,
            1.5 * unit,
        ));
    }

    for outcome in &report.outcomes {
        let Ok(placement) = &outcome.result else {
            continue;
        };
        if options.show_rays {
            for brg in [
                placement.sector_start,
                placement.bearing,
                placement.sector_end,
            ] {
                let end = endpoint_from_bearing(outcome.anchor, placement.radius, brg);
                svg.push_str(&format!(
                    "<line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"#f59e0b\" stroke-width=\"{:.3}\"/>",
                    outcome.anchor.x,
                    outcome.anchor.y,
                    end.x,
                    end.y,
                    0.4 * unit,
                ));
            }
        }

        let leader_end = closest_point_on_edge(outcome.anchor, &placement.rect);
        svg.push_str(&format!(
            "<line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"#374151\" stroke-width=\"{:.3}\"/>",
            outcome.anchor.x,
            outcome.anchor.y,
            leader_end.x,
            leader_end.y,
            0.5 * unit,
        ));
        let rect = placement.rect;
        svg.push_str(&format!(
            "<rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\" fill=\"#eff6ff\" stroke=\"#1d4ed8\" stroke-width=\"{:.3}\"/>",
            rect.a.x,
            rect.a.y,
            rect.width(),
            rect.height(),
            0.8 * unit,
        ));
        let center = rect.center();
        svg.push_str(&format!(
            "<text x=\"{:.3}\" y=\"{:.3}\" font-family=\"Helvetica, Arial, sans-serif\" font-size=\"{:.3}\" fill=\"#1f2937\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
            center.x,
            center.y,
            0.6 * rect.height(),
            escape_xml(&outcome.id),
        ));
    }

    for label in &scene.labels {
        svg.push_str(&format!(
            "<circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"#dc2626\"/>",
            label.anchor.x,
            label.anchor.y,
            1.2 * unit,
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn bounds(scene: &Scene, report: &PassReport) -> (Point, Point) {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut extend = |p: Point| {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    };
    for label in &scene.labels {
        extend(label.anchor);
        for corner in label.rect.to_rect().corners() {
            extend(corner);
        }
    }
    for rect in report.placements.values() {
        for corner in rect.corners() {
            extend(corner);
        }
    }
    if !min.x.is_finite() {
        return (Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    }
    (min, max)
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
