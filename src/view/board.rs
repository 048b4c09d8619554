use maud::{Markup, html};

/// Every radius, stroke width and color the board drawings use. Supplied by
/// the caller so visual theming never changes the drawing logic.
#[derive(Clone, Debug)]
pub struct BoardStyle {
    pub highlight_color: String,
    pub green_single: String,
    pub green_double_triple: String,
    pub red_single: String,
    pub red_double_triple: String,
    pub bull_color_outer: String,
    pub bull_color_inner: String,
    pub bull_radius: f32,
    pub bullseye_radius: f32,
    pub double_ring_radius: f32,
    pub triple_ring_radius: f32,
    pub ring_stroke_width: f32,
    pub segment_draw_size: f32,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            highlight_color: "#ffde59".to_string(),
            green_single: "#f5e9d5".to_string(),
            green_double_triple: "#0e7a3c".to_string(),
            red_single: "#1b1b1b".to_string(),
            red_double_triple: "#c1272d".to_string(),
            bull_color_outer: "#0e7a3c".to_string(),
            bull_color_inner: "#c1272d".to_string(),
            bull_radius: 16.0,
            bullseye_radius: 7.0,
            double_ring_radius: 95.0,
            triple_ring_radius: 58.0,
            ring_stroke_width: 7.0,
            segment_draw_size: 108.0,
        }
    }
}

/// Which sub-path(s) of a target the highlight overlay covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightMode {
    Single,
    OuterSingle,
    Double,
    Triple,
    Full,
}

impl HighlightMode {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Single" => HighlightMode::Single,
            "Outer Single" => HighlightMode::OuterSingle,
            "Double" => HighlightMode::Double,
            "Triple" => HighlightMode::Triple,
            _ => HighlightMode::Full,
        }
    }
}

/// Fixed rotation per wedge number so the 20 points straight up.
fn segment_rotation(segment: &str) -> f32 {
    match segment {
        "20" => -90.0,
        "1" => -72.0,
        "18" => -54.0,
        "4" => -36.0,
        "13" => -18.0,
        "6" => 0.0,
        "10" => 18.0,
        "15" => 36.0,
        "2" => 54.0,
        "17" => 72.0,
        "3" => 90.0,
        "19" => 108.0,
        "7" => 126.0,
        "16" => 144.0,
        "8" => 162.0,
        "11" => 180.0,
        "14" => 198.0,
        "9" => 216.0,
        "12" => 234.0,
        "5" => 252.0,
        _ => 0.0,
    }
}

const GREEN_SEGMENTS: [&str; 10] = ["1", "4", "6", "15", "17", "19", "16", "11", "9", "5"];

fn is_placeholder(target: &str) -> bool {
    matches!(target, "" | "?" | "N/A" | "Game Over")
}

/// Annular sector between the two radii, spanning the wedge half-angle on
/// both sides of the x axis.
fn ring_path(r_inner: f32, r_outer: f32) -> String {
    let angle = 9.0_f32.to_radians();
    let (sin, cos) = angle.sin_cos();
    format!(
        "M {} {} A {r_inner} {r_inner} 0 0 1 {} {} L {} {} A {r_outer} {r_outer} 0 0 0 {} {} Z",
        r_inner * cos,
        r_inner * -sin,
        r_inner * cos,
        r_inner * sin,
        r_outer * cos,
        r_outer * sin,
        r_outer * cos,
        r_outer * -sin,
    )
}

fn blink_path(d: &str, style: &BoardStyle) -> Markup {
    html! {
        path d=(d) fill=(style.highlight_color) stroke="none" class="blinking-overlay" {}
    }
}

/// Draw one dartboard target (a wedge or the bull) and overlay a blinking
/// highlight on the sub-path(s) implied by `mode`. Placeholder targets
/// render nothing.
#[must_use]
pub fn render_target_segment(target: &str, mode: HighlightMode, style: &BoardStyle) -> Markup {
    if is_placeholder(target) {
        return html! {};
    }

    if matches!(target, "Bull" | "25" | "Bullseye") {
        return render_bull(target, mode, style);
    }

    let length = style.segment_draw_size;
    let rotation = segment_rotation(target);
    let translation = -length * 0.55;

    let colors = if GREEN_SEGMENTS.contains(&target) {
        (&style.green_single, &style.green_double_triple)
    } else {
        (&style.red_single, &style.red_double_triple)
    };
    let (single_color, double_triple_color) = colors;

    let double = ring_path(length * 0.925, length);
    let outer_single = ring_path(length * 0.635, length * 0.925);
    let triple = ring_path(length * 0.56, length * 0.635);
    let inner_single = ring_path(length * 0.158, length * 0.56);

    html! {
        svg viewBox="-110 -110 220 220" {
            g transform=(format!("rotate({rotation}) translate({translation}, 0)")) {
                path d=(double) fill=(double_triple_color) {}
                path d=(outer_single) fill=(single_color) {}
                path d=(triple) fill=(double_triple_color) {}
                path d=(inner_single) fill=(single_color) {}
                @match mode {
                    HighlightMode::Double => { (blink_path(&double, style)) }
                    HighlightMode::Triple => { (blink_path(&triple, style)) }
                    HighlightMode::OuterSingle => { (blink_path(&outer_single, style)) }
                    HighlightMode::Single => {
                        (blink_path(&outer_single, style))
                        (blink_path(&inner_single, style))
                    }
                    HighlightMode::Full => {
                        (blink_path(&double, style))
                        (blink_path(&outer_single, style))
                        (blink_path(&triple, style))
                        (blink_path(&inner_single, style))
                    }
                }
            }
        }
    }
}

fn render_bull(target: &str, mode: HighlightMode, style: &BoardStyle) -> Markup {
    let (blink_outer, blink_inner) = if mode == HighlightMode::Full || target == "25" {
        (true, true)
    } else if matches!(mode, HighlightMode::Single | HighlightMode::OuterSingle) {
        (true, false)
    } else if matches!(mode, HighlightMode::Double | HighlightMode::Triple) || target == "Bullseye"
    {
        (false, true)
    } else {
        (false, false)
    };

    html! {
        svg viewBox="-20 -20 40 40" {
            circle r=(style.bull_radius) fill=(style.bull_color_outer) {}
            circle r=(style.bullseye_radius) fill=(style.bull_color_inner) {}
            @if blink_outer {
                circle r=(style.bull_radius) fill=(style.highlight_color) class="blinking-overlay" {}
                // keep the bullseye on top of the outer highlight
                circle r=(style.bullseye_radius) fill=(style.bull_color_inner) {}
            }
            @if blink_inner {
                circle r=(style.bullseye_radius) fill=(style.highlight_color) class="blinking-overlay" {}
            }
        }
    }
}

fn dashed_ring(radius: f32, color: &str, offset: bool, style: &BoardStyle) -> Markup {
    let circumference = 2.0 * std::f32::consts::PI * radius;
    let segment_arc = circumference / 20.0;
    html! {
        circle r=(radius) fill="none" stroke=(color)
            stroke-width=(style.ring_stroke_width)
            stroke-dasharray=(format!("{segment_arc} {segment_arc}"))
            stroke-dashoffset=[offset.then_some(segment_arc)] {}
    }
}

/// Draw the whole double or triple ring as the target: dashed 20-segment
/// rings in alternating colors plus the bull, with the requested ring
/// highlighted. Used when a full ring, not a single wedge, is the target.
#[must_use]
pub fn render_target_rings(ring: HighlightMode, style: &BoardStyle) -> Markup {
    html! {
        svg viewBox="-105 -105 210 210" {
            g transform="rotate(-9)" {
                (dashed_ring(style.double_ring_radius, &style.green_double_triple, false, style))
                (dashed_ring(style.double_ring_radius, &style.red_double_triple, true, style))
                (dashed_ring(style.triple_ring_radius, &style.green_double_triple, false, style))
                (dashed_ring(style.triple_ring_radius, &style.red_double_triple, true, style))
            }
            circle r=(style.bull_radius) fill=(style.bull_color_outer) {}
            circle r=(style.bullseye_radius) fill=(style.bull_color_inner) {}
            @if ring == HighlightMode::Double {
                circle r=(style.double_ring_radius) fill="none"
                    stroke=(style.highlight_color)
                    stroke-width=(style.ring_stroke_width + 0.5)
                    class="blinking-overlay" {}
                circle r=(style.bullseye_radius) fill=(style.highlight_color)
                    class="blinking-overlay" {}
            }
            @if ring == HighlightMode::Triple {
                circle r=(style.triple_ring_radius) fill="none"
                    stroke=(style.highlight_color)
                    stroke-width=(style.ring_stroke_width + 0.5)
                    class="blinking-overlay" {}
            }
        }
    }
}

/// Focus-area entry point: ring targets get the ring drawing, the bullseye
/// maps to the inner bull, everything else is a segment drawing.
#[must_use]
pub fn render_target(target: &str, mode_label: &str, style: &BoardStyle) -> Markup {
    match target {
        "Double" => render_target_rings(HighlightMode::Double, style),
        "Triple" => render_target_rings(HighlightMode::Triple, style),
        "Bullseye" => render_target_segment("Bull", HighlightMode::Double, style),
        other => render_target_segment(other, HighlightMode::from_label(mode_label), style),
    }
}
