use std::fmt;

use crate::{
    compile::animation::{ColorCycle, KEY_TIMES, MotionTrack},
    compile::document::{Background, NoiseOverlay, RenderDocument, RenderShape, ShapeGeometry},
    foundation::math::fmt_compact,
    geometry::path_data::path_data,
    scene::model::{BlendMode, GradientKind},
};

const BACKGROUND_ID: &str = "bg-fill";
const GRAIN_ID: &str = "grain";
const SHIMMER_SEEDS: &str = "0;1;2;3;4;5;6;7;8;9";

impl RenderDocument {
    /// Self-contained SVG markup with inline SMIL animation.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.canvas.width, self.canvas.height);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;

        f.write_str("<defs>\n")?;
        if let Background::Gradient {
            kind,
            from,
            to,
            angle_degrees,
        } = &self.background
        {
            write_gradient(f, kind, &from.to_hex(), &to.to_hex(), *angle_degrees)?;
        }
        for shape in &self.shapes {
            if let (Some(id), Some(std_dev)) = (shape.filter_id(), shape.blur) {
                writeln!(
                    f,
                    r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{}"/></filter>"#,
                    num(std_dev)
                )?;
            }
        }
        write_grain_filter(f, &self.noise)?;
        f.write_str("</defs>\n")?;

        let fill = match &self.background {
            Background::Solid(c) => c.to_hex(),
            Background::Gradient { .. } => format!("url(#{BACKGROUND_ID})"),
        };
        writeln!(f, r#"<rect width="100%" height="100%" fill="{fill}"/>"#)?;

        f.write_str("<g>\n")?;
        for shape in &self.shapes {
            write_shape(f, shape)?;
        }
        f.write_str("</g>\n")?;

        writeln!(
            f,
            r#"<rect width="100%" height="100%" filter="url(#{GRAIN_ID})" opacity="{}" style="mix-blend-mode: overlay"/>"#,
            num(self.noise.opacity)
        )?;
        f.write_str("</svg>\n")
    }
}

fn write_gradient(
    f: &mut fmt::Formatter<'_>,
    kind: &GradientKind,
    from: &str,
    to: &str,
    angle_degrees: f64,
) -> fmt::Result {
    let stops = format!(
        r#"<stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/>"#
    );
    match kind {
        GradientKind::Linear => {
            let (dy, dx) = angle_degrees.to_radians().sin_cos();
            writeln!(
                f,
                r#"<linearGradient id="{BACKGROUND_ID}" x1="{}" y1="{}" x2="{}" y2="{}">{stops}</linearGradient>"#,
                num(0.5 - dx / 2.0),
                num(0.5 - dy / 2.0),
                num(0.5 + dx / 2.0),
                num(0.5 + dy / 2.0),
            )
        }
        GradientKind::Radial => writeln!(
            f,
            r#"<radialGradient id="{BACKGROUND_ID}" cx="0.5" cy="0.5" r="0.75">{stops}</radialGradient>"#
        ),
        GradientKind::Other(name) => writeln!(
            f,
            r#"<linearGradient id="{BACKGROUND_ID}" data-kind="{}">{stops}</linearGradient>"#,
            escape_attr(name)
        ),
    }
}

fn write_grain_filter(f: &mut fmt::Formatter<'_>, noise: &NoiseOverlay) -> fmt::Result {
    write!(
        f,
        r#"<filter id="{GRAIN_ID}" x="0" y="0" width="100%" height="100%"><feTurbulence type="fractalNoise" baseFrequency="{}" numOctaves="{}" seed="0" stitchTiles="stitch">"#,
        num(noise.base_frequency),
        noise.octaves
    )?;
    if let Some(dur) = noise.shimmer_s {
        write!(
            f,
            r#"<animate attributeName="seed" values="{SHIMMER_SEEDS}" dur="{}s" calcMode="discrete" repeatCount="indefinite"/>"#,
            num(dur)
        )?;
    }
    f.write_str(
        "</feTurbulence><feColorMatrix type=\"saturate\" values=\"0\"/></filter>\n",
    )
}

fn write_shape(f: &mut fmt::Formatter<'_>, shape: &RenderShape) -> fmt::Result {
    let mut attrs = format!(
        r#" id="{}" fill="{}" opacity="{}""#,
        escape_attr(&shape.key),
        shape.fill.to_hex(),
        num(shape.opacity)
    );
    if let Some(id) = shape.filter_id() {
        attrs.push_str(&format!(r#" filter="url(#{id})""#));
    }
    if shape.blend != BlendMode::Normal {
        attrs.push_str(&format!(
            r#" style="mix-blend-mode: {}""#,
            escape_attr(shape.blend.as_str())
        ));
    }

    let tag = match &shape.geometry {
        ShapeGeometry::Path(path) => {
            write!(f, r#"<path d="{}"{attrs}>"#, path_data(path))?;
            "path"
        }
        ShapeGeometry::Circle { center, radius } => {
            write!(
                f,
                r#"<circle cx="{}" cy="{}" r="{}"{attrs}>"#,
                num(center.x),
                num(center.y),
                num(*radius)
            )?;
            "circle"
        }
    };
    if let Some(motion) = &shape.motion {
        write_motion(f, motion)?;
    }
    if let Some(cycle) = &shape.color_cycle {
        write_color_cycle(f, cycle)?;
    }
    writeln!(f, "</{tag}>")
}

fn write_motion(f: &mut fmt::Formatter<'_>, m: &MotionTrack) -> fmt::Result {
    let timing = format!(
        r#"dur="{}s" begin="{}s" keyTimes="{KEY_TIMES}" repeatCount="indefinite" additive="sum""#,
        num(m.duration_s),
        num(m.begin_s)
    );
    let translate = join(m.keyframes.iter().map(|k| {
        let t = k.translate(m.anchor);
        format!("{} {}", num(t.x), num(t.y))
    }));
    let scale = join(m.keyframes.iter().map(|k| num(k.scale)));
    let rotate = join(m.keyframes.iter().map(|k| {
        format!("{} {} {}", num(k.rotate_deg), num(m.anchor.x), num(m.anchor.y))
    }));

    for (kind, values) in [("translate", translate), ("scale", scale), ("rotate", rotate)] {
        write!(
            f,
            r#"<animateTransform attributeName="transform" type="{kind}" values="{values}" {timing}/>"#
        )?;
    }
    Ok(())
}

fn write_color_cycle(f: &mut fmt::Formatter<'_>, c: &ColorCycle) -> fmt::Result {
    let values = join(c.values.iter().map(|v| v.to_hex()));
    write!(
        f,
        r#"<animate attributeName="fill" values="{values}" dur="{}s" begin="{}s" keyTimes="{KEY_TIMES}" repeatCount="indefinite"/>"#,
        num(c.duration_s),
        num(c.begin_s)
    )
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(";")
}

fn num(v: f64) -> String {
    fmt_compact(v, 3)
}

/// Escape text for a double-quoted attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compile/svg.rs"]
mod tests;
