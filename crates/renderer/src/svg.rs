//! Streaming SVG document writer.
//!
//! The document is written in three steps (header, one line per polygon,
//! footer) straight into the underlying writer, so memory use does not
//! grow with the figure.

use std::fmt;
use std::io::Write;

use surface_common::SurfaceResult;

use crate::grid::Polygon;

const SVG_STYLE: &str = "stroke: grey; fill: white; stroke-width: 0.7";
const POLYGON_STROKE_WIDTH: &str = "0.4";

/// Decimal exponents outside [-4, 6) switch to exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -4;
const MAX_PLAIN_EXPONENT: i32 = 6;

/// A coordinate formatted for the document.
///
/// Uses the shortest digits that round-trip. Very small or large magnitudes
/// use exponent notation with a signed, two-digit exponent (`2.5e-05`,
/// `1.2e+07`). Non-finite values print as `NaN`, `+Inf` and `-Inf`; they come
/// from singular surface points and are written rather than rejected.
#[derive(Debug, Clone, Copy)]
pub struct SvgNumber(pub f64);

impl fmt::Display for SvgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "+Inf" } else { "-Inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        let scientific = format!("{:e}", v);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if (MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
            write!(f, "{}", v)
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
        }
    }
}

/// Canvas dimension as written in the root element: truncated toward zero.
pub fn pixel_dimension(value: f64) -> i64 {
    // `as` saturates, so oversized canvases clamp instead of wrapping
    value.trunc() as i64
}

/// Writes one SVG document.
#[derive(Debug)]
pub struct SvgWriter<W: Write> {
    out: W,
    polygons: usize,
}

impl<W: Write> SvgWriter<W> {
    /// Write the root element and return a writer ready for polygons.
    pub fn begin(mut out: W, width: f64, height: f64) -> SurfaceResult<Self> {
        write!(
            out,
            "<svg xmlns='http://www.w3.org/2000/svg' style='{}' width='{}' height='{}'>",
            SVG_STYLE,
            pixel_dimension(width),
            pixel_dimension(height)
        )?;
        Ok(Self { out, polygons: 0 })
    }

    /// Append one filled quad.
    pub fn polygon(&mut self, polygon: &Polygon<'_>) -> SurfaceResult<()> {
        let [a, b, c, d] = polygon.points;
        writeln!(
            self.out,
            "<polygon fill='{}' stroke-width='{}' points='{},{} {},{} {},{} {},{}'/>",
            polygon.fill,
            POLYGON_STROKE_WIDTH,
            SvgNumber(a.0),
            SvgNumber(a.1),
            SvgNumber(b.0),
            SvgNumber(b.1),
            SvgNumber(c.0),
            SvgNumber(c.1),
            SvgNumber(d.0),
            SvgNumber(d.1),
        )?;
        self.polygons += 1;
        Ok(())
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons
    }

    /// Close the document, flush, and hand back the writer.
    pub fn finish(mut self) -> SurfaceResult<W> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FillKind;

    #[test]
    fn test_number_plain() {
        assert_eq!(SvgNumber(300.0).to_string(), "300");
        assert_eq!(SvgNumber(0.1).to_string(), "0.1");
        assert_eq!(SvgNumber(-12.5).to_string(), "-12.5");
        assert_eq!(SvgNumber(123456.0).to_string(), "123456");
        assert_eq!(SvgNumber(0.0001).to_string(), "0.0001");
        assert_eq!(SvgNumber(0.0).to_string(), "0");
    }

    #[test]
    fn test_number_exponent() {
        assert_eq!(SvgNumber(1e6).to_string(), "1e+06");
        assert_eq!(SvgNumber(1234567.0).to_string(), "1.234567e+06");
        assert_eq!(SvgNumber(0.00001).to_string(), "1e-05");
        assert_eq!(SvgNumber(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(SvgNumber(3e120).to_string(), "3e+120");
    }

    #[test]
    fn test_number_non_finite() {
        assert_eq!(SvgNumber(f64::NAN).to_string(), "NaN");
        assert_eq!(SvgNumber(f64::INFINITY).to_string(), "+Inf");
        assert_eq!(SvgNumber(f64::NEG_INFINITY).to_string(), "-Inf");
    }

    #[test]
    fn test_pixel_dimension_truncates() {
        assert_eq!(pixel_dimension(600.9), 600);
        assert_eq!(pixel_dimension(320.0), 320);
        assert_eq!(pixel_dimension(1e300), i64::MAX);
    }

    #[test]
    fn test_document_layout() {
        let mut svg = SvgWriter::begin(Vec::new(), 10.5, 20.0).unwrap();
        svg.polygon(&Polygon {
            points: [(1.0, 2.0), (3.5, 4.0), (5.0, f64::NAN), (7.0, 8.25)],
            fill: "#0000FF",
            kind: FillKind::Peak,
        })
        .unwrap();
        assert_eq!(svg.polygon_count(), 1);
        let out = String::from_utf8(svg.finish().unwrap()).unwrap();

        assert_eq!(
            out,
            "<svg xmlns='http://www.w3.org/2000/svg' style='stroke: grey; fill: white; stroke-width: 0.7' width='10' height='20'>\
             <polygon fill='#0000FF' stroke-width='0.4' points='1,2 3.5,4 5,NaN 7,8.25'/>\n\
             </svg>\n"
        );
    }
}
