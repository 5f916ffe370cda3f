//! Glyph outline commands and the compact outline string format

use crate::foundation::math::{Point2, Vec2};

/// One vector path command
///
/// Inside [`GlyphDef`](super::GlyphDef) the coordinates are raw font units.
/// After glyph resolution they are absolute text-field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new contour
    MoveTo(Point2),
    /// Straight segment to a point
    LineTo(Point2),
    /// Quadratic Bézier segment
    QuadTo {
        /// Control point
        ctrl: Point2,
        /// End point
        to: Point2,
    },
    /// Cubic Bézier segment
    CubicTo {
        /// First control point
        ctrl1: Point2,
        /// Second control point
        ctrl2: Point2,
        /// End point
        to: Point2,
    },
}

impl PathCommand {
    /// Scale every coordinate about the origin, then translate by `offset`
    pub fn transformed(self, scale: f32, offset: Vec2) -> Self {
        let map = |p: Point2| Point2::from(p.coords * scale + offset);
        match self {
            Self::MoveTo(p) => Self::MoveTo(map(p)),
            Self::LineTo(p) => Self::LineTo(map(p)),
            Self::QuadTo { ctrl, to } => Self::QuadTo {
                ctrl: map(ctrl),
                to: map(to),
            },
            Self::CubicTo { ctrl1, ctrl2, to } => Self::CubicTo {
                ctrl1: map(ctrl1),
                ctrl2: map(ctrl2),
                to: map(to),
            },
        }
    }

    /// End point of the command (where the pen is afterwards)
    pub fn end_point(&self) -> Point2 {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => p,
            Self::QuadTo { to, .. } | Self::CubicTo { to, .. } => to,
        }
    }
}

/// Parse a whitespace separated outline string
///
/// Supported ops, each followed by its coordinate pairs:
/// - `m x y` / `l x y`
/// - `q x y cx cy` (end point first, then control point)
/// - `b x y c1x c1y c2x c2y` (end point first, then both control points)
///
/// `character` is only used to label errors.
pub fn parse_outline(character: char, outline: &str) -> super::FontResult<Vec<PathCommand>> {
    let mut tokens = outline.split_whitespace();
    let mut commands = Vec::new();

    while let Some(op) = tokens.next() {
        let mut point = || read_point(character, op, &mut tokens);
        let command = match op {
            "m" => PathCommand::MoveTo(point()?),
            "l" => PathCommand::LineTo(point()?),
            "q" => {
                let to = point()?;
                let ctrl = point()?;
                PathCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let to = point()?;
                let ctrl1 = point()?;
                let ctrl2 = point()?;
                PathCommand::CubicTo { ctrl1, ctrl2, to }
            }
            other => {
                return Err(super::FontError::MalformedOutline {
                    character,
                    reason: format!("unknown outline op '{other}'"),
                })
            }
        };
        commands.push(command);
    }

    Ok(commands)
}

fn read_point<'a>(
    character: char,
    op: &str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> super::FontResult<Point2> {
    let x = read_number(character, op, tokens)?;
    let y = read_number(character, op, tokens)?;
    Ok(Point2::new(x, y))
}

fn read_number<'a>(
    character: char,
    op: &str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> super::FontResult<f32> {
    let token = tokens.next().ok_or_else(|| super::FontError::MalformedOutline {
        character,
        reason: format!("'{op}' is missing coordinates"),
    })?;

    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(super::FontError::MalformedOutline {
            character,
            reason: format!("'{token}' is not a number"),
        }),
    }
}
