//! Command-line transform ops and point parsing.
//!
//! Grammar (one op per `--op`):
//! - `translate:dx,dy`
//! - `rotate:deg@x,y` (counter-clockwise, about pivot)
//! - `scale:s@x,y`
//! - `nuscale:ax,ay@x,y` (stretch along axis, about pivot)
//!
//! The pivot part (`@x,y`) is optional and defaults to the origin.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use polyedit::shapes::{pt2, vec2};
use polyedit::{AffineTransform, Point2, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Translate(Vec2),
    Rotate { degrees: f64, pivot: Point2 },
    Scale { factor: f64, pivot: Point2 },
    NuScale { axis: Vec2, pivot: Point2 },
}

/// Parse `x,y` into a homogeneous point.
pub fn parse_point(s: &str) -> Result<Point2> {
    let (x, y) = parse_pair(s)?;
    Ok(pt2(x, y))
}

fn parse_pair(s: &str) -> Result<(f64, f64)> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<f64>().with_context(|| format!("bad x in `{s}`"))?;
    let y = y.trim().parse::<f64>().with_context(|| format!("bad y in `{s}`"))?;
    Ok((x, y))
}

fn parse_scalar(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("bad number `{s}`"))
}

fn split_pivot(args: &str) -> Result<(&str, Point2)> {
    match args.split_once('@') {
        Some((head, pivot)) => Ok((head, parse_point(pivot)?)),
        None => Ok((args, pt2(0.0, 0.0))),
    }
}

impl FromStr for TransformOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, args) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("expected `<op>:<args>`, got `{s}`"))?;
        let op = match name.trim().to_ascii_lowercase().as_str() {
            "translate" => {
                let (dx, dy) = parse_pair(args)?;
                TransformOp::Translate(vec2(dx, dy))
            }
            "rotate" => {
                let (deg, pivot) = split_pivot(args)?;
                TransformOp::Rotate {
                    degrees: parse_scalar(deg)?,
                    pivot,
                }
            }
            "scale" => {
                let (s, pivot) = split_pivot(args)?;
                TransformOp::Scale {
                    factor: parse_scalar(s)?,
                    pivot,
                }
            }
            "nuscale" => {
                let (axis, pivot) = split_pivot(args)?;
                let (ax, ay) = parse_pair(axis)?;
                TransformOp::NuScale {
                    axis: vec2(ax, ay),
                    pivot,
                }
            }
            other => bail!("unknown op `{other}` (translate, rotate, scale, nuscale)"),
        };
        Ok(op)
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOp::Translate(v) => write!(f, "translate:{},{}", v[0], v[1]),
            TransformOp::Rotate { degrees, pivot } => {
                write!(f, "rotate:{degrees}@{},{}", pivot[0], pivot[1])
            }
            TransformOp::Scale { factor, pivot } => {
                write!(f, "scale:{factor}@{},{}", pivot[0], pivot[1])
            }
            TransformOp::NuScale { axis, pivot } => write!(
                f,
                "nuscale:{},{}@{},{}",
                axis[0], axis[1], pivot[0], pivot[1]
            ),
        }
    }
}

impl TransformOp {
    fn compose_onto(&self, t: &mut AffineTransform) -> Result<()> {
        match *self {
            TransformOp::Translate(v) => t.compose_translate(v),
            TransformOp::Rotate { degrees, pivot } => t.compose_rotate(degrees, pivot),
            TransformOp::Scale { factor, pivot } => t.compose_scale(factor, pivot),
            TransformOp::NuScale { axis, pivot } => t
                .compose_nu_scale(axis, pivot)
                .with_context(|| format!("composing `{self}`"))?,
        }
        Ok(())
    }
}

/// Build one transform that applies `ops` to points left to right.
///
/// Composition prepends, so the last op is composed first.
pub fn build_transform(ops: &[TransformOp]) -> Result<AffineTransform> {
    let mut t = AffineTransform::identity();
    for op in ops.iter().rev() {
        op.compose_onto(&mut t)?;
    }
    tracing::debug!(ops = ops.len(), "built transform");
    Ok(t)
}
