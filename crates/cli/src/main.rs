use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polyedit::{Point2, Polygon, ShapeKind};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod ops;

use ops::{build_transform, parse_point, TransformOp};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Build, transform and query editor shapes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct ShapeArgs {
    /// triangle, quad, pentagon, hexagon, octagon, circle or circle:<n>
    #[arg(long)]
    kind: ShapeKind,
    /// Centre as `x,y`
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    center: Point2,
    #[arg(long, default_value_t = polyedit::shapes::DEFAULT_RADIUS)]
    radius: f64,
    /// Point count for circles; overrides `circle:<n>`
    #[arg(long)]
    segments: Option<usize>,
}

impl ShapeArgs {
    fn build(&self) -> Polygon {
        let kind = match (self.kind, self.segments) {
            (ShapeKind::Circle { .. }, Some(segments)) => ShapeKind::Circle { segments },
            (kind, _) => kind,
        };
        Polygon::regular(kind, self.center, self.radius)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print a shape's points, centroid and convexity
    Shape {
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Apply a chain of ops (left to right) to a shape
    Transform {
        #[command(flatten)]
        shape: ShapeArgs,
        /// translate:dx,dy | rotate:deg@x,y | scale:s@x,y | nuscale:ax,ay@x,y
        #[arg(long = "op", required = true)]
        ops: Vec<TransformOp>,
    },
    /// Report whether a point lies inside a shape
    Inside {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long, value_parser = parse_point)]
        point: Point2,
    },
    /// Print version info
    Report,
}

#[derive(Serialize)]
struct ShapeOut {
    kind: String,
    points: Vec<[f64; 2]>,
    centroid: [f64; 2],
    convex: bool,
}

impl ShapeOut {
    fn from_polygon(poly: &Polygon) -> Self {
        Self {
            kind: poly.kind().to_string(),
            points: poly.points().iter().map(xy).collect(),
            centroid: xy(&poly.centroid()),
            convex: poly.is_convex(),
        }
    }
}

#[derive(Serialize)]
struct TransformOut {
    ops: Vec<String>,
    matrix: [[f64; 3]; 3],
    determinant: f64,
    shape: ShapeOut,
}

#[derive(Serialize)]
struct InsideOut {
    kind: String,
    point: [f64; 2],
    inside: bool,
}

fn xy(p: &Point2) -> [f64; 2] {
    [p[0], p[1]]
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Shape { shape } => shape_cmd(&shape),
        Action::Transform { shape, ops } => transform_cmd(&shape, &ops),
        Action::Inside { shape, point } => inside_cmd(&shape, point),
        Action::Report => report(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{text}");
    Ok(())
}

fn shape_cmd(args: &ShapeArgs) -> Result<()> {
    let poly = args.build();
    tracing::info!(kind = %poly.kind(), radius = args.radius, "shape");
    print_json(&ShapeOut::from_polygon(&poly))
}

fn transform_cmd(args: &ShapeArgs, ops: &[TransformOp]) -> Result<()> {
    let mut poly = args.build();
    tracing::info!(kind = %poly.kind(), ops = ops.len(), "transform");
    let t = build_transform(ops).context("building transform")?;
    t.apply_polygon(&mut poly);
    let mat = *t.matrix();
    print_json(&TransformOut {
        ops: ops.iter().map(ToString::to_string).collect(),
        matrix: mat.into_rows(),
        determinant: mat.determinant(),
        shape: ShapeOut::from_polygon(&poly),
    })
}

fn inside_cmd(args: &ShapeArgs, point: Point2) -> Result<()> {
    let poly = args.build();
    let inside = poly.contains(point);
    tracing::info!(kind = %poly.kind(), inside, "inside");
    print_json(&InsideOut {
        kind: poly.kind().to_string(),
        point: xy(&point),
        inside,
    })
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "code_rev": rev,
        "version": polyedit::VERSION,
        "conventions": {
            "points": "row vectors, p * M",
            "composition": "Op * M",
        },
    });
    print_json(&obj)
}
