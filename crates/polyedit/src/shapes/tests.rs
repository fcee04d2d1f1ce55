use super::utils::{centroid, dist2d, is_convex, is_pt_interior};
use super::*;
use proptest::prelude::*;

const ALL_KINDS: [ShapeKind; 7] = [
    ShapeKind::Triangle,
    ShapeKind::Quad,
    ShapeKind::Pentagon,
    ShapeKind::Hexagon,
    ShapeKind::Octagon,
    ShapeKind::Circle { segments: 12 },
    ShapeKind::circle(),
];

#[test]
fn radial_constructors_have_fixed_counts_and_radius() {
    for kind in ALL_KINDS {
        let c = pt2(10.0, -4.0);
        let poly = Polygon::regular(kind, c, 20.0);
        assert_eq!(poly.len(), kind.point_count());
        assert_eq!(poly.kind(), kind);
        for p in poly.points() {
            assert!((dist2d(p, &c) - 20.0).abs() < 1e-9, "{kind}: point off radius");
            assert_eq!(p[2], 1.0, "{kind}: homogeneous w must stay 1");
        }
    }
}

#[test]
fn triangle_angle_table() {
    let t = Polygon::regular(ShapeKind::Triangle, pt2(0.0, 0.0), 2.0);
    let s3 = 3f64.sqrt();
    assert!(t[0].approx_eq(&pt2(s3, -1.0), 1e-12));
    assert!(t[1].approx_eq(&pt2(0.0, 2.0), 1e-12));
    assert!(t[2].approx_eq(&pt2(-s3, -1.0), 1e-12));
}

#[test]
fn default_constructor_uses_origin_and_default_radius() {
    let d = Polygon::new(ShapeKind::Hexagon);
    assert!(d[0].approx_eq(&pt2(DEFAULT_RADIUS, 0.0), 1e-12));
    assert!(d[3].approx_eq(&pt2(-DEFAULT_RADIUS, 0.0), 1e-9));
    assert_eq!(Polygon::default().kind(), ShapeKind::Triangle);
    assert_eq!(
        Polygon::new(ShapeKind::circle()).len(),
        DEFAULT_CIRCLE_SEGMENTS
    );
}

#[test]
fn regular_hexagon_convex_until_vertex_pulled_in() {
    let mut hex = Polygon::regular(ShapeKind::Hexagon, pt2(0.0, 0.0), 50.0);
    assert!(is_convex(hex.points()));
    hex[1] = pt2(0.0, 0.0);
    assert!(!hex.is_convex());
}

#[test]
fn centroid_is_interior_and_far_point_is_not() {
    for kind in ALL_KINDS {
        let poly = Polygon::regular(kind, pt2(-30.0, 75.0), 12.0);
        let c = centroid(poly.points());
        assert!(c.approx_eq(&pt2(-30.0, 75.0), 1e-9), "{kind}: centroid");
        assert!(is_pt_interior(poly.points(), c), "{kind}: centroid interior");
        assert!(!poly.contains(pt2(-30.0 + 1000.0, 75.0)), "{kind}: far point");
    }
}

#[test]
fn explicit_points_are_validated() {
    let pts = vec![pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(1.0, 1.0)];
    let err = Polygon::from_points(ShapeKind::Quad, pts.clone()).unwrap_err();
    assert_eq!(
        err,
        ShapeError::PointCount {
            kind: ShapeKind::Quad,
            expected: 4,
            found: 3
        }
    );
    let tri = Polygon::from_points(ShapeKind::Triangle, pts).unwrap();
    assert_eq!(
        tri,
        Polygon::triangle(pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(1.0, 1.0))
    );
}

#[test]
fn points_are_editable_in_place() {
    let mut q = Polygon::new(ShapeKind::Quad);
    let before = q[2];
    if let Some(p) = q.get_mut(2) {
        p[0] += 5.0;
    }
    assert_eq!(q[2][0], before[0] + 5.0);
    q.translate(vec2(1.0, -1.0));
    assert_eq!(q[2][1], before[1] - 1.0);
    assert_eq!(q[2][2], 1.0);
    assert_eq!(q.len(), 4);
    assert!(q.get(4).is_none());
}

#[test]
fn transform_moves_points_in_place() {
    let mut q = Polygon::new(ShapeKind::Quad);
    let before = q.clone();
    q.transform(&crate::AffineTransform::rotation(90.0, pt2(0.0, 0.0)));
    // a quarter turn maps the square's corners onto their successors
    for i in 0..4 {
        assert!(q[i].approx_eq(&before[(i + 1) % 4], 1e-9));
    }
}

#[test]
fn kind_parsing() {
    assert_eq!("Hex".parse::<ShapeKind>().unwrap(), ShapeKind::Hexagon);
    assert_eq!("circle".parse::<ShapeKind>().unwrap(), ShapeKind::circle());
    assert_eq!(
        "circle:7".parse::<ShapeKind>().unwrap(),
        ShapeKind::Circle { segments: 7 }
    );
    assert!(matches!(
        "blob".parse::<ShapeKind>(),
        Err(ShapeError::UnknownKind(_))
    ));
    assert_eq!(ShapeKind::Circle { segments: 7 }.to_string(), "circle:7");
}

#[test]
fn kind_display_parses_back() {
    for kind in ALL_KINDS.iter().copied().chain([ShapeKind::Circle { segments: 7 }]) {
        assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
    }
}

fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ALL_KINDS.to_vec())
}

proptest! {
    #[test]
    fn radial_shapes_are_convex_and_contain_centroid(
        kind in kind_strategy(),
        cx in -1000.0f64..1000.0,
        cy in -1000.0f64..1000.0,
        r in 1.0f64..500.0,
    ) {
        let poly = Polygon::regular(kind, pt2(cx, cy), r);
        prop_assert!(poly.is_convex());
        prop_assert!(poly.contains(poly.centroid()));
        prop_assert!(!poly.contains(pt2(cx + 2.0 * r, cy)));
    }
}
