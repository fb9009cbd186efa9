use crate::{formats, generate, CoordinatePrecision, Polygon, PslgError, UnitCircle, WriterConfig};

use super::util::{self, VTest};

#[test]
fn zero_vertices() {
    assert!(matches!(UnitCircle::new(0), Err(PslgError::NonPositiveVertexCount(0))));
}

#[test]
fn zero_vertices_creates_no_file() {
    let path = util::temp_path("zero_vertices_creates_no_file");
    assert!(matches!(generate(0, &path), Err(PslgError::NonPositiveVertexCount(0))));
    assert!(!path.exists());
}

#[test]
fn empty_polygon() {
    let polygon: Vec<VTest> = Vec::new();
    assert!(matches!(polygon.to_pslg(formats::DocumentFormat::new()), Err(PslgError::NonPositiveVertexCount(0))));
}

#[test]
fn non_finite_coordinate() {
    let polygon = util::polygon::poisoned();
    match polygon.write_pslg(Vec::new(), &WriterConfig::default()) {
        Err(PslgError::NonFiniteCoordinate { vertex }) => assert_eq!(vertex, 2),
        other => panic!("Unexpected result: {:?}", other.map(String::from_utf8)),
    }

    let polygon = vec![[0f64, 0.], [f64::INFINITY, 1.], [1., 0.]];
    assert!(matches!(polygon.to_pslg(formats::DocumentFormat::new()), Err(PslgError::NonFiniteCoordinate { vertex: 1 })));
}

#[test]
fn missing_directory() {
    let path = util::temp_path("missing_directory").join("no_such_dir").join("circle.poly");
    assert!(matches!(generate(8, &path), Err(PslgError::Io(_))));
}

#[test]
fn invalid_precision() {
    assert!("".parse::<CoordinatePrecision>().is_err());
    assert!("-1".parse::<CoordinatePrecision>().is_err());
    assert!("3.5".parse::<CoordinatePrecision>().is_err());
    assert_eq!(" 12 ".parse::<CoordinatePrecision>().unwrap(), CoordinatePrecision::Fixed(12));
    assert_eq!("round-trip".parse::<CoordinatePrecision>().unwrap(), CoordinatePrecision::RoundTrip);
}

#[test]
fn error_messages() {
    assert_eq!(PslgError::NonPositiveVertexCount(-4).to_string(), "numPerimVerts must be positive, got -4");
    assert_eq!(PslgError::NonFiniteCoordinate { vertex: 7 }.to_string(), "vertex 7 has a non-finite coordinate");
}
