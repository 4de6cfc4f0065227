use super::*;
use crate::clusterer::{Point, UNASSIGNED};
use std::io::Cursor;

#[test]
fn test_parse_line() {
    assert_eq!(parse_line("1.5,-2"), Some(Point::new(1.5, -2.0)));
    assert_eq!(parse_line(" 3 , 4 "), Some(Point::new(3.0, 4.0)));
    assert_eq!(parse_line("x,y"), None);
    assert_eq!(parse_line("7"), None);
}

#[test]
fn test_parse_line_rejects_non_finite() {
    assert_eq!(parse_line("nan,1"), None);
    assert_eq!(parse_line("1,NaN"), None);
    assert_eq!(parse_line("inf,0"), None);
    assert_eq!(parse_line("0,-infinity"), None);
}

#[test]
fn test_read_skips_non_finite_rows() {
    let input = "0,0\nnan,1\ninf,inf\n10,10\n";
    let points = read_points(Cursor::new(input), None).unwrap();
    assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
}

#[test]
fn test_read_skips_invalid_utf8_rows() {
    let input: &[u8] = b"0,0\n\xff\xfe,1\n10,10\n";
    let points = read_points(Cursor::new(input), None).unwrap();
    assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
}

#[test]
fn test_read_handles_crlf() {
    let input = "1,2\r\n3,4,0\r\n";
    let points = read_points(Cursor::new(input), None).unwrap();
    assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
}

#[test]
fn test_third_field_ignored() {
    let point = parse_line("1,2,5").unwrap();
    assert_eq!(point.cluster_id, UNASSIGNED);
    assert_eq!((point.x, point.y), (1.0, 2.0));
}

#[test]
fn test_read_skips_malformed_and_blank_rows() {
    let input = "x,y\n0,0\n\nfoo,1\n10,10\n10,11,3\n";
    let points = read_points(Cursor::new(input), None).unwrap();

    assert_eq!(
        points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 11.0),
        ]
    );
}

#[test]
fn test_read_honours_limit() {
    let input = "1,1\n2,2\n3,3\n4,4\n";
    let points = read_points(Cursor::new(input), Some(2)).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1], Point::new(2.0, 2.0));
}

#[test]
fn test_write_format() {
    let mut points = vec![Point::new(0.0, 1.5), Point::new(-2.25, 10.0)];
    points[0].cluster_id = 1;
    points[1].cluster_id = 0;

    let mut out = Vec::new();
    write_points(&mut out, &points).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "0,1.5,1\n-2.25,10,0\n");
}

#[test]
fn test_csv_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clusters.csv");

    let mut points = vec![Point::new(0.1, 0.2), Point::new(3.0, 4.0)];
    points[0].cluster_id = 0;
    points[1].cluster_id = 2;
    save_csv(&path, &points).unwrap();

    let loaded = load_csv(&path, None).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!((loaded[0].x, loaded[0].y), (0.1, 0.2));
    assert!(loaded.iter().all(|p| p.cluster_id == UNASSIGNED));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_csv(dir.path().join("missing.csv"), None).unwrap_err();
    assert!(matches!(err, DatasetError::Open { .. }));
}

#[test]
fn test_load_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "header,only\n").unwrap();

    let err = load_csv(&path, None).unwrap_err();
    assert!(matches!(err, DatasetError::Empty(_)));
}

#[test]
fn test_save_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = save_csv(dir.path().join("nope/out.csv"), &[Point::new(0.0, 0.0)]).unwrap_err();
    assert!(matches!(err, DatasetError::Create { .. }));
}
