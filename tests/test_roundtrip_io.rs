use las::Point;
use pointclip::{LasSink, LasSource, PointSink, PointSource};
use proptest::prelude::*;
use std::path::Path;

fn header() -> las::Header {
    let mut builder = las::Builder::from((1, 2));
    builder.point_format = las::point::Format::new(0).unwrap();
    builder.into_header().unwrap()
}

fn write_indexed(path: &Path, n: u16) {
    let mut sink = LasSink::create(path, header()).unwrap();
    let points = (0..n)
        .map(|i| {
            let mut p = Point::default();
            p.x = i as f64 * 0.5;
            p.y = -(i as f64);
            p.intensity = i;
            p
        })
        .collect();
    sink.write(points).unwrap();
    sink.close().unwrap();
}

#[test]
fn las_chunk_larger_than_file_yields_one_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.las");
    write_indexed(&path, 4);

    let mut source = LasSource::open(&path).unwrap();
    let chunk = source.next_chunk(100_000).unwrap().unwrap();
    assert_eq!(chunk.offset, 0);
    assert_eq!(chunk.len(), 4);
    assert!(source.next_chunk(100_000).unwrap().is_none());
}

#[test]
fn las_empty_file_yields_no_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.las");
    write_indexed(&path, 0);

    let mut source = LasSource::open(&path).unwrap();
    assert_eq!(source.total_point_count(), 0);
    assert!(source.next_chunk(10).unwrap().is_none());
}

#[test]
fn las_sink_header_matches_reopened_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header.las");
    write_indexed(&path, 9);

    let source = LasSource::open(&path).unwrap();
    let header = source.header();
    assert_eq!(header.number_of_points(), 9);
    assert_eq!(header.bounds().min.x, 0.0);
    assert_eq!(header.bounds().max.x, 4.0);
    assert_eq!(header.bounds().min.y, -8.0);
    assert_eq!(header.bounds().max.y, 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn las_chunks_concatenate_to_file(n in 0u16..200, chunk_size in 1usize..50) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.las");
        write_indexed(&path, n);

        let mut source = LasSource::open(&path).unwrap();
        let mut intensities = Vec::new();
        let mut next_offset = 0u64;
        for chunk in source.chunks(chunk_size) {
            let chunk = chunk.unwrap();
            prop_assert_eq!(chunk.offset, next_offset);
            prop_assert!(chunk.len() <= chunk_size);
            next_offset = chunk.end();
            intensities.extend(chunk.iter().map(|p| p.intensity));
        }
        prop_assert_eq!(intensities, (0..n).collect::<Vec<u16>>());
    }
}
