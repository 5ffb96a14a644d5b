use binviz_core::decoder::decode_bytes;
use binviz_io::{read_ply_positions, write_cloud, ExportFormat, PlyReader, PointCloudReader};

#[test]
fn ply_export_reads_back_every_point() {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(3 * 400 + 1).collect();
    let cloud = decode_bytes(bytes);
    assert!(!cloud.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cloud.ply");
    write_cloud(&cloud, &path, ExportFormat::Ply).unwrap();

    let positions = read_ply_positions(&path).unwrap();
    assert_eq!(positions.len(), cloud.num_points());
    for (read, point) in positions.iter().zip(cloud.iter()) {
        for axis in 0..3 {
            assert!(
                (read[axis] - point.position[axis]).abs() < 1e-5,
                "{read:?} vs {:?}",
                point.position
            );
        }
    }

    let mut reader = PlyReader::open(&path).unwrap();
    assert_eq!(reader.read_points().unwrap().len(), cloud.num_points());
}

#[test]
fn ply_export_carries_counts() {
    let cloud = decode_bytes(vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 9, 9, 9]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counts.ply");
    write_cloud(&cloud, &path, ExportFormat::Ply).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let counts: Vec<u64> = text
        .lines()
        .skip_while(|l| *l != "end_header")
        .skip(1)
        .map(|l| l.split_whitespace().last().unwrap().parse().unwrap())
        .collect();
    assert_eq!(counts, vec![3, 1]);
}

#[test]
fn obj_export_writes_vertices() {
    let cloud = decode_bytes(vec![10, 20, 30, 40, 50, 60]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cloud.obj");
    write_cloud(&cloud, &path, ExportFormat::Obj).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 2);
}

#[test]
fn empty_cloud_exports_valid_empty_ply() {
    let cloud = decode_bytes(Vec::new());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.ply");
    write_cloud(&cloud, &path, ExportFormat::Ply).unwrap();
    assert!(read_ply_positions(&path).unwrap().is_empty());
}
