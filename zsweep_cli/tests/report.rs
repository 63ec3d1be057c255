/// Result line formatting and chart output.
use zsweep_cli::plot::{render_svg, DEFAULT_SIZE, X_CAPTION, Y_CAPTION};
use zsweep_cli::report::{format_failure, format_point, format_row, human_bytes};
use zsweep_core::{analyze, Failure, Point, ResultRow, SweepError};

const MB: f64 = (1u64 << 20) as f64;

fn row(desc: &str, ratio: f64, mbps: f64) -> ResultRow {
    ResultRow {
        desc: desc.to_string(),
        ratio,
        ratio_imp: 0.0,
        comp_speed: mbps * MB,
        speed_change: 0.0,
        size_mb: 1.0,
    }
}

#[test]
fn test_format_row() {
    let r = ResultRow {
        desc: "L3|w+1|c+0|h+2|m+1".into(),
        ratio: 3.1234,
        ratio_imp: 10.0,
        comp_speed: 300.0 * MB,
        speed_change: -5.0,
        size_mb: 1.5,
    };
    assert_eq!(
        format_row(&r),
        "L3|w+1|c+0|h+2|m+1  :  3.12x (+10.0%) |   300 MB/s ( -5.0%) |  1.50 MB"
    );
}

#[test]
fn test_format_short_label_is_padded() {
    let line = format_row(&row("L2", 2.0, 1000.0));
    assert!(line.starts_with("L2                  :  2.00x ( +0.0%) |  1000 MB/s"));
}

#[test]
fn test_format_failure() {
    let f = Failure {
        label: "L3|w+9|c+0|h+0|m+0".into(),
        error: SweepError::EmptyPayload,
    };
    assert_eq!(format_failure(&f), "L3|w+9|c+0|h+0|m+0  : ERROR - payload is empty");
}

#[test]
fn test_format_point() {
    let p = Point {
        desc: "L3".into(),
        ratio: 2.5,
        speed_mbps: 312.34,
    };
    assert_eq!(format_point(&p), "L3                  :  2.50x |   312.3 MB/s");
}

#[test]
fn test_human_bytes() {
    assert_eq!(human_bytes(512), "512 B");
    assert_eq!(human_bytes(1536), "1.50 KB");
    assert_eq!(human_bytes(3 << 20), "3.00 MB");
    assert_eq!(human_bytes(1023), "1023 B");
    // Largest unit keeps growing instead of overflowing the table.
    assert_eq!(human_bytes(1 << 50), "1024.00 TB");
}

#[test]
fn test_render_chart() {
    let rows = vec![
        row("L2", 2.0, 400.0),
        row("L3", 2.5, 300.0),
        row("L3|w+1|c+0|h+1|m+0", 2.7, 250.0),
        row("L3|w+1|c+0|h+1|m+1", 2.6, 280.0),
        row("L3|w+2|c+0|h+1|m+0", 2.4, 200.0),
    ];
    let analysis = analyze(&rows);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    render_svg(&path, &analysis, DEFAULT_SIZE).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains(X_CAPTION));
    assert!(svg.contains(Y_CAPTION));
    assert!(svg.contains("L2"));
    assert!(svg.contains("L3|w+1|c+0|h+1|m+1"));
}

#[test]
fn test_render_empty_chart() {
    let analysis = analyze(&[]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    render_svg(&path, &analysis, (400, 300)).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
