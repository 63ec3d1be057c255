use zsweep_core::{Failure, Point, ResultRow};

const MB: f64 = (1u64 << 20) as f64;

/// One aligned result line, e.g.
///
/// ```text
/// L3|w+1|c+0|h+1|m+0  :  3.12x ( +1.4%) |   412 MB/s ( -6.0%) |  1.61 MB
/// ```
pub fn format_row(row: &ResultRow) -> String {
    format!(
        "{:20}: {:5.2}x ({:+5.1}%) | {:5.0} MB/s ({:+5.1}%) | {:5.2} MB",
        row.desc,
        row.ratio,
        row.ratio_imp,
        row.comp_speed / MB,
        row.speed_change,
        row.size_mb
    )
}

pub fn format_failure(failure: &Failure) -> String {
    format!("{:20}: ERROR - {}", failure.label, failure.error)
}

pub fn format_point(point: &Point) -> String {
    format!(
        "{:20}: {:5.2}x | {:7.1} MB/s",
        point.desc, point.ratio, point.speed_mbps
    )
}

/// Binary-prefixed size with two decimals; plain bytes below 1 KB.
pub fn human_bytes(n: u64) -> String {
    const SCALED: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if n < 1024 {
        return format!("{n} B");
    }
    let mut value = n as f64 / 1024.0;
    let mut unit = SCALED[0];
    for next in &SCALED[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.2} {unit}")
}
