//! Generators for families of SRS headers.

/// Every `WGS84 UTM <zone><N|S>` header for zones 1 through 60.
///
/// Returns `(header, zone, is_south)` tuples.
///
/// # Example
///
/// ```
/// use test_utils::all_utm_headers;
///
/// let headers = all_utm_headers();
/// assert_eq!(headers.len(), 120);
/// assert_eq!(headers[0], ("WGS84 UTM 1N".to_string(), 1, false));
/// ```
pub fn all_utm_headers() -> Vec<(String, i32, bool)> {
    (1..=60)
        .flat_map(|zone| {
            [
                (format!("WGS84 UTM {}N", zone), zone, false),
                (format!("WGS84 UTM {}S", zone), zone, true),
            ]
        })
        .collect()
}

/// Builds GCP file contents with `count` synthetic points.
///
/// Points step 10 m east per entry and alternate between two images.
pub fn gcp_file_text(header: &str, count: usize) -> String {
    let mut text = format!("{}\n", header);
    for i in 0..count {
        text.push_str(&format!(
            "{:.1} {:.1} {:.1} {} {} IMG_{:04}.jpg gcp{:02}\n",
            500000.0 + 10.0 * i as f64,
            4649776.0,
            100.0,
            1000 + i,
            800 + i,
            i % 2,
            i
        ));
    }
    text
}
