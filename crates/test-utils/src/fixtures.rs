//! Common test fixtures: SRS headers and GCP file contents.

/// Headers that parse successfully with the default builder.
pub mod headers {
    pub const UTM_32N: &str = "WGS84 UTM 32N";
    pub const UTM_33S: &str = "WGS84 UTM 33S";
    pub const EPSG_4326: &str = "EPSG:4326";
    pub const EPSG_LOWERCASE: &str = "epsg:32633";
    pub const PROJ4_QUOTED: &str = "'+proj=longlat +datum=WGS84 +no_defs'";
    pub const PROJ4_UTM: &str = "+proj=utm +zone=32 +north +ellps=WGS84 +datum=WGS84 +units=m +no_defs";

    /// Every accepted header above.
    pub const VALID: &[&str] = &[UTM_32N, UTM_33S, EPSG_4326, EPSG_LOWERCASE, PROJ4_QUOTED, PROJ4_UTM];

    /// Headers matching no known notation.
    pub const UNRECOGNIZED: &[&str] = &["not a real srs", "WGS84", "UTM 32N", "EPSG 4326", ""];

    /// Headers with a recognised shape that the builder rejects.
    pub const REJECTED: &[&str] = &["EPSG:99999", "epsg:abc", "WGS84 UTM 75N", "+proj=utm +zone=32 datum"];
}

/// GCP file contents.
pub mod gcp {
    /// A small GCP list in UTM 16N with three points over two images.
    pub const UTM_16N: &str = "\
WGS84 UTM 16N
544256.7 5320919.9 5 3044 2622 IMG_0525.jpg gcp01
544157.7 5320899.2 5 4193 1552 IMG_0585.jpg gcp02
544256.7 5320919.9 5 2631 3021 IMG_0585.jpg gcp01
";

    /// Header preceded by blank lines, with comments between entries.
    pub const EPSG_WITH_COMMENTS: &str = "

EPSG:4326
# lon lat alt px py image
-91.99 46.84 198.5 3044 2622 DJI_0001.JPG
# second point
-91.98 46.83 201.0 1200 800 DJI_0002.JPG
";

    /// Header only.
    pub const HEADER_ONLY: &str = "+proj=longlat +datum=WGS84 +no_defs\n";

    /// Entry missing its image name on line 3.
    pub const BAD_ENTRY: &str = "\
WGS84 UTM 16N
544256.7 5320919.9 5 3044 2622 IMG_0525.jpg
544157.7 5320899.2 5 4193 1552
";
}
