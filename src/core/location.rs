/// Score when the normalized regions are identical
pub const SAME_LOCATION_SCORE: u8 = 100;

/// Score when the two share a city or a broader region token
pub const NEARBY_LOCATION_SCORE: u8 = 70;

/// Score when nothing in the two regions lines up
pub const DISTANT_LOCATION_SCORE: u8 = 30;

/// Score when either side has no region at all
pub const UNKNOWN_LOCATION_SCORE: u8 = 50;

/// Normalize a free-text region for comparison
///
/// Lower-cases, collapses runs of whitespace, trims around commas and
/// drops empty comma segments, so `"Napier ,  Hawke's Bay"` and
/// `"napier, hawke's bay,"` normalize to the same string.
pub fn normalize_region(raw: &str) -> String {
    raw.split(',')
        .map(|segment| {
            segment
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Location sub-score (0-100)
///
/// Regions are compared as text only; there are no coordinates. The
/// first comma segment is treated as the city and the second as the
/// broader region (state, province).
///
/// A shared broader region scores 70. A shared city with differing
/// region text (`"Auckland"` vs `"Auckland, Auckland"`) is an extension
/// of that tier and also scores 70.
pub fn location_score(a: &str, b: &str) -> u8 {
    let a = normalize_region(a);
    let b = normalize_region(b);

    if a.is_empty() || b.is_empty() {
        return UNKNOWN_LOCATION_SCORE;
    }

    if a == b {
        return SAME_LOCATION_SCORE;
    }

    let a_segments: Vec<&str> = a.split(',').collect();
    let b_segments: Vec<&str> = b.split(',').collect();

    let same_city = a_segments[0] == b_segments[0];
    let same_region = matches!(
        (a_segments.get(1), b_segments.get(1)),
        (Some(x), Some(y)) if x == y
    );

    if same_city || same_region {
        NEARBY_LOCATION_SCORE
    } else {
        DISTANT_LOCATION_SCORE
    }
}
