/// Floor applied to any budget comparison, overlapping or not
pub const BUDGET_FLOOR: u8 = 20;

/// Score when either budget cannot be interpreted
pub const UNKNOWN_BUDGET_SCORE: u8 = 50;

/// Monthly budget range in dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }

    /// Width of the shared part of two ranges, 0 when disjoint or touching
    #[inline]
    pub fn overlap(&self, other: &BudgetRange) -> u32 {
        self.max.min(other.max).saturating_sub(self.min.max(other.min))
    }

    /// Whether the range meets `[min, max]` at any point
    #[inline]
    pub fn intersects(&self, min: u32, max: u32) -> bool {
        self.max >= min && self.min <= max
    }
}

/// Bracket labels offered by the profile form
const BUDGET_BRACKETS: &[(&str, BudgetRange)] = &[
    ("under-500", BudgetRange::new(0, 500)),
    ("500-800", BudgetRange::new(500, 800)),
    ("800-1200", BudgetRange::new(800, 1200)),
    ("1200-1600", BudgetRange::new(1200, 1600)),
    ("1600-2000", BudgetRange::new(1600, 2000)),
    ("over-2000", BudgetRange::new(2000, 3000)),
];

/// Look up a bracket label from the profile form
pub fn bracket(label: &str) -> Option<BudgetRange> {
    let normalized = label.trim().to_ascii_lowercase();

    BUDGET_BRACKETS
        .iter()
        .find(|(l, _)| *l == normalized)
        .map(|(_, range)| *range)
}

/// Interpret a budget label for browse filtering
///
/// Known bracket labels come from the table; anything else shaped like
/// `"$250-350"` or `"300 to 450"` uses its first two numbers.
pub fn parse_budget(label: &str) -> Option<BudgetRange> {
    if let Some(range) = bracket(label) {
        return Some(range);
    }

    let normalized = label.trim().to_ascii_lowercase();

    let mut numbers = normalized
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty());

    let min: u32 = numbers.next()?.parse().ok()?;
    let max: u32 = numbers.next()?.parse().ok()?;

    if max < min {
        return None;
    }

    Some(BudgetRange::new(min, max))
}

/// Budget sub-score (0-100)
///
/// Only bracket labels are scored; free-form amounts count as unknown.
/// Disjoint ranges score the floor; overlapping ones scale linearly with
/// the overlap relative to the wider of the two ranges.
pub fn budget_score(a: &str, b: &str) -> u8 {
    let (Some(a), Some(b)) = (bracket(a), bracket(b)) else {
        return UNKNOWN_BUDGET_SCORE;
    };

    let overlap = a.overlap(&b);
    if overlap == 0 {
        return BUDGET_FLOOR;
    }

    // overlap > 0 implies both widths are non-zero
    let widest = a.width().max(b.width()) as f64;
    let score = BUDGET_FLOOR as f64 + (overlap as f64 / widest) * (100 - BUDGET_FLOOR) as f64;

    score.round().clamp(0.0, 100.0) as u8
}
