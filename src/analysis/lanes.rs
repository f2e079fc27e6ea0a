pub const SUPPORT_LABEL: &str = "SUPPORT";
pub const ADC_LABEL: &str = "ADC";

/// Where a single match lands in the lane tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    /// Bottom lane with a duo role; counted as SUPPORT or ADC only.
    Bottom(&'static str),
    /// Any non-bottom lane, counted under its own label.
    Lane(String),
    /// Bottom lane without a duo role; not counted at all.
    Dropped,
}

pub fn classify(lane: &str, role: &str) -> Position {
    if lane != "BOTTOM" {
        return Position::Lane(lane.to_string());
    }

    match role {
        "DUO_SUPPORT" => Position::Bottom(SUPPORT_LABEL),
        "DUO_CARRY" => Position::Bottom(ADC_LABEL),
        _ => Position::Dropped,
    }
}
