/// Seed-placement flavor for the grid arranger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GridSeed {
    /// Larger-area items are assigned to grid cells nearer the center.
    #[default]
    CenterBias,
    /// Items are assigned to grid cells in uniformly shuffled order.
    Uniform,
}

/// Closed set of arrangement strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Strategy {
    /// Single horizontal row, vertically centered.
    Linear,
    /// Column clusters (singles, stacks, nested) concatenated left-to-right.
    Column,
    /// Grid seeding with conflict walk-out and center-pulling relaxation.
    Grid(GridSeed),
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Column
    }
}

impl Strategy {
    /// Parse a caller-supplied strategy tag.
    ///
    /// Unrecognized tags fall back to [`Strategy::Column`] rather than
    /// failing the request.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "linear" => Self::Linear,
            "grid" => Self::Grid(GridSeed::CenterBias),
            "grid-uniform" => Self::Grid(GridSeed::Uniform),
            _ => Self::Column,
        }
    }

    /// Canonical tag for this strategy.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Column => "column",
            Self::Grid(GridSeed::CenterBias) => "grid",
            Self::Grid(GridSeed::Uniform) => "grid-uniform",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/strategy.rs"]
mod tests;
