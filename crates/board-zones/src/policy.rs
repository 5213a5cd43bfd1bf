//! The closed set of boarding policies.

use std::fmt;
use std::str::FromStr;

use board_core::BoardingError;

/// A boarding-zone assignment policy.
///
/// Each variant maps to one pure scoring formula in [`crate::score`]; higher
/// scores board earlier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoardingPolicy {
    /// Pure sampling order.
    #[default]
    Random,
    BackToFrontByRows,
    /// Back to front, and window to aisle inside each row.
    BackToFrontByRowsWindowToAisle,
    BackToFront2Zones,
    BackToFront3Zones,
    BackToFront4Zones,
    FrontToBackByRows,
    FrontToBackByRowsWindowToAisle,
    WindowToAisle,
    /// Batches of one passenger per row, window seats first, back to front.
    WindowToAisleBackToFrontOnePersonPerRow,
    Steffen,
    /// Alternate rows, one side at a time, seat order inside a batch left random.
    SteffenModified,
    /// Back to front in batches of rows three apart, one side at a time.
    BackToFrontByRowsWithSpacing,
}

impl BoardingPolicy {
    /// Every policy, in canonical order.
    pub const ALL: [BoardingPolicy; 13] = [
        BoardingPolicy::Random,
        BoardingPolicy::BackToFrontByRows,
        BoardingPolicy::BackToFrontByRowsWindowToAisle,
        BoardingPolicy::BackToFront2Zones,
        BoardingPolicy::BackToFront3Zones,
        BoardingPolicy::BackToFront4Zones,
        BoardingPolicy::FrontToBackByRows,
        BoardingPolicy::FrontToBackByRowsWindowToAisle,
        BoardingPolicy::WindowToAisle,
        BoardingPolicy::WindowToAisleBackToFrontOnePersonPerRow,
        BoardingPolicy::Steffen,
        BoardingPolicy::SteffenModified,
        BoardingPolicy::BackToFrontByRowsWithSpacing,
    ];

    /// Lower-snake-case name; also the file-name stem used by the driver.
    pub fn name(self) -> &'static str {
        match self {
            BoardingPolicy::Random => "random",
            BoardingPolicy::BackToFrontByRows => "back_to_front_by_rows",
            BoardingPolicy::BackToFrontByRowsWindowToAisle => "back_to_front_by_rows_window_to_aisle",
            BoardingPolicy::BackToFront2Zones => "back_to_front_2_zones",
            BoardingPolicy::BackToFront3Zones => "back_to_front_3_zones",
            BoardingPolicy::BackToFront4Zones => "back_to_front_4_zones",
            BoardingPolicy::FrontToBackByRows => "front_to_back_by_rows",
            BoardingPolicy::FrontToBackByRowsWindowToAisle => "front_to_back_by_rows_window_to_aisle",
            BoardingPolicy::WindowToAisle => "window_to_aisle",
            BoardingPolicy::WindowToAisleBackToFrontOnePersonPerRow => {
                "window_to_aisle_back_to_front_one_person_per_row"
            }
            BoardingPolicy::Steffen => "steffen",
            BoardingPolicy::SteffenModified => "steffen_modified",
            BoardingPolicy::BackToFrontByRowsWithSpacing => "back_to_front_by_rows_with_spacing",
        }
    }
}

impl fmt::Display for BoardingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardingPolicy {
    type Err = BoardingError;

    /// Parse a policy name.  Case-insensitive; `-` is accepted for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        BoardingPolicy::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| BoardingError::UnknownPolicy(s.to_string()))
    }
}
