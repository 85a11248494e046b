//! Odds table for safe reveals.

use crate::CellCount;

/// Multiplier of a game before any safe reveal, and the fallback for lookups past a row's end.
pub const BASE_PAYOUT: f64 = 1.0;

/// Multiplier of a game that revealed a mine.
pub const LOST_PAYOUT: f64 = 0.0;

/// Payout multipliers indexed by `[mine_count - 1][safe_reveals - 1]`.
///
/// Rows are kept exactly as published to players. Row lengths do not always match the number of
/// safe cells for that mine count: the 5 mine row stops one reveal short, and a few high-risk rows
/// carry entries that can never be reached.
pub static PAYOUT_TABLE: [&[f64]; 24] = [
    &[1.01, 1.08, 1.12, 1.18, 1.24, 1.30, 1.37, 1.46, 1.55, 1.65, 1.77, 1.90, 2.06, 2.25, 2.47, 2.75, 3.09, 3.54, 4.12, 4.95, 6.19, 8.25, 12.37, 24.75],
    &[1.08, 1.17, 1.29, 1.41, 1.56, 1.74, 1.94, 2.18, 2.47, 2.83, 3.26, 3.81, 4.5, 5.4, 6.6, 8.25, 10.61, 14.14, 19.8, 29.7, 49.5, 99.0, 297.0],
    &[1.12, 1.29, 1.48, 1.71, 2.00, 2.35, 2.79, 3.35, 4.07, 5.00, 6.26, 7.96, 10.35, 13.8, 18.97, 27.11, 40.66, 65.06, 113.85, 227.7, 569.3, 2277.0],
    &[1.18, 1.41, 1.71, 2.05, 2.58, 3.23, 4.09, 5.26, 6.88, 9.17, 12.51, 17.52, 25.35, 37.95, 59.64, 99.39, 178.91, 357.81, 834.9, 2504.0, 12523.0],
    &[1.24, 1.56, 2.00, 2.58, 3.39, 4.52, 6.14, 8.5, 12.04, 17.52, 26.77, 40.87, 66.41, 113.85, 208.72, 417.45, 939.26, 2504.0, 12523.0],
    &[1.3, 1.74, 2.35, 3.23, 4.32, 5.82, 8.12, 11.87, 18.05, 28.1, 45.02, 75.21, 128.89, 232.64, 451.31, 1086.45, 2705.62, 6764.05, 16910.12],
    &[1.37, 1.94, 2.79, 4.09, 5.62, 7.74, 10.69, 15.52, 24.31, 37.34, 57.38, 94.72, 153.52, 249.97, 412.92, 709.96, 1320.73, 2458.69, 5107.16, 11363.92],
    &[1.46, 2.18, 3.35, 5.26, 8.64, 14.17, 24.47, 44.05, 83.2, 176.8, 356.56, 603.45, 1111.84, 2146.38, 4746.9, 11106.6, 27408.72, 71262.68, 188346.9],
    &[1.55, 2.47, 4.07, 6.88, 12.04, 21.89, 41.6, 83.2, 176.8, 404.1, 1010.1, 2828.8, 9193.0, 36773.0, 202254.0, 2022545.0, 3236072.0, 4852483.0, 7291924.0, 10938483.0],
    &[1.65, 2.83, 5.0, 9.17, 17.52, 33.83, 73.95, 166.4, 404.1, 1010.1, 2828.8, 9193.0, 36773.0, 202254.0, 2022545.0, 3236072.0, 4852483.0, 7291924.0, 10938483.0],
    &[1.77, 3.26, 6.26, 12.51, 26.27, 58.38, 138.66, 356.56, 1010.0, 3232.0, 12123.0, 56574.0, 396022.0, 5148297.0, 5148297.0],
    &[1.99, 3.81, 7.95, 17.52, 40.87, 102.17, 277.33, 831.98, 2828.0, 11314.0, 56574.0, 396022.0, 5148297.0],
    &[2.06, 4.5, 10.35, 25.3, 66.41, 189.75, 600.87, 2163.0, 9193.0, 49031.0, 367735.0, 5148297.0],
    &[2.25, 5.4, 13.8, 37.95, 113.85, 379.5, 1442.0, 6489.0, 36773.0, 294188.0, 4412826.0],
    &[2.47, 6.6, 18.97, 59.64, 208.72, 834.9, 3965.0, 23794.0, 118973.0, 2022545.0, 3236072.0],
    &[2.75, 8.25, 27.11, 99.39, 417.45, 2087.0, 13219.0, 118973.0, 2022545.0],
    &[3.09, 10.61, 40.66, 178.91, 939.26, 6261.0, 59486.0, 1070759.0],
    &[3.54, 14.14, 65.06, 357.81, 2504.0, 25047.0, 475893.0],
    &[4.12, 19.8, 113.9, 834.9, 8766.0, 175329.0],
    &[4.95, 29.7, 227.7, 2504.0, 52598.0],
    &[6.19, 49.5, 569.3, 12523.0],
    &[8.25, 99.0, 297.0],
    &[12.38, 297.0],
    &[24.75],
];

/// Looks up the multiplier after `safe_reveals` safe cells on a board with `mine_count` mines.
///
/// Anything outside the table, including zero reveals, pays [`BASE_PAYOUT`].
pub fn payout_for(mine_count: CellCount, safe_reveals: CellCount) -> f64 {
    let (Some(row), Some(column)) = (
        usize::from(mine_count).checked_sub(1),
        usize::from(safe_reveals).checked_sub(1),
    ) else {
        return BASE_PAYOUT;
    };

    PAYOUT_TABLE
        .get(row)
        .and_then(|odds| odds.get(column))
        .copied()
        .unwrap_or(BASE_PAYOUT)
}
