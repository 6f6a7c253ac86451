use crate::{PointsEntry, format_thousands};

const INITIAL_POINTS: &[(&str, u64)] = &[
    ("Uncle Paul", 500),
    ("Grandad Steve", 0),
    ("Mum", 0),
    ("Grandma Jean", 0),
    ("Nannan", 0),
    ("Grandad Darren", 0),
    ("Dad", 0),
];

/// A ranked leaderboard row. Ranks are positional, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub points: u64,
}

impl LeaderboardRow {
    pub fn points_label(&self) -> String {
        format_thousands(self.points)
    }
}

/// The points table shown on the hub.
pub fn initial_points() -> Vec<PointsEntry> {
    INITIAL_POINTS
        .iter()
        .map(|(name, points)| PointsEntry::new(*name, *points))
        .collect()
}

/// Orders entries by points, highest first.
///
/// `sort_by` is a stable sort, so entries with equal points keep their input order.
pub fn rank(entries: &[PointsEntry]) -> Vec<LeaderboardRow> {
    let mut sorted: Vec<&PointsEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.points.cmp(&a.points));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| LeaderboardRow {
            rank: i + 1,
            name: entry.name.clone(),
            points: entry.points,
        })
        .collect()
}
