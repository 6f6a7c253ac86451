/// One row of the points table before ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsEntry {
    pub name: String,
    pub points: u64,
}

impl PointsEntry {
    pub fn new(name: impl Into<String>, points: u64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}
