use tabled::Tabled;

/// One candidate node in `gangctl score` output.
#[derive(Debug, Tabled)]
pub struct ScoreRow {
    #[tabled(rename = "NODE")]
    pub node: String,
    #[tabled(rename = "MEMORY")]
    pub memory: i64,
    #[tabled(rename = "RAW")]
    pub raw: i64,
    #[tabled(rename = "SCORE")]
    pub score: i64,
}
