use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Greeting {
    pub msg: String,
}

/// The parts of a profile record the page shows.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub age: serde_json::Number,
}
