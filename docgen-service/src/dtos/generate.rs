use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub bid: Option<String>,
}
