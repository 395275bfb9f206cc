use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub status: String,
}

impl MarkReadResponse {
    pub fn success() -> Self {
        Self {
            status: "success".into(),
        }
    }
}
