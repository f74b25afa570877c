use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub name: String,
}
