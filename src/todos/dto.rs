use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub name: String,
    pub list_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub name: Option<String>,
    pub completed: Option<bool>,
}
