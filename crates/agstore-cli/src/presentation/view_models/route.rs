use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RouteViewModel {
    pub slug: String,
    pub path: String,
}
