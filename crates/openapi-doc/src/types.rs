use serde::Deserialize;

/// The minimal projection of an OpenAPI document this service consumes.
/// Unknown fields are ignored; absent fields decode to empty strings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OpenApiDoc {
    #[serde(default, alias = "Openapi", alias = "OpenApi")]
    pub openapi: String,
    #[serde(default, alias = "Info")]
    pub info: DocInfo,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct DocInfo {
    #[serde(default, alias = "Title")]
    pub title: String,
    #[serde(default, alias = "Description")]
    pub description: String,
}
