use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::generate::generate),
    components(schemas(crate::routes::generate::GenerateResponse)),
    tags(
        (name = "mock", description = "Service mock generation")
    )
)]
struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
