use serde::Serialize;
use utoipa::openapi::path::{OperationBuilder, PathItem, PathItemType};
use utoipa::openapi::response::Response;
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::{Content, Ref, Required};
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub created_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDoc {
    pub id: Option<i32>,
    pub account_name: String,
    pub account_type: String,
    pub created_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDoc {
    pub id: Option<i32>,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// `YYYY-MM-DD`
    pub expense_date: String,
    pub created_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFileDoc {
    pub id: i32,
    pub file_name: String,
    pub file_type: String,
    pub file_path: String,
    pub user_name: String,
    pub account_name: String,
    pub uploaded_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadFormDoc {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub user_id: i32,
    pub account_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::expense_files::upload,
        crate::routes::expense_files::list,
        crate::routes::expense_files::download,
        crate::routes::expense_files::delete,
    ),
    components(
        schemas(
            HealthResponse,
            UserDoc,
            AccountDoc,
            EmployeeDoc,
            ExpenseDoc,
            ExpenseFileDoc,
            UploadFormDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "accounts"),
        (name = "employees"),
        (name = "expenses"),
        (name = "expense-files")
    )
)]
pub struct ApiDoc;

/// (collection, schema name) for every plain CRUD resource.
const CRUD_RESOURCES: [(&str, &str); 4] =
    [("users", "UserDoc"), ("accounts", "AccountDoc"), ("employees", "EmployeeDoc"), ("expenses", "ExpenseDoc")];

fn json_body(schema: &str) -> RequestBody {
    RequestBodyBuilder::new()
        .content("application/json", Content::new(Ref::from_schema_name(schema)))
        .required(Some(Required::True))
        .build()
}

/// The derived document plus the generic CRUD paths.
pub fn document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    for (collection, schema) in CRUD_RESOURCES {
        let op = |status: &str, description: &str| {
            OperationBuilder::new().tag(collection).response(status, Response::new(description))
        };

        let mut base = PathItem::new(PathItemType::Get, op("200", "List"));
        base.operations.insert(
            PathItemType::Post,
            op("201", "Created")
                .request_body(Some(json_body(schema)))
                .response("400", Response::new("Validation Error"))
                .build(),
        );

        let mut item = PathItem::new(PathItemType::Get, op("200", "OK").response("404", Response::new("Not Found")));
        item.operations.insert(
            PathItemType::Put,
            op("200", "Updated")
                .request_body(Some(json_body(schema)))
                .response("400", Response::new("Validation Error"))
                .response("404", Response::new("Not Found"))
                .build(),
        );
        item.operations.insert(
            PathItemType::Delete,
            op("204", "Deleted").response("404", Response::new("Not Found")).build(),
        );

        doc.paths.paths.insert(format!("/api/{collection}"), base);
        doc.paths.paths.insert(format!("/api/{collection}/{{id}}"), item);
    }
    doc
}
