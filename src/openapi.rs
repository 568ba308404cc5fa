//! OpenAPI document and Swagger UI.
//!
//! The CRUD endpoints are generic functions, so their path items cannot be
//! derived per handler; [`CrudPaths`] builds them from the same resource
//! table the routers are wired from.

use utoipa::{
    openapi::{
        path::{HttpMethod, OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem,
            PathItemBuilder},
        request_body::RequestBodyBuilder,
        schema::{KnownFormat, SchemaFormat, Type},
        ContentBuilder, ObjectBuilder, Ref, Required, Response, ResponseBuilder,
    },
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fabrik API",
        version = "1.0.0",
        description = r#"
REST backend for the Fabrik workshop ERP: HR, work tracking, and store
management.

Every response carries a uniform envelope:

```json
{
  "toast": { "status": 200, "type": "select", "message": "department list" },
  "data": [ ... ]
}
```

Rows are addressed by `uuid`; the numeric `id` is a per-table sequence used
only to derive display codes such as `WO25-0007`.
        "#
    ),
    servers(
        (url = "http://localhost:4060", description = "Local development")
    ),
    tags(
        (name = "HR", description = "Departments, designations, employees, and leave setup"),
        (name = "Work", description = "Service intake, work orders, and diagnoses"),
        (name = "Store", description = "Vendors, warehouses, purchasing, and returns"),
        (name = "Health", description = "Liveness and readiness probes")
    ),
    components(
        schemas(
            crate::crud::Toast,
            crate::crud::ToastKind,
            crate::errors::ErrorResponse,

            crate::handlers::hr::DepartmentRead,
            crate::handlers::hr::DepartmentCreate,
            crate::handlers::hr::DepartmentUpdate,
            crate::handlers::hr::DesignationRead,
            crate::handlers::hr::DesignationCreate,
            crate::handlers::hr::DesignationUpdate,
            crate::handlers::hr::EmployeeRead,
            crate::handlers::hr::EmployeeCreate,
            crate::handlers::hr::EmployeeUpdate,
            crate::handlers::hr::LeavePolicyRead,
            crate::handlers::hr::LeavePolicyCreate,
            crate::handlers::hr::LeavePolicyUpdate,
            crate::handlers::hr::LeaveCategoryRead,
            crate::handlers::hr::LeaveCategoryCreate,
            crate::handlers::hr::LeaveCategoryUpdate,
            crate::handlers::hr::ConfigurationRead,
            crate::handlers::hr::ConfigurationCreate,
            crate::handlers::hr::ConfigurationUpdate,
            crate::handlers::hr::ConfigurationEntryRead,
            crate::handlers::hr::ConfigurationEntryCreate,
            crate::handlers::hr::ConfigurationEntryUpdate,

            crate::handlers::work::ProblemRead,
            crate::handlers::work::ProblemCreate,
            crate::handlers::work::ProblemUpdate,
            crate::handlers::work::WorkInfoRead,
            crate::handlers::work::WorkInfoCreate,
            crate::handlers::work::WorkInfoUpdate,
            crate::handlers::work::WorkOrderRead,
            crate::handlers::work::WorkOrderCreate,
            crate::handlers::work::WorkOrderUpdate,
            crate::handlers::work::DiagnosisRead,
            crate::handlers::work::DiagnosisCreate,
            crate::handlers::work::DiagnosisUpdate,

            crate::handlers::store::VendorRead,
            crate::handlers::store::VendorCreate,
            crate::handlers::store::VendorUpdate,
            crate::handlers::store::WarehouseRead,
            crate::handlers::store::WarehouseCreate,
            crate::handlers::store::WarehouseUpdate,
            crate::handlers::store::PurchaseRead,
            crate::handlers::store::PurchaseCreate,
            crate::handlers::store::PurchaseUpdate,
            crate::handlers::store::PurchaseReturnRead,
            crate::handlers::store::PurchaseReturnCreate,
            crate::handlers::store::PurchaseReturnUpdate,
            crate::handlers::store::PurchaseReturnEntryRead,
            crate::handlers::store::PurchaseReturnEntryCreate,
            crate::handlers::store::PurchaseReturnEntryUpdate
        )
    ),
    modifiers(&CrudPaths)
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

/// One row per REST resource; mirrors the router wiring in
/// `handlers::{hr,work,store}::routes`.
struct ResourceDoc {
    tag: &'static str,
    /// Mount path, e.g. `/hr/department`.
    path: &'static str,
    /// snake_case operation-id stem.
    id: &'static str,
    /// Human name used in summaries.
    name: &'static str,
    read: &'static str,
    create: &'static str,
    update: &'static str,
    /// Path parameter of the `by/{parent}` listing, when the resource has
    /// an owning parent.
    parent_param: Option<&'static str>,
    /// Path parameter of the `details/{uuid}` composite read, when one
    /// exists.
    details_param: Option<&'static str>,
}

const RESOURCES: &[ResourceDoc] = &[
    ResourceDoc {
        tag: "HR",
        path: "/hr/department",
        id: "department",
        name: "department",
        read: "DepartmentRead",
        create: "DepartmentCreate",
        update: "DepartmentUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "HR",
        path: "/hr/designation",
        id: "designation",
        name: "designation",
        read: "DesignationRead",
        create: "DesignationCreate",
        update: "DesignationUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "HR",
        path: "/hr/employee",
        id: "employee",
        name: "employee",
        read: "EmployeeRead",
        create: "EmployeeCreate",
        update: "EmployeeUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "HR",
        path: "/hr/leave-policy",
        id: "leave_policy",
        name: "leave policy",
        read: "LeavePolicyRead",
        create: "LeavePolicyCreate",
        update: "LeavePolicyUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "HR",
        path: "/hr/leave-category",
        id: "leave_category",
        name: "leave category",
        read: "LeaveCategoryRead",
        create: "LeaveCategoryCreate",
        update: "LeaveCategoryUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "HR",
        path: "/hr/configuration",
        id: "configuration",
        name: "leave configuration",
        read: "ConfigurationRead",
        create: "ConfigurationCreate",
        update: "ConfigurationUpdate",
        parent_param: None,
        details_param: Some("configuration_uuid"),
    },
    ResourceDoc {
        tag: "HR",
        path: "/hr/configuration-entry",
        id: "configuration_entry",
        name: "configuration entry",
        read: "ConfigurationEntryRead",
        create: "ConfigurationEntryCreate",
        update: "ConfigurationEntryUpdate",
        parent_param: Some("configuration_uuid"),
        details_param: None,
    },
    ResourceDoc {
        tag: "Work",
        path: "/work/problem",
        id: "problem",
        name: "work problem",
        read: "ProblemRead",
        create: "ProblemCreate",
        update: "ProblemUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "Work",
        path: "/work/info",
        id: "work_info",
        name: "work info",
        read: "WorkInfoRead",
        create: "WorkInfoCreate",
        update: "WorkInfoUpdate",
        parent_param: None,
        details_param: Some("info_uuid"),
    },
    ResourceDoc {
        tag: "Work",
        path: "/work/order",
        id: "work_order",
        name: "work order",
        read: "WorkOrderRead",
        create: "WorkOrderCreate",
        update: "WorkOrderUpdate",
        parent_param: Some("info_uuid"),
        details_param: None,
    },
    ResourceDoc {
        tag: "Work",
        path: "/work/diagnosis",
        id: "diagnosis",
        name: "diagnosis",
        read: "DiagnosisRead",
        create: "DiagnosisCreate",
        update: "DiagnosisUpdate",
        parent_param: Some("order_uuid"),
        details_param: None,
    },
    ResourceDoc {
        tag: "Store",
        path: "/store/vendor",
        id: "vendor",
        name: "vendor",
        read: "VendorRead",
        create: "VendorCreate",
        update: "VendorUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "Store",
        path: "/store/warehouse",
        id: "warehouse",
        name: "warehouse",
        read: "WarehouseRead",
        create: "WarehouseCreate",
        update: "WarehouseUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "Store",
        path: "/store/purchase",
        id: "purchase",
        name: "purchase",
        read: "PurchaseRead",
        create: "PurchaseCreate",
        update: "PurchaseUpdate",
        parent_param: None,
        details_param: None,
    },
    ResourceDoc {
        tag: "Store",
        path: "/store/purchase-return",
        id: "purchase_return",
        name: "purchase return",
        read: "PurchaseReturnRead",
        create: "PurchaseReturnCreate",
        update: "PurchaseReturnUpdate",
        parent_param: None,
        details_param: Some("purchase_return_uuid"),
    },
    ResourceDoc {
        tag: "Store",
        path: "/store/purchase-return-entry",
        id: "purchase_return_entry",
        name: "purchase return entry",
        read: "PurchaseReturnEntryRead",
        create: "PurchaseReturnEntryCreate",
        update: "PurchaseReturnEntryUpdate",
        parent_param: Some("purchase_return_uuid"),
        details_param: None,
    },
];

pub struct CrudPaths;

impl Modify for CrudPaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for resource in RESOURCES {
            let collection = PathItemBuilder::new()
                .operation(
                    HttpMethod::Get,
                    OperationBuilder::new()
                        .tag(resource.tag)
                        .operation_id(Some(format!("{}_list", resource.id)))
                        .summary(Some(format!("List every {}, newest first", resource.name)))
                        .response("200", enveloped("200", resource.read))
                        .build(),
                )
                .operation(
                    HttpMethod::Post,
                    OperationBuilder::new()
                        .tag(resource.tag)
                        .operation_id(Some(format!("{}_create", resource.id)))
                        .summary(Some(format!("Insert a {}", resource.name)))
                        .request_body(Some(
                            RequestBodyBuilder::new()
                                .content("application/json", schema_content(resource.create))
                                .required(Some(Required::True))
                                .build(),
                        ))
                        .response("201", enveloped("201", resource.read))
                        .response("400", error_response("Validation failed"))
                        .response("409", error_response("Constraint violation"))
                        .build(),
                )
                .build();

            let item = PathItemBuilder::new()
                .operation(
                    HttpMethod::Get,
                    OperationBuilder::new()
                        .tag(resource.tag)
                        .operation_id(Some(format!("{}_fetch", resource.id)))
                        .summary(Some(format!("Fetch one {} by uuid", resource.name)))
                        .parameter(uuid_param("uuid"))
                        .response("200", enveloped("200", resource.read))
                        .response("404", error_response("No such row"))
                        .build(),
                )
                .operation(
                    HttpMethod::Put,
                    OperationBuilder::new()
                        .tag(resource.tag)
                        .operation_id(Some(format!("{}_update", resource.id)))
                        .summary(Some(format!("Update a {}", resource.name)))
                        .parameter(uuid_param("uuid"))
                        .request_body(Some(
                            RequestBodyBuilder::new()
                                .content("application/json", schema_content(resource.update))
                                .required(Some(Required::True))
                                .build(),
                        ))
                        .response("200", enveloped("200", resource.read))
                        .response("404", error_response("No such row"))
                        .response("409", error_response("Constraint violation"))
                        .build(),
                )
                .operation(
                    HttpMethod::Delete,
                    OperationBuilder::new()
                        .tag(resource.tag)
                        .operation_id(Some(format!("{}_remove", resource.id)))
                        .summary(Some(format!("Delete a {}", resource.name)))
                        .parameter(uuid_param("uuid"))
                        .response("200", enveloped("200", resource.read))
                        .response("404", error_response("No such row"))
                        .build(),
                )
                .build();

            openapi
                .paths
                .paths
                .insert(resource.path.to_string(), collection);
            openapi
                .paths
                .paths
                .insert(format!("{}/{{uuid}}", resource.path), item);

            if let Some(parent) = resource.parent_param {
                openapi.paths.paths.insert(
                    format!("{}/by/{{{parent}}}", resource.path),
                    listing_by_parent(resource, parent),
                );
            }
            if let Some(param) = resource.details_param {
                openapi.paths.paths.insert(
                    format!("{}/details/{{{param}}}", resource.path),
                    composite_details(resource, param),
                );
            }
        }
    }
}

fn listing_by_parent(resource: &ResourceDoc, parent: &str) -> PathItem {
    PathItem::new(
        HttpMethod::Get,
        OperationBuilder::new()
            .tag(resource.tag)
            .operation_id(Some(format!("{}_list_by_parent", resource.id)))
            .summary(Some(format!(
                "List the {} rows owned by one parent",
                resource.name
            )))
            .parameter(uuid_param(parent))
            .response("200", enveloped("200", resource.read))
            .build(),
    )
}

fn composite_details(resource: &ResourceDoc, param: &str) -> PathItem {
    PathItem::new(
        HttpMethod::Get,
        OperationBuilder::new()
            .tag(resource.tag)
            .operation_id(Some(format!("{}_details", resource.id)))
            .summary(Some(format!(
                "Fetch one {} merged with its child rows",
                resource.name
            )))
            .parameter(uuid_param(param))
            .response("200", enveloped("200", resource.read))
            .response("404", error_response("No such row"))
            .response("502", error_response("Internal sub-request failed"))
            .build(),
    )
}

fn uuid_param(name: &str) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Uuid))),
        ))
        .build()
}

fn schema_content(schema_name: &str) -> utoipa::openapi::Content {
    ContentBuilder::new()
        .schema(Some(Ref::from_schema_name(schema_name)))
        .build()
}

fn enveloped(status: &str, read_schema: &str) -> Response {
    ResponseBuilder::new()
        .description(format!(
            "{status} envelope; `data` holds {read_schema} row(s)"
        ))
        .content("application/json", schema_content(read_schema))
        .build()
}

fn error_response(description: &str) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", schema_content("ErrorResponse"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_crud_route() {
        let doc = ApiDoc::openapi();
        for resource in RESOURCES {
            assert!(doc.paths.paths.contains_key(resource.path), "{}", resource.path);
            assert!(doc
                .paths
                .paths
                .contains_key(&format!("{}/{{uuid}}", resource.path)));
        }
        assert!(doc
            .paths
            .paths
            .contains_key("/hr/configuration/details/{configuration_uuid}"));
        assert!(doc
            .paths
            .paths
            .contains_key("/work/order/by/{info_uuid}"));
    }

    #[test]
    fn schemas_registered_for_envelope_and_errors() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("\"Toast\""));
        assert!(json.contains("\"ErrorResponse\""));
        assert!(json.contains("\"WorkOrderRead\""));
    }
}
