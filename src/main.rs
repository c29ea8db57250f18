mod setup;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::{build_schema, EmployeeSchema};
use repositories::EmployeeRepository;
use services::FormConfig;
use setup::{init_tracing, ServerConfig};
use tracing_actix_web::TracingLogger;

async fn index() -> &'static str {
    "Hello, employee manager!"
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(schema: web::Data<EmployeeSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let form_config = FormConfig::from_env();
    tracing::info!(
        address = %config.bind_address(),
        email_domain = %form_config.required_email_domain,
        "starting employee manager"
    );

    // Build the Schema
    let schema = build_schema(EmployeeRepository::new(), form_config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(schema.clone()))
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .route("/", web::get().to(index))
            .route("/graphql", web::post().to(graphql_request))
            .route("/graphql", web::get().to(graphql_playground))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
