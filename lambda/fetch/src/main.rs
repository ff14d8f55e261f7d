use lambda_http::{run, service_fn, tracing, Error};
use products::{Config, DynamoDbProductRepository};
mod http_handler;
use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let settings = Config::from_env()?;
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&config);
    let repository = DynamoDbProductRepository::new(client, settings.table_name);

    run(service_fn(|event| function_handler(&repository, event))).await
}
