use cross_cloud_sync_lambda::adapters::connector::CloudStoreConnector;
use cross_cloud_sync_lambda::adapters::invocation_log::InvocationLog;
use cross_cloud_sync_lambda::handlers::entry::handle_sync_event;
use cross_cloud_sync_lambda::runtime::contract::ResponseEnvelope;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let LambdaEvent { payload, context } = event;
    let log = InvocationLog::stderr("sync_handler").with_request_id(context.request_id);

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let connector = CloudStoreConnector::new(aws_config);

    Ok(handle_sync_event(
        &payload,
        &|name: &str| std::env::var(name).ok(),
        &connector,
        &log,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
