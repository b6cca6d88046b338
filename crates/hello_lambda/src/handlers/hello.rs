use hello_core::contract::{build_hello_response, ResponseEnvelope};
use lambda_runtime::{tracing, Context, Error, LambdaEvent};
use serde_json::Value;

/// Maps an invocation to its response envelope. The context is accepted to
/// match the platform signature and never affects the output.
pub fn handle_hello_event(event: Value, _context: &Context) -> Result<ResponseEnvelope, Error> {
    build_hello_response(&event)
        .map_err(|error| Error::from(format!("failed to build hello response: {error}")))
}

pub async fn handle_request(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "handling hello invocation");

    handle_hello_event(payload, &context)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn context_with_request_id(request_id: &str) -> Context {
        let mut context = Context::default();
        context.request_id = request_id.to_string();
        context
    }

    #[test]
    fn wraps_event_in_ok_envelope() {
        let response = handle_hello_event(json!({"a": 1}), &Context::default())
            .expect("handler should succeed");

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(body, json!({"message": "Hello World!!!", "input": {"a": 1}}));
    }

    #[test]
    fn output_does_not_depend_on_context() {
        let event = json!({"b": [1, 2, 3]});

        let first = handle_hello_event(event.clone(), &context_with_request_id("req-1"))
            .expect("first invocation");
        let second = handle_hello_event(event, &context_with_request_id("req-2"))
            .expect("second invocation");

        assert_eq!(first, second);
    }
}
