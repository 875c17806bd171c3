use aws_smithy_runtime_api::box_error::BoxError;
use aws_smithy_runtime_api::client::interceptors::context::BeforeTransmitInterceptorContextRef;
use aws_smithy_runtime_api::client::interceptors::Intercept;
use aws_smithy_runtime_api::client::runtime_components::RuntimeComponents;
use aws_smithy_types::config_bag::ConfigBag;
use tracing::debug;

/// Logs the URL of every request just before it is handed to the transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestTrace;

impl Intercept for RequestTrace {
    fn name(&self) -> &'static str {
        "RequestTrace"
    }

    fn read_before_transmit(
        &self,
        context: &BeforeTransmitInterceptorContextRef<'_>,
        _runtime_components: &RuntimeComponents,
        _cfg: &mut ConfigBag,
    ) -> Result<(), BoxError> {
        debug!("Request URL: {}", context.request().uri());
        Ok(())
    }
}
