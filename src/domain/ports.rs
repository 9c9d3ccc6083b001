use crate::client::AioClient;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Receives each framed request dump produced by the capture server.
pub trait DumpSink: Send + Sync {
    fn emit(&self, framed_dump: &[u8]);
}

/// One API operation run against a (redirected) client.
#[async_trait]
pub trait ApiCall: Send + Sync {
    fn name(&self) -> &str;
    async fn invoke(&self, client: &mut AioClient) -> Result<()>;
}
