use crate::error;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};

/// Largest request body accepted by any endpoint.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Reads the whole body into memory, rejecting payloads over [`MAX_BODY_SIZE`].
pub async fn collect<B>(body: B) -> error::Result<Bytes>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match Limited::new(body, MAX_BODY_SIZE).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => Err(error::Error::TooLarge),
        Err(err) => {
            log::error!("cannot read request body: {err}");
            Err(error::Error::Fatal)
        }
    }
}
