use crate::error;
use http_body_util::Full;
use hyper::{
    body::Bytes,
    header::{HeaderValue, ALLOW, CONTENT_TYPE},
    Response, StatusCode,
};
use serde::Serialize;

pub type JsonResponse = Response<Full<Bytes>>;

pub fn respond<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> error::Result<JsonResponse> {
    let bytes = serde_json::to_vec(value).map_err(|err| {
        log::error!("cannot serialize response: {err}");
        error::Error::Fatal
    })?;

    let mut res = Response::new(Full::new(Bytes::from(bytes)));
    *res.status_mut() = status;
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json")).is_none());
    Ok(res)
}

pub fn ok<T: Serialize + ?Sized>(value: &T) -> error::Result<JsonResponse> {
    respond(StatusCode::OK, value)
}

/// Renders the error as `{ "error": ... }` with its matching status code.
pub fn error(err: error::Error, allow: Option<&'static str>) -> JsonResponse {
    use alloc::string::ToString;
    let body = serde_json::json!({ "error": err.to_string() });
    let mut res = match respond(err.status(), &body) {
        Ok(res) => res,
        Err(_) => {
            let mut res = Response::new(Full::new(Bytes::new()));
            *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            return res;
        }
    };

    if let Some(methods) = allow {
        res.headers_mut().insert(ALLOW, HeaderValue::from_static(methods));
    }

    res
}
