//! Request routing and JSON handlers.

use std::io::Cursor;

use serde::{Deserialize, Serialize};
use tiny_http::{Header, Response, StatusCode};
use tracing::{debug, error};

use super::{App, ui};
use crate::core::{PackMap, calculate_packs_with, calculate_packs_with_provider, save_pack_sizes};
use crate::error::{ErrorCode, PackError, Result};

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";

/// A response ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: String,
}

impl Reply {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: Some(JSON),
                body,
            },
            Err(err) => Self::error(&PackError::Json(err)),
        }
    }

    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: Some(HTML),
            body,
        }
    }

    pub const fn no_content() -> Self {
        Self {
            status: 204,
            content_type: None,
            body: String::new(),
        }
    }

    pub fn not_found() -> Self {
        Self::json(
            404,
            &ErrorBody {
                error: "not found".to_string(),
                code: None,
            },
        )
    }

    pub fn payload_too_large(limit: u64) -> Self {
        Self::json(
            413,
            &ErrorBody {
                error: format!("request body too large (limit {limit} bytes)"),
                code: Some(ErrorCode::InvalidArgument),
            },
        )
    }

    pub fn bad_request(message: &str) -> Self {
        Self::json(
            400,
            &ErrorBody {
                error: message.to_string(),
                code: Some(ErrorCode::InvalidArgument),
            },
        )
    }

    /// 400 for caller mistakes, 500 for everything else.
    pub fn error(err: &PackError) -> Self {
        let code = err.code();
        let body = ErrorBody {
            error: err.to_string(),
            code: Some(code),
        };
        Self {
            status: code.http_status(),
            content_type: Some(JSON),
            body: serde_json::to_string(&body)
                .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string()),
        }
    }

    pub fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let mut response =
            Response::from_data(self.body.into_bytes()).with_status_code(StatusCode(self.status));
        if let Some(content_type) = self.content_type
            && let Ok(header) = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes())
        {
            response.add_header(header);
        }
        response
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

#[derive(Debug, Deserialize)]
struct CalculateRequestV1 {
    sizes: Vec<i64>,
    order: i64,
}

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    order: i64,
}

#[derive(Debug, Deserialize)]
struct StoreSizesRequest {
    sizes: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct PacksBody<'a> {
    packs: &'a PackMap,
}

#[derive(Debug, Serialize)]
struct PacksWithSizesBody<'a> {
    packs: &'a PackMap,
    sizes: &'a [i64],
}

#[derive(Debug, Serialize)]
struct SizesBody<'a> {
    sizes: &'a [i64],
}

/// Dispatch one request. `path` excludes the query string.
pub fn route(app: &App, method: &str, path: &str, body: &str) -> Reply {
    let result = match (method, path) {
        ("GET", "/") => index(app),
        ("POST", "/api/v1/calculate-packs") => calculate_v1(app, body),
        ("POST", "/api/v2/calculate-packs") => calculate(app, body),
        ("GET", "/api/v2/pack-sizes") => list_sizes(app),
        ("PUT" | "POST", "/api/v2/pack-sizes") => store_sizes(app, body),
        _ => return Reply::not_found(),
    };

    result.unwrap_or_else(|err| {
        let reply = Reply::error(&err);
        if reply.status >= 500 {
            error!(method, path, error = %err, "request failed");
        } else {
            debug!(method, path, error = %err, "request rejected");
        }
        reply
    })
}

fn index(app: &App) -> Result<Reply> {
    let mut sizes = app.provider().pack_sizes()?;
    sizes.sort_unstable();
    Ok(Reply::html(ui::render_index(&sizes, app.default_order())))
}

fn calculate_v1(app: &App, body: &str) -> Result<Reply> {
    let request: CalculateRequestV1 = serde_json::from_str(body)?;
    let solved = calculate_packs_with(&request.sizes, request.order, app.options())?;
    Ok(Reply::json(200, &PacksBody {
        packs: &solved.packs,
    }))
}

fn calculate(app: &App, body: &str) -> Result<Reply> {
    let request: CalculateRequest = serde_json::from_str(body)?;
    let (solved, sizes) = calculate_packs_with_provider(app.provider(), request.order, app.options())?;
    Ok(Reply::json(200, &PacksWithSizesBody {
        packs: &solved.packs,
        sizes: &sizes,
    }))
}

fn list_sizes(app: &App) -> Result<Reply> {
    let mut sizes = app.provider().pack_sizes()?;
    sizes.sort_unstable();
    Ok(Reply::json(200, &SizesBody { sizes: &sizes }))
}

fn store_sizes(app: &App, body: &str) -> Result<Reply> {
    let request: StoreSizesRequest = serde_json::from_str(body)?;
    save_pack_sizes(app.provider(), &request.sizes)?;
    Ok(Reply::no_content())
}
