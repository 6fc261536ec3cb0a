//! HTTP status code to user-facing message table.

/// Shown when neither the table nor the caller has a message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to submit the form.";

/// Look up the message for an HTTP status code.
pub fn message(code: u16) -> Option<&'static str> {
    let message = match code {
        400 => "Bad request. Check the submitted data.",
        401 => "Unauthorized. Please sign in.",
        402 => "Payment is required to complete the request.",
        403 => "Access denied. You do not have permission for this action.",
        404 => "Resource not found. Check that the URL is correct.",
        405 => "Method not allowed. Try a different request method.",
        406 => "Not acceptable. The server cannot produce a matching response.",
        407 => "Proxy authentication required.",
        408 => "The server timed out waiting for the request.",
        409 => "Conflict. The data was probably changed by another user.",
        410 => "The resource has been permanently removed.",
        411 => "The required Content-Length header is missing.",
        412 => "Precondition failed.",
        413 => "The request is too large.",
        414 => "The URI is too long.",
        415 => "Unsupported media type.",
        416 => "Requested range not satisfiable.",
        417 => "Expectation failed.",
        418 => "I'm a teapot.",
        422 => "Validation error. Check the entered data.",
        423 => "The resource is locked.",
        424 => "Failed dependency. The operation cannot be completed.",
        429 => "Too many requests. Please try again later.",
        500 => "Internal server error. Please try again later.",
        501 => "Not implemented on the server.",
        502 => "Bad gateway. The server received an invalid upstream response.",
        503 => "Service temporarily unavailable. Reload the page later.",
        504 => "Gateway timeout. The upstream server did not respond in time.",
        505 => "HTTP version not supported.",
        507 => "Insufficient storage on the server.",
        508 => "Loop detected.",
        511 => "Network authentication required.",
        _ => return None,
    };
    Some(message)
}

/// Message for `code`, else `fallback`, else [`DEFAULT_ERROR_MESSAGE`].
pub fn message_for<'a>(code: u16, fallback: Option<&'a str>) -> &'a str {
    message(code)
        .or(fallback.filter(|f| !f.is_empty()))
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
}
