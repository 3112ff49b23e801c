use tracing::error;
use uuid::Uuid;

/// A request that ended in a server error.
#[derive(Debug, Clone, Copy)]
pub struct FailedRequest<'a> {
    pub request_id: &'a str,
    pub method: &'a str,
    pub path: &'a str,
    pub status: u16,
}

/// Logs an error-tracking event for an unexpected 5xx and returns its id.
/// Returns `None` for any other status.
pub fn capture_unexpected_5xx(request: FailedRequest<'_>) -> Option<Uuid> {
    if !(500..=599).contains(&request.status) {
        return None;
    }

    let event_id = Uuid::new_v4();
    error!(
        tracking_backend = "log",
        event_id = %event_id,
        request_id = %request.request_id,
        method = %request.method,
        path = %request.path,
        status = request.status,
        "unexpected server error captured"
    );
    Some(event_id)
}
