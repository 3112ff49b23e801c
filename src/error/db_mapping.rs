use super::app_error::AppError;

pub(super) fn map_database_error(
    code: Option<&str>,
    constraint: Option<&str>,
    message: &str,
) -> Option<AppError> {
    match code {
        Some("23505") => Some(AppError::Conflict(
            conflict_message_from_constraint(constraint).to_string(),
        )),
        Some("23502") => Some(AppError::validation_error(
            required_field_message_from_db(message)
                .unwrap_or_else(|| "required field is missing".to_string()),
        )),
        Some("23514") => Some(AppError::validation_error(
            check_message_from_constraint(constraint),
        )),
        Some("22001") => Some(AppError::validation_error("value is too long")),
        Some("22P02") => Some(AppError::validation_error("invalid input format")),
        Some("08001") | Some("08006") => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Unable to connect to database. Please try again later.".to_string(),
        }),
        Some("53300") => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Service temporarily unavailable. Please try again later.".to_string(),
        }),
        Some("55P03") => Some(AppError::Conflict(
            "Resource is currently locked. Please try again.".to_string(),
        )),
        _ => None,
    }
}

pub(super) fn conflict_message_from_constraint(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("addresses_pkey") => "address already exists",
        Some("addresses_uuid_key") => "address uuid already exists",
        _ => "resource already exists",
    }
}

pub(super) fn check_message_from_constraint(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("addresses_latitude_range") => "latitude must be between -90 and 90",
        Some("addresses_longitude_range") => "longitude must be between -180 and 180",
        Some("addresses_updated_after_created") => "updated_at must not precede created_at",
        _ => "request violates validation rules",
    }
}

pub(super) fn required_field_message_from_db(message: &str) -> Option<String> {
    let marker = "column \"";
    let start = message.find(marker)?;
    let rest = &message[start + marker.len()..];
    let end = rest.find('"')?;
    let field = &rest[..end];
    Some(format!("{field} is required"))
}
