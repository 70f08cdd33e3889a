use service_core::error::AppError;

/// Ownership guard run before every mutating service call: only the user
/// who created a resource may update or delete it.
pub fn ensure_owner(resource_owner_id: &str, caller_id: &str) -> Result<(), AppError> {
    if resource_owner_id != caller_id {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Only the owner may modify this resource"
        )));
    }
    Ok(())
}
