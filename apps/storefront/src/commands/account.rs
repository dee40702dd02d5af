//! # Account Commands
//!
//! Profile and order history for the signed-in user, plus the role checks
//! the admin commands share.

use tracing::{debug, info, warn};

use paintshop_core::validation::validate_user_profile;
use paintshop_core::{Order, OrderStatus, UserProfile};

use crate::error::ApiError;
use crate::state::DataState;

/// Profile of a signed-in user.
///
/// ## Errors
/// `UNAUTHORIZED` when the id is unknown.
pub fn require_user(data: &DataState, user_id: &str) -> Result<UserProfile, ApiError> {
    data.users()
        .get(user_id)?
        .ok_or_else(|| ApiError::unauthorized("Sign in to continue"))
}

/// Profile of a signed-in admin.
///
/// ## Errors
/// `UNAUTHORIZED` for an unknown id, `FORBIDDEN` without the admin flag.
pub fn require_admin(data: &DataState, user_id: &str) -> Result<UserProfile, ApiError> {
    let user = require_user(data, user_id)?;
    if !user.is_admin {
        warn!(user_id = %user_id, "Admin operation refused");
        return Err(ApiError::forbidden("Administrator access required"));
    }
    Ok(user)
}

pub fn get_profile(data: &DataState, user_id: &str) -> Result<UserProfile, ApiError> {
    debug!(user_id = %user_id, "get_profile command");
    require_user(data, user_id)
}

/// Saves the account form.
///
/// Users edit only their own profile and cannot change their role.
pub fn update_profile(
    data: &DataState,
    user_id: &str,
    profile: UserProfile,
) -> Result<UserProfile, ApiError> {
    debug!(user_id = %user_id, "update_profile command");

    let current = require_user(data, user_id)?;
    if profile.id != current.id {
        return Err(ApiError::forbidden("Cannot edit another user's profile"));
    }
    validate_user_profile(&profile)?;

    let saved = data.users().upsert(UserProfile {
        is_admin: current.is_admin,
        ..profile
    })?;
    Ok(saved)
}

/// Orders of the signed-in user.
pub fn list_orders(data: &DataState, user_id: &str) -> Result<Vec<Order>, ApiError> {
    debug!(user_id = %user_id, "list_orders command");
    let user = require_user(data, user_id)?;
    Ok(data.orders().list_for_user(&user.id)?)
}

/// Moves an order along pending → processing → shipped → delivered (admin).
pub fn update_order_status(
    data: &DataState,
    admin_id: &str,
    order_id: &str,
    status: OrderStatus,
) -> Result<Order, ApiError> {
    require_admin(data, admin_id)?;
    let order = data.orders().update_status(order_id, status)?;
    info!(order_id = %order_id, ?status, "Order status updated");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{app, ADMIN_ID, SHOPPER_ID};
    use crate::error::ErrorCode;

    #[test]
    fn test_role_checks() {
        let app = app();

        assert!(require_admin(&app.data, ADMIN_ID).is_ok());
        assert_eq!(
            require_admin(&app.data, SHOPPER_ID).unwrap_err().code,
            ErrorCode::Forbidden
        );
        assert_eq!(
            require_user(&app.data, "nobody").unwrap_err().code,
            ErrorCode::Unauthorized
        );
    }

    #[test]
    fn test_update_profile_keeps_role() {
        let app = app();
        let mut profile = get_profile(&app.data, SHOPPER_ID).unwrap();
        profile.name = "Иван Петров".to_string();
        profile.is_admin = true;

        let saved = update_profile(&app.data, SHOPPER_ID, profile).unwrap();
        assert_eq!(saved.name, "Иван Петров");
        assert!(!saved.is_admin);
    }

    #[test]
    fn test_update_profile_validates() {
        let app = app();
        let mut profile = get_profile(&app.data, SHOPPER_ID).unwrap();
        profile.email = "not-an-email".to_string();

        let err = update_profile(&app.data, SHOPPER_ID, profile).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_cannot_edit_other_profile() {
        let app = app();
        let profile = get_profile(&app.data, ADMIN_ID).unwrap();

        let err = update_profile(&app.data, SHOPPER_ID, profile).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn test_unknown_order_status_update() {
        let app = app();
        let err = update_order_status(&app.data, ADMIN_ID, "missing", OrderStatus::Shipped)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
