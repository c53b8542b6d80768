//! Authorization policy: the single role-to-permission mapping
//!
//! Every role-gated handler goes through [`allowed`] rather than checking
//! role names inline, so the permission table lives in exactly one place.

use crate::models::Role;

/// The fixed action set governing mutating operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create and edit one's own posts
    WritePostOwn,
    /// Edit or delete any post
    WritePostAny,
    /// Create, update and deactivate categories
    WriteCategory,
    /// Approve, reject, edit and delete any comment
    ModerateComment,
    /// List, update, delete, activate and deactivate accounts
    ManageUser,
}

/// Pure role/action permission check
pub fn allowed(role: Role, action: Action) -> bool {
    match role {
        Role::Admin => true,
        Role::Editor => matches!(
            action,
            Action::WritePostAny | Action::WriteCategory | Action::ModerateComment
        ),
        Role::User => matches!(action, Action::WritePostOwn),
    }
}

/// Ownership check: the "any" variant of the action, or being the owner.
/// `owner` is None for resources without an owner (anonymous comments).
pub fn allowed_on_owned(role: Role, any_action: Action, actor_id: i64, owner: Option<i64>) -> bool {
    allowed(role, any_action) || owner == Some(actor_id)
}
