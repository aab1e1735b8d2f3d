//! Group-scoped access decisions.
//!
//! Two layers work together with the route-level role gates: `has_access`
//! answers "does this identity hold a qualifying relationship to this
//! group document", and `authorize_group_operation` wraps it with the
//! admin exclusion and request-field validation that the messaging
//! surface applies before touching the store.

use campus_auth::model::{Identity, Role};
use campus_store::docs;

use crate::model::{ClassGroup, CourseGroup, Department, GroupKind};
use crate::service::{GroupsError, GroupsService};

/// Which messaging operation is being authorized. Only the denial
/// wording differs between the two.
#[derive(Debug, Clone, Copy)]
pub enum GroupOp {
    Send { has_content: bool },
    Read,
}

impl GroupOp {
    fn admin_denial(self) -> &'static str {
        match self {
            GroupOp::Send { .. } => "Admin users are not allowed to send messages",
            GroupOp::Read => "Admin users are not allowed to read messages",
        }
    }

    fn fields_denial(self) -> &'static str {
        match self {
            GroupOp::Send { .. } => "Please provide groupType, groupId and content",
            GroupOp::Read => "Please provide groupType and groupId",
        }
    }

    fn membership_denial(self) -> &'static str {
        match self {
            GroupOp::Send { .. } => "You do not have permission to send messages in this group",
            GroupOp::Read => "You do not have permission to read messages from this group",
        }
    }
}

impl GroupsService {
    /// Membership verdict for one identity against one group document.
    ///
    /// Admin identities have zero visibility into any group regardless
    /// of membership. A group id that does not resolve yields
    /// `Ok(false)`, never an error, so this surface cannot be used to
    /// probe which groups exist. Exactly one document fetch per call.
    pub fn has_access(
        &self,
        identity: &Identity,
        kind: GroupKind,
        group_id: &str,
    ) -> Result<bool, GroupsError> {
        if identity.role == Role::Admin {
            return Ok(false);
        }
        let id = identity.id.as_str();
        let allowed = match kind {
            GroupKind::Department => {
                let Some(dept) =
                    docs::get_doc::<Department>(self.store.as_ref(), "departments", group_id)?
                else {
                    return Ok(false);
                };
                match identity.role {
                    Role::Hod => dept.hod.as_deref() == Some(id),
                    Role::Faculty => dept.faculties.iter().any(|m| m == id),
                    Role::Student => dept.students.iter().any(|m| m == id),
                    _ => false,
                }
            }
            GroupKind::ClassGroup => {
                let Some(class) =
                    docs::get_doc::<ClassGroup>(self.store.as_ref(), "class_groups", group_id)?
                else {
                    return Ok(false);
                };
                // Tutor and coordinator are matched by id alone, whatever
                // role the holder happens to carry.
                class.program_coordinator.as_deref() == Some(id)
                    || class.tutor.as_deref() == Some(id)
                    || (identity.role == Role::Student && class.students.iter().any(|m| m == id))
            }
            GroupKind::CourseGroup => {
                let Some(course) =
                    docs::get_doc::<CourseGroup>(self.store.as_ref(), "course_groups", group_id)?
                else {
                    return Ok(false);
                };
                course.faculty.as_deref() == Some(id)
                    || (identity.role == Role::Student && course.students.iter().any(|m| m == id))
            }
        };
        Ok(allowed)
    }

    /// Aggregate verdict for the messaging surface, short-circuiting on
    /// the first failure.
    ///
    /// The ordering is part of the contract: the admin exclusion fires
    /// before field validation, which fires before the membership
    /// lookup. An unrecognised group type takes the membership-denial
    /// path, same as a group the caller cannot see.
    ///
    /// Empty strings count as missing fields.
    pub fn authorize_group_operation(
        &self,
        identity: &Identity,
        op: GroupOp,
        group_type: Option<&str>,
        group_id: Option<&str>,
    ) -> Result<(GroupKind, String), GroupsError> {
        if identity.role == Role::Admin {
            return Err(GroupsError::Forbidden(op.admin_denial().into()));
        }

        let group_type = group_type.filter(|s| !s.is_empty());
        let group_id = group_id.filter(|s| !s.is_empty());
        let (Some(group_type), Some(group_id)) = (group_type, group_id) else {
            return Err(GroupsError::Validation(op.fields_denial().into()));
        };
        if matches!(op, GroupOp::Send { has_content: false }) {
            return Err(GroupsError::Validation(op.fields_denial().into()));
        }

        let Ok(kind) = group_type.parse::<GroupKind>() else {
            return Err(GroupsError::Forbidden(op.membership_denial().into()));
        };
        if !self.has_access(identity, kind, group_id)? {
            return Err(GroupsError::Forbidden(op.membership_denial().into()));
        }
        Ok((kind, group_id.to_string()))
    }
}
