//! Role gate — declarative per-route allow-lists.
//!
//! Each route names the roles permitted to call it; the gate runs as a
//! `route_layer` after the bearer middleware has resolved the caller's
//! [`Identity`]. Coordinator is a virtual entry: coordinator-ship is a
//! per-class-group relationship, not a global role, so a faculty caller
//! is passed through to the handler, whose membership lookup decides.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use campus_core::ServiceError;

use crate::model::{Identity, Role};

/// Vocabulary for route allow-lists: the five real roles plus the
/// virtual program-coordinator entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRole {
    Student,
    Faculty,
    Hod,
    Principal,
    Admin,
    /// Virtual: admits faculty conditionally (see [`GateOutcome::Defer`]).
    Coordinator,
}

impl GateRole {
    /// Whether this entry admits the given real role outright.
    fn admits(&self, role: Role) -> bool {
        match self {
            GateRole::Student => role == Role::Student,
            GateRole::Faculty => role == Role::Faculty,
            GateRole::Hod => role == Role::Hod,
            GateRole::Principal => role == Role::Principal,
            GateRole::Admin => role == Role::Admin,
            GateRole::Coordinator => false,
        }
    }
}

/// Verdict of a role gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Role is in the allow-list; continue.
    Allow,
    /// Allow-list names Coordinator and the caller is faculty: continue,
    /// the handler's membership lookup makes the final call.
    Defer,
    /// Role not admitted; 403 with the reason.
    Deny(String),
}

/// A fixed allow-list, built at route-registration time.
#[derive(Debug, Clone, Copy)]
pub struct RoleGate {
    allowed: &'static [GateRole],
}

impl RoleGate {
    pub const fn new(allowed: &'static [GateRole]) -> Self {
        Self { allowed }
    }

    /// Evaluate the caller's role against the allow-list. Pure; no side
    /// effects.
    pub fn evaluate(&self, role: Role) -> GateOutcome {
        if self.allowed.iter().any(|g| g.admits(role)) {
            return GateOutcome::Allow;
        }
        if self.allowed.contains(&GateRole::Coordinator) && role == Role::Faculty {
            return GateOutcome::Defer;
        }
        GateOutcome::Deny(format!(
            "Role ({role}) is not allowed to access this resource"
        ))
    }
}

/// Middleware body for `route_layer(middleware::from_fn(...))`. Reads
/// the resolved identity from request extensions; the bearer middleware
/// must have run first.
pub async fn require(
    allowed: &'static [GateRole],
    req: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let identity = req
        .extensions()
        .get::<Identity>()
        .ok_or_else(|| ServiceError::Unauthorized("Authentication required".into()))?;

    match RoleGate::new(allowed).evaluate(identity.role) {
        GateOutcome::Allow | GateOutcome::Defer => Ok(next.run(req).await),
        GateOutcome::Deny(reason) => Err(ServiceError::PermissionDenied(reason)),
    }
}
