use axum::Router;

/// A portal module that contributes HTTP routes.
///
/// Each business module (auth, groups, comms, coursework) implements this
/// trait to register its API endpoints. The binary entry point collects all
/// modules and merges their routes under the `/api/v1` prefix.
pub trait Module: Send + Sync {
    /// Module name, used for logging.
    fn name(&self) -> &str;

    /// Return the module's routes, relative to the API prefix.
    fn routes(&self) -> Router;
}
