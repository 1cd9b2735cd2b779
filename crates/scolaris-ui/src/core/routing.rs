//! Navigation targets and the role → dashboard table.
//!
//! # Design
//! - Destinations are data; the wasm router maps them onto concrete routes.
//! - The role table is an exhaustive match, so adding a role fails to compile
//!   until it has a dashboard.

use scolaris_api_models::UserRole;

/// Every place the login flow can send the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Public landing page.
    Home,
    /// Login form.
    Login,
    /// Student dashboard.
    StudentDashboard,
    /// Teacher dashboard.
    TeacherDashboard,
    /// Department director dashboard.
    DirectorDashboard,
    /// Administrative staff dashboard.
    AdminDashboard,
    /// Generic dashboard for roles without a dedicated view.
    Dashboard,
    /// Forced password change.
    ChangePassword,
}

impl Destination {
    /// Path for the destination.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::StudentDashboard => "/student-dashboard",
            Self::TeacherDashboard => "/teacher-dashboard",
            Self::DirectorDashboard => "/director-dashboard",
            Self::AdminDashboard => "/admin-dashboard",
            Self::Dashboard => "/dashboard",
            Self::ChangePassword => "/change-password",
        }
    }
}

/// Destination used when the role is missing or unknown.
pub const FALLBACK_DASHBOARD: Destination = Destination::Dashboard;

/// Dashboard for a known role.
#[must_use]
pub const fn dashboard_for(role: UserRole) -> Destination {
    match role {
        UserRole::Student => Destination::StudentDashboard,
        UserRole::Teacher => Destination::TeacherDashboard,
        UserRole::DepartmentDirector => Destination::DirectorDashboard,
        UserRole::Administrative => Destination::AdminDashboard,
    }
}

/// Dashboard for a raw role tag, falling back to [`FALLBACK_DASHBOARD`].
#[must_use]
pub fn destination_for_tag(tag: Option<&str>) -> Destination {
    tag.and_then(UserRole::from_tag)
        .map_or(FALLBACK_DASHBOARD, dashboard_for)
}

/// Navigation state carried to the password-change view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangePasswordState {
    /// Identifier typed on the login form.
    pub identifier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_map_to_their_dashboards() {
        assert_eq!(
            destination_for_tag(Some("etudiant")).path(),
            "/student-dashboard"
        );
        assert_eq!(
            destination_for_tag(Some("enseignant")).path(),
            "/teacher-dashboard"
        );
        assert_eq!(
            destination_for_tag(Some("directeur_departement")).path(),
            "/director-dashboard"
        );
        assert_eq!(
            destination_for_tag(Some("administratif")).path(),
            "/admin-dashboard"
        );
    }

    #[test]
    fn unknown_or_missing_roles_fall_back() {
        assert_eq!(destination_for_tag(None), Destination::Dashboard);
        assert_eq!(destination_for_tag(Some("")), Destination::Dashboard);
        assert_eq!(destination_for_tag(Some("doyen")), Destination::Dashboard);
        assert_eq!(FALLBACK_DASHBOARD.path(), "/dashboard");
    }

    #[test]
    fn every_role_has_a_distinct_dashboard() {
        let mut seen = std::collections::HashSet::new();
        for role in UserRole::all() {
            let destination = dashboard_for(role);
            assert_ne!(destination, FALLBACK_DASHBOARD);
            assert!(seen.insert(destination));
        }
    }
}
