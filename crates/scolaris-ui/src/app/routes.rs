//! Routing definitions for the Scolaris UI.
use crate::core::routing::Destination;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/student-dashboard")]
    StudentDashboard,
    #[at("/teacher-dashboard")]
    TeacherDashboard,
    #[at("/director-dashboard")]
    DirectorDashboard,
    #[at("/admin-dashboard")]
    AdminDashboard,
    #[at("/dashboard")]
    Dashboard,
    #[at("/change-password")]
    ChangePassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Self::Home,
            Destination::Login => Self::Login,
            Destination::StudentDashboard => Self::StudentDashboard,
            Destination::TeacherDashboard => Self::TeacherDashboard,
            Destination::DirectorDashboard => Self::DirectorDashboard,
            Destination::AdminDashboard => Self::AdminDashboard,
            Destination::Dashboard => Self::Dashboard,
            Destination::ChangePassword => Self::ChangePassword,
        }
    }
}
