//! Session state and route-level authorization
//!
//! Routes under the dashboard require an active session; role-scoped
//! routes additionally require the session's role to be in an allow-list,
//! else the screen redirects back to the dashboard with a notification.

use shared::models::{User, UserRole};

/// Client-visible routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Dashboard,
    ManageUser,
    TableManagement,
    MenuCustom,
    QuickOrder,
}

/// What a route demands from the session
enum Gate {
    Public,
    Authenticated,
    Roles(&'static [UserRole]),
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::ManageUser => "/dashboard/manage-user",
            Self::TableManagement => "/dashboard/table-management",
            Self::MenuCustom => "/dashboard/menu-custom",
            Self::QuickOrder => "/dashboard/quick-order",
        }
    }

    fn gate(&self) -> Gate {
        use UserRole::*;
        match self {
            Self::Home | Self::Login | Self::Signup => Gate::Public,
            Self::Dashboard => Gate::Authenticated,
            Self::ManageUser => Gate::Roles(&[Admin, Manager]),
            Self::TableManagement => Gate::Roles(&[Admin, Manager, OrderManager]),
            Self::MenuCustom => Gate::Roles(&[Admin, Manager, KitchenManager]),
            Self::QuickOrder => Gate::Roles(&[Admin, Manager, OrderManager]),
        }
    }
}

/// Authorization outcome for a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// No active session: redirect to /login
    RedirectLogin,
    /// Session exists but the role is not allowed: redirect to /dashboard
    RedirectDashboard,
}

/// Current session, if any
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the authenticated user after sign-in or session fetch
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Decide whether the session may enter a route
    pub fn authorize(&self, route: Route) -> Access {
        match route.gate() {
            Gate::Public => Access::Granted,
            Gate::Authenticated => {
                if self.is_authenticated() {
                    Access::Granted
                } else {
                    Access::RedirectLogin
                }
            }
            Gate::Roles(allowed) => match self.role() {
                None => Access::RedirectLogin,
                Some(role) if allowed.contains(&role) => Access::Granted,
                Some(_) => Access::RedirectDashboard,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: "u1".to_string(),
            name: "Staff".to_string(),
            email: "staff@example.com".to_string(),
            role,
            is_verified: true,
        }
    }

    #[test]
    fn test_public_routes_never_redirect() {
        let session = Session::new();
        for route in [Route::Home, Route::Login, Route::Signup] {
            assert_eq!(session.authorize(route), Access::Granted);
        }
    }

    #[test]
    fn test_dashboard_requires_session() {
        let mut session = Session::new();
        assert_eq!(session.authorize(Route::Dashboard), Access::RedirectLogin);
        session.sign_in(user(UserRole::Customer));
        assert_eq!(session.authorize(Route::Dashboard), Access::Granted);
    }

    #[test]
    fn test_role_scoped_route_redirects_to_dashboard() {
        let mut session = Session::new();
        session.sign_in(user(UserRole::KitchenManager));
        assert_eq!(session.authorize(Route::MenuCustom), Access::Granted);
        assert_eq!(
            session.authorize(Route::QuickOrder),
            Access::RedirectDashboard
        );
        assert_eq!(
            session.authorize(Route::ManageUser),
            Access::RedirectDashboard
        );
    }

    #[test]
    fn test_admin_passes_every_gate() {
        let mut session = Session::new();
        session.sign_in(user(UserRole::Admin));
        for route in [
            Route::Dashboard,
            Route::ManageUser,
            Route::TableManagement,
            Route::MenuCustom,
            Route::QuickOrder,
        ] {
            assert_eq!(session.authorize(route), Access::Granted);
        }
    }

    #[test]
    fn test_sign_out_drops_access() {
        let mut session = Session::new();
        session.sign_in(user(UserRole::Manager));
        session.sign_out();
        assert_eq!(
            session.authorize(Route::TableManagement),
            Access::RedirectLogin
        );
        assert!(session.role().is_none());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::QuickOrder.path(), "/dashboard/quick-order");
        assert_eq!(Route::Home.path(), "/");
    }
}
