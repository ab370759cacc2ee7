// src/application/views/navigation.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Items,
    Register,
    Audit,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Items => "/items",
            Route::Register => "/register",
            Route::Audit => "/auditoria",
        }
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Remembers where a request asked to go so the HTTP layer can redirect there.
#[derive(Debug, Default)]
pub struct PendingNavigation {
    target: Option<Route>,
}

impl PendingNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<Route> {
        self.target
    }
}

impl Navigator for PendingNavigation {
    fn navigate(&mut self, route: Route) {
        if let Some(previous) = self.target.replace(route) {
            tracing::warn!(?previous, ?route, "navigation requested twice; keeping the latest");
        }
    }
}
