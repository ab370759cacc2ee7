// tests/support/mocks/navigation.rs
use reservafacil_front::application::views::{Navigator, Route};

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<Route>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.visited.push(route);
    }
}
