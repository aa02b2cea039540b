//! Static pages, route resolution and the contact form.

use serde::{Deserialize, Serialize};
use tracing::info;

/// A page the front end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Home,
    Events,
    Contact,
}

impl Route {
    /// Resolve a path; `/home` and anything unknown land on the home page.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/event" => Route::Events,
            "/contact" => Route::Contact,
            _ => Route::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Events => "/event",
            Route::Contact => "/contact",
        }
    }
}

pub const HOME_PAGE: &str = "\
Explore Hackathons & Tech Events

Discover cutting-edge hackathons, coding competitions, and tech events from
top platforms. Join the innovation community and build the future.

  Browse Events  ->  /event
  Learn More     ->  /contact

  500+  Active Events
  50K+  Participants
  100+  Partners
";

pub const CONTACT_PAGE: &str = "\
Contact Us

We'd love to hear from you! Send us a message and we'll respond as soon as possible.

Send a message with:
  hackscope contact --name <NAME> --email <EMAIL> --message <MESSAGE>

Visit Us   123 Tech Street, Innovation Hub, Nagpur, Maharashtra, India
Email Us   support@eventplus.com
Call Us    +91 123 456 7890 (Mon-Fri, 9AM-6PM IST)

Follow Us  GitHub, Twitter, Instagram, LinkedIn
";

/// Contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Record the submission. Messages are only logged; nothing is sent.
    pub fn submit(&self) {
        info!(
            name = %self.name,
            email = %self.email,
            message = %self.message,
            "contact form submitted"
        );
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/home"), Route::Home);
        assert_eq!(Route::resolve("/event"), Route::Events);
        assert_eq!(Route::resolve("/event/"), Route::Events);
        assert_eq!(Route::resolve("/event?page=2"), Route::Events);
        assert_eq!(Route::resolve("/contact"), Route::Contact);
        assert_eq!(Route::resolve("/events"), Route::Home);
        assert_eq!(Route::resolve("/nowhere/at/all"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
    }

    #[test]
    fn test_route_paths_resolve_to_themselves() {
        for route in [Route::Home, Route::Events, Route::Contact] {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }

    #[test]
    fn test_contact_form_reset() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        form.submit();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
