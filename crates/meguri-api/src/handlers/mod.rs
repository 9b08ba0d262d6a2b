mod geocode;
mod health;
mod route;

pub use geocode::handle_geocode;
pub use health::health_check;
pub use route::handle_route;
