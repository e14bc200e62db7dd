pub mod hub_auth;

pub use hub_auth::HubAuth;
