pub mod http;

#[cfg(feature = "amazon")]
pub mod amazon;
#[cfg(feature = "amazon")]
pub mod aws_auth;
#[cfg(feature = "google-api")]
pub mod google_api;
#[cfg(feature = "google-web")]
pub mod google_web;
