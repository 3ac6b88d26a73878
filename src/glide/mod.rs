//! Glide-core dispatch adapter
//!
//! Translates [`RouteDirective`](crate::route::RouteDirective)s into
//! glide-core routing info and sends commands along them. Slot hashing,
//! topology tracking and redirects stay inside glide.

#[cfg(feature = "glide")]
mod client;
#[cfg(feature = "glide")]
mod routing;

#[cfg(feature = "glide")]
pub use client::RoutedClient;
#[cfg(feature = "glide")]
pub use routing::to_routing_info;
