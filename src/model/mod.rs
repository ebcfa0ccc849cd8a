/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

/// Login request and response types
pub mod auth;
/// Request description, response payload and the raw HTTP exchange
pub mod http;
/// Key-case translation and JSON to resource hydration
pub mod hydrate;
/// Paginated collections
pub mod list;
/// Generic hydrated resource and the `resource_kind!` macro
pub mod resource;
