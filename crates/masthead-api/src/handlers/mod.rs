//! Request handlers
//!
//! One module per resource, mirroring the route table in
//! [`crate::server::ApiServer`]. The payload structs here define the
//! request body shapes frontends serialize.

pub mod articles;
pub mod members;
pub mod organizations;
