//! HTTP request handlers for the keepalive server.

pub mod keepalive;
