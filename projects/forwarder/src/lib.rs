//! Media feed forwarders
//!
//! - Shared REST route in `endpoints/`, mounted by both binaries
//! - GraphQL schema over the same upstream fetch in `graphql/`
//! - Configured from the environment, see `config`

pub mod config;
pub mod endpoints;
pub mod error;
pub mod graphql;
pub mod routes;
pub mod server;
pub mod state;
