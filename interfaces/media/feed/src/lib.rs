//! Client for the upstream user media endpoint (`{base}/{username}/media`).

pub mod index;
