//! Wire types shared between the registry backend and its clients.

pub mod model;
pub mod responses;
