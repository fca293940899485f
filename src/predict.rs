//! Client for the backend risk decision service.

pub mod api;
pub mod form;
