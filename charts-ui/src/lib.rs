//! charts-ui - View components for the charts front end
//!
//! Pure view components: they render data handed to them through props and
//! keep no state beyond local hover flags. Fetching lives in charts-core and
//! is wired up by charts-web.

pub mod components;

pub use components::*;
