//! Convenient prelude: import the most commonly used traits, types, and
//! functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use hivp::prelude::*;
//! ```

pub use crate::{
    Float,
    error::Error,
    event::Event,
    io::write_trajectory_csv,
    model::Izhikevich,
    ode::ODE,
    settings::Settings,
    simulate::simulate,
    status::Status,
    trajectory::Trajectory,
};
