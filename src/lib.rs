pub mod agent;
pub mod coordinator;
pub(crate) mod error;
pub mod game;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        coordinator::*,
        error::{Error, Kind, Result},
        game::*,
    };
}
