//! Battle engine

mod attack;
mod battle;

pub use attack::TeamHandle;
pub use battle::Battle;
