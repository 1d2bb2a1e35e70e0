//! Board commands

mod mv;

pub use mv::MoveBoard;
