//! List commands

mod mv;

pub use mv::MoveList;
