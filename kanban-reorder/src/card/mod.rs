//! Card commands

mod mv;

pub use mv::MoveCard;
