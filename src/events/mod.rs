pub mod pointer;
pub mod reveal;
pub mod scroll;
