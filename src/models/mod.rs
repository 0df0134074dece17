pub mod batch;
pub mod period;
pub mod procedures;
pub mod states;

pub use batch::*;
pub use period::*;
pub use procedures::*;
pub use states::*;
