pub mod block_state;
pub mod litematic;

pub use block_state::BlockState;
pub use litematic::{Litematic, Region};
