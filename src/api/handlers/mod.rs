mod system;
mod view;

pub use system::*;
pub use view::*;
