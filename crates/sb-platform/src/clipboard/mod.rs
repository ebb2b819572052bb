mod memory;
mod system;

pub use memory::InMemoryClipboard;
pub use system::SystemClipboard;
