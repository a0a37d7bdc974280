//! Browser infrastructure module

mod system;

pub use system::SystemBrowser;
