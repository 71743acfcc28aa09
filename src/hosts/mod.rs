pub mod github;
pub mod memory;

pub use github::GithubHost;
pub use memory::MemoryHost;
