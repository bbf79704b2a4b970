mod assets;
mod compiler_process;
mod sources;

pub use assets::copy_tree;
pub use compiler_process::ProcessCompiler;
pub use sources::enumerate_sources;
