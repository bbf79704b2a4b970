mod compiler;

pub use compiler::{Compiler, CompilerExit, CompilerInvocation};
