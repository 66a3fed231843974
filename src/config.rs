pub const COMPILER_OUTPUT_FLAG: &str = "-o";

pub const ARTIFACT_PREFIX: &str = "shader_header-";
pub const ARTIFACT_SUFFIX: &str = ".spv";

pub const IO_FAILURE_EXIT_CODE: i32 = 1;
pub const INVOCATION_FAILURE_EXIT_CODE: i32 = 2;
// compiler terminated by a signal, no code to forward
pub const SIGNALED_EXIT_CODE: i32 = 1;
