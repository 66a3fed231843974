use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use shader_header::{config::IO_FAILURE_EXIT_CODE, GenerateError, ShaderHeaderGenerator};

/// Compile a GLSL shader to SPIR-V and write it as a C byte-array initializer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// Shader compiler executable, e.g. glslc
    compiler: PathBuf,
    /// GLSL source file handed to the compiler
    source: PathBuf,
    /// Header file to (over)write with `0xNN, ` literals
    header: PathBuf,
}

fn run(args: &Arguments) -> Result<()> {
    ShaderHeaderGenerator::new(&args.compiler, &args.source, &args.header)
        .generate()
        .with_context(|| format!("Failed to generate {}", args.header.display()))
}

fn main() {
    pretty_env_logger::init();

    let args = Arguments::parse();

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        // compiler exit codes are forwarded verbatim
        let code = e
            .downcast_ref::<GenerateError>()
            .map_or(IO_FAILURE_EXIT_CODE, GenerateError::exit_code);
        std::process::exit(code);
    }
}
