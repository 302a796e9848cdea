#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[path = "frontend.rs"]
mod frontend;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    frontend::run_with(env::args_os(), &mut io::stdout(), &mut io::stderr())
}
