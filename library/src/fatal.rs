//! Unrecoverable contract violations.
//!
//! Unlike `panic!`, this path cannot be intercepted with `catch_unwind`: the
//! process is aborted right after the diagnostic is written.

use std::io::Write;

pub fn fatal(msg: &str) -> ! {
    tracing::error!(reason = msg, "aborting on contract violation");

    let stderr = std::io::stderr();
    let mut stderr = stderr.lock();
    let _ = writeln!(stderr, "[guardrail panic]: {}", msg);
    let _ = stderr.flush();

    std::process::abort()
}

// Aborting counterparts of `todo!` and `unreachable!`.
pub fn todo(msg: &str) -> ! {
    fatal(&format!("not yet implemented: {}", msg))
}

pub fn unreachable(msg: &str) -> ! {
    fatal(&format!("entered unreachable code: {}", msg))
}
