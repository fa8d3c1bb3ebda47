//! Bounded call-stack capture.
//!
//! Frames render as `path:line (0xADDR)`. Capture happens exactly once,
//! when the innermost error of a chain is created; wrapping inherits
//! the snapshot untouched.

/// Capture depth cap. Frames past this are dropped silently.
pub(crate) const MAX_FRAMES: usize = 100;

/// Walk the current call stack into textual frame descriptors.
pub(crate) fn capture() -> Vec<String> {
    let bt = backtrace::Backtrace::new();
    let mut frames = Vec::with_capacity(bt.frames().len().min(MAX_FRAMES));
    for frame in bt.frames().iter().take(MAX_FRAMES) {
        let ip = frame.ip() as usize;
        let resolved = frame
            .symbols()
            .first()
            .and_then(|sym| Some((sym.filename()?, sym.lineno()?)));
        match resolved {
            Some((file, line)) => {
                frames.push(format!("{}:{} (0x{:x})", file.display(), line, ip))
            }
            None => frames.push(format!("<unresolved> (0x{:x})", ip)),
        }
    }
    frames
}
