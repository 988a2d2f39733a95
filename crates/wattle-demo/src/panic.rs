use std::panic;

/// Reports a panic of the demo and exits without closing the window.
///
/// Unwinding through raylib's frame is not safe, so the OS tears the window down and the clicks
/// of the session never reach the storage slot.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let reason = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("no message");

        let thread = std::thread::current();
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "an unknown location".to_string());

        log::error!(
            "The demo crashed on thread '{}' at {}: {}",
            thread.name().unwrap_or("unnamed"),
            location,
            reason
        );
        log::error!("Window left to the OS, clicks from this session were not saved");
        log::debug!("Backtrace:\n{:?}", backtrace::Backtrace::new());

        std::process::exit(1);
    }));
}
