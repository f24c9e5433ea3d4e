//! Exit handling: signal handlers, cleanup, and graceful shutdown.

use crate::rand;

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit. The widget hides the cursor, so show it again.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
    rand::zeroize_state();
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit does the cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT: wipe generator state, then re-raise for the core dump
extern "C" fn crash_handler(sig: libc::c_int) {
    rand::zeroize_state();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install signal handlers and the atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

pub fn reset_terminal() {
    reset_terminal_termios();
}
