//! Emergency termination
//!
//! The highest severity is fatal by contract: once the message has been
//! delivered to the sink, the process exits with a fixed failure status.
//! Termination lives behind an explicit named call with a process-wide
//! hook so a test harness can observe the exit instead of performing it.

use parking_lot::RwLock;

/// Exit status reported when an emergency message terminates the process.
pub const EMERGENCY_EXIT_CODE: i32 = 1;

type ExitHook = Box<dyn Fn(i32) + Send + Sync>;

static EXIT_HOOK: RwLock<Option<ExitHook>> = RwLock::new(None);

/// Install a hook that intercepts process termination.
///
/// While a hook is installed, [`terminate`] invokes it with the exit code
/// and returns instead of exiting. The hook must not install or clear
/// hooks itself.
pub fn set_exit_hook(hook: impl Fn(i32) + Send + Sync + 'static) {
    *EXIT_HOOK.write() = Some(Box::new(hook));
}

/// Remove any installed exit hook, restoring real process termination.
pub fn clear_exit_hook() {
    *EXIT_HOOK.write() = None;
}

/// Terminate the process with `code`, or divert to the installed hook.
pub fn terminate(code: i32) {
    if let Some(hook) = EXIT_HOOK.read().as_ref() {
        hook(code);
        return;
    }
    std::process::exit(code);
}
