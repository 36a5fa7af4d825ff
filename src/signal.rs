//! Interrupt-ignore capability.
//!
//! The `-i` switch installs a process-wide disposition that discards
//! interrupt requests (SIGINT on unix) for as long as the guard lives;
//! dropping the guard restores the previous disposition. On platforms
//! without controllable signal dispositions the guard is a no-op.

use std::io;

/// Process-wide "discard interrupts" setting, active while the guard lives.
#[must_use = "the interrupt disposition is restored when the guard is dropped"]
pub struct InterruptGuard {
    #[cfg(unix)]
    previous: libc::sigaction,
}

#[cfg(unix)]
impl InterruptGuard {
    /// Install the ignore disposition for SIGINT, remembering the previous
    /// one.
    pub fn install() -> io::Result<Self> {
        let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
        action.sa_sigaction = libc::SIG_IGN;
        let _ = unsafe { libc::sigemptyset(&mut action.sa_mask) };

        let mut previous: libc::sigaction = unsafe { std::mem::zeroed() };
        // Safety: both pointers reference valid, initialized sigaction
        // structs for the duration of the call.
        let rc = unsafe { libc::sigaction(libc::SIGINT, &action, &mut previous) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Self { previous })
    }
}

#[cfg(unix)]
impl Drop for InterruptGuard {
    fn drop(&mut self) {
        // Best-effort restore; on failure the signal stays ignored.
        let _ = unsafe { libc::sigaction(libc::SIGINT, &self.previous, std::ptr::null_mut()) };
    }
}

#[cfg(not(unix))]
impl InterruptGuard {
    /// Interrupt dispositions are not controllable on this platform.
    pub fn install() -> io::Result<Self> {
        Ok(Self {})
    }
}

impl std::fmt::Debug for InterruptGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterruptGuard").finish()
    }
}
