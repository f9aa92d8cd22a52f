// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ctrl-C handling.
//!
//! SIGINT only raises a flag. The handler is installed without
//! `SA_RESTART`, so a prompt blocked on stdin wakes up with `EINTR` and
//! the workflow unwinds through [`Error::Interrupted`], dropping its
//! scratch directories on the way out.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Routes SIGINT to the interrupt flag. A no-op off unix, where Ctrl-C
/// keeps its default behavior.
pub fn install() {
    #[cfg(unix)]
    unix::install();
}

/// Whether Ctrl-C has been pressed since [`install`].
pub fn requested() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Fails with [`Error::Interrupted`] once Ctrl-C has been pressed.
pub fn check() -> Result<()> {
    check_flag(&INTERRUPTED)
}

fn check_flag(flag: &AtomicBool) -> Result<()> {
    if flag.load(Ordering::SeqCst) {
        Err(Error::Interrupted)
    } else {
        Ok(())
    }
}

#[cfg(unix)]
mod unix {
    use std::sync::atomic::Ordering;

    use nix::libc::c_int;
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    use super::INTERRUPTED;

    extern "C" fn on_sigint(_: c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    pub(super) fn install() {
        let action = SigAction::new(
            SigHandler::Handler(on_sigint),
            SaFlags::empty(),
            SigSet::empty(),
        );
        // SAFETY: the handler only stores to an atomic, which is
        // async-signal-safe.
        #[allow(unsafe_code)]
        let installed = unsafe { sigaction(Signal::SIGINT, &action) };
        if let Err(e) = installed {
            tracing::debug!(error = %e, "could not install SIGINT handler");
        }
    }
}

#[cfg(test)]
#[path = "interrupt_tests.rs"]
mod tests;
