//! Device-orientation adapter: support detection, consent and suppression.
//!
//! Activation is two-phase. The host calls `begin_activation` from inside a
//! user-gesture handler, performs the platform permission request, and later
//! reports the outcome with `finish_activation`. Samples are only accepted
//! once the adapter is active and not suppressed by a touch interaction.

use crate::error::TiltError;
use crate::platform::{Deferred, Platform, TimerKind};

/// What the platform offers for orientation events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Support {
    Unsupported,
    /// Events exist but the user must consent first.
    NeedsPermission,
    Available,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationState {
    Undetected,
    Unsupported,
    AwaitingConsent,
    Requesting,
    Denied,
    Active,
}

#[derive(Debug)]
pub struct OrientationAdapter {
    state: ActivationState,
    suppressed: bool,
    resume: Deferred,
}

impl Default for OrientationAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationAdapter {
    pub const fn new() -> Self {
        Self {
            state: ActivationState::Undetected,
            suppressed: false,
            resume: Deferred::new(TimerKind::OrientationResume),
        }
    }

    #[inline]
    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn detect(&mut self, support: Support) -> Result<(), TiltError> {
        self.state = match support {
            Support::Unsupported => ActivationState::Unsupported,
            Support::NeedsPermission => ActivationState::AwaitingConsent,
            Support::Available => ActivationState::Active,
        };
        match self.state {
            ActivationState::Unsupported => Err(TiltError::OrientationUnsupported),
            _ => Ok(()),
        }
    }

    /// True while a user gesture is needed to ask for consent.
    #[inline]
    pub fn needs_activation(&self) -> bool {
        self.state == ActivationState::AwaitingConsent
    }

    pub fn begin_activation(&mut self) -> Result<(), TiltError> {
        match self.state {
            ActivationState::AwaitingConsent => {
                self.state = ActivationState::Requesting;
                Ok(())
            }
            ActivationState::Requesting => Err(TiltError::ActivationInFlight),
            ActivationState::Denied => Err(TiltError::PermissionDenied),
            ActivationState::Unsupported | ActivationState::Undetected => {
                Err(TiltError::OrientationUnsupported)
            }
            ActivationState::Active => Ok(()),
        }
    }

    /// Record the consent outcome. A denial is final for the session.
    pub fn finish_activation(&mut self, permission: Permission) -> Result<(), TiltError> {
        if self.state != ActivationState::Requesting {
            return Ok(());
        }
        match permission {
            Permission::Granted => {
                self.state = ActivationState::Active;
                Ok(())
            }
            Permission::Denied => {
                self.state = ActivationState::Denied;
                Err(TiltError::PermissionDenied)
            }
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == ActivationState::Active
    }

    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Whether an incoming sample should drive output.
    #[inline]
    pub fn accepts(&self) -> bool {
        self.is_active() && !self.suppressed
    }

    /// Touch started: stop forwarding samples and drop any pending resume.
    pub fn suppress<P: Platform>(&mut self, platform: &mut P) {
        self.suppressed = true;
        self.resume.cancel(platform);
    }

    /// Touch ended: resume forwarding after `delay_ms`.
    pub fn resume_after<P: Platform>(&mut self, platform: &mut P, delay_ms: u32) {
        if self.suppressed {
            self.resume.arm(platform, delay_ms);
        }
    }

    /// The resume timer fired. Returns true if suppression was lifted.
    pub fn resume_fired(&mut self) -> bool {
        if self.resume.fire() {
            self.suppressed = false;
            return true;
        }
        false
    }
}
