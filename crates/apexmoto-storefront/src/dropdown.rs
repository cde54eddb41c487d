//! Shop menu dropdown: a `Closed`/`Open` state machine with a hover-intent
//! close delay and a floating panel anchored under its trigger.
//!
//! The machine owns no timers itself. Transitions return [`Effect`]s telling
//! the host to schedule or cancel the single close timer, identified by a
//! [`TimerToken`]; the host reports expiry back with
//! [`DropdownEvent::CloseTimerElapsed`]. A stale token is ignored, so a timer
//! the host failed to cancel can never close a re-opened menu.

use std::time::Duration;

pub const CLOSE_GRACE_MS: u64 = 150;

/// How long the pointer may be outside both trigger and panel before the
/// menu closes. Covers the gap between the two.
pub const CLOSE_GRACE: Duration = Duration::from_millis(CLOSE_GRACE_MS);

/// Vertical distance between the trigger's bottom edge and the panel.
pub const PANEL_GAP: f64 = 8.0;

/// An on-screen bounding box in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Source of the trigger's current geometry. `None` means the trigger is
/// not mounted yet.
pub trait TriggerGeometry {
    fn bounding_rect(&self) -> Option<Rect>;
}

impl TriggerGeometry for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl TriggerGeometry for Option<Rect> {
    fn bounding_rect(&self) -> Option<Rect> {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Trigger,
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    PointerEnter(Region),
    PointerLeave(Region),
    /// Click or tap on the trigger.
    Activate,
    Key(Key),
    /// Pointer pressed somewhere other than the trigger or the panel.
    PointerDownOutside,
    /// An entry in the panel was chosen.
    Select,
    CloseTimerElapsed(TimerToken),
}

/// Timer work the host must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScheduleClose { token: TimerToken, delay: Duration },
    CancelClose(TimerToken),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropdownState {
    Closed,
    /// Open, with the trigger geometry captured when it opened.
    Open { trigger: Rect },
}

/// Where the floating panel goes, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone)]
pub struct MenuDropdown {
    state: DropdownState,
    pending_close: Option<TimerToken>,
    next_token: u64,
    overlay_mounted: bool,
}

impl Default for MenuDropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuDropdown {
    /// A closed dropdown whose overlay layer is not mounted yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DropdownState::Closed,
            pending_close: None,
            next_token: 0,
            overlay_mounted: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> DropdownState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, DropdownState::Open { .. })
    }

    #[must_use]
    pub fn pending_close(&self) -> Option<TimerToken> {
        self.pending_close
    }

    #[must_use]
    pub fn overlay_mounted(&self) -> bool {
        self.overlay_mounted
    }

    /// The overlay layer became available. Always starts closed.
    pub fn mount(&mut self) -> Vec<Effect> {
        let effects = self.close();
        self.overlay_mounted = true;
        effects
    }

    /// Tears down: cancels any pending timer and forgets the open state.
    pub fn unmount(&mut self) -> Vec<Effect> {
        let effects = self.close();
        self.overlay_mounted = false;
        effects
    }

    /// Applies one input event and returns the timer effects to perform.
    pub fn handle(&mut self, event: DropdownEvent, trigger: &impl TriggerGeometry) -> Vec<Effect> {
        match (event, self.is_open()) {
            (DropdownEvent::PointerEnter(Region::Trigger), false) => self.open(trigger),
            (DropdownEvent::PointerEnter(_), true) => self.cancel_pending().into_iter().collect(),
            (DropdownEvent::PointerLeave(_), true) => self.schedule_close(),
            (DropdownEvent::Activate | DropdownEvent::Key(Key::Enter | Key::Space), open) => {
                if open {
                    self.close()
                } else {
                    self.open(trigger)
                }
            }
            (
                DropdownEvent::Key(Key::Escape)
                | DropdownEvent::PointerDownOutside
                | DropdownEvent::Select,
                true,
            ) => self.close(),
            (DropdownEvent::CloseTimerElapsed(token), _) => {
                if self.pending_close == Some(token) {
                    self.pending_close = None;
                    self.state = DropdownState::Closed;
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Panel position, or `None` when nothing should be drawn: closed, or
    /// the overlay layer is not mounted.
    #[must_use]
    pub fn panel_placement(&self) -> Option<PanelPlacement> {
        match self.state {
            DropdownState::Open { trigger } if self.overlay_mounted => Some(PanelPlacement {
                left: trigger.left(),
                top: trigger.bottom() + PANEL_GAP,
            }),
            _ => None,
        }
    }

    fn open(&mut self, trigger: &impl TriggerGeometry) -> Vec<Effect> {
        let Some(rect) = trigger.bounding_rect() else {
            tracing::trace!("dropdown open suppressed: trigger not mounted");
            return Vec::new();
        };
        let effects = self.cancel_pending().into_iter().collect();
        self.state = DropdownState::Open { trigger: rect };
        effects
    }

    fn close(&mut self) -> Vec<Effect> {
        self.state = DropdownState::Closed;
        self.cancel_pending().into_iter().collect()
    }

    fn schedule_close(&mut self) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self.cancel_pending().into_iter().collect();
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending_close = Some(token);
        effects.push(Effect::ScheduleClose {
            token,
            delay: CLOSE_GRACE,
        });
        effects
    }

    fn cancel_pending(&mut self) -> Option<Effect> {
        self.pending_close.take().map(Effect::CancelClose)
    }
}

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod tests;
