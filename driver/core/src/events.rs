//! Surface Input Events
//!
//! Raw input reported by UI surfaces to the scroll driver. Surfaces are
//! "dumb" forwarders: they translate their native events (terminal mouse,
//! browser wheel, touch screen) into these shapes and let the driver decide
//! what the motion means.

use serde::{Deserialize, Serialize};

/// A raw input event from a surface.
///
/// Vertical coordinates and deltas are in virtual pixels; a surface whose
/// native unit is coarser (e.g. terminal rows) scales before reporting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Wheel motion. Positive `delta_y` advances the sequence.
    Wheel {
        /// Signed wheel delta in `unit`s.
        delta_y: f64,
        /// Unit the delta was reported in.
        unit: WheelUnit,
    },
    /// A drag gesture began at vertical position `y`.
    TouchStart {
        /// Pointer vertical position in virtual pixels.
        y: f64,
    },
    /// The pointer moved during a drag.
    TouchMove {
        /// Pointer vertical position in virtual pixels.
        y: f64,
    },
    /// The drag gesture was released.
    TouchEnd,
    /// A navigation key was pressed.
    Key(NavKey),
}

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelUnit {
    /// Delta is already in pixels.
    Pixels,
    /// Delta is in text lines (converted at a fixed line height).
    Lines,
}

/// Navigation keys the driver understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    /// Arrow down.
    Down,
    /// Arrow up.
    Up,
    /// Page down.
    PageDown,
    /// Page up.
    PageUp,
    /// Space bar.
    Space,
    /// Home: jump to the first take.
    Home,
    /// End: jump to the last take.
    End,
}

impl NavKey {
    /// The navigation this key requests.
    #[must_use]
    pub fn action(self) -> NavAction {
        match self {
            Self::Down | Self::PageDown | Self::Space => NavAction::StepForward,
            Self::Up | Self::PageUp => NavAction::StepBack,
            Self::Home => NavAction::JumpStart,
            Self::End => NavAction::JumpEnd,
        }
    }
}

/// Semantic navigation derived from a [`NavKey`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    /// Advance exactly one take.
    StepForward,
    /// Retreat exactly one take.
    StepBack,
    /// Jump to progress 0.
    JumpStart,
    /// Jump to progress just under 1.
    JumpEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_actions() {
        assert_eq!(NavKey::Down.action(), NavAction::StepForward);
        assert_eq!(NavKey::PageDown.action(), NavAction::StepForward);
        assert_eq!(NavKey::Space.action(), NavAction::StepForward);
        assert_eq!(NavKey::Up.action(), NavAction::StepBack);
        assert_eq!(NavKey::PageUp.action(), NavAction::StepBack);
        assert_eq!(NavKey::Home.action(), NavAction::JumpStart);
        assert_eq!(NavKey::End.action(), NavAction::JumpEnd);
    }

    #[test]
    fn test_events_round_trip_through_serde() {
        let events = [
            InputEvent::Wheel {
                delta_y: -3.0,
                unit: WheelUnit::Lines,
            },
            InputEvent::TouchStart { y: 120.0 },
            InputEvent::TouchEnd,
            InputEvent::Key(NavKey::End),
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: InputEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }
}
