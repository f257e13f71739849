//! Input sources for the headless loop (one `InputFrame` per tick).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::input::{ControlState, HeldControls, InputEdge};

/// Everything the players did during one tick.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    pub held: HeldControls,
    pub edges: Vec<InputEdge>,
}

impl InputFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding(mut self, side: Side, state: ControlState) -> Self {
        self.held.set(side, state);
        self
    }

    pub fn fire(mut self, side: Side) -> Self {
        self.edges.push(InputEdge::Fire(side));
        self
    }

    pub fn quit(mut self) -> Self {
        self.edges.push(InputEdge::Quit);
        self
    }
}

/// Источник input для `GameLoop`: опрашивается ровно один раз за тик
pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

/// Replays a fixed tape of frames.
///
/// Когда лента закончилась: если `quit_when_exhausted`, отдаёт Quit,
/// иначе пустые кадры (матч доигрывается без input).
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
    quit_when_exhausted: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            quit_when_exhausted: true,
        }
    }

    /// Keep polling idle frames after the tape ends instead of quitting.
    pub fn then_idle(mut self) -> Self {
        self.quit_when_exhausted = false;
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        match self.frames.pop_front() {
            Some(frame) => frame,
            None if self.quit_when_exhausted => InputFrame::idle().quit(),
            None => InputFrame::idle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_then_quits() {
        let mut input = ScriptedInput::new([
            InputFrame::idle().fire(Side::Left),
            InputFrame::idle(),
        ]);

        assert_eq!(input.poll().edges, vec![InputEdge::Fire(Side::Left)]);
        assert!(input.poll().edges.is_empty());
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.poll().edges, vec![InputEdge::Quit]);
    }

    #[test]
    fn test_scripted_input_then_idle() {
        let mut input = ScriptedInput::new([]).then_idle();

        assert_eq!(input.poll(), InputFrame::idle());
        assert_eq!(input.poll(), InputFrame::idle());
    }

    #[test]
    fn test_frame_round_trips_through_json() {
        let frame = InputFrame::idle()
            .holding(
                Side::Right,
                ControlState {
                    up: true,
                    sprint: true,
                    ..ControlState::IDLE
                },
            )
            .fire(Side::Right);

        let json = serde_json::to_string(&frame).expect("serialize");
        let back: InputFrame = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back, frame);
    }
}
