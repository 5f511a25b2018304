// domain for the consent/experiment flows
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One of the two parallel flows.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Flow {
	Ctrl,
	Exp,
}

impl Flow {
	/// Prefix written into the status tag.
	pub fn tag(&self) -> &'static str {
		match self {
			Self::Ctrl => "V1",
			Self::Exp => "V2",
		}
	}
}

/// Phase recorded by a persisting step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
	/// Flow started.
	Inc,
	/// Flow finished through the normal path.
	Complete,
	/// Flow finished through the cheat branch.
	Cheat,
}

impl Phase {
	pub fn tag(&self) -> &'static str {
		match self {
			Self::Inc => "INC",
			Self::Complete => "COMPLETE",
			Self::Cheat => "CHEAT",
		}
	}
}

/// Status tag of the form `<flow>:<phase>`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct StatusTag {
	pub flow: Flow,
	pub phase: Phase,
}

impl Display for StatusTag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.flow.tag(), self.phase.tag())
	}
}

/// Logical position inside a flow.
///
/// Transitions are client-side navigations between fixed paths; the server
/// never checks that a visitor arrived from the previous step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Step {
	Intro,
	AlmostDone,
	Done,
	Cheat,
	CheatDone,
}

impl Step {
	/// Phase stamped onto a new greeting when this step is visited.
	/// Transitional steps stamp nothing.
	pub fn phase(&self) -> Option<Phase> {
		match self {
			Self::Intro => Some(Phase::Inc),
			Self::Done => Some(Phase::Complete),
			Self::CheatDone => Some(Phase::Cheat),
			Self::AlmostDone | Self::Cheat => None,
		}
	}

	pub fn next_steps(&self) -> &'static [Step] {
		match self {
			Self::Intro => &[Step::AlmostDone, Step::Cheat],
			Self::AlmostDone => &[Step::Done],
			Self::Cheat => &[Step::CheatDone],
			Self::Done | Self::CheatDone => &[],
		}
	}

	pub fn is_terminal(&self) -> bool {
		self.next_steps().is_empty()
	}
}

/// A flow step bound to its fixed path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FlowStep {
	pub path: &'static str,
	pub flow: Flow,
	pub step: Step,
}

impl FlowStep {
	pub fn persists(&self) -> bool {
		self.step.phase().is_some()
	}

	pub fn status(&self) -> Option<StatusTag> {
		self.step.phase().map(|phase| StatusTag { flow: self.flow, phase })
	}

	pub fn find(
		flow: Flow,
		step: Step,
	) -> Option<&'static FlowStep> {
		FLOW_STEPS.iter().find(|candidate| candidate.flow == flow && candidate.step == step)
	}
}

/// Value handed to every flow template.
pub const FLOW_PLACEHOLDER: &str = "test";

// Paths are opaque tokens shared with already-distributed links. Keep them verbatim.
pub static FLOW_STEPS: [FlowStep; 10] = [
	FlowStep { path: "/827sf45", flow: Flow::Ctrl, step: Step::Intro },
	FlowStep { path: "/736ft2", flow: Flow::Ctrl, step: Step::AlmostDone },
	FlowStep { path: "/23642z", flow: Flow::Ctrl, step: Step::Cheat },
	FlowStep { path: "/382sm2", flow: Flow::Ctrl, step: Step::Done },
	FlowStep { path: "/9473zf", flow: Flow::Ctrl, step: Step::CheatDone },
	FlowStep { path: "/2139xi", flow: Flow::Exp, step: Step::Intro },
	FlowStep { path: "/09128s", flow: Flow::Exp, step: Step::AlmostDone },
	FlowStep { path: "/1238s", flow: Flow::Exp, step: Step::Cheat },
	FlowStep { path: "/7391kf", flow: Flow::Exp, step: Step::Done },
	FlowStep { path: "/9652fse", flow: Flow::Exp, step: Step::CheatDone },
];
