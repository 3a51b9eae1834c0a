//! The interaction aggregate: initial state, process tag and (once
//! enumeration has assigned it) the exclusive final-state tag.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::init_state::InitialState;
use crate::process::ProcessInfo;
use crate::xcls::ExclusiveTag;

/// One candidate interaction, produced by enumeration and consumed by
/// selection.
///
/// The process tag is fixed at construction. The target's struck-nucleon
/// sub-state and the exclusive tag are assigned afterwards, while the
/// candidate is being assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    init_state: InitialState,
    proc_info: ProcessInfo,
    excl_tag: Option<ExclusiveTag>,
}

impl Interaction {
    /// Creates an interaction from an initial state and a process tag.
    pub fn new(init_state: InitialState, proc_info: ProcessInfo) -> Self {
        Self {
            init_state,
            proc_info,
            excl_tag: None,
        }
    }

    /// The initial state.
    pub fn init_state(&self) -> &InitialState {
        &self.init_state
    }

    /// Mutable access to the initial state, used to assign the struck
    /// nucleon during enumeration and the probe four-momentum during
    /// selection.
    pub fn init_state_mut(&mut self) -> &mut InitialState {
        &mut self.init_state
    }

    /// The process tag.
    pub fn proc_info(&self) -> &ProcessInfo {
        &self.proc_info
    }

    /// The exclusive final-state tag, if assigned.
    pub fn excl_tag(&self) -> Option<&ExclusiveTag> {
        self.excl_tag.as_ref()
    }

    /// Assigns the exclusive final-state tag.
    pub fn set_excl_tag(&mut self, tag: ExclusiveTag) {
        self.excl_tag = Some(tag);
    }

    /// Canonical textual form.
    pub fn as_string(&self) -> String {
        match &self.excl_tag {
            Some(tag) => format!(
                "{};{};{}",
                self.init_state.as_string(),
                self.proc_info.as_string(),
                tag.as_string()
            ),
            None => format!(
                "{};{}",
                self.init_state.as_string(),
                self.proc_info.as_string()
            ),
        }
    }
}

impl Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
