//! The narrow contract between the take core and the application that owns
//! the scene.
//!
//! The core never touches scene state directly. It sends [`Directive`]s
//! through a [`DirectiveChannel`], probes objects through a [`SceneGraph`] and
//! reads the active take through an [`ActiveTakeController`]. Anything
//! implementing all three is a [`Host`].

pub mod directive;
pub mod glob;
pub mod memory;
pub mod script;

pub use directive::Directive;
pub use memory::{MemoryHost, Parm, ParmTuple, SceneNode, SceneState};
pub use script::{parse_include_line, ScriptEntry, ScriptLine};

use crate::model::{Flag, NodeId, Value};

/// Result of one command: an empty `error` means success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveOutput {
    pub output: String,
    pub error: String,
}

impl DirectiveOutput {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: String::new(),
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            error: error.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }

    pub fn into_result(self) -> Result<String, String> {
        if self.is_ok() {
            Ok(self.output)
        } else {
            Err(self.error)
        }
    }
}

pub trait DirectiveChannel {
    fn execute(&self, command: &str) -> DirectiveOutput;
}

/// Read/write access to live objects.
pub trait SceneGraph {
    fn resolve(&self, path: &str) -> Option<NodeId>;

    fn path_of(&self, id: NodeId) -> Option<String>;

    /// `None` when the object has no such flag.
    fn flag_value(&self, id: NodeId, flag: Flag) -> Option<bool>;

    fn set_flag(&self, id: NodeId, flag: Flag, value: bool) -> Result<(), String>;

    fn parm_names(&self, id: NodeId) -> Vec<String>;

    fn has_parm(&self, id: NodeId, name: &str) -> bool {
        self.parm_names(id).iter().any(|p| p == name)
    }

    fn eval_parm(&self, id: NodeId, name: &str) -> Option<Value>;

    fn set_parm(&self, id: NodeId, name: &str, value: Value) -> Result<(), String>;

    fn pattern_match(&self, pattern: &str, text: &str, case_insensitive: bool) -> bool {
        glob::glob_matches(pattern, text, case_insensitive)
    }
}

/// The host's process-wide "which take is active" state. Switching goes
/// through a `takeset` directive; only reading is exposed here.
pub trait ActiveTakeController {
    fn active_take(&self) -> String;
}

pub trait Host: DirectiveChannel + SceneGraph + ActiveTakeController {}

impl<T: DirectiveChannel + SceneGraph + ActiveTakeController> Host for T {}
