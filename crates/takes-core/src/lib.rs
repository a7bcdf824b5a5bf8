//! Takes: named, hierarchical overlays of scene changes.
//!
//! A take records which node flags and parameters it overrides. The host
//! application owns the real take state; this crate drives it through text
//! directives and keeps a local [`MemberStore`] mirror per [`Take`]. Existing
//! takes are rebuilt from the host's take scripts.
//!
//! # Example
//! ```
//! use std::rc::Rc;
//! use takes_core::host::{MemoryHost, SceneNode};
//! use takes_core::{Flag, ParmRef, TakeSession};
//!
//! let host = Rc::new(MemoryHost::new());
//! host.add_node(SceneNode::new("/obj/geo1").flag(Flag::Display, true).parm("scale", 1.0));
//! let session = TakeSession::new(host);
//!
//! let mut take = session.create_take("shot_010", None, false).unwrap();
//! take.include_display_flag("/obj/geo1", true).unwrap();
//! take.include_parms(&[ParmRef::new("/obj/geo1", "scale")], true).unwrap();
//!
//! let rebuilt = session.take_from_name("shot_010").unwrap();
//! assert!(rebuilt.members().unwrap().contains("/obj/geo1"));
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod model;
pub mod session;
pub mod take;

pub use config::TakeConfig;
pub use error::{ErrorKind, TakeError};
pub use host::Host;
pub use model::{Flag, MemberStore, MergePolicy, NodeId, ObjectRef, ParmRef, TakeMember, Value};
pub use session::{TakeNode, TakeSession};
pub use take::{Take, TakeBuilder};
