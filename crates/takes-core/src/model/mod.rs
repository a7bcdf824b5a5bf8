pub mod flag;
pub mod member;
pub mod name;
pub mod object_ref;
pub mod value;

pub use flag::Flag;
pub use member::{MemberStore, MergePolicy, TakeMember};
pub use name::{allocate, sanitize};
pub use object_ref::{NodeId, ObjectRef, ParmRef, ResolvedNode};
pub use value::Value;
