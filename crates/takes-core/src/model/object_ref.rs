use serde::{Deserialize, Serialize};

/// Opaque host handle for a live object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node reference as given by a caller: either a scene path or a handle
/// already obtained from the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectRef {
    Path(String),
    Handle(NodeId),
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectRef::Path(p) => f.write_str(p),
            ObjectRef::Handle(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for ObjectRef {
    fn from(s: &str) -> Self {
        ObjectRef::Path(s.to_string())
    }
}

impl From<String> for ObjectRef {
    fn from(s: String) -> Self {
        ObjectRef::Path(s)
    }
}

impl From<&String> for ObjectRef {
    fn from(s: &String) -> Self {
        ObjectRef::Path(s.clone())
    }
}

impl From<NodeId> for ObjectRef {
    fn from(id: NodeId) -> Self {
        ObjectRef::Handle(id)
    }
}

/// A parameter on an owning object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParmRef {
    pub node: ObjectRef,
    pub name: String,
}

impl ParmRef {
    pub fn new(node: impl Into<ObjectRef>, name: &str) -> Self {
        Self {
            node: node.into(),
            name: name.to_string(),
        }
    }
}

/// A reference after resolution against the host: canonical handle plus the
/// path the host reports for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    pub id: NodeId,
    pub path: String,
}
