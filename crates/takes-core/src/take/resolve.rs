use crate::error::TakeError;
use crate::host::SceneGraph;
use crate::model::{ObjectRef, ParmRef, ResolvedNode};

/// Resolve one reference into a live handle and its canonical path.
pub(crate) fn resolve_node<S: SceneGraph + ?Sized>(
    scene: &S,
    node: &ObjectRef,
) -> Result<ResolvedNode, TakeError> {
    match node {
        ObjectRef::Path(path) => {
            let id = scene
                .resolve(path)
                .ok_or_else(|| TakeError::InvalidNode(path.clone()))?;
            let path = scene.path_of(id).unwrap_or_else(|| path.clone());
            Ok(ResolvedNode { id, path })
        }
        ObjectRef::Handle(id) => {
            let path = scene
                .path_of(*id)
                .ok_or_else(|| TakeError::InvalidNode(id.to_string()))?;
            Ok(ResolvedNode { id: *id, path })
        }
    }
}

/// Resolve parameter references. An unresolvable node aborts; a parameter
/// missing from a valid node is skipped with a warning.
pub(crate) fn resolve_parms<S: SceneGraph + ?Sized>(
    scene: &S,
    parms: &[ParmRef],
) -> Result<Vec<(ResolvedNode, String)>, TakeError> {
    let mut resolved = Vec::with_capacity(parms.len());
    for parm in parms {
        let node = resolve_node(scene, &parm.node)?;
        if !scene.has_parm(node.id, &parm.name) {
            tracing::warn!(node = %node.path, parm = %parm.name, "Parameter not found, skipped");
            continue;
        }
        resolved.push((node, parm.name.clone()));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryHost, SceneNode};
    use crate::model::NodeId;

    fn host() -> MemoryHost {
        let host = MemoryHost::new();
        host.add_node(SceneNode::new("/obj/geo1").parm("scale", 1.0));
        host
    }

    #[test]
    fn test_resolve_path_and_handle() {
        let host = host();
        let by_path = resolve_node(&host, &"/obj/geo1".into()).unwrap();
        let by_handle = resolve_node(&host, &by_path.id.into()).unwrap();
        assert_eq!(by_path, by_handle);
        assert_eq!(by_handle.path, "/obj/geo1");
    }

    #[test]
    fn test_resolve_invalid_references() {
        let host = host();
        let err = resolve_node(&host, &"/obj/missing".into()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid node: /obj/missing");
        assert!(matches!(
            resolve_node(&host, &NodeId(7).into()),
            Err(TakeError::InvalidNode(_))
        ));
    }

    #[test]
    fn test_resolve_parms_skips_missing_parameter() {
        let host = host();
        let parms = [
            ParmRef::new("/obj/geo1", "scale"),
            ParmRef::new("/obj/geo1", "nope"),
        ];
        let resolved = resolve_parms(&host, &parms).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].1, "scale");

        let parms = [
            ParmRef::new("/obj/missing", "scale"),
            ParmRef::new("/obj/geo1", "scale"),
        ];
        assert!(resolve_parms(&host, &parms).is_err());
    }
}
