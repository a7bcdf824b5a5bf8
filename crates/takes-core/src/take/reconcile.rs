//! Rebuild a [`Take`] from the script the host keeps for it.

use crate::config::TakeConfig;
use crate::error::TakeError;
use crate::host::{parse_include_line, Directive, SceneGraph, ScriptEntry, ScriptLine};
use crate::model::{MemberStore, NodeId, Value};
use crate::session::TakeSession;

use super::Take;

/// Reconstruct the take called `name`.
///
/// The take is made active while values are read so that they reflect its
/// overlay; the previously active take is restored afterwards.
pub(crate) fn reconcile(session: &TakeSession, name: &str) -> Result<Take, TakeError> {
    let node = session
        .take_tree()?
        .into_iter()
        .find(|n| n.name == name)
        .ok_or_else(|| TakeError::NotFound(name.to_string()))?;

    let script = session
        .run(&Directive::Script(name.to_string()))
        .map_err(TakeError::Directive)?;

    let previous = session.active_take_name();
    let switched = previous != name;
    if switched {
        session.set_active(name)?;
    }
    let members = parse_script(session.host(), &script, session.config());
    if switched {
        session.set_active(&previous)?;
    }

    tracing::debug!(take = %name, members = members.len(), "Reconciled take");
    Ok(Take::from_parts(session, node.name, node.parent, members))
}

/// Build a member store from a take script, reading current values from
/// `scene`.
///
/// Only `takeinclude` lines count. Objects that no longer exist are skipped.
/// A parameter name that does not exist on the object is treated as the base
/// name of a multi-component parameter and every suffix variant that exists
/// is recorded.
pub fn parse_script<S: SceneGraph + ?Sized>(
    scene: &S,
    script: &str,
    config: &TakeConfig,
) -> MemberStore {
    let mut members = MemberStore::new();

    for line in script.lines() {
        let Some(ScriptLine { entry, exclude }) = parse_include_line(line) else {
            continue;
        };
        let Some(id) = scene.resolve(entry.path()) else {
            tracing::debug!(path = %entry.path(), "Skipping stale script line");
            continue;
        };
        let path = scene.path_of(id).unwrap_or_else(|| entry.path().to_string());

        match entry {
            ScriptEntry::Flag { flag, .. } => {
                if exclude {
                    members.exclude_flag(&path, flag);
                } else if let Some(value) = scene.flag_value(id, flag) {
                    members.include_flag(&path, flag, Some(value));
                }
            }
            ScriptEntry::Parm { parm, .. } => {
                for (name, value) in expand_parm(scene, id, &parm, config) {
                    if exclude {
                        members.exclude_parm(&path, &name);
                    } else {
                        members.include_parm(&path, &name, value);
                    }
                }
            }
        }
    }
    members
}

/// Concrete parameters named by one script entry.
fn expand_parm<S: SceneGraph + ?Sized>(
    scene: &S,
    id: NodeId,
    parm: &str,
    config: &TakeConfig,
) -> Vec<(String, Option<Value>)> {
    let names: Vec<String> = if parm == "*" {
        scene.parm_names(id)
    } else if scene.has_parm(id, parm) {
        vec![parm.to_string()]
    } else {
        config
            .component_suffixes()
            .map(|suffix| format!("{parm}{suffix}"))
            .filter(|name| scene.has_parm(id, name))
            .collect()
    };

    names
        .into_iter()
        .map(|name| {
            let value = scene.eval_parm(id, &name);
            (name, value)
        })
        .collect()
}
