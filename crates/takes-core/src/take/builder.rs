use crate::error::TakeError;
use crate::model::{Flag, TakeMember, Value};
use crate::session::TakeSession;

use super::Take;

/// Creates a take already seeded with members.
///
/// Seed entries are applied through the normal inclusion calls. Entries that
/// name a missing node, flag or parameter are skipped with a warning instead
/// of failing the whole creation.
pub struct TakeBuilder {
    session: TakeSession,
    name: String,
    parent: Option<String>,
    set_current: bool,
    set_values: bool,
    members: Vec<(String, TakeMember)>,
    whole_nodes: Vec<String>,
}

impl TakeBuilder {
    pub fn new(session: &TakeSession, name: &str) -> Self {
        Self {
            session: session.clone(),
            name: name.to_string(),
            parent: None,
            set_current: false,
            set_values: false,
            members: Vec::new(),
            whole_nodes: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    /// Leave the new take active once it is built.
    pub fn set_current(mut self, set_current: bool) -> Self {
        self.set_current = set_current;
        self
    }

    /// Write seeded values to the host after including them.
    pub fn with_values(mut self, set_values: bool) -> Self {
        self.set_values = set_values;
        self
    }

    pub fn with_member(mut self, path: &str, member: TakeMember) -> Self {
        self.member_mut(path).flags.extend(member.flags);
        self.member_mut(path).parms.extend(member.parms);
        self
    }

    pub fn with_parm(mut self, path: &str, name: &str, value: Option<Value>) -> Self {
        self.member_mut(path).parms.insert(name.to_string(), value);
        self
    }

    pub fn with_flag(mut self, path: &str, flag: Flag, value: Option<bool>) -> Self {
        self.member_mut(path).flags.insert(flag, value);
        self
    }

    /// Include every parameter of `path`.
    pub fn with_node(mut self, path: &str) -> Self {
        self.whole_nodes.push(path.to_string());
        self
    }

    fn member_mut(&mut self, path: &str) -> &mut TakeMember {
        let index = match self.members.iter().position(|(p, _)| p == path) {
            Some(index) => index,
            None => {
                self.members.push((path.to_string(), TakeMember::default()));
                self.members.len() - 1
            }
        };
        &mut self.members[index].1
    }

    /// Create the take and apply every seed entry.
    pub fn create(self) -> Result<Take, TakeError> {
        let mut take = Take::create(
            &self.session,
            &self.name,
            self.parent.as_deref(),
            self.set_current,
        )?;
        let host = self.session.host();

        for path in &self.whole_nodes {
            let Some(id) = host.resolve(path) else {
                tracing::warn!(node = %path, "Seed node not found, skipped");
                continue;
            };
            take.include_parms_from_node(id, &[], true)?;
        }

        for (path, member) in &self.members {
            let Some(id) = host.resolve(path) else {
                tracing::warn!(node = %path, "Seed node not found, skipped");
                continue;
            };
            let mut seed = member.clone();
            seed.flags.retain(|flag, _| {
                let supported = host.flag_value(id, *flag).is_some();
                if !supported {
                    tracing::warn!(node = %path, %flag, "Seed flag not supported, skipped");
                }
                supported
            });
            take.include_member(id, &seed, self.set_values)?;
        }

        if self.set_current {
            take.set_current()?;
        } else {
            self.session.return_to_main()?;
        }
        Ok(take)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ActiveTakeController, MemoryHost, SceneGraph, SceneNode};
    use std::rc::Rc;

    fn session() -> (Rc<MemoryHost>, TakeSession) {
        let host = Rc::new(MemoryHost::new());
        host.add_node(
            SceneNode::new("/obj/geo1")
                .flag(Flag::Display, true)
                .parm("scale", 1.0)
                .tuple("t", &["tx", "ty", "tz"], 0.0),
        );
        let session = TakeSession::new(host.clone());
        (host, session)
    }

    #[test]
    fn test_builder_seeds_members() {
        let (host, session) = session();
        let take = session
            .builder("seeded")
            .with_parm("/obj/geo1", "scale", Some(Value::Float(2.5)))
            .with_flag("/obj/geo1", Flag::Display, Some(false))
            .with_values(true)
            .create()
            .unwrap();

        let member = take.members().unwrap().get("/obj/geo1").unwrap();
        assert_eq!(member.parm_value("scale"), Some(&Value::Float(2.5)));
        assert_eq!(member.flag_value(Flag::Display), Some(false));
        assert_eq!(host.active_take(), "Main");
        assert_eq!(host.base_parm("/obj/geo1", "scale"), Some(Value::Float(1.0)));

        take.set_current().unwrap();
        let id = host.resolve("/obj/geo1").unwrap();
        assert_eq!(host.eval_parm(id, "scale"), Some(Value::Float(2.5)));
        assert_eq!(host.flag_value(id, Flag::Display), Some(false));
    }

    #[test]
    fn test_builder_without_values_keeps_host_values() {
        let (_host, session) = session();
        let take = session
            .builder("a")
            .with_parm("/obj/geo1", "scale", Some(Value::Float(9.0)))
            .create()
            .unwrap();
        let member = take.members().unwrap().get("/obj/geo1").unwrap();
        assert_eq!(member.parm_value("scale"), Some(&Value::Float(1.0)));
    }

    #[test]
    fn test_builder_skips_missing_entries() {
        let (_host, session) = session();
        let take = session
            .builder("a")
            .with_node("/obj/ghost")
            .with_parm("/obj/ghost", "scale", None)
            .with_parm("/obj/geo1", "missing", None)
            .with_flag("/obj/geo1", Flag::Bypass, None)
            .with_parm("/obj/geo1", "tx", None)
            .create()
            .unwrap();

        let members = take.members().unwrap();
        assert_eq!(members.paths().collect::<Vec<_>>(), vec!["/obj/geo1"]);
        let member = members.get("/obj/geo1").unwrap();
        assert!(member.flags.is_empty());
        assert_eq!(member.parm_names().collect::<Vec<_>>(), vec!["tx"]);
    }

    #[test]
    fn test_builder_whole_node_and_parent() {
        let (host, session) = session();
        session.create_take("seq", None, false).unwrap();
        let take = session
            .builder("shot")
            .with_parent("seq")
            .with_node("/obj/geo1")
            .set_current(true)
            .create()
            .unwrap();

        assert_eq!(take.parent_name(), Some("seq"));
        assert_eq!(take.members().unwrap().get("/obj/geo1").unwrap().parms.len(), 4);
        assert_eq!(host.active_take(), "shot");
    }
}
