//! The [`Take`] entity: a named overlay tracked locally as a [`MemberStore`]
//! and mirrored into the host through directives.
//!
//! Every mutation talks to the host first and only touches the local store
//! once the host has accepted the directive.

pub mod builder;
pub mod reconcile;
mod resolve;

pub use builder::TakeBuilder;
pub use reconcile::parse_script;

use std::fmt::Write as _;
use std::path::Path;

use crate::error::TakeError;
use crate::host::Directive;
use crate::model::{
    allocate, sanitize, Flag, MemberStore, MergePolicy, ObjectRef, ParmRef, TakeMember,
};
use crate::session::TakeSession;

#[derive(Debug, Clone)]
pub struct Take {
    session: TakeSession,
    name: String,
    parent: Option<String>,
    members: MemberStore,
    created: bool,
}

impl Take {
    pub(crate) fn from_parts(
        session: &TakeSession,
        name: String,
        parent: Option<String>,
        members: MemberStore,
    ) -> Self {
        Self {
            session: session.clone(),
            name,
            parent,
            members,
            created: false,
        }
    }

    /// Create a new take in the host.
    ///
    /// `name` is sanitized and made unique first. Without `parent` the take
    /// goes under the active take, or under the root when the root is active.
    /// Afterwards the new take is active if `set_current`, else the root is.
    pub fn create(
        session: &TakeSession,
        name: &str,
        parent: Option<&str>,
        set_current: bool,
    ) -> Result<Take, TakeError> {
        let existing = session.list_take_names()?;
        let name = allocate(&sanitize(name), &existing);

        let parent = match parent {
            Some(p) if session.is_root(p) => None,
            Some(p) if existing.iter().any(|n| n == p) => Some(p.to_string()),
            Some(p) => {
                return Err(TakeError::Creation {
                    name,
                    message: format!("parent take '{p}' not found"),
                })
            }
            None => {
                let active = session.active_take_name();
                Some(active).filter(|a| !session.is_root(a))
            }
        };

        session
            .run(&Directive::Create {
                name: name.clone(),
                parent: parent.clone(),
            })
            .map_err(|message| TakeError::Creation {
                name: name.clone(),
                message,
            })?;
        tracing::info!(
            take = %name,
            parent = parent.as_deref().unwrap_or(session.root_take()),
            "Created take"
        );

        if set_current {
            session.set_active(&name)?;
        } else {
            session.return_to_main()?;
        }

        Ok(Take {
            session: session.clone(),
            name,
            parent,
            members: MemberStore::new(),
            created: true,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent recorded locally; `None` means the root take.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// `true` when this value was created here, `false` when it was rebuilt
    /// from a host script.
    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn session(&self) -> &TakeSession {
        &self.session
    }

    pub fn exists(&self) -> Result<bool, TakeError> {
        self.session.exists(&self.name)
    }

    fn ensure_exists(&self) -> Result<(), TakeError> {
        if self.exists()? {
            Ok(())
        } else {
            Err(TakeError::NotFound(self.name.clone()))
        }
    }

    pub fn is_current(&self) -> bool {
        self.session.active_take_name() == self.name
    }

    pub fn set_current(&self) -> Result<(), TakeError> {
        self.session.set_active(&self.name)
    }

    /// The local member store. Fails once the take is gone from the host.
    pub fn members(&self) -> Result<&MemberStore, TakeError> {
        self.ensure_exists()?;
        Ok(&self.members)
    }

    /// Include or exclude one flag of `node`.
    ///
    /// With `set_value` on an inclusion, the flag is then written through the
    /// host so that this take overrides it.
    pub fn include_flag(
        &mut self,
        flag: Flag,
        node: impl Into<ObjectRef>,
        include: bool,
        set_value: Option<bool>,
    ) -> Result<(), TakeError> {
        self.ensure_exists()?;
        let node = resolve::resolve_node(self.session.host(), &node.into())?;
        if self.session.host().flag_value(node.id, flag).is_none() {
            return Err(TakeError::InvalidFlagKind {
                node: node.path.clone(),
                flag,
            });
        }

        self.set_current()?;
        self.session
            .run(&Directive::IncludeFlag {
                flag,
                path: node.path.clone(),
                exclude: !include,
            })
            .map_err(TakeError::Directive)?;
        tracing::debug!(take = %self.name, node = %node.path, %flag, include, "Updated flag");

        if !include {
            self.members.exclude_flag(&node.path, flag);
            return Ok(());
        }
        // Read under this take so the value matches its overlay.
        let current = self.session.host().flag_value(node.id, flag);
        self.members.include_flag(&node.path, flag, current);

        if let Some(value) = set_value {
            self.session
                .host()
                .set_flag(node.id, flag, value)
                .map_err(TakeError::Directive)?;
            self.members.include_flag(&node.path, flag, Some(value));
        }
        Ok(())
    }

    pub fn include_display_flag(
        &mut self,
        node: impl Into<ObjectRef>,
        include: bool,
    ) -> Result<(), TakeError> {
        self.include_flag(Flag::Display, node, include, None)
    }

    pub fn include_render_flag(
        &mut self,
        node: impl Into<ObjectRef>,
        include: bool,
    ) -> Result<(), TakeError> {
        self.include_flag(Flag::Render, node, include, None)
    }

    pub fn include_bypass_flag(
        &mut self,
        node: impl Into<ObjectRef>,
        include: bool,
    ) -> Result<(), TakeError> {
        self.include_flag(Flag::Bypass, node, include, None)
    }

    /// Include or exclude individual parameters. A node that does not resolve
    /// aborts the whole call before anything is sent; a parameter missing on
    /// a valid node is skipped.
    pub fn include_parms(&mut self, parms: &[ParmRef], include: bool) -> Result<(), TakeError> {
        self.ensure_exists()?;
        let resolved = resolve::resolve_parms(self.session.host(), parms)?;
        self.set_current()?;

        for (node, parm) in resolved {
            self.session
                .run(&Directive::IncludeParm {
                    path: node.path.clone(),
                    parm: parm.clone(),
                    exclude: !include,
                })
                .map_err(TakeError::Directive)?;

            if include {
                let value = self.session.host().eval_parm(node.id, &parm);
                self.members.include_parm(&node.path, &parm, value);
            } else {
                self.members.exclude_parm(&node.path, &parm);
            }
        }
        tracing::debug!(take = %self.name, count = parms.len(), include, "Updated parameters");
        Ok(())
    }

    /// Include or exclude parameters of one node. An empty `filter` means
    /// every parameter and goes to the host as a single wildcard directive;
    /// otherwise names are matched against the glob patterns in `filter`.
    pub fn include_parms_from_node(
        &mut self,
        node: impl Into<ObjectRef>,
        filter: &[&str],
        include: bool,
    ) -> Result<(), TakeError> {
        self.ensure_exists()?;
        let node = resolve::resolve_node(self.session.host(), &node.into())?;
        let names = self.session.host().parm_names(node.id);

        if !filter.is_empty() {
            let case_insensitive = self.session.config().case_insensitive_filters;
            let host = self.session.host();
            let parms: Vec<ParmRef> = names
                .iter()
                .filter(|n| filter.iter().any(|p| host.pattern_match(p, n, case_insensitive)))
                .map(|n| ParmRef::new(node.id, n))
                .collect();
            if parms.is_empty() {
                tracing::warn!(node = %node.path, ?filter, "No parameter matches the filter");
            }
            return self.include_parms(&parms, include);
        }

        self.set_current()?;
        self.session
            .run(&Directive::IncludeParm {
                path: node.path.clone(),
                parm: "*".to_string(),
                exclude: !include,
            })
            .map_err(TakeError::Directive)?;

        for name in &names {
            if include {
                let value = self.session.host().eval_parm(node.id, name);
                self.members.include_parm(&node.path, name, value);
            } else {
                self.members.exclude_parm(&node.path, name);
            }
        }
        tracing::debug!(take = %self.name, node = %node.path, include, "Updated all parameters");
        Ok(())
    }

    /// Include everything `member` names on `node`. With `set_values`, the
    /// captured values carried by `member` are written to the host afterwards.
    pub fn include_member(
        &mut self,
        node: impl Into<ObjectRef>,
        member: &TakeMember,
        set_values: bool,
    ) -> Result<(), TakeError> {
        self.ensure_exists()?;
        let node = resolve::resolve_node(self.session.host(), &node.into())?;

        for (flag, value) in &member.flags {
            let set_value = if set_values { *value } else { None };
            self.include_flag(*flag, node.id, true, set_value)?;
        }

        if member.parms.is_empty() {
            return Ok(());
        }
        let parms: Vec<ParmRef> = member
            .parm_names()
            .map(|name| ParmRef::new(node.id, name))
            .collect();
        self.include_parms(&parms, true)?;

        if !set_values {
            return Ok(());
        }
        for (name, value) in &member.parms {
            let Some(value) = value else { continue };
            if !self.session.host().has_parm(node.id, name) {
                continue;
            }
            match self.session.host().set_parm(node.id, name, value.clone()) {
                Ok(()) => self
                    .members
                    .include_parm(&node.path, name, Some(value.clone())),
                Err(error) => {
                    tracing::warn!(node = %node.path, parm = %name, %error, "Value not applied")
                }
            }
        }
        Ok(())
    }

    /// Merge `source` into this take. Attributes both takes include keep this
    /// take's values unless `force` is set.
    pub fn include_parms_from_take(&mut self, source: &Take, force: bool) -> Result<(), TakeError> {
        self.ensure_exists()?;
        source.ensure_exists()?;

        self.session
            .run(&Directive::Merge {
                dest: self.name.clone(),
                src: source.name.clone(),
                force,
            })
            .map_err(TakeError::Directive)?;
        self.members
            .merge(&source.members, MergePolicy::from_force(force));
        tracing::info!(take = %self.name, source = %source.name, force, "Merged take");
        Ok(())
    }

    /// Move this take under `parent`, or under the root take when `None`.
    pub fn set_parent(&mut self, parent: Option<&str>) -> Result<(), TakeError> {
        self.ensure_exists()?;
        let parent = match parent {
            Some(p) if !self.session.is_root(p) => {
                if !self.session.exists(p)? {
                    return Err(TakeError::NotFound(p.to_string()));
                }
                Some(p.to_string())
            }
            _ => None,
        };

        let target = parent
            .clone()
            .unwrap_or_else(|| self.session.root_take().to_string());
        self.session
            .run(&Directive::Move {
                name: self.name.clone(),
                parent: target.clone(),
            })
            .map_err(TakeError::Directive)?;
        tracing::info!(take = %self.name, parent = %target, "Moved take");

        self.parent = parent;
        Ok(())
    }

    /// The parent rebuilt from the host, or `None` under the root take.
    pub fn parent(&self) -> Result<Option<Take>, TakeError> {
        self.ensure_exists()?;
        match &self.parent {
            Some(name) => self.session.take_from_name(name).map(Some),
            None => Ok(None),
        }
    }

    pub fn children(&self) -> Result<Vec<Take>, TakeError> {
        self.ensure_exists()?;
        let is_root = self.session.is_root(&self.name);
        self.session
            .take_tree()?
            .into_iter()
            .filter(|node| match &node.parent {
                Some(parent) => *parent == self.name,
                None => is_root && node.depth == 1,
            })
            .map(|node| self.session.take_from_name(&node.name))
            .collect()
    }

    /// Rename the take. Returns `false` without contacting the host when
    /// `new_name` is the current name; the name actually given may differ
    /// after sanitizing and de-duplication, see [`Take::name`].
    pub fn rename(&mut self, new_name: &str) -> Result<bool, TakeError> {
        if new_name == self.name {
            return Ok(false);
        }
        let existing = self.session.list_take_names()?;
        if !existing.contains(&self.name) {
            return Err(TakeError::NotFound(self.name.clone()));
        }
        let name = allocate(&sanitize(new_name), &existing);

        self.session
            .run(&Directive::Rename {
                from: self.name.clone(),
                to: name.clone(),
            })
            .map_err(TakeError::Directive)?;
        tracing::info!(from = %self.name, to = %name, "Renamed take");

        self.name = name;
        Ok(true)
    }

    /// Create a new take and replay every member of this one into it.
    ///
    /// Not atomic: a failure partway leaves the copy with whatever was
    /// already included.
    pub fn copy(&self, name: Option<&str>, set_current: bool) -> Result<Take, TakeError> {
        self.ensure_exists()?;
        let name = name
            .filter(|n| !n.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("{}_copy", self.name));

        let mut copy = Take::create(&self.session, &name, None, false)?;
        for (path, member) in self.members.iter() {
            copy.include_member(path, member, false)?;
        }

        if set_current {
            copy.set_current()?;
        } else {
            self.session.return_to_main()?;
        }
        tracing::info!(take = %self.name, copy = %copy.name, "Copied take");
        Ok(copy)
    }

    /// Delete the take from the host, with its descendants if `recursive`.
    pub fn remove(self, recursive: bool) -> Result<(), TakeError> {
        self.session
            .run(&Directive::Delete {
                name: self.name.clone(),
                recursive,
            })
            .map_err(|message| TakeError::Delete {
                name: self.name.clone(),
                message,
            })?;
        tracing::info!(take = %self.name, recursive, "Removed take");
        Ok(())
    }

    pub fn save_to_file(&self, path: &Path, recursive: bool) -> Result<(), TakeError> {
        self.ensure_exists()?;
        self.session
            .run(&Directive::Save {
                file: path.to_string_lossy().into_owned(),
                name: self.name.clone(),
                recursive,
            })
            .map_err(TakeError::Directive)?;
        tracing::info!(take = %self.name, file = %path.display(), recursive, "Saved take");
        Ok(())
    }

    /// Human-readable listing of every member with its captured values.
    pub fn members_report(&self) -> Result<String, TakeError> {
        let members = self.members()?;
        let mut out = format!("Nodes and parms included in take: {}\n", self.name);
        for (path, member) in members.iter() {
            let _ = writeln!(out, "\n{path}:");
            for (flag, value) in &member.flags {
                let _ = writeln!(out, "    {} : {}", flag.label(), display_captured(value));
            }
            for (parm, value) in &member.parms {
                let _ = writeln!(out, "    {parm} : {}", display_captured(value));
            }
        }
        Ok(out)
    }
}

fn display_captured<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl std::fmt::Display for Take {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Take '{}' (", self.name)?;
        match &self.parent {
            Some(parent) => write!(f, "parent {parent}")?,
            None => write!(f, "parent {}", self.session.root_take())?,
        }
        write!(f, ", {} members)", self.members.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::host::{ActiveTakeController, MemoryHost, SceneGraph, SceneNode};
    use crate::model::Value;
    use std::rc::Rc;

    fn session() -> (Rc<MemoryHost>, TakeSession) {
        let host = Rc::new(MemoryHost::new());
        host.add_node(
            SceneNode::new("/obj/geo1")
                .flag(Flag::Display, true)
                .flag(Flag::Render, true)
                .parm("scale", 1.0)
                .parm("tx", 0.0)
                .parm("ty", 0.0),
        );
        host.add_node(SceneNode::new("/obj/geo2").flag(Flag::Display, true).parm("scale", 2.0));
        let session = TakeSession::new(host.clone());
        (host, session)
    }

    fn has_member(take: &Take, path: &str) -> bool {
        take.members().unwrap().contains(path)
    }

    #[test]
    fn test_create_sanitizes_and_returns_to_root() {
        let (host, session) = session();
        let take = Take::create(&session, "shot 010!", None, false).unwrap();
        assert_eq!(take.name(), "shot_010_");
        assert!(take.is_created());
        assert!(take.members().unwrap().is_empty());
        assert_eq!(host.active_take(), "Main");
        assert!(!take.is_current());
    }

    #[test]
    fn test_create_duplicate_increments_trailing_number() {
        let (_host, session) = session();
        let first = Take::create(&session, "t1", None, false).unwrap();
        let mut second = Take::create(&session, "t1", None, false).unwrap();
        assert_eq!(first.name(), "t1");
        assert_eq!(second.name(), "t2");

        second.set_parent(Some("t1")).unwrap();
        assert_eq!(second.parent_name(), Some("t1"));
        assert_eq!(second.parent().unwrap().unwrap().name(), "t1");
        assert!(first.parent().unwrap().is_none());
    }

    #[test]
    fn test_create_defaults_parent_to_active_take() {
        let (_host, session) = session();
        let seq = Take::create(&session, "seq", None, true).unwrap();
        let shot = Take::create(&session, "shot", None, true).unwrap();
        assert_eq!(shot.parent_name(), Some("seq"));
        assert!(shot.is_current());
        assert!(!seq.is_current());
    }

    #[test]
    fn test_create_with_unknown_parent_fails() {
        let (_host, session) = session();
        let err = Take::create(&session, "a", Some("ghost"), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Creation);
        assert!(!session.exists("a").unwrap());
    }

    #[test]
    fn test_round_trip_through_reconciler() {
        let (_host, session) = session();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        take.include_display_flag("/obj/geo1", true).unwrap();
        take.include_parms(&[ParmRef::new("/obj/geo1", "scale")], true)
            .unwrap();

        let rebuilt = session.take_from_name("a").unwrap();
        assert!(!rebuilt.is_created());
        let member = rebuilt.members().unwrap().get("/obj/geo1").unwrap();
        assert_eq!(member.flag_value(Flag::Display), Some(true));
        assert_eq!(member.parm_value("scale"), Some(&Value::Float(1.0)));
    }

    #[test]
    fn test_include_then_exclude_display_drops_member() {
        let (_host, session) = session();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        take.include_display_flag("/obj/geo1", true).unwrap();
        assert!(has_member(&take, "/obj/geo1"));
        assert!(take.is_current());

        take.include_display_flag("/obj/geo1", false).unwrap();
        assert!(!has_member(&take, "/obj/geo1"));
        assert!(session.take_from_name("a").unwrap().members().unwrap().is_empty());
    }

    #[test]
    fn test_include_flag_with_value_writes_host() {
        let (host, session) = session();
        let id = host.resolve("/obj/geo1").unwrap();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        take.include_flag(Flag::Display, id, true, Some(false)).unwrap();

        let member = take.members().unwrap().get("/obj/geo1").unwrap();
        assert_eq!(member.flag_value(Flag::Display), Some(false));
        assert_eq!(host.flag_value(id, Flag::Display), Some(false));

        session.return_to_main().unwrap();
        assert_eq!(host.flag_value(id, Flag::Display), Some(true));
    }

    #[test]
    fn test_include_flag_captures_value_inherited_from_parent() {
        let (host, session) = session();
        let id = host.resolve("/obj/geo1").unwrap();
        let mut a = Take::create(&session, "a", None, false).unwrap();
        a.include_flag(Flag::Display, id, true, Some(false)).unwrap();

        let mut b = Take::create(&session, "b", Some("a"), false).unwrap();
        session.return_to_main().unwrap();
        b.include_display_flag(id, true).unwrap();

        let local = b
            .members()
            .unwrap()
            .get("/obj/geo1")
            .unwrap()
            .flag_value(Flag::Display);
        assert_eq!(local, Some(false));
        assert_eq!(host.flag_value(id, Flag::Display), Some(false));

        let rebuilt = session.take_from_name("b").unwrap();
        let rebuilt = rebuilt
            .members()
            .unwrap()
            .get("/obj/geo1")
            .unwrap()
            .flag_value(Flag::Display);
        assert_eq!(local, rebuilt);
    }

    #[test]
    fn test_include_on_removed_take_is_not_found() {
        let (_host, session) = session();
        Take::create(&session, "a", None, false).unwrap();
        let mut handle = session.take_from_name("a").unwrap();
        session.take_from_name("a").unwrap().remove(false).unwrap();

        let err = handle.include_display_flag("/obj/geo1", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = handle
            .include_parms(&[ParmRef::new("/obj/geo1", "scale")], true)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = handle
            .include_parms_from_node("/obj/geo1", &[], true)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = handle
            .include_member("/obj/geo1", &TakeMember::default(), false)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_include_unsupported_flag() {
        let (_host, session) = session();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        let err = take.include_bypass_flag("/obj/geo1", true).unwrap_err();
        assert_eq!(err.to_string(), "Node /obj/geo1 does not have bypass flag");

        let err = take.include_render_flag("/obj/nope", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNode);
    }

    #[test]
    fn test_include_parms_skips_missing_and_aborts_on_bad_node() {
        let (_host, session) = session();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        take.include_parms(
            &[
                ParmRef::new("/obj/geo1", "scale"),
                ParmRef::new("/obj/geo1", "missing"),
            ],
            true,
        )
        .unwrap();
        let member = take.members().unwrap().get("/obj/geo1").unwrap();
        assert_eq!(member.parm_names().collect::<Vec<_>>(), vec!["scale"]);

        let err = take
            .include_parms(
                &[
                    ParmRef::new("/obj/geo2", "scale"),
                    ParmRef::new("/obj/ghost", "scale"),
                ],
                true,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNode);
        assert!(!has_member(&take, "/obj/geo2"));
    }

    #[test]
    fn test_filter_includes_only_matching_parms() {
        let (_host, session) = session();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        take.include_parms_from_node("/obj/geo1", &["scale"], true)
            .unwrap();
        let member = take.members().unwrap().get("/obj/geo1").unwrap();
        assert_eq!(member.parm_names().collect::<Vec<_>>(), vec!["scale"]);

        take.include_parms_from_node("/obj/geo1", &["t?"], true)
            .unwrap();
        let member = take.members().unwrap().get("/obj/geo1").unwrap();
        assert_eq!(member.parms.len(), 3);
    }

    #[test]
    fn test_whole_node_sends_wildcard() {
        let (host, session) = session();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        host.clear_history();
        take.include_parms_from_node("/obj/geo1", &[], true).unwrap();
        assert!(host
            .history()
            .contains(&"takeinclude /obj/geo1 *".to_string()));
        assert_eq!(take.members().unwrap().get("/obj/geo1").unwrap().parms.len(), 3);

        take.include_parms_from_node("/obj/geo1", &[], false).unwrap();
        assert!(!has_member(&take, "/obj/geo1"));
    }

    #[test]
    fn test_merge_respects_force() {
        let (host, session) = session();
        let id = host.resolve("/obj/geo1").unwrap();
        let mut dest = Take::create(&session, "dest", None, false).unwrap();
        dest.include_parms(&[ParmRef::new(id, "scale")], true).unwrap();

        let mut src = Take::create(&session, "src", None, false).unwrap();
        src.include_member(
            id,
            &TakeMember {
                parms: [("scale".to_string(), Some(Value::Float(5.0)))].into(),
                ..TakeMember::default()
            },
            true,
        )
        .unwrap();

        dest.include_parms_from_take(&src, false).unwrap();
        let scale = |t: &Take| {
            t.members()
                .unwrap()
                .get("/obj/geo1")
                .unwrap()
                .parm_value("scale")
                .cloned()
        };
        assert_eq!(scale(&dest), Some(Value::Float(1.0)));

        dest.include_parms_from_take(&src, true).unwrap();
        assert_eq!(scale(&dest), Some(Value::Float(5.0)));
        dest.set_current().unwrap();
        assert_eq!(host.eval_parm(id, "scale"), Some(Value::Float(5.0)));
    }

    #[test]
    fn test_copy_replays_members() {
        let (_host, session) = session();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        take.include_display_flag("/obj/geo1", true).unwrap();
        take.include_parms(&[ParmRef::new("/obj/geo2", "scale")], true)
            .unwrap();
        session.return_to_main().unwrap();

        let copy = take.copy(None, false).unwrap();
        assert_eq!(copy.name(), "a_copy");
        assert_eq!(
            copy.members().unwrap().paths().collect::<Vec<_>>(),
            vec!["/obj/geo1", "/obj/geo2"]
        );
        assert_eq!(session.active_take_name(), "Main");

        let named = take.copy(Some("b"), true).unwrap();
        assert!(named.is_current());
    }

    #[test]
    fn test_rename() {
        let (_host, session) = session();
        Take::create(&session, "b", None, false).unwrap();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        assert!(!take.rename("a").unwrap());
        assert!(take.rename("b").unwrap());
        assert_eq!(take.name(), "b1");
        assert!(session.exists("b1").unwrap());
        assert!(!session.exists("a").unwrap());
    }

    #[test]
    fn test_remove_then_not_found() {
        let (_host, session) = session();
        let take = Take::create(&session, "a", None, false).unwrap();
        let handle = session.take_from_name("a").unwrap();
        take.remove(false).unwrap();

        assert_eq!(handle.members().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(handle.clone().remove(false).unwrap_err().kind(), ErrorKind::Delete);
    }

    #[test]
    fn test_children_and_recursive_remove() {
        let (_host, session) = session();
        let parent = Take::create(&session, "seq", None, false).unwrap();
        Take::create(&session, "shot_a", Some("seq"), false).unwrap();
        Take::create(&session, "shot_b", Some("seq"), false).unwrap();

        let children: Vec<String> = parent
            .children()
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(children, vec!["shot_a", "shot_b"]);

        parent.remove(true).unwrap();
        assert_eq!(session.list_take_names().unwrap(), vec!["Main"]);
    }

    #[test]
    fn test_set_parent_unknown_and_root() {
        let (_host, session) = session();
        Take::create(&session, "a", None, false).unwrap();
        let mut b = Take::create(&session, "b", Some("a"), false).unwrap();
        assert_eq!(
            b.set_parent(Some("ghost")).unwrap_err().kind(),
            ErrorKind::NotFound
        );
        b.set_parent(None).unwrap();
        assert!(b.parent().unwrap().is_none());
        assert_eq!(session.take_tree().unwrap()[2].depth, 1);
    }

    #[test]
    fn test_members_report() {
        let (_host, session) = session();
        let mut take = Take::create(&session, "a", None, false).unwrap();
        take.include_display_flag("/obj/geo1", true).unwrap();
        let report = take.members_report().unwrap();
        assert!(report.starts_with("Nodes and parms included in take: a\n"));
        assert!(report.contains("/obj/geo1:\n    display : true\n"));
        assert_eq!(take.to_string(), "Take 'a' (parent Main, 1 members)");
    }
}
