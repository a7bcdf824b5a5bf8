use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::flag::Flag;
use super::value::Value;

/// Inclusion record for one object within one take.
///
/// Each included flag and parameter optionally carries the value captured
/// when it was included or reconciled. Captured values are snapshots; they
/// are never refreshed from the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TakeMember {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<Flag, Option<bool>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parms: BTreeMap<String, Option<Value>>,
}

impl TakeMember {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.parms.is_empty()
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains_key(&flag)
    }

    pub fn has_parm(&self, name: &str) -> bool {
        self.parms.contains_key(name)
    }

    pub fn flag_value(&self, flag: Flag) -> Option<bool> {
        self.flags.get(&flag).copied().flatten()
    }

    pub fn parm_value(&self, name: &str) -> Option<&Value> {
        self.parms.get(name).and_then(Option::as_ref)
    }

    pub fn parm_names(&self) -> impl Iterator<Item = &str> {
        self.parms.keys().map(String::as_str)
    }
}

/// How to resolve an attribute present in both stores during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    #[default]
    KeepDestination,
    OverwriteWithSource,
}

impl MergePolicy {
    pub fn from_force(force: bool) -> Self {
        if force {
            MergePolicy::OverwriteWithSource
        } else {
            MergePolicy::KeepDestination
        }
    }
}

/// Object path → [`TakeMember`].
///
/// Never holds an empty member: every removal prunes the record once its last
/// flag or parameter is gone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MemberStore {
    members: BTreeMap<String, TakeMember>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&TakeMember> {
        self.members.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.members.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TakeMember)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn include_flag(&mut self, path: &str, flag: Flag, value: Option<bool>) {
        self.members
            .entry(path.to_string())
            .or_default()
            .flags
            .insert(flag, value);
    }

    pub fn exclude_flag(&mut self, path: &str, flag: Flag) {
        self.update(path, |m| {
            m.flags.remove(&flag);
        });
    }

    pub fn include_parm(&mut self, path: &str, name: &str, value: Option<Value>) {
        self.members
            .entry(path.to_string())
            .or_default()
            .parms
            .insert(name.to_string(), value);
    }

    pub fn exclude_parm(&mut self, path: &str, name: &str) {
        self.update(path, |m| {
            m.parms.remove(name);
        });
    }

    /// Insert a whole member, replacing any record for `path`. Empty members
    /// remove the record instead.
    pub fn insert(&mut self, path: &str, member: TakeMember) {
        if member.is_empty() {
            self.members.remove(path);
        } else {
            self.members.insert(path.to_string(), member);
        }
    }

    /// Union `source` into `self` attribute by attribute. Attributes present
    /// on both sides are settled by `policy`.
    pub fn merge(&mut self, source: &MemberStore, policy: MergePolicy) {
        for (path, incoming) in &source.members {
            let dest = self.members.entry(path.clone()).or_default();
            for (flag, value) in &incoming.flags {
                if policy == MergePolicy::OverwriteWithSource || !dest.flags.contains_key(flag) {
                    dest.flags.insert(*flag, *value);
                }
            }
            for (name, value) in &incoming.parms {
                if policy == MergePolicy::OverwriteWithSource || !dest.parms.contains_key(name) {
                    dest.parms.insert(name.clone(), value.clone());
                }
            }
        }
        self.members.retain(|_, m| !m.is_empty());
    }

    fn update(&mut self, path: &str, f: impl FnOnce(&mut TakeMember)) {
        if let Some(member) = self.members.get_mut(path) {
            f(member);
            if member.is_empty() {
                self.members.remove(path);
            }
        }
    }
}

impl<'de> Deserialize<'de> for MemberStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let members = BTreeMap::<String, TakeMember>::deserialize(deserializer)?;
        let mut store = MemberStore::new();
        for (path, member) in members {
            store.insert(&path, member);
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_empty_members(store: &MemberStore) {
        for (path, member) in store.iter() {
            assert!(!member.is_empty(), "empty member left for {path}");
        }
    }

    #[test]
    fn test_flag_include_then_exclude_prunes_member() {
        let mut store = MemberStore::new();
        store.include_flag("/obj/geo1", Flag::Display, Some(true));
        assert!(store.get("/obj/geo1").unwrap().has_flag(Flag::Display));

        store.exclude_flag("/obj/geo1", Flag::Display);
        assert!(!store.contains("/obj/geo1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_exclude_keeps_member_with_remaining_attributes() {
        let mut store = MemberStore::new();
        store.include_flag("/obj/geo1", Flag::Render, None);
        store.include_parm("/obj/geo1", "scale", Some(Value::Float(2.0)));

        store.exclude_flag("/obj/geo1", Flag::Render);
        let member = store.get("/obj/geo1").unwrap();
        assert!(member.flags.is_empty());
        assert_eq!(member.parm_value("scale"), Some(&Value::Float(2.0)));

        store.exclude_parm("/obj/geo1", "scale");
        assert!(!store.contains("/obj/geo1"));
    }

    #[test]
    fn test_exclude_unknown_path_is_noop() {
        let mut store = MemberStore::new();
        store.exclude_parm("/obj/nothing", "tx");
        store.exclude_flag("/obj/nothing", Flag::Bypass);
        assert!(store.is_empty());
    }

    #[test]
    fn test_no_empty_members_after_mixed_sequence() {
        let mut store = MemberStore::new();
        let paths = ["/obj/a", "/obj/b", "/obj/c"];
        for (i, path) in paths.iter().enumerate() {
            store.include_parm(path, "tx", None);
            store.include_flag(path, Flag::Display, None);
            if i % 2 == 0 {
                store.exclude_parm(path, "tx");
            }
            store.exclude_flag(path, Flag::Display);
            assert_no_empty_members(&store);
        }
        store.insert("/obj/d", TakeMember::default());
        assert_no_empty_members(&store);
        assert_eq!(store.paths().collect::<Vec<_>>(), vec!["/obj/b"]);
    }

    #[test]
    fn test_merge_keep_destination_then_overwrite() {
        let mut dest = MemberStore::new();
        dest.include_parm("/obj/geo1", "scale", Some(Value::Float(1.0)));

        let mut source = MemberStore::new();
        source.include_parm("/obj/geo1", "scale", Some(Value::Float(5.0)));
        source.include_parm("/obj/geo1", "tx", Some(Value::Float(3.0)));
        source.include_flag("/obj/geo2", Flag::Bypass, Some(false));

        dest.merge(&source, MergePolicy::KeepDestination);
        let geo1 = dest.get("/obj/geo1").unwrap();
        assert_eq!(geo1.parm_value("scale"), Some(&Value::Float(1.0)));
        assert_eq!(geo1.parm_value("tx"), Some(&Value::Float(3.0)));
        assert!(dest.get("/obj/geo2").unwrap().has_flag(Flag::Bypass));

        dest.merge(&source, MergePolicy::OverwriteWithSource);
        let geo1 = dest.get("/obj/geo1").unwrap();
        assert_eq!(geo1.parm_value("scale"), Some(&Value::Float(5.0)));
    }

    #[test]
    fn test_merge_policy_from_force() {
        assert_eq!(MergePolicy::from_force(false), MergePolicy::KeepDestination);
        assert_eq!(MergePolicy::from_force(true), MergePolicy::OverwriteWithSource);
    }

    #[test]
    fn test_store_json_shape() {
        let mut store = MemberStore::new();
        store.include_flag("/obj/geo1", Flag::Display, Some(true));
        store.include_parm("/obj/geo1", "scale", Some(Value::Float(1.5)));
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["/obj/geo1"]["flags"]["display"], serde_json::json!(true));
        assert_eq!(json["/obj/geo1"]["parms"]["scale"], serde_json::json!(1.5));
    }

    #[test]
    fn test_deserialize_drops_empty_members() {
        let store: MemberStore = serde_json::from_str(
            r#"{"/obj/a": {}, "/obj/b": {"flags": {}, "parms": {}}, "/obj/c": {"parms": {"tx": 0.5}}}"#,
        )
        .unwrap();
        assert_no_empty_members(&store);
        assert_eq!(store.paths().collect::<Vec<_>>(), vec!["/obj/c"]);
        assert_eq!(
            store.get("/obj/c").unwrap().parm_value("tx"),
            Some(&Value::Float(0.5))
        );
    }
}
