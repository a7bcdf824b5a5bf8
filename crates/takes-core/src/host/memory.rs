//! A self-contained host: scene nodes, takes and the take command set, all in
//! memory. Serves as the test double for the core and as the backend of the
//! `takes` command-line tool, which persists [`SceneState`] as JSON.
//!
//! Parameters are grouped in tuples. Including any component of a tuple
//! includes the whole tuple, and scripts name the tuple (`t`), not its
//! components (`tx`, `ty`, `tz`). Each take keeps overlay values for what it
//! includes; reads walk from the active take up through its ancestors.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TakeError;
use crate::model::{allocate, sanitize, Flag, NodeId, Value};

use super::directive::Directive;
use super::script::{ScriptEntry, ScriptLine};
use super::{ActiveTakeController, DirectiveChannel, DirectiveOutput, SceneGraph};

const DEFAULT_ROOT: &str = "Main";
const SAVE_FORMAT_VERSION: u32 = 1;

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parm {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParmTuple {
    pub name: String,
    pub components: Vec<Parm>,
}

impl ParmTuple {
    fn component(&self, name: &str) -> Option<&Parm> {
        self.components.iter().find(|p| p.name == name)
    }

    fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|p| p.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub path: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<Flag, bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parms: Vec<ParmTuple>,
}

impl SceneNode {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            flags: BTreeMap::new(),
            parms: Vec::new(),
        }
    }

    pub fn flag(mut self, flag: Flag, value: bool) -> Self {
        self.flags.insert(flag, value);
        self
    }

    /// A scalar parameter: a tuple with a single component of the same name.
    pub fn parm(self, name: &str, value: impl Into<Value>) -> Self {
        self.tuple(name, &[name], value)
    }

    /// A multi-component parameter; every component starts at `value`.
    pub fn tuple(mut self, name: &str, components: &[&str], value: impl Into<Value>) -> Self {
        let value = value.into();
        self.parms.push(ParmTuple {
            name: name.to_string(),
            components: components
                .iter()
                .map(|c| Parm {
                    name: c.to_string(),
                    value: value.clone(),
                })
                .collect(),
        });
        self
    }

    /// The tuple named `parm`, or the tuple owning a component named `parm`.
    fn tuple_of(&self, parm: &str) -> Option<&ParmTuple> {
        self.parms
            .iter()
            .find(|t| t.name == parm)
            .or_else(|| self.parms.iter().find(|t| t.component(parm).is_some()))
    }

    fn base_value(&self, parm: &str) -> Option<&Value> {
        self.parms
            .iter()
            .find_map(|t| t.component(parm))
            .map(|p| &p.value)
    }
}

/// One take as the host stores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostTake {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Inclusions in the order they were made. Parameter entries name tuples.
    #[serde(default)]
    pub entries: Vec<ScriptEntry>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parm_values: BTreeMap<String, BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flag_values: BTreeMap<String, BTreeMap<Flag, bool>>,
}

impl HostTake {
    fn includes(&self, entry: &ScriptEntry) -> bool {
        self.entries.contains(entry)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
    #[serde(default)]
    pub auto_mode: bool,
    #[serde(default)]
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub takes: Vec<HostTake>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            root: default_root(),
            active: None,
            auto_mode: false,
            nodes: Vec::new(),
            takes: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SavedTakes {
    version: u32,
    takes: Vec<HostTake>,
}

impl SceneState {
    fn is_root(&self, name: &str) -> bool {
        name == self.root
    }

    fn take_index(&self, name: &str) -> Option<usize> {
        self.takes.iter().position(|t| t.name == name)
    }

    fn take_exists(&self, name: &str) -> bool {
        self.is_root(name) || self.take_index(name).is_some()
    }

    fn node(&self, path: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.path == path)
    }

    fn node_by_id(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| node_id(&n.path) == id)
    }

    fn parent_of(&self, take: &HostTake) -> String {
        take.parent.clone().unwrap_or_else(|| self.root.clone())
    }

    fn children_of(&self, name: &str) -> Vec<String> {
        self.takes
            .iter()
            .filter(|t| self.parent_of(t) == name)
            .map(|t| t.name.clone())
            .collect()
    }

    fn descendants_of(&self, name: &str) -> Vec<String> {
        let mut out = Vec::new();
        for child in self.children_of(name) {
            out.push(child.clone());
            out.extend(self.descendants_of(&child));
        }
        out
    }

    fn all_names(&self) -> Vec<String> {
        std::iter::once(self.root.clone())
            .chain(self.takes.iter().map(|t| t.name.clone()))
            .collect()
    }

    fn listing(&self) -> String {
        let mut lines = vec![self.root.clone()];
        self.list_into(&self.root, 1, &mut lines);
        lines.join("\n")
    }

    fn list_into(&self, name: &str, depth: usize, lines: &mut Vec<String>) {
        for child in self.children_of(name) {
            lines.push(format!("{}{child}", "  ".repeat(depth)));
            self.list_into(&child, depth + 1, lines);
        }
    }

    /// Take indices from the active take up to (excluding) the root.
    fn active_chain(&self) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut cursor = self.active.clone();
        while let Some(name) = cursor {
            match self.take_index(&name) {
                Some(i) if !chain.contains(&i) => {
                    chain.push(i);
                    cursor = self.takes[i].parent.clone();
                }
                _ => break,
            }
        }
        chain
    }

    fn active_take_mut(&mut self) -> Result<&mut HostTake, String> {
        let index = self
            .active
            .as_deref()
            .and_then(|name| self.take_index(name))
            .ok_or_else(|| format!("Cannot edit the {} take", self.root))?;
        Ok(&mut self.takes[index])
    }

    fn effective_parm(&self, node: &SceneNode, parm: &str) -> Option<Value> {
        let tuple = node.tuple_of(parm)?;
        let entry = ScriptEntry::Parm {
            path: node.path.clone(),
            parm: tuple.name.clone(),
        };
        for i in self.active_chain() {
            let take = &self.takes[i];
            if take.includes(&entry) {
                if let Some(v) = take.parm_values.get(&node.path).and_then(|m| m.get(parm)) {
                    return Some(v.clone());
                }
                break;
            }
        }
        node.base_value(parm).cloned()
    }

    fn effective_flag(&self, node: &SceneNode, flag: Flag) -> Option<bool> {
        let base = *node.flags.get(&flag)?;
        let entry = ScriptEntry::Flag {
            flag,
            path: node.path.clone(),
        };
        for i in self.active_chain() {
            let take = &self.takes[i];
            if take.includes(&entry) {
                if let Some(v) = take.flag_values.get(&node.path).and_then(|m| m.get(&flag)) {
                    return Some(*v);
                }
                break;
            }
        }
        Some(base)
    }

    fn check_new_name(&self, name: &str) -> Result<(), String> {
        if name.is_empty() || sanitize(name) != name {
            return Err(format!("Invalid take name: {name}"));
        }
        if self.take_exists(name) {
            return Err(format!("Take name already exists: {name}"));
        }
        Ok(())
    }

    fn existing_take(&self, name: &str) -> Result<usize, String> {
        if self.is_root(name) {
            return Err(format!("Operation not allowed on the {} take", self.root));
        }
        self.take_index(name)
            .ok_or_else(|| format!("Invalid take: {name}"))
    }

    fn apply(&mut self, directive: Directive) -> Result<String, String> {
        match directive {
            Directive::List => Ok(self.listing()),
            Directive::Create { name, parent } => {
                self.check_new_name(&name)?;
                let parent = match parent {
                    Some(p) if !self.take_exists(&p) => {
                        return Err(format!("Invalid parent take: {p}"));
                    }
                    Some(p) => Some(p).filter(|p| !self.is_root(p)),
                    None => self.active.clone(),
                };
                self.takes.push(HostTake {
                    name,
                    parent,
                    ..HostTake::default()
                });
                Ok(String::new())
            }
            Directive::SetActive(name) => {
                if self.is_root(&name) {
                    self.active = None;
                } else if self.take_index(&name).is_some() {
                    self.active = Some(name);
                } else {
                    return Err(format!("Invalid take: {name}"));
                }
                Ok(String::new())
            }
            Directive::Delete { name, recursive } => self.delete(&name, recursive),
            Directive::Rename { from, to } => {
                let index = self.existing_take(&from)?;
                self.check_new_name(&to)?;
                self.takes[index].name = to.clone();
                for take in &mut self.takes {
                    if take.parent.as_deref() == Some(from.as_str()) {
                        take.parent = Some(to.clone());
                    }
                }
                if self.active.as_deref() == Some(from.as_str()) {
                    self.active = Some(to);
                }
                Ok(String::new())
            }
            Directive::Move { name, parent } => {
                let index = self.existing_take(&name)?;
                if !self.take_exists(&parent) {
                    return Err(format!("Invalid parent take: {parent}"));
                }
                if parent == name || self.descendants_of(&name).contains(&parent) {
                    return Err(format!("Cannot move {name} under itself"));
                }
                let parent = Some(parent).filter(|p| !self.is_root(p));
                self.takes[index].parent = parent;
                Ok(String::new())
            }
            Directive::IncludeFlag {
                flag,
                path,
                exclude,
            } => self.include_flag(flag, &path, exclude),
            Directive::IncludeParm {
                path,
                parm,
                exclude,
            } => self.include_parm(&path, &parm, exclude),
            Directive::Merge { dest, src, force } => self.merge(&dest, &src, force),
            Directive::Save {
                file,
                name,
                recursive,
            } => {
                let index = self.existing_take(&name)?;
                let mut takes = vec![self.takes[index].clone()];
                if recursive {
                    for child in self.descendants_of(&name) {
                        if let Some(i) = self.take_index(&child) {
                            takes.push(self.takes[i].clone());
                        }
                    }
                }
                let saved = SavedTakes {
                    version: SAVE_FORMAT_VERSION,
                    takes,
                };
                let json = serde_json::to_string_pretty(&saved)
                    .map_err(|e| format!("Unable to encode takes: {e}"))?;
                std::fs::write(&file, json).map_err(|e| format!("Unable to write {file}: {e}"))?;
                Ok(String::new())
            }
            Directive::Load { file, parent } => self.load(&file, parent),
            Directive::Script(name) => {
                if self.is_root(&name) {
                    return Ok(format!("# Take script for {name}"));
                }
                let index = self
                    .take_index(&name)
                    .ok_or_else(|| format!("Invalid take: {name}"))?;
                let take = &self.takes[index];
                let mut lines = vec![
                    format!("# Take script for {name}"),
                    Directive::Create {
                        name: name.clone(),
                        parent: Some(self.parent_of(take)),
                    }
                    .to_string(),
                ];
                lines.extend(take.entries.iter().map(|entry| {
                    ScriptLine {
                        entry: entry.clone(),
                        exclude: false,
                    }
                    .to_string()
                }));
                Ok(lines.join("\n"))
            }
            Directive::AutoMode(on) => {
                self.auto_mode = on;
                Ok(String::new())
            }
        }
    }

    fn delete(&mut self, name: &str, recursive: bool) -> Result<String, String> {
        let index = self.existing_take(name)?;
        let parent = self.takes[index].parent.clone();
        let mut victims = vec![name.to_string()];
        if recursive {
            victims.extend(self.descendants_of(name));
        } else {
            for take in &mut self.takes {
                if take.parent.as_deref() == Some(name) {
                    take.parent = parent.clone();
                }
            }
        }
        self.takes.retain(|t| !victims.contains(&t.name));
        if self
            .active
            .as_ref()
            .is_some_and(|active| victims.contains(active))
        {
            self.active = None;
        }
        Ok(String::new())
    }

    fn include_flag(&mut self, flag: Flag, path: &str, exclude: bool) -> Result<String, String> {
        let node = self
            .node(path)
            .ok_or_else(|| format!("Invalid node: {path}"))?;
        let current = self
            .effective_flag(node, flag)
            .ok_or_else(|| format!("Node {path} has no {flag} flag"))?;
        let take = self.active_take_mut()?;
        let entry = ScriptEntry::Flag {
            flag,
            path: path.to_string(),
        };

        if exclude {
            take.entries.retain(|e| *e != entry);
            if let Some(values) = take.flag_values.get_mut(path) {
                values.remove(&flag);
                if values.is_empty() {
                    take.flag_values.remove(path);
                }
            }
        } else if !take.includes(&entry) {
            take.entries.push(entry);
            take.flag_values
                .entry(path.to_string())
                .or_default()
                .insert(flag, current);
        }
        Ok(String::new())
    }

    fn include_parm(&mut self, path: &str, parm: &str, exclude: bool) -> Result<String, String> {
        let node = self
            .node(path)
            .ok_or_else(|| format!("Invalid node: {path}"))?;
        let tuples: Vec<&ParmTuple> = if parm == "*" {
            node.parms.iter().collect()
        } else {
            vec![node
                .tuple_of(parm)
                .ok_or_else(|| format!("Invalid parameter: {path}/{parm}"))?]
        };

        // Snapshot before this take starts shadowing the values.
        let snapshot: Vec<(String, Vec<(String, Value)>)> = tuples
            .iter()
            .map(|t| {
                let values = t
                    .component_names()
                    .filter_map(|c| self.effective_parm(node, c).map(|v| (c.to_string(), v)))
                    .collect();
                (t.name.clone(), values)
            })
            .collect();

        let take = self.active_take_mut()?;
        for (tuple, values) in snapshot {
            let entry = ScriptEntry::Parm {
                path: path.to_string(),
                parm: tuple,
            };
            if exclude {
                take.entries.retain(|e| *e != entry);
                if let Some(stored) = take.parm_values.get_mut(path) {
                    for (component, _) in &values {
                        stored.remove(component);
                    }
                    if stored.is_empty() {
                        take.parm_values.remove(path);
                    }
                }
            } else if !take.includes(&entry) {
                take.entries.push(entry);
                take.parm_values
                    .entry(path.to_string())
                    .or_default()
                    .extend(values);
            }
        }
        Ok(String::new())
    }

    fn merge(&mut self, dest: &str, src: &str, force: bool) -> Result<String, String> {
        let dest_index = self.existing_take(dest)?;
        let src_index = self.existing_take(src)?;
        if dest_index == src_index {
            return Ok(String::new());
        }
        let source = self.takes[src_index].clone();

        for entry in &source.entries {
            let had = self.takes[dest_index].includes(entry);
            if had && !force {
                continue;
            }
            let components: Vec<String> = match entry {
                ScriptEntry::Parm { path, parm } => self
                    .node(path)
                    .and_then(|n| n.tuple_of(parm))
                    .map(|t| t.component_names().map(String::from).collect())
                    .unwrap_or_default(),
                ScriptEntry::Flag { .. } => Vec::new(),
            };

            let target = &mut self.takes[dest_index];
            if !had {
                target.entries.push(entry.clone());
            }
            match entry {
                ScriptEntry::Flag { flag, path } => {
                    if let Some(v) = source.flag_values.get(path).and_then(|m| m.get(flag)) {
                        target
                            .flag_values
                            .entry(path.clone())
                            .or_default()
                            .insert(*flag, *v);
                    }
                }
                ScriptEntry::Parm { path, .. } => {
                    if let Some(values) = source.parm_values.get(path) {
                        let stored = target.parm_values.entry(path.clone()).or_default();
                        for component in &components {
                            if let Some(v) = values.get(component) {
                                stored.insert(component.clone(), v.clone());
                            }
                        }
                    }
                }
            }
        }
        Ok(String::new())
    }

    fn load(&mut self, file: &str, parent: Option<String>) -> Result<String, String> {
        let parent = match parent {
            Some(p) if !self.take_exists(&p) => return Err(format!("Invalid parent take: {p}")),
            Some(p) => Some(p).filter(|p| !self.is_root(p)),
            None => self.active.clone(),
        };
        let json =
            std::fs::read_to_string(file).map_err(|e| format!("Unable to read {file}: {e}"))?;
        let saved: SavedTakes =
            serde_json::from_str(&json).map_err(|e| format!("Unable to parse {file}: {e}"))?;

        let mut renamed: BTreeMap<String, String> = BTreeMap::new();
        for mut take in saved.takes {
            let name = allocate(&take.name, &self.all_names());
            take.parent = match take.parent.as_ref().and_then(|p| renamed.get(p)) {
                Some(mapped) => Some(mapped.clone()),
                None => parent.clone(),
            };
            renamed.insert(take.name.clone(), name.clone());
            take.name = name;
            self.takes.push(take);
        }
        Ok(String::new())
    }
}

fn node_id(path: &str) -> NodeId {
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    NodeId(hasher.finish())
}

/// Single-threaded host backed by a [`SceneState`].
#[derive(Debug, Default)]
pub struct MemoryHost {
    state: RefCell<SceneState>,
    history: RefCell<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: SceneState) -> Self {
        Self {
            state: RefCell::new(state),
            history: RefCell::new(Vec::new()),
        }
    }

    /// Read a scene saved with [`MemoryHost::save`].
    pub fn load(path: &Path) -> Result<Self, TakeError> {
        let json = std::fs::read_to_string(path)?;
        let state: SceneState = serde_json::from_str(&json)?;
        Ok(Self::from_state(state))
    }

    pub fn save(&self, path: &Path) -> Result<(), TakeError> {
        let json = serde_json::to_string_pretty(&*self.state.borrow())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn state(&self) -> SceneState {
        self.state.borrow().clone()
    }

    /// Add a node, replacing any node already at the same path.
    pub fn add_node(&self, node: SceneNode) -> NodeId {
        let id = node_id(&node.path);
        let mut state = self.state.borrow_mut();
        state.nodes.retain(|n| n.path != node.path);
        state.nodes.push(node);
        id
    }

    pub fn remove_node(&self, path: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.nodes.len();
        state.nodes.retain(|n| n.path != path);
        state.nodes.len() != before
    }

    /// Parameter value ignoring every take overlay.
    pub fn base_parm(&self, path: &str, parm: &str) -> Option<Value> {
        self.state
            .borrow()
            .node(path)
            .and_then(|n| n.base_value(parm).cloned())
    }

    /// Every command received, in order.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn clear_history(&self) {
        self.history.borrow_mut().clear();
    }
}

impl DirectiveChannel for MemoryHost {
    fn execute(&self, command: &str) -> DirectiveOutput {
        self.history.borrow_mut().push(command.to_string());
        let directive = match Directive::parse(command) {
            Ok(d) => d,
            Err(e) => return DirectiveOutput::err(e),
        };
        match self.state.borrow_mut().apply(directive) {
            Ok(output) => DirectiveOutput::ok(output),
            Err(error) => {
                tracing::trace!(command, error, "Host rejected command");
                DirectiveOutput::err(error)
            }
        }
    }
}

impl ActiveTakeController for MemoryHost {
    fn active_take(&self) -> String {
        let state = self.state.borrow();
        state.active.clone().unwrap_or_else(|| state.root.clone())
    }
}

impl SceneGraph for MemoryHost {
    fn resolve(&self, path: &str) -> Option<NodeId> {
        self.state.borrow().node(path).map(|n| node_id(&n.path))
    }

    fn path_of(&self, id: NodeId) -> Option<String> {
        self.state.borrow().node_by_id(id).map(|n| n.path.clone())
    }

    fn flag_value(&self, id: NodeId, flag: Flag) -> Option<bool> {
        let state = self.state.borrow();
        let node = state.node_by_id(id)?;
        state.effective_flag(node, flag)
    }

    fn set_flag(&self, id: NodeId, flag: Flag, value: bool) -> Result<(), String> {
        let mut state = self.state.borrow_mut();
        let path = state
            .node_by_id(id)
            .filter(|n| n.flags.contains_key(&flag))
            .map(|n| n.path.clone())
            .ok_or_else(|| format!("Node {id} has no {flag} flag"))?;

        if state.active.is_none() {
            if let Some(node) = state.nodes.iter_mut().find(|n| n.path == path) {
                node.flags.insert(flag, value);
            }
            return Ok(());
        }

        let entry = ScriptEntry::Flag {
            flag,
            path: path.clone(),
        };
        let auto_mode = state.auto_mode;
        let take = state.active_take_mut()?;
        if !take.includes(&entry) {
            if !auto_mode {
                return Err(format!("{path}: {flag} flag is not included in take {}", take.name));
            }
            take.entries.push(entry);
        }
        take.flag_values.entry(path).or_default().insert(flag, value);
        Ok(())
    }

    fn parm_names(&self, id: NodeId) -> Vec<String> {
        self.state
            .borrow()
            .node_by_id(id)
            .map(|n| {
                n.parms
                    .iter()
                    .flat_map(|t| t.component_names().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn eval_parm(&self, id: NodeId, name: &str) -> Option<Value> {
        let state = self.state.borrow();
        let node = state.node_by_id(id)?;
        state.effective_parm(node, name)
    }

    fn set_parm(&self, id: NodeId, name: &str, value: Value) -> Result<(), String> {
        let mut state = self.state.borrow_mut();
        let node = state
            .node_by_id(id)
            .ok_or_else(|| format!("Invalid node: {id}"))?;
        let base = node
            .base_value(name)
            .ok_or_else(|| format!("Invalid parameter: {}/{name}", node.path))?;
        let value = coerce(base, value).ok_or_else(|| format!("Bad value type for parm '{name}'"))?;
        let path = node.path.clone();
        let tuple = node
            .tuple_of(name)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| name.to_string());

        if state.active.is_none() {
            let parm = state
                .nodes
                .iter_mut()
                .filter(|n| n.path == path)
                .flat_map(|n| n.parms.iter_mut())
                .flat_map(|t| t.components.iter_mut())
                .find(|p| p.name == name);
            if let Some(parm) = parm {
                parm.value = value;
            }
            return Ok(());
        }

        let entry = ScriptEntry::Parm {
            path: path.clone(),
            parm: tuple,
        };
        let auto_mode = state.auto_mode;
        let take = state.active_take_mut()?;
        if !take.includes(&entry) {
            if !auto_mode {
                return Err(format!("{path}/{name} is not included in take {}", take.name));
            }
            take.entries.push(entry);
        }
        take.parm_values
            .entry(path)
            .or_default()
            .insert(name.to_string(), value);
        Ok(())
    }
}

/// Accept `value` for a parameter whose base value is `base`: same type, or
/// an integer written to a float parameter.
fn coerce(base: &Value, value: Value) -> Option<Value> {
    match (base, value) {
        (Value::Float(_), Value::Int(i)) => Some(Value::Float(i as f64)),
        (Value::Bool(_), v @ Value::Bool(_))
        | (Value::Int(_), v @ Value::Int(_))
        | (Value::Float(_), v @ Value::Float(_))
        | (Value::Str(_), v @ Value::Str(_)) => Some(v),
        _ => None,
    }
}
