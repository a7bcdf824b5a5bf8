use std::path::Path;
use std::rc::Rc;

use crate::config::TakeConfig;
use crate::error::TakeError;
use crate::host::{Directive, Host};
use crate::take::{reconcile, Take, TakeBuilder};

/// One entry of the host's take hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeNode {
    pub name: String,
    /// `None` for the root take and its direct children.
    pub parent: Option<String>,
    pub depth: usize,
}

/// Entry point for take operations against one host.
///
/// Cheap to clone; every [`Take`] carries a clone so that it can reach the
/// host and configuration on its own. Holds the host through `Rc`, which keeps
/// sessions and takes on the thread that created them.
#[derive(Clone)]
pub struct TakeSession {
    host: Rc<dyn Host>,
    config: Rc<TakeConfig>,
}

impl std::fmt::Debug for TakeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeSession")
            .field("active_take", &self.host.active_take())
            .field("config", &self.config)
            .finish()
    }
}

impl TakeSession {
    pub fn new(host: Rc<dyn Host>) -> Self {
        Self::with_config(host, TakeConfig::default())
    }

    pub fn with_config(host: Rc<dyn Host>, config: TakeConfig) -> Self {
        Self {
            host,
            config: Rc::new(config),
        }
    }

    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    pub fn config(&self) -> &TakeConfig {
        &self.config
    }

    pub fn root_take(&self) -> &str {
        &self.config.root_take
    }

    pub fn is_root(&self, name: &str) -> bool {
        name == self.config.root_take
    }

    /// Send one directive. `Err` carries the host's error text.
    pub(crate) fn run(&self, directive: &Directive) -> Result<String, String> {
        let command = directive.to_string();
        tracing::debug!(%command, "Sending directive");
        let result = self.host.execute(&command).into_result();
        if let Err(error) = &result {
            tracing::debug!(%command, %error, "Directive failed");
        }
        result
    }

    /// The take hierarchy as reported by the host, root first.
    pub fn take_tree(&self) -> Result<Vec<TakeNode>, TakeError> {
        let listing = self.run(&Directive::List).map_err(TakeError::Directive)?;
        Ok(parse_take_listing(&listing, &self.config.root_take))
    }

    /// All take names, root included.
    pub fn list_take_names(&self) -> Result<Vec<String>, TakeError> {
        Ok(self.take_tree()?.into_iter().map(|n| n.name).collect())
    }

    pub fn exists(&self, name: &str) -> Result<bool, TakeError> {
        Ok(self.list_take_names()?.iter().any(|n| n == name))
    }

    pub fn active_take_name(&self) -> String {
        self.host.active_take()
    }

    /// The active take, or `None` when the root take is active.
    pub fn current_take(&self) -> Result<Option<Take>, TakeError> {
        let name = self.active_take_name();
        if self.is_root(&name) {
            tracing::info!("Current take is the {} take", self.config.root_take);
            return Ok(None);
        }
        reconcile::reconcile(self, &name).map(Some)
    }

    /// Every non-root take whose name matches `pattern` (host glob, e.g.
    /// `shot*` or `*_fx`). `None` or an empty pattern lists everything.
    /// Case folding follows [`TakeConfig::case_insensitive_filters`].
    pub fn ls(&self, pattern: Option<&str>) -> Result<Vec<Take>, TakeError> {
        let pattern = pattern.filter(|p| !p.is_empty());
        let case_insensitive = self.config.case_insensitive_filters;
        self.list_take_names()?
            .into_iter()
            .filter(|name| !self.is_root(name))
            .filter(|name| {
                pattern.map_or(true, |p| self.host.pattern_match(p, name, case_insensitive))
            })
            .map(|name| reconcile::reconcile(self, &name))
            .collect()
    }

    pub fn set_auto_mode(&self, on: bool) -> Result<(), TakeError> {
        self.run(&Directive::AutoMode(on))
            .map_err(TakeError::Directive)?;
        Ok(())
    }

    /// Make `name` the host's active take.
    pub fn set_active(&self, name: &str) -> Result<(), TakeError> {
        self.run(&Directive::SetActive(name.to_string()))
            .map_err(|_| TakeError::SetActive(name.to_string()))?;
        Ok(())
    }

    pub fn set_take(&self, take: &Take) -> Result<(), TakeError> {
        self.set_active(take.name())
    }

    pub fn return_to_main(&self) -> Result<(), TakeError> {
        self.set_active(&self.config.root_take)
    }

    /// Rebuild a take from the host's script for `name`.
    pub fn take_from_name(&self, name: &str) -> Result<Take, TakeError> {
        reconcile::reconcile(self, name)
    }

    /// Load takes saved with [`Take::save_to_file`]. The loaded take goes
    /// under `parent`, or under the active take when `None`. Its name is
    /// chosen by the host and discovered by diffing the take list.
    pub fn take_from_file(&self, path: &Path, parent: Option<&str>) -> Result<Take, TakeError> {
        let before = self.list_take_names()?;
        self.run(&Directive::Load {
            file: path.to_string_lossy().into_owned(),
            parent: parent.map(String::from),
        })
        .map_err(TakeError::Directive)?;
        let after = self.list_take_names()?;

        let name = after
            .into_iter()
            .find(|n| !before.contains(n))
            .ok_or_else(|| {
                TakeError::Directive(format!("Loading {} added no take", path.display()))
            })?;
        tracing::info!(take = %name, file = %path.display(), "Loaded take");
        reconcile::reconcile(self, &name)
    }

    pub fn create_take(
        &self,
        name: &str,
        parent: Option<&str>,
        set_current: bool,
    ) -> Result<Take, TakeError> {
        Take::create(self, name, parent, set_current)
    }

    pub fn builder(&self, name: &str) -> TakeBuilder {
        TakeBuilder::new(self, name)
    }
}

/// Parse `takels` output: one name per line, two spaces of indent per level.
fn parse_take_listing(listing: &str, root: &str) -> Vec<TakeNode> {
    let mut nodes = Vec::new();
    let mut stack: Vec<(usize, String)> = Vec::new();

    for line in listing.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let depth = (line.len() - line.trim_start().len()) / 2;
        let name: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

        while stack.last().is_some_and(|(d, _)| *d >= depth) {
            stack.pop();
        }
        let parent = stack
            .last()
            .map(|(_, n)| n.clone())
            .filter(|p| p != root);

        stack.push((depth, name.clone()));
        nodes.push(TakeNode {
            name,
            parent,
            depth,
        });
    }
    nodes
}
