//! Name and alias lookup for registered commands.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::command::Command;

/// Registry of available commands.
///
/// Every alias maps to the same `Rc` as its canonical name, so a lookup by
/// alias yields the identical descriptor. The registry never runs handlers.
#[derive(Default)]
pub struct CommandRegistry {
    /// Canonical names and aliases.
    lookup: HashMap<String, Rc<dyn Command>>,
    /// Canonical names only, sorted.
    canonical: BTreeMap<String, Rc<dyn Command>>,
    /// Category -> canonical names, each listed once.
    categories: BTreeMap<String, Vec<String>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name,
    /// dropping its stale aliases and category entry.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let cmd: Rc<dyn Command> = Rc::from(cmd);
        let name = cmd.name().to_string();

        if let Some(old) = self.canonical.remove(&name) {
            log::debug!("Replacing command {name}");
            self.lookup.retain(|_, existing| !Rc::ptr_eq(existing, &old));
            if let Some(names) = self.categories.get_mut(old.category()) {
                names.retain(|n| n != &name);
                if names.is_empty() {
                    self.categories.remove(old.category());
                }
            }
        }

        for alias in cmd.aliases() {
            if self.canonical.contains_key(*alias) {
                log::warn!("Alias {alias} of {name} shadows a command; ignored");
                continue;
            }
            self.lookup.insert((*alias).to_string(), Rc::clone(&cmd));
        }
        self.lookup.insert(name.clone(), Rc::clone(&cmd));
        self.categories
            .entry(cmd.category().to_string())
            .or_default()
            .push(name.clone());
        self.canonical.insert(name, cmd);
    }

    /// Look up a command by canonical name or alias.
    pub fn get(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.lookup.get(name).map(Rc::clone)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// True if `name` is registered only as an alias.
    pub fn is_alias(&self, name: &str) -> bool {
        self.lookup.contains_key(name) && !self.canonical.contains_key(name)
    }

    /// One entry per canonical name, sorted by name.
    pub fn all_commands(&self) -> Vec<Rc<dyn Command>> {
        self.canonical.values().map(Rc::clone).collect()
    }

    /// Commands in `category`, sorted by name.
    pub fn commands_by_category(&self, category: &str) -> Vec<Rc<dyn Command>> {
        let Some(names) = self.categories.get(category) else {
            return Vec::new();
        };
        let mut cmds: Vec<Rc<dyn Command>> = names
            .iter()
            .filter_map(|n| self.canonical.get(n).map(Rc::clone))
            .collect();
        cmds.sort_by(|a, b| a.name().cmp(b.name()));
        cmds
    }

    /// Category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Canonical names starting with `partial`, sorted.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        self.canonical
            .keys()
            .filter(|name| name.starts_with(partial))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.canonical.keys().collect::<Vec<_>>())
            .field("categories", &self.categories)
            .finish()
    }
}
