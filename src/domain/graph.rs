//! Finalized build graph: deterministic ordering and lookups.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{AppError, ModuleName, ModuleSpec};

/// An immutable, validated module graph.
///
/// Produced by [`crate::domain::ModuleRegistry::finalize`]. The module
/// sequence is already topologically ordered: every module appears after
/// all of its dependencies, with ties broken by declaration order.
#[derive(Debug, Clone)]
pub struct BuildGraph {
    modules: Vec<ModuleSpec>,
    index: BTreeMap<ModuleName, usize>,
}

impl BuildGraph {
    /// Assemble from an already-ordered module list.
    ///
    /// Callers guarantee topological ordering and name uniqueness; the
    /// registry is the only producer.
    pub(crate) fn from_ordered(modules: Vec<ModuleSpec>) -> Self {
        let index = modules
            .iter()
            .enumerate()
            .map(|(idx, module)| (module.name.clone(), idx))
            .collect();
        Self { modules, index }
    }

    /// All modules in build order.
    pub fn modules(&self) -> &[ModuleSpec] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Look up a module by name.
    pub fn get(&self, name: &str) -> Option<&ModuleSpec> {
        self.index.get(name).map(|&idx| &self.modules[idx])
    }

    /// Look up a module by name, failing with `UnknownModule`.
    pub fn require(&self, name: &str) -> Result<&ModuleSpec, AppError> {
        self.position(name).map(|idx| &self.modules[idx])
    }

    /// The full build order as module names.
    pub fn build_order(&self) -> Vec<&ModuleName> {
        self.modules.iter().map(|module| &module.name).collect()
    }

    /// The requested modules plus everything they depend on, transitively,
    /// in build order.
    ///
    /// Fails with `UnknownModule` if a target names no module in the graph.
    pub fn closure(&self, targets: &[String]) -> Result<Vec<&ModuleSpec>, AppError> {
        let mut wanted: BTreeSet<usize> = BTreeSet::new();

        for target in targets {
            let name = ModuleName::new(target)?;
            let idx = self.position(name.as_str())?;
            self.collect_closure(idx, &mut wanted);
        }

        Ok(wanted.into_iter().map(|idx| &self.modules[idx]).collect())
    }

    /// Modules that directly depend on `name`.
    pub fn dependents_of(&self, name: &str) -> Result<Vec<&ModuleName>, AppError> {
        let idx = self.position(name)?;
        let target = &self.modules[idx].name;

        Ok(self
            .modules
            .iter()
            .filter(|module| module.dependencies.iter().any(|dep| dep == target))
            .map(|module| &module.name)
            .collect())
    }

    fn position(&self, name: &str) -> Result<usize, AppError> {
        self.index.get(name).copied().ok_or_else(|| AppError::UnknownModule {
            name: name.to_string(),
            available: self
                .index
                .keys()
                .map(|known| known.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    fn collect_closure(&self, idx: usize, wanted: &mut BTreeSet<usize>) {
        if !wanted.insert(idx) {
            return;
        }
        for dep in &self.modules[idx].dependencies {
            if let Some(&dep_idx) = self.index.get(dep) {
                self.collect_closure(dep_idx, wanted);
            }
        }
    }
}
