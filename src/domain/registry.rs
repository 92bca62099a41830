//! Module registry: declaration collection and graph finalization.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{AppError, BuildGraph, ModuleName, ModuleSpec};

/// Collects module declarations and validates them into a [`BuildGraph`].
///
/// Declarations are write-once: the registry accepts `declare` calls until
/// `finalize` consumes it, after which the graph is immutable. Declaration
/// order is significant; it breaks ties in the resolved build order.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<ModuleSpec>,
    index: BTreeMap<ModuleName, usize>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a module.
    ///
    /// Fails with `DuplicateModule` if the name is already declared.
    /// Dependencies on modules not yet declared are legal here; referential
    /// completeness is checked at `finalize`, so forward references across
    /// declaration order work.
    pub fn declare(&mut self, spec: ModuleSpec) -> Result<(), AppError> {
        if self.index.contains_key(&spec.name) {
            return Err(AppError::DuplicateModule(spec.name.to_string()));
        }
        self.index.insert(spec.name.clone(), self.modules.len());
        self.modules.push(spec);
        Ok(())
    }

    /// Declared modules in declaration order.
    pub fn modules(&self) -> &[ModuleSpec] {
        &self.modules
    }

    /// Whether a module name has been declared.
    pub fn contains(&self, name: &ModuleName) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Find dependency cycles.
    ///
    /// Depth-first walk in declaration order; every back edge yields one
    /// cycle of the form `[a, b, a]`. Edges to undeclared modules carry no
    /// cycle and are skipped (they are reported separately as unknown
    /// dependencies).
    pub fn find_cycles(&self) -> Vec<Vec<ModuleName>> {
        let count = self.modules.len();
        let mut cycles = Vec::new();
        let mut visiting = vec![false; count];
        let mut finished = vec![false; count];
        let mut back_edges: BTreeSet<(usize, usize)> = BTreeSet::new();

        for idx in 0..count {
            if !finished[idx] {
                self.visit(
                    idx,
                    &mut visiting,
                    &mut finished,
                    &mut Vec::new(),
                    &mut back_edges,
                    &mut cycles,
                );
            }
        }

        cycles
    }

    fn visit(
        &self,
        idx: usize,
        visiting: &mut [bool],
        finished: &mut [bool],
        path: &mut Vec<usize>,
        back_edges: &mut BTreeSet<(usize, usize)>,
        cycles: &mut Vec<Vec<ModuleName>>,
    ) {
        visiting[idx] = true;
        path.push(idx);

        for dep in &self.modules[idx].dependencies {
            let Some(&dep_idx) = self.index.get(dep) else {
                continue;
            };
            if finished[dep_idx] {
                continue;
            }
            if visiting[dep_idx] {
                // Back edge: the cycle is the path suffix starting at the
                // revisited module, closed by repeating it.
                if back_edges.insert((idx, dep_idx)) {
                    let start = path.iter().position(|&p| p == dep_idx).unwrap_or(0);
                    let mut cycle: Vec<ModuleName> =
                        path[start..].iter().map(|&p| self.modules[p].name.clone()).collect();
                    cycle.push(self.modules[dep_idx].name.clone());
                    cycles.push(cycle);
                }
                continue;
            }
            self.visit(dep_idx, visiting, finished, path, back_edges, cycles);
        }

        path.pop();
        visiting[idx] = false;
        finished[idx] = true;
    }

    /// Validate the declared graph and seal it.
    ///
    /// Checks referential completeness (`UnknownDependency` for the first
    /// dependency, in declaration order, that names no declared module) and
    /// acyclicity (`CyclicDependency` naming the cycle), then returns the
    /// immutable, topologically ordered [`BuildGraph`].
    pub fn finalize(self) -> Result<BuildGraph, AppError> {
        for spec in &self.modules {
            for dep in &spec.dependencies {
                if !self.index.contains_key(dep) {
                    return Err(AppError::UnknownDependency {
                        module: spec.name.to_string(),
                        dependency: dep.to_string(),
                    });
                }
            }
        }

        if let Some(cycle) = self.find_cycles().into_iter().next() {
            return Err(AppError::CyclicDependency(format_cycle(&cycle)));
        }

        let order = self.topological_order();
        let mut slots: Vec<Option<ModuleSpec>> = self.modules.into_iter().map(Some).collect();
        let ordered: Vec<ModuleSpec> =
            order.into_iter().map(|idx| slots[idx].take().unwrap()).collect();

        Ok(BuildGraph::from_ordered(ordered))
    }

    /// Kahn's algorithm over declaration indices.
    ///
    /// The ready set is ordered by declaration index, so among modules whose
    /// dependencies are all placed, the earliest-declared one goes first.
    /// Only called on validated graphs (complete references, no cycles).
    fn topological_order(&self) -> Vec<usize> {
        let count = self.modules.len();
        let mut in_degree = vec![0usize; count];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];

        for (idx, spec) in self.modules.iter().enumerate() {
            for dep in &spec.dependencies {
                let dep_idx = self.index[dep];
                in_degree[idx] += 1;
                dependents[dep_idx].push(idx);
            }
        }

        let mut ready: BTreeSet<usize> = (0..count).filter(|&idx| in_degree[idx] == 0).collect();
        let mut order = Vec::with_capacity(count);

        while let Some(&next) = ready.iter().next() {
            ready.remove(&next);
            order.push(next);

            for &dependent in &dependents[next] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        order
    }
}

/// Render a cycle as an arrow-joined path, e.g. `a -> b -> a`.
pub fn format_cycle(cycle: &[ModuleName]) -> String {
    cycle.iter().map(|name| name.as_str()).collect::<Vec<_>>().join(" -> ")
}
