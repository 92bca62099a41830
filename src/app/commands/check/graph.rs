//! Graph passes: referential completeness, cycles, toolchain skew.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{MODULE_MANIFEST, ModuleRegistry, ModuleSpec, format_cycle};

use super::diagnostics::Diagnostics;

/// Check the dependency graph spanned by the collected modules.
///
/// Reports every unknown dependency, every distinct cycle, and toolchain
/// skew (a module targeting a lower language version than one of its
/// dependencies). Repeated dependency entries are checked once; the
/// collection pass already warns about the repetition itself.
pub fn graph_checks(specs: &[ModuleSpec], diagnostics: &mut Diagnostics) {
    let known: BTreeMap<&str, &ModuleSpec> =
        specs.iter().map(|spec| (spec.name.as_str(), spec)).collect();

    for spec in specs {
        let file = format!("{}/{}", spec.name, MODULE_MANIFEST);
        let mut seen = BTreeSet::new();

        for dep in &spec.dependencies {
            if !seen.insert(dep.as_str()) {
                continue;
            }
            match known.get(dep.as_str()) {
                None => diagnostics.push_error(
                    &file,
                    format!("Depends on '{dep}', which is not a declared module"),
                ),
                Some(dep_spec) => {
                    if spec.language_version < dep_spec.language_version {
                        diagnostics.push_warning(
                            &file,
                            format!(
                                "Targets language version {} but depends on '{}' targeting {}",
                                spec.language_version, dep, dep_spec.language_version
                            ),
                        );
                    }
                }
            }
        }
    }

    // Collection already filtered duplicate names, so declare cannot fail.
    let mut registry = ModuleRegistry::new();
    for spec in specs {
        let _ = registry.declare(spec.clone());
    }
    for cycle in registry.find_cycles() {
        let file = format!("{}/{}", cycle[0], MODULE_MANIFEST);
        diagnostics
            .push_error(&file, format!("Cyclic dependency detected: {}", format_cycle(&cycle)));
    }
}
