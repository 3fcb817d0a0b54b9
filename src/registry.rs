use std::collections::HashMap;

use crate::value::CastError;

#[derive(Debug, Clone)]
struct ClassEntry {
    parents: Vec<String>,
    /// Full linearization, starting with the class itself.
    ancestors: Vec<String>,
}

/// Registry mapping a class name to its ancestor set.
///
/// Built at startup (register parents before their subclasses) and read-only
/// afterwards, so it can be shared freely across threads. The cast engine
/// queries it for the identity-on-subtype rule; names it has never seen
/// compare by plain equality.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    classes: HashMap<String, ClassEntry>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with the given parent classes. Parents that are
    /// themselves registered contribute their whole linearization; unknown
    /// parents are treated as opaque leaf ancestors.
    pub fn register(&mut self, name: &str, parents: &[&str]) -> Result<(), CastError> {
        let parents: Vec<String> = parents.iter().map(|p| p.to_string()).collect();
        let ancestors = self.linearize(name, &parents)?;
        self.classes.insert(
            name.to_string(),
            ClassEntry { parents, ancestors },
        );
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn parents(&self, name: &str) -> &[String] {
        self.classes
            .get(name)
            .map(|entry| entry.parents.as_slice())
            .unwrap_or(&[])
    }

    /// Linearized ancestors of `name`, starting with `name` itself.
    /// Empty for unregistered names.
    pub fn ancestors(&self, name: &str) -> &[String] {
        self.classes
            .get(name)
            .map(|entry| entry.ancestors.as_slice())
            .unwrap_or(&[])
    }

    /// Reflexive subtype check: `name` is a subtype of `ancestor` when the
    /// names are equal or `ancestor` appears in `name`'s linearization.
    pub fn is_subtype(&self, name: &str, ancestor: &str) -> bool {
        if name == ancestor {
            return true;
        }
        match self.classes.get(name) {
            Some(entry) => entry.ancestors.iter().any(|a| a == ancestor),
            None => false,
        }
    }

    /// C3 linearization over the already-registered parent hierarchies.
    fn linearize(&self, name: &str, parents: &[String]) -> Result<Vec<String>, CastError> {
        let mut seqs: Vec<Vec<String>> = Vec::new();
        for parent in parents {
            match self.classes.get(parent) {
                Some(entry) => seqs.push(entry.ancestors.clone()),
                None => seqs.push(vec![parent.clone()]),
            }
        }
        seqs.push(parents.to_vec());

        let mut result = vec![name.to_string()];
        while seqs.iter().any(|s| !s.is_empty()) {
            // Pick the first head that appears in no other sequence's tail.
            let mut candidate = None;
            for seq in &seqs {
                if seq.is_empty() {
                    continue;
                }
                let head = &seq[0];
                let in_tail = seqs
                    .iter()
                    .any(|other| other.len() > 1 && other[1..].contains(head));
                if !in_tail {
                    candidate = Some(head.clone());
                    break;
                }
            }
            match candidate {
                Some(head) => {
                    result.push(head.clone());
                    for seq in seqs.iter_mut() {
                        if !seq.is_empty() && seq[0] == head {
                            seq.remove(0);
                        }
                    }
                }
                None => {
                    return Err(CastError::new(format!(
                        "Unable to linearize class hierarchy for {}",
                        name
                    )));
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeRegistry;

    #[test]
    fn subtype_is_reflexive_and_transitive() {
        let mut registry = TypeRegistry::new();
        registry.register("Animal", &[]).unwrap();
        registry.register("Dog", &["Animal"]).unwrap();
        registry.register("Puppy", &["Dog"]).unwrap();

        assert!(registry.is_subtype("Puppy", "Puppy"));
        assert!(registry.is_subtype("Puppy", "Dog"));
        assert!(registry.is_subtype("Puppy", "Animal"));
        assert!(!registry.is_subtype("Animal", "Puppy"));
    }

    #[test]
    fn unknown_names_compare_by_equality_only() {
        let registry = TypeRegistry::new();
        assert!(registry.is_subtype("Ghost", "Ghost"));
        assert!(!registry.is_subtype("Ghost", "Anything"));
        assert!(registry.ancestors("Ghost").is_empty());
    }

    #[test]
    fn unregistered_parents_are_opaque_leaves() {
        let mut registry = TypeRegistry::new();
        registry.register("Carbon", &["External"]).unwrap();
        assert!(registry.is_subtype("Carbon", "External"));
        assert!(!registry.contains("External"));
    }

    #[test]
    fn diamond_linearizes_in_c3_order() {
        let mut registry = TypeRegistry::new();
        registry.register("Base", &[]).unwrap();
        registry.register("Left", &["Base"]).unwrap();
        registry.register("Right", &["Base"]).unwrap();
        registry.register("Join", &["Left", "Right"]).unwrap();

        assert_eq!(
            registry.ancestors("Join"),
            &["Join", "Left", "Right", "Base"]
        );
    }

    #[test]
    fn inconsistent_hierarchy_is_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register("A", &[]).unwrap();
        registry.register("B", &["A"]).unwrap();
        // Demands A before B and B before A at once.
        let err = registry.register("C", &["A", "B"]).unwrap_err();
        assert!(err.message.contains("linearize"));
    }
}
