//! Symbol table.

use std::collections::HashMap;

/// Label name -> instruction index. First occurrence wins, matching the
/// reference resolver's linear-scan semantics.
#[derive(Default)]
pub struct LabelTable {
    map: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> Self {
        LabelTable::default()
    }

    pub fn define(&mut self, name: String, instruction_index: usize) {
        self.map.entry(name).or_insert(instruction_index);
    }

    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_definition_of_a_duplicate_label_wins() {
        let mut labels = LabelTable::new();
        labels.define("loop".to_string(), 3);
        labels.define("loop".to_string(), 9);
        assert_eq!(labels.resolve("loop"), Some(3));
    }
}
