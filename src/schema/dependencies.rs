use super::tables::{get_table, ALL_TABLES};
use super::types::TableSchema;
use std::collections::{HashMap, HashSet};

/// Orders tables so that foreign key parents always precede their children
pub struct DependencyResolver {
    /// Map of table name -> tables it depends on
    deps: HashMap<&'static str, HashSet<&'static str>>,
}

impl DependencyResolver {
    pub fn new() -> Self {
        let deps = ALL_TABLES
            .iter()
            .map(|table| (table.name, table.dependencies()))
            .collect();

        Self { deps }
    }

    /// All tables, parents before children
    pub fn creation_order(&self) -> Result<Vec<&'static TableSchema>, String> {
        let mut result = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut temp_visited: HashSet<&str> = HashSet::new();

        // Walk in declaration order so the output is stable
        for table in ALL_TABLES {
            self.visit(table.name, &mut visited, &mut temp_visited, &mut result)?;
        }

        Ok(result)
    }

    /// All tables, children before parents
    pub fn drop_order(&self) -> Result<Vec<&'static TableSchema>, String> {
        let mut tables = self.creation_order()?;
        tables.reverse();
        Ok(tables)
    }

    fn visit<'a>(
        &self,
        name: &'a str,
        visited: &mut HashSet<&'a str>,
        temp_visited: &mut HashSet<&'a str>,
        result: &mut Vec<&'static TableSchema>,
    ) -> Result<(), String> {
        if temp_visited.contains(name) {
            return Err(format!("Circular dependency detected at: {}", name));
        }
        if visited.contains(name) {
            return Ok(());
        }

        temp_visited.insert(name);

        if let Some(deps) = self.deps.get(name) {
            let mut deps: Vec<_> = deps.iter().copied().filter(|dep| *dep != name).collect();
            deps.sort_unstable();
            for dep in deps {
                self.visit(dep, visited, temp_visited, result)?;
            }
        }

        temp_visited.remove(name);
        visited.insert(name);

        match get_table(name) {
            Some(table) => result.push(table),
            None => return Err(format!("Unknown table: {}", name)),
        }

        Ok(())
    }
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(tables: &[&TableSchema], name: &str) -> usize {
        tables.iter().position(|t| t.name == name).unwrap()
    }

    #[test]
    fn test_parents_come_before_children() {
        let tables = DependencyResolver::new().creation_order().unwrap();
        assert_eq!(tables.len(), ALL_TABLES.len());

        for table in &tables {
            for dep in table.dependencies() {
                assert!(
                    position(&tables, dep) < position(&tables, table.name),
                    "{} must precede {}",
                    dep,
                    table.name
                );
            }
        }
    }

    #[test]
    fn test_drop_order_is_reversed() {
        let resolver = DependencyResolver::new();
        let tables = resolver.drop_order().unwrap();

        assert!(position(&tables, "Aircraft_Flight") < position(&tables, "Flight"));
        assert!(position(&tables, "Flight") < position(&tables, "Aircraft"));
        assert_eq!(tables.last().unwrap().name, "Aircraft");
    }
}
