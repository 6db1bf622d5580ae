use std::{fmt, rc::Rc};

use tracing::{debug, trace};

use crate::Record;

mod node;
mod query;

use node::{Arena, NodeId};

pub use node::Iter;

const BANNER: &str = "=========================";
const DIVIDER: &str = "--------------------------------------------------------------";

/// An ordered, duplicate-tolerant collection of records.
///
/// Rows are kept in a singly-linked chain with head and tail tracking, so
/// appends are O(1) and every other operation is a linear scan. The table never
/// interprets attribute names itself; it hands them to the records.
///
/// # Example
///
/// ```
/// use chain_db::{Employee, MaritalStatus, Person, Table};
///
/// let mut faculty = Table::new("Faculty");
/// faculty.insert(Employee::new(
///     "1", "5550001", "2", "10",
///     Person::new("Ada", "Lovelace", MaritalStatus::Married),
///     "Faculty",
/// ));
///
/// assert_eq!(faculty.select("first", "ada").len(), 1);
/// ```
#[derive(Debug)]
pub struct Table<R> {
    /// Label used to compose the titles of derived tables.
    pub(crate) title: String,

    arena: Arena<R>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

impl<R> Table<R> {
    /// Creates an empty table.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            arena: Arena::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates the rows from head to tail.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            arena: &self.arena,
            cursor: self.head,
            remaining: self.size,
        }
    }

    /// First row, if any.
    pub fn first(&self) -> Option<&R> {
        self.head.and_then(|id| self.arena.get(id)).map(|node| &*node.data)
    }

    /// Last row, if any.
    pub fn last(&self) -> Option<&R> {
        self.tail.and_then(|id| self.arena.get(id)).map(|node| &*node.data)
    }

    /// Appends a record at the tail.
    pub fn insert(&mut self, record: R) {
        self.insert_shared(Rc::new(record));
    }

    /// Appends an already shared record at the tail.
    pub(crate) fn insert_shared(&mut self, data: Rc<R>) {
        let id = self.arena.alloc(data);

        match self.tail.and_then(|tail| self.arena.get_mut(tail)) {
            Some(tail) => tail.next = Some(id),
            None => self.head = Some(id),
        }

        self.tail = Some(id);
        self.size += 1;
        trace!(table = %self.title, size = self.size, "inserted row");
    }
}

impl<R: Record> Table<R> {
    /// Removes the first row whose `id` attribute equals `id`.
    ///
    /// Returns the removed record, or `None` if no row matched.
    pub fn remove(&mut self, id: &str) -> Option<Rc<R>> {
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;

        while let Some(current) = cursor {
            let node = self.arena.get(current)?;
            if node.data.check("id", id) {
                let next = node.next;

                match prev {
                    None => self.head = next,
                    Some(prev) => self.arena.get_mut(prev)?.next = next,
                }
                if self.tail == Some(current) {
                    self.tail = prev;
                }

                self.size -= 1;
                debug!(table = %self.title, id, size = self.size, "removed row");
                return self.arena.release(current).map(|node| node.data);
            }

            prev = cursor;
            cursor = node.next;
        }

        debug!(table = %self.title, id, "no row to remove");
        None
    }

    /// Returns `true` if some row is equal to `record`.
    pub fn contains(&self, record: &R) -> bool {
        self.iter().any(|row| row == record)
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R> Extend<R> for Table<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl<R: fmt::Display> fmt::Display for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{BANNER}{}{BANNER}", self.title)?;

        for record in self {
            writeln!(f, "{record}")?;
            writeln!(f, "{DIVIDER}")?;
        }

        writeln!(f, "{BANNER}{}{BANNER}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Employee, MaritalStatus, Person};

    fn employee(id: &str) -> Employee {
        Employee::new(
            id,
            "5550000",
            "1",
            "3",
            Person::new("Sam", "Lee", MaritalStatus::Single),
            "Faculty",
        )
    }

    fn ids(table: &Table<Employee>) -> Vec<&str> {
        table.iter().map(|e| e.id.as_str()).collect()
    }

    fn table_of(ids: &[&str]) -> Table<Employee> {
        let mut table = Table::new("Faculty");
        table.extend(ids.iter().map(|id| employee(id)));
        table
    }

    /// Walks the raw chain and checks the head/tail/size invariants.
    fn assert_chain<R>(table: &Table<R>) {
        if table.size == 0 {
            assert!(table.head.is_none());
            assert!(table.tail.is_none());
            return;
        }

        let mut cursor = table.head.expect("non-empty table has a head");
        for _ in 1..table.size {
            cursor = table.arena.get(cursor).unwrap().next.expect("chain too short");
        }
        assert_eq!(Some(cursor), table.tail);
        assert!(table.arena.get(cursor).unwrap().next.is_none());
    }

    #[test]
    fn test_insert_appends_at_tail() {
        let mut table = table_of(&["1", "2"]);
        table.insert(employee("3"));

        assert_eq!(table.len(), 3);
        assert_eq!(ids(&table), vec!["1", "2", "3"]);
        assert_eq!(table.last().unwrap().id, "3");
        assert_chain(&table);
    }

    #[test]
    fn test_remove_middle() {
        let mut table = table_of(&["1", "2", "3"]);
        let removed = table.remove("2").unwrap();

        assert_eq!(removed.id, "2");
        assert_eq!(ids(&table), vec!["1", "3"]);
        assert_eq!(table.last().unwrap().id, "3");
        assert_eq!(table.len(), 2);
        assert_chain(&table);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut table = table_of(&["1", "2", "3"]);

        table.remove("1");
        assert_eq!(table.first().unwrap().id, "2");
        assert_chain(&table);

        table.remove("3");
        assert_eq!(table.last().unwrap().id, "2");
        assert_eq!(ids(&table), vec!["2"]);
        assert_chain(&table);

        table.insert(employee("4"));
        assert_eq!(ids(&table), vec!["2", "4"]);
        assert_chain(&table);
    }

    #[test]
    fn test_remove_only_first_match() {
        let mut table = table_of(&["7", "8", "7"]);
        table.remove("7");
        assert_eq!(ids(&table), vec!["8", "7"]);
        assert_chain(&table);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut table = table_of(&["1", "2"]);
        assert!(table.remove("9").is_none());
        assert_eq!(table.len(), 2);
        assert_chain(&table);

        let mut empty: Table<Employee> = Table::new("Empty");
        assert!(empty.remove("1").is_none());
        assert_chain(&empty);
    }

    #[test]
    fn test_remove_sole_element_then_reinsert() {
        let mut table = table_of(&["1"]);
        table.remove("1");
        assert!(table.is_empty());
        assert_chain(&table);

        table.insert(employee("2"));
        assert_eq!(table.head, table.tail);
        assert_eq!(table.first().unwrap().id, "2");
        assert_chain(&table);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut table = table_of(&["1", "2", "3"]);
        table.remove("2");
        table.insert(employee("4"));
        table.remove("1");
        table.insert(employee("5"));

        assert_eq!(ids(&table), vec!["3", "4", "5"]);
        assert_chain(&table);
    }

    #[test]
    fn test_contains() {
        let table = table_of(&["1", "2"]);
        let mut other_dept = employee("2");
        other_dept.department = "Admin".to_string();

        assert!(table.contains(&employee("1")));
        assert!(table.contains(&other_dept));
        assert!(!table.contains(&employee("3")));
    }

    #[test]
    fn test_display_layout() {
        let table = table_of(&["1"]);
        let expected = format!(
            "\n{BANNER}Faculty{BANNER}\n{}\n{DIVIDER}\n{BANNER}Faculty{BANNER}\n",
            employee("1")
        );
        assert_eq!(table.to_string(), expected);

        let empty: Table<Employee> = Table::new("Admin");
        assert_eq!(
            empty.to_string(),
            format!("\n{BANNER}Admin{BANNER}\n{BANNER}Admin{BANNER}\n")
        );
    }
}
