use std::rc::Rc;

use tracing::debug;

use super::Table;
use crate::Record;

impl<R: Record> Table<R> {
    /// Title shared by every table derived from `self` and `other`.
    fn combined_title(&self, other: &Table<R>) -> String {
        format!("{}, {}", self.title, other.title)
    }

    /// Copies `record` and files the copy under `group`.
    fn tagged(record: &R, group: &str) -> Result<Rc<R>, R::Error> {
        let mut copy = record.copy();
        copy.change(R::GROUP_ATTRIBUTE, group)?;
        Ok(Rc::new(copy))
    }

    /// Rows of `self` whose `attribute` holds `value`, in order.
    ///
    /// The result keeps this table's title.
    pub fn select(&self, attribute: &str, value: &str) -> Table<R> {
        let mut selected = Table::new(self.title.clone());

        let mut rows = self.iter();
        while let Some(row) = rows.next_shared() {
            if row.check(attribute, value) {
                selected.insert_shared(Rc::clone(row));
            }
        }

        debug!(
            table = %self.title,
            attribute,
            value,
            matched = selected.len(),
            "select"
        );
        selected
    }

    /// Every distinct row of both tables.
    ///
    /// Rows of `self` that also appear in `other` are copied and relabelled to
    /// the combined title. Rows of `other` are then added unless an equal row is
    /// already present.
    pub fn union(&self, other: &Table<R>) -> Result<Table<R>, R::Error> {
        let title = self.combined_title(other);
        let mut union = Table::new(title.clone());

        let mut rows = self.iter();
        while let Some(row) = rows.next_shared() {
            if other.contains(row) {
                union.insert_shared(Self::tagged(row, &title)?);
            } else {
                union.insert_shared(Rc::clone(row));
            }
        }

        let mut rows = other.iter();
        while let Some(row) = rows.next_shared() {
            if !union.contains(row) {
                union.insert_shared(Rc::clone(row));
            }
        }

        debug!(table = %title, size = union.len(), "union");
        Ok(union)
    }

    /// Rows of either table whose `attribute` holds `value`.
    ///
    /// Matching rows found on both sides appear once, relabelled to the
    /// combined title. Matching rows found on only one side are carried through
    /// unchanged, so this is not a strict intersection.
    pub fn intersect(
        &self,
        attribute: &str,
        value: &str,
        other: &Table<R>,
    ) -> Result<Table<R>, R::Error> {
        let title = self.combined_title(other);
        let mut intersect = Table::new(title.clone());

        let selected_one = self.select(attribute, value);
        let selected_two = other.select(attribute, value);

        let mut rows = selected_one.iter();
        while let Some(row) = rows.next_shared() {
            if selected_two.contains(row) {
                intersect.insert_shared(Self::tagged(row, &title)?);
            } else {
                intersect.insert_shared(Rc::clone(row));
            }
        }

        let mut rows = selected_two.iter();
        while let Some(row) = rows.next_shared() {
            if !intersect.contains(row) {
                intersect.insert_shared(Rc::clone(row));
            }
        }

        debug!(table = %title, attribute, value, size = intersect.len(), "intersect");
        Ok(intersect)
    }

    /// Rows of `self` that have no equal row in `other`, in order.
    pub fn difference(&self, other: &Table<R>) -> Table<R> {
        let mut difference = Table::new(self.combined_title(other));

        let mut rows = self.iter();
        while let Some(row) = rows.next_shared() {
            if !other.contains(row) {
                difference.insert_shared(Rc::clone(row));
            }
        }

        debug!(table = %difference.title, size = difference.len(), "difference");
        difference
    }
}
