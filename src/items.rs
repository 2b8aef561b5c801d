//! Dynamic Item List
//!
//! View-model for the add/remove list. Rows are keyed by `id`, so a row's
//! click handler is dropped together with its entry.

use crate::error::{DemoError, DemoResult};
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: u32,
    pub label: String,
    /// Fade-out in progress; removed once the animation finishes
    pub removing: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    entries: Vec<ListEntry>,
    next_id: u32,
}

impl ItemList {
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry; numbering counts every row on screen, fading ones included.
    pub fn add(&mut self, added_at: &str) -> &ListEntry {
        self.next_id += 1;
        let label = format!("Dynamic item {} - Added at {}", self.entries.len() + 1, added_at);
        self.entries.push(ListEntry {
            id: self.next_id,
            label,
            removing: false,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Remove by id. Returns false if the entry is already gone.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Start fading out the last entry that is not already leaving.
    pub fn begin_remove_last(&mut self) -> DemoResult<u32> {
        let entry = self
            .entries
            .iter_mut()
            .rev()
            .find(|e| !e.removing)
            .ok_or(DemoError::NoItems)?;
        entry.removing = true;
        Ok(entry.id)
    }
}

/// Start fading the last entry and drop it once `fade_ms` has passed.
///
/// `with_list` lends the list out for each step. `on_removed` only runs if the
/// entry was still on screen when the fade finished.
pub fn fade_out_last<S, W, R>(scheduler: &S, fade_ms: u32, with_list: W, on_removed: R) -> DemoResult<u32>
where
    S: Scheduler,
    W: Fn(&mut dyn FnMut(&mut ItemList)) + 'static,
    R: FnOnce() + 'static,
{
    let mut outcome = Err(DemoError::NoItems);
    with_list(&mut |list: &mut ItemList| outcome = list.begin_remove_last());
    let id = outcome?;

    log::debug!("[ITEMS] fading out #{}", id);
    scheduler.defer(fade_ms, move || {
        let mut removed = false;
        with_list(&mut |list: &mut ItemList| removed = list.remove(id));
        if removed {
            on_removed();
        } else {
            log::debug!("[ITEMS] #{} was already gone", id);
        }
    });
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::manual::ManualScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn lend(list: &Rc<RefCell<ItemList>>) -> impl Fn(&mut dyn FnMut(&mut ItemList)) + 'static {
        let list = Rc::clone(list);
        move |edit: &mut dyn FnMut(&mut ItemList)| edit(&mut *list.borrow_mut())
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        (count, move || -> Box<dyn FnOnce()> {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.set(sink.get() + 1))
        })
    }

    #[test]
    fn test_add_numbers_by_position() {
        let mut list = ItemList::default();
        assert_eq!(list.add("10:00:00 AM").label, "Dynamic item 1 - Added at 10:00:00 AM");
        assert_eq!(list.add("10:00:05 AM").label, "Dynamic item 2 - Added at 10:00:05 AM");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut list = ItemList::default();
        let first = list.add("t").id;
        let second = list.add("t").id;
        assert!(list.remove(first));
        let third = list.add("t");
        assert_ne!(third.id, second);
        assert_eq!(third.label, "Dynamic item 2 - Added at t");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = ItemList::default();
        let id = list.add("t").id;
        assert!(list.remove(id));
        assert!(!list.remove(id));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_last_on_empty() {
        let mut list = ItemList::default();
        assert!(matches!(list.begin_remove_last(), Err(DemoError::NoItems)));
    }

    #[test]
    fn test_remove_last_skips_fading_entries() {
        let mut list = ItemList::default();
        let a = list.add("t").id;
        let b = list.add("t").id;

        assert_eq!(list.begin_remove_last().unwrap(), b);
        assert_eq!(list.begin_remove_last().unwrap(), a);
        assert!(matches!(list.begin_remove_last(), Err(DemoError::NoItems)));

        // Still on screen until the fade completes
        assert_eq!(list.len(), 2);
        assert!(list.remove(b));
        assert!(list.remove(a));
        assert!(list.is_empty());
    }

    #[test]
    fn test_fade_out_removes_after_delay() {
        let sched = ManualScheduler::default();
        let list = Rc::new(RefCell::new(ItemList::default()));
        list.borrow_mut().add("t");
        let last = list.borrow_mut().add("t").id;
        let (removed, notify) = counter();

        let id = fade_out_last(&sched, 300, lend(&list), notify()).unwrap();
        assert_eq!(id, last);
        assert!(list.borrow().entries()[1].removing);

        sched.advance(299);
        assert_eq!(list.borrow().len(), 2);
        assert_eq!(removed.get(), 0);

        sched.advance(1);
        assert_eq!(list.borrow().len(), 1);
        assert_eq!(removed.get(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_fade_out_after_row_clicked_away() {
        let sched = ManualScheduler::default();
        let list = Rc::new(RefCell::new(ItemList::default()));
        list.borrow_mut().add("t");
        let (removed, notify) = counter();

        let id = fade_out_last(&sched, 300, lend(&list), notify()).unwrap();
        sched.advance(100);
        assert!(list.borrow_mut().remove(id));

        sched.advance(200);
        assert!(list.borrow().is_empty());
        assert_eq!(removed.get(), 0);
    }

    #[test]
    fn test_fade_out_on_empty_list() {
        let sched = ManualScheduler::default();
        let list = Rc::new(RefCell::new(ItemList::default()));
        let (removed, notify) = counter();

        let outcome = fade_out_last(&sched, 300, lend(&list), notify());
        assert!(matches!(outcome, Err(DemoError::NoItems)));
        assert_eq!(sched.pending(), 0);

        sched.advance(1_000);
        assert_eq!(removed.get(), 0);
    }

    #[test]
    fn test_rapid_fade_outs_take_distinct_rows() {
        let sched = ManualScheduler::default();
        let list = Rc::new(RefCell::new(ItemList::default()));
        list.borrow_mut().add("t");
        list.borrow_mut().add("t");
        let (removed, notify) = counter();

        let first = fade_out_last(&sched, 300, lend(&list), notify()).unwrap();
        sched.advance(50);
        let second = fade_out_last(&sched, 300, lend(&list), notify()).unwrap();
        assert_ne!(first, second);
        assert!(matches!(
            fade_out_last(&sched, 300, lend(&list), notify()),
            Err(DemoError::NoItems)
        ));

        sched.advance(250);
        assert_eq!(list.borrow().len(), 1);
        sched.advance(50);
        assert!(list.borrow().is_empty());
        assert_eq!(removed.get(), 2);
    }
}
