//! Toast Notifications
//!
//! Last-write-wins: at most one notification is on screen and a new one
//! evicts the old one immediately. Each notification slides out after the
//! display delay and is removed once the exit animation ends. Deferred steps
//! only ever touch the notification that scheduled them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#27ae60",
            NotificationKind::Error => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Showing,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: Phase,
}

impl Notification {
    pub fn class(&self) -> String {
        format!("notification {}", self.kind.class())
    }

    pub fn animation(&self) -> &'static str {
        match self.phase {
            Phase::Showing => "slideIn 0.3s ease-out",
            Phase::Leaving => "slideOut 0.3s ease-in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            exit_ms: 300,
        }
    }
}

type Publish = Rc<dyn Fn(Option<Notification>)>;

pub struct Notifier<S: Scheduler> {
    scheduler: S,
    timings: NotificationTimings,
    next_id: Rc<Cell<u64>>,
    current: Rc<RefCell<Option<Notification>>>,
    publish: Publish,
}

impl<S: Scheduler> Clone for Notifier<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            timings: self.timings,
            next_id: Rc::clone(&self.next_id),
            current: Rc::clone(&self.current),
            publish: Rc::clone(&self.publish),
        }
    }
}

impl<S: Scheduler> Notifier<S> {
    /// `publish` receives every change of the visible notification.
    pub fn new<P>(scheduler: S, timings: NotificationTimings, publish: P) -> Self
    where
        P: Fn(Option<Notification>) + 'static,
    {
        Self {
            scheduler,
            timings,
            next_id: Rc::new(Cell::new(0)),
            current: Rc::new(RefCell::new(None)),
            publish: Rc::new(publish),
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let notification = Notification {
            id,
            message: message.into(),
            kind,
            phase: Phase::Showing,
        };
        log::info!("[NOTIFY] {:?}: {}", kind, notification.message);

        let evicted = self.current.replace(Some(notification.clone()));
        if let Some(old) = evicted {
            log::debug!("[NOTIFY] evicting #{}", old.id);
        }
        (self.publish)(Some(notification));

        let current = Rc::clone(&self.current);
        let publish = Rc::clone(&self.publish);
        let scheduler = self.scheduler.clone();
        let exit_ms = self.timings.exit_ms;

        self.scheduler.defer(self.timings.display_ms, move || {
            let leaving = {
                let mut slot = current.borrow_mut();
                match slot.as_mut() {
                    Some(n) if n.id == id => {
                        n.phase = Phase::Leaving;
                        Some(n.clone())
                    }
                    _ => None,
                }
            };
            let Some(leaving) = leaving else { return };
            publish(Some(leaving));

            scheduler.defer(exit_ms, move || {
                let removed = {
                    let mut slot = current.borrow_mut();
                    if slot.as_ref().is_some_and(|n| n.id == id) {
                        slot.take()
                    } else {
                        None
                    }
                };
                if removed.is_some() {
                    publish(None);
                }
            });
        });
    }
}
