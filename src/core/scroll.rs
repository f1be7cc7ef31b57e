//! Scroll event dispatch
//!
//! egui reports the scroll offset every frame; the emitter turns changes of
//! that offset into discrete scroll events. Listeners are attached through a
//! [`Subscription`] guard and detached when the guard is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::tracker::SectionLayout;

/// A change of the page scroll offset
#[derive(Debug, Clone, Copy)]
pub struct ScrollEvent<'a> {
    /// Pixels scrolled from the top of the page
    pub offset: f32,
    /// Section geometry measured in the same frame
    pub layout: &'a SectionLayout,
}

/// Receives scroll events
pub trait ScrollListener {
    fn handle_scroll(&mut self, event: &ScrollEvent<'_>);
}

type Listener = Rc<RefCell<dyn ScrollListener>>;
type Slots = Vec<(u64, Listener)>;

/// Dispatches scroll events to subscribed listeners
pub struct ScrollEmitter {
    slots: Rc<RefCell<Slots>>,
    next_id: u64,
    last_offset: Option<f32>,
}

impl Default for ScrollEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollEmitter {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
            next_id: 0,
            last_offset: None,
        }
    }

    /// Attach a listener. It stays attached until the returned guard drops.
    #[must_use = "dropping the subscription detaches the listener immediately"]
    pub fn subscribe(&mut self, listener: Listener) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.borrow_mut().push((id, listener));
        tracing::debug!("Scroll listener {} attached", id);

        Subscription {
            id,
            slots: Rc::downgrade(&self.slots),
        }
    }

    /// Number of attached listeners
    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Deliver an event to every attached listener
    pub fn dispatch(&self, event: &ScrollEvent<'_>) {
        // Snapshot so listeners may drop subscriptions while being notified
        let listeners: Vec<Listener> = self
            .slots
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener.borrow_mut().handle_scroll(event);
        }
    }

    /// Feed the offset observed this frame.
    ///
    /// Dispatches an event on the first observation and whenever the offset
    /// moved since the previous one. Returns whether an event was dispatched.
    pub fn observe(&mut self, offset: f32, layout: &SectionLayout) -> bool {
        if self.last_offset == Some(offset) {
            return false;
        }
        self.last_offset = Some(offset);
        self.dispatch(&ScrollEvent { offset, layout });
        true
    }
}

/// Keeps a listener attached to a [`ScrollEmitter`]
pub struct Subscription {
    id: u64,
    slots: Weak<RefCell<Slots>>,
}

impl Subscription {
    /// Detach the listener now
    #[cfg(test)]
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().retain(|(id, _)| *id != self.id);
            tracing::debug!("Scroll listener {} detached", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        offsets: Vec<f32>,
    }

    impl ScrollListener for Recorder {
        fn handle_scroll(&mut self, event: &ScrollEvent<'_>) {
            self.offsets.push(event.offset);
        }
    }

    #[test]
    fn test_dispatch_only_on_change() {
        let mut emitter = ScrollEmitter::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let _sub = emitter.subscribe(recorder.clone());
        let layout = SectionLayout::new();

        assert!(emitter.observe(0.0, &layout));
        assert!(!emitter.observe(0.0, &layout));
        assert!(emitter.observe(42.0, &layout));
        assert!(!emitter.observe(42.0, &layout));

        assert_eq!(recorder.borrow().offsets, vec![0.0, 42.0]);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let mut emitter = ScrollEmitter::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let layout = SectionLayout::new();

        {
            let _sub = emitter.subscribe(recorder.clone());
            assert_eq!(emitter.listener_count(), 1);
            emitter.observe(10.0, &layout);
        }

        assert_eq!(emitter.listener_count(), 0);
        emitter.observe(20.0, &layout);
        assert_eq!(recorder.borrow().offsets, vec![10.0]);
    }

    #[test]
    fn test_cancel_leaves_other_listeners() {
        let mut emitter = ScrollEmitter::new();
        let first = Rc::new(RefCell::new(Recorder::default()));
        let second = Rc::new(RefCell::new(Recorder::default()));
        let layout = SectionLayout::new();

        let sub_first = emitter.subscribe(first.clone());
        let _sub_second = emitter.subscribe(second.clone());
        sub_first.cancel();

        emitter.observe(5.0, &layout);
        assert!(first.borrow().offsets.is_empty());
        assert_eq!(second.borrow().offsets, vec![5.0]);
    }

    #[test]
    fn test_subscription_outlives_emitter() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let sub = {
            let mut emitter = ScrollEmitter::new();
            emitter.subscribe(recorder)
        };
        // Emitter is gone; dropping the guard must be a no-op
        drop(sub);
    }
}
