//! Change notifications emitted by mission-settings sections.
//!
//! Observers are kept in an ordered list and invoked synchronously, in the
//! order they were connected. An observer only receives the event payload,
//! so it cannot call back into the section that emitted it.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// A single value-changed notification, carrying the new value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SectionEvent {
    AvailableChanged(bool),
    DirtyChanged(bool),
    SpecifyFlightSpeedChanged(bool),
    ItemCountChanged(usize),
    SettingsSpecifiedChanged(bool),
    FlightSpeedChanged(f64),
}

/// Handle returned by [`Signals::connect`], used to disconnect again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Slot = Box<dyn FnMut(&SectionEvent)>;

/// Ordered list of observers for [`SectionEvent`]s.
#[derive(Default)]
pub struct Signals {
    slots: Vec<(SubscriptionId, Slot)>,
    next_id: usize,
}

impl core::fmt::Debug for Signals {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signals")
            .field("observers", &self.slots.len())
            .finish()
    }
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect an observer, which is called for every subsequent event.
    pub fn connect(&mut self, slot: impl FnMut(&SectionEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Box::new(slot)));
        id
    }

    /// Returns `false` if no observer with this id was connected.
    pub fn disconnect(&mut self, id: SubscriptionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot_id, _)| *slot_id != id);
        self.slots.len() != before
    }

    /// Connect a queue which buffers events until they are polled.
    pub fn receiver(&mut self) -> Receiver {
        let queue = Rc::new(RefCell::new(VecDeque::new()));
        let sink = queue.clone();
        let id = self.connect(move |event| sink.borrow_mut().push_back(*event));
        Receiver { id, queue }
    }

    pub fn num_observers(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn emit(&mut self, event: SectionEvent) {
        for (_, slot) in self.slots.iter_mut() {
            slot(&event);
        }
    }
}

/// Polling end of an event queue created with [`Signals::receiver`].
#[derive(Debug, Clone)]
pub struct Receiver {
    id: SubscriptionId,
    queue: Rc<RefCell<VecDeque<SectionEvent>>>,
}

impl Receiver {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take the oldest buffered event, if any.
    pub fn try_receive(&self) -> Option<SectionEvent> {
        self.queue.borrow_mut().pop_front()
    }

    /// Take all buffered events, oldest first.
    pub fn drain(&self) -> Vec<SectionEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}
