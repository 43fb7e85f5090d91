use crate::core::event::Action;
use crate::core::registration::{EntryId, Field};
use crate::terminal::KeyEvent;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
    InputChanged { field: Field, value: String },
    EntryAdded(EntryId),
    EntryRemoved(EntryId),
    EntriesCleared { count: usize },
    SubmitRejected { fields: Vec<Field> },
}

#[derive(Debug, Clone)]
struct ScheduledEvent {
    due: Instant,
    event: AppEvent,
}

pub struct EventQueue {
    queue: VecDeque<AppEvent>,
    scheduled: Vec<ScheduledEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            scheduled: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn emit_after(&mut self, event: AppEvent, delay: Duration) {
        self.scheduled.push(ScheduledEvent {
            due: Instant::now() + delay,
            event,
        });
    }

    pub fn cancel_clear_status(&mut self) {
        let is_clear = |event: &AppEvent| matches!(event, AppEvent::Action(Action::ClearStatus));
        self.queue.retain(|queued| !is_clear(queued));
        self.scheduled.retain(|scheduled| !is_clear(&scheduled.event));
    }

    pub fn next_ready(&mut self, now: Instant) -> Option<AppEvent> {
        self.move_due_to_queue(now);
        self.queue.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.len() + self.scheduled.len()
    }

    fn move_due_to_queue(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.scheduled.retain(|scheduled| {
            if scheduled.due <= now {
                due.push(scheduled.event.clone());
                false
            } else {
                true
            }
        });
        self.queue.extend(due);
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_events_wait_until_due() {
        let mut queue = EventQueue::new();
        queue.emit_after(AppEvent::Action(Action::ClearStatus), Duration::from_secs(60));
        queue.emit(AppEvent::Action(Action::Submit));

        let now = Instant::now();
        assert_eq!(queue.next_ready(now), Some(AppEvent::Action(Action::Submit)));
        assert_eq!(queue.next_ready(now), None);
        assert_eq!(
            queue.next_ready(now + Duration::from_secs(61)),
            Some(AppEvent::Action(Action::ClearStatus))
        );
    }

    #[test]
    fn cancel_drops_pending_status_clears_only() {
        let mut queue = EventQueue::new();
        queue.emit_after(AppEvent::Action(Action::ClearStatus), Duration::from_secs(1));
        queue.emit(AppEvent::Action(Action::ClearStatus));
        queue.emit(AppEvent::EntriesCleared { count: 2 });
        queue.cancel_clear_status();
        assert_eq!(queue.pending(), 1);
        assert_eq!(
            queue.next_ready(Instant::now()),
            Some(AppEvent::EntriesCleared { count: 2 })
        );
    }
}
