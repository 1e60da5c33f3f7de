use super::*;

#[test]
fn test_queue_is_fifo() {
    let mut s = QueueScheduler::new();
    s.schedule(Duration::from_millis(5), ThinkTicket { generation: 1 });
    s.schedule(Duration::ZERO, ThinkTicket { generation: 2 });
    assert_eq!(s.pending(), 2);

    let first = s.next_due().unwrap();
    assert_eq!(first.ticket.generation, 1);
    assert_eq!(first.delay, Duration::from_millis(5));
    assert_eq!(s.next_due().unwrap().ticket.generation, 2);
    assert!(s.next_due().is_none());
}

#[test]
fn test_cancel_removes_only_that_entry() {
    let mut s = QueueScheduler::new();
    let a = s.schedule(Duration::ZERO, ThinkTicket { generation: 1 });
    let b = s.schedule(Duration::ZERO, ThinkTicket { generation: 2 });
    assert_ne!(a, b);

    s.cancel(a);
    assert_eq!(s.pending(), 1);
    assert_eq!(s.peek().unwrap().handle, b);

    // Cancelling again is harmless.
    s.cancel(a);
    assert_eq!(s.pending(), 1);
}
