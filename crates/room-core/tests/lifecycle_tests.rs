use room_core::LoopHandle;

#[test]
fn stop_halts_ticks_for_every_clone() {
    let handle = LoopHandle::new();
    let in_callback = handle.clone();
    assert!(in_callback.tick());
    assert!(in_callback.tick());
    assert_eq!(handle.frames(), 2);

    handle.stop();
    assert!(!handle.is_running());
    assert!(!in_callback.tick());
    assert_eq!(handle.frames(), 2);
}

#[test]
fn stop_is_repeatable() {
    let handle = LoopHandle::default();
    handle.stop();
    handle.stop();
    assert!(!handle.is_running());
}

#[test]
fn resume_after_stop_restarts_ticking() {
    let handle = LoopHandle::new();
    assert!(handle.tick());
    handle.stop();
    assert!(!handle.tick());

    assert!(handle.resume());
    assert!(handle.is_running());
    assert!(handle.tick());
    assert_eq!(handle.frames(), 2);
}

#[test]
fn resume_while_running_is_a_no_op() {
    let handle = LoopHandle::new();
    let before = handle.generation();
    assert!(!handle.resume());
    assert_eq!(handle.generation(), before);
}

#[test]
fn callbacks_from_before_a_restart_are_stale() {
    let handle = LoopHandle::new();
    let old_loop = handle.generation();
    handle.stop();
    handle.resume();
    let new_loop = handle.generation();
    assert_ne!(old_loop, new_loop);
    // the old callback sees a running handle but a different generation
    assert!(handle.is_running());
    assert_ne!(handle.generation(), old_loop);
}
