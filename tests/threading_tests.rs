use particle_sandbox::{KeyboardState, SandboxConfig, Session, Viewport};
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_session_is_sync_and_send() {
    fn assert_sync_send<T: Sync + Send>() {}
    assert_sync_send::<Session>();
    assert_sync_send::<KeyboardState>();
}

#[test]
fn test_key_events_from_other_threads_reach_the_tick() {
    let mut session = Session::new(SandboxConfig::default(), Viewport::new(800.0, 600.0)).unwrap();
    let keyboard = session.keyboard();

    let handle = thread::spawn(move || {
        keyboard.press("d");
        keyboard.press("s");
    });
    handle.join().unwrap();

    session.tick();
    let output = session.output().unwrap();
    assert!(output.velocity.x > 0.0);
    assert!(output.velocity.y > 0.0);
}

#[test]
fn test_shared_session_across_threads() {
    let session = Session::new(SandboxConfig::default(), Viewport::new(800.0, 600.0)).unwrap();
    let session = Arc::new(Mutex::new(session));

    let mut handles = vec![];
    for _ in 0..4 {
        let session = Arc::clone(&session);
        handles.push(thread::spawn(move || {
            session.lock().unwrap().tick();
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(session.lock().unwrap().profile().ticks, 4);
}
