//! Fragments gathered through `inventory`.
#![cfg(feature = "inventory")]

use implreg::{DeferredPublisher, Delivery, collected::collect_submitted, testing::RecordingHook};

implreg::submit_implementors!("cursive_core" => ["impl Neg for XY<isize>"]);
implreg::submit_implementors!("cursive_core" => ["impl Neg for Vec2", "impl Neg for Vec2"]);
implreg::submit_implementors!("cursive_empty" => []);

#[test]
fn test_submitted_fragments_collected_and_published() {
    let payload = collect_submitted();

    assert_eq!(
        payload.get("cursive_core").unwrap(),
        [
            "impl Neg for Vec2",
            "impl Neg for Vec2",
            "impl Neg for XY<isize>",
        ]
    );
    assert_eq!(payload.get("cursive_empty"), Some(&[][..]));

    let recorder = RecordingHook::new();
    let publisher = DeferredPublisher::with_hook(recorder.clone());
    assert_eq!(publisher.publish(payload.clone()).unwrap(), Delivery::Registered);
    assert_eq!(recorder.last(), Some(payload));
}
