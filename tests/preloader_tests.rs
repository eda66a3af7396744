// Host-side tests for the boot overlay.

use folio_core::preloader::{Preloader, PRELOADER_STATUS};
use folio_core::{PRELOADER_EXIT_MS, PRELOADER_STATUS_MS, PRELOADER_TICK_MS};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn progress_climbs_to_full_then_exits_after_delay() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut p = Preloader::new(0.0);
    assert_eq!(p.percent(), 0);

    let mut now = 0.0;
    let mut last = 0.0;
    while !p.is_full() {
        now += PRELOADER_TICK_MS;
        p.update(now, &mut rng);
        assert!(p.progress() >= last);
        assert!(p.progress() - last < 5.0);
        assert!(p.progress() <= 100.0);
        last = p.progress();
        assert!(now < 100_000.0);
    }
    assert_eq!(p.percent(), 100);
    assert!(!p.is_complete(now));

    // the full bar is noticed on the following tick
    let exit_at = now + PRELOADER_TICK_MS + PRELOADER_EXIT_MS;
    p.update(now + PRELOADER_TICK_MS, &mut rng);
    assert!(!p.is_complete(exit_at - 1.0));
    assert!(p.is_complete(exit_at));
}

#[test]
fn status_walks_the_script_and_stops_on_the_last_line() {
    // zero steps: progress never moves, only the status does
    let mut rng = StepRng::new(0, 0);
    let mut p = Preloader::new(0.0);
    assert_eq!(p.status(), "INITIALIZING SYSTEM");
    assert!(!p.update(PRELOADER_STATUS_MS - 1.0, &mut rng));
    assert!(p.update(PRELOADER_STATUS_MS, &mut rng));
    assert_eq!(p.status(), "LOADING ASSETS...");
    p.update(PRELOADER_STATUS_MS * 10.0, &mut rng);
    assert_eq!(p.status(), "ACCESS GRANTED");
    assert_eq!(p.status(), PRELOADER_STATUS[PRELOADER_STATUS.len() - 1]);
    assert_eq!(p.percent(), 0);
}

#[test]
fn late_update_catches_up_every_tick() {
    let mut stepped = Preloader::new(0.0);
    let mut caught_up = Preloader::new(0.0);
    let mut a = StdRng::seed_from_u64(3);
    let mut b = StdRng::seed_from_u64(3);
    for k in 1..=10 {
        stepped.update(k as f64 * PRELOADER_TICK_MS, &mut a);
    }
    caught_up.update(10.0 * PRELOADER_TICK_MS, &mut b);
    assert_eq!(stepped, caught_up);
}
