use landing_core::hero;
use landing_core::ReadinessGate;

const A: &str = "/images/Phone_02-Spotlight.glb";
const B: &str = "/images/Phone_3.glb";

#[test]
fn overlay_waits_for_every_required_asset() {
    let mut gate = ReadinessGate::new([A, B]);
    assert!(gate.overlay_visible(0.0));
    assert!(gate.mark_ready(A, 100.0));
    assert!(!gate.all_ready());
    assert!(gate.overlay_visible(10_000.0));
    assert!(gate.mark_ready(B, 200.0));
    assert!(gate.all_ready());
}

#[test]
fn overlay_hides_after_settle_interval() {
    let mut gate = ReadinessGate::new([A]);
    gate.mark_ready(A, 1000.0);
    assert!(gate.overlay_visible(1000.0));
    assert!(gate.overlay_visible(1249.0));
    assert!(!gate.overlay_visible(1250.0));
    assert!(!gate.overlay_visible(5000.0));
}

#[test]
fn readiness_is_monotonic() {
    let mut gate = ReadinessGate::new([A]).with_settle_ms(0.0);
    assert!(gate.mark_ready(A, 0.0));
    assert!(!gate.mark_ready(A, 50.0));
    assert!(gate.is_ready(A));
    assert!(!gate.overlay_visible(0.0));
}

#[test]
fn unrelated_ids_do_not_count() {
    let mut gate = ReadinessGate::new([A, B]);
    gate.mark_ready("/images/Unity_Phone_01.glb", 0.0);
    assert!(!gate.all_ready());
    assert!(gate.overlay_visible(1_000_000.0));
}

#[test]
fn shrinking_required_set_completes_gate() {
    let mut gate = ReadinessGate::new(hero::required_models(false).iter().copied());
    gate.mark_ready(A, 10.0);
    assert!(gate.overlay_visible(1000.0));
    gate.set_required(hero::required_models(true).iter().copied(), 500.0);
    assert_eq!(gate.required(), &[A.to_string()]);
    assert!(gate.all_ready());
    assert!(gate.overlay_visible(700.0));
    assert!(!gate.overlay_visible(750.0));
}

#[test]
fn growing_required_set_reopens_gate() {
    let mut gate = ReadinessGate::new([A]).with_settle_ms(0.0);
    gate.mark_ready(A, 0.0);
    assert!(!gate.overlay_visible(1.0));
    gate.set_required([A, B], 2.0);
    assert!(gate.overlay_visible(3.0));
    gate.mark_ready(B, 4.0);
    assert!(!gate.overlay_visible(4.0));
}
