use std::time::Duration;
use rotator::{Environment, Event, Panel, Registry, Rotator, RotatorOptions, RotatorState, TransitionMode};

fn panels(count: usize) -> Vec<Panel> {
    (0..count).map(|i| Panel::new(100.0 + 10.0 * i as f32)).collect()
}

fn every_second() -> RotatorOptions {
    RotatorOptions {
        interval: Duration::from_millis(1000),
        ..Default::default()
    }
}

const FALLBACK: Environment = Environment {
    supports_transitions: false,
    touch_primary: false,
};

fn active_panels(rotator: &Rotator) -> Vec<usize> {
    rotator
        .panels()
        .iter()
        .enumerate()
        .filter(|(_, panel)| panel.active)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn next_slide_cycles_through_every_panel() {
    for count in 2..7 {
        let mut rotator = Rotator::new(panels(count), RotatorOptions::default(), Environment::default());

        for k in 1..=3 * count {
            rotator.next_slide();
            assert_eq!(rotator.current(), k % count);
            assert!(rotator.current() < count);
            assert_eq!(active_panels(&rotator), vec![k % count]);
        }
    }
}

#[test]
fn previous_slide_undoes_next_slide() {
    let mut rotator = Rotator::new(panels(4), RotatorOptions::default(), Environment::default());

    for start in 0..4 {
        rotator.change_slide(start);

        rotator.next_slide();
        rotator.previous_slide();
        assert_eq!(rotator.current(), start);

        rotator.previous_slide();
        rotator.next_slide();
        assert_eq!(rotator.current(), start);
    }
}

#[test]
fn previous_slide_wraps_to_the_last_panel() {
    let mut rotator = Rotator::new(panels(3), RotatorOptions::default(), Environment::default());

    rotator.previous_slide();
    assert_eq!(rotator.current(), 2);
}

#[test]
fn starting_twice_keeps_a_single_timer() {
    let mut rotator = Rotator::new(panels(5), every_second(), Environment::default());

    rotator.start();
    rotator.update(Duration::from_millis(400));
    rotator.start();
    assert_eq!(rotator.state(), RotatorState::Running);

    // Restarting resets the interval; one advance per elapsed second
    rotator.update(Duration::from_millis(999));
    assert_eq!(rotator.current(), 0);
    rotator.update(Duration::from_millis(1));
    assert_eq!(rotator.current(), 1);
    rotator.update(Duration::from_millis(2000));
    assert_eq!(rotator.current(), 3);
}

#[test]
fn stop_halts_automatic_advances_until_restarted() {
    let mut rotator = Rotator::new(panels(3), every_second(), Environment::default());
    rotator.handle_event(Event::Load);
    rotator.update(Duration::from_millis(1000));
    assert_eq!(rotator.current(), 1);

    rotator.stop();
    rotator.stop();
    assert_eq!(rotator.state(), RotatorState::Stopped);
    rotator.update(Duration::from_secs(30));
    assert_eq!(rotator.current(), 1);

    rotator.start();
    rotator.update(Duration::from_millis(1000));
    assert_eq!(rotator.current(), 2);
}

#[test]
fn change_slide_works_while_stopped() {
    let mut rotator = Rotator::new(panels(3), every_second(), Environment::default());

    rotator.change_slide(2);
    assert_eq!(rotator.current(), 2);
    assert_eq!(rotator.state(), RotatorState::Stopped);
}

#[test]
fn zero_or_one_panel_is_inert() {
    for count in 0..2 {
        let mut rotator = Rotator::new(panels(count), every_second(), Environment::default());

        assert!(rotator.is_inert());
        assert!(!rotator.has_listeners());

        rotator.handle_event(Event::Load);
        rotator.start();
        rotator.update(Duration::from_secs(10));
        rotator.next_slide();
        rotator.previous_slide();

        assert_eq!(rotator.state(), RotatorState::Stopped);
        assert_eq!(rotator.current(), 0);
        assert!(!rotator.container().ready);
        assert_eq!(rotator.container().height, None);
        assert!(rotator.panels().iter().all(|panel| !panel.active));
    }
}

#[test]
fn three_panels_advance_three_times_in_3100_ms() {
    let mut rotator = Rotator::new(panels(3), every_second(), Environment::default());
    rotator.handle_event(Event::Load);

    let mut visited = Vec::new();
    for _ in 0..31 {
        let before = rotator.current();
        rotator.update(Duration::from_millis(100));
        if rotator.current() != before {
            visited.push(rotator.current());
        }
    }

    assert_eq!(visited, vec![1, 2, 0]);
}

#[test]
fn layered_fade_wraps_back_to_the_first_panel() {
    let options = RotatorOptions {
        duration: Duration::from_millis(600),
        ..Default::default()
    };
    let mut rotator = Rotator::new(panels(3), options, FALLBACK);
    assert_eq!(rotator.mode(), TransitionMode::LayeredFade);

    rotator.next_slide();
    rotator.next_slide();
    rotator.update(Duration::from_millis(600));
    assert_eq!(rotator.current(), 2);
    assert!(!rotator.panels()[0].visible);
    assert!(!rotator.panels()[1].visible);
    assert!(rotator.panels()[2].visible);

    rotator.change_slide(0);
    assert_eq!(rotator.current(), 0);
    assert_eq!(rotator.panels()[0].z_index, 2);
    assert_eq!(rotator.panels()[2].z_index, 1);
    assert!(rotator.panels()[0].visible);
    assert!(rotator.panels()[2].visible);

    rotator.update(Duration::from_millis(599));
    assert!(rotator.panels()[2].visible);

    rotator.update(Duration::from_millis(1));
    assert!(!rotator.panels()[2].visible);
    assert!(rotator.panels()[0].visible);
    assert_eq!(rotator.panels()[0].opacity, 1.0);
}

#[test]
fn layered_fade_respects_the_stacking_offset() {
    let options = RotatorOptions {
        z_index_offset: 100,
        ..Default::default()
    };
    let mut rotator = Rotator::new(panels(3), options, FALLBACK);

    assert_eq!(rotator.panels()[0].z_index, 102);
    assert!(rotator.panels()[1..].iter().all(|p| p.z_index == 101 && !p.visible));

    rotator.next_slide();
    assert_eq!(rotator.panels()[1].z_index, 102);
    assert_eq!(rotator.panels()[0].z_index, 101);
}

#[test]
fn hover_pauses_and_resumes_with_a_fresh_timer() {
    let mut rotator = Rotator::new(panels(3), every_second(), Environment::default());
    rotator.handle_event(Event::Load);
    rotator.update(Duration::from_millis(700));

    rotator.handle_event(Event::PointerEnter);
    assert_eq!(rotator.state(), RotatorState::Stopped);
    rotator.update(Duration::from_secs(5));
    assert_eq!(rotator.current(), 0);

    rotator.handle_event(Event::PointerLeave);
    rotator.handle_event(Event::PointerLeave);
    assert_eq!(rotator.state(), RotatorState::Running);

    rotator.update(Duration::from_millis(999));
    assert_eq!(rotator.current(), 0);
    rotator.update(Duration::from_millis(1));
    assert_eq!(rotator.current(), 1);
}

#[test]
fn registry_binds_each_container_once() {
    let mut registry = Registry::new();

    registry.bind("header", panels(3), every_second(), Environment::default());
    registry.bind("header", panels(2), RotatorOptions::default(), FALLBACK);

    let rotator = registry.get(&"header").expect("container should be bound");
    assert_eq!(rotator.len(), 3);
    assert_eq!(rotator.mode(), TransitionMode::ClassToggle);
    assert_eq!(rotator.options().interval, Duration::from_millis(1000));
}
