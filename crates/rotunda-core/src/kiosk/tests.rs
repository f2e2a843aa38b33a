//! Tests for the kiosk orchestrator.

use super::*;
use crate::panel::{NumberField, PanelWidget};
use proptest::prelude::*;
use rotunda_platform::{Clock, ManualClock};
use rotunda_types::config::{Locale, Viewport};

const CENTER_CLICK: InputEvent = InputEvent::PointerClick { x: 400, y: 300 };
// Panel at (10, 10): row 0 is [Pause | countdown], rows are 28px tall.
const PAUSE_BUTTON: InputEvent = InputEvent::PointerClick { x: 20, y: 20 };
const COUNTDOWN_TEXT: InputEvent = InputEvent::PointerClick { x: 200, y: 20 };

fn config() -> KioskConfig {
    KioskConfig {
        viewport: Viewport {
            width: 800,
            height: 600,
        },
        ..KioskConfig::default()
    }
}

fn kiosk_with(cfg: KioskConfig) -> Kiosk {
    Kiosk::new(&cfg, Scene::standard(), 0)
}

fn display_mode() -> Kiosk {
    kiosk_with(KioskConfig {
        content_interaction: false,
        ..config()
    })
}

fn frame_source(k: &Kiosk) -> Option<String> {
    k.scene().get(ElementId::PageFrame).unwrap().source.clone()
}

fn overlay_visible(k: &Kiosk) -> bool {
    k.scene()
        .get(ElementId::InteractionOverlay)
        .unwrap()
        .visible
}

fn status_text(k: &Kiosk) -> Option<String> {
    let el = k.scene().get(ElementId::StatusMessage).unwrap();
    if el.visible { el.text.clone() } else { None }
}

fn armed(k: &Kiosk, kind: KioskTimer) -> usize {
    k.timers().count(|t| *t == kind)
}

// -- Startup ------------------------------------------------------------------

#[test]
fn starts_rotating_on_first_page() {
    let k = kiosk_with(config());
    assert!(k.rotation().is_rotating());
    assert_eq!(k.rotation().state().current_index, 0);
    assert_eq!(frame_source(&k).as_deref(), Some("ja.html"));
    assert_eq!(armed(&k, KioskTimer::Advance), 1);
    assert_eq!(armed(&k, KioskTimer::Countdown), 1);
    assert_eq!(armed(&k, KioskTimer::Idle), 0);
}

#[test]
fn startup_renders_panel() {
    let k = kiosk_with(config());
    let view = k.panel_view().unwrap();
    assert!(view.button("Pause").is_some());
    assert_eq!(view.countdown_text(), Some("Next switch in: 60s"));
}

#[test]
fn startup_overlay_follows_mode() {
    assert!(!overlay_visible(&kiosk_with(config())));
    assert!(overlay_visible(&display_mode()));
}

#[test]
fn page_dir_prefixes_sources() {
    let k = kiosk_with(KioskConfig {
        page_dir: "pages".into(),
        ..config()
    });
    assert_eq!(frame_source(&k).as_deref(), Some("pages/ja.html"));
}

#[test]
fn zero_interval_is_one_second() {
    let mut k = kiosk_with(KioskConfig {
        interval_secs: 0,
        ..config()
    });
    assert_eq!(k.rotation().interval_secs(), 1);
    k.tick(1_000);
    assert_eq!(k.rotation().state().current_index, 1);
}

// -- Rotation -----------------------------------------------------------------

#[test]
fn two_second_rotation_wraps_after_three_pages() {
    let mut k = kiosk_with(KioskConfig {
        interval_secs: 2,
        ..config()
    });
    k.tick(2_000);
    assert_eq!(k.rotation().state().current_index, 1);
    assert_eq!(frame_source(&k).as_deref(), Some("en.html"));
    k.tick(4_000);
    assert_eq!(k.rotation().state().current_index, 2);
    assert_eq!(frame_source(&k).as_deref(), Some("ch.html"));
    k.tick(6_000);
    assert_eq!(k.rotation().state().current_index, 0);
    assert_eq!(frame_source(&k).as_deref(), Some("ja.html"));
}

#[test]
fn countdown_text_updates_every_second() {
    let mut k = kiosk_with(KioskConfig {
        interval_secs: 3,
        ..config()
    });
    k.tick(1_000);
    assert_eq!(k.panel_view().unwrap().countdown_text(), Some("Next switch in: 2s"));
    k.tick(2_000);
    assert_eq!(k.panel_view().unwrap().countdown_text(), Some("Next switch in: 1s"));
    k.tick(3_000);
    assert_eq!(k.panel_view().unwrap().countdown_text(), Some("Next switch in: 3s"));
}

#[test]
fn large_tick_replays_every_advance() {
    let mut k = kiosk_with(KioskConfig {
        interval_secs: 1,
        ..config()
    });
    k.tick(7_000);
    assert_eq!(k.rotation().state().current_index, 7 % 3);
    assert_eq!(k.now(), 7_000);
}

#[test]
fn toggle_button_pauses_and_resumes() {
    let mut k = kiosk_with(config());
    k.handle_input(500, &InputEvent::Panel(PanelAction::ToggleRotation));
    assert!(!k.rotation().is_rotating());
    assert!(k.panel_view().unwrap().button("Resume").is_some());
    assert_eq!(armed(&k, KioskTimer::Advance), 0);
    assert_eq!(armed(&k, KioskTimer::Idle), 1);

    k.handle_input(900, &InputEvent::Panel(PanelAction::ToggleRotation));
    assert!(k.rotation().is_rotating());
    assert_eq!(armed(&k, KioskTimer::Advance), 1);
    assert_eq!(armed(&k, KioskTimer::Idle), 0);
}

#[test]
fn manual_selection_keeps_rotation_running() {
    let mut k = kiosk_with(KioskConfig {
        interval_secs: 5,
        ..config()
    });
    k.handle_input(
        1_000,
        &InputEvent::Panel(PanelAction::SelectPage(PageId::Chinese)),
    );
    assert_eq!(frame_source(&k).as_deref(), Some("ch.html"));
    assert_eq!(k.rotation().state().current_index, 2);
    assert!(k.rotation().is_rotating());
    k.tick(5_000);
    assert_eq!(frame_source(&k).as_deref(), Some("ja.html"));
}

#[test]
fn manual_selection_does_not_restart_rotation() {
    let mut k = kiosk_with(config());
    k.handle_input(0, &InputEvent::Panel(PanelAction::ToggleRotation));
    k.handle_input(
        100,
        &InputEvent::Panel(PanelAction::SelectPage(PageId::English)),
    );
    assert!(!k.rotation().is_rotating());
    assert_eq!(frame_source(&k).as_deref(), Some("en.html"));
}

#[test]
fn interval_change_restarts_countdown() {
    let mut k = kiosk_with(KioskConfig {
        interval_secs: 10,
        ..config()
    });
    k.handle_input(1_500, &InputEvent::Panel(PanelAction::SetInterval(5)));
    assert_eq!(k.rotation().state().seconds_remaining, 5);
    k.tick(6_499);
    assert_eq!(k.rotation().state().current_index, 0);
    k.tick(6_500);
    assert_eq!(k.rotation().state().current_index, 1);
    let view = k.panel_view().unwrap();
    assert!(matches!(
        view.input(NumberField::Interval),
        Some(PanelWidget::NumberInput { value: 5, .. })
    ));
}

// -- Interaction gate ---------------------------------------------------------

#[test]
fn overlay_click_pauses_once_then_only_resets_idle() {
    let mut k = display_mode();
    assert_eq!(k.handle_input(1_000, &CENTER_CLICK), Dispatch::Handled);
    assert!(!k.rotation().is_rotating());
    assert_eq!(
        status_text(&k).as_deref(),
        Some("Screen click detected - automatic rotation paused")
    );
    assert_eq!(k.idle().state().last_activity_ms, 1_000);
    assert_eq!(k.next_deadline(), Some(4_000));

    // Let the notification expire, then click again.
    k.tick(5_000);
    assert_eq!(status_text(&k), None);
    assert_eq!(k.handle_input(5_000, &CENTER_CLICK), Dispatch::Handled);
    assert!(!k.rotation().is_rotating());
    assert_eq!(status_text(&k), None);
    assert_eq!(k.idle().state().last_activity_ms, 5_000);
    assert_eq!(armed(&k, KioskTimer::Idle), 1);
    assert_eq!(k.next_deadline(), Some(35_000));
}

#[test]
fn content_mode_wrapper_click_pauses_and_passes_through() {
    let mut k = kiosk_with(config());
    assert_eq!(k.handle_input(100, &CENTER_CLICK), Dispatch::PassThrough);
    assert!(!k.rotation().is_rotating());
    assert!(!overlay_visible(&k));
    assert_eq!(
        status_text(&k).as_deref(),
        Some("Content interaction - automatic rotation paused")
    );
}

#[test]
fn panel_click_off_controls_does_not_pause() {
    let mut k = display_mode();
    assert_eq!(k.handle_input(100, &COUNTDOWN_TEXT), Dispatch::Handled);
    assert!(k.rotation().is_rotating());
    assert_eq!(status_text(&k), None);
}

#[test]
fn clicking_pause_button_stops_rotation_without_screen_notice() {
    let mut k = display_mode();
    assert_eq!(k.handle_input(100, &PAUSE_BUTTON), Dispatch::Handled);
    assert!(!k.rotation().is_rotating());
    assert_eq!(status_text(&k), None);
    assert!(k.panel_view().unwrap().button("Resume").is_some());
    assert_eq!(armed(&k, KioskTimer::Idle), 1);

    k.handle_input(200, &PAUSE_BUTTON);
    assert!(k.rotation().is_rotating());
}

#[test]
fn clicking_panel_widgets_applies_their_actions() {
    let mut k = kiosk_with(config());
    // Row 1, third column: Chinese.
    k.handle_input(100, &InputEvent::PointerClick { x: 300, y: 50 });
    assert_eq!(frame_source(&k).as_deref(), Some("ch.html"));
    assert!(k.rotation().is_rotating());

    // Row 5: content interaction checkbox.
    k.handle_input(200, &InputEvent::PointerClick { x: 20, y: 160 });
    assert!(!k.gate().content_interaction_enabled());
    assert!(overlay_visible(&k));

    // Row 4: hide, then the collapsed show button brings the rows back.
    k.handle_input(300, &InputEvent::PointerClick { x: 20, y: 130 });
    assert!(k.panel().is_hidden());
    k.handle_input(400, &InputEvent::PointerClick { x: 20, y: 20 });
    assert!(!k.panel().is_hidden());
    assert!(k.rotation().is_rotating());
}

#[test]
fn collapsed_panel_exposes_more_overlay() {
    let mut k = display_mode();
    k.handle_input(0, &InputEvent::Panel(PanelAction::ToggleVisibility));
    // Inside the expanded panel area but outside the collapsed button.
    k.handle_input(100, &InputEvent::PointerClick { x: 200, y: 100 });
    assert!(!k.rotation().is_rotating());
}

#[test]
fn embedded_click_message_pauses() {
    let mut k = kiosk_with(config());
    let event = InputEvent::Embedded(EmbeddedMessage::Clicked);
    assert_eq!(k.handle_input(2_000, &event), Dispatch::Handled);
    assert!(!k.rotation().is_rotating());
    assert_eq!(
        status_text(&k).as_deref(),
        Some("Embedded content clicked - automatic rotation paused")
    );
    assert_eq!(armed(&k, KioskTimer::Idle), 1);
}

#[test]
fn redundant_triggers_for_one_click_pause_once() {
    let mut k = kiosk_with(config());
    k.handle_input(100, &CENTER_CLICK);
    k.handle_input(100, &InputEvent::Embedded(EmbeddedMessage::Clicked));
    assert!(!k.rotation().is_rotating());
    assert_eq!(
        status_text(&k).as_deref(),
        Some("Content interaction - automatic rotation paused")
    );
    assert_eq!(armed(&k, KioskTimer::Idle), 1);
}

#[test]
fn switching_to_display_mode_shows_overlay() {
    let mut k = kiosk_with(config());
    k.handle_input(
        0,
        &InputEvent::Panel(PanelAction::SetContentInteraction(false)),
    );
    assert!(overlay_visible(&k));
    assert!(!k.gate().content_interaction_enabled());
    assert_eq!(
        status_text(&k).as_deref(),
        Some("Display mode enabled - click the screen to pause")
    );
    let view = k.panel_view().unwrap();
    assert!(view.widgets().any(|w| matches!(
        w,
        PanelWidget::Checkbox { checked: false, .. }
    )));

    k.handle_input(
        10,
        &InputEvent::Panel(PanelAction::SetContentInteraction(true)),
    );
    assert!(!overlay_visible(&k));
    assert_eq!(
        status_text(&k).as_deref(),
        Some("Content interaction enabled - links are clickable")
    );
}

// -- Idle monitor -------------------------------------------------------------

#[test]
fn idle_timeout_resumes_rotation_once() {
    let mut k = display_mode();
    k.handle_input(1_000, &CENTER_CLICK);
    k.tick(30_999);
    assert!(!k.rotation().is_rotating());
    k.tick(31_000);
    assert!(k.rotation().is_rotating());
    assert_eq!(armed(&k, KioskTimer::Advance), 1);
    assert_eq!(armed(&k, KioskTimer::Idle), 0);
    assert_eq!(
        status_text(&k).as_deref(),
        Some("Idle detected - resuming automatic rotation")
    );
    assert_eq!(k.rotation().state().seconds_remaining, 60);
}

#[test]
fn activity_postpones_idle_resume() {
    let mut k = display_mode();
    k.handle_input(0, &CENTER_CLICK);
    k.handle_input(20_000, &InputEvent::PointerMove { x: 1, y: 1 });
    k.tick(30_000);
    assert!(!k.rotation().is_rotating());
    k.handle_input(45_000, &InputEvent::Scroll { dy: 3 });
    k.handle_input(60_000, &InputEvent::KeyPress('a'));
    k.tick(89_999);
    assert!(!k.rotation().is_rotating());
    k.tick(90_000);
    assert!(k.rotation().is_rotating());
}

#[test]
fn activity_while_rotating_arms_no_idle_timer() {
    let mut k = kiosk_with(config());
    k.handle_input(10, &InputEvent::PointerMove { x: 5, y: 5 });
    assert_eq!(armed(&k, KioskTimer::Idle), 0);
}

#[test]
fn resuming_by_hand_disarms_idle() {
    let mut k = display_mode();
    k.handle_input(0, &CENTER_CLICK);
    k.handle_input(5_000, &InputEvent::Panel(PanelAction::ToggleRotation));
    assert!(k.rotation().is_rotating());
    assert_eq!(armed(&k, KioskTimer::Idle), 0);
    k.tick(40_000);
    assert_eq!(status_text(&k), None);
}

#[test]
fn idle_threshold_change_rearms() {
    let mut k = display_mode();
    k.handle_input(0, &CENTER_CLICK);
    k.handle_input(
        2_000,
        &InputEvent::Panel(PanelAction::SetIdleThreshold(10)),
    );
    assert_eq!(k.idle().threshold_secs(), 10);
    k.tick(11_999);
    assert!(!k.rotation().is_rotating());
    k.tick(12_000);
    assert!(k.rotation().is_rotating());
}

#[test]
fn idle_threshold_below_minimum_is_clamped() {
    let mut k = kiosk_with(config());
    k.set_idle_threshold(1);
    assert_eq!(k.idle().threshold_secs(), 5);
}

#[test]
fn manual_clock_drives_idle_resume() {
    let clock = ManualClock::new(0);
    let mut k = display_mode();
    k.handle_input(clock.now_ms(), &CENTER_CLICK);
    for _ in 0..29 {
        clock.advance(1_000);
        k.tick(clock.now_ms());
    }
    assert!(!k.rotation().is_rotating());
    clock.advance(1_000);
    k.tick(clock.now_ms());
    assert!(k.rotation().is_rotating());
}

// -- Status -------------------------------------------------------------------

#[test]
fn status_hides_after_default_duration() {
    let mut k = kiosk_with(config());
    k.show_status("hello", None);
    assert_eq!(status_text(&k).as_deref(), Some("hello"));
    k.tick(2_999);
    assert_eq!(status_text(&k).as_deref(), Some("hello"));
    k.tick(3_000);
    assert_eq!(status_text(&k), None);
}

#[test]
fn newer_status_replaces_older_and_its_timer() {
    let mut k = kiosk_with(config());
    k.show_status("first", None);
    k.tick(2_000);
    k.show_status("second", Some(5_000));
    k.tick(3_000);
    assert_eq!(status_text(&k).as_deref(), Some("second"));
    k.tick(7_000);
    assert_eq!(status_text(&k), None);
}

// -- Control panel ------------------------------------------------------------

#[test]
fn hiding_controls_keeps_rotation_and_values() {
    let mut k = kiosk_with(KioskConfig {
        interval_secs: 4,
        ..config()
    });
    k.handle_input(0, &InputEvent::Panel(PanelAction::SetIdleThreshold(12)));
    k.handle_input(0, &InputEvent::Panel(PanelAction::ToggleVisibility));
    let view = k.panel_view().unwrap();
    assert!(view.hidden);
    assert!(view.button("Show controls").is_some());

    k.tick(4_000);
    assert_eq!(k.rotation().state().current_index, 1);

    k.handle_input(4_100, &InputEvent::Panel(PanelAction::ToggleVisibility));
    let view = k.panel_view().unwrap();
    assert!(!view.hidden);
    assert!(matches!(
        view.input(NumberField::Interval),
        Some(PanelWidget::NumberInput { value: 4, .. })
    ));
    assert!(matches!(
        view.input(NumberField::IdleThreshold),
        Some(PanelWidget::NumberInput { value: 12, .. })
    ));
}

#[test]
fn japanese_locale_labels() {
    let k = kiosk_with(KioskConfig {
        locale: Locale::Japanese,
        ..config()
    });
    let view = k.panel_view().unwrap();
    assert!(view.button("一時停止").is_some());
    assert!(view.button("中国語").is_some());
    assert_eq!(view.countdown_text(), Some("次の切り替えまで: 60秒"));
}

#[test]
fn quit_is_reported() {
    let mut k = kiosk_with(config());
    assert_eq!(k.handle_input(0, &InputEvent::Quit), Dispatch::Quit);
    assert!(k.rotation().is_rotating());
}

// -- Missing elements ---------------------------------------------------------

#[test]
fn missing_frame_leaves_selection_unchanged() {
    let mut scene = Scene::standard();
    scene.remove(ElementId::PageFrame);
    let mut k = Kiosk::new(&config(), scene, 0);
    k.change_page(PageId::Chinese);
    assert_eq!(k.rotation().state().current_index, 0);
    assert!(k.rotation().is_rotating());
}

#[test]
fn missing_status_element_still_pauses() {
    let mut k = display_mode();
    k.scene_mut().remove(ElementId::StatusMessage);
    k.handle_input(100, &CENTER_CLICK);
    assert!(!k.rotation().is_rotating());
    assert_eq!(k.status().message(), None);
    assert_eq!(armed(&k, KioskTimer::StatusHide), 0);
}

#[test]
fn missing_overlay_keeps_mode() {
    let mut scene = Scene::standard();
    scene.remove(ElementId::InteractionOverlay);
    let mut k = Kiosk::new(&config(), scene, 0);
    k.set_content_interaction(false);
    assert!(k.gate().content_interaction_enabled());
}

#[test]
fn missing_controls_keeps_panel_expanded_and_rotation_running() {
    let mut scene = Scene::standard();
    scene.remove(ElementId::Controls);
    let mut k = Kiosk::new(&config(), scene, 0);
    k.toggle_controls();
    assert!(!k.panel().is_hidden());
    assert!(k.panel_view().is_none());
    k.tick(60_000);
    assert_eq!(k.rotation().state().current_index, 1);
}

#[test]
fn missing_controls_leave_panel_area_to_overlay() {
    let mut scene = Scene::standard();
    scene.remove(ElementId::Controls);
    let cfg = KioskConfig {
        content_interaction: false,
        ..config()
    };
    let mut k = Kiosk::new(&cfg, scene, 0);
    assert_eq!(k.handle_input(100, &PAUSE_BUTTON), Dispatch::Handled);
    assert!(!k.rotation().is_rotating());
    assert_eq!(
        status_text(&k).as_deref(),
        Some("Screen click detected - automatic rotation paused")
    );
}

// -- Properties ---------------------------------------------------------------

fn event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        (0i32..800, 0i32..600).prop_map(|(x, y)| InputEvent::PointerClick { x, y }),
        (0i32..800, 0i32..600).prop_map(|(x, y)| InputEvent::PointerMove { x, y }),
        Just(InputEvent::KeyPress('k')),
        Just(InputEvent::Scroll { dy: 1 }),
        Just(InputEvent::Embedded(EmbeddedMessage::Clicked)),
        Just(InputEvent::Panel(PanelAction::ToggleRotation)),
        Just(InputEvent::Panel(PanelAction::ToggleVisibility)),
        any::<bool>().prop_map(|b| InputEvent::Panel(PanelAction::SetContentInteraction(b))),
        (0u32..20).prop_map(|n| InputEvent::Panel(PanelAction::SetInterval(n))),
        (0u32..20).prop_map(|n| InputEvent::Panel(PanelAction::SetIdleThreshold(n))),
    ]
}

proptest! {
    #[test]
    fn exactly_one_resume_path_is_armed(
        steps in proptest::collection::vec((0u64..40_000, event()), 0..40),
    ) {
        let mut k = kiosk_with(KioskConfig { interval_secs: 3, idle_secs: 5, ..config() });
        let mut now = 0;
        for (dt, ev) in steps {
            now += dt;
            k.handle_input(now, &ev);
            let advance = armed(&k, KioskTimer::Advance);
            let countdown = armed(&k, KioskTimer::Countdown);
            let idle = armed(&k, KioskTimer::Idle);
            prop_assert!(advance <= 1 && countdown <= 1 && idle <= 1);
            if k.rotation().is_rotating() {
                prop_assert_eq!((advance, countdown, idle), (1, 1, 0));
            } else {
                prop_assert_eq!((advance, countdown, idle), (0, 0, 1));
            }
        }
    }
}
