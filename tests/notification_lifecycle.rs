use pushform::{NotificationCenter, NotificationOptions, Phase, Position, ToastConfig};
use std::time::Duration;
use tokio::time::sleep;

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[tokio::test(start_paused = true)]
async fn json_options_drive_the_toast() {
    let center = NotificationCenter::new(ToastConfig::default()).unwrap();
    let options = NotificationOptions::from_json_str(
        r#"{"title":"Saved","message":"Draft stored","position":"top-center","activeTime":1000,"showIndicator":false}"#,
    )
    .unwrap();
    let id = center.create_notification(options);

    let top = center.container(Position::TopCenter);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, id);
    assert_eq!(top[0].indicator_width, None);

    // 250ms entry + 1000ms active, then the 250ms exit
    sleep(ms(1200)).await;
    assert_eq!(center.card(id).unwrap().phase, Phase::Shown);
    sleep(ms(100)).await;
    assert_eq!(center.card(id).unwrap().phase, Phase::Closing);
    sleep(ms(300)).await;
    assert!(center.card(id).is_none());
    assert_eq!(center.history()[0].title, "Saved");
}

#[tokio::test(start_paused = true)]
async fn config_defaults_apply_to_new_toasts() {
    let config = ToastConfig {
        position: Position::TopLeft,
        active_time_ms: 500,
        ..ToastConfig::default()
    };
    let center = NotificationCenter::new(config).unwrap();
    let id = center.create_notification(center.options().title("Hi"));

    assert_eq!(center.card(id).unwrap().position, Position::TopLeft);
    sleep(ms(900)).await;
    assert!(center.card(id).is_none());
}

#[tokio::test(start_paused = true)]
async fn dismissed_toast_leaves_the_markup() {
    let center = NotificationCenter::new(ToastConfig::default()).unwrap();
    let keep = center.create_notification(center.options().title("Keep"));
    let gone = center.create_notification(center.options().title("Gone"));

    let html = center.render();
    assert!(html.contains("Keep"));
    assert!(html.contains("Gone"));
    assert_eq!(html.matches("notification-close").count(), 2);

    assert!(center.dismiss(gone));
    sleep(ms(300)).await;

    let html = center.render();
    assert!(html.contains("Keep"));
    assert!(!html.contains("Gone"));
    assert!(center.card(keep).is_some());
}

#[tokio::test(start_paused = true)]
async fn markup_in_messages_is_escaped() {
    let center = NotificationCenter::new(ToastConfig::default()).unwrap();
    center.create_notification(center.options().message("<script>alert(1)</script>"));

    let html = center.render();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test(start_paused = true)]
async fn toasts_in_several_positions_all_settle() {
    let center = NotificationCenter::new(ToastConfig::default()).unwrap();
    for position in Position::ALL {
        center.create_notification(center.options().title(position.as_str()).position(position));
    }
    assert_eq!(center.live_count(), Position::ALL.len());

    center.settled().await;
    assert_eq!(center.live_count(), 0);
    assert_eq!(center.history().len(), Position::ALL.len());
}
