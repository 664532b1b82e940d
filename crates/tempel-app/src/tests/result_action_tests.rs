use tempel_core::error::{Action, AppError};
use tempel_core::messages;
use tempel_types::NotificationKind;

use super::support::{Harness, HarnessBuilder, MockEngine, image_payload};

#[tokio::test]
async fn actions_before_any_paste_do_nothing() {
    let h = Harness::new(MockEngine::text("Halo dunia"));

    h.controller.copy_result().await.unwrap();
    h.controller.save_result().await.unwrap();

    assert!(h.clipboard.writes().is_empty());
    assert!(h.saver.saves().is_empty());
    assert!(h.notification().is_none());
}

#[tokio::test]
async fn copy_writes_exact_text() {
    let h = Harness::new(MockEngine::text("Halo dunia\nمرحبا"));
    h.controller.handle_paste(image_payload()).await.unwrap();

    h.controller.copy_result().await.unwrap();
    assert_eq!(h.clipboard.writes(), vec!["Halo dunia\nمرحبا".to_string()]);
    assert_eq!(
        h.notification(),
        Some((messages::COPIED.to_string(), NotificationKind::Success))
    );
}

#[tokio::test]
async fn copy_failure_is_reported() {
    let h = HarnessBuilder::new(MockEngine::text("Halo dunia"))
        .failing_clipboard()
        .build();
    h.controller.handle_paste(image_payload()).await.unwrap();

    let result = h.controller.copy_result().await;
    assert!(matches!(
        result,
        Err(AppError::ActionFailure {
            action: Action::Copy,
            ..
        })
    ));
    assert_eq!(
        h.notification(),
        Some((messages::COPY_FAILED.to_string(), NotificationKind::Error))
    );
    // Result stays usable
    assert!(h.view().copy_enabled);
}

#[tokio::test]
async fn save_uses_configured_file_name() {
    let h = Harness::new(MockEngine::text("Halo dunia"));
    h.controller.handle_paste(image_payload()).await.unwrap();

    h.controller.save_result().await.unwrap();
    assert_eq!(
        h.saver.saves(),
        vec![("hasil-ocr.txt".to_string(), "Halo dunia".to_string())]
    );
    assert_eq!(
        h.notification(),
        Some((messages::SAVED.to_string(), NotificationKind::Success))
    );
}

#[tokio::test]
async fn save_failure_is_reported() {
    let h = HarnessBuilder::new(MockEngine::text("Halo dunia"))
        .failing_saver()
        .build();
    h.controller.handle_paste(image_payload()).await.unwrap();

    let result = h.controller.save_result().await;
    assert!(matches!(
        result,
        Err(AppError::ActionFailure {
            action: Action::Save,
            ..
        })
    ));
    assert_eq!(
        h.notification(),
        Some((messages::SAVE_FAILED.to_string(), NotificationKind::Error))
    );
}
