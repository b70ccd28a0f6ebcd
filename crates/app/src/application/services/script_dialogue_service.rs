//! Script Dialogue Service - drives a dialogue through the host ports
//!
//! One service instance can open any dialogue variant for any player.
//! Opening never fails outward: cancellations and errors both come back
//! as values, and the camera/movement lock taken before displaying is
//! released on every exit path.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use scriptdialogue_domain::{
    CancelationReason, DialogueError, DialogueOutcome, ResolvedShowDialogueOptions,
    ShowDialogueOptions,
};
use scriptdialogue_ports::outbound::{
    DialoguePresenterPort, FormRequest, FormResponse, PlayerPort, SchedulerPort,
};

use crate::application::dialogue::ShowableDialogue;
use crate::application::error::OpenError;

pub struct ScriptDialogueService {
    presenter: Arc<dyn DialoguePresenterPort>,
    players: Arc<dyn PlayerPort>,
    scheduler: Arc<dyn SchedulerPort>,
}

impl ScriptDialogueService {
    pub fn new(
        presenter: Arc<dyn DialoguePresenterPort>,
        players: Arc<dyn PlayerPort>,
        scheduler: Arc<dyn SchedulerPort>,
    ) -> Self {
        Self {
            presenter,
            players,
            scheduler,
        }
    }

    /// Open a dialogue for the player in `options`.
    ///
    /// Returns the variant's response when the player answers, a
    /// canceled outcome when they close it (or stay busy past the retry
    /// budget), and a rejected outcome for every error raised along the
    /// way - this method itself never fails.
    #[instrument(skip_all, fields(player = %options.player))]
    pub async fn open<D: ShowableDialogue>(
        &self,
        dialogue: &D,
        options: ShowDialogueOptions,
    ) -> DialogueOutcome<D::Response> {
        let options = options.resolve();
        debug!(
            lock_player_camera = options.lock_player_camera,
            busy_retries_count = options.busy_retries_count,
            "opening script dialogue"
        );

        let result = self.show_and_interpret(dialogue, &options).await;

        // The lock must not survive the dialogue, no matter how it ended.
        if options.lock_player_camera {
            if let Err(e) = self.set_input_locked(&options, false).await {
                warn!(error = %e, "failed to restore camera and movement input");
            }
        }

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "script dialogue rejected");
                DialogueOutcome::Rejected(e.into_rejection())
            }
        }
    }

    async fn show_and_interpret<D: ShowableDialogue>(
        &self,
        dialogue: &D,
        options: &ResolvedShowDialogueOptions,
    ) -> Result<DialogueOutcome<D::Response>, OpenError> {
        if options.lock_player_camera {
            self.set_input_locked(options, true).await?;
        }

        let form = dialogue.form()?;
        let response = self.show_with_busy_retries(&form, options).await?;

        if response.canceled {
            let Some(reason) = response.cancelation_reason else {
                return Err(DialogueError::malformed("canceled response without a reason").into());
            };
            return Ok(DialogueOutcome::canceled(reason));
        }

        let response = dialogue.interpret(response).await?;
        Ok(DialogueOutcome::Response(response))
    }

    /// Re-show the form while the host reports the player busy, up to
    /// the configured retry budget, waiting the configured number of
    /// ticks between attempts. A retry only happens while the player is
    /// still a valid entity; any other cancellation returns immediately.
    async fn show_with_busy_retries(
        &self,
        form: &FormRequest,
        options: &ResolvedShowDialogueOptions,
    ) -> Result<FormResponse, OpenError> {
        let mut attempts = 0;
        loop {
            let response = self.show(form, options).await?;
            let busy = response.canceled
                && response.cancelation_reason == Some(CancelationReason::UserBusy);
            if busy && attempts < options.busy_retries_count {
                attempts += 1;
                self.scheduler.wait_ticks(options.busy_retries_tick).await;
                if self.players.is_valid(options.player).await {
                    continue;
                }
            }
            return Ok(response);
        }
    }

    async fn show(
        &self,
        form: &FormRequest,
        options: &ResolvedShowDialogueOptions,
    ) -> Result<FormResponse, OpenError> {
        let response = match form {
            FormRequest::Message(message) => {
                self.presenter
                    .show_message_form(options.player, message.clone())
                    .await?
            }
            FormRequest::Action(action) => {
                self.presenter
                    .show_action_form(options.player, action.clone())
                    .await?
            }
            FormRequest::Modal(modal) => {
                self.presenter
                    .show_modal_form(options.player, modal.clone())
                    .await?
            }
        };
        Ok(response)
    }

    /// Toggle the player's camera and movement input with name-addressed
    /// host commands.
    async fn set_input_locked(
        &self,
        options: &ResolvedShowDialogueOptions,
        locked: bool,
    ) -> Result<(), OpenError> {
        let name = self.players.player_name(options.player).await?;
        let state = if locked { "disabled" } else { "enabled" };
        for permission in ["camera", "movement"] {
            let command = format!("inputpermission set \"{name}\" {permission} {state}");
            self.players.run_command(options.player, &command).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use mockall::predicate::eq;

    use scriptdialogue_domain::{PlayerId, RejectReason};
    use scriptdialogue_ports::outbound::{
        MockDialoguePresenterPort, MockPlayerPort, MockSchedulerPort, PresentationError,
    };

    use super::*;
    use crate::application::dialogue::{
        callback, DualButton, DualButtonDialogue, MultiButtonDialogue,
    };

    fn service(
        presenter: MockDialoguePresenterPort,
        players: MockPlayerPort,
        scheduler: MockSchedulerPort,
    ) -> ScriptDialogueService {
        ScriptDialogueService::new(Arc::new(presenter), Arc::new(players), Arc::new(scheduler))
    }

    fn unlocked(player: PlayerId) -> ShowDialogueOptions {
        ShowDialogueOptions::new(player).with_lock_player_camera(false)
    }

    fn exit_dialogue() -> MultiButtonDialogue {
        MultiButtonDialogue::new("title")
            .set_body("hello")
            .add_button("exit", "Exit")
    }

    /// Wire up name lookup and command capture on the player mock.
    fn capture_commands(players: &mut MockPlayerPort) -> Arc<Mutex<Vec<String>>> {
        players
            .expect_player_name()
            .returning(|_| Ok("Steve".to_string()));
        let log = Arc::new(Mutex::new(Vec::new()));
        let capture = Arc::clone(&log);
        players.expect_run_command().returning(move |_, command| {
            capture.lock().expect("command log").push(command.to_string());
            Ok(())
        });
        log
    }

    #[tokio::test]
    async fn test_multi_button_open_returns_selected_button() {
        let mut presenter = MockDialoguePresenterPort::new();
        presenter
            .expect_show_action_form()
            .times(1)
            .returning(|_, _| Ok(FormResponse::selected(0)));

        let service = service(presenter, MockPlayerPort::new(), MockSchedulerPort::new());
        let outcome = service
            .open(&exit_dialogue(), unlocked(PlayerId::new()))
            .await;

        let response = outcome.into_response().expect("response");
        assert_eq!(response.selected, "exit");
        assert_eq!(response.callback, None);
    }

    #[tokio::test]
    async fn test_canceled_dialogue_skips_callbacks() {
        let invoked = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&invoked);
        let dialogue = DualButtonDialogue::new(
            "title",
            DualButton::new("yes", "Yes").with_callback(callback(move |_| {
                let flag = Arc::clone(&flag);
                async move {
                    flag.store(true, Ordering::SeqCst);
                    Ok(())
                }
            })),
            DualButton::new("no", "No"),
        );

        let mut presenter = MockDialoguePresenterPort::new();
        presenter
            .expect_show_message_form()
            .times(1)
            .returning(|_, _| Ok(FormResponse::canceled(CancelationReason::UserClosed)));

        let service = service(presenter, MockPlayerPort::new(), MockSchedulerPort::new());
        let outcome = service.open(&dialogue, unlocked(PlayerId::new())).await;

        match outcome {
            DialogueOutcome::Canceled(canceled) => {
                assert_eq!(canceled.reason, CancelationReason::UserClosed);
            }
            other => panic!("expected a canceled outcome, got {other:?}"),
        }
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_open_without_buttons_is_rejected_not_panicked() {
        let dialogue = MultiButtonDialogue::<()>::new("title");

        let service = service(
            MockDialoguePresenterPort::new(),
            MockPlayerPort::new(),
            MockSchedulerPort::new(),
        );
        let outcome = service.open(&dialogue, unlocked(PlayerId::new())).await;

        match outcome {
            DialogueOutcome::Rejected(rejected) => {
                assert_eq!(rejected.reason, None);
                assert_eq!(
                    rejected.cause.downcast_ref::<DialogueError>(),
                    Some(&DialogueError::MissingButtons)
                );
            }
            other => panic!("expected a rejected outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_busy_responses_retry_until_budget_is_spent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut presenter = MockDialoguePresenterPort::new();
        presenter
            .expect_show_action_form()
            .times(3)
            .returning(move |_, _| {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Ok(FormResponse::canceled(CancelationReason::UserBusy))
                } else {
                    Ok(FormResponse::canceled(CancelationReason::UserClosed))
                }
            });

        let mut scheduler = MockSchedulerPort::new();
        scheduler
            .expect_wait_ticks()
            .with(eq(7))
            .times(2)
            .returning(|_| ());

        let mut players = MockPlayerPort::new();
        players.expect_is_valid().times(2).returning(|_| true);

        let service = service(presenter, players, scheduler);
        let options = unlocked(PlayerId::new())
            .with_busy_retries_count(2)
            .with_busy_retries_tick(7);
        let outcome = service.open(&exit_dialogue(), options).await;

        match outcome {
            DialogueOutcome::Canceled(canceled) => {
                assert_eq!(canceled.reason, CancelationReason::UserClosed);
            }
            other => panic!("expected the third response, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_busy_retry_stops_when_player_becomes_invalid() {
        let mut presenter = MockDialoguePresenterPort::new();
        presenter
            .expect_show_action_form()
            .times(1)
            .returning(|_, _| Ok(FormResponse::canceled(CancelationReason::UserBusy)));

        let mut scheduler = MockSchedulerPort::new();
        scheduler.expect_wait_ticks().times(1).returning(|_| ());

        let mut players = MockPlayerPort::new();
        players.expect_is_valid().times(1).returning(|_| false);

        let service = service(presenter, players, scheduler);
        let outcome = service
            .open(&exit_dialogue(), unlocked(PlayerId::new()))
            .await;

        match outcome {
            DialogueOutcome::Canceled(canceled) => {
                assert_eq!(canceled.reason, CancelationReason::UserBusy);
            }
            other => panic!("expected the busy response, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_retry_budget_returns_busy_immediately() {
        let mut presenter = MockDialoguePresenterPort::new();
        presenter
            .expect_show_action_form()
            .times(1)
            .returning(|_, _| Ok(FormResponse::canceled(CancelationReason::UserBusy)));

        let service = service(presenter, MockPlayerPort::new(), MockSchedulerPort::new());
        let options = unlocked(PlayerId::new()).with_busy_retries_count(0);
        let outcome = service.open(&exit_dialogue(), options).await;

        assert!(outcome.is_canceled());
    }

    #[tokio::test]
    async fn test_camera_lock_and_unlock_wrap_the_dialogue() {
        let mut presenter = MockDialoguePresenterPort::new();
        presenter
            .expect_show_action_form()
            .times(1)
            .returning(|_, _| Ok(FormResponse::selected(0)));

        let mut players = MockPlayerPort::new();
        let commands = capture_commands(&mut players);

        let service = service(presenter, players, MockSchedulerPort::new());
        let outcome = service
            .open(&exit_dialogue(), ShowDialogueOptions::new(PlayerId::new()))
            .await;

        assert!(outcome.is_response());
        assert_eq!(
            *commands.lock().expect("command log"),
            [
                "inputpermission set \"Steve\" camera disabled",
                "inputpermission set \"Steve\" movement disabled",
                "inputpermission set \"Steve\" camera enabled",
                "inputpermission set \"Steve\" movement enabled",
            ]
        );
    }

    #[tokio::test]
    async fn test_camera_unlocked_exactly_once_when_presenter_fails() {
        let mut presenter = MockDialoguePresenterPort::new();
        presenter.expect_show_action_form().times(1).returning(|_, _| {
            Err(PresentationError::Rejected {
                reason: RejectReason::MalformedForm,
                message: "bad form".to_string(),
            })
        });

        let mut players = MockPlayerPort::new();
        let commands = capture_commands(&mut players);

        let service = service(presenter, players, MockSchedulerPort::new());
        let outcome = service
            .open(&exit_dialogue(), ShowDialogueOptions::new(PlayerId::new()))
            .await;

        match outcome {
            DialogueOutcome::Rejected(rejected) => {
                assert_eq!(rejected.reason, Some(RejectReason::MalformedForm));
            }
            other => panic!("expected a rejected outcome, got {other:?}"),
        }
        assert_eq!(
            *commands.lock().expect("command log"),
            [
                "inputpermission set \"Steve\" camera disabled",
                "inputpermission set \"Steve\" movement disabled",
                "inputpermission set \"Steve\" camera enabled",
                "inputpermission set \"Steve\" movement enabled",
            ]
        );
    }

    #[tokio::test]
    async fn test_callback_failure_becomes_rejection() {
        let dialogue = MultiButtonDialogue::<()>::new("title").add_button_entry(
            crate::application::dialogue::MultiButton::new("exit", "Exit")
                .with_callback(callback(|_| async { Err(anyhow::anyhow!("boom")) })),
        );

        let mut presenter = MockDialoguePresenterPort::new();
        presenter
            .expect_show_action_form()
            .times(1)
            .returning(|_, _| Ok(FormResponse::selected(0)));

        let service = service(presenter, MockPlayerPort::new(), MockSchedulerPort::new());
        let outcome = service.open(&dialogue, unlocked(PlayerId::new())).await;

        match outcome {
            DialogueOutcome::Rejected(rejected) => {
                assert_eq!(rejected.reason, None);
                assert_eq!(rejected.cause.to_string(), "boom");
            }
            other => panic!("expected a rejected outcome, got {other:?}"),
        }
    }
}
