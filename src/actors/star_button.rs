use crate::animation::{CountAnimation, Tick};
use crate::error::{Result, StarButtonError};
use crate::github::GitHubClient;
use crate::models::{AnimationConfig, ButtonSnapshot, StarButtonProps, Variant};
use crate::render::render_button;
use crate::types::RepositoryIdentity;
use ractor::concurrency::JoinHandle;
use ractor::rpc::CallResult;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// One mounted star button. Spawning the actor mounts it, stopping it unmounts.
pub struct StarButton;

/// State for one mounted button
pub struct StarButtonState {
    repository: RepositoryIdentity,
    class_name: Option<String>,
    show_count: bool,
    variant: Variant,
    client: Arc<GitHubClient>,
    animation_config: AnimationConfig,
    star_count: u64,
    display_count: u64,
    is_loading: bool,
    fetch_generation: u64,
    animation_generation: u64,
    animation: Option<CountAnimation>,
    timer: Option<JoinHandle<()>>,
}

impl StarButtonState {
    fn snapshot(&self) -> ButtonSnapshot {
        ButtonSnapshot {
            repository: self.repository.clone(),
            star_count: self.star_count,
            display_count: self.display_count,
            is_loading: self.is_loading,
            is_animating: self.animation.is_some(),
            show_count: self.show_count,
            variant: self.variant,
        }
    }
}

/// Messages the button handles
#[derive(Debug)]
pub enum StarButtonMessage {
    /// Result of the repository lookup started for `generation`
    FetchCompleted { generation: u64, star_count: u64 },
    /// One animation step for the animation started as `generation`
    Tick { generation: u64 },
    /// Point the button at another repository and fetch again
    SetRepository(RepositoryIdentity),
    GetSnapshot(RpcReplyPort<ButtonSnapshot>),
    Render(RpcReplyPort<String>),
}

/// Arguments for mounting a button
pub struct StarButtonArgs {
    pub props: StarButtonProps,
    pub client: Arc<GitHubClient>,
    pub animation: AnimationConfig,
}

impl StarButton {
    /// Mount a button. The star count fetch starts right away.
    pub async fn mount(args: StarButtonArgs) -> Result<StarButtonHandle> {
        let (actor, handle) = Actor::spawn(None, StarButton, args)
            .await
            .map_err(|e| StarButtonError::ActorError(format!("Failed to mount star button: {}", e)))?;

        Ok(StarButtonHandle {
            button: StarButtonRef { actor },
            handle,
        })
    }

    fn start_fetch(&self, myself: &ActorRef<StarButtonMessage>, state: &mut StarButtonState) {
        state.fetch_generation += 1;
        let generation = state.fetch_generation;
        let client = state.client.clone();
        let repository = state.repository.clone();
        let myself = myself.clone();

        tokio::spawn(async move {
            let star_count = client.fetch_star_count(&repository).await;
            if myself
                .send_message(StarButtonMessage::FetchCompleted { generation, star_count })
                .is_err()
            {
                debug!(repository = %repository, "Button unmounted before fetch completed, dropping result");
            }
        });
    }

    fn start_animation(&self, myself: &ActorRef<StarButtonMessage>, state: &mut StarButtonState) {
        self.stop_animation(state);

        state.animation_generation += 1;
        let generation = state.animation_generation;
        state.animation = Some(CountAnimation::new(
            state.star_count,
            state.animation_config.steps(),
        ));
        state.timer = Some(myself.send_interval(state.animation_config.step_interval(), move || {
            StarButtonMessage::Tick { generation }
        }));

        debug!(
            repository = %state.repository,
            target = state.star_count,
            steps = state.animation_config.steps(),
            "Counting animation started"
        );
    }

    fn stop_animation(&self, state: &mut StarButtonState) {
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.animation = None;
    }

    fn on_fetch_completed(
        &self,
        myself: &ActorRef<StarButtonMessage>,
        state: &mut StarButtonState,
        generation: u64,
        star_count: u64,
    ) {
        if generation != state.fetch_generation {
            debug!(
                repository = %state.repository,
                generation,
                "Ignoring result of a superseded fetch"
            );
            return;
        }

        state.is_loading = false;
        if star_count == state.star_count {
            // A repository switch may have cut the previous animation short.
            if state.animation.is_none() {
                state.display_count = star_count;
            }
            return;
        }

        state.star_count = star_count;
        if star_count > 0 {
            self.start_animation(myself, state);
        } else {
            self.stop_animation(state);
            state.display_count = 0;
        }
    }

    fn on_tick(&self, state: &mut StarButtonState, generation: u64) {
        if generation != state.animation_generation {
            return;
        }
        let Some(animation) = state.animation.as_mut() else {
            return;
        };

        match animation.tick() {
            Tick::Running(value) => {
                state.display_count = value;
            }
            Tick::Finished(_) => {
                self.stop_animation(state);
                state.display_count = state.star_count;
                debug!(
                    repository = %state.repository,
                    display_count = state.display_count,
                    "Counting animation finished"
                );
            }
        }
    }
}

#[ractor::async_trait]
impl Actor for StarButton {
    type Msg = StarButtonMessage;
    type State = StarButtonState;
    type Arguments = StarButtonArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> std::result::Result<Self::State, ActorProcessingErr> {
        let StarButtonArgs { props, client, animation } = args;
        let repository = RepositoryIdentity::new(props.owner, props.repo)?;

        info!(repository = %repository, variant = ?props.variant, "Mounting star button");

        Ok(StarButtonState {
            repository,
            class_name: props.class_name,
            show_count: props.show_count,
            variant: props.variant,
            client,
            animation_config: animation,
            star_count: 0,
            display_count: 0,
            is_loading: true,
            fetch_generation: 0,
            animation_generation: 0,
            animation: None,
            timer: None,
        })
    }

    async fn post_start(
        &self,
        myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        self.start_fetch(&myself, state);
        Ok(())
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        match message {
            StarButtonMessage::FetchCompleted { generation, star_count } => {
                self.on_fetch_completed(&myself, state, generation, star_count);
            }
            StarButtonMessage::Tick { generation } => {
                self.on_tick(state, generation);
            }
            StarButtonMessage::SetRepository(repository) => {
                if repository != state.repository {
                    info!(from = %state.repository, to = %repository, "Repository changed");
                    state.repository = repository;
                    self.stop_animation(state);
                    self.start_fetch(&myself, state);
                }
            }
            StarButtonMessage::GetSnapshot(reply) => {
                if reply.send(state.snapshot()).is_err() {
                    warn!(repository = %state.repository, "Snapshot requester went away");
                }
            }
            StarButtonMessage::Render(reply) => {
                let html = render_button(&state.snapshot(), state.class_name.as_deref());
                if reply.send(html).is_err() {
                    warn!(repository = %state.repository, "Render requester went away");
                }
            }
        }

        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        self.stop_animation(state);
        info!(repository = %state.repository, "Star button unmounted");
        Ok(())
    }
}

/// Cloneable caller-side reference to a mounted button
#[derive(Clone)]
pub struct StarButtonRef {
    actor: ActorRef<StarButtonMessage>,
}

impl StarButtonRef {
    pub fn actor(&self) -> &ActorRef<StarButtonMessage> {
        &self.actor
    }

    async fn call<T: Send + 'static>(
        &self,
        msg_builder: impl FnOnce(RpcReplyPort<T>) -> StarButtonMessage,
    ) -> Result<T> {
        let result = self
            .actor
            .call(msg_builder, Some(CALL_TIMEOUT))
            .await
            .map_err(|e| StarButtonError::ActorError(format!("Star button unreachable: {}", e)))?;

        match result {
            CallResult::Success(value) => Ok(value),
            CallResult::Timeout => Err(StarButtonError::ActorError(
                "Timed out waiting for star button".to_string(),
            )),
            CallResult::SenderError => Err(StarButtonError::ActorError(
                "Star button dropped the reply".to_string(),
            )),
        }
    }

    pub async fn snapshot(&self) -> Result<ButtonSnapshot> {
        self.call(StarButtonMessage::GetSnapshot).await
    }

    pub async fn render(&self) -> Result<String> {
        self.call(StarButtonMessage::Render).await
    }

    pub fn set_repository(&self, repository: RepositoryIdentity) -> Result<()> {
        self.actor
            .send_message(StarButtonMessage::SetRepository(repository))
            .map_err(|e| StarButtonError::ActorError(format!("Failed to change repository: {}", e)))
    }

    /// Poll until loading is over and the animation has finished.
    pub async fn wait_until_settled(&self, poll_every: Duration) -> Result<ButtonSnapshot> {
        loop {
            let snapshot = self.snapshot().await?;
            if snapshot.is_settled() {
                return Ok(snapshot);
            }
            tokio::time::sleep(poll_every).await;
        }
    }
}

/// Owning handle to a mounted button. Dropping it leaves the button running.
pub struct StarButtonHandle {
    button: StarButtonRef,
    handle: JoinHandle<()>,
}

impl StarButtonHandle {
    pub fn button(&self) -> &StarButtonRef {
        &self.button
    }

    /// Stop the button and wait for it to release its timer.
    pub async fn unmount(self) -> Result<()> {
        self.button.actor.stop(None);
        self.handle
            .await
            .map_err(|e| StarButtonError::ActorError(format!("Star button did not stop cleanly: {}", e)))
    }
}
