//! # Sign-in Reactor
//!
//! Owns the screen's `State` and is the only thing allowed to replace it.
//!
//! ```text
//!   send(Action) ──► FIFO queue ──► mutate() ──► reduce() ──► listeners
//!                                     │
//!                                     └─ LoginButtonTapped awaits AuthService
//! ```
//!
//! Actions are processed one at a time, to completion, in the order they
//! were sent. While a login is in flight nothing else is dequeued, so a
//! `SetLoggedIn` can never be observed before the tap that caused it.
//!
//! Listeners are called synchronously after every fold. An action that
//! produces no mutation (a cleared email field) does not notify anyone.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::auth::{AuthService, LoginRequest};
use crate::core::action::{Action, Transition, plan};
use crate::core::config::DEFAULT_TIMEOUT_SECS;
use crate::core::mutation::{Mutation, reduce};
use crate::core::state::{LoginFailure, State};
use crate::core::validation::{BasicEmailValidator, EmailValidator};

pub const DEFAULT_LOGIN_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&State) + Send>;

pub struct SignInReactor {
    state: State,
    queue: VecDeque<Action>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    validator: Arc<dyn EmailValidator>,
    auth: Arc<dyn AuthService>,
    login_timeout: Duration,
}

impl SignInReactor {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            state: State::initial(),
            queue: VecDeque::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
            validator: Arc::new(BasicEmailValidator),
            auth,
            login_timeout: DEFAULT_LOGIN_TIMEOUT,
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn EmailValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = timeout;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of actions waiting to be processed.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&State) + Send + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!("Listener {:?} subscribed ({} total)", id, self.listeners.len());
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Enqueue an action. Nothing happens until the queue is processed.
    pub fn send(&mut self, action: Action) {
        debug!("Action queued: {:?}", action);
        self.queue.push_back(action);
    }

    /// Resolve an action into zero or one mutation against the current state.
    ///
    /// The returned future does not borrow the reactor. Dropping it before it
    /// completes cancels an in-flight login.
    pub fn mutate(&self, action: Action) -> impl Future<Output = Option<Mutation>> + Send + use<> {
        let transition = plan(action, &self.state, self.validator.as_ref());
        let auth = Arc::clone(&self.auth);
        let timeout = self.login_timeout;
        async move {
            match transition {
                Transition::Login(request) => Some(login(auth, timeout, request).await),
                other => other.into_resolved(),
            }
        }
    }

    /// Process the oldest queued action. Returns `false` if the queue was empty.
    pub async fn process_next(&mut self) -> bool {
        let Some(action) = self.queue.pop_front() else {
            return false;
        };
        debug!("Processing action: {:?}", action);
        match self.mutate(action).await {
            Some(mutation) => self.apply(mutation),
            None => debug!("No mutation produced"),
        }
        true
    }

    /// Drain the queue in FIFO order. Returns how many actions were processed.
    pub async fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while self.process_next().await {
            processed += 1;
        }
        processed
    }

    /// Enqueue and process everything up to and including `action`.
    pub async fn dispatch(&mut self, action: Action) {
        self.send(action);
        self.process_pending().await;
    }

    /// Consume actions from a channel until every sender is dropped.
    ///
    /// This is the single ingestion point when the screen lives on another
    /// thread. Abort the hosting task to cancel an in-flight login.
    pub async fn run(mut self, mut actions: UnboundedReceiver<Action>) {
        info!("Sign-in reactor running");
        while let Some(action) = actions.recv().await {
            self.send(action);
            while let Ok(action) = actions.try_recv() {
                self.send(action);
            }
            debug!("{} action(s) pending", self.pending());
            self.process_pending().await;
        }
        info!("Action channel closed, sign-in reactor stopping");
    }

    fn apply(&mut self, mutation: Mutation) {
        debug!("Applying mutation: {:?}", mutation);
        self.state = reduce(&self.state, mutation);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

async fn login(auth: Arc<dyn AuthService>, timeout: Duration, request: LoginRequest) -> Mutation {
    info!("Login attempt via '{}' auth service", auth.name());
    match tokio::time::timeout(timeout, auth.attempt_login(request)).await {
        Ok(Ok(())) => {
            info!("Login succeeded");
            Mutation::SetLoggedIn(true)
        }
        Ok(Err(e)) => {
            warn!("Login failed: {}", e);
            Mutation::LoginFailed(e.into())
        }
        Err(_) => {
            warn!("Login timed out after {:?}", timeout);
            Mutation::LoginFailed(LoginFailure::TimedOut)
        }
    }
}
