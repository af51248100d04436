//! Alert and confirm dialogs as async request/response pairs.
//!
//! Opening a prompt yields a [`PromptHandle`] for the code waiting on the
//! answer and a [`PromptResponder`] for whatever presents the dialog. A
//! responder dropped without answering resolves the prompt as `false`.

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Dialog kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Message with a single OK button
    Alert,
    /// Question with confirm and cancel buttons
    Confirm,
}

/// Resolution state of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    /// Not answered yet
    Pending,
    /// Answered, `true` for OK/confirm
    Resolved(bool),
}

/// Dialog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    kind: PromptKind,
    title: String,
    message: String,
}

impl Prompt {
    /// Opens an alert.
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> (PromptHandle, PromptResponder) {
        Self::new(PromptKind::Alert, title, message).open()
    }

    /// Opens a confirmation.
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> (PromptHandle, PromptResponder) {
        Self::new(PromptKind::Confirm, title, message).open()
    }

    fn new(kind: PromptKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    fn open(self) -> (PromptHandle, PromptResponder) {
        let (tx, rx) = oneshot::channel();
        let handle = PromptHandle {
            kind: self.kind,
            rx,
            state: PromptState::Pending,
        };
        let responder = PromptResponder {
            prompt: self,
            tx: Some(tx),
        };
        (handle, responder)
    }

    /// Dialog kind.
    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    /// Title line.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Waiting side of a prompt.
#[derive(Debug)]
pub struct PromptHandle {
    kind: PromptKind,
    rx: oneshot::Receiver<bool>,
    state: PromptState,
}

impl PromptHandle {
    /// Dialog kind.
    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    /// Suspends until the prompt is answered.
    pub async fn wait(self) -> bool {
        if let PromptState::Resolved(answer) = self.state {
            return answer;
        }
        self.rx.await.unwrap_or(false)
    }

    /// Polls without blocking.
    pub fn state(&mut self) -> PromptState {
        if self.state == PromptState::Pending {
            match self.rx.try_recv() {
                Ok(answer) => self.state = PromptState::Resolved(answer),
                Err(TryRecvError::Closed) => self.state = PromptState::Resolved(false),
                Err(TryRecvError::Empty) => {}
            }
        }
        self.state
    }
}

/// Presenting side of a prompt.
#[derive(Debug)]
pub struct PromptResponder {
    prompt: Prompt,
    tx: Option<oneshot::Sender<bool>>,
}

impl PromptResponder {
    /// Dialog content to present.
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Answers the prompt.
    pub fn resolve(mut self, answer: bool) {
        self.send(answer);
    }

    /// Answers OK/confirm.
    pub fn accept(self) {
        self.resolve(true);
    }

    /// Answers cancel.
    pub fn dismiss(self) {
        self.resolve(false);
    }

    fn send(&mut self, answer: bool) {
        if let Some(tx) = self.tx.take() {
            // The waiting side may already be gone.
            let _ = tx.send(answer);
        }
    }
}

impl Drop for PromptResponder {
    fn drop(&mut self) {
        self.send(false);
    }
}
