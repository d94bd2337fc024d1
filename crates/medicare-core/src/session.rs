use chrono::{DateTime, Utc};
use medicare_schema::{Message, QuickAction};
use uuid::Uuid;

use crate::responder::Responder;
use crate::transcript::Transcript;

/// Session-scoped chat context: one per user session, created at session
/// start and discarded at session end. Owns its transcript; no state is
/// shared across sessions. Each user action is one synchronous pass:
/// append the user message, compute the reply, append it.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    transcript: Transcript,
}

impl ChatSession {
    pub fn new(responder: &Responder) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            transcript: Transcript::with_greeting(responder.greeting()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// One free-text chat turn. Returns the bot reply that was appended.
    pub fn handle_input(&mut self, responder: &Responder, text: &str) -> Message {
        self.transcript.append(Message::user(text));
        let reply = Message::bot(responder.respond(text));
        self.transcript.append(reply.clone());
        reply
    }

    /// One quick-action turn: injects the canned user text and the reply for
    /// the action's keyword.
    pub fn handle_quick_action(&mut self, responder: &Responder, action: QuickAction) -> Message {
        self.transcript.append(Message::user(action.user_text()));
        let reply = Message::bot(responder.respond(action.keyword()));
        self.transcript.append(reply.clone());
        reply
    }
}
