use medicare_schema::Message;

/// Append-only, ordered log of exchanged messages. Unbounded; no message is
/// ever edited or removed, and insertion order is the display order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transcript with the single bot greeting.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut transcript = Self::new();
        transcript.append(Message::bot(greeting));
        transcript
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Full ordered sequence, oldest first.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use medicare_schema::Role;

    use super::*;

    #[test]
    fn append_preserves_order_and_count() {
        let mut transcript = Transcript::new();
        for i in 0..50 {
            transcript.append(Message::user(format!("mensagem {i}")));
        }
        assert_eq!(transcript.len(), 50);
        for (i, msg) in transcript.all().iter().enumerate() {
            assert_eq!(msg.content, format!("mensagem {i}"));
        }
    }

    #[test]
    fn with_greeting_starts_with_one_bot_message() {
        let transcript = Transcript::with_greeting("Olá!");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.all()[0].role, Role::Bot);
        assert_eq!(transcript.all()[0].content, "Olá!");
    }

    #[test]
    fn empty_transcript() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert!(transcript.all().is_empty());
    }
}
