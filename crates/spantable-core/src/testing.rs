//! Test helpers shared across modules

use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;

use tracing::Event;
use tracing::Level;
use tracing::Subscriber;
use tracing::field::Field;
use tracing::field::Visit;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// An event seen by [`capture_events`]
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
	pub(crate) level: Level,
	pub(crate) message: String,
}

/// Events recorded on the current thread while the guard is alive
#[derive(Debug, Clone, Default)]
pub(crate) struct EventLog(Arc<Mutex<Vec<CapturedEvent>>>);

impl EventLog {
	pub(crate) fn events(&self) -> Vec<CapturedEvent> {
		self.0.lock().unwrap().clone()
	}

	/// Whether an event at `level` carried `message`
	pub(crate) fn contains(&self, level: Level, message: &str) -> bool {
		self.events()
			.iter()
			.any(|event| event.level == level && event.message == message)
	}
}

impl<S: Subscriber> Layer<S> for EventLog {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut message = MessageField::default();
		event.record(&mut message);
		self.0.lock().unwrap().push(CapturedEvent {
			level: *event.metadata().level(),
			message: message.0,
		});
	}
}

#[derive(Default)]
struct MessageField(String);

impl Visit for MessageField {
	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.0 = value.to_string();
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			self.0 = format!("{value:?}");
		}
	}
}

/// Routes this thread's events into a fresh [`EventLog`] until the guard drops
pub(crate) fn capture_events() -> (EventLog, DefaultGuard) {
	let log = EventLog::default();
	let guard = tracing_subscriber::registry()
		.with(log.clone())
		.set_default();
	(log, guard)
}
