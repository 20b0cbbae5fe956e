//! Shared test utilities used across sapling crates.

pub mod capture {
    //! A `tracing` layer that captures closed spans and emitted events so
    //! tests can assert on instrumentation.

    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Field values keyed by field name, rendered as strings.
    pub type Fields = HashMap<String, String>;

    /// A span observed by [`CaptureLayer`], recorded when it closed.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct CapturedSpan {
        /// Span name from its metadata.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: Fields,
    }

    /// An event observed by [`CaptureLayer`].
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct CapturedEvent {
        /// Event level.
        pub level: Level,
        /// Fields of the event, including `message`.
        pub fields: Fields,
    }

    impl CapturedEvent {
        /// The event's message, if it has one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    /// Layer capturing spans and events for later inspection.
    ///
    /// Clones share their storage, so a test keeps one clone and installs
    /// the other.
    ///
    /// # Examples
    /// ```
    /// use sapling_test_support::capture::CaptureLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = CaptureLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     let _span = tracing::info_span!("work", items = 3).entered();
    ///     tracing::info!("working");
    /// });
    /// assert_eq!(layer.span("work").and_then(|span| span.fields.get("items").cloned()), Some("3".to_owned()));
    /// assert_eq!(layer.events().len(), 1);
    /// ```
    #[derive(Clone, Default)]
    pub struct CaptureLayer {
        spans: Arc<Mutex<Vec<CapturedSpan>>>,
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl CaptureLayer {
        /// Closed spans in closing order.
        #[must_use]
        pub fn spans(&self) -> Vec<CapturedSpan> {
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// The first closed span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<CapturedSpan> {
            self.spans().into_iter().find(|span| span.name == name)
        }

        /// Events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<CapturedEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// The first event whose message equals `message`.
        #[must_use]
        pub fn event(&self, message: &str) -> Option<CapturedEvent> {
            self.events()
                .into_iter()
                .find(|event| event.message() == Some(message))
        }
    }

    struct OpenSpan(CapturedSpan);

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = Fields::new();
            attrs.record(&mut FieldVisitor(&mut fields));
            span.extensions_mut().insert(OpenSpan(CapturedSpan {
                name: attrs.metadata().name().to_owned(),
                fields,
            }));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldVisitor(&mut open.0.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(OpenSpan(captured)) = span.extensions_mut().remove::<OpenSpan>() {
                self.spans
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(captured);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldVisitor(&mut fields));
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(CapturedEvent {
                    level: *event.metadata().level(),
                    fields,
                });
        }
    }

    /// Renders strings verbatim and every other value through `Debug`.
    struct FieldVisitor<'a>(&'a mut Fields);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }
    }

}
