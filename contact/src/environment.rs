use serde::Serialize;
use url::Url;

/// The host the contact form runs in. Submitting only ever reaches the
/// outside world through this.
pub trait Environment {
    /// Open `url` in a new, separate browsing context. Nothing is awaited.
    fn open_external(&mut self, url: &Url);

    /// Show the visitor a short message.
    fn notify(&mut self, title: &str, description: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

pub struct StaticNotification {
    pub title: &'static str,
    pub description: &'static str,
}

impl From<&StaticNotification> for Notification {
    fn from(value: &StaticNotification) -> Self {
        Notification::new(value.title, value.description)
    }
}

pub const FORM_OPENED: StaticNotification = StaticNotification {
    title: "Form Opened",
    description:
        "Google Form has been opened in a new tab. Please complete your submission there.",
};

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Effect {
        Opened(Url),
        Notified(Notification),
    }

    /// Remembers every effect, in order, instead of performing it.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingEnvironment {
        pub effects: Vec<Effect>,
    }

    impl Environment for RecordingEnvironment {
        fn open_external(&mut self, url: &Url) {
            self.effects.push(Effect::Opened(url.clone()));
        }

        fn notify(&mut self, title: &str, description: &str) {
            self.effects
                .push(Effect::Notified(Notification::new(title, description)));
        }
    }

    #[test]
    fn form_opened_copy() {
        let notification = Notification::from(&FORM_OPENED);

        assert_eq!(notification.title, "Form Opened");
        assert_eq!(
            notification.description,
            "Google Form has been opened in a new tab. Please complete your submission there."
        );
    }
}
