use tracing::instrument;

use crate::{
    environment::{Environment, FORM_OPENED},
    form::FormState,
    target::PrefillTarget,
};

/// Sends `state` to the external form: opens the prefilled form in a new
/// browsing context, then tells the visitor to finish there.
///
/// Fire and forget. Whether the page loads or the visitor completes it is
/// never observed.
#[instrument(skip_all, fields(form_id = target.form_id()))]
pub fn submit(target: &PrefillTarget, state: &FormState, env: &mut impl Environment) {
    let url = target.prefill_url(state);

    env.open_external(&url);
    env.notify(FORM_OPENED.title, FORM_OPENED.description);

    tracing::info!("Opened prefilled contact form");
}

#[cfg(test)]
mod test {
    use url::Url;

    use super::*;
    use crate::{
        environment::{
            test::{Effect, RecordingEnvironment},
            Notification,
        },
        form::{ContactForm, FormField},
    };

    #[test]
    fn opens_then_notifies_once() {
        let target = PrefillTarget::default();
        let state = FormState {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "+911234567890".into(),
            company: "Acme".into(),
            message: "Hello there".into(),
        };
        let mut env = RecordingEnvironment::default();

        submit(&target, &state, &mut env);

        assert_eq!(
            env.effects,
            vec![
                Effect::Opened(target.prefill_url(&state)),
                Effect::Notified(Notification::from(&FORM_OPENED)),
            ]
        );
    }

    #[test]
    fn each_click_is_one_open_and_one_notification() {
        let mut form = ContactForm::new(PrefillTarget::default());
        let mut env = RecordingEnvironment::default();

        form.update_field(FormField::Name, "First");
        form.submit(&mut env);
        form.update_field(FormField::Name, "Second");
        form.submit(&mut env);

        let opened: Vec<&Url> = env
            .effects
            .iter()
            .filter_map(|e| match e {
                Effect::Opened(url) => Some(url),
                Effect::Notified(_) => None,
            })
            .collect();

        assert_eq!(env.effects.len(), 4);
        assert!(matches!(env.effects[1], Effect::Notified(_)));
        assert!(matches!(env.effects[3], Effect::Notified(_)));
        assert!(opened[0].as_str().contains("entry.274608449=First&"));
        assert!(opened[1].as_str().contains("entry.274608449=Second&"));
        assert!(form.state().is_empty());
    }

    #[test]
    fn second_submit_sends_an_empty_form() {
        let mut form = ContactForm::new(PrefillTarget::default());
        let mut env = RecordingEnvironment::default();

        form.update_field(FormField::Message, "Hello");
        form.submit(&mut env);
        form.submit(&mut env);

        let Effect::Opened(url) = &env.effects[2] else {
            panic!("expected an open, got {:?}", env.effects[2]);
        };
        assert!(url.as_str().ends_with("&entry.310120251="));
    }
}
