use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form,
};
use contact::{
    details::{CONTACT_INFO, MAP_ANCHOR, MAP_EMBED_URL, SOCIAL_LINKS},
    ContactForm, Environment, FormField, FormState, Notification, PrefillTarget,
};
use maud::{html, Markup, PreEscaped, Render};
use miette::IntoDiagnostic;
use tracing::instrument;
use url::Url;

use crate::{
    http_server::{
        templates::{
            base,
            buttons::LinkButton,
            toast::{Toast, ToastKind},
            MAX_WIDTH_CONTAINER_CLASSES,
        },
        ResponseResult,
    },
    AppConfig,
};

const FORM_ID: &str = "contact-form";

const INPUT_CLASSES: &str = "w-full px-4 py-4 bg-white border rounded-xl text-gray-800 placeholder-gray-500 focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-300";

/// Carries out a submission for an HTTP response: the effects are recorded and
/// rendered into the page the visitor gets back.
#[derive(Debug, Default)]
pub(crate) struct PageEnvironment {
    pub opened: Option<Url>,
    pub notification: Option<Notification>,
}

impl Environment for PageEnvironment {
    fn open_external(&mut self, url: &Url) {
        self.opened = Some(url.clone());
    }

    fn notify(&mut self, title: &str, description: &str) {
        self.notification = Some(Notification::new(title, description));
    }
}

/// Everything the contact page shows that isn't static.
pub(crate) struct ContactPage<'a> {
    pub state: &'a FormState,
    pub notification: Option<(&'a Notification, ToastKind)>,
    pub open: Option<&'a Url>,
    pub invalid: &'a [FormField],
}

impl<'a> ContactPage<'a> {
    pub fn blank(state: &'a FormState) -> Self {
        Self {
            state,
            notification: None,
            open: None,
            invalid: &[],
        }
    }

    pub fn render_page(&self, app: &AppConfig) -> miette::Result<Markup> {
        let opener = open_on_submit(&app.app_url("/contact/prefill"))?;

        let toast = self.notification.map(|(notification, kind)| Toast {
            notification,
            kind,
            action: self.open.map(|url| {
                LinkButton::primary(html! { "Continue to the form" }, url.as_str())
                    .in_new_tab()
                    .with_classes("text-sm")
                    .render()
            }),
        });

        Ok(base(
            "Contact Us",
            Some(app.app_url("/contact").as_str()),
            html! {
              section class="py-24 relative" {
                div class=(MAX_WIDTH_CONTAINER_CLASSES) {
                  div class="grid lg:grid-cols-2 gap-16" {
                    div class="space-y-8" {
                      (contact_info())
                      (social_links())
                      (map())
                    }

                    (self.form())
                  }
                }
              }

              @if let Some(toast) = toast {
                (toast)
              }

              (opener)
            },
        ))
    }

    fn form(&self) -> Markup {
        html! {
          div class="bg-white/90 rounded-3xl p-8 border border-gray-200 shadow-lg" {
            h3 class="text-3xl font-bold mb-8 text-gray-800" { "Send Us a Message" }

            form id=(FORM_ID) method="post" action="/contact" class="space-y-6" {
              div class="grid md:grid-cols-2 gap-6" {
                (self.input(FormField::Name))
                (self.input(FormField::Email))
              }

              div class="grid md:grid-cols-2 gap-6" {
                (self.input(FormField::Phone))
                (self.input(FormField::Company))
              }

              (self.input(FormField::Message))

              button
                type="submit"
                class="w-full bg-gradient-to-r from-green-600 via-blue-600 to-purple-600 text-white py-4 rounded-xl font-bold flex items-center justify-center gap-3 hover:shadow-2xl transition-all duration-500"
                {
                  "Submit Query"
                  i class="fa-solid fa-paper-plane" {}
                }
            }
          }
        }
    }

    fn input(&self, field: FormField) -> Markup {
        let name = field.input_name();
        let value = self.state.get(field);
        let invalid = self.invalid.contains(&field);
        let border = if invalid {
            "border-red-500"
        } else {
            "border-gray-300"
        };

        html! {
          div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-3" {
              (field.label())
              @if field.is_required() { " *" }
            }

            @if field == FormField::Message {
              textarea
                id=(name)
                name=(name)
                rows="5"
                required[field.is_required()]
                aria-invalid=[invalid.then_some("true")]
                placeholder=(placeholder(field))
                class={ (INPUT_CLASSES) " resize-none " (border) }
                { (value) }
            } @else {
              input
                id=(name)
                type=(input_type(field))
                name=(name)
                value=(value)
                required[field.is_required()]
                aria-invalid=[invalid.then_some("true")]
                placeholder=(placeholder(field))
                class={ (INPUT_CLASSES) " " (border) };
            }
          }
        }
    }
}

fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::Email => "email",
        FormField::Phone => "tel",
        FormField::Name | FormField::Company | FormField::Message => "text",
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Your full name",
        FormField::Email => "your@email.com",
        FormField::Phone => "+91 9876543210",
        FormField::Company => "Your company name",
        FormField::Message => "Tell us about your requirements...",
    }
}

fn contact_info() -> Markup {
    html! {
      div class="grid gap-6" {
        @for info in CONTACT_INFO {
          a href=(info.action) class="group flex items-center space-x-6 p-8 bg-white/90 rounded-3xl border border-gray-200 hover:border-gray-300 hover:bg-white transition-all duration-500 shadow-lg hover:shadow-xl" {
            div class="w-16 h-16 bg-gradient-to-br from-blue-600 to-indigo-600 rounded-2xl flex items-center justify-center shadow-lg text-white text-2xl" {
              i class=(info.icon) {}
            }
            div {
              h3 class="font-bold text-xl text-gray-800 mb-1" { (info.title) }
              p class="text-gray-600" { (info.details) }
            }
          }
        }
      }
    }
}

fn social_links() -> Markup {
    html! {
      div class="bg-white/90 rounded-3xl p-8 border border-gray-200 shadow-lg" {
        h3 class="text-2xl font-bold mb-6 text-gray-800" { "Connect With Us" }
        div class="flex gap-4" {
          @for social in SOCIAL_LINKS {
            a
              href=(social.url)
              target="_blank"
              rel="noopener noreferrer"
              aria-label=(social.name)
              class="w-16 h-16 bg-gradient-to-r from-pink-500 to-red-500 rounded-2xl flex items-center justify-center text-white text-2xl hover:shadow-2xl transition-all duration-500"
              {
                i class=(social.icon) {}
              }
          }
        }
      }
    }
}

fn map() -> Markup {
    html! {
      div id=(MAP_ANCHOR) class="bg-white/90 rounded-3xl overflow-hidden border border-gray-200 shadow-lg" {
        iframe
          src=(MAP_EMBED_URL)
          width="100%"
          height="350"
          style="border:0;"
          allowfullscreen
          loading="lazy"
          referrerpolicy="no-referrer-when-downgrade"
          class="w-full"
          {}
      }
    }
}

/// Opens the prefilled Google Form in a new tab from the submit click itself,
/// through `prefill` so the server builds the URL. Popup blockers allow
/// `window.open` during a user gesture but not once the POST response loads.
/// The form still posts as usual and the toast links to the form as well.
fn open_on_submit(prefill: &str) -> miette::Result<Markup> {
    let prefill = serde_json::to_string(prefill).into_diagnostic()?;

    Ok(html! {
      script type="text/javascript" {
        (PreEscaped(format!(
            "document.getElementById('{FORM_ID}').addEventListener('submit', function (event) {{\n\
             \x20 var query = new URLSearchParams(new FormData(event.target)).toString();\n\
             \x20 window.open({prefill} + '?' + query, '_blank', 'noopener');\n\
             }});"
        )))
      }
    })
}

pub(crate) async fn contact_get(State(app): State<AppConfig>) -> ResponseResult<Markup> {
    let state = FormState::default();

    Ok(ContactPage::blank(&state).render_page(&app)?)
}

#[instrument(skip_all)]
pub(crate) async fn contact_post(
    State(app): State<AppConfig>,
    State(target): State<PrefillTarget>,
    Form(state): Form<FormState>,
) -> ResponseResult {
    let missing = state.missing_required();
    if !missing.is_empty() {
        tracing::info!(?missing, "Contact form submitted with required fields blank");

        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        let notification = Notification::new(
            "Missing required fields",
            format!("Please fill in: {}", labels.join(", ")),
        );
        let page = ContactPage {
            state: &state,
            notification: Some((&notification, ToastKind::Error)),
            open: None,
            invalid: &missing,
        };

        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page.render_page(&app)?).into_response());
    }

    let mut form = ContactForm::with_state(target, state);
    let mut env = PageEnvironment::default();
    form.submit(&mut env);

    let page = ContactPage {
        state: form.state(),
        notification: env.notification.as_ref().map(|n| (n, ToastKind::Info)),
        open: env.opened.as_ref(),
        invalid: &[],
    };

    Ok(page.render_page(&app)?.into_response())
}

/// Straight to the prefilled form, for links that carry the fields in the
/// query string.
#[instrument(skip_all)]
pub(crate) async fn prefill_redirect(
    State(target): State<PrefillTarget>,
    Query(state): Query<FormState>,
) -> Redirect {
    Redirect::to(target.prefill_url(&state).as_str())
}
