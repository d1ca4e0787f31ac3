use contact::Notification;
use maud::{html, Markup, Render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// A notification pinned to the corner of the page, with an optional action
/// rendered under the description.
pub struct Toast<'a> {
    pub notification: &'a Notification,
    pub kind: ToastKind,
    pub action: Option<Markup>,
}

impl Render for Toast<'_> {
    fn render(&self) -> Markup {
        let (border, role) = match self.kind {
            ToastKind::Info => ("border-blue-500", "status"),
            ToastKind::Error => ("border-red-500", "alert"),
        };

        html! {
          div
            id="toast"
            role=(role)
            aria-live="polite"
            class={ "fixed bottom-6 right-6 z-50 max-w-sm bg-white rounded-2xl shadow-2xl border-l-4 p-6 " (border) }
            {
              h4 class="font-bold text-gray-900" { (self.notification.title) }
              p class="text-gray-600 mt-1" { (self.notification.description) }

              @if let Some(action) = &self.action {
                div class="mt-3" { (action) }
              }
            }
        }
    }
}
