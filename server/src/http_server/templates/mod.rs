use maud::{html, Markup, DOCTYPE};

pub(crate) mod buttons;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod toast;

pub const MAX_WIDTH_CONTAINER_CLASSES: &str = "container mx-auto px-6";

pub fn head(title: &str, canonical_url: Option<&str>) -> Markup {
    html! {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";

        title { (title) " | Vyapaar Groww" }

        @if let Some(canonical_url) = canonical_url {
          link rel="canonical" href=(canonical_url);
        }

        script src="https://cdn.tailwindcss.com" {}

        link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
      }
    }
}

pub fn base(title: &str, canonical_url: Option<&str>, inner: Markup) -> Markup {
    html! {
      (DOCTYPE)
      html lang="en" {
        (head(title, canonical_url))

        body class="min-h-screen flex flex-col bg-gray-50 text-gray-800 font-sans" {
          (header::header())

          main class="flex-grow" {
            (inner)
          }

          (footer::footer())
        }
      }
    }
}
