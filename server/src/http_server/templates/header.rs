use maud::{html, Markup, Render};

use super::MAX_WIDTH_CONTAINER_CLASSES;

struct HeaderLink {
    href: &'static str,
    text: &'static str,
}

impl Render for HeaderLink {
    fn render(&self) -> Markup {
        html! {
          li ."mx-4" {
            a href=(self.href) class="hover:text-blue-600 transition-colors" { (self.text) }
          }
        }
    }
}

pub fn header() -> Markup {
    html! {
      header class="bg-white/90 border-b border-gray-200 shadow-sm" {
        div ."flex items-center justify-between py-6 ".(MAX_WIDTH_CONTAINER_CLASSES) {
          a href="/" class="text-2xl font-bold bg-gradient-to-r from-green-600 via-blue-600 to-purple-600 bg-clip-text text-transparent" {
            "Vyapaar Groww"
          }

          nav {
            ul class="flex flex-row items-center font-medium" {
              (HeaderLink { href: "/contact", text: "Contact" })
            }
          }
        }
      }
    }
}
