use contact::details::SOCIAL_LINKS;
use maud::{html, Markup};

use super::MAX_WIDTH_CONTAINER_CLASSES;

pub fn footer() -> Markup {
    html! {
      footer class="bg-gray-900 text-gray-300 mt-24" {
        div ."flex items-center py-8 ".(MAX_WIDTH_CONTAINER_CLASSES) {
          p { "© Vyapaar Groww" }

          div ."flex-grow" {}

          ul class="flex flex-row items-center space-x-6 text-xl" {
            @for social in SOCIAL_LINKS {
              li {
                a href=(social.url) target="_blank" rel="noopener noreferrer" aria-label=(social.name) {
                  i class=(social.icon) {}
                }
              }
            }
          }
        }
      }
    }
}
