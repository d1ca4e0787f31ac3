use maud::{html, Markup, Render};

pub struct LinkButton {
    inner: Markup,
    href: String,
    button_type: ButtonType,
    new_tab: bool,
    additional_classes: Option<String>,
}

impl LinkButton {
    pub fn primary(inner: Markup, href: impl Into<String>) -> Self {
        Self {
            inner,
            href: href.into(),
            button_type: ButtonType::Primary,
            new_tab: false,
            additional_classes: None,
        }
    }

    pub fn secondary(inner: Markup, href: impl Into<String>) -> Self {
        Self {
            button_type: ButtonType::Secondary,
            ..Self::primary(inner, href)
        }
    }

    /// Opens the link in a new browsing context, without giving it a handle
    /// back to this page.
    pub fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }

    pub fn with_classes(mut self, classes: &str) -> Self {
        self.additional_classes = Some(classes.to_string());
        self
    }
}

pub enum ButtonType {
    Primary,
    Secondary,
}

impl ButtonType {
    fn classes(&self) -> &str {
        match &self {
            ButtonType::Primary => {
                "bg-gradient-to-r from-green-600 via-blue-600 to-purple-600 text-white"
            }
            ButtonType::Secondary => "bg-white border border-gray-300 text-gray-800",
        }
    }
}

impl Render for LinkButton {
    fn render(&self) -> Markup {
        let mut classes = vec![
            "px-6",
            "py-3",
            "rounded-xl",
            "font-semibold",
            "my-2",
            "inline-block",
            self.button_type.classes(),
        ];

        if let Some(additional_classes) = &self.additional_classes {
            classes.push(additional_classes);
        }
        let classes = classes.join(" ");

        html! {
          @if self.new_tab {
            a href=(self.href) class=(classes) target="_blank" rel="noopener noreferrer" {
              (self.inner)
            }
          } @else {
            a href=(self.href) class=(classes) {
              (self.inner)
            }
          }
        }
    }
}
