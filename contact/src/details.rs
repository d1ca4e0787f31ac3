//! The static half of the contact page: how to reach us outside the form.

/// Icons are Font Awesome class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub title: &'static str,
    pub details: &'static str,
    pub action: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const MAP_ANCHOR: &str = "map";

pub const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        title: "Call Us",
        details: "+91 7982265361",
        action: "tel:+917982265361",
        icon: "fa-solid fa-phone",
    },
    ContactInfo {
        title: "Email Us",
        details: "vyapaargroww@gmail.com",
        action: "mailto:vyapaargroww@gmail.com",
        icon: "fa-solid fa-envelope",
    },
    ContactInfo {
        title: "Visit Us",
        details: "Hari Nagar Ashram, New Delhi, Delhi 110014",
        action: "#map",
        icon: "fa-solid fa-location-dot",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/ca_mansi/",
        icon: "fa-brands fa-instagram",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/mansi-gupta-a5aa28232/",
        icon: "fa-brands fa-linkedin",
    },
];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d14010.144763288136!2d77.2504222!3d28.5829221!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x390ce2ea9b1db00b%3A0xfdf0918fdf34fbb0!2sAshram%2C%20New%20Delhi%2C%20Delhi%20110014%2C%20India!5e0!3m2!1sen!2sin!4v1718878765432!5m2!1sen!2sin";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn visit_us_points_at_the_map() {
        let visit = CONTACT_INFO
            .iter()
            .find(|info| info.title == "Visit Us")
            .unwrap();

        assert_eq!(visit.action, format!("#{MAP_ANCHOR}"));
    }

    #[test]
    fn social_links_are_https() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{} is not https", link.name);
        }
    }
}
