//! Fixed, ready-made button sets for common bot menus.
//!
//! The sets are static tables; changing a label, id or link means editing the
//! table below. URL entries get a fresh timestamp-derived id on every call.

use std::str::FromStr;

use crate::models::{Button, ButtonType};
use crate::util::timestamp_id;

#[derive(Debug, Clone, Copy)]
enum Action {
    Reply(&'static str),
    Link(&'static str),
}

type Entry = (&'static str, Action);

const HELP: [Entry; 4] = [
    ("📜 Commands", Action::Reply("help_commands")),
    ("❓ How to use", Action::Reply("help_usage")),
    (
        "⭐ Star on GitHub",
        Action::Link("https://github.com/PrinceTech-org"),
    ),
    ("👨‍💻 Contact", Action::Reply("help_contact")),
];

const DOWNLOAD: [Entry; 4] = [
    ("🎬 Video", Action::Reply("download_video")),
    ("🎵 Audio", Action::Reply("download_audio")),
    ("📷 Image", Action::Reply("download_image")),
    ("📄 Document", Action::Reply("download_doc")),
];

const SOCIAL: [Entry; 4] = [
    ("📘 Facebook", Action::Link("https://facebook.com/princetechn")),
    ("📸 Instagram", Action::Link("https://instagram.com/princetechn")),
    ("🐦 Twitter", Action::Link("https://twitter.com/princetechn")),
    ("📹 YouTube", Action::Link("https://youtube.com/princetechn")),
];

const MENU_NAV: [Entry; 4] = [
    ("⬅️ Back", Action::Reply("menu_back")),
    ("🏠 Home", Action::Reply("menu_home")),
    ("🔄 Refresh", Action::Reply("menu_refresh")),
    ("❌ Close", Action::Reply("menu_close")),
];

fn build(entries: &[Entry]) -> Vec<Button> {
    entries
        .iter()
        .map(|(label, action)| match action {
            Action::Reply(id) => {
                Button::new(ButtonType::QuickReply, id.to_string(), label.to_string())
            }
            Action::Link(url) => {
                let mut button =
                    Button::new(ButtonType::Url, timestamp_id("url"), label.to_string());
                button.url = Some(url.to_string());
                button
            }
        })
        .collect()
}

pub fn help_buttons() -> Vec<Button> {
    build(&HELP)
}

pub fn download_buttons() -> Vec<Button> {
    build(&DOWNLOAD)
}

pub fn social_buttons() -> Vec<Button> {
    build(&SOCIAL)
}

pub fn menu_nav_buttons() -> Vec<Button> {
    build(&MENU_NAV)
}

/// Named preset, as selected by the command line `--preset=` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Help,
    Download,
    Social,
    MenuNav,
}

impl Preset {
    pub fn buttons(self) -> Vec<Button> {
        match self {
            Preset::Help => help_buttons(),
            Preset::Download => download_buttons(),
            Preset::Social => social_buttons(),
            Preset::MenuNav => menu_nav_buttons(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "help" => Ok(Preset::Help),
            "download" => Ok(Preset::Download),
            "social" => Ok(Preset::Social),
            "menu" | "menu_nav" | "menu-nav" => Ok(Preset::MenuNav),
            other => Err(format!(
                "unknown preset '{other}' (expected help, download, social or menu)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_set_has_four_labelled_buttons() {
        for set in [
            help_buttons(),
            download_buttons(),
            social_buttons(),
            menu_nav_buttons(),
        ] {
            assert_eq!(set.len(), 4);
            assert!(set
                .iter()
                .all(|b| !b.display_text().is_empty() && !b.button_id.is_empty()));
        }
    }

    #[test]
    fn help_set_mixes_reply_and_url() {
        let kinds: Vec<_> = help_buttons().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ButtonType::QuickReply,
                ButtonType::QuickReply,
                ButtonType::Url,
                ButtonType::QuickReply
            ]
        );
        assert_eq!(
            help_buttons()[2].url.as_deref(),
            Some("https://github.com/PrinceTech-org")
        );
    }

    #[test]
    fn url_entries_carry_only_a_url() {
        for b in social_buttons() {
            assert_eq!(b.kind, ButtonType::Url);
            assert!(b.url.is_some());
            assert!(b.phone_number.is_none() && b.native_flow_info.is_none());
        }
    }

    #[test]
    fn preset_names_parse() {
        assert_eq!("Help".parse::<Preset>(), Ok(Preset::Help));
        assert_eq!("menu-nav".parse::<Preset>(), Ok(Preset::MenuNav));
        assert!("everything".parse::<Preset>().is_err());
        assert_eq!(Preset::Download.buttons()[3].button_id, "download_doc");
    }
}
